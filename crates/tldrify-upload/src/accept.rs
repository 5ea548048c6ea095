//! Accepted file type patterns.
//!
//! An accept spec is the comma-separated list used by the HTML `accept`
//! attribute, e.g. `image/*,.pdf,application/json`. The whole-string
//! wildcard `*` accepts everything.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// One pattern from an accept spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptPattern {
    /// `.ext`: case-insensitive filename suffix (stored with the dot).
    Extension(String),
    /// `type/*`: mime-type prefix (stored without the `*`, e.g. `image/`).
    MimePrefix(String),
    /// Any other pattern: exact mime-type match.
    Exact(String),
}

impl AcceptPattern {
    /// Classify a single trimmed pattern.
    #[must_use]
    pub fn parse(pattern: &str) -> Self {
        if pattern.starts_with('.') {
            Self::Extension(pattern.to_owned())
        } else if let Some(prefix) = pattern.strip_suffix('*').filter(|p| p.ends_with('/')) {
            Self::MimePrefix(prefix.to_owned())
        } else {
            Self::Exact(pattern.to_owned())
        }
    }

    /// Whether a file with this `name` and `mime` type matches the pattern.
    #[must_use]
    pub fn matches(&self, name: &str, mime: &str) -> bool {
        match self {
            Self::Extension(ext) => name.to_lowercase().ends_with(&ext.to_lowercase()),
            Self::MimePrefix(prefix) => mime.starts_with(prefix.as_str()),
            Self::Exact(exact) => mime == exact,
        }
    }
}

impl fmt::Display for AcceptPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extension(ext) => f.write_str(ext),
            Self::MimePrefix(prefix) => write!(f, "{prefix}*"),
            Self::Exact(exact) => f.write_str(exact),
        }
    }
}

/// Parsed accept spec.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AcceptSpec {
    /// The wildcard `*`: every file type is accepted.
    #[default]
    Any,
    /// A file is accepted when at least one pattern matches.
    Patterns(Vec<AcceptPattern>),
}

impl AcceptSpec {
    /// Whether a file with this `name` and `mime` type is accepted.
    #[must_use]
    pub fn accepts(&self, name: &str, mime: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Patterns(patterns) => patterns.iter().any(|p| p.matches(name, mime)),
        }
    }
}

impl FromStr for AcceptSpec {
    type Err = Infallible;

    /// Parse an accept spec.
    ///
    /// Only the exact string `*` is the wildcard; a `*` inside a list is
    /// treated as an exact mime type. An empty segment is kept as an
    /// exact match on the empty mime type, which browsers report for
    /// unknown files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            return Ok(Self::Any);
        }
        let patterns = s
            .split(',')
            .map(str::trim)
            .map(AcceptPattern::parse)
            .collect();
        Ok(Self::Patterns(patterns))
    }
}

impl From<&str> for AcceptSpec {
    fn from(s: &str) -> Self {
        let Ok(spec) = s.parse::<Self>();
        spec
    }
}

impl fmt::Display for AcceptSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Patterns(patterns) => {
                for (i, pattern) in patterns.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{pattern}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_accepts_everything() {
        let spec = AcceptSpec::from("*");
        assert_eq!(spec, AcceptSpec::Any);
        assert!(spec.accepts("anything.bin", "application/octet-stream"));
        assert!(spec.accepts("", ""));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let spec = AcceptSpec::from(".PDF");
        assert!(spec.accepts("report.pdf", ""));
        assert!(spec.accepts("REPORT.Pdf", "application/pdf"));
        assert!(!spec.accepts("report.pdf.txt", "text/plain"));
    }

    #[test]
    fn mime_prefix_requires_slash_boundary() {
        let spec = AcceptSpec::from("image/*");
        assert!(spec.accepts("a.png", "image/png"));
        assert!(!spec.accepts("a.txt", "text/plain"));
        // "imagery" does not start with "image/".
        assert!(!spec.accepts("a", "imagery/x"));
    }

    #[test]
    fn exact_mime_match() {
        let spec = AcceptSpec::from("application/json");
        assert!(spec.accepts("data", "application/json"));
        assert!(!spec.accepts("data.json", "application/json5"));
    }

    #[test]
    fn list_is_trimmed_and_any_pattern_suffices() {
        let spec = AcceptSpec::from(" image/* , .md ");
        assert_eq!(
            spec,
            AcceptSpec::Patterns(vec![
                AcceptPattern::MimePrefix("image/".into()),
                AcceptPattern::Extension(".md".into()),
            ])
        );
        assert!(spec.accepts("notes.MD", "text/markdown"));
        assert!(spec.accepts("photo", "image/jpeg"));
        assert!(!spec.accepts("notes.txt", "text/plain"));
    }

    #[test]
    fn empty_segment_matches_unknown_mime() {
        let spec = AcceptSpec::from("image/*,");
        assert_eq!(
            spec,
            AcceptSpec::Patterns(vec![
                AcceptPattern::MimePrefix("image/".into()),
                AcceptPattern::Exact(String::new()),
            ])
        );
        assert!(spec.accepts("notes", ""));
        assert!(spec.accepts("photo", "image/png"));
        assert!(!spec.accepts("notes.txt", "text/plain"));
    }

    #[test]
    fn empty_spec_accepts_only_unknown_mime() {
        let spec = AcceptSpec::from("");
        assert!(spec.accepts("blob", ""));
        assert!(!spec.accepts("a.png", "image/png"));
    }

    #[test]
    fn star_inside_list_is_not_a_wildcard() {
        let spec = AcceptSpec::from("image/*,*");
        assert!(!spec.accepts("a.txt", "text/plain"));
    }

    #[test]
    fn display_reproduces_normalized_spec() {
        let spec = AcceptSpec::from("image/*, .pdf,text/plain");
        assert_eq!(spec.to_string(), "image/*,.pdf,text/plain");
        assert_eq!(AcceptSpec::Any.to_string(), "*");
    }
}
