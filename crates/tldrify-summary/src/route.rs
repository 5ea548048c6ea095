//! Hash routes: `#/new`, `#/s/{id}`, `#/404`.

use std::fmt;

/// A page of the app, addressed by the URL fragment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Compose a new summary.
    New,
    /// Show a stored summary.
    Summary(String),
    /// Unknown fragment or missing summary.
    NotFound,
}

impl Route {
    /// Parse `location.hash` (with or without the leading `#`).
    ///
    /// Empty path segments are ignored, so `#`, `#/` and `#//new` all
    /// resolve normally. Extra trailing segments are ignored too.
    #[must_use]
    pub fn parse_hash(hash: &str) -> Self {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        let mut parts = hash.split('/').filter(|p| !p.is_empty());
        match (parts.next(), parts.next()) {
            (None | Some("new"), _) => Self::New,
            (Some("s"), Some(id)) => Self::Summary(id.to_owned()),
            _ => Self::NotFound,
        }
    }

    /// The fragment that addresses this route.
    #[must_use]
    pub fn to_hash(&self) -> String {
        match self {
            Self::New => "#/new".to_owned(),
            Self::Summary(id) => format!("#/s/{id}"),
            Self::NotFound => "#/404".to_owned(),
        }
    }

    /// Id of the summary this route shows, if any.
    #[must_use]
    pub fn summary_id(&self) -> Option<&str> {
        match self {
            Self::Summary(id) => Some(id),
            Self::New | Self::NotFound => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hash())
    }
}
