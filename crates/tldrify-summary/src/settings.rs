//! Summarization settings chosen in the settings panel.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest selectable word budget.
pub const MIN_WORDS: u32 = 100;
/// Largest selectable word budget.
pub const MAX_WORDS: u32 = 500;
/// Granularity of the word budget slider.
pub const WORDS_STEP: u32 = 100;
/// Word budget of fresh settings.
pub const DEFAULT_WORDS: u32 = 200;

/// A settings value received from a form control was not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownOption {
    /// Which setting was being parsed.
    pub kind: &'static str,
    /// The rejected value.
    pub value: String,
}

/// The model that produces the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Model {
    #[default]
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,
    #[serde(rename = "gemini-2.0-flash")]
    Gemini20Flash,
    #[serde(rename = "gpt-5-nano")]
    Gpt5Nano,
}

impl Model {
    /// Every model in menu order.
    pub const ALL: [Self; 3] = [Self::Gemini25Flash, Self::Gemini20Flash, Self::Gpt5Nano];

    /// Wire and form-control value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gemini25Flash => "gemini-2.5-flash",
            Self::Gemini20Flash => "gemini-2.0-flash",
            Self::Gpt5Nano => "gpt-5-nano",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gemini25Flash => "Gemini 2.5 Flash",
            Self::Gemini20Flash => "Gemini 2.0 Flash",
            Self::Gpt5Nano => "GPT 5 (coming soon)",
        }
    }

    /// Whether the model can be picked in the menu.
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        !matches!(self, Self::Gpt5Nano)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Model {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "model",
                value: s.to_owned(),
            })
    }
}

/// Tone of the generated summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingStyle {
    #[default]
    Concise,
    Formal,
    Technical,
    Creative,
    Scientific,
}

impl WritingStyle {
    /// Every style in menu order.
    pub const ALL: [Self; 5] = [
        Self::Concise,
        Self::Formal,
        Self::Technical,
        Self::Creative,
        Self::Scientific,
    ];

    /// Wire and form-control value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Concise => "concise",
            Self::Formal => "formal",
            Self::Technical => "technical",
            Self::Creative => "creative",
            Self::Scientific => "scientific",
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Concise => "Concise",
            Self::Formal => "Formal",
            Self::Technical => "Technical",
            Self::Creative => "Creative",
            Self::Scientific => "Scientific",
        }
    }
}

impl fmt::Display for WritingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WritingStyle {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "writing style",
                value: s.to_owned(),
            })
    }
}

/// Settings sent with each summarization request and stored with the
/// resulting record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub model: Model,
    pub writing_style: WritingStyle,
    pub max_words: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            writing_style: WritingStyle::default(),
            max_words: DEFAULT_WORDS,
        }
    }
}

impl Settings {
    /// JSON text for the `settings` form field.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.model, Model::Gemini25Flash);
        assert_eq!(settings.writing_style, WritingStyle::Concise);
        assert_eq!(settings.max_words, 200);
    }

    #[test]
    fn json_uses_camel_case_and_wire_values() {
        let settings = Settings {
            model: Model::Gemini20Flash,
            writing_style: WritingStyle::Scientific,
            max_words: 300,
        };
        assert_eq!(
            settings.to_json().unwrap(),
            r#"{"model":"gemini-2.0-flash","writingStyle":"scientific","maxWords":300}"#
        );
    }

    #[test]
    fn json_round_trips() {
        let json = r#"{"model":"gpt-5-nano","writingStyle":"formal","maxWords":500}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.model, Model::Gpt5Nano);
        assert_eq!(settings.writing_style, WritingStyle::Formal);
        assert_eq!(settings.to_json().unwrap(), json);
    }

    #[test]
    fn parse_form_values() {
        for model in Model::ALL {
            assert_eq!(model.as_str().parse::<Model>().unwrap(), model);
        }
        for style in WritingStyle::ALL {
            assert_eq!(style.to_string().parse::<WritingStyle>().unwrap(), style);
        }
        let err = "gpt-4".parse::<Model>().unwrap_err();
        assert_eq!(err.to_string(), "unknown model \"gpt-4\"");
    }

    #[test]
    fn only_nano_is_unselectable() {
        let unselectable: Vec<_> = Model::ALL
            .into_iter()
            .filter(|m| !m.is_selectable())
            .collect();
        assert_eq!(unselectable, [Model::Gpt5Nano]);
    }
}
