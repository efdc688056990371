//! Two-language support (English and Kannada).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "locale_test.rs"]
mod tests;

/// Response language selectable in the voice panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Kn,
}

impl Language {
    /// Short language code, as shown on message badges.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Kn => "kn",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Kn => "ಕನ್ನಡ",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language '{0}' (expected 'en' or 'kn')")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "kn" | "kannada" => Ok(Self::Kn),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// A text available in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Localized {
    pub en: &'static str,
    pub kn: &'static str,
}

impl Localized {
    #[must_use]
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Kn => self.kn,
        }
    }
}
