use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Languages with a yearbook edition and NER annotation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    De,
    Fr,
}

impl Language {
    /// ISO 639-1 code, as used in corpus file names.
    pub fn code(self) -> &'static str {
        self.into()
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Language::De => "German",
            Language::Fr => "French",
        }
    }
}

/// The two sides of a document pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    pub fn languages(self) -> [Language; 2] {
        [self.source, self.target]
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            source: Language::De,
            target: Language::Fr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for language in Language::iter() {
            assert_eq!(Language::from_str(language.code()), Ok(language));
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(Language::from_str("it").is_err());
        assert!(Language::from_str("mul").is_err());
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::Fr.to_string(), "fr");
        assert_eq!(Language::De.english_name(), "German");
    }
}
