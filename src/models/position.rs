//! Token positions.
//!
//! Both annotation layers of a yearbook (the word/sentence markup and the NER
//! files) address tokens with strings of the form
//! `<section>-<sentence>-<token>`. The two layers share no object identity, so
//! all correlation between them goes through [`Position`] values parsed from
//! those strings.

use serde::Serialize;
use std::fmt;

/// A parsed token coordinate.
///
/// Only [`Position::sentence`] is used for correlation; `section` and `token`
/// are kept so that positions from different sentences or articles never
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub section: String,
    pub sentence: String,
    pub token: String,
}

/// Why a raw position string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// The string is empty or only whitespace.
    Empty,
    /// Fewer than three dash-delimited fields.
    MissingField { raw: String },
    /// One of the three fields is empty (e.g. `"3--5"`).
    EmptyField { raw: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty position"),
            Self::MissingField { raw } => {
                write!(f, "position '{}' has fewer than three fields", raw)
            }
            Self::EmptyField { raw } => write!(f, "position '{}' has an empty field", raw),
        }
    }
}

impl std::error::Error for PositionError {}

impl Position {
    /// Parse a position string. Surrounding whitespace is ignored, which
    /// matters for comma-separated span attributes like `"3-1-2, 3-1-3"`.
    ///
    /// Anything after the second dash belongs to the token field, so
    /// `"3-12-5-a"` has token `"5-a"`.
    pub fn parse(raw: &str) -> Result<Self, PositionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PositionError::Empty);
        }

        let mut fields = trimmed.splitn(3, '-');
        let (Some(section), Some(sentence), Some(token)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(PositionError::MissingField {
                raw: trimmed.to_string(),
            });
        };

        if section.is_empty() || sentence.is_empty() || token.is_empty() {
            return Err(PositionError::EmptyField {
                raw: trimmed.to_string(),
            });
        }

        Ok(Self {
            section: section.to_string(),
            sentence: sentence.to_string(),
            token: token.to_string(),
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.section, self.sentence, self.token)
    }
}
