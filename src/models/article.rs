//! Articles, sentences and tokens of one yearbook edition.

use super::position::Position;
use serde::Serialize;
use std::fmt;

/// Sentinel title shown for articles without a `tocEntry`.
pub const NO_TITLE: &str = "(no title)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Title {
    Named(String),
    Untitled,
}

impl Serialize for Title {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Title {
    pub fn from_attribute(title: Option<&str>) -> Self {
        match title.map(str::trim) {
            Some(t) if !t.is_empty() => Title::Named(t.to_string()),
            _ => Title::Untitled,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Title::Named(title) => title,
            Title::Untitled => NO_TITLE,
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `translation-of` reference: `<collection>:<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRef {
    /// Parsed but currently unused.
    pub collection: String,
    pub article_id: String,
}

impl TranslationRef {
    /// Returns `None` for references without a `:` or with an empty id.
    ///
    /// The id is the second colon-separated field; anything after a further
    /// colon is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut fields = raw.trim().split(':');
        let collection = fields.next()?;
        let article_id = fields.next()?.trim();
        if article_id.is_empty() {
            return None;
        }
        Some(Self {
            collection: collection.to_string(),
            article_id: article_id.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Raw position string from the `n` attribute.
    pub position: String,
    pub text: String,
    pub lemma: Option<String>,
    pub pos: Option<String>,
}

impl Token {
    pub fn parsed_position(&self) -> Option<Position> {
        Position::parse(&self.position).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub id: String,
    pub tokens: Vec<Token>,
}

impl Sentence {
    /// The sentence ordinal shared by this sentence's token positions.
    ///
    /// Taken from the first token whose position parses; sentences without
    /// such a token fall back to the second dash field of their own id.
    pub fn ordinal(&self) -> Option<String> {
        self.tokens
            .iter()
            .find_map(Token::parsed_position)
            .map(|position| position.sentence)
            .or_else(|| {
                self.id
                    .split('-')
                    .nth(1)
                    .filter(|field| !field.is_empty())
                    .map(str::to_string)
            })
    }

    /// Surface text, tokens joined by single spaces.
    pub fn text(&self) -> String {
        self.tokens
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: Title,
    pub translation_of: Option<TranslationRef>,
    pub sentences: Vec<Sentence>,
}
