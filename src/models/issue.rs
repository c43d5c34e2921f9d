//! Per-record data problems found while processing a yearbook.
//!
//! None of these abort a run. They are logged where they occur and collected
//! into the yearbook report so upstream corpus defects can be traced.

use super::entity::EntityKind;
use super::language::Language;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanIssue {
    /// A `translation-of` reference names an article missing from the target edition.
    MissingTranslation {
        yearbook: String,
        source_article_id: String,
        target_article_id: String,
    },
    /// A target article is referenced by more than one source article.
    DuplicateTranslationTarget {
        yearbook: String,
        source_article_id: String,
        target_article_id: String,
        paired_with: String,
    },
    /// Two articles of one edition share an id; the later one is kept.
    DuplicateArticleId {
        yearbook: String,
        language: Language,
        article_id: String,
    },
    /// An entity mention lacks a required field and was dropped.
    MalformedMention {
        yearbook: String,
        language: Language,
        entity: EntityKind,
        /// Mention id if it could be read, otherwise its ordinal in the file.
        mention: String,
        reason: String,
    },
    /// A span entry that is not a usable position; the mention keeps the rest.
    MalformedPosition {
        yearbook: String,
        language: Language,
        entity: EntityKind,
        mention: String,
        raw: String,
        reason: String,
    },
    /// A year without a complete bilingual edition.
    MissingEdition { year: u16, path: String },
    /// An edition file that exists but could not be read as XML.
    UnreadableEdition { year: u16, path: String, reason: String },
}

impl fmt::Display for ScanIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTranslation {
                yearbook,
                source_article_id,
                target_article_id,
            } => write!(
                f,
                "Yearbook {}: article {} is a translation of {}, which does not exist",
                yearbook, source_article_id, target_article_id
            ),
            Self::DuplicateTranslationTarget {
                yearbook,
                source_article_id,
                target_article_id,
                paired_with,
            } => write!(
                f,
                "Yearbook {}: article {} refers to {}, already paired with {}",
                yearbook, source_article_id, target_article_id, paired_with
            ),
            Self::DuplicateArticleId {
                yearbook,
                language,
                article_id,
            } => write!(
                f,
                "Yearbook {} ({}): duplicate article id {}",
                yearbook, language, article_id
            ),
            Self::MalformedMention {
                yearbook,
                language,
                entity,
                mention,
                reason,
            } => write!(
                f,
                "Yearbook {} ({}): {} mention {} skipped: {}",
                yearbook, language, entity, mention, reason
            ),
            Self::MalformedPosition {
                yearbook,
                language,
                entity,
                mention,
                raw,
                reason,
            } => write!(
                f,
                "Yearbook {} ({}): {} mention {} has unusable position '{}': {}",
                yearbook, language, entity, mention, raw, reason
            ),
            Self::MissingEdition { year, path } => {
                write!(f, "Skip (inexistent) yearbook {}: {} not found", year, path)
            }
            Self::UnreadableEdition { year, path, reason } => {
                write!(f, "Skip yearbook {}: cannot read {}: {}", year, path, reason)
            }
        }
    }
}
