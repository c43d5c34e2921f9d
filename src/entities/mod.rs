//! Named-entity mention index of one document pair.
//!
//! Holds the mountains and persons of both language editions and, per
//! language and entity kind, the flattened set of positions they cover. The
//! flattened sets deliberately forget which mention a position belongs to:
//! co-occurrence only asks whether *a* mountain is in a sentence.

mod parse;

pub use parse::{MentionError, parse_ner};

use crate::corpus::{XmlElement, parse_document};
use crate::models::{EditionEntities, EntityKind, Language, Position, ScanIssue};
use anyhow::{Context, Result};
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct EntityMentionIndex {
    yearbook: String,
    editions: HashMap<Language, EditionEntities>,
    flattened: HashMap<(Language, EntityKind), HashSet<Position>>,
    empty: HashSet<Position>,
}

impl EntityMentionIndex {
    pub fn new(yearbook: &str) -> Self {
        Self {
            yearbook: yearbook.to_string(),
            ..Self::default()
        }
    }

    pub fn yearbook(&self) -> &str {
        &self.yearbook
    }

    /// Parse a language's NER tree into the index, replacing earlier data for
    /// that language. Returns the per-record issues found.
    pub fn add_tree(&mut self, language: Language, root: &XmlElement) -> Vec<ScanIssue> {
        let (entities, issues) = parse_ner(root, &self.yearbook, language);
        debug!(
            "Yearbook {} ({}): {} mountain and {} person mentions",
            self.yearbook,
            language,
            entities.count(EntityKind::Mountain),
            entities.count(EntityKind::Person)
        );
        self.insert(language, entities);
        issues
    }

    /// Read and parse a language's NER file into the index.
    pub fn add_file(&mut self, language: Language, path: &Path) -> Result<Vec<ScanIssue>> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let root =
            parse_document(&content).with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(self.add_tree(language, &root))
    }

    pub fn insert(&mut self, language: Language, entities: EditionEntities) {
        for kind in [EntityKind::Mountain, EntityKind::Person] {
            let positions: HashSet<Position> = entities.spans(kind).flatten().cloned().collect();
            self.flattened.insert((language, kind), positions);
        }
        self.editions.insert(language, entities);
    }

    pub fn entities(&self, language: Language) -> Option<&EditionEntities> {
        self.editions.get(&language)
    }

    /// Every position covered by some mention of `kind` in `language`.
    ///
    /// Empty for a language that was never added.
    pub fn flattened_positions(&self, language: Language, kind: EntityKind) -> &HashSet<Position> {
        self.flattened.get(&(language, kind)).unwrap_or(&self.empty)
    }
}
