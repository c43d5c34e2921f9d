//! Ascent-verb vocabularies.
//!
//! Lemmas whose presence in a mountain+person sentence marks it as a climbing
//! candidate, per language, plus the part-of-speech prefixes that identify
//! verb tags (STTS `VVFIN`, `VAINF`, ... and TreeTagger French `VER:...`).

use crate::models::Language;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

const GERMAN_ASCENT_LEMMAS: &[&str] = &[
    "aufsteigen",
    "begehen",
    "besteigen",
    "bezwingen",
    "durchklettern",
    "durchsteigen",
    "emporsteigen",
    "erklettern",
    "erklimmen",
    "erreichen",
    "ersteigen",
    "gelangen",
    "hinaufsteigen",
    "klettern",
    "überschreiten",
];

const FRENCH_ASCENT_LEMMAS: &[&str] = &[
    "atteindre",
    "conquérir",
    "escalader",
    "franchir",
    "gravir",
    "grimper",
    "monter",
    "parvenir",
    "traverser",
    "vaincre",
];

fn default_verb_pos_prefixes() -> Vec<String> {
    vec!["V".to_string()]
}

fn default_lemmas() -> BTreeMap<Language, BTreeSet<String>> {
    let mut lemmas = BTreeMap::new();
    lemmas.insert(
        Language::De,
        GERMAN_ASCENT_LEMMAS.iter().map(|l| l.to_string()).collect(),
    );
    lemmas.insert(
        Language::Fr,
        FRENCH_ASCENT_LEMMAS.iter().map(|l| l.to_string()).collect(),
    );
    lemmas
}

/// Per-language ascent lemmas and verb tag prefixes.
///
/// A YAML file may replace either part; omitted keys keep the built-in lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AscentVocabulary {
    #[serde(default = "default_verb_pos_prefixes")]
    pub verb_pos_prefixes: Vec<String>,
    #[serde(default = "default_lemmas")]
    pub lemmas: BTreeMap<Language, BTreeSet<String>>,
}

impl Default for AscentVocabulary {
    fn default() -> Self {
        Self {
            verb_pos_prefixes: default_verb_pos_prefixes(),
            lemmas: default_lemmas(),
        }
    }
}

impl AscentVocabulary {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Invalid ascent vocabulary")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read vocabulary file {:?}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("In {:?}", path))
    }

    /// Exact, case-sensitive lemma lookup.
    pub fn is_ascent_lemma(&self, language: Language, lemma: &str) -> bool {
        self.lemmas
            .get(&language)
            .is_some_and(|lemmas| lemmas.contains(lemma))
    }

    pub fn is_verb_tag(&self, pos: &str) -> bool {
        self.verb_pos_prefixes
            .iter()
            .any(|prefix| pos.starts_with(prefix.as_str()))
    }

    pub fn lemma_count(&self, language: Language) -> usize {
        self.lemmas.get(&language).map_or(0, BTreeSet::len)
    }
}
