//! Candidate climb sentences.
//!
//! Per language: positions of mountain and person mentions are intersected
//! with the article's token positions, projected onto sentence ordinals, and
//! the sentences holding both kinds are scanned for an ascent lemma.

use super::sentence_index::{SentencePositionIndex, sentence_ordinals};
use super::vocabulary::AscentVocabulary;
use crate::alignment::ArticlePair;
use crate::entities::EntityMentionIndex;
use crate::models::{CandidateSentence, EntityKind, Language, LanguagePair, Sentence};
use std::collections::{BTreeSet, HashSet};

/// Detection result for one article in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageDetection {
    pub mountain_sentences: BTreeSet<String>,
    pub person_sentences: BTreeSet<String>,
    /// Ordinals of sentences with at least one mountain and one person.
    pub both_sentences: BTreeSet<String>,
    pub candidates: Vec<CandidateSentence>,
    /// Verb lemmas (surface text when the lemma is missing) seen in
    /// `both_sentences`, first occurrence order.
    pub observed_verbs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairDetection {
    pub source: LanguageDetection,
    pub target: LanguageDetection,
}

pub struct CandidateSentenceDetector<'v> {
    vocabulary: &'v AscentVocabulary,
}

impl<'v> CandidateSentenceDetector<'v> {
    pub fn new(vocabulary: &'v AscentVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn detect_pair(
        &self,
        pair: ArticlePair<'_>,
        languages: LanguagePair,
        entities: &EntityMentionIndex,
    ) -> PairDetection {
        PairDetection {
            source: self.detect(languages.source, &pair.source.sentences, entities),
            target: self.detect(languages.target, &pair.target.sentences, entities),
        }
    }

    pub fn detect(
        &self,
        language: Language,
        sentences: &[Sentence],
        entities: &EntityMentionIndex,
    ) -> LanguageDetection {
        let word_positions = SentencePositionIndex::build(sentences);
        if word_positions.is_empty() {
            return LanguageDetection::default();
        }

        let mountains_present =
            word_positions.present(entities.flattened_positions(language, EntityKind::Mountain));
        let persons_present =
            word_positions.present(entities.flattened_positions(language, EntityKind::Person));

        let mountain_sentences = owned(sentence_ordinals(mountains_present));
        let person_sentences = owned(sentence_ordinals(persons_present));
        let both_sentences: BTreeSet<String> = mountain_sentences
            .intersection(&person_sentences)
            .cloned()
            .collect();

        let mut candidates = Vec::new();
        let mut observed_verbs = Vec::new();
        let mut seen_verbs = HashSet::new();

        for sentence in sentences {
            let Some(ordinal) = sentence.ordinal() else {
                continue;
            };
            if !both_sentences.contains(&ordinal) {
                continue;
            }

            let mut matched_lemmas: Vec<String> = Vec::new();
            for token in &sentence.tokens {
                if let Some(lemma) = &token.lemma {
                    if self.vocabulary.is_ascent_lemma(language, lemma)
                        && !matched_lemmas.contains(lemma)
                    {
                        matched_lemmas.push(lemma.clone());
                    }
                }

                if let Some(pos) = &token.pos {
                    if self.vocabulary.is_verb_tag(pos) {
                        let verb = token.lemma.as_ref().unwrap_or(&token.text);
                        if seen_verbs.insert(verb.clone()) {
                            observed_verbs.push(verb.clone());
                        }
                    }
                }
            }

            if !matched_lemmas.is_empty() {
                candidates.push(CandidateSentence {
                    language,
                    sentence_ordinal: ordinal,
                    sentence_id: sentence.id.clone(),
                    text: sentence.text(),
                    matched_lemmas,
                });
            }
        }

        LanguageDetection {
            mountain_sentences,
            person_sentences,
            both_sentences,
            candidates,
            observed_verbs,
        }
    }
}

fn owned(ordinals: BTreeSet<&str>) -> BTreeSet<String> {
    ordinals.into_iter().map(str::to_string).collect()
}
