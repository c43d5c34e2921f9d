use crate::models::{Position, Sentence};
use log::debug;
use std::collections::{BTreeSet, HashSet};

/// Every token position occurring in one article's sentences.
///
/// The set is flat: sentence membership is recovered afterwards from the
/// sentence ordinal of each position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentencePositionIndex {
    positions: HashSet<Position>,
}

impl SentencePositionIndex {
    pub fn build(sentences: &[Sentence]) -> Self {
        let mut positions = HashSet::new();
        for sentence in sentences {
            for token in &sentence.tokens {
                match Position::parse(&token.position) {
                    Ok(position) => {
                        positions.insert(position);
                    }
                    Err(e) => debug!(
                        "Sentence {}: token '{}' skipped: {}",
                        sentence.id, token.text, e
                    ),
                }
            }
        }
        Self { positions }
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.positions.contains(position)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The subset of `entity_positions` that occurs in this article.
    pub fn present<'p>(&self, entity_positions: &'p HashSet<Position>) -> HashSet<&'p Position> {
        entity_positions
            .iter()
            .filter(|position| self.positions.contains(*position))
            .collect()
    }
}

/// Sentence ordinals of a set of positions.
pub fn sentence_ordinals<'p>(
    positions: impl IntoIterator<Item = &'p Position>,
) -> BTreeSet<&'p str> {
    positions
        .into_iter()
        .map(|position| position.sentence.as_str())
        .collect()
}
