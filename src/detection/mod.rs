//! Candidate sentence detection: sentence position indexing, the ascent-verb
//! vocabulary, and the co-occurrence detector built on both.

mod detector;
mod sentence_index;
mod vocabulary;

pub use detector::{CandidateSentenceDetector, LanguageDetection, PairDetection};
pub use sentence_index::{SentencePositionIndex, sentence_ordinals};
pub use vocabulary::AscentVocabulary;
