//! Pairing articles of a source edition with their translations in the
//! target edition.

mod aligner;
mod store;

pub use aligner::{ArticleAlignment, align_articles};
pub use store::{ArticlePair, ArticlePairStore, ArticlesById};
