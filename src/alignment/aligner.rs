use crate::models::Article;
use std::collections::HashMap;

/// Source article id → target article id, in source-edition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleAlignment {
    links: Vec<(String, String)>,
    by_source: HashMap<String, usize>,
}

impl ArticleAlignment {
    /// Record a link. A source id seen before keeps its original place but
    /// takes the new target (last write wins).
    pub fn insert(&mut self, source_id: &str, target_id: &str) {
        match self.by_source.get(source_id) {
            Some(&index) => self.links[index].1 = target_id.to_string(),
            None => {
                self.by_source
                    .insert(source_id.to_string(), self.links.len());
                self.links
                    .push((source_id.to_string(), target_id.to_string()));
            }
        }
    }

    pub fn target_of(&self, source_id: &str) -> Option<&str> {
        self.by_source
            .get(source_id)
            .map(|&index| self.links[index].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.links
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Build the source → target mapping from the source edition's
/// `translation-of` references.
///
/// Articles without a (well-formed) reference are simply left out. Target ids
/// are not checked here; that happens when pairs are materialized.
pub fn align_articles(source_articles: &[Article]) -> ArticleAlignment {
    let mut alignment = ArticleAlignment::default();
    for article in source_articles {
        if let Some(reference) = &article.translation_of {
            alignment.insert(&article.id, &reference.article_id);
        }
    }
    alignment
}
