use super::aligner::ArticleAlignment;
use crate::models::{Article, Language, LanguagePair, ScanIssue};
use log::{debug, warn};
use std::collections::HashMap;

/// An article and its translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticlePair<'a> {
    pub source: &'a Article,
    pub target: &'a Article,
}

/// Articles of one edition hashed by id.
#[derive(Debug, Clone, Default)]
pub struct ArticlesById<'a> {
    articles: HashMap<&'a str, &'a Article>,
}

impl<'a> ArticlesById<'a> {
    /// Hash `articles` by id. On collisions the later article wins and a
    /// `DuplicateArticleId` issue is returned.
    pub fn new(
        articles: &'a [Article],
        yearbook: &str,
        language: Language,
    ) -> (Self, Vec<ScanIssue>) {
        let mut by_id = HashMap::with_capacity(articles.len());
        let mut issues = Vec::new();

        for article in articles {
            if by_id.insert(article.id.as_str(), article).is_some() {
                let issue = ScanIssue::DuplicateArticleId {
                    yearbook: yearbook.to_string(),
                    language,
                    article_id: article.id.clone(),
                };
                warn!("{}", issue);
                issues.push(issue);
            }
        }

        (Self { articles: by_id }, issues)
    }

    pub fn get(&self, id: &str) -> Option<&'a Article> {
        self.articles.get(id).copied()
    }
}

/// O(1) article lookup for both editions of a document pair.
#[derive(Debug, Clone)]
pub struct ArticlePairStore<'a> {
    yearbook: String,
    source: ArticlesById<'a>,
    target: ArticlesById<'a>,
}

impl<'a> ArticlePairStore<'a> {
    pub fn new(
        yearbook: &str,
        languages: LanguagePair,
        source_articles: &'a [Article],
        target_articles: &'a [Article],
    ) -> (Self, Vec<ScanIssue>) {
        let (source, mut issues) = ArticlesById::new(source_articles, yearbook, languages.source);
        let (target, target_issues) =
            ArticlesById::new(target_articles, yearbook, languages.target);
        issues.extend(target_issues);

        (
            Self {
                yearbook: yearbook.to_string(),
                source,
                target,
            },
            issues,
        )
    }

    /// Resolve every link of `alignment` into an article pair.
    ///
    /// A link to a target id missing from the target edition yields a
    /// `MissingTranslation` issue and no pair; a target already paired with an
    /// earlier source article yields `DuplicateTranslationTarget`. All other
    /// links are unaffected.
    pub fn materialize(
        &self,
        alignment: &ArticleAlignment,
    ) -> (Vec<ArticlePair<'a>>, Vec<ScanIssue>) {
        let mut pairs = Vec::with_capacity(alignment.len());
        let mut issues = Vec::new();
        let mut claimed: HashMap<&str, &str> = HashMap::new();

        for (source_id, target_id) in alignment.iter() {
            let Some(source) = self.source.get(source_id) else {
                continue;
            };
            // A later article with the same id replaced the one holding this link.
            let reference = source.translation_of.as_ref();
            if reference.map(|r| r.article_id.as_str()) != Some(target_id) {
                debug!(
                    "Yearbook {}: article {} no longer refers to {}",
                    self.yearbook, source_id, target_id
                );
                continue;
            }

            let Some(target) = self.target.get(target_id) else {
                let issue = ScanIssue::MissingTranslation {
                    yearbook: self.yearbook.clone(),
                    source_article_id: source_id.to_string(),
                    target_article_id: target_id.to_string(),
                };
                warn!("{}", issue);
                issues.push(issue);
                continue;
            };

            if let Some(previous) = claimed.get(target.id.as_str()) {
                let issue = ScanIssue::DuplicateTranslationTarget {
                    yearbook: self.yearbook.clone(),
                    source_article_id: source_id.to_string(),
                    target_article_id: target_id.to_string(),
                    paired_with: previous.to_string(),
                };
                warn!("{}", issue);
                issues.push(issue);
                continue;
            }
            claimed.insert(target.id.as_str(), source.id.as_str());

            pairs.push(ArticlePair { source, target });
        }

        (pairs, issues)
    }
}
