//! Reading a yearbook edition (`SAC-Jahrbuch_<year>_<lang>.xml`).
//!
//! Layout consumed:
//!
//! ```text
//! <book id="1960_de">
//!   <article n="3" translation-of="SAC-Jahrbuch_1960_fr:5">
//!     <tocEntry title="..."/>
//!     ... <s n="3-1"> ... <w n="3-1-1" lemma="..." pos="...">Text</w> ... </s>
//!   </article>
//! </book>
//! ```

use super::xml::{XmlElement, parse_document};
use crate::models::{Article, Sentence, Title, Token, TranslationRef};
use anyhow::{Context, Result, anyhow};
use log::debug;
use std::fs;
use std::path::Path;

/// All articles of one language edition of a yearbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edition {
    /// The part of `/book/@id` before the first `_`, e.g. `1960`.
    pub yearbook: String,
    pub articles: Vec<Article>,
}

pub fn read_edition(path: &Path) -> Result<Edition> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    parse_edition(&content).with_context(|| format!("Failed to parse {:?}", path))
}

pub fn parse_edition(content: &str) -> Result<Edition> {
    let root = parse_document(content)?;
    edition_from_tree(&root)
}

pub fn edition_from_tree(root: &XmlElement) -> Result<Edition> {
    if root.name != "book" {
        return Err(anyhow!("Expected <book> root element, found <{}>", root.name));
    }

    let yearbook = root
        .attr("id")
        .map(|id| id.split('_').next().unwrap_or(id).to_string())
        .unwrap_or_default();

    let mut articles = Vec::new();
    for (index, element) in root.children("article").enumerate() {
        match read_article(element) {
            Some(article) => articles.push(article),
            None => debug!(
                "Yearbook {}: article #{} has no 'n' attribute, skipped",
                yearbook,
                index + 1
            ),
        }
    }

    Ok(Edition { yearbook, articles })
}

fn read_article(element: &XmlElement) -> Option<Article> {
    let id = element.attr("n")?.trim().to_string();

    let title = Title::from_attribute(
        element
            .child("tocEntry")
            .and_then(|toc_entry| toc_entry.attr("title")),
    );

    let translation_of = element
        .attr("translation-of")
        .and_then(TranslationRef::parse);

    let sentences = element
        .descendants("s")
        .into_iter()
        .map(read_sentence)
        .collect();

    Some(Article {
        id,
        title,
        translation_of,
        sentences,
    })
}

fn read_sentence(element: &XmlElement) -> Sentence {
    let tokens = element
        .descendants("w")
        .into_iter()
        .map(|word| Token {
            position: word.attr("n").unwrap_or_default().to_string(),
            text: word.text().to_string(),
            lemma: non_empty(word.attr("lemma")),
            pos: non_empty(word.attr("pos")),
        })
        .collect();

    Sentence {
        id: element.attr("n").unwrap_or_default().to_string(),
        tokens,
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDITION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<book id="1960_de">
  <article n="1" translation-of="SAC-Jahrbuch_1960_fr:2">
    <tocEntry title="Am Eiger"/>
    <div>
      <p>
        <s n="1-1"><w n="1-1-1" lemma="der" pos="ART">Der</w><w n="1-1-2" lemma="Gipfel" pos="NN">Gipfel</w></s>
        <s n="1-2"><w n="1-2-1">ohne</w></s>
      </p>
    </div>
  </article>
  <article n="2">
    <s n="2-1"><w n="2-1-1" lemma="" pos="NE">Hans</w></s>
  </article>
  <article>
    <tocEntry title="no id"/>
  </article>
</book>"#;

    #[test]
    fn test_parse_edition() {
        let edition = parse_edition(EDITION).unwrap();
        assert_eq!(edition.yearbook, "1960");
        assert_eq!(edition.articles.len(), 2);

        let first = &edition.articles[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.title, Title::Named("Am Eiger".to_string()));
        assert_eq!(
            first.translation_of.as_ref().map(|t| t.article_id.as_str()),
            Some("2")
        );
        assert_eq!(first.sentences.len(), 2);
        assert_eq!(first.sentences[0].tokens[1].lemma.as_deref(), Some("Gipfel"));
        assert_eq!(first.sentences[1].tokens[0].lemma, None);
        assert_eq!(first.sentences[1].tokens[0].pos, None);
    }

    #[test]
    fn test_missing_title_and_translation() {
        let edition = parse_edition(EDITION).unwrap();
        let second = &edition.articles[1];
        assert_eq!(second.title, Title::Untitled);
        assert_eq!(second.translation_of, None);
        assert_eq!(second.sentences[0].tokens[0].lemma, None);
        assert_eq!(second.sentences[0].tokens[0].pos.as_deref(), Some("NE"));
    }

    #[test]
    fn test_wrong_root_is_an_error() {
        assert!(parse_edition("<ner/>").is_err());
    }

    #[test]
    fn test_read_edition_missing_file() {
        let result = read_edition(Path::new("/nonexistent/SAC-Jahrbuch_1960_de.xml"));
        assert!(result.is_err());
    }
}
