use super::article::Title;
use super::issue::ScanIssue;
use super::language::Language;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

pub const BERGBEST_OUTPUT_FORMAT_VERSION: &str = "1.0.0";

#[derive(Serialize, Debug)]
pub struct Output {
    pub headers: Vec<Header>,
    pub yearbooks: Vec<YearbookReport>,
}

#[derive(Serialize, Debug)]
pub struct Header {
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub duration: f64,
    pub extra_data: ExtraData,
    pub errors: Vec<String>,
    pub output_format_version: String,
}

#[derive(Serialize, Debug)]
pub struct ExtraData {
    pub years_requested: Vec<u16>,
    pub yearbooks_processed: usize,
    pub article_pairs_count: usize,
    pub candidate_sentences_count: usize,
    pub source_language: Language,
    pub target_language: Language,
    pub system_environment: SystemEnvironment,
}

#[derive(Serialize, Debug)]
pub struct SystemEnvironment {
    pub operating_system: Option<String>,
    pub cpu_architecture: String,
    pub platform: String,
    pub rust_version: String,
}

/// Everything found for one document pair (one yearbook year).
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct YearbookReport {
    /// Yearbook identifier from the book's `id` attribute.
    pub yearbook: String,
    pub year: u16,
    pub article_pairs: Vec<ArticlePairReport>,
    pub issues: Vec<ScanIssue>,
}

impl YearbookReport {
    pub fn candidate_count(&self) -> usize {
        self.article_pairs.iter().map(|p| p.candidates.len()).sum()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ArticlePairReport {
    pub yearbook: String,
    /// 1-based, in source-edition article order.
    pub pair_ordinal: usize,
    pub source_article_id: String,
    pub target_article_id: String,
    pub source_title: Title,
    pub target_title: Title,
    pub source_language: Language,
    pub target_language: Language,
    pub source_sentences_count: usize,
    pub target_sentences_count: usize,
    pub candidates: Vec<CandidateSentence>,
    /// Lemmas of verb-tagged tokens in co-occurrence sentences, for tuning the
    /// ascent vocabulary.
    pub observed_verbs: BTreeMap<Language, Vec<String>>,
}

/// A sentence mentioning a mountain and a person together with an ascent verb.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CandidateSentence {
    pub language: Language,
    pub sentence_ordinal: String,
    pub sentence_id: String,
    pub text: String,
    pub matched_lemmas: Vec<String>,
}

impl fmt::Display for CandidateSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] sentence {} ({}): {}",
            self.language,
            self.sentence_ordinal,
            self.matched_lemmas.join(", "),
            self.text
        )
    }
}

impl fmt::Display for ArticlePairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(72))?;
        writeln!(f, "Article year: {}", self.yearbook)?;
        writeln!(f, "Article pair: {}", self.pair_ordinal)?;
        writeln!(f, "Article name: {}", self.source_title)?;
        writeln!(
            f,
            "Number of sentences ({}): {}",
            self.source_language.english_name(),
            self.source_sentences_count
        )?;
        writeln!(f, "{}", " - ".repeat(24))?;
        writeln!(f, "Article name: {}", self.target_title)?;
        write!(
            f,
            "Number of sentences ({}): {}",
            self.target_language.english_name(),
            self.target_sentences_count
        )?;
        for candidate in &self.candidates {
            write!(f, "\n  {}", candidate)?;
        }
        Ok(())
    }
}
