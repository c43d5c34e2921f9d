use crate::alignment::{ArticlePairStore, align_articles};
use crate::corpus::{DocumentPairFiles, Edition, locate_document_pair, read_edition};
use crate::detection::{AscentVocabulary, CandidateSentenceDetector};
use crate::entities::EntityMentionIndex;
use crate::models::{ArticlePairReport, LanguagePair, ScanIssue, YearbookReport};
use crate::scanner::ProcessResult;
use anyhow::{Error, anyhow};
use indicatif::ProgressBar;
use log::{info, warn};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Process every requested year found under `xml_dir`.
///
/// Years are independent and run in parallel; results come back in the order
/// of `years`. Years without a complete bilingual edition are skipped with an
/// issue. Fails only if no requested year could be processed.
pub fn process<P: AsRef<Path>>(
    xml_dir: P,
    years: &[u16],
    languages: LanguagePair,
    vocabulary: &AscentVocabulary,
    progress_bar: Arc<ProgressBar>,
) -> Result<ProcessResult, Error> {
    let xml_dir = xml_dir.as_ref();

    let outcomes: Vec<Result<YearbookReport, ScanIssue>> = years
        .par_iter()
        .map(|&year| {
            let outcome = process_year(xml_dir, year, languages, vocabulary);
            progress_bar.inc(1);
            outcome
        })
        .collect();

    let mut yearbooks = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(report) => yearbooks.push(report),
            Err(issue) => {
                warn!("{}", issue);
                skipped.push(issue);
            }
        }
    }

    if yearbooks.is_empty() && !years.is_empty() {
        return Err(anyhow!(
            "None of the {} requested yearbook(s) is available in {:?}",
            years.len(),
            xml_dir
        ));
    }

    Ok(ProcessResult { yearbooks, skipped })
}

/// Locate, read and cross-reference one year.
pub fn process_year(
    xml_dir: &Path,
    year: u16,
    languages: LanguagePair,
    vocabulary: &AscentVocabulary,
) -> Result<YearbookReport, ScanIssue> {
    let files = locate_document_pair(xml_dir, year, languages)?;
    process_document_pair(&files, languages, vocabulary)
}

pub fn process_document_pair(
    files: &DocumentPairFiles,
    languages: LanguagePair,
    vocabulary: &AscentVocabulary,
) -> Result<YearbookReport, ScanIssue> {
    let year = files.year;
    let unreadable = |path: &Path, e: Error| ScanIssue::UnreadableEdition {
        year,
        path: path.to_string_lossy().to_string(),
        reason: format!("{:#}", e),
    };

    let source = read_edition(&files.source_edition)
        .map_err(|e| unreadable(files.source_edition.as_path(), e))?;
    let target = read_edition(&files.target_edition)
        .map_err(|e| unreadable(files.target_edition.as_path(), e))?;

    let yearbook = if source.yearbook.is_empty() {
        year.to_string()
    } else {
        source.yearbook.clone()
    };

    let mut entities = EntityMentionIndex::new(&yearbook);
    let mut issues = entities
        .add_file(languages.source, &files.source_ner)
        .map_err(|e| unreadable(files.source_ner.as_path(), e))?;
    issues.extend(
        entities
            .add_file(languages.target, &files.target_ner)
            .map_err(|e| unreadable(files.target_ner.as_path(), e))?,
    );

    let mut report = cross_reference(year, &source, &target, &entities, languages, vocabulary);
    issues.append(&mut report.issues);
    report.issues = issues;
    Ok(report)
}

/// Align the two editions and run candidate detection over every pair.
///
/// Pure with respect to its inputs: the same editions and entities always
/// give the same report.
pub fn cross_reference(
    year: u16,
    source: &Edition,
    target: &Edition,
    entities: &EntityMentionIndex,
    languages: LanguagePair,
    vocabulary: &AscentVocabulary,
) -> YearbookReport {
    let yearbook = entities.yearbook().to_string();

    let alignment = align_articles(&source.articles);
    let (store, mut issues) =
        ArticlePairStore::new(&yearbook, languages, &source.articles, &target.articles);
    let (pairs, pair_issues) = store.materialize(&alignment);
    issues.extend(pair_issues);

    info!(
        "Yearbook {}: Article pairs read. Article pair count: {}",
        yearbook,
        pairs.len()
    );

    let detector = CandidateSentenceDetector::new(vocabulary);
    let article_pairs: Vec<ArticlePairReport> = pairs
        .iter()
        .enumerate()
        .map(|(index, pair)| {
            let detection = detector.detect_pair(*pair, languages, entities);

            let mut observed_verbs = BTreeMap::new();
            observed_verbs.insert(languages.source, detection.source.observed_verbs);
            observed_verbs.insert(languages.target, detection.target.observed_verbs);

            let mut candidates = detection.source.candidates;
            candidates.extend(detection.target.candidates);

            ArticlePairReport {
                yearbook: yearbook.clone(),
                pair_ordinal: index + 1,
                source_article_id: pair.source.id.clone(),
                target_article_id: pair.target.id.clone(),
                source_title: pair.source.title.clone(),
                target_title: pair.target.title.clone(),
                source_language: languages.source,
                target_language: languages.target,
                source_sentences_count: pair.source.sentences.len(),
                target_sentences_count: pair.target.sentences.len(),
                candidates,
                observed_verbs,
            }
        })
        .collect();

    YearbookReport {
        yearbook,
        year,
        article_pairs,
        issues,
    }
}
