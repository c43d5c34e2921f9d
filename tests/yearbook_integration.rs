use bergbest::corpus::discover_years;
use bergbest::models::{Language, LanguagePair, ScanIssue, YearbookReport};
use bergbest::scanner::process_year;
use bergbest::{AscentVocabulary, process};
use indicatif::ProgressBar;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

const XML_DIR: &str = "testdata/yearbooks";

fn run(xml_dir: &Path, years: &[u16], vocabulary: &AscentVocabulary) -> bergbest::ProcessResult {
    process(
        xml_dir,
        years,
        LanguagePair::default(),
        vocabulary,
        Arc::new(ProgressBar::hidden()),
    )
    .expect("Processing should succeed")
}

fn yearbook_1960() -> YearbookReport {
    let result = run(Path::new(XML_DIR), &[1960], &AscentVocabulary::default());
    assert!(result.skipped.is_empty());
    assert_eq!(result.yearbooks.len(), 1);
    result.yearbooks.into_iter().next().unwrap()
}

/// Copy the 1960 fixtures into a scratch directory.
fn scratch_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    for entry in fs::read_dir(XML_DIR).unwrap() {
        let path = entry.unwrap().path();
        fs::copy(&path, dir.path().join(path.file_name().unwrap())).unwrap();
    }
    dir
}

#[test]
fn test_article_pairs_follow_translation_references() {
    let report = yearbook_1960();
    assert_eq!(report.yearbook, "1960");
    assert_eq!(report.year, 1960);

    let pairs: Vec<(&str, &str)> = report
        .article_pairs
        .iter()
        .map(|p| (p.source_article_id.as_str(), p.target_article_id.as_str()))
        .collect();
    // Article 2 points at a missing target, article 3 has no translation.
    assert_eq!(pairs, vec![("1", "11"), ("4", "12")]);

    let first = &report.article_pairs[0];
    assert_eq!(first.pair_ordinal, 1);
    assert_eq!(first.source_title.as_str(), "Am Eiger");
    assert_eq!(first.target_title.as_str(), "À l'Eiger");
    assert_eq!(first.source_sentences_count, 2);
    assert_eq!(first.target_sentences_count, 1);
    assert_eq!(report.article_pairs[1].source_title.as_str(), "(no title)");
}

#[test]
fn test_candidates_in_both_languages() {
    let report = yearbook_1960();
    assert_eq!(report.candidate_count(), 2);

    let eiger = &report.article_pairs[0];
    let languages: Vec<Language> = eiger.candidates.iter().map(|c| c.language).collect();
    assert_eq!(languages, vec![Language::De, Language::Fr]);

    assert_eq!(eiger.candidates[0].sentence_ordinal, "1");
    assert_eq!(eiger.candidates[0].matched_lemmas, vec!["erreichen".to_string()]);
    assert_eq!(
        eiger.candidates[0].text,
        "Hans Lauper erreichte den Gipfel des Eigers"
    );
    assert_eq!(eiger.candidates[1].matched_lemmas, vec!["gravir".to_string()]);

    assert_eq!(eiger.observed_verbs[&Language::De], vec!["erreichen".to_string()]);
    assert_eq!(eiger.observed_verbs[&Language::Fr], vec!["gravir".to_string()]);
}

#[test]
fn test_mentions_in_separate_sentences_are_not_candidates() {
    let report = yearbook_1960();
    let matterhorn = &report.article_pairs[1];
    assert!(matterhorn.candidates.is_empty());
    assert!(matterhorn.observed_verbs[&Language::De].is_empty());
}

#[test]
fn test_issues_are_collected() {
    let report = yearbook_1960();
    assert_eq!(report.issues.len(), 2);
    assert!(matches!(
        &report.issues[0],
        ScanIssue::MalformedMention { language: Language::De, .. }
    ));
    assert_eq!(
        report.issues[1],
        ScanIssue::MissingTranslation {
            yearbook: "1960".to_string(),
            source_article_id: "2".to_string(),
            target_article_id: "99".to_string(),
        }
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["issues"][1]["kind"], "missing_translation");
    assert_eq!(json["article_pairs"][0]["source_language"], "de");
}

#[test]
fn test_missing_year_is_skipped() {
    let result = run(Path::new(XML_DIR), &[1960, 1961], &AscentVocabulary::default());
    assert_eq!(result.yearbooks.len(), 1);
    assert_eq!(result.skipped.len(), 1);
    assert!(matches!(
        &result.skipped[0],
        ScanIssue::MissingEdition { year: 1961, path }
            if path.ends_with("SAC-Jahrbuch_1961_de.xml")
    ));
}

#[test]
fn test_multilingual_years_are_skipped() {
    let result = run(Path::new(XML_DIR), &[1900, 1960], &AscentVocabulary::default());
    assert!(matches!(
        &result.skipped[0],
        ScanIssue::MissingEdition { year: 1900, path }
            if path.ends_with("SAC-Jahrbuch_1900_mul.xml")
    ));
}

#[test]
fn test_no_available_year_is_an_error() {
    let result = process(
        XML_DIR,
        &[1961, 1962],
        LanguagePair::default(),
        &AscentVocabulary::default(),
        Arc::new(ProgressBar::hidden()),
    );
    assert!(result.is_err());
}

#[test]
fn test_results_keep_requested_order_and_are_repeatable() {
    let vocabulary = AscentVocabulary::default();
    let first = run(Path::new(XML_DIR), &[1961, 1960], &vocabulary);
    let second = run(Path::new(XML_DIR), &[1961, 1960], &vocabulary);
    assert_eq!(first.yearbooks, second.yearbooks);
    assert_eq!(first.skipped, second.skipped);
}

#[test]
fn test_reversed_languages_find_no_pairs() {
    let result = process(
        XML_DIR,
        &[1960],
        LanguagePair {
            source: Language::Fr,
            target: Language::De,
        },
        &AscentVocabulary::default(),
        Arc::new(ProgressBar::hidden()),
    )
    .unwrap();
    assert!(result.yearbooks[0].article_pairs.is_empty());
}

#[test]
fn test_custom_vocabulary() {
    let vocabulary =
        AscentVocabulary::from_yaml_str("lemmas:\n  de: [besteigen]\n  fr: [gravir]\n").unwrap();
    let result = run(Path::new(XML_DIR), &[1960], &vocabulary);
    let candidates = &result.yearbooks[0].article_pairs[0].candidates;
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].language, Language::Fr);
}

#[test]
fn test_discover_years() {
    assert_eq!(discover_years(Path::new(XML_DIR), Language::De), vec![1960]);
    assert_eq!(discover_years(Path::new(XML_DIR), Language::Fr), vec![1960]);
    assert!(discover_years(Path::new("testdata/nonexistent"), Language::De).is_empty());
}

#[test]
fn test_unreadable_edition_is_reported() {
    let corpus = scratch_corpus();
    fs::write(
        corpus.path().join("SAC-Jahrbuch_1960_fr.xml"),
        "<book id=\"1960_fr\"><article n=\"11\">",
    )
    .unwrap();

    let result = process(
        corpus.path(),
        &[1960],
        LanguagePair::default(),
        &AscentVocabulary::default(),
        Arc::new(ProgressBar::hidden()),
    );
    assert!(result.is_err());

    let issue = process_year(
        corpus.path(),
        1960,
        LanguagePair::default(),
        &AscentVocabulary::default(),
    )
    .unwrap_err();
    assert!(matches!(
        issue,
        ScanIssue::UnreadableEdition { year: 1960, ref path, .. }
            if path.ends_with("SAC-Jahrbuch_1960_fr.xml")
    ));
}
