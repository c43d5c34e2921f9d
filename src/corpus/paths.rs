//! File naming of the Text+Berg SAC release.

use crate::models::{Language, LanguagePair, ScanIssue};
use glob::glob;
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use std::path::{Path, PathBuf};

pub const FILENAME_PREFIX: &str = "SAC-Jahrbuch_";
pub const XML_SUFFIX: &str = ".xml";
pub const NER_SUFFIX: &str = "-ner";

/// Yearbooks before this year were published as a single multilingual (`mul`)
/// edition and have no separate language files.
pub const FIRST_BILINGUAL_YEAR: u16 = 1957;

lazy_static! {
    static ref EDITION_FILE_NAME: Regex =
        Regex::new(r"^SAC-Jahrbuch_(\d{4})_([a-z]{2,3})\.xml$").unwrap();
}

/// File name of an edition: `SAC-Jahrbuch_1960_de.xml`, or `..._mul.xml`
/// before 1957.
pub fn edition_file_name(year: u16, language: Language) -> String {
    if year < FIRST_BILINGUAL_YEAR {
        format!("{}{}_mul{}", FILENAME_PREFIX, year, XML_SUFFIX)
    } else {
        format!("{}{}_{}{}", FILENAME_PREFIX, year, language.code(), XML_SUFFIX)
    }
}

pub fn ner_file_name(year: u16, language: Language) -> String {
    format!(
        "{}{}_{}{}{}",
        FILENAME_PREFIX,
        year,
        language.code(),
        NER_SUFFIX,
        XML_SUFFIX
    )
}

/// The four files making up one document pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPairFiles {
    pub year: u16,
    pub source_edition: PathBuf,
    pub target_edition: PathBuf,
    pub source_ner: PathBuf,
    pub target_ner: PathBuf,
}

impl DocumentPairFiles {
    pub fn new(xml_dir: &Path, year: u16, languages: LanguagePair) -> Self {
        Self {
            year,
            source_edition: xml_dir.join(edition_file_name(year, languages.source)),
            target_edition: xml_dir.join(edition_file_name(year, languages.target)),
            source_ner: xml_dir.join(ner_file_name(year, languages.source)),
            target_ner: xml_dir.join(ner_file_name(year, languages.target)),
        }
    }

    fn all(&self) -> [&Path; 4] {
        [
            &self.source_edition,
            &self.target_edition,
            &self.source_ner,
            &self.target_ner,
        ]
    }
}

/// Locate the files of one year, or report the first one that is missing.
pub fn locate_document_pair(
    xml_dir: &Path,
    year: u16,
    languages: LanguagePair,
) -> Result<DocumentPairFiles, ScanIssue> {
    let files = DocumentPairFiles::new(xml_dir, year, languages);
    if year < FIRST_BILINGUAL_YEAR {
        return Err(ScanIssue::MissingEdition {
            year,
            path: files.source_edition.to_string_lossy().to_string(),
        });
    }
    if let Some(missing) = files.all().into_iter().find(|path| !path.is_file()) {
        return Err(ScanIssue::MissingEdition {
            year,
            path: missing.to_string_lossy().to_string(),
        });
    }
    Ok(files)
}

/// Years for which an edition of `language` exists in `xml_dir`, ascending.
pub fn discover_years(xml_dir: &Path, language: Language) -> Vec<u16> {
    let pattern = xml_dir.join(format!(
        "{}*_{}{}",
        FILENAME_PREFIX,
        language.code(),
        XML_SUFFIX
    ));

    let entries = match glob(&pattern.to_string_lossy()) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Invalid corpus directory pattern {:?}: {}", pattern, e);
            return Vec::new();
        }
    };

    let mut years: Vec<u16> = entries
        .filter_map(Result::ok)
        .filter_map(|path| {
            let name = path.file_name()?.to_string_lossy().to_string();
            let captures = EDITION_FILE_NAME.captures(&name)?;
            if &captures[2] != language.code() {
                return None;
            }
            captures[1].parse().ok()
        })
        .collect();
    years.sort_unstable();
    years.dedup();
    years
}
