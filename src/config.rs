//! Run configuration resolved from the command line.

use crate::cli::Cli;
use crate::detection::AscentVocabulary;
use crate::models::{Language, LanguagePair};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::str::FromStr;

/// Years covered by the Text+Berg SAC release.
pub const YEARS_ALLOWED: RangeInclusive<u16> = 1864..=2011;

lazy_static! {
    static ref YEARS_ARGUMENT: Regex =
        Regex::new(r"^([12][089][0-9]{2})(?:-([12][089][0-9]{2}))?$").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedLanguage(String),
    SameLanguage(Language),
    MalformedYears(String),
    YearOutOfRange(u16),
    ReversedRange { start: u16, end: u16 },
    Vocabulary(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnsupportedLanguage(code) => {
                write!(f, "Unsupported language '{}' (expected 'de' or 'fr')", code)
            }
            ConfigError::SameLanguage(language) => write!(
                f,
                "Source and target language are both '{}'",
                language.code()
            ),
            ConfigError::MalformedYears(raw) => write!(
                f,
                "Years must be given as YYYY or YYYY-YYYY, got '{}'",
                raw
            ),
            ConfigError::YearOutOfRange(year) => write!(
                f,
                "Year {} is outside of {}-{}",
                year,
                YEARS_ALLOWED.start(),
                YEARS_ALLOWED.end()
            ),
            ConfigError::ReversedRange { start, end } => {
                write!(f, "Year range {}-{} ends before it starts", start, end)
            }
            ConfigError::Vocabulary(reason) => write!(f, "Invalid vocabulary: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {}

/// An inclusive span of yearbook years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

impl YearRange {
    pub fn years(self) -> Vec<u16> {
        (self.start..=self.end).collect()
    }
}

impl FromStr for YearRange {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let captures = YEARS_ARGUMENT
            .captures(raw)
            .ok_or_else(|| ConfigError::MalformedYears(raw.to_string()))?;

        let parse_year = |text: &str| -> Result<u16, ConfigError> {
            let year: u16 = text
                .parse()
                .map_err(|_| ConfigError::MalformedYears(raw.to_string()))?;
            if YEARS_ALLOWED.contains(&year) {
                Ok(year)
            } else {
                Err(ConfigError::YearOutOfRange(year))
            }
        };

        let start = parse_year(&captures[1])?;
        let end = match captures.get(2) {
            Some(end) => parse_year(end.as_str())?,
            None => start,
        };

        if start > end {
            return Err(ConfigError::ReversedRange { start, end });
        }
        Ok(YearRange { start, end })
    }
}

pub fn parse_language(code: &str) -> Result<Language, ConfigError> {
    Language::from_str(&code.trim().to_lowercase())
        .map_err(|_| ConfigError::UnsupportedLanguage(code.to_string()))
}

pub fn parse_language_pair(source: &str, target: &str) -> Result<LanguagePair, ConfigError> {
    let source = parse_language(source)?;
    let target = parse_language(target)?;
    if source == target {
        return Err(ConfigError::SameLanguage(source));
    }
    Ok(LanguagePair { source, target })
}

/// Everything a run needs, validated.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub xml_dir: PathBuf,
    /// `None` means every year found in `xml_dir`.
    pub years: Option<YearRange>,
    pub languages: LanguagePair,
    pub vocabulary: AscentVocabulary,
    pub output_file: PathBuf,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let years = cli.years.as_deref().map(str::parse).transpose()?;
        let languages = parse_language_pair(&cli.source, &cli.target)?;
        let vocabulary = match &cli.vocabulary {
            Some(path) => AscentVocabulary::from_file(path)
                .map_err(|e| ConfigError::Vocabulary(format!("{:#}", e)))?,
            None => AscentVocabulary::default(),
        };

        Ok(RunConfig {
            xml_dir: cli.xml_dir.clone(),
            years,
            languages,
            vocabulary,
            output_file: cli.output_file.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_year() {
        let range: YearRange = "1960".parse().unwrap();
        assert_eq!(range.years(), vec![1960]);
    }

    #[test]
    fn test_year_range() {
        let range: YearRange = "1957-1960".parse().unwrap();
        assert_eq!(range, YearRange { start: 1957, end: 1960 });
        assert_eq!(range.years().len(), 4);
    }

    #[test]
    fn test_malformed_years() {
        for raw in ["", "60", "1960-", "1960-61", "abcd", "1960 - 1961", "3000"] {
            assert!(
                matches!(raw.parse::<YearRange>(), Err(ConfigError::MalformedYears(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_year_out_of_range() {
        assert_eq!(
            "1850".parse::<YearRange>(),
            Err(ConfigError::YearOutOfRange(1850))
        );
        assert_eq!(
            "2010-2015".parse::<YearRange>(),
            Err(ConfigError::YearOutOfRange(2015))
        );
    }

    #[test]
    fn test_reversed_range() {
        assert_eq!(
            "1970-1960".parse::<YearRange>(),
            Err(ConfigError::ReversedRange { start: 1970, end: 1960 })
        );
    }

    #[test]
    fn test_language_pair() {
        let pair = parse_language_pair("fr", "DE").unwrap();
        assert_eq!(pair.source, Language::Fr);
        assert_eq!(pair.target, Language::De);

        assert_eq!(
            parse_language_pair("de", "de"),
            Err(ConfigError::SameLanguage(Language::De))
        );
        assert_eq!(
            parse_language_pair("de", "it"),
            Err(ConfigError::UnsupportedLanguage("it".to_string()))
        );
    }
}
