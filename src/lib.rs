pub mod alignment;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod detection;
pub mod entities;
pub mod models;
pub mod scanner;

pub use config::{ConfigError, RunConfig, YearRange};
pub use detection::AscentVocabulary;
pub use models::{
    ArticlePairReport, CandidateSentence, ExtraData, Header, LanguagePair, Output, ScanIssue,
    SystemEnvironment, YearbookReport,
};
pub use scanner::{ProcessResult, process};
