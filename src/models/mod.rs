mod article;
mod entity;
mod issue;
mod language;
mod output;
mod position;

pub use article::{Article, NO_TITLE, Sentence, Title, Token, TranslationRef};
pub use entity::{EditionEntities, EntityKind, Mountain, Person};
pub use issue::ScanIssue;
pub use language::{Language, LanguagePair};
pub use output::{
    ArticlePairReport, BERGBEST_OUTPUT_FORMAT_VERSION, CandidateSentence, ExtraData, Header,
    Output, SystemEnvironment, YearbookReport,
};
pub use position::{Position, PositionError};
