mod process;
#[cfg(test)]
mod process_test;

use crate::models::{ScanIssue, YearbookReport};

pub struct ProcessResult {
    pub yearbooks: Vec<YearbookReport>,
    /// Requested years that could not be processed.
    pub skipped: Vec<ScanIssue>,
}

impl ProcessResult {
    /// Every issue as one line: skipped years first, then the issues found
    /// inside the processed yearbooks.
    pub fn error_messages(&self) -> Vec<String> {
        self.skipped
            .iter()
            .chain(self.yearbooks.iter().flat_map(|yearbook| yearbook.issues.iter()))
            .map(ScanIssue::to_string)
            .collect()
    }
}

pub use self::process::{cross_reference, process, process_document_pair, process_year};
