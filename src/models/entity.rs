//! Named-entity mentions read from the `-ner` companion files.

use super::position::Position;
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EntityKind {
    Mountain,
    Person,
}

/// A `<g type="mountain">` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mountain {
    /// Collection-wide id (`stid`).
    pub stid: String,
    pub name: Option<String>,
    /// Token positions covered; never empty, possibly non-contiguous.
    pub span: Vec<Position>,
}

/// A `<person>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Document-wide id, not unique across the collection.
    pub pid: String,
    pub firstname: String,
    pub lastname: String,
    pub span: Vec<Position>,
    /// Raw `<positions>` groups. Auxiliary, not used for co-occurrence.
    pub locations: Vec<Vec<String>>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_string()
    }
}

/// The mountains and persons of one language edition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditionEntities {
    pub mountains: Vec<Mountain>,
    pub persons: Vec<Person>,
}

impl EditionEntities {
    /// Spans of every mention of `kind`, in document order.
    pub fn spans(&self, kind: EntityKind) -> Box<dyn Iterator<Item = &[Position]> + '_> {
        match kind {
            EntityKind::Mountain => Box::new(self.mountains.iter().map(|m| m.span.as_slice())),
            EntityKind::Person => Box::new(self.persons.iter().map(|p| p.span.as_slice())),
        }
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Mountain => self.mountains.len(),
            EntityKind::Person => self.persons.len(),
        }
    }
}
