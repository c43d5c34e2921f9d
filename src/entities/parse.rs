//! Reading mentions out of a `-ner` file.
//!
//! ```text
//! <ner>
//!   <geo>
//!     <g type="mountain" stid="1234" span="3-12-2,3-12-3" name="Piz Palü"/>
//!   </geo>
//!   <persons>
//!     <person id="p7" span="3-12-1">
//!       <firstname>Hans</firstname><lastname>Lauper</lastname>
//!       <positions><position>3-12-1</position></positions>
//!     </person>
//!   </persons>
//! </ner>
//! ```

use crate::corpus::XmlElement;
use crate::models::{EditionEntities, EntityKind, Language, Mountain, Person, Position, ScanIssue};
use log::warn;
use std::collections::HashSet;
use std::fmt;

pub const GEO_SECTION: &str = "geo";
pub const PERSONS_SECTION: &str = "persons";
pub const MOUNTAIN_TYPE: &str = "mountain";

/// Why a single mention was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionError {
    MissingAttribute(&'static str),
    MissingElement(&'static str),
    /// Every entry of the span was unusable, or there was none.
    EmptySpan,
}

impl fmt::Display for MentionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAttribute(name) => write!(f, "missing '{}' attribute", name),
            Self::MissingElement(name) => write!(f, "missing <{}> element", name),
            Self::EmptySpan => write!(f, "no usable position in span"),
        }
    }
}

impl std::error::Error for MentionError {}

/// Context shared by all issues raised while reading one NER file.
struct IssueSink<'a> {
    yearbook: &'a str,
    language: Language,
    issues: Vec<ScanIssue>,
}

impl IssueSink<'_> {
    fn malformed_mention(&mut self, entity: EntityKind, mention: String, error: &MentionError) {
        let issue = ScanIssue::MalformedMention {
            yearbook: self.yearbook.to_string(),
            language: self.language,
            entity,
            mention,
            reason: error.to_string(),
        };
        warn!("{}", issue);
        self.issues.push(issue);
    }

    fn malformed_position(&mut self, entity: EntityKind, mention: &str, raw: &str, reason: String) {
        let issue = ScanIssue::MalformedPosition {
            yearbook: self.yearbook.to_string(),
            language: self.language,
            entity,
            mention: mention.to_string(),
            raw: raw.to_string(),
            reason,
        };
        warn!("{}", issue);
        self.issues.push(issue);
    }
}

/// Parse the mountains and persons of one language edition.
///
/// Malformed mentions and positions are skipped and returned as issues; the
/// rest of the file is still used.
pub fn parse_ner(
    root: &XmlElement,
    yearbook: &str,
    language: Language,
) -> (EditionEntities, Vec<ScanIssue>) {
    let mut sink = IssueSink {
        yearbook,
        language,
        issues: Vec::new(),
    };

    let mountains = match root.child(GEO_SECTION) {
        Some(geo) => parse_mountains(geo, &mut sink),
        None => {
            warn!(
                "Yearbook {} ({}): no <{}> section in NER file",
                yearbook, language, GEO_SECTION
            );
            Vec::new()
        }
    };

    let persons = match root.child(PERSONS_SECTION) {
        Some(section) => parse_persons(section, &mut sink),
        None => {
            warn!(
                "Yearbook {} ({}): no <{}> section in NER file",
                yearbook, language, PERSONS_SECTION
            );
            Vec::new()
        }
    };

    (EditionEntities { mountains, persons }, sink.issues)
}

fn parse_mountains(geo: &XmlElement, sink: &mut IssueSink<'_>) -> Vec<Mountain> {
    geo.descendants("g")
        .into_iter()
        .filter(|g| g.attr("type") == Some(MOUNTAIN_TYPE))
        .enumerate()
        .filter_map(|(index, g)| {
            let label = mention_label(g.attr("stid"), index);
            match parse_mountain(g, &label, sink) {
                Ok(mountain) => Some(mountain),
                Err(e) => {
                    sink.malformed_mention(EntityKind::Mountain, label, &e);
                    None
                }
            }
        })
        .collect()
}

fn parse_mountain(
    g: &XmlElement,
    label: &str,
    sink: &mut IssueSink<'_>,
) -> Result<Mountain, MentionError> {
    let stid = required_attr(g, "stid")?;
    let raw_span = required_attr(g, "span")?;
    let span = parse_span(raw_span.split(','), EntityKind::Mountain, label, sink)?;

    let name = g
        .attr("name")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .or_else(|| Some(g.text()).filter(|text| !text.is_empty()))
        .map(str::to_string);

    Ok(Mountain { stid, name, span })
}

fn parse_persons(section: &XmlElement, sink: &mut IssueSink<'_>) -> Vec<Person> {
    section
        .children("person")
        .enumerate()
        .filter_map(|(index, element)| {
            let label = mention_label(element.attr("id"), index);
            match parse_person(element, &label, sink) {
                Ok(person) => Some(person),
                Err(e) => {
                    sink.malformed_mention(EntityKind::Person, label, &e);
                    None
                }
            }
        })
        .collect()
}

fn parse_person(
    element: &XmlElement,
    label: &str,
    sink: &mut IssueSink<'_>,
) -> Result<Person, MentionError> {
    let pid = required_attr(element, "id")?;
    let firstname = required_child_text(element, "firstname")?;
    let lastname = required_child_text(element, "lastname")?;

    let locations: Vec<Vec<String>> = element
        .descendants("positions")
        .into_iter()
        .map(|group| {
            group
                .children("position")
                .map(|position| position.text().to_string())
                .collect()
        })
        .collect();

    // Without a usable explicit span, the location groups are the span.
    let explicit_span = element
        .attr("span")
        .and_then(|raw| parse_span(raw.split(','), EntityKind::Person, label, sink).ok());
    let span = match explicit_span {
        Some(span) => span,
        None => parse_span(
            locations.iter().flatten().map(String::as_str),
            EntityKind::Person,
            label,
            sink,
        )?,
    };

    Ok(Person {
        pid,
        firstname,
        lastname,
        span,
        locations,
    })
}

fn parse_span<'a>(
    raw_positions: impl Iterator<Item = &'a str>,
    entity: EntityKind,
    label: &str,
    sink: &mut IssueSink<'_>,
) -> Result<Vec<Position>, MentionError> {
    let mut seen = HashSet::new();
    let mut span = Vec::new();

    for raw in raw_positions {
        match Position::parse(raw) {
            Ok(position) => {
                if seen.insert(position.clone()) {
                    span.push(position);
                }
            }
            Err(e) => sink.malformed_position(entity, label, raw, e.to_string()),
        }
    }

    if span.is_empty() {
        Err(MentionError::EmptySpan)
    } else {
        Ok(span)
    }
}

fn required_attr(element: &XmlElement, name: &'static str) -> Result<String, MentionError> {
    element
        .attr(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(MentionError::MissingAttribute(name))
}

fn required_child_text(element: &XmlElement, name: &'static str) -> Result<String, MentionError> {
    element
        .child(name)
        .map(|child| child.text().to_string())
        .ok_or(MentionError::MissingElement(name))
}

fn mention_label(id: Option<&str>, index: usize) -> String {
    match id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => format!("#{}", index + 1),
    }
}
