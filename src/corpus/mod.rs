//! Access to the Text+Berg XML release: file layout, edition reading and the
//! element tree both are built on.

pub mod book;
pub mod paths;
pub mod xml;

pub use book::{Edition, parse_edition, read_edition};
pub use paths::{DocumentPairFiles, discover_years, locate_document_pair};
pub use xml::{XmlElement, parse_document};
