//! Error type shared by the parser, the field descriptors and the loader.
//!
//! Structural violations (wrong root tag, a descriptor handed something that
//! is not an `Entity`) are programmer errors and panic instead of showing up
//! here. Missing fields are not errors at all; they surface as `None`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading card definitions.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Unknown {enum_name} value: {value}")]
    UnknownEnumValue { enum_name: &'static str, value: i64 },

    #[error("Invalid value {value:?} for field '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
