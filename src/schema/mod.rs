//! Record schemas: typed, immutable records assembled from field descriptors.
//!
//! A record type is declared once with `define_record!`, listing its fields
//! in order together with the descriptor that extracts each one. The macro
//! generates the struct, its `from_entity` constructor and the reflective
//! `Record` impl used for dictionary export.

pub mod builder;
pub mod record;

pub use record::{FieldSpec, Record, RecordSchema};
