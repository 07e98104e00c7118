//! Field descriptors: declarative extraction rules for entity elements.
//!
//! ## Key Types
//!
//! - `FieldDescriptor`: lookup + conversion, with shared absent-value handling
//! - `FromAttrib`: attribute on the entity element
//! - `FromTag` / `IntFromTag`: `value` of a matching `Tag` child
//! - `BoolFromTag`: tag value compared to `"1"`
//! - `EnumFromTag`: integer tag mapped through a `CardEnum`
//! - `LocStringFromTag`: per-language text nested in a tag
//! - `FieldValue` / `FieldKind`: dynamic values and declared types

pub mod attrib;
pub mod descriptor;
pub mod tag;
pub mod value;

pub use attrib::FromAttrib;
pub use descriptor::{
    find_tag, parse_factory, text_factory, ErasedField, Factory, FieldDescriptor, RawValue,
    ENTITY_TAG, TAG_TAG,
};
pub use tag::{BoolFromTag, EnumFromTag, FromTag, IntFromTag, LocStringFromTag, DEFAULT_LANG};
pub use value::{FieldKind, FieldValue};
