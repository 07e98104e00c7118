//! The field descriptor capability.
//!
//! A descriptor knows how to find one raw value inside an `Entity` element
//! and how to turn it into a typed value. Descriptors are stateless and
//! `const`-constructible, so a record type builds its descriptors once at
//! compile time and reuses them for every entity of every parse.

use std::fmt::Display;
use std::str::FromStr;

use super::value::{FieldKind, FieldValue};
use crate::error::Result;
use crate::xml::Element;

/// Tag of the element holding one record's worth of data.
pub const ENTITY_TAG: &str = "Entity";

/// Tag of the name/value children of an entity.
pub const TAG_TAG: &str = "Tag";

/// Conversion from raw text to a typed value. The error is a reason string;
/// descriptors attach the field name and raw text.
pub type Factory<T> = fn(&str) -> std::result::Result<T, String>;

/// Raw value found in an entity, before conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawValue<'a> {
    /// Attribute value or element text, borrowed from the tree.
    Text(&'a str),
    /// Result of a lookup that already collapsed to a flag.
    Flag(bool),
}

impl<'a> RawValue<'a> {
    /// Text form of the raw value. Flags render as `"1"`/`"0"`.
    #[must_use]
    pub fn as_str(self) -> &'a str {
        match self {
            RawValue::Text(s) => s,
            RawValue::Flag(true) => "1",
            RawValue::Flag(false) => "0",
        }
    }
}

/// Locates and converts one piece of data in an `Entity` element.
///
/// Implementors provide the lookup (`raw_value`) and the conversion
/// (`convert`); `extract` ties them together and is the same for every
/// variant.
pub trait FieldDescriptor {
    /// Typed value produced by this descriptor.
    type Output;

    /// Lookup key within the entity (attribute name or tag name).
    fn name(&self) -> &'static str;

    /// Declared type of the produced value.
    fn kind(&self) -> FieldKind;

    /// Find the raw value, or `None` if the entity does not carry it.
    fn raw_value<'a>(&self, entity: &'a Element) -> Option<RawValue<'a>>;

    /// Convert a found raw value.
    fn convert(&self, raw: RawValue<'_>) -> Result<Self::Output>;

    /// Extract and convert the value from one entity.
    ///
    /// Returns `Ok(None)` without calling `convert` when the value is absent.
    ///
    /// # Panics
    ///
    /// Panics if `entity` is not an `Entity` element.
    fn extract(&self, entity: &Element) -> Result<Option<Self::Output>> {
        assert_eq!(
            entity.tag(),
            ENTITY_TAG,
            "field '{}' can only be read from an {} element",
            self.name(),
            ENTITY_TAG
        );
        match self.raw_value(entity) {
            Some(raw) => self.convert(raw).map(Some),
            None => Ok(None),
        }
    }
}

/// Object-safe view of a descriptor, used for reflective schema listings.
pub trait ErasedField {
    /// Lookup key within the entity.
    fn source(&self) -> &'static str;

    /// Declared type of the produced value.
    fn declared_kind(&self) -> FieldKind;

    /// Extract the value as a `FieldValue` (`Null` when absent).
    fn extract_value(&self, entity: &Element) -> Result<FieldValue>;
}

impl<D> ErasedField for D
where
    D: FieldDescriptor,
    D::Output: Into<FieldValue>,
{
    fn source(&self) -> &'static str {
        self.name()
    }

    fn declared_kind(&self) -> FieldKind {
        self.kind()
    }

    fn extract_value(&self, entity: &Element) -> Result<FieldValue> {
        Ok(self.extract(entity)?.into())
    }
}

/// Find the first `Tag` child whose `name` attribute matches.
#[must_use]
pub fn find_tag<'a>(entity: &'a Element, name: &str) -> Option<&'a Element> {
    entity
        .child_elements(TAG_TAG)
        .find(|tag| tag.attr("name") == Some(name))
}

/// Factory keeping the raw text as a `String`.
pub fn text_factory(raw: &str) -> std::result::Result<String, String> {
    Ok(raw.to_string())
}

/// Factory parsing the raw text with `FromStr`.
pub fn parse_factory<T>(raw: &str) -> std::result::Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| e.to_string())
}
