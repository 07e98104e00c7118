//! The `Record` trait implemented by every generated record type.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::fields::{ErasedField, FieldKind, FieldValue};
use crate::xml::Element;

/// One stored field of a record schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Field name on the record.
    pub name: &'static str,
    /// Lookup key in the entity (attribute or tag name).
    pub source: &'static str,
    /// Declared type.
    pub kind: FieldKind,
}

/// Reflective description of a record type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RecordSchema {
    /// Record type name.
    pub name: &'static str,
    /// Stored fields in declaration order.
    pub fields: Vec<FieldSpec>,
    /// Registered computed properties, in registration order.
    pub computed: Vec<&'static str>,
}

impl RecordSchema {
    /// Stored field names in declaration order.
    #[must_use]
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Look up a stored field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Immutable record materialized from an `Entity` element.
///
/// Implemented by `define_record!`; see that macro for how a record type is
/// declared.
pub trait Record: Sized {
    /// Record type name.
    const NAME: &'static str;

    /// Stored field names in declaration order.
    const FIELD_NAMES: &'static [&'static str];

    /// Registered computed property names.
    const COMPUTED_NAMES: &'static [&'static str];

    /// Build a record by running every field descriptor against `entity`.
    ///
    /// # Panics
    ///
    /// Panics if `entity` is not an `Entity` element.
    fn from_entity(entity: &Element) -> Result<Self>;

    /// The `(field name, descriptor)` bindings in declaration order.
    fn descriptors() -> Vec<(&'static str, &'static dyn ErasedField)>;

    /// Stored field as a dynamic value; `None` for unknown names.
    fn field_value(&self, name: &str) -> Option<FieldValue>;

    /// Computed property as a dynamic value; `None` for unknown names.
    fn computed_value(&self, name: &str) -> Option<FieldValue>;

    /// Describe the record's stored fields and computed properties.
    fn schema() -> RecordSchema {
        RecordSchema {
            name: Self::NAME,
            fields: Self::descriptors()
                .into_iter()
                .map(|(name, descriptor)| FieldSpec {
                    name,
                    source: descriptor.source(),
                    kind: descriptor.declared_kind(),
                })
                .collect(),
            computed: Self::COMPUTED_NAMES.to_vec(),
        }
    }

    /// Export stored fields (declaration order) followed by computed ones.
    ///
    /// Enumerations export their integer code, absent fields `Null`.
    fn to_dict(&self) -> IndexMap<String, FieldValue> {
        let stored = Self::FIELD_NAMES
            .iter()
            .map(|name| (*name, self.field_value(name)));
        let computed = Self::COMPUTED_NAMES
            .iter()
            .map(|name| (*name, self.computed_value(name)));

        stored
            .chain(computed)
            .map(|(name, value)| (name.to_string(), value.unwrap_or(FieldValue::Null)))
            .collect()
    }

    /// `to_dict` as a JSON object.
    fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.to_dict())
    }

    /// Run every descriptor against `entity` without building the typed
    /// record.
    fn extract_values(entity: &Element) -> Result<IndexMap<&'static str, FieldValue>> {
        Self::descriptors()
            .into_iter()
            .map(|(name, descriptor)| Ok((name, descriptor.extract_value(entity)?)))
            .collect()
    }
}
