//! Attribute-sourced fields.

use super::descriptor::{parse_factory, text_factory, Factory, FieldDescriptor, RawValue};
use super::value::FieldKind;
use crate::error::{Error, Result};
use crate::xml::Element;

/// Reads a named attribute directly off the entity element.
///
/// ## Example
///
/// ```
/// use carddefs::fields::{FieldDescriptor, FromAttrib};
/// use carddefs::xml::Element;
///
/// let field = FromAttrib::int("the_attrib");
/// let entity = Element::parse(r#"<Entity the_attrib="42"></Entity>"#).unwrap();
///
/// assert_eq!(field.extract(&entity).unwrap(), Some(42));
/// ```
#[derive(Clone, Copy)]
pub struct FromAttrib<T> {
    name: &'static str,
    kind: FieldKind,
    factory: Factory<T>,
}

impl<T> std::fmt::Debug for FromAttrib<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromAttrib")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T> FromAttrib<T> {
    /// Create a descriptor with a custom conversion.
    #[must_use]
    pub const fn with_factory(name: &'static str, kind: FieldKind, factory: Factory<T>) -> Self {
        Self {
            name,
            kind,
            factory,
        }
    }
}

impl FromAttrib<String> {
    /// String attribute.
    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self::with_factory(name, FieldKind::Text, text_factory)
    }
}

impl FromAttrib<i64> {
    /// Integer attribute.
    #[must_use]
    pub const fn int(name: &'static str) -> Self {
        Self::with_factory(name, FieldKind::Int, parse_factory::<i64>)
    }
}

impl<T> FieldDescriptor for FromAttrib<T> {
    type Output = T;

    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn raw_value<'a>(&self, entity: &'a Element) -> Option<RawValue<'a>> {
        entity.attr(self.name).map(RawValue::Text)
    }

    fn convert(&self, raw: RawValue<'_>) -> Result<T> {
        (self.factory)(raw.as_str()).map_err(|reason| Error::InvalidValue {
            field: self.name.to_string(),
            value: raw.as_str().to_string(),
            reason,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attrib_parse_attrib() {
        let field = FromAttrib::int("the_attrib");
        let entity = Element::parse(r#"<Entity the_attrib="42"></Entity>"#).unwrap();
        assert_eq!(field.extract(&entity).unwrap(), Some(42));
    }

    #[test]
    fn test_from_attrib_text() {
        let field = FromAttrib::text("CardID");
        let entity = Element::parse(r#"<Entity CardID="GVG_011"/>"#).unwrap();
        assert_eq!(field.extract(&entity).unwrap().as_deref(), Some("GVG_011"));
    }

    #[test]
    fn test_missing_attribute_is_none() {
        let field = FromAttrib::int("ID");
        let entity = Element::parse(r#"<Entity CardID="X"/>"#).unwrap();
        assert_eq!(field.extract(&entity).unwrap(), None);
    }

    #[test]
    fn test_missing_attribute_never_calls_factory() {
        fn refuse(_: &str) -> std::result::Result<i64, String> {
            panic!("factory called on absent value");
        }
        let field = FromAttrib::with_factory("ID", FieldKind::Int, refuse);
        let entity = Element::new("Entity");
        assert_eq!(field.extract(&entity).unwrap(), None);
    }

    #[test]
    fn test_unparsable_attribute_is_error() {
        let field = FromAttrib::int("ID");
        let entity = Element::parse(r#"<Entity ID="abc"/>"#).unwrap();
        let err = field.extract(&entity).unwrap_err();
        assert!(matches!(err, Error::InvalidValue { ref field, .. } if field == "ID"));
    }

    #[test]
    #[should_panic(expected = "can only be read from an Entity element")]
    fn test_non_entity_panics() {
        let field = FromAttrib::int("ID");
        let root = Element::parse(r#"<CardDefs ID="1"/>"#).unwrap();
        let _ = field.extract(&root);
    }
}
