//! Tag-sourced fields.
//!
//! Most card data lives in `<Tag name="..." value="..."/>` children of the
//! entity. Every variant here shares the lookup in `find_tag` (first match
//! in document order wins) and differs only in how the value is read out of
//! the matched tag and converted.

use std::marker::PhantomData;

use super::descriptor::{find_tag, parse_factory, text_factory, Factory, FieldDescriptor, RawValue};
use super::value::FieldKind;
use crate::enums::CardEnum;
use crate::error::{Error, Result};
use crate::xml::Element;

/// Language element read by `LocStringFromTag` unless overridden.
pub const DEFAULT_LANG: &str = "enUS";

fn invalid(name: &str, raw: RawValue<'_>, reason: String) -> Error {
    Error::InvalidValue {
        field: name.to_string(),
        value: raw.as_str().to_string(),
        reason,
    }
}

/// Reads the `value` attribute of the matching `Tag` child.
///
/// ## Example
///
/// ```
/// use carddefs::fields::{FieldDescriptor, FromTag};
/// use carddefs::xml::Element;
///
/// let field = FromTag::int("the_tag");
/// let entity = Element::parse(r#"<Entity><Tag name="the_tag" value="43" /></Entity>"#).unwrap();
///
/// assert_eq!(field.extract(&entity).unwrap(), Some(43));
/// ```
#[derive(Clone, Copy)]
pub struct FromTag<T> {
    name: &'static str,
    kind: FieldKind,
    factory: Factory<T>,
}

/// Integer read from a tag.
pub type IntFromTag = FromTag<i64>;

impl<T> std::fmt::Debug for FromTag<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromTag")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T> FromTag<T> {
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

impl FromTag<i64> {
    /// Integer tag.
    #[must_use]
    pub const fn int(name: &'static str) -> Self {
        Self::with_factory(name, FieldKind::Int, parse_factory::<i64>)
    }
}

impl FromTag<String> {
    /// Tag whose `value` is kept as text.
    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self::with_factory(name, FieldKind::Text, text_factory)
    }
}

impl<T> FieldDescriptor for FromTag<T> {
    type Output = T;

    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> FieldKind {
        self.kind
    }

    fn raw_value<'a>(&self, entity: &'a Element) -> Option<RawValue<'a>> {
        find_tag(entity, self.name)
            .and_then(|tag| tag.attr("value"))
            .map(RawValue::Text)
    }

    fn convert(&self, raw: RawValue<'_>) -> Result<T> {
        (self.factory)(raw.as_str()).map_err(|reason| invalid(self.name, raw, reason))
    }
}

/// Flag tag: true only when the tag's value is exactly `"1"`.
///
/// The lookup itself collapses to a flag, so a missing tag reads as `false`
/// rather than `None`. A record can therefore not tell "absent" from
/// "explicitly 0" for these fields.
#[derive(Clone, Copy, Debug)]
pub struct BoolFromTag {
    name: &'static str,
}

impl BoolFromTag {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl FieldDescriptor for BoolFromTag {
    type Output = bool;

    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Bool
    }

    fn raw_value<'a>(&self, entity: &'a Element) -> Option<RawValue<'a>> {
        let value = find_tag(entity, self.name).and_then(|tag| tag.attr("value"));
        Some(RawValue::Flag(value == Some("1")))
    }

    fn convert(&self, raw: RawValue<'_>) -> Result<bool> {
        Ok(raw.as_str() == "1")
    }
}

/// Integer tag mapped through a fixed enumeration.
///
/// Codes with no matching member fail with `Error::UnknownEnumValue`.
pub struct EnumFromTag<E> {
    name: &'static str,
    _enum: PhantomData<fn() -> E>,
}

impl<E> Clone for EnumFromTag<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumFromTag<E> {}

impl<E> std::fmt::Debug for EnumFromTag<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnumFromTag").field("name", &self.name).finish()
    }
}

impl<E: CardEnum> EnumFromTag<E> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _enum: PhantomData,
        }
    }
}

impl<E: CardEnum> FieldDescriptor for EnumFromTag<E> {
    type Output = E;

    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Enum(E::NAME)
    }

    fn raw_value<'a>(&self, entity: &'a Element) -> Option<RawValue<'a>> {
        find_tag(entity, self.name)
            .and_then(|tag| tag.attr("value"))
            .map(RawValue::Text)
    }

    fn convert(&self, raw: RawValue<'_>) -> Result<E> {
        let code =
            parse_factory::<i64>(raw.as_str()).map_err(|reason| invalid(self.name, raw, reason))?;
        E::from_code(code).ok_or(Error::UnknownEnumValue {
            enum_name: E::NAME,
            value: code,
        })
    }
}

/// Localized string: text of the active language's element inside the tag.
///
/// ```xml
/// <Tag name="CARDNAME" type="LocString">
///     <deDE>Schrumpfstrahl</deDE>
///     <enUS>Shrink Ray</enUS>
/// </Tag>
/// ```
///
/// A tag without the active language yields `None`; there is no fallback.
#[derive(Clone, Copy, Debug)]
pub struct LocStringFromTag {
    name: &'static str,
    lang: &'static str,
}

impl LocStringFromTag {
    /// Localized tag read in `DEFAULT_LANG`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            lang: DEFAULT_LANG,
        }
    }

    /// Read a different language.
    #[must_use]
    pub const fn with_lang(mut self, lang: &'static str) -> Self {
        self.lang = lang;
        self
    }

    #[must_use]
    pub const fn lang(&self) -> &'static str {
        self.lang
    }
}

impl FieldDescriptor for LocStringFromTag {
    type Output = String;

    fn name(&self) -> &'static str {
        self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }

    fn raw_value<'a>(&self, entity: &'a Element) -> Option<RawValue<'a>> {
        find_tag(entity, self.name)?
            .child_elements(self.lang)
            .next()?
            .text()
            .map(RawValue::Text)
    }

    fn convert(&self, raw: RawValue<'_>) -> Result<String> {
        Ok(raw.as_str().to_string())
    }
}
