//! Owned XML element tree.
//!
//! `Element::parse` walks the `quick-xml` event stream and keeps a stack of
//! open elements; each closing tag attaches the finished element to its
//! parent (or makes it the document root).
//!
//! An element's text is the character data before its first child element.
//! Text following a child is dropped, and whitespace-only runs (indentation)
//! are skipped. Real text is kept verbatim, surrounding spaces included.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, Result};

/// One XML element with its attributes, child elements and text.
///
/// ## Example
///
/// ```
/// use carddefs::xml::Element;
///
/// let entity = Element::parse(r#"<Entity ID="42"><Tag name="COST" value="3"/></Entity>"#).unwrap();
///
/// assert_eq!(entity.tag(), "Entity");
/// assert_eq!(entity.attr("ID"), Some("42"));
/// assert_eq!(entity.children().count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// Create an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element (builder pattern).
    #[must_use]
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the text content (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Parse a whole document and return its root element.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);

        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => open.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    Self::attach(&mut open, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = open.pop().ok_or_else(|| {
                        Error::MalformedDocument("closing tag without opening tag".to_string())
                    })?;
                    Self::attach(&mut open, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(current) = open.last_mut() {
                        current.push_text(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = open.last_mut() {
                        current.push_text(&String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctype
                _ => {}
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(Error::MalformedDocument(format!(
                "element <{}> is never closed",
                unclosed.tag
            )));
        }

        root.ok_or_else(|| Error::MalformedDocument("document has no root element".to_string()))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self> {
        let mut element = Self::new(String::from_utf8_lossy(start.name().as_ref()));
        for attr in start.attributes() {
            let attr = attr?;
            let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            element.attributes.push((name, value));
        }
        Ok(element)
    }

    fn attach(open: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
        match open.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_some() => {
                return Err(Error::MalformedDocument(format!(
                    "second root element <{}>",
                    element.tag
                )));
            }
            None => *root = Some(element),
        }
        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        if !self.children.is_empty() || text.trim().is_empty() {
            return;
        }
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of a named attribute.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over immediate child elements in document order.
    pub fn children(&self) -> std::slice::Iter<'_, Element> {
        self.children.iter()
    }

    /// Iterate over immediate children with the given tag.
    pub fn child_elements<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Text content, if the element has any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested() {
        let root = Element::parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <CardDefs build="1">
                <Entity CardID="A" ID="1"/>
                <Entity CardID="B" ID="2">
                    <Tag name="COST" value="3"/>
                </Entity>
            </CardDefs>"#,
        )
        .unwrap();

        assert_eq!(root.tag(), "CardDefs");
        assert_eq!(root.attr("build"), Some("1"));
        assert_eq!(root.children().count(), 2);

        let second = root.children().nth(1).unwrap();
        assert_eq!(second.attr("CardID"), Some("B"));
        assert_eq!(second.child_elements("Tag").count(), 1);
    }

    #[test]
    fn test_text_is_unescaped() {
        let root = Element::parse("<Tag>\n  <enUS>Deal 2 &amp; draw</enUS>\n</Tag>").unwrap();
        let lang = root.children().next().unwrap();
        assert_eq!(lang.text(), Some("Deal 2 & draw"));
        assert_eq!(root.text(), None);
    }

    #[test]
    fn test_padded_text_kept_verbatim() {
        let root = Element::parse("<enUS>  padded  </enUS>").unwrap();
        assert_eq!(root.text(), Some("  padded  "));
    }

    /// Only the text before the first child belongs to the element.
    #[test]
    fn test_mixed_content_text_stops_at_first_child() {
        let root = Element::parse("<enUS>Deal <b>2</b> damage</enUS>").unwrap();
        assert_eq!(root.text(), Some("Deal "));
        assert_eq!(root.children().next().unwrap().text(), Some("2"));
    }

    #[test]
    fn test_cdata_joins_leading_text() {
        let root = Element::parse("<enUS>a <![CDATA[<b>]]> c<i/> tail</enUS>").unwrap();
        assert_eq!(root.text(), Some("a <b> c"));
    }

    #[test]
    fn test_whitespace_only_text_is_none() {
        let root = Element::parse("<enUS>\n   </enUS>").unwrap();
        assert_eq!(root.text(), None);
    }

    #[test]
    fn test_attribute_unescaped() {
        let root = Element::parse(r#"<Entity CardID="a&lt;b"/>"#).unwrap();
        assert_eq!(root.attr("CardID"), Some("a<b"));
        assert_eq!(root.attr("missing"), None);
    }

    #[test]
    fn test_attributes_keep_order() {
        let root = Element::parse(r#"<Entity b="2" a="1"/>"#).unwrap();
        let keys: Vec<_> = root.attributes().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_comments_ignored() {
        let root = Element::parse("<!-- header --><Root><!-- inner --><A/></Root>").unwrap();
        assert_eq!(root.children().count(), 1);
    }

    #[test]
    fn test_empty_document_is_error() {
        let err = Element::parse("   ").unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn test_two_roots_is_error() {
        let err = Element::parse("<A/><B/>").unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn test_mismatched_end_is_error() {
        assert!(Element::parse("<A><B></A></B>").is_err());
    }

    #[test]
    fn test_builder_matches_parse() {
        let built = Element::new("Entity")
            .with_attr("ID", "7")
            .with_child(Element::new("Tag").with_attr("name", "ATK").with_attr("value", "1"));
        let parsed = Element::parse(r#"<Entity ID="7"><Tag name="ATK" value="1"/></Entity>"#).unwrap();
        assert_eq!(built, parsed);
    }
}
