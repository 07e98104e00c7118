//! Loading `CardDefs.xml` into a `CardCollection`.
//!
//! `Cards` memoizes the parsed collection: the first `all_cards` call reads
//! and parses the file, later calls share the same `Arc`. `reload` is the
//! only way to pick up a changed file.
//!
//! Concurrent first calls are not serialized. Each may parse the document
//! and the last one to finish fills the cache; the results are identical,
//! so callers only pay for the redundant parse.

use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use super::card::Card;
use super::collection::CardCollection;
use crate::config::AssetConfig;
use crate::error::{Error, Result};
use crate::schema::Record;
use crate::xml::Element;

/// Root tag of a card definitions document.
pub const ROOT_TAG: &str = "CardDefs";

/// Build a collection from a parsed `<CardDefs>` root.
///
/// Entities without an `ID` are skipped with a warning instead of failing
/// the load.
/// When two entities share an `ID` the later one wins.
///
/// # Panics
///
/// Panics if `root` is not a `CardDefs` element, or if one of its children
/// is not an `Entity`.
pub fn collect_cards(root: &Element) -> Result<CardCollection> {
    assert_eq!(
        root.tag(),
        ROOT_TAG,
        "card definitions must have a <{}> root element",
        ROOT_TAG
    );

    let mut cards = CardCollection::new();
    for entity in root.children() {
        let card = Card::from_entity(entity)?;
        let Some(id) = card.id else {
            tracing::warn!(
                "Skipping entity without ID (CardID {:?})",
                card.card_id.as_deref().unwrap_or("")
            );
            continue;
        };
        if let Some(previous) = cards.insert(id, card) {
            tracing::warn!(
                "Duplicate card ID {}: replacing {:?}",
                id,
                previous.card_id.as_deref().unwrap_or("")
            );
        }
    }
    Ok(cards)
}

/// Parse a card definitions document from text.
pub fn parse_card_defs(xml: &str) -> Result<CardCollection> {
    let root = Element::parse(xml)?;
    collect_cards(&root)
}

/// Read and parse a card definitions file.
pub fn load_from_path(path: &Path) -> Result<CardCollection> {
    let xml = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cards = parse_card_defs(&xml)?;
    tracing::debug!("Loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

/// Lazily loaded, memoized card collection.
#[derive(Debug)]
pub struct Cards {
    config: AssetConfig,
    cache: RwLock<Option<Arc<CardCollection>>>,
}

impl Cards {
    /// Create an empty (not yet loaded) cache reading from `config`.
    #[must_use]
    pub fn new(config: AssetConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(None),
        }
    }

    /// Process-wide instance using `AssetConfig::global()`.
    pub fn global() -> &'static Cards {
        static CARDS: OnceLock<Cards> = OnceLock::new();
        CARDS.get_or_init(|| Cards::new(AssetConfig::global().clone()))
    }

    /// The asset configuration this cache reads from.
    #[must_use]
    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// All cards, loading them on first use.
    pub fn all_cards(&self) -> Result<Arc<CardCollection>> {
        let cached = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match cached {
            Some(cards) => Ok(cards),
            None => self.reload(),
        }
    }

    /// Re-read the file and replace the cached collection.
    ///
    /// On failure the previous collection (if any) stays cached.
    pub fn reload(&self) -> Result<Arc<CardCollection>> {
        let cards = Arc::new(load_from_path(&self.config.card_defs_path())?);
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&cards));
        Ok(cards)
    }

    /// Has a collection been loaded?
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Drop the cached collection; the next `all_cards` call reloads.
    pub fn clear(&self) {
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_card_defs() {
        let cards = parse_card_defs(
            r#"<CardDefs>
                <Entity CardID="A" ID="1"><Tag name="COST" value="1"/></Entity>
                <Entity CardID="B" ID="2"><Tag name="COST" value="2"/></Entity>
            </CardDefs>"#,
        )
        .unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards.get(2).and_then(|c| c.cost), Some(2));
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let cards = parse_card_defs(
            r#"<CardDefs>
                <Entity CardID="FIRST" ID="7"/>
                <Entity CardID="SECOND" ID="7"/>
            </CardDefs>"#,
        )
        .unwrap();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards.get(7).and_then(|c| c.card_id.as_deref()), Some("SECOND"));
    }

    #[test]
    fn test_entity_without_id_skipped() {
        let cards = parse_card_defs(r#"<CardDefs><Entity CardID="NO_ID"/></CardDefs>"#).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let cards = parse_card_defs("<CardDefs/>").unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    #[should_panic(expected = "root element")]
    fn test_wrong_root_panics() {
        let _ = parse_card_defs(r#"<Cards><Entity ID="1"/></Cards>"#);
    }

    #[test]
    #[should_panic(expected = "can only be read from an Entity element")]
    fn test_non_entity_child_panics() {
        let _ = parse_card_defs(r#"<CardDefs><Card ID="1"/></CardDefs>"#);
    }

    #[test]
    fn test_unknown_enum_aborts_load() {
        let err = parse_card_defs(
            r#"<CardDefs><Entity ID="1"><Tag name="RARITY" value="42"/></Entity></CardDefs>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownEnumValue { value: 42, .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let cards = Cards::new(AssetConfig::new("/definitely/not/here"));
        let err = cards.all_cards().unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!cards.is_loaded());
    }
}
