//! Card collection keyed by numeric card id.
//!
//! A `CardCollection` is what a load produces: every parsed `Card`, keyed
//! by its `id` field. Inserting a card whose id is already present replaces
//! the earlier one.

use rustc_hash::FxHashMap;

use super::card::Card;

/// Cards keyed by their numeric id.
///
/// ## Example
///
/// ```
/// use carddefs::cards::{Card, CardCollection};
/// use carddefs::schema::Record;
/// use carddefs::xml::Element;
///
/// let entity = Element::parse(r#"<Entity CardID="GVG_011" ID="42"/>"#).unwrap();
///
/// let mut cards = CardCollection::new();
/// cards.insert(42, Card::from_entity(&entity).unwrap());
///
/// let found = cards.get(42).unwrap();
/// assert_eq!(found.card_id.as_deref(), Some("GVG_011"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardCollection {
    cards: FxHashMap<i64, Card>,
}

impl CardCollection {
    /// Create a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a card under `id`, returning the card it replaced.
    pub fn insert(&mut self, id: i64, card: Card) -> Option<Card> {
        self.cards.insert(id, card)
    }

    /// Get a card by numeric id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card by its string id (`CardID` attribute).
    #[must_use]
    pub fn get_by_card_id(&self, card_id: &str) -> Option<&Card> {
        self.cards
            .values()
            .find(|c| c.card_id.as_deref() == Some(card_id))
    }

    /// Check if an id is present.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over `(id, card)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, &Card)> {
        self.cards.iter().map(|(id, card)| (*id, card))
    }

    /// Iterate over collectible cards.
    pub fn collectible(&self) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(|c| c.is_collectible())
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Card>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }

    /// Borrow the underlying map.
    #[must_use]
    pub fn as_map(&self) -> &FxHashMap<i64, Card> {
        &self.cards
    }
}

impl FromIterator<(i64, Card)> for CardCollection {
    fn from_iter<I: IntoIterator<Item = (i64, Card)>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
