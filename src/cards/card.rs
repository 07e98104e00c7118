//! The `Card` record.
//!
//! Stored fields come straight out of an `<Entity>` element through the
//! descriptors below. Crafting and deck-limit properties are computed from
//! them on every call; the record never changes after construction, so there
//! is nothing to invalidate.

use crate::enums::{CardClass, CardSet, CardType, DustCost, Race, Rarity};
use crate::fields::{BoolFromTag, EnumFromTag, FromAttrib, FromTag, LocStringFromTag};

crate::define_record! {
    /// One card definition.
    ///
    /// ## Example
    ///
    /// ```
    /// use carddefs::cards::Card;
    /// use carddefs::enums::Rarity;
    /// use carddefs::schema::Record;
    /// use carddefs::xml::Element;
    ///
    /// let entity = Element::parse(
    ///     r#"<Entity CardID="EX1_116" ID="559"><Tag name="RARITY" value="5"/></Entity>"#,
    /// ).unwrap();
    /// let card = Card::from_entity(&entity).unwrap();
    ///
    /// assert_eq!(card.id, Some(559));
    /// assert_eq!(card.rarity, Some(Rarity::Legendary));
    /// assert_eq!(card.max_count_in_deck(), 1);
    /// ```
    pub struct Card {
        /// String identifier, e.g. `GVG_011`.
        card_id: String = FromAttrib::text("CardID"),
        /// Numeric identifier; the collection key.
        id: i64 = FromAttrib::int("ID"),
        name: String = LocStringFromTag::new("CARDNAME"),
        /// Card text as shown in hand.
        inhand: String = LocStringFromTag::new("CARDTEXT_INHAND"),
        health: i64 = FromTag::int("HEALTH"),
        atk: i64 = FromTag::int("ATK"),
        cost: i64 = FromTag::int("COST"),
        /// Always present; a missing tag reads as `false`.
        collectable: bool = BoolFromTag::new("COLLECTIBLE"),
        card_class: CardClass = EnumFromTag::<CardClass>::new("CLASS"),
        race: Race = EnumFromTag::<Race>::new("CARDRACE"),
        card_type: CardType = EnumFromTag::<CardType>::new("CARDTYPE"),
        card_set: CardSet = EnumFromTag::<CardSet>::new("CARD_SET"),
        rarity: Rarity = EnumFromTag::<Rarity>::new("RARITY"),
    }
    computed {
        craftable => Card::craftable,
        crafting_costs => Card::crafting_costs,
        disenchant_costs => Card::disenchant_costs,
        max_count_in_deck => Card::max_count_in_deck,
    }
}

impl Card {
    /// Can this card be obtained by crafting?
    ///
    /// Checked in order: set, type, rarity; the first non-craftable one
    /// decides. A card without a set skips that check. A card without a type
    /// or rarity cannot be priced and is never craftable.
    #[must_use]
    pub fn craftable(&self) -> bool {
        if let Some(set) = self.card_set {
            if !set.craftable() {
                return false;
            }
        }
        match (self.card_type, self.rarity) {
            (Some(card_type), Some(rarity)) => card_type.craftable() && rarity.craftable(),
            _ => false,
        }
    }

    /// Dust to craft a normal and a golden copy; `(0, 0)` if not craftable.
    #[must_use]
    pub fn crafting_costs(&self) -> DustCost {
        match self.rarity {
            Some(rarity) if self.craftable() => rarity.crafting_costs(),
            _ => (0, 0),
        }
    }

    /// Dust from disenchanting a normal and a golden copy; `(0, 0)` if not
    /// craftable.
    #[must_use]
    pub fn disenchant_costs(&self) -> DustCost {
        match self.rarity {
            Some(rarity) if self.craftable() => rarity.disenchant_costs(),
            _ => (0, 0),
        }
    }

    /// Copies allowed in a constructed deck.
    #[must_use]
    pub fn max_count_in_deck(&self) -> u32 {
        if self.rarity == Some(Rarity::Legendary) {
            1
        } else {
            2
        }
    }

    /// Is this card collectible?
    #[must_use]
    pub fn is_collectible(&self) -> bool {
        self.collectable == Some(true)
    }
}
