//! Property tests for the computed card properties and field extraction.
//!
//! Cards are generated from arbitrary classification codes and run through
//! the real `from_entity` path, so the properties hold for parsed records.

use carddefs::cards::Card;
use carddefs::enums::{CardEnum, CardSet, CardType, Rarity};
use carddefs::fields::{FieldDescriptor, FromTag};
use carddefs::schema::Record;
use carddefs::xml::Element;
use proptest::prelude::*;

fn arb_member<E: CardEnum>() -> impl Strategy<Value = E> {
    prop::sample::select(E::all())
}

fn arb_card() -> impl Strategy<Value = Card> {
    (
        prop::option::of(arb_member::<CardSet>()),
        prop::option::of(arb_member::<CardType>()),
        prop::option::of(arb_member::<Rarity>()),
    )
        .prop_map(|(card_set, card_type, rarity)| {
            let mut entity = Element::new("Entity").with_attr("ID", "1");
            for (name, code) in [
                ("CARD_SET", card_set.map(CardEnum::code)),
                ("CARDTYPE", card_type.map(CardEnum::code)),
                ("RARITY", rarity.map(CardEnum::code)),
            ] {
                if let Some(code) = code {
                    entity = entity.with_child(
                        Element::new("Tag")
                            .with_attr("name", name)
                            .with_attr("value", code.to_string()),
                    );
                }
            }
            Card::from_entity(&entity).unwrap()
        })
}

proptest! {
    /// A non-craftable rarity makes the card non-craftable, whatever else it has.
    #[test]
    fn non_craftable_rarity_wins(card in arb_card()) {
        if let Some(rarity) = card.rarity {
            if !rarity.craftable() {
                prop_assert!(!card.craftable());
            }
        }
    }

    /// Costs are zero exactly when the card is not craftable.
    #[test]
    fn costs_zero_iff_not_craftable(card in arb_card()) {
        prop_assert_eq!(card.crafting_costs() == (0, 0), !card.craftable());
        prop_assert_eq!(card.disenchant_costs() == (0, 0), !card.craftable());
    }

    /// Only legendaries are limited to one copy.
    #[test]
    fn max_count_one_iff_legendary(card in arb_card()) {
        let expected = if card.rarity == Some(Rarity::Legendary) { 1 } else { 2 };
        prop_assert_eq!(card.max_count_in_deck(), expected);
    }

    /// Any integer tag value parses back to itself.
    #[test]
    fn int_tag_parses_any_value(value in any::<i64>()) {
        let entity = Element::new("Entity").with_child(
            Element::new("Tag").with_attr("name", "COST").with_attr("value", value.to_string()),
        );
        prop_assert_eq!(FromTag::int("COST").extract(&entity).unwrap(), Some(value));
    }

    /// A tag under a different name is never picked up.
    #[test]
    fn other_tag_names_are_absent(name in "[A-Z_]{1,12}", value in any::<i64>()) {
        prop_assume!(name != "COST");
        let entity = Element::new("Entity").with_child(
            Element::new("Tag").with_attr("name", name).with_attr("value", value.to_string()),
        );
        prop_assert_eq!(FromTag::int("COST").extract(&entity).unwrap(), None);
    }
}
