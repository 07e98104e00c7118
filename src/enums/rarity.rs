//! Rarity tiers and their crafting economy.

/// Dust amounts as `(normal, golden)`.
pub type DustCost = (u32, u32);

card_enum! {
    /// Rarity tier.
    pub enum Rarity {
        Invalid = 0,
        Common = 1,
        Free = 2,
        Rare = 3,
        Epic = 4,
        Legendary = 5,
    }
}

impl Rarity {
    /// Can cards of this rarity be crafted? Free cards are granted.
    #[must_use]
    pub const fn craftable(self) -> bool {
        !matches!(self, Rarity::Invalid | Rarity::Free)
    }

    /// Dust needed to craft a normal and a golden copy.
    #[must_use]
    pub const fn crafting_costs(self) -> DustCost {
        match self {
            Rarity::Common => (40, 400),
            Rarity::Rare => (100, 800),
            Rarity::Epic => (400, 1600),
            Rarity::Legendary => (1600, 3200),
            Rarity::Invalid | Rarity::Free => (0, 0),
        }
    }

    /// Dust gained by disenchanting a normal and a golden copy.
    #[must_use]
    pub const fn disenchant_costs(self) -> DustCost {
        match self {
            Rarity::Common => (5, 50),
            Rarity::Rare => (20, 100),
            Rarity::Epic => (100, 400),
            Rarity::Legendary => (400, 1600),
            Rarity::Invalid | Rarity::Free => (0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CardEnum;

    #[test]
    fn test_codes() {
        assert_eq!(Rarity::from_code(1), Some(Rarity::Common));
        assert_eq!(Rarity::from_code(5), Some(Rarity::Legendary));
        assert_eq!(Rarity::from_code(6), None);
    }

    #[test]
    fn test_craftable() {
        assert!(Rarity::Common.craftable());
        assert!(Rarity::Legendary.craftable());
        assert!(!Rarity::Free.craftable());
        assert!(!Rarity::Invalid.craftable());
    }

    #[test]
    fn test_disenchant_below_crafting() {
        for rarity in Rarity::all().iter().filter(|r| r.craftable()) {
            let (craft, golden_craft) = rarity.crafting_costs();
            let (dust, golden_dust) = rarity.disenchant_costs();
            assert!(dust < craft, "{rarity}");
            assert!(golden_dust < golden_craft, "{rarity}");
        }
    }

    #[test]
    fn test_non_craftable_costs_nothing() {
        assert_eq!(Rarity::Free.crafting_costs(), (0, 0));
        assert_eq!(Rarity::Free.disenchant_costs(), (0, 0));
    }
}
