//! Class, race, type and set enumerations.
//!
//! Codes follow the numbering used by the game client's `CardDefs.xml`.

card_enum! {
    /// Hero class a card belongs to.
    pub enum CardClass {
        Invalid = 0,
        DeathKnight = 1,
        Druid = 2,
        Hunter = 3,
        Mage = 4,
        Paladin = 5,
        Priest = 6,
        Rogue = 7,
        Shaman = 8,
        Warlock = 9,
        Warrior = 10,
        Dream = 11,
        Neutral = 12,
    }
}

card_enum! {
    /// Minion race (tribe).
    pub enum Race {
        Invalid = 0,
        BloodElf = 1,
        Draenei = 2,
        Dwarf = 3,
        Gnome = 4,
        Goblin = 5,
        Human = 6,
        NightElf = 7,
        Orc = 8,
        Tauren = 9,
        Troll = 10,
        Undead = 11,
        Worgen = 12,
        Goblin2 = 13,
        Murloc = 14,
        Demon = 15,
        Scourge = 16,
        Mechanical = 17,
        Elemental = 18,
        Ogre = 19,
        Beast = 20,
        Totem = 21,
        Nerubian = 22,
        Pirate = 23,
        Dragon = 24,
        Blank = 25,
        All = 26,
        Egg = 38,
    }
}

card_enum! {
    /// Card type.
    pub enum CardType {
        Invalid = 0,
        Game = 1,
        Player = 2,
        Hero = 3,
        Minion = 4,
        Spell = 5,
        Enchantment = 6,
        Weapon = 7,
        Item = 8,
        Token = 9,
        HeroPower = 10,
    }
}

impl CardType {
    /// Can cards of this type be crafted?
    #[must_use]
    pub const fn craftable(self) -> bool {
        matches!(
            self,
            CardType::Hero | CardType::Minion | CardType::Spell | CardType::Weapon
        )
    }
}

card_enum! {
    /// Release set (expansion, adventure or internal set).
    pub enum CardSet {
        Invalid = 0,
        TestTemporary = 1,
        Core = 2,
        Expert1 = 3,
        Hof = 4,
        Missions = 5,
        Demo = 6,
        None = 7,
        Cheat = 8,
        Blank = 9,
        DebugSp = 10,
        Promo = 11,
        Naxx = 12,
        Gvg = 13,
        Brm = 14,
        Tgt = 15,
        Credits = 16,
        HeroSkins = 17,
        Tb = 18,
        Slush = 19,
        Loe = 20,
        Og = 21,
        OgReserve = 22,
        Kara = 23,
        KaraReserve = 24,
        Gangs = 25,
        GangsReserve = 26,
        Ungoro = 27,
        Icecrown = 1001,
        Lootapalooza = 1004,
        Gilneas = 1125,
        Boomsday = 1127,
        Troll = 1129,
    }
}

impl CardSet {
    /// Can cards from this set be crafted?
    ///
    /// Basic (`Core`) cards are granted, Hall of Fame cards are retired, and
    /// the remaining non-release sets never reach a collection.
    #[must_use]
    pub const fn craftable(self) -> bool {
        matches!(
            self,
            CardSet::Expert1
                | CardSet::Promo
                | CardSet::Naxx
                | CardSet::Gvg
                | CardSet::Brm
                | CardSet::Tgt
                | CardSet::Loe
                | CardSet::Og
                | CardSet::Kara
                | CardSet::Gangs
                | CardSet::Ungoro
                | CardSet::Icecrown
                | CardSet::Lootapalooza
                | CardSet::Gilneas
                | CardSet::Boomsday
                | CardSet::Troll
        )
    }
}
