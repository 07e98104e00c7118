//! Classification enumerations and their metadata.
//!
//! Each axis a card is classified on (class, race, type, set, rarity) is a
//! fixed enumeration whose members carry the integer code used in
//! `CardDefs.xml`. Sets, types and rarities also carry the crafting metadata
//! consumed by the `Card` computed properties.
//!
//! ## Key Types
//!
//! - `CardEnum`: integer-code mapping shared by every enumeration
//! - `CardClass`, `Race`, `CardType`, `CardSet`: classification axes
//! - `Rarity`: rarity tiers with dust costs

use std::fmt::{Debug, Display};

/// An enumeration stored in the source document as an integer code.
pub trait CardEnum: Copy + Debug + Display + Eq + Sized + 'static {
    /// Enumeration name used in error messages.
    const NAME: &'static str;

    /// Look up the member for an integer code.
    fn from_code(code: i64) -> Option<Self>;

    /// Integer code of this member.
    fn code(self) -> i64;

    /// Every member, in code order.
    fn all() -> &'static [Self];
}

/// Define an enumeration with explicit integer codes.
macro_rules! card_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::enums::CardEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn from_code(code: i64) -> Option<Self> {
                match code {
                    $( $code => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn code(self) -> i64 {
                match self {
                    $( Self::$variant => $code, )+
                }
            }

            fn all() -> &'static [Self] {
                &[$( Self::$variant ),+]
            }
        }

        // Reflective export carries the integer code, as stored in the source.
        impl From<$name> for $crate::fields::FieldValue {
            fn from(value: $name) -> Self {
                $crate::fields::FieldValue::Int($crate::enums::CardEnum::code(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $( Self::$variant => f.write_str(stringify!($variant)), )+
                }
            }
        }
    };
}

pub mod classification;
pub mod rarity;

pub use classification::{CardClass, CardSet, CardType, Race};
pub use rarity::{DustCost, Rarity};
