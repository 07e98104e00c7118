//! # carddefs
//!
//! Typed, immutable card records extracted from `CardDefs.xml`.
//!
//! ## Design Principles
//!
//! 1. **Declarative Fields**: A record type is a list of named field
//!    descriptors. Each descriptor knows where one value lives in an
//!    `<Entity>` element and how to convert it.
//!
//! 2. **Absence Is Not an Error**: A value the entity does not carry becomes
//!    `None` on the record; conversion only runs on values that were found.
//!
//! 3. **Structure Is an Invariant**: A document without a `<CardDefs>` root,
//!    or a descriptor handed something other than an `<Entity>`, is a
//!    programmer error and panics.
//!
//! ## Data Flow
//!
//! ```text
//! CardDefs.xml -> xml::Element tree -> for each <Entity>:
//!     Card::from_entity (every descriptor) -> CardCollection keyed by ID
//! ```
//!
//! ## Modules
//!
//! - `xml`: owned element tree built from `quick-xml` events
//! - `fields`: field descriptors and dynamic field values
//! - `schema`: `define_record!` and the `Record` trait
//! - `enums`: classification enumerations and crafting metadata
//! - `cards`: the `Card` record, `CardCollection`, and the `Cards` loader
//! - `config`: assets directory resolution

pub mod cards;
pub mod config;
pub mod enums;
pub mod error;
pub mod fields;
pub mod schema;
pub mod xml;

// Re-export commonly used types
pub use crate::error::{Error, Result};

pub use crate::xml::Element;

pub use crate::fields::{
    BoolFromTag, EnumFromTag, ErasedField, FieldDescriptor, FieldKind, FieldValue, FromAttrib,
    FromTag, IntFromTag, LocStringFromTag, RawValue,
};

pub use crate::schema::{FieldSpec, Record, RecordSchema};

pub use crate::enums::{CardClass, CardEnum, CardSet, CardType, DustCost, Race, Rarity};

pub use crate::cards::{Card, CardCollection, Cards};

pub use crate::config::AssetConfig;
