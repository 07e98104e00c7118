//! Card system: the `Card` record, its collection, and the loader.
//!
//! ## Key Types
//!
//! - `Card`: immutable record built from one `<Entity>` element
//! - `CardCollection`: cards keyed by numeric id
//! - `Cards`: memoized loader for `CardDefs.xml`

pub mod card;
pub mod collection;
pub mod loader;

pub use card::Card;
pub use collection::CardCollection;
pub use loader::{collect_cards, load_from_path, parse_card_defs, Cards, ROOT_TAG};
