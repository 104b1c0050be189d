//! Card reference data: definitions, rarities, and lookup.
//!
//! ## Key Types
//!
//! - `CardId`: Card passcode
//! - `Card`: Immutable card data (type line, stats, print sets)
//! - `Rarity`: Rarity ladder used for sorting
//! - `CardRegistry`: In-memory card store
//! - `CardLookup`: Read-only lookup seam used by binder and deck code

pub mod definition;
pub mod rarity;
pub mod registry;

pub use definition::{Card, CardId, CardImage, CardSet};
pub use rarity::Rarity;
pub use registry::{CardLookup, CardRegistry};
