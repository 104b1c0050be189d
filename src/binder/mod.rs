//! Binder system: holdings and collections.
//!
//! ## Key Types
//!
//! - `BinderEntry`: One holding (card, quantity, printing, condition, tags)
//! - `EntryKey`: Holding identity (card, set code, rarity)
//! - `Binder`: Ordered collection with add/remove quantity operations
//! - `EntryView`: Entry paired with its resolved card data
//! - `binder_to_csv`: CSV export of a binder's holdings

pub mod collection;
pub mod entry;
pub mod export;
pub mod view;

pub use collection::Binder;
pub use entry::{BinderEntry, Condition, EntryKey};
pub use export::{binder_to_csv, write_binder_csv};
pub use view::EntryView;
