//! Card data: records, the record store, and the pack catalog.
//!
//! ## Key Types
//!
//! - `CardRecord`: Printed card data plus the live in-deck quantity
//! - `CardFilter` / `SortSpec`: Store queries
//! - `CardStore`: Query/update contract consumed by the deck engines
//! - `MemoryCardStore`: In-memory store with O(1) clone
//! - `PackCatalog`: Pack lookup, ordered by release date
//!
//! ## Shared Store
//!
//! A store is shared by every deck opened in a session. Decks never
//! create or delete records; they only re-tag `in_deck`.

pub mod packs;
pub mod query;
pub mod record;
pub mod store;

pub use packs::{MemoryPackCatalog, Pack, PackCatalog};
pub use query::{CardFilter, SortField, SortKey, SortOrder, SortSpec};
pub use record::CardRecord;
pub use store::{CardPatch, CardStore, MemoryCardStore};
