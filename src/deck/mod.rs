//! Deck editing: state, derived views, legality and mutation.
//!
//! ## Key Types
//!
//! - `DeckSnapshot`: Initialization payload from the backend
//! - `DeckState`: Scalar deck metadata
//! - `Deck`: Editing session over an injected card store
//! - `DeckView`: Derivations and legality checks (recomputed on demand)
//! - `Problem`: Legality problem codes
//!
//! ## Data Flow
//!
//! Reads go store -> `DeckView` -> caller. Writes go through
//! `Deck::set_card_quantity` into the store. There is no cache to
//! invalidate; every view observes the latest store state.

pub mod content;
pub mod derivation;
pub mod legality;
pub mod mutation;
pub mod session;
pub mod snapshot;
pub mod state;

pub use content::{DeckSection, DeckSummary, SectionCard};
pub use derivation::DeckView;
pub use legality::{AgendaRule, BannerTable, Problem, FEALTY};
pub use mutation::ChangeListener;
pub use session::Deck;
pub use snapshot::DeckSnapshot;
pub use state::DeckState;
