//! Card mechanics for the Clock Tan-Tan game-master tool.
//!
//! Provides the six fixed attributes, outcome cards, per-attribute deck
//! construction with an injectable random source, and the pure bonus
//! calculator that turns a success count into derived character stats.

pub mod attribute;
pub mod bonus;
pub mod card;
pub mod deck;
pub mod error;
pub mod random;

pub use attribute::{Attribute, AttributeMap};
pub use bonus::{AffinityTier, BonusSheet, BonusStat, StatUnit, compute_bonus};
pub use card::{Card, CardKind};
pub use deck::{Deck, DeckComposition, DeckStats, build_all_decks, build_deck};
pub use error::{MechError, MechResult};
pub use random::{RandomSource, SequenceSource};
