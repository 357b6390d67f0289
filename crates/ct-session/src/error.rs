//! Error types for the game-master session.

use thiserror::Error;

use ct_mechanics::{Attribute, MechError};

/// Result type for session operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while running a session.
///
/// None of these are fatal: the session is left exactly as it was and the
/// front end shows the message as an advisory.
#[derive(Debug, Error)]
pub enum TableError {
    /// The attribute's deck has no cards left.
    #[error("the {0} deck is empty, reshuffle it first")]
    EmptyDeck(Attribute),

    /// No unspent progression points remain.
    #[error("no points left to allocate, level up first")]
    NoPointsAvailable,

    /// Nothing has been drawn from the attribute's deck since it was shuffled.
    #[error("no card drawn from the {0} deck yet")]
    NothingDrawn(Attribute),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Mechanics engine error.
    #[error("{0}")]
    Mechanics(#[from] MechError),
}
