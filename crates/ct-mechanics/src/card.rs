//! Outcome cards.

use serde::{Deserialize, Serialize};

/// The outcome printed on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// A common success.
    Success,
    /// A critical success.
    CriticalSuccess,
    /// A common failure.
    Failure,
    /// A critical failure.
    CriticalFailure,
}

impl CardKind {
    /// All card kinds, best outcome first.
    pub const ALL: [CardKind; 4] = [
        CardKind::CriticalSuccess,
        CardKind::Success,
        CardKind::Failure,
        CardKind::CriticalFailure,
    ];

    /// Returns true for both success kinds.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::CriticalSuccess)
    }

    /// Returns true for both critical kinds.
    pub fn is_critical(self) -> bool {
        matches!(self, Self::CriticalSuccess | Self::CriticalFailure)
    }

    /// Label used on the Portuguese sheet.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Success => "ACERTO",
            Self::CriticalSuccess => "ACERTO CRÍTICO",
            Self::Failure => "ERRO",
            Self::CriticalFailure => "ERRO CRÍTICO",
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::CriticalSuccess => write!(f, "Critical Success"),
            Self::Failure => write!(f, "Failure"),
            Self::CriticalFailure => write!(f, "Critical Failure"),
        }
    }
}

/// A single outcome card. Cards carry no identity beyond their kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// What the card resolves to when drawn.
    pub kind: CardKind,
}

impl Card {
    /// Create a card of the given kind.
    pub const fn new(kind: CardKind) -> Self {
        Self { kind }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)
    }
}
