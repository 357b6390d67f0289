//! Session state and its transitions.
//!
//! Each attribute moves between two display states: idle (nothing shown)
//! and revealed (the last drawn card is shown). Drawing reveals, hiding goes
//! back to idle without touching the deck, and reshuffling or allocating a
//! point rebuilds the deck and forgets the last card.

use serde::Serialize;

use ct_mechanics::{
    Attribute, AttributeMap, BonusSheet, Card, Deck, DeckComposition, RandomSource,
    build_all_decks, build_deck, compute_bonus,
};

use crate::config::TableConfig;
use crate::error::{TableError, TableResult};

/// Progression points granted per level.
pub const POINTS_PER_LEVEL: u32 = 2;

/// Everything the table knows about one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    level: u32,
    unspent_points: u32,
    success_counts: AttributeMap<u32>,
    decks: AttributeMap<Deck>,
    last_results: AttributeMap<Option<Card>>,
    revealed: AttributeMap<bool>,
}

impl Session {
    /// Create a session with freshly shuffled decks.
    pub fn new<R: RandomSource + ?Sized>(config: &TableConfig, rng: &mut R) -> Self {
        let success_counts = AttributeMap::splat(config.starting_successes);
        let decks = build_all_decks(&success_counts, rng);
        Self {
            level: config.starting_level.max(1),
            unspent_points: config.starting_points,
            success_counts,
            decks,
            last_results: AttributeMap::splat(None),
            revealed: AttributeMap::splat(false),
        }
    }

    /// Current character level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Progression points not yet allocated.
    pub fn unspent_points(&self) -> u32 {
        self.unspent_points
    }

    /// Common successes allocated to an attribute.
    pub fn success_count(&self, attr: Attribute) -> u32 {
        self.success_counts[attr]
    }

    /// Common successes for every attribute.
    pub fn success_counts(&self) -> &AttributeMap<u32> {
        &self.success_counts
    }

    /// The attribute's current deck.
    pub fn deck(&self, attr: Attribute) -> &Deck {
        &self.decks[attr]
    }

    /// The last card drawn since the attribute's deck was built.
    pub fn last_result(&self, attr: Attribute) -> Option<Card> {
        self.last_results[attr]
    }

    /// Whether the last drawn card is currently shown.
    pub fn is_revealed(&self, attr: Attribute) -> bool {
        self.revealed[attr]
    }

    /// Bonuses derived from the attribute's success count.
    pub fn bonus(&self, attr: Attribute) -> BonusSheet {
        compute_bonus(attr, self.success_counts[attr])
    }

    /// The composition the attribute's deck is rebuilt with.
    pub fn composition(&self, attr: Attribute) -> DeckComposition {
        DeckComposition::for_successes(self.success_counts[attr])
    }

    /// Draw the top card of the attribute's deck and reveal it.
    pub fn draw(&mut self, attr: Attribute) -> TableResult<Card> {
        let card = self.decks[attr]
            .draw()
            .ok_or(TableError::EmptyDeck(attr))?;
        self.last_results[attr] = Some(card);
        self.revealed[attr] = true;
        Ok(card)
    }

    /// Stop showing the last result. The card stays drawn.
    pub fn hide(&mut self, attr: Attribute) {
        self.revealed[attr] = false;
    }

    /// Show the last result again.
    pub fn reveal(&mut self, attr: Attribute) -> TableResult<Card> {
        let card = self.last_results[attr].ok_or(TableError::NothingDrawn(attr))?;
        self.revealed[attr] = true;
        Ok(card)
    }

    /// Rebuild the attribute's deck, discarding undrawn cards and the last result.
    pub fn reshuffle<R: RandomSource + ?Sized>(&mut self, attr: Attribute, rng: &mut R) {
        self.decks[attr] = build_deck(self.success_counts[attr], rng);
        self.last_results[attr] = None;
        self.revealed[attr] = false;
    }

    /// Rebuild every deck in one step.
    pub fn reshuffle_all<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.decks = build_all_decks(&self.success_counts, rng);
        self.last_results = AttributeMap::splat(None);
        self.revealed = AttributeMap::splat(false);
    }

    /// Spend one point on an attribute and rebuild its deck.
    ///
    /// Returns the attribute's new success count.
    pub fn allocate_point<R: RandomSource + ?Sized>(
        &mut self,
        attr: Attribute,
        rng: &mut R,
    ) -> TableResult<u32> {
        if self.unspent_points == 0 {
            return Err(TableError::NoPointsAvailable);
        }
        self.unspent_points -= 1;
        self.success_counts[attr] = self.success_counts[attr].saturating_add(1);
        self.reshuffle(attr, rng);
        Ok(self.success_counts[attr])
    }

    /// Gain a level and its progression points.
    pub fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.unspent_points = self.unspent_points.saturating_add(POINTS_PER_LEVEL);
    }
}
