//! Configuration for a game-master session.

use ct_mechanics::deck::STARTING_SUCCESSES;

/// Progression points a new character has to spend.
pub const STARTING_POINTS: u32 = 21;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// RNG seed for reproducible shuffles. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Common successes every attribute starts with.
    pub starting_successes: u32,
    /// Unspent progression points at the start.
    pub starting_points: u32,
    /// Character level at the start (at least 1).
    pub starting_level: u32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_successes: STARTING_SUCCESSES,
            starting_points: STARTING_POINTS,
            starting_level: 1,
        }
    }
}

impl TableConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the common successes per attribute.
    pub fn with_starting_successes(mut self, successes: u32) -> Self {
        self.starting_successes = successes;
        self
    }

    /// Set the unspent progression points.
    pub fn with_starting_points(mut self, points: u32) -> Self {
        self.starting_points = points;
        self
    }

    /// Set the starting level (clamped to at least 1).
    pub fn with_starting_level(mut self, level: u32) -> Self {
        self.starting_level = level.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = TableConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.starting_successes, 8);
        assert_eq!(cfg.starting_points, 21);
        assert_eq!(cfg.starting_level, 1);
    }

    #[test]
    fn builder_methods() {
        let cfg = TableConfig::default()
            .with_seed(123)
            .with_starting_successes(10)
            .with_starting_points(0)
            .with_starting_level(4);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.starting_successes, 10);
        assert_eq!(cfg.starting_points, 0);
        assert_eq!(cfg.starting_level, 4);
    }

    #[test]
    fn level_clamped() {
        let cfg = TableConfig::default().with_starting_level(0);
        assert_eq!(cfg.starting_level, 1);
    }
}
