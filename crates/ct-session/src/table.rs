//! The game table: a session plus the randomness that shuffles its decks.
//!
//! `GameTable` is the command surface front ends talk to. Each command maps
//! onto one session transition; [`GameTable::process`] additionally parses a
//! line of text and renders the response, which is what the REPL uses.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use ct_mechanics::bonus::affinity_table;
use ct_mechanics::{Attribute, Card, RandomSource};

use crate::command::{Command, ReshuffleTarget};
use crate::config::TableConfig;
use crate::error::TableResult;
use crate::session::Session;

/// An interactive game-master table.
pub struct GameTable<R = StdRng> {
    session: Session,
    rng: R,
}

impl GameTable<StdRng> {
    /// Create a table, seeding from the config or from OS entropy.
    pub fn new(config: TableConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_source(config, rng)
    }
}

impl<R: RandomSource> GameTable<R> {
    /// Create a table that shuffles with the given random source.
    pub fn with_source(config: TableConfig, mut rng: R) -> Self {
        let session = Session::new(&config, &mut rng);
        info!(
            seed = ?config.seed,
            successes = config.starting_successes,
            points = config.starting_points,
            "session started"
        );
        Self { session, rng }
    }

    /// Read-only view of the session for rendering.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Draw the top card of an attribute's deck.
    pub fn draw(&mut self, attr: Attribute) -> TableResult<Card> {
        let card = self.session.draw(attr)?;
        debug!(
            attribute = %attr,
            card = %card,
            remaining = self.session.deck(attr).len(),
            "drew card"
        );
        Ok(card)
    }

    /// Stop showing an attribute's last result.
    pub fn hide(&mut self, attr: Attribute) {
        self.session.hide(attr);
    }

    /// Show an attribute's last result again.
    pub fn reveal(&mut self, attr: Attribute) -> TableResult<Card> {
        self.session.reveal(attr)
    }

    /// Rebuild an attribute's deck from its current success count.
    pub fn reshuffle(&mut self, attr: Attribute) {
        self.session.reshuffle(attr, &mut self.rng);
        debug!(attribute = %attr, cards = self.session.deck(attr).len(), "reshuffled deck");
    }

    /// Rebuild every deck.
    pub fn reshuffle_all(&mut self) {
        self.session.reshuffle_all(&mut self.rng);
        debug!("reshuffled all decks");
    }

    /// Spend a point on an attribute. Returns its new success count.
    pub fn allocate_point(&mut self, attr: Attribute) -> TableResult<u32> {
        let count = self.session.allocate_point(attr, &mut self.rng)?;
        debug!(
            attribute = %attr,
            successes = count,
            unspent = self.session.unspent_points(),
            "allocated point"
        );
        Ok(count)
    }

    /// Gain a level. Returns the new level.
    pub fn level_up(&mut self) -> u32 {
        self.session.level_up();
        info!(
            level = self.session.level(),
            unspent = self.session.unspent_points(),
            "level up"
        );
        self.session.level()
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> TableResult<String> {
        if input.trim().is_empty() {
            return Ok(String::new());
        }
        let command = Command::parse(input)?;
        self.apply(command)
    }

    /// Execute a parsed command and render its response.
    pub fn apply(&mut self, command: Command) -> TableResult<String> {
        match command {
            Command::Draw(attr) => {
                let card = self.draw(attr)?;
                Ok(format!(
                    "{attr}: {card}! ({} cards left)",
                    self.session.deck(attr).len()
                ))
            }
            Command::Hide(attr) => {
                self.hide(attr);
                Ok(format!("{attr}: result hidden."))
            }
            Command::Reveal(attr) => {
                let card = self.reveal(attr)?;
                Ok(format!("{attr}: last draw was {card}."))
            }
            Command::Reshuffle(ReshuffleTarget::One(attr)) => {
                self.reshuffle(attr);
                Ok(format!(
                    "{attr} deck reshuffled ({} cards).",
                    self.session.deck(attr).len()
                ))
            }
            Command::Reshuffle(ReshuffleTarget::All) => {
                self.reshuffle_all();
                Ok("All decks reshuffled.".to_string())
            }
            Command::Allocate(attr) => {
                let count = self.allocate_point(attr)?;
                Ok(format!(
                    "{attr}: {count} common successes, deck rebuilt ({} cards). {} point(s) left.",
                    self.session.deck(attr).len(),
                    self.session.unspent_points()
                ))
            }
            Command::LevelUp => {
                let level = self.level_up();
                Ok(format!(
                    "Level {level}! {} point(s) to allocate.",
                    self.session.unspent_points()
                ))
            }
            Command::Status => Ok(format_status(&self.session)),
            Command::Bonus(Some(attr)) => Ok(format_bonus(&self.session, attr)),
            Command::Bonus(None) => Ok(Attribute::ALL
                .iter()
                .map(|&attr| format_bonus(&self.session, attr))
                .collect::<Vec<_>>()
                .join("\n")),
            Command::Affinity => Ok(format_affinity_table()),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok("Goodbye!".to_string()),
        }
    }
}

const HELP: &str = "\
Table Commands:
  draw <attribute>              Draw the top card of a deck
  hide <attribute>              Hide the last result
  reveal <attribute>            Show the last result again
  reshuffle <attribute>|all     Rebuild one deck, or all of them
  allocate <attribute>          Spend a point on an attribute
  levelup                       Gain a level (+2 points)
  status                        Show every deck and counter
  bonus [attribute]             Show derived bonuses
  affinity                      Show the Charisma affinity table
  help                          Show this help
  quit                          Exit

Attributes: strength, dexterity, constitution, intelligence, wisdom,
  charisma (Portuguese names and str/dex/con/int/wis/cha also work)";

/// One line per attribute with deck contents, last draw and bonuses.
pub fn format_status(session: &Session) -> String {
    let mut out = format!(
        "Level {} | Points to allocate: {}\n",
        session.level(),
        session.unspent_points()
    );
    for attr in Attribute::ALL {
        let stats = session.deck(attr).stats();
        out.push_str(&format!(
            "  {:<13} {:>3} cards ({} successes, {} failures)  {}",
            attr.name(),
            stats.total,
            stats.successes_left,
            stats.failures_left,
            session.bonus(attr),
        ));
        if let Some(card) = session.last_result(attr) {
            let shown = if session.is_revealed(attr) { "shown" } else { "hidden" };
            out.push_str(&format!("  | last: {card} ({shown})"));
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

/// Bonuses for one attribute, with the deck composition they come from.
pub fn format_bonus(session: &Session, attr: Attribute) -> String {
    format!(
        "{} ({}): {} [{}]",
        attr.name(),
        attr.native_name(),
        session.bonus(attr),
        session.composition(attr),
    )
}

/// The Charisma affinity staircase as text rows.
pub fn format_affinity_table() -> String {
    let mut out = String::from("Affinity (Charisma)\n  Successes  Affinity\n");
    for (min, max, affinity) in affinity_table() {
        let range = match max {
            Some(max) => format!("{min}-{max}"),
            None => format!("{min}+"),
        };
        out.push_str(&format!("  {range:<10} {affinity}\n"));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use ct_mechanics::{CardKind, SequenceSource};

    fn test_table() -> GameTable {
        GameTable::new(TableConfig::default().with_seed(42))
    }

    #[test]
    fn create_table() {
        let t = test_table();
        assert_eq!(t.session().level(), 1);
        assert_eq!(t.session().unspent_points(), 21);
    }

    #[test]
    fn same_seed_same_decks() {
        let a = test_table();
        let b = test_table();
        assert_eq!(a.session(), b.session());
    }

    #[test]
    fn injected_source_controls_draws() {
        let mut t = GameTable::with_source(
            TableConfig::default(),
            SequenceSource::constant(0.999_999),
        );
        let card = t.draw(Attribute::Strength).unwrap();
        assert_eq!(card.kind, CardKind::CriticalFailure);
    }

    #[test]
    fn process_draw() {
        let mut t = test_table();
        let out = t.process("draw strength").unwrap();
        assert!(out.starts_with("Strength: "));
        assert!(out.contains("(20 cards left)"));
        assert!(t.session().is_revealed(Attribute::Strength));
    }

    #[test]
    fn process_draw_until_empty() {
        let mut t = test_table();
        for _ in 0..21 {
            t.process("draw dex").unwrap();
        }
        let err = t.process("draw dex").unwrap_err();
        assert!(matches!(err, TableError::EmptyDeck(Attribute::Dexterity)));
        assert_eq!(
            err.to_string(),
            "the Dexterity deck is empty, reshuffle it first"
        );
        t.process("reshuffle dex").unwrap();
        assert_eq!(t.session().deck(Attribute::Dexterity).len(), 21);
    }

    #[test]
    fn process_hide_and_reveal() {
        let mut t = test_table();
        t.process("draw wis").unwrap();
        assert_eq!(t.process("hide wis").unwrap(), "Wisdom: result hidden.");
        assert!(!t.session().is_revealed(Attribute::Wisdom));
        let out = t.process("reveal wis").unwrap();
        assert!(out.starts_with("Wisdom: last draw was"));
        assert!(t.session().is_revealed(Attribute::Wisdom));
    }

    #[test]
    fn process_allocate_and_level_up() {
        let mut t = GameTable::new(TableConfig::default().with_seed(1).with_starting_points(1));
        let out = t.process("allocate charisma").unwrap();
        assert!(out.contains("9 common successes"));
        assert!(out.contains("0 point(s) left"));

        let err = t.process("allocate charisma").unwrap_err();
        assert!(matches!(err, TableError::NoPointsAvailable));

        assert_eq!(
            t.process("level up").unwrap(),
            "Level 2! 2 point(s) to allocate."
        );
        assert!(t.process("allocate charisma").is_ok());
        assert_eq!(t.session().success_count(Attribute::Charisma), 10);
    }

    #[test]
    fn process_reshuffle_all() {
        let mut t = test_table();
        t.process("draw str").unwrap();
        t.process("draw cha").unwrap();
        assert_eq!(t.process("reshuffle all").unwrap(), "All decks reshuffled.");
        for attr in Attribute::ALL {
            assert_eq!(t.session().deck(attr).len(), 21);
            assert!(t.session().last_result(attr).is_none());
        }
    }

    #[test]
    fn process_status() {
        let mut t = test_table();
        t.process("draw con").unwrap();
        t.process("hide con").unwrap();
        let status = t.process("status").unwrap();
        assert!(status.starts_with("Level 1 | Points to allocate: 21"));
        assert!(status.contains("Strength"));
        assert!(status.contains("21 cards (9 successes, 12 failures)"));
        assert!(status.contains("(hidden)"));
        assert_eq!(status.lines().count(), 7);
    }

    #[test]
    fn process_bonus() {
        let mut t = test_table();
        let out = t.process("bonus str").unwrap();
        assert_eq!(
            out,
            "Strength (Força): Damage: +3, Carry: 9kg [9 successes · 12 failures]"
        );
        let all = t.process("bonus").unwrap();
        assert_eq!(all.lines().count(), 6);
        assert!(all.contains("Affinity: 3"));
    }

    #[test]
    fn process_affinity_table() {
        let mut t = test_table();
        let out = t.process("affinity").unwrap();
        assert!(out.contains("8-10"));
        assert!(out.contains("91+"));
        assert_eq!(out.lines().count(), 15);
    }

    #[test]
    fn process_empty_and_quit() {
        let mut t = test_table();
        assert_eq!(t.process("   ").unwrap(), "");
        assert_eq!(t.process("quit").unwrap(), "Goodbye!");
    }

    #[test]
    fn process_help() {
        let mut t = test_table();
        assert!(t.process("help").unwrap().contains("Table Commands"));
    }

    #[test]
    fn process_unknown_command() {
        let mut t = test_table();
        assert!(matches!(
            t.process("juggle"),
            Err(TableError::UnknownCommand(_))
        ));
    }
}
