//! Text commands accepted by the table.

use ct_mechanics::Attribute;

use crate::error::{TableError, TableResult};

/// Which decks a reshuffle applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReshuffleTarget {
    /// A single attribute's deck.
    One(Attribute),
    /// Every deck at once.
    All,
}

/// A parsed table command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Draw the top card of an attribute's deck.
    Draw(Attribute),
    /// Stop showing an attribute's last result.
    Hide(Attribute),
    /// Show an attribute's last result again.
    Reveal(Attribute),
    /// Rebuild one or all decks.
    Reshuffle(ReshuffleTarget),
    /// Spend a point on an attribute.
    Allocate(Attribute),
    /// Gain a level.
    LevelUp,
    /// Summarize the whole session.
    Status,
    /// Show bonuses for one attribute, or all of them.
    Bonus(Option<Attribute>),
    /// Show the Charisma affinity table.
    Affinity,
    /// Show help.
    Help,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parse a line of user input.
    pub fn parse(input: &str) -> TableResult<Self> {
        let trimmed = input.trim();
        let mut parts = trimmed.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("").to_lowercase();
        let rest = parts.next().map(str::trim).unwrap_or("");

        match cmd.as_str() {
            "draw" | "d" => Ok(Self::Draw(required_attribute(rest, "draw")?)),
            "hide" | "h" => Ok(Self::Hide(required_attribute(rest, "hide")?)),
            "reveal" | "show" => Ok(Self::Reveal(required_attribute(rest, "reveal")?)),
            "reshuffle" | "shuffle" | "r" => {
                if rest.eq_ignore_ascii_case("all") {
                    Ok(Self::Reshuffle(ReshuffleTarget::All))
                } else {
                    let attr = required_attribute(rest, "reshuffle")?;
                    Ok(Self::Reshuffle(ReshuffleTarget::One(attr)))
                }
            }
            "allocate" | "alloc" | "+" => Ok(Self::Allocate(required_attribute(rest, "allocate")?)),
            "levelup" => Ok(Self::LevelUp),
            "level" if rest.eq_ignore_ascii_case("up") => Ok(Self::LevelUp),
            "status" | "s" => Ok(Self::Status),
            "bonus" | "bonuses" => {
                if rest.is_empty() {
                    Ok(Self::Bonus(None))
                } else {
                    Ok(Self::Bonus(Some(Attribute::parse(rest)?)))
                }
            }
            "affinity" => Ok(Self::Affinity),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(TableError::UnknownCommand(trimmed.to_string())),
        }
    }
}

fn required_attribute(rest: &str, verb: &str) -> TableResult<Attribute> {
    if rest.is_empty() {
        return Err(TableError::InvalidChoice(format!(
            "usage: {verb} <attribute>"
        )));
    }
    Ok(Attribute::parse(rest)?)
}
