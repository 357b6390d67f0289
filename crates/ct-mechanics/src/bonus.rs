//! Derived bonuses for each attribute.
//!
//! Bonuses are computed from the attribute's total successes: its common
//! successes plus the critical success that every deck carries. The values
//! are for reference at the table only and never feed back into the decks.

use serde::Serialize;

use crate::attribute::Attribute;
use crate::deck::CRITICAL_SUCCESSES;

/// How a bonus value is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatUnit {
    /// A bare number.
    Plain,
    /// A modifier, shown with a leading `+`.
    Modifier,
    /// A percentage chance.
    Percent,
    /// A weight in kilograms.
    Kilograms,
}

/// One named bonus value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusStat {
    /// Stable machine-readable key.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// The computed value.
    pub value: u32,
    /// Presentation unit.
    pub unit: StatUnit,
}

impl BonusStat {
    fn new(key: &'static str, label: &'static str, value: u32, unit: StatUnit) -> Self {
        Self {
            key,
            label,
            value,
            unit,
        }
    }

    /// The value formatted with its unit.
    pub fn formatted_value(&self) -> String {
        match self.unit {
            StatUnit::Plain => self.value.to_string(),
            StatUnit::Modifier => format!("+{}", self.value),
            StatUnit::Percent => format!("{}%", self.value),
            StatUnit::Kilograms => format!("{}kg", self.value),
        }
    }
}

impl std::fmt::Display for BonusStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.formatted_value())
    }
}

/// All bonuses for one attribute at one success count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusSheet {
    /// The attribute the bonuses belong to.
    pub attribute: Attribute,
    /// Common successes plus the fixed critical success.
    pub total_successes: u32,
    /// Named bonus values in display order.
    pub stats: Vec<BonusStat>,
}

impl BonusSheet {
    /// Look up a bonus value by key.
    pub fn get(&self, key: &str) -> Option<u32> {
        self.stats.iter().find(|s| s.key == key).map(|s| s.value)
    }
}

impl std::fmt::Display for BonusSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.stats.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// A step of the Charisma affinity staircase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AffinityTier {
    /// Lowest total successes that reaches this tier.
    pub min_total: u32,
    /// Affinity granted.
    pub affinity: u32,
}

impl AffinityTier {
    const fn new(min_total: u32, affinity: u32) -> Self {
        Self {
            min_total,
            affinity,
        }
    }
}

/// Charisma affinity tiers in ascending order of `min_total`.
pub const AFFINITY_TIERS: [AffinityTier; 13] = [
    AffinityTier::new(8, 3),
    AffinityTier::new(11, 4),
    AffinityTier::new(15, 5),
    AffinityTier::new(19, 6),
    AffinityTier::new(23, 7),
    AffinityTier::new(27, 8),
    AffinityTier::new(31, 11),
    AffinityTier::new(41, 12),
    AffinityTier::new(49, 14),
    AffinityTier::new(58, 18),
    AffinityTier::new(68, 20),
    AffinityTier::new(80, 22),
    AffinityTier::new(91, 26),
];

/// Dodge chance never exceeds this percentage.
pub const DODGE_CAP: u32 = 75;

/// Affinity for a Charisma total; zero below the first tier.
pub fn affinity(total_successes: u32) -> u32 {
    AFFINITY_TIERS
        .iter()
        .rev()
        .find(|tier| total_successes >= tier.min_total)
        .map_or(0, |tier| tier.affinity)
}

/// The affinity staircase as inclusive `(min, max, affinity)` rows.
///
/// The last row is open-ended and has no maximum.
pub fn affinity_table() -> Vec<(u32, Option<u32>, u32)> {
    AFFINITY_TIERS
        .iter()
        .enumerate()
        .map(|(i, tier)| {
            let max = AFFINITY_TIERS.get(i + 1).map(|next| next.min_total - 1);
            (tier.min_total, max, tier.affinity)
        })
        .collect()
}

/// Compute the bonuses for `attribute` given its common success count.
pub fn compute_bonus(attribute: Attribute, success_count: u32) -> BonusSheet {
    let total = success_count.saturating_add(CRITICAL_SUCCESSES);
    let stats = match attribute {
        Attribute::Strength => vec![
            BonusStat::new("damage", "Damage", total / 3, StatUnit::Modifier),
            BonusStat::new("carry", "Carry", total, StatUnit::Kilograms),
        ],
        Attribute::Dexterity => vec![BonusStat::new(
            "dodge",
            "Dodge",
            total.min(DODGE_CAP),
            StatUnit::Percent,
        )],
        Attribute::Constitution => vec![BonusStat::new(
            "life",
            "Life",
            total.saturating_mul(4),
            StatUnit::Modifier,
        )],
        Attribute::Intelligence => vec![
            BonusStat::new("investigation", "Investigation", total, StatUnit::Percent),
            BonusStat::new("progress", "Progress", total / 10, StatUnit::Modifier),
        ],
        Attribute::Wisdom => vec![
            BonusStat::new("perception", "Perception", total, StatUnit::Percent),
            BonusStat::new("ingenuity", "Ingenuity", total, StatUnit::Plain),
            BonusStat::new("criticals", "Criticals", total / 10, StatUnit::Modifier),
        ],
        Attribute::Charisma => vec![
            BonusStat::new("cunning", "Cunning", total, StatUnit::Percent),
            BonusStat::new("affinity", "Affinity", affinity(total), StatUnit::Plain),
        ],
    };

    BonusSheet {
        attribute,
        total_successes: total,
        stats,
    }
}
