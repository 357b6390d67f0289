//! The six character attributes and a map keyed by them.
//!
//! The attribute set is closed, so per-attribute state lives in an
//! [`AttributeMap`], a fixed-size array indexed by [`Attribute`]. Every
//! attribute always has a value; there is no "missing key" case.

use std::ops::{Index, IndexMut};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{MechError, MechResult};

/// A character attribute. Each one gates its own deck and bonus formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Raw power (Força).
    Strength,
    /// Agility and reflexes (Destreza).
    Dexterity,
    /// Endurance and vigor (Constituição).
    Constitution,
    /// Mind and reason (Inteligência).
    Intelligence,
    /// Perception and intuition (Sabedoria).
    Wisdom,
    /// Presence and influence (Carisma).
    Charisma,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    /// Position of this attribute in [`Attribute::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Strength => 0,
            Self::Dexterity => 1,
            Self::Constitution => 2,
            Self::Intelligence => 3,
            Self::Wisdom => 4,
            Self::Charisma => 5,
        }
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::Intelligence => "Intelligence",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }

    /// Name used on the Portuguese character sheet.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Strength => "Força",
            Self::Dexterity => "Destreza",
            Self::Constitution => "Constituição",
            Self::Intelligence => "Inteligência",
            Self::Wisdom => "Sabedoria",
            Self::Charisma => "Carisma",
        }
    }

    /// Three-letter abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Dexterity => "DEX",
            Self::Constitution => "CON",
            Self::Intelligence => "INT",
            Self::Wisdom => "WIS",
            Self::Charisma => "CHA",
        }
    }

    /// Parse an attribute from user input.
    ///
    /// Accepts English and Portuguese names (accents optional) and the
    /// three-letter abbreviations, case-insensitively.
    pub fn parse(s: &str) -> MechResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" | "str" | "força" | "forca" | "for" => Ok(Self::Strength),
            "dexterity" | "dex" | "destreza" | "des" => Ok(Self::Dexterity),
            "constitution" | "con" | "constituição" | "constituicao" => Ok(Self::Constitution),
            "intelligence" | "int" | "inteligência" | "inteligencia" => Ok(Self::Intelligence),
            "wisdom" | "wis" | "sabedoria" | "sab" => Ok(Self::Wisdom),
            "charisma" | "cha" | "carisma" | "car" => Ok(Self::Charisma),
            _ => Err(MechError::UnknownAttribute(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Attribute {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A value for every attribute, stored in a fixed-size array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMap<T> {
    values: [T; 6],
}

impl<T> AttributeMap<T> {
    /// Build a map by calling `f` once per attribute, in display order.
    pub fn from_fn(mut f: impl FnMut(Attribute) -> T) -> Self {
        Self {
            values: std::array::from_fn(|i| f(Attribute::ALL[i])),
        }
    }

    /// Iterate over `(attribute, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &T)> {
        Attribute::ALL.into_iter().zip(self.values.iter())
    }

    /// Iterate mutably over `(attribute, value)` pairs in display order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Attribute, &mut T)> {
        Attribute::ALL.into_iter().zip(self.values.iter_mut())
    }

    /// Iterate over the values in display order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Transform every value, keeping the attribute keys.
    pub fn map<U>(&self, mut f: impl FnMut(Attribute, &T) -> U) -> AttributeMap<U> {
        AttributeMap::from_fn(|attr| f(attr, &self[attr]))
    }
}

impl<T: Clone> AttributeMap<T> {
    /// A map holding the same value for every attribute.
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T: Default> Default for AttributeMap<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Attribute> for AttributeMap<T> {
    type Output = T;

    fn index(&self, attr: Attribute) -> &T {
        &self.values[attr.index()]
    }
}

impl<T> IndexMut<Attribute> for AttributeMap<T> {
    fn index_mut(&mut self, attr: Attribute) -> &mut T {
        &mut self.values[attr.index()]
    }
}

impl<T: Serialize> Serialize for AttributeMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (attr, value) in self.iter() {
            map.serialize_entry(&attr, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, attr) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn parse_english_names() {
        assert_eq!(Attribute::parse("strength").unwrap(), Attribute::Strength);
        assert_eq!(Attribute::parse("Wisdom").unwrap(), Attribute::Wisdom);
        assert_eq!(Attribute::parse("  CHARISMA ").unwrap(), Attribute::Charisma);
    }

    #[test]
    fn parse_portuguese_names() {
        assert_eq!(Attribute::parse("Força").unwrap(), Attribute::Strength);
        assert_eq!(Attribute::parse("forca").unwrap(), Attribute::Strength);
        assert_eq!(Attribute::parse("Constituição").unwrap(), Attribute::Constitution);
        assert_eq!(Attribute::parse("inteligencia").unwrap(), Attribute::Intelligence);
        assert_eq!(Attribute::parse("carisma").unwrap(), Attribute::Charisma);
    }

    #[test]
    fn parse_abbreviations() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::parse(attr.abbreviation()).unwrap(), attr);
        }
    }

    #[test]
    fn parse_unknown() {
        let err = Attribute::parse("luck").unwrap_err();
        assert_eq!(err.to_string(), "unknown attribute: luck");
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let attr: Attribute = "dex".parse().unwrap();
        assert_eq!(attr, Attribute::Dexterity);
    }

    #[test]
    fn map_from_fn_and_index() {
        let map = AttributeMap::from_fn(|a| a.index() * 10);
        assert_eq!(map[Attribute::Strength], 0);
        assert_eq!(map[Attribute::Charisma], 50);
    }

    #[test]
    fn map_index_mut() {
        let mut map = AttributeMap::splat(8u32);
        map[Attribute::Wisdom] += 1;
        assert_eq!(map[Attribute::Wisdom], 9);
        assert_eq!(map[Attribute::Dexterity], 8);
    }

    #[test]
    fn map_iter_covers_every_attribute() {
        let map = AttributeMap::splat(false);
        let keys: Vec<Attribute> = map.iter().map(|(a, _)| a).collect();
        assert_eq!(keys, Attribute::ALL.to_vec());
    }

    #[test]
    fn map_transform() {
        let counts = AttributeMap::splat(8u32);
        let totals = counts.map(|_, c| c + 1);
        assert!(totals.values().all(|&t| t == 9));
    }

    #[test]
    fn map_serializes_as_object() {
        let map = AttributeMap::from_fn(|a| a.index());
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["strength"], 0);
        assert_eq!(json["charisma"], 5);
    }
}
