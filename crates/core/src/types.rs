//! Core types used throughout Pokedex
//!
//! This module contains the record being edited ([`Pokemon`]) and the closed
//! set of elemental types it can carry ([`PokemonType`]).

use crate::error::{PokedexError, PokedexResult};
use crate::traits::Validatable;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Identifiers & Limits
// ============================================================================

/// Type alias for record identifiers (the pokedex number)
pub type PokemonId = u32;

/// Minimum number of types a record carries
pub const MIN_TYPES: usize = 1;

/// Maximum number of types a record carries
pub const MAX_TYPES: usize = 3;

/// Largest hit points value
pub const MAX_HP: u32 = 999;

/// Largest combat points value
pub const MAX_CP: u32 = 99;

// ============================================================================
// Pokemon Types
// ============================================================================

/// Elemental type of a pokemon
///
/// Serialized as its French label (`"Fée"`, `"Electrik"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum PokemonType {
    Plante,
    Feu,
    Eau,
    Insecte,
    Normal,
    Electrik,
    Poison,
    Fee,
    Vol,
    Combat,
    Psy,
}

impl PokemonType {
    /// All types, in the order the form lists them
    pub fn all() -> &'static [PokemonType] {
        &[
            PokemonType::Plante,
            PokemonType::Feu,
            PokemonType::Eau,
            PokemonType::Insecte,
            PokemonType::Normal,
            PokemonType::Electrik,
            PokemonType::Poison,
            PokemonType::Fee,
            PokemonType::Vol,
            PokemonType::Combat,
            PokemonType::Psy,
        ]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            PokemonType::Plante => "Plante",
            PokemonType::Feu => "Feu",
            PokemonType::Eau => "Eau",
            PokemonType::Insecte => "Insecte",
            PokemonType::Normal => "Normal",
            PokemonType::Electrik => "Electrik",
            PokemonType::Poison => "Poison",
            PokemonType::Fee => "Fée",
            PokemonType::Vol => "Vol",
            PokemonType::Combat => "Combat",
            PokemonType::Psy => "Psy",
        }
    }

    /// Colour classes used to render the type as a chip
    pub fn css_class(&self) -> &'static str {
        match self {
            PokemonType::Feu => "red lighten-1",
            PokemonType::Eau => "blue lighten-1",
            PokemonType::Plante => "green lighten-1",
            PokemonType::Insecte => "brown lighten-1",
            PokemonType::Normal => "grey lighten-3",
            PokemonType::Vol => "blue lighten-3",
            PokemonType::Poison => "deep-purple accent-1",
            PokemonType::Fee => "pink lighten-4",
            PokemonType::Psy => "deep-purple darken-2",
            PokemonType::Electrik => "lime accent-1",
            PokemonType::Combat => "deep-orange",
        }
    }

    /// Full chip class string (`chip` plus colour classes)
    pub fn chip_class(&self) -> String {
        format!("chip {}", self.css_class())
    }
}

impl std::fmt::Display for PokemonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for PokemonType {
    type Err = PokedexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PokemonType::all()
            .iter()
            .copied()
            .find(|t| t.label() == s)
            .ok_or_else(|| PokedexError::UnknownType(s.to_string()))
    }
}

impl TryFrom<String> for PokemonType {
    type Error = PokedexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PokemonType> for &'static str {
    fn from(value: PokemonType) -> Self {
        value.label()
    }
}

// ============================================================================
// Pokemon Record
// ============================================================================

/// A pokemon record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: PokemonId,
    pub name: String,
    /// Hit points
    pub hp: u32,
    /// Combat points (damage)
    pub cp: u32,
    /// Picture URL
    pub picture: String,
    /// Elemental types, in selection order
    pub types: Vec<PokemonType>,
    /// Date the record was added
    pub created: NaiveDate,
}

impl Pokemon {
    /// Create a record with the default picture, no types, and today's date
    pub fn new(id: PokemonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hp: 0,
            cp: 0,
            picture: Self::default_picture(id),
            types: Vec::new(),
            created: Utc::now().date_naive(),
        }
    }

    /// Set hit points and combat points
    pub fn with_stats(mut self, hp: u32, cp: u32) -> Self {
        self.hp = hp;
        self.cp = cp;
        self
    }

    /// Set the elemental types
    pub fn with_types(mut self, types: impl IntoIterator<Item = PokemonType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Set the picture URL
    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = picture.into();
        self
    }

    /// Set the creation date
    pub fn with_created(mut self, created: NaiveDate) -> Self {
        self.created = created;
        self
    }

    /// Official artwork URL for a pokedex number
    pub fn default_picture(id: PokemonId) -> String {
        format!(
            "https://assets.pokemon.com/assets/cms2/img/pokedex/detail/{:03}.png",
            id
        )
    }

    /// Check if the record carries a type
    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.contains(&pokemon_type)
    }

    /// Creation date as `dd/mm/yyyy`
    pub fn formatted_created(&self) -> String {
        self.created.format("%d/%m/%Y").to_string()
    }
}

impl Validatable for Pokemon {
    fn validate(&self) -> PokedexResult<()> {
        if self.name.trim().is_empty() {
            return Err(PokedexError::invalid_pokemon(self.id, "name is required"));
        }

        if self.hp > MAX_HP {
            return Err(PokedexError::invalid_pokemon(
                self.id,
                format!("hp must be at most {}", MAX_HP),
            ));
        }

        if self.cp > MAX_CP {
            return Err(PokedexError::invalid_pokemon(
                self.id,
                format!("cp must be at most {}", MAX_CP),
            ));
        }

        if !(MIN_TYPES..=MAX_TYPES).contains(&self.types.len()) {
            return Err(PokedexError::invalid_pokemon(
                self.id,
                format!(
                    "must have between {} and {} types, found {}",
                    MIN_TYPES,
                    MAX_TYPES,
                    self.types.len()
                ),
            ));
        }

        let mut seen = HashSet::new();
        for pokemon_type in &self.types {
            if !seen.insert(pokemon_type) {
                return Err(PokedexError::invalid_pokemon(
                    self.id,
                    format!("type '{}' listed twice", pokemon_type),
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
