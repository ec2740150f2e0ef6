//! Error types for Pokedex
//!
//! This module provides unified error handling for the record store and the
//! dataset loader.

use crate::types::PokemonId;
use thiserror::Error;

/// The main error type for Pokedex
#[derive(Debug, Error)]
pub enum PokedexError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// A record failed its consistency checks
    #[error("Invalid pokemon #{id}: {message}")]
    InvalidPokemon { id: PokemonId, message: String },

    /// Label that is not one of the known elemental types
    #[error("Unknown pokemon type: '{0}'")]
    UnknownType(String),

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// Record not found
    #[error("Pokemon not found: #{0}")]
    PokemonNotFound(PokemonId),

    /// Two records share an identifier
    #[error("Duplicate pokemon id: #{0} already exists")]
    DuplicatePokemon(PokemonId),

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl PokedexError {
    /// Create an invalid record error
    pub fn invalid_pokemon(id: PokemonId, msg: impl Into<String>) -> Self {
        PokedexError::InvalidPokemon {
            id,
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PokedexError::InvalidPokemon { .. } | PokedexError::UnknownType(_)
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::PokemonNotFound(_))
    }
}

/// Result type alias using PokedexError
pub type PokedexResult<T> = Result<T, PokedexError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pokemon_error() {
        let err = PokedexError::invalid_pokemon(25, "too many types");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Invalid pokemon #25: too many types");
    }

    #[test]
    fn test_unknown_type_error() {
        let err = PokedexError::UnknownType("Dragon".to_string());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Unknown pokemon type: 'Dragon'");
    }

    #[test]
    fn test_not_found_error() {
        let err = PokedexError::PokemonNotFound(151);
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Pokemon not found: #151");
    }

    #[test]
    fn test_duplicate_error() {
        let err = PokedexError::DuplicatePokemon(4);
        assert_eq!(err.to_string(), "Duplicate pokemon id: #4 already exists");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PokedexError = json_err.into();
        assert!(matches!(err, PokedexError::JsonSerialization(_)));
        assert!(!err.is_validation());
    }
}
