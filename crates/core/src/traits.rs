//! Core traits for Pokedex

use crate::error::PokedexResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use pokedex_core::{Pokemon, PokemonType, Validatable};
///
/// let pokemon = Pokemon::new(25, "Pikachu").with_types([PokemonType::Electrik]);
/// assert!(pokemon.is_valid());
///
/// let untyped = Pokemon::new(25, "Pikachu");
/// assert_eq!(untyped.validation_errors().len(), 1);
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `PokedexError` describing the problem.
    fn validate(&self) -> PokedexResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}
