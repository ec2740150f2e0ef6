//! Application State Management for Pokedex
//!
//! Global state is a single Dioxus 0.7 signal holding the record store. The
//! store is read-only from the UI; edit forms keep their own local state
//! (see [`crate::form`]).

use dioxus::prelude::*;
use pokedex_core::{Pokedex, PokedexResult, Pokemon, PokemonId};

// ============================================================================
// Application State
// ============================================================================

/// Main application state container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// All known records
    pub pokedex: Pokedex,
    /// Why the dataset could not be loaded, if it failed
    pub load_error: Option<String>,
}

impl AppState {
    /// Create state from the bundled dataset
    pub fn new() -> Self {
        Self::from_load(Pokedex::bundled())
    }

    /// Create state from the outcome of a dataset load
    ///
    /// A failed load leaves an empty store and records the error for display.
    pub fn from_load(result: PokedexResult<Pokedex>) -> Self {
        match result {
            Ok(pokedex) => {
                tracing::info!("Pokedex loaded with {} pokemons", pokedex.len());
                Self {
                    pokedex,
                    load_error: None,
                }
            }
            Err(e) => {
                tracing::error!("Failed to load pokedex: {}", e);
                Self {
                    pokedex: Pokedex::new(),
                    load_error: Some(e.to_string()),
                }
            }
        }
    }
}

// ============================================================================
// Global State Context
// ============================================================================

/// Global application state signal
pub static APP_STATE: GlobalSignal<AppState> = Signal::global(AppState::new);

// ============================================================================
// State Hooks (for component use)
// ============================================================================

/// Hook to get all records in id order
pub fn use_pokemons() -> Vec<Pokemon> {
    let state = APP_STATE.read();
    state.pokedex.pokemons().cloned().collect()
}

/// Hook to look up a single record
pub fn use_pokemon(id: PokemonId) -> PokedexResult<Pokemon> {
    let state = APP_STATE.read();
    state.pokedex.get(id).cloned()
}

/// Hook to get the dataset load error, if any
pub fn use_load_error() -> Option<String> {
    let state = APP_STATE.read();
    state.load_error.clone()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_core::PokedexError;

    #[test]
    fn test_app_state_loads_bundled_dataset() {
        let state = AppState::new();
        assert!(state.load_error.is_none());
        assert!(!state.pokedex.is_empty());
        assert!(state.pokedex.get(25).is_ok());
    }

    #[test]
    fn test_app_state_failed_load() {
        let state = AppState::from_load(Err(PokedexError::DuplicatePokemon(1)));
        assert!(state.pokedex.is_empty());
        assert_eq!(
            state.load_error.as_deref(),
            Some("Duplicate pokemon id: #1 already exists")
        );
    }

    #[test]
    fn test_app_state_default_is_empty() {
        let state = AppState::default();
        assert!(state.pokedex.is_empty());
        assert!(state.load_error.is_none());
    }
}
