//! # Pokedex Core
//!
//! Core types, the record store, and error handling for Pokedex.
//!
//! - **Types**: the [`Pokemon`] record and its elemental [`PokemonType`]s
//! - **Store**: [`Pokedex`], records keyed by id, loaded from JSON
//! - **Traits**: [`Validatable`] record consistency checks
//! - **Errors**: [`PokedexError`] and [`PokedexResult`]
//!

pub mod error;
pub mod pokedex;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{PokedexError, PokedexResult};
pub use pokedex::Pokedex;
pub use traits::Validatable;
pub use types::{MAX_CP, MAX_HP, MAX_TYPES, MIN_TYPES, Pokemon, PokemonId, PokemonType};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
