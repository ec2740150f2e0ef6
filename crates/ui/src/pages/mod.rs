//! Page Components for Pokedex
//!
//! Each page is the target of one [`crate::app::Route`] variant and carries
//! the variant's name.
//!
//! ## Available Pages
//!
//! - **PokemonList**: All records as cards
//! - **PokemonDetail**: Read-only view of one record
//! - **PokemonEdit**: Edit form for one record
//! - **PageNotFound**: Fallback for unknown paths
//!

pub mod not_found;
pub mod pokemon_detail;
pub mod pokemon_edit;
pub mod pokemon_list;

// Re-export page components for convenience
pub use not_found::{NotFoundMessage, PageNotFound};
pub use pokemon_detail::PokemonDetail;
pub use pokemon_edit::PokemonEdit;
pub use pokemon_list::PokemonList;
