//! # UI Components
//!
//! Reusable Dioxus components for the Pokedex UI.
//!
//! - **Inputs**: Form input components (text, checkbox, form group)
//! - **TypeBadge**: Coloured chip for an elemental type
//! - **PokemonCard**: Summary card linking to a record's detail page
//! - **PokemonForm**: Edit form for a record
//!
//! ## Component Hierarchy
//!
//! ```text
//! PokemonForm
//! ├── TextInput (name, hp, cp)
//! └── FormGroup
//!     └── Checkbox (one per type)
//!         └── TypeBadge
//!
//! PokemonCard
//! └── TypeBadge (multiple)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod inputs;
pub mod pokemon_card;
pub mod pokemon_form;
pub mod type_badge;

// ============================================================================
// Re-exports
// ============================================================================

pub use inputs::{Checkbox, FormGroup, TextInput};
pub use pokemon_card::PokemonCard;
pub use pokemon_form::PokemonForm;
pub use type_badge::TypeBadge;
