//! # Pokedex UI
//!
//! Dioxus Desktop UI for Pokedex.
//!
//! ## Features
//!
//! - Pokedex list with a card per pokemon
//! - Detail page per pokemon
//! - Edit form with inline validation and a bounded type checklist
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod form;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use pokedex_core;

// Re-export main components
pub use app::{App, Route};
pub use form::{Field, PokemonFormState, SubmitOutcome, TextField};
pub use pages::{PageNotFound, PokemonDetail, PokemonEdit, PokemonList};
pub use state::{APP_STATE, AppState};

// Re-export components
pub use components::{Checkbox, FormGroup, PokemonCard, PokemonForm, TextInput, TypeBadge};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Pokedex";

/// Application display title
pub const TITLE: &str = "Pokedex - Pokémon Browser";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Pokedex desktop application
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     pokedex_ui::launch();
/// }
/// ```
pub fn launch() {
    launch_with_config(TITLE, 1100.0, 900.0);
}

/// Launch with custom configuration
///
/// Allows specifying custom window size and title.
pub fn launch_with_config(title: &str, width: f64, height: f64) {
    tracing::info!("Starting {} v{} ({}x{})", NAME, VERSION, width, height);

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(width, height))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(600.0, 500.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
