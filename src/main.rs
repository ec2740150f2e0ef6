//! Pokedex
//!
//! Pokémon browser and editor.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // Initialize logging; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    tracing::info!("Pokedex v{}", pokedex_ui::VERSION);

    // Launch the Dioxus desktop application
    pokedex_ui::launch();
}
