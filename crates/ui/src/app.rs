//! Main Application Component for Pokedex
//!
//! This module contains the root Dioxus component, the route table, and the
//! shared layout (navigation bar and content area) every page renders into.

use dioxus::prelude::*;
use pokedex_core::PokemonId;

use crate::pages::{PageNotFound, PokemonDetail, PokemonEdit, PokemonList};

// ============================================================================
// Routes
// ============================================================================

/// Application routes
#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        PokemonList {},
        #[route("/pokemons/:id")]
        PokemonDetail { id: PokemonId },
        #[route("/pokemons/edit/:id")]
        PokemonEdit { id: PokemonId },
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Pokedex UI initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Navigation bar and content area shared by all pages
#[component]
fn AppLayout() -> Element {
    rsx! {
        div {
            class: "app-container",

            nav {
                div {
                    class: "nav-wrapper teal",
                    Link {
                        to: Route::PokemonList {},
                        class: "brand-logo center",
                        "Pokédex"
                    }
                }
            }

            main {
                class: "container",
                Outlet::<Route> {}
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
