//! Not Found Page

use dioxus::prelude::*;

use crate::app::Route;

/// Fallback for unknown paths
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("No route for {}", path);

    rsx! {
        NotFoundMessage { message: format!("Aucune page à l'adresse {}", path) }
    }
}

/// "Page not found" panel with a way back to the list
#[component]
pub fn NotFoundMessage(message: String) -> Element {
    rsx! {
        div {
            class: "center",
            h1 { "Hey, cette page n'existe pas !" }
            p { class: "grey-text", "{message}" }
            Link {
                to: Route::PokemonList {},
                class: "btn",
                "Retourner à l'accueil"
            }
        }
    }
}
