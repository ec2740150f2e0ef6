//! # Pokemon Form Component
//!
//! Edit form for a single record: name, hit points, combat points and types.
//!
//! Text fields are checked only on submit and show their errors inline. The
//! type checklist never shows errors; instead it disables the checkboxes whose
//! toggle would leave fewer than one or more than three types selected. A
//! successful submit navigates to the record's detail page.
//!

use dioxus::prelude::*;
use pokedex_core::{Pokemon, PokemonType};

use crate::app::Route;
use crate::components::TypeBadge;
use crate::components::inputs::{Checkbox, FormGroup, TextInput};
use crate::form::{PokemonFormState, SubmitOutcome, TextField};

// ============================================================================
// Component Props
// ============================================================================

#[derive(Props, Clone, PartialEq)]
pub struct PokemonFormProps {
    /// Record being edited; read once when the form mounts
    pub pokemon: Pokemon,
}

// ============================================================================
// Main Component
// ============================================================================

/// Pokemon edit form
#[component]
pub fn PokemonForm(props: PokemonFormProps) -> Element {
    let pokemon = props.pokemon;
    let id = pokemon.id;
    let mut form = use_signal(|| PokemonFormState::from_pokemon(&pokemon));
    let navigator = use_navigator();

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let (next, outcome) = form.read().submit(id);
        form.set(next);

        match outcome {
            SubmitOutcome::Navigate(id) => {
                tracing::info!("Pokemon #{} form valid, opening detail page", id);
                navigator.push(Route::PokemonDetail { id });
            }
            SubmitOutcome::Stay => {
                tracing::debug!("Pokemon #{} form invalid, staying on form", id);
            }
        }
    };

    let snapshot = form.read().clone();

    rsx! {
        form {
            onsubmit: handle_submit,

            div {
                class: "row",
                div {
                    class: "col s12 m8 offset-m2",
                    div {
                        class: "card hoverable",

                        div {
                            class: "card-image",
                            img {
                                src: "{pokemon.picture}",
                                alt: "{pokemon.name}",
                                style: "width: 250px; margin: 0 auto;",
                            }
                        }

                        div {
                            class: "card-stacked",
                            div {
                                class: "card-content",

                                // Name, hit points, combat points
                                for field in TextField::all().iter().copied() {
                                    TextInput {
                                        key: "{field.input_name()}",
                                        name: field.input_name(),
                                        label: field.label(),
                                        input_type: field.input_type(),
                                        value: snapshot.field(field).value.clone(),
                                        error: snapshot.field(field).error.clone(),
                                        on_change: move |value: String| {
                                            let next = form.read().with_input(field, value);
                                            form.set(next);
                                        },
                                    }
                                }

                                // Types
                                FormGroup {
                                    label: "Types",
                                    for pokemon_type in PokemonType::all().iter().copied() {
                                        div {
                                            key: "{pokemon_type}",
                                            style: "margin-bottom: 10px;",
                                            Checkbox {
                                                id: pokemon_type.label(),
                                                checked: snapshot.has_type(pokemon_type),
                                                disabled: !snapshot.is_type_selectable(pokemon_type),
                                                on_change: move |checked: bool| {
                                                    let next = form.read().with_type_selected(pokemon_type, checked);
                                                    form.set(next);
                                                },
                                                TypeBadge { pokemon_type }
                                            }
                                        }
                                    }
                                }
                            }

                            div {
                                class: "card-action center",
                                button {
                                    r#type: "submit",
                                    class: "btn",
                                    "Valider"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
