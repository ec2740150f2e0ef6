//! # Input Components
//!
//! Form input components for the Pokedex UI.
//!
//! - **TextInput**: Single-line input (text or number) with inline error panel
//! - **Checkbox**: Checkbox with arbitrary label content
//! - **FormGroup**: Labelled wrapper for a group of inputs
//!
//! Inputs are controlled: they render the value they are given and report
//! raw changes through `on_change`. Validation is the caller's business.

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Used for both the `id` and `name` attributes
    #[props(into)]
    pub name: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Error message (shows error panel)
    #[props(default)]
    pub error: Option<String>,

    /// Input type (text, number, etc.)
    #[props(into, default = "text".to_string())]
    pub input_type: String,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler, called with the raw value
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Single-line input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let has_error = props.error.as_deref().is_some_and(|e| !e.is_empty());
    let input_class = build_input_class(has_error, props.disabled);

    rsx! {
        div {
            class: "form-group",

            // Label
            if let Some(label) = &props.label {
                label {
                    r#for: "{props.name}",
                    "{label}"
                }
            }

            // Input
            input {
                id: "{props.name}",
                name: "{props.name}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                disabled: props.disabled,
                oninput: move |e| props.on_change.call(e.value()),
            }

            // Error panel
            if let Some(error) = props.error.as_ref().filter(|_| has_error) {
                div {
                    class: "card-panel red accent-1",
                    "{error}"
                }
            }
        }
    }
}

// ============================================================================
// Checkbox Component
// ============================================================================

/// Properties for Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Whether checked
    pub checked: bool,

    /// Input `id` and `value`
    #[props(into)]
    pub id: String,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler, called with the new checked state
    #[props(default)]
    pub on_change: EventHandler<bool>,

    /// Label content
    pub children: Element,
}

/// Checkbox input component
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let wrapper_class = build_checkbox_class(props.disabled);

    rsx! {
        label {
            class: "{wrapper_class}",

            input {
                id: "{props.id}",
                class: "filled-in",
                r#type: "checkbox",
                value: "{props.id}",
                checked: props.checked,
                disabled: props.disabled,
                onchange: move |_| {
                    if !props.disabled {
                        props.on_change.call(!props.checked);
                    }
                },
            }

            span { {props.children} }
        }
    }
}

// ============================================================================
// Form Group Component
// ============================================================================

/// Properties for FormGroup component
#[derive(Props, Clone, PartialEq)]
pub struct FormGroupProps {
    /// Group label
    #[props(default)]
    pub label: Option<String>,

    /// Children
    pub children: Element,
}

/// Form group wrapper component
#[component]
pub fn FormGroup(props: FormGroupProps) -> Element {
    rsx! {
        div {
            class: "form-group",

            if let Some(label) = &props.label {
                label { "{label}" }
            }

            {props.children}
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec!["form-control"];

    if has_error {
        classes.push("invalid");
    }

    if disabled {
        classes.push("disabled");
    }

    classes.join(" ")
}

/// Build checkbox label class string
fn build_checkbox_class(disabled: bool) -> String {
    let mut classes = vec!["checkbox"];

    if disabled {
        classes.push("checkbox-disabled");
    }

    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================
