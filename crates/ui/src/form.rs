//! # Pokemon Form State
//!
//! Pure state for the pokemon edit form. Every handler takes the current
//! snapshot and returns the next one; the component swaps the whole snapshot
//! into its signal, so a handler always sees a consistent form.
//!
//! Field lifecycle (name, hp, cp):
//!
//! ```text
//! Untouched (is_valid = Some(true)) --edit--> Edited (no annotation)
//! Edited --submit--> Valid (Some(true)) | Invalid (Some(false) + message)
//! Valid | Invalid --edit--> Edited
//! ```
//!
//! Types are never validated after the fact: the selector refuses moves that
//! would leave fewer than one or more than three types selected.

use pokedex_core::{MAX_TYPES, MIN_TYPES, Pokemon, PokemonId, PokemonType};
use regex::Regex;
use std::sync::LazyLock;

// ============================================================================
// Validation Rules
// ============================================================================

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Zàéè ]{3,25}$").expect("name pattern is valid"));

static HP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}$").expect("hp pattern is valid"));

static CP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}$").expect("cp pattern is valid"));

/// Shown when the name fails validation
pub const NAME_ERROR: &str =
    "nom invalide, il doit contenir entre 3 et 25 lettres sans caractères spéciaux";

/// Shown when the hit points fail validation
pub const HP_ERROR: &str =
    "Les points de vie du pokémon ne peuvent contenir que des chiffres, au maximum 999";

/// Shown when the combat points fail validation
pub const CP_ERROR: &str =
    "Les dégats du pokémon ne peuvent contenir que des chiffres, au maximum 99";

// ============================================================================
// Text Fields
// ============================================================================

/// The free-text fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Hp,
    Cp,
}

impl TextField {
    /// All text fields, in display order
    pub fn all() -> &'static [TextField] {
        &[TextField::Name, TextField::Hp, TextField::Cp]
    }

    /// Value of the input's `id` and `name` attributes
    pub fn input_name(&self) -> &'static str {
        match self {
            TextField::Name => "name",
            TextField::Hp => "hp",
            TextField::Cp => "cp",
        }
    }

    /// Label shown above the input
    pub fn label(&self) -> &'static str {
        match self {
            TextField::Name => "Nom",
            TextField::Hp => "Point de vie",
            TextField::Cp => "Dégâts",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            TextField::Name => "text",
            TextField::Hp | TextField::Cp => "number",
        }
    }

    /// Message shown when the value is rejected
    pub fn error_message(&self) -> &'static str {
        match self {
            TextField::Name => NAME_ERROR,
            TextField::Hp => HP_ERROR,
            TextField::Cp => CP_ERROR,
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            TextField::Name => &*NAME_PATTERN,
            TextField::Hp => &*HP_PATTERN,
            TextField::Cp => &*CP_PATTERN,
        }
    }

    /// Check a raw value against the field's pattern
    pub fn accepts(&self, value: &str) -> bool {
        self.pattern().is_match(value)
    }

    /// Annotate a value with the outcome of validation
    pub fn validate(&self, value: &str) -> Field<String> {
        if self.accepts(value) {
            Field::validated(value.to_string(), None)
        } else {
            Field::validated(value.to_string(), Some(self.error_message()))
        }
    }
}

// ============================================================================
// Field
// ============================================================================

/// A form value with its validation annotation
#[derive(Debug, Clone, PartialEq)]
pub struct Field<T> {
    pub value: T,
    /// Message from the last failed validation
    pub error: Option<String>,
    /// `None` once edited, until the next submit
    pub is_valid: Option<bool>,
}

impl<T> Field<T> {
    /// Field seeded from the record; considered valid
    pub fn pristine(value: T) -> Self {
        Self {
            value,
            error: None,
            is_valid: Some(true),
        }
    }

    /// Field changed by the user; annotation dropped
    pub fn edited(value: T) -> Self {
        Self {
            value,
            error: None,
            is_valid: None,
        }
    }

    fn validated(value: T, error: Option<&str>) -> Self {
        Self {
            value,
            is_valid: Some(error.is_none()),
            error: error.map(str::to_string),
        }
    }

    /// Check if the last validation passed
    pub fn is_valid(&self) -> bool {
        self.is_valid == Some(true)
    }
}

// ============================================================================
// Form State
// ============================================================================

/// What the submit handler should do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Go to the detail page of this record
    Navigate(PokemonId),
    /// Stay on the form; errors are displayed inline
    Stay,
}

/// Snapshot of the edit form
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonFormState {
    pub name: Field<String>,
    pub hp: Field<String>,
    pub cp: Field<String>,
    pub types: Field<Vec<PokemonType>>,
}

impl PokemonFormState {
    /// Seed the form from a record
    pub fn from_pokemon(pokemon: &Pokemon) -> Self {
        Self {
            name: Field::pristine(pokemon.name.clone()),
            hp: Field::pristine(pokemon.hp.to_string()),
            cp: Field::pristine(pokemon.cp.to_string()),
            types: Field::pristine(pokemon.types.clone()),
        }
    }

    /// Get a text field
    pub fn field(&self, field: TextField) -> &Field<String> {
        match field {
            TextField::Name => &self.name,
            TextField::Hp => &self.hp,
            TextField::Cp => &self.cp,
        }
    }

    fn with_field(&self, field: TextField, value: Field<String>) -> Self {
        let mut next = self.clone();
        match field {
            TextField::Name => next.name = value,
            TextField::Hp => next.hp = value,
            TextField::Cp => next.cp = value,
        }
        next
    }

    /// Replace a text field's value, clearing its annotation
    pub fn with_input(&self, field: TextField, raw_value: impl Into<String>) -> Self {
        self.with_field(field, Field::edited(raw_value.into()))
    }

    /// Check if a type is selected
    pub fn has_type(&self, pokemon_type: PokemonType) -> bool {
        self.types.value.contains(&pokemon_type)
    }

    /// Check if the checkbox for a type may be toggled
    ///
    /// The sole selected type cannot be removed, and nothing can be added once
    /// the maximum is reached.
    pub fn is_type_selectable(&self, pokemon_type: PokemonType) -> bool {
        let selected = self.types.value.len();

        if selected == MIN_TYPES && self.has_type(pokemon_type) {
            return false;
        }

        if selected >= MAX_TYPES && !self.has_type(pokemon_type) {
            return false;
        }

        true
    }

    /// Check or uncheck a type
    ///
    /// Blocked transitions return the form unchanged.
    pub fn with_type_selected(&self, pokemon_type: PokemonType, checked: bool) -> Self {
        if !self.is_type_selectable(pokemon_type) {
            tracing::debug!("Ignoring blocked toggle of type {}", pokemon_type);
            return self.clone();
        }

        let types = if checked {
            if self.has_type(pokemon_type) {
                return self.clone();
            }
            let mut types = self.types.value.clone();
            types.push(pokemon_type);
            types
        } else {
            self.types
                .value
                .iter()
                .copied()
                .filter(|t| *t != pokemon_type)
                .collect()
        };

        Self {
            types: Field::edited(types),
            ..self.clone()
        }
    }

    /// Re-annotate name, hp and cp
    ///
    /// Returns the annotated form and whether all three fields passed. Types
    /// are carried over untouched.
    pub fn validated(&self) -> (Self, bool) {
        let next = Self {
            name: TextField::Name.validate(&self.name.value),
            hp: TextField::Hp.validate(&self.hp.value),
            cp: TextField::Cp.validate(&self.cp.value),
            types: self.types.clone(),
        };
        let is_valid = next.is_valid();
        (next, is_valid)
    }

    /// Check if name, hp and cp all passed their last validation
    pub fn is_valid(&self) -> bool {
        self.name.is_valid() && self.hp.is_valid() && self.cp.is_valid()
    }

    /// Validate for submission of the record `id`
    pub fn submit(&self, id: PokemonId) -> (Self, SubmitOutcome) {
        let (next, is_valid) = self.validated();
        let outcome = if is_valid {
            SubmitOutcome::Navigate(id)
        } else {
            SubmitOutcome::Stay
        };
        (next, outcome)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> Pokemon {
        Pokemon::new(25, "Pikachu")
            .with_stats(35, 55)
            .with_types([PokemonType::Electrik])
    }

    fn form_with_types(types: &[PokemonType]) -> PokemonFormState {
        PokemonFormState::from_pokemon(&pikachu().with_types(types.iter().copied()))
    }

    #[test]
    fn test_from_pokemon_is_untouched() {
        let form = PokemonFormState::from_pokemon(&pikachu());
        assert_eq!(form.name, Field::pristine("Pikachu".to_string()));
        assert_eq!(form.hp.value, "35");
        assert_eq!(form.cp.value, "55");
        assert_eq!(form.types.value, vec![PokemonType::Electrik]);
        assert!(form.is_valid());
        assert!(form.name.error.is_none());
    }

    #[test]
    fn test_name_pattern() {
        for name in ["Pikachu", "Abo", "Salamèche", "Mélofée", "Mr Mime", "àéè"] {
            assert!(TextField::Name.accepts(name), "{name} should be accepted");
        }
        assert!(TextField::Name.accepts(&"a".repeat(25)));

        let too_long = "a".repeat(26);
        for name in ["Pi", "", "Pikachu2", "Ho-Oh", "Évoli", too_long.as_str()] {
            assert!(!TextField::Name.accepts(name), "{name} should be rejected");
        }
    }

    #[test]
    fn test_hp_pattern() {
        for hp in ["0", "7", "35", "999"] {
            assert!(TextField::Hp.accepts(hp));
        }
        for hp in ["", "1000", "12a", "-1", "3.5"] {
            assert!(!TextField::Hp.accepts(hp));
        }
    }

    #[test]
    fn test_cp_pattern() {
        for cp in ["0", "9", "99"] {
            assert!(TextField::Cp.accepts(cp));
        }
        for cp in ["", "100", "abc", "1 "] {
            assert!(!TextField::Cp.accepts(cp));
        }
    }

    #[test]
    fn test_input_clears_annotation() {
        let form = PokemonFormState::from_pokemon(&pikachu()).with_input(TextField::Name, "Pi");
        let (invalid, _) = form.validated();
        assert_eq!(invalid.name.error.as_deref(), Some(NAME_ERROR));

        let edited = invalid.with_input(TextField::Name, "Pik");
        assert_eq!(edited.name, Field::edited("Pik".to_string()));
        // Other fields keep their annotation
        assert_eq!(edited.hp, invalid.hp);
    }

    #[test]
    fn test_input_does_not_validate() {
        let form = PokemonFormState::from_pokemon(&pikachu()).with_input(TextField::Hp, "12a");
        assert_eq!(form.hp.value, "12a");
        assert!(form.hp.error.is_none());
        assert_eq!(form.hp.is_valid, None);
        assert!(!form.is_valid());
    }

    #[test]
    fn test_validation_messages() {
        let form = PokemonFormState::from_pokemon(&pikachu())
            .with_input(TextField::Name, "Pikachu!")
            .with_input(TextField::Hp, "1000")
            .with_input(TextField::Cp, "100");

        let (validated, is_valid) = form.validated();
        assert!(!is_valid);
        assert_eq!(validated.name.error.as_deref(), Some(NAME_ERROR));
        assert_eq!(validated.hp.error.as_deref(), Some(HP_ERROR));
        assert_eq!(validated.cp.error.as_deref(), Some(CP_ERROR));
        assert_eq!(validated.cp.is_valid, Some(false));
    }

    #[test]
    fn test_validation_ignores_types() {
        let mut form = PokemonFormState::from_pokemon(&pikachu());
        form.types = Field::edited(Vec::new());

        let (validated, is_valid) = form.validated();
        assert!(is_valid);
        assert_eq!(validated.types, form.types);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let form = PokemonFormState::from_pokemon(&pikachu()).with_input(TextField::Cp, "abc");
        let (once, first) = form.validated();
        let (twice, second) = once.validated();
        assert_eq!(once, twice);
        assert_eq!(first, second);
    }

    #[test]
    fn test_select_type_appends_in_order() {
        let form = form_with_types(&[PokemonType::Electrik])
            .with_type_selected(PokemonType::Vol, true)
            .with_type_selected(PokemonType::Feu, true);
        assert_eq!(
            form.types.value,
            vec![PokemonType::Electrik, PokemonType::Vol, PokemonType::Feu]
        );
        assert_eq!(form.types.is_valid, None);
    }

    #[test]
    fn test_unselect_type() {
        let form = form_with_types(&[PokemonType::Normal, PokemonType::Vol])
            .with_type_selected(PokemonType::Normal, false);
        assert_eq!(form.types.value, vec![PokemonType::Vol]);
    }

    #[test]
    fn test_sole_type_cannot_be_removed() {
        let form = form_with_types(&[PokemonType::Electrik]);
        assert!(!form.is_type_selectable(PokemonType::Electrik));
        assert!(form.is_type_selectable(PokemonType::Eau));

        let after = form.with_type_selected(PokemonType::Electrik, false);
        assert_eq!(after, form);
        assert_eq!(after.types.value, vec![PokemonType::Electrik]);
    }

    #[test]
    fn test_fourth_type_cannot_be_added() {
        let form = form_with_types(&[PokemonType::Feu, PokemonType::Eau, PokemonType::Vol]);
        assert!(!form.is_type_selectable(PokemonType::Psy));
        assert!(form.is_type_selectable(PokemonType::Feu));

        let after = form.with_type_selected(PokemonType::Psy, true);
        assert_eq!(after.types.value.len(), 3);
        assert!(!after.has_type(PokemonType::Psy));

        // Removing one frees a slot
        let freed = form.with_type_selected(PokemonType::Eau, false);
        assert!(freed.is_type_selectable(PokemonType::Psy));
    }

    #[test]
    fn test_select_existing_type_is_noop() {
        let form = form_with_types(&[PokemonType::Feu, PokemonType::Vol]);
        assert_eq!(form.with_type_selected(PokemonType::Vol, true), form);
    }

    #[test]
    fn test_submit_valid_navigates() {
        let form = PokemonFormState::from_pokemon(&pikachu());
        let (next, outcome) = form.submit(25);
        assert_eq!(outcome, SubmitOutcome::Navigate(25));
        assert!(next.name.is_valid() && next.hp.is_valid() && next.cp.is_valid());
        assert!(next.name.error.is_none());
    }

    #[test]
    fn test_submit_short_name_stays() {
        let form = PokemonFormState::from_pokemon(&pikachu()).with_input(TextField::Name, "Pi");
        let (next, outcome) = form.submit(25);
        assert_eq!(outcome, SubmitOutcome::Stay);
        assert_eq!(next.name.is_valid, Some(false));
        assert_eq!(next.name.error.as_deref(), Some(NAME_ERROR));
        assert!(next.hp.is_valid());
        assert!(next.cp.is_valid());
    }

    #[test]
    fn test_text_field_metadata() {
        assert_eq!(TextField::all().len(), 3);
        assert_eq!(TextField::Name.input_name(), "name");
        assert_eq!(TextField::Hp.input_type(), "number");
        assert_eq!(TextField::Cp.label(), "Dégâts");
        assert_eq!(TextField::Hp.error_message(), HP_ERROR);
    }
}
