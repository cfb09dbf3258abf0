//! HTML fragment builders for the aprovechamiento inputs.
//!
//! Every interpolated id and value is escaped. Initial values are passed
//! through otherwise; the digit filter only runs when the user edits.

mod cell;
mod input;
pub(crate) mod util;

use crate::sexo::Sexo;

/// Render one numeric input for `concept_id`.
///
/// `category` `"M"` selects the male styling; any other value falls back to
/// female, matching the behaviour of the capture page. The category itself
/// is kept verbatim (escaped) in the element id and `data-sexo`.
pub fn build_input_fragment(concept_id: &str, category: &str, initial_value: &str) -> String {
    input::build_input(concept_id, Sexo::from_marker(category), category, initial_value)
}

/// Render the horizontal male/female pair for `concept_id`.
pub fn build_paired_cell(concept_id: &str, male_value: &str, female_value: &str) -> String {
    cell::build_cell(concept_id, male_value, female_value)
}

/// Parameters for a single input, with the initial value defaulting to empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDescriptor {
    pub concept_id: String,
    pub sexo: Sexo,
    pub initial_value: String,
}

impl InputDescriptor {
    pub fn new(concept_id: impl Into<String>, sexo: Sexo) -> Self {
        Self {
            concept_id: concept_id.into(),
            sexo,
            initial_value: String::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    /// Element id of the rendered input.
    pub fn element_id(&self) -> String {
        format!("input_{}_{}", self.concept_id, self.sexo.marker())
    }

    pub fn render(&self) -> String {
        render_input(self)
    }
}

pub fn render_input(desc: &InputDescriptor) -> String {
    input::build_input(&desc.concept_id, desc.sexo, desc.sexo.marker(), &desc.initial_value)
}
