use crate::registry::container_style;
use crate::sexo::Sexo;

use super::input::build_input;

pub(super) fn build_cell(concept_id: &str, male_value: &str, female_value: &str) -> String {
    let male = build_input(concept_id, Sexo::Male, Sexo::Male.marker(), male_value);
    let female = build_input(concept_id, Sexo::Female, Sexo::Female.marker(), female_value);

    format!(
        r#"<div class="aprovechamiento-pair-horizontal" style="{container}">
        {male}
        {female}
    </div>"#,
        container = container_style(),
        male = male,
        female = female,
    )
}
