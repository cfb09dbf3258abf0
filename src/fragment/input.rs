use crate::registry::style_for;
use crate::sexo::Sexo;

use super::util::{html_escape, DIGITS_ONLY_JS};

/// `marker` is written into the element id and `data-sexo`; `sexo` only
/// picks the styling.
pub(super) fn build_input(concept_id: &str, sexo: Sexo, marker: &str, initial_value: &str) -> String {
    let style = style_for(sexo);
    let id = html_escape(concept_id);
    let value = html_escape(initial_value);
    let marker = html_escape(marker);

    format!(
        r#"<div class="aprovechamiento-box {class}" style="{box_style}">
        <span class="matricula-label" style="{label_style}">{label}</span>
        <input type="number"
               id="input_{id}_{marker}"
               value="{value}"
               min="0"
               class="input-aprovechamiento-nueva"
               data-aprovechamiento="{id}"
               data-sexo="{marker}"
               oninput="{oninput}"
               style="{input_style}" placeholder="">
    </div>"#,
        class = style.class_name,
        box_style = style.box_style,
        label_style = style.label_style,
        label = style.label,
        id = id,
        marker = marker,
        value = value,
        oninput = DIGITS_ONLY_JS,
        input_style = style.input_style,
    )
}
