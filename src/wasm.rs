//! WASM bindings for the fragment builders.
//!
//! Lets the capture page call the builders directly from JavaScript.
//! Build with: `wasm-pack build --target web --features wasm`

use wasm_bindgen::prelude::*;

/// Render one numeric input. `sexo` other than `"M"` renders as female.
#[wasm_bindgen(js_name = crearInputAprovechamiento)]
pub fn crear_input_aprovechamiento(aprovechamiento_id: &str, sexo: &str, valor: Option<String>) -> String {
    crate::fragment::build_input_fragment(aprovechamiento_id, sexo, valor.as_deref().unwrap_or(""))
}

/// Render the male/female pair for one concept.
#[wasm_bindgen(js_name = crearCeldaAprovechamiento)]
pub fn crear_celda_aprovechamiento(
    aprovechamiento_id: &str,
    valor_m: Option<String>,
    valor_f: Option<String>,
) -> String {
    crate::fragment::build_paired_cell(
        aprovechamiento_id,
        valor_m.as_deref().unwrap_or(""),
        valor_f.as_deref().unwrap_or(""),
    )
}

/// Render a JSON batch of cells.
///
/// Returns a JSON array of `{concept_id, html}`, or throws a JS error on
/// malformed input.
#[wasm_bindgen(js_name = renderBatch)]
pub fn render_batch(json: &str) -> Result<String, JsError> {
    crate::batch::render_batch_json(json).map_err(|e| JsError::new(&e.to_string()))
}
