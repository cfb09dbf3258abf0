//! Render many concept cells from a JSON document.
//!
//! Input is an array of objects:
//!
//! ```json
//! [{ "concept_id": 3, "male": 12, "female": "9" }, { "id": "4" }]
//! ```
//!
//! Ids and values may be strings or JSON numbers; numbers keep their exact
//! decimal text. Missing or `null` values render as empty inputs.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::{FragmentError, Result};
use crate::fragment::build_paired_cell;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRequest {
    #[serde(alias = "id", deserialize_with = "text_or_number")]
    pub concept_id: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub male: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub female: String,
}

impl CellRequest {
    pub fn new(concept_id: impl Into<String>) -> Self {
        Self {
            concept_id: concept_id.into(),
            male: String::new(),
            female: String::new(),
        }
    }

    pub fn with_values(mut self, male: impl Into<String>, female: impl Into<String>) -> Self {
        self.male = male.into();
        self.female = female.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCell {
    pub concept_id: String,
    pub html: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Num(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(match value {
        None => String::new(),
        Some(Scalar::Text(s)) => s,
        Some(Scalar::Num(n)) => n.to_string(),
    })
}

pub fn render_cell(req: &CellRequest) -> String {
    build_paired_cell(&req.concept_id, &req.male, &req.female)
}

/// Decode a batch document and reject entries without a concept id.
pub fn parse_cells(json: &str) -> Result<Vec<CellRequest>> {
    let cells: Vec<CellRequest> = serde_json::from_str(json)?;
    if let Some(index) = cells.iter().position(|c| c.concept_id.trim().is_empty()) {
        return Err(FragmentError::empty_concept_id(index));
    }
    debug!(count = cells.len(), "parsed batch");
    Ok(cells)
}

pub fn render_cells(cells: &[CellRequest]) -> Vec<RenderedCell> {
    cells
        .iter()
        .map(|c| RenderedCell {
            concept_id: c.concept_id.clone(),
            html: render_cell(c),
        })
        .collect()
}

/// Parse, render, and re-encode as a JSON array of `{concept_id, html}`.
pub fn render_batch_json(json: &str) -> Result<String> {
    let cells = parse_cells(json)?;
    let rendered = render_cells(&cells);
    Ok(serde_json::to_string_pretty(&rendered)?)
}
