use thiserror::Error;

/// All errors produced while rendering aprovechamiento fragments.
///
/// The builders themselves never fail; these come from strict category
/// lookups and batch input decoding.
#[derive(Debug, Error)]
pub enum FragmentError {
    /// Category marker was neither `M` nor `F`.
    #[error("invalid category '{0}', expected 'M' or 'F'")]
    InvalidCategory(String),

    /// A batch entry had an empty concept id.
    #[error("empty concept id at entry {index}")]
    EmptyConceptId { index: usize },

    /// Batch document could not be decoded or encoded.
    #[error("batch json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FragmentError>;

/// Shorthand constructors.
impl FragmentError {
    pub fn invalid_category(marker: &str) -> Self {
        Self::InvalidCategory(marker.to_string())
    }

    pub fn empty_concept_id(index: usize) -> Self {
        Self::EmptyConceptId { index }
    }
}
