pub mod batch;
pub mod error;
pub mod fragment;
pub mod page;
pub mod registry;
pub mod sexo;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use batch::{parse_cells, render_batch_json, render_cell, render_cells, CellRequest, RenderedCell};
pub use error::{FragmentError, Result};
pub use fragment::{build_input_fragment, build_paired_cell, render_input, InputDescriptor};
pub use page::wrap_preview_page;
pub use registry::{container_style, filled_style, style_for, style_for_marker, CategoryStyle, REGISTRY};
pub use sexo::Sexo;
