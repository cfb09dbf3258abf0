//! Fixed presentation constants for the aprovechamiento inputs.

use serde::Serialize;

use crate::error::Result;
use crate::sexo::Sexo;

/// Label, class and inline CSS for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub label: &'static str,
    pub class_name: &'static str,
    pub box_style: &'static str,
    pub label_style: &'static str,
    pub input_style: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Registry {
    pub male: CategoryStyle,
    pub female: CategoryStyle,
    pub container_style: &'static str,
    pub filled_style: &'static str,
}

pub static REGISTRY: Registry = Registry {
    male: CategoryStyle {
        label: "H",
        class_name: "aprovechamiento-hombre",
        box_style: "display:inline-flex;align-items:center;gap:3px;padding:2px 4px;background:#e3f2fd;border-radius:4px;border:1px solid #90caf9;line-height:1;",
        label_style: "font-weight:700;color:#1976d2;font-size:11px;min-width:14px;text-align:center;",
        input_style: "width:42px;padding:2px 3px;border:2px solid #2196f3;border-radius:3px;background:#fff;color:#1976d2;font-weight:600;text-align:center;font-size:11px;line-height:1.1;",
    },
    female: CategoryStyle {
        label: "M",
        class_name: "aprovechamiento-mujer",
        box_style: "display:inline-flex;align-items:center;gap:3px;padding:2px 4px;background:#fce4ec;border-radius:4px;border:1px solid #f48fb1;line-height:1;",
        label_style: "font-weight:700;color:#c2185b;font-size:11px;min-width:14px;text-align:center;",
        input_style: "width:42px;padding:2px 3px;border:2px solid #e91e63;border-radius:3px;background:#fff;color:#c2185b;font-weight:600;text-align:center;font-size:11px;line-height:1.1;",
    },
    container_style: "display:inline-flex;flex-direction:row;gap:6px;justify-content:center;align-items:center;width:auto;",
    filled_style: "border-color: #4caf50; background-color: #e8f5e9;",
};

pub fn style_for(sexo: Sexo) -> &'static CategoryStyle {
    match sexo {
        Sexo::Male => &REGISTRY.male,
        Sexo::Female => &REGISTRY.female,
    }
}

/// Strict lookup by wire marker. Unlike the form builders this rejects
/// anything that is not `M` or `F`.
pub fn style_for_marker(marker: &str) -> Result<&'static CategoryStyle> {
    Sexo::parse_strict(marker).map(style_for)
}

/// Style of the horizontal wrapper around a male/female pair.
pub fn container_style() -> &'static str {
    REGISTRY.container_style
}

/// Extra declarations the page appends to an input once it holds a value.
pub fn filled_style() -> &'static str {
    REGISTRY.filled_style
}
