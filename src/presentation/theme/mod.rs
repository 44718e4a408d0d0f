//! Theme context and palettes.

mod context;
mod palette;

pub use context::{
    RootContext, THEME_MARKER_DARK, THEME_MARKER_LIGHT, detect_system_variant,
};
pub use palette::Palette;
