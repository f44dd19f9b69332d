//! egui display surface for mc-launcher

mod theme;
mod window;

pub use theme::{launcher_theme, ThemeColors};
pub use window::{LabelApp, WindowSurface};
