//! Theme for the completion window

use egui::{Color32, CornerRadius, FontFamily, FontId, Stroke, Style, TextStyle, Vec2, Visuals};

/// Build the window style. Dark mode follows the launcher palette; light mode
/// keeps egui's defaults apart from fonts and spacing.
pub fn launcher_theme(dark_mode: bool) -> Style {
    let mut style = Style::default();

    if dark_mode {
        style.visuals = Visuals::dark();
        style.visuals.window_fill = ThemeColors::BACKGROUND;
        style.visuals.panel_fill = ThemeColors::PANEL;
        style.visuals.extreme_bg_color = Color32::from_rgb(20, 20, 25);
        style.visuals.widgets.noninteractive.bg_fill = ThemeColors::PANEL;
        style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, ThemeColors::TEXT);
    } else {
        style.visuals = Visuals::light();
    }

    style.visuals.window_corner_radius = CornerRadius::same(8);
    style.spacing.item_spacing = Vec2::new(4.0, 8.0);
    style.spacing.window_margin = 12.0.into();

    style.text_styles.insert(
        TextStyle::Heading,
        FontId::new(20.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Body,
        FontId::new(14.0, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Small,
        FontId::new(11.0, FontFamily::Proportional),
    );

    style
}

/// Colors used by the completion window
pub struct ThemeColors;

impl ThemeColors {
    pub const BACKGROUND: Color32 = Color32::from_rgb(30, 30, 35);
    pub const PANEL: Color32 = Color32::from_rgb(40, 40, 48);
    pub const ACCENT: Color32 = Color32::from_rgb(100, 149, 237);
    pub const TEXT: Color32 = Color32::from_rgb(230, 230, 230);
    pub const DIM_TEXT: Color32 = Color32::from_rgb(150, 150, 160);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_follows_dark_mode() {
        assert!(launcher_theme(true).visuals.dark_mode);
        assert!(!launcher_theme(false).visuals.dark_mode);
        assert_eq!(launcher_theme(true).visuals.panel_fill, ThemeColors::PANEL);
    }
}
