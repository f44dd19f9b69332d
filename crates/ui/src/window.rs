//! egui window that shows the completion label

use crate::theme::{launcher_theme, ThemeColors};
use eframe::egui::{self, CentralPanel, Context, Key, RichText};
use mc_launcher_core::{DisplayConfig, DisplaySurface};

/// Single-label window. Closes on Escape.
pub struct LabelApp {
    text: String,
    dark_mode: bool,
    should_close: bool,
}

impl LabelApp {
    pub fn new(text: impl Into<String>, dark_mode: bool) -> Self {
        Self {
            text: text.into(),
            dark_mode,
            should_close: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl eframe::App for LabelApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                self.should_close = true;
            }
        });

        if self.should_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ctx.set_style(launcher_theme(self.dark_mode));

        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                let label = RichText::new(&self.text).heading();
                if self.dark_mode {
                    ui.label(label.color(ThemeColors::ACCENT));
                } else {
                    ui.label(label);
                }
                ui.label(
                    RichText::new("Press Esc to close")
                        .small()
                        .color(ThemeColors::DIM_TEXT),
                );
            });
        });
    }
}

/// Primary display surface: a window holding the label until the user closes it.
pub struct WindowSurface {
    config: DisplayConfig,
}

impl WindowSurface {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    fn options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.config.title.clone())
                .with_inner_size([self.config.width, self.config.height])
                .with_resizable(false),
            ..Default::default()
        }
    }
}

impl DisplaySurface for WindowSurface {
    fn show_text(&mut self, text: &str) -> anyhow::Result<()> {
        let app = LabelApp::new(text, self.config.dark_mode);
        log::debug!("Opening window {:?}", self.config.title);

        eframe::run_native(
            &self.config.title,
            self.options(),
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| anyhow::anyhow!("Window error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_app_keeps_text() {
        let app = LabelApp::new("Finish compilation", true);
        assert_eq!(app.text(), "Finish compilation");
        assert!(!app.should_close);
    }
}
