//! Splash screen shown for a fixed duration at start-up.

use crate::ui::colors;
use crate::ui::window::{AppState, ScreenView};
use eframe::egui::{self, RichText};

/// Fade in/out length in seconds.
const FADE_SECS: f64 = 0.5;

#[derive(Default)]
pub struct SplashView;

impl ScreenView for SplashView {
    fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState<'_>) {
        let remaining = state.session.splash_remaining(state.now).unwrap_or(0.0);
        let opacity = (state.now / FADE_SECS)
            .min(remaining / FADE_SECS)
            .clamp(0.0, 1.0) as f32;
        ui.multiply_opacity(opacity);

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.label(RichText::new("⚖").size(56.0).color(colors::ACCENT));
            ui.label(RichText::new("원앤위너스").size(30.0).strong());
            ui.add_space(4.0);
            ui.label(RichText::new("승소, 그 이상").color(colors::MUTED));
        });
    }
}
