//! Small layout helpers shared by the screens.

use crate::types::ClientStatus;
use crate::ui::colors;
use eframe::egui::{self, RichText};

/// A bordered card centred horizontally, pushed down from the top edge.
pub fn centered_card<R>(
    ui: &mut egui::Ui,
    width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    ui.vertical_centered(|ui| {
        ui.add_space((ui.available_height() * 0.12).max(8.0));
        egui::Frame::group(ui.style())
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_width(width);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), add_contents)
                    .inner
            })
            .inner
    })
    .inner
}

pub fn status_badge(ui: &mut egui::Ui, status: ClientStatus) {
    let (fill, text) = colors::status_badge(status);
    ui.label(
        RichText::new(format!(" {} ", status.label()))
            .small()
            .strong()
            .color(text)
            .background_color(fill),
    );
}

/// Full-width primary button.
pub fn wide_button(ui: &mut egui::Ui, enabled: bool, text: impl Into<egui::WidgetText>) -> bool {
    ui.add_enabled(
        enabled,
        egui::Button::new(text).min_size(egui::vec2(ui.available_width(), 32.0)),
    )
    .clicked()
}
