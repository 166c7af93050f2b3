//! Client selection: pick a case from the roster or register a new client.

use crate::types::PREDEFINED_CLIENTS;
use crate::ui::colors;
use crate::ui::widgets::{centered_card, status_badge, wide_button};
use crate::ui::window::{AppState, ScreenView};
use eframe::egui::{self, RichText};

#[derive(Default)]
pub struct ClientSelectView {
    show_new_client: bool,
    new_client_name: String,
    focus_requested: bool,
}

impl ClientSelectView {
    fn reset_form(&mut self) {
        self.show_new_client = false;
        self.new_client_name.clear();
        self.focus_requested = false;
    }
}

impl ScreenView for ClientSelectView {
    fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState<'_>) {
        let mut chosen: Option<String> = None;

        centered_card(ui, 380.0, |ui| {
            ui.heading("의뢰인 선택");
            ui.label(
                RichText::new("작업을 진행할 의뢰인을 선택하거나 신규 등록하세요.")
                    .color(colors::MUTED),
            );
            ui.add_space(12.0);

            for client in PREDEFINED_CLIENTS {
                ui.horizontal(|ui| {
                    let label = RichText::new(format!("👤 {}", client.name)).size(16.0);
                    let button = egui::Button::new(label)
                        .min_size(egui::vec2(ui.available_width() - 70.0, 40.0));
                    if ui.add(button).clicked() {
                        chosen = Some(client.name.to_string());
                    }
                    status_badge(ui, client.status);
                });
                ui.add_space(4.0);
            }

            ui.separator();

            if !self.show_new_client {
                if wide_button(ui, true, RichText::new("➕ 신규 의뢰인 등록").size(16.0)) {
                    self.show_new_client = true;
                }
                return;
            }

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(RichText::new("신규 의뢰인 이름").strong());
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.new_client_name)
                        .hint_text("예: 박영진")
                        .desired_width(f32::INFINITY),
                );
                if !self.focus_requested {
                    resp.request_focus();
                    self.focus_requested = true;
                }
                let has_name = !self.new_client_name.trim().is_empty();
                let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm = ui.add_enabled(has_name, egui::Button::new("확인")).clicked();
                    if ui.button("취소").clicked() {
                        self.reset_form();
                    } else if has_name && (confirm || enter) {
                        chosen = Some(self.new_client_name.clone());
                    }
                });
            });
        });

        if let Some(name) = chosen
            && state.session.select_client(&name)
        {
            self.reset_form();
        }
    }
}
