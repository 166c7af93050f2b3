//! Login screen. Any id is accepted; the password is collected and ignored.

use crate::ui::colors;
use crate::ui::widgets::{centered_card, wide_button};
use crate::ui::window::{AppState, ScreenView};
use eframe::egui::{self, RichText};

#[derive(Default)]
pub struct LoginView {
    id: String,
    password: String,
}

impl ScreenView for LoginView {
    fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState<'_>) {
        let submitted = centered_card(ui, 320.0, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("⚖ 원앤위너스").strong().color(colors::ACCENT));
                ui.add_space(8.0);
                ui.heading(RichText::new("로그인").size(24.0));
                ui.label(RichText::new("서비스를 이용하려면 로그인하세요.").color(colors::MUTED));
            });
            ui.add_space(12.0);

            ui.label("아이디");
            let id_resp = ui.add(
                egui::TextEdit::singleline(&mut self.id)
                    .hint_text("아이디를 입력하세요")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(6.0);
            ui.label("비밀번호");
            let pw_resp = ui.add(
                egui::TextEdit::singleline(&mut self.password)
                    .password(true)
                    .hint_text("비밀번호를 입력하세요")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(12.0);

            let enter = (id_resp.lost_focus() || pw_resp.lost_focus())
                && ui.input(|i| i.key_pressed(egui::Key::Enter));
            wide_button(ui, true, "로그인") || enter
        });

        if submitted {
            state.session.login(&self.id);
            self.id.clear();
            self.password.clear();
        }
    }
}
