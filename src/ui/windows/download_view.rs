//! Download window: per-document TXT / PDF / HWP exports and the zip bundle.

use crate::engine::checklist::document_stems;
use crate::types::DocumentFormat;
use crate::ui::colors;
use crate::ui::window::{AppState, AppWindow};
use crate::worker::ExportJob;
use eframe::egui::{self, RichText};

const COLUMNS: usize = 3;

#[derive(Default)]
pub struct DownloadView {
    open: bool,
    /// Stems cached for `stems_client`, rebuilt when the client changes.
    stems: Vec<String>,
    stems_client: String,
}

impl DownloadView {
    fn refresh_stems(&mut self, client: &str) {
        if self.stems_client != client || self.stems.is_empty() {
            self.stems = document_stems(client);
            self.stems_client = client.to_string();
        }
    }
}

impl AppWindow for DownloadView {
    fn name(&self) -> &str {
        "AI 생성 서류 다운로드"
    }
    fn is_open(&self) -> bool {
        self.open
    }
    fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    fn show(&mut self, ctx: &egui::Context, state: &mut AppState<'_>) {
        if !self.open {
            return;
        }
        let client = state.session.selected_client.clone();
        self.refresh_stems(&client);

        let mut open = self.open;
        let stems = &self.stems;
        egui::Window::new(self.name())
            .open(&mut open)
            .collapsible(false)
            .default_size([760.0, 560.0])
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(format!(
                        "{client} 님의 서류가 생성되었습니다. 원하는 형식으로 다운로드하세요."
                    ))
                    .color(colors::MUTED),
                );
                ui.separator();

                let mut requested: Option<(String, DocumentFormat)> = None;
                egui::ScrollArea::vertical()
                    .max_height(420.0)
                    .show(ui, |ui| {
                        egui::Grid::new("generated_documents")
                            .num_columns(COLUMNS)
                            .spacing([12.0, 12.0])
                            .show(ui, |ui| {
                                for (i, stem) in stems.iter().enumerate() {
                                    egui::Frame::group(ui.style()).show(ui, |ui| {
                                        ui.set_width(220.0);
                                        ui.add(
                                            egui::Label::new(
                                                RichText::new(format!("🗋 {stem}")).strong(),
                                            )
                                            .wrap(),
                                        );
                                        ui.add_space(4.0);
                                        for format in DocumentFormat::ALL {
                                            let button = egui::Button::new(format.button_label())
                                                .min_size(egui::vec2(ui.available_width(), 24.0));
                                            if ui.add(button).clicked() {
                                                requested = Some((stem.clone(), format));
                                            }
                                        }
                                    });
                                    if (i + 1) % COLUMNS == 0 {
                                        ui.end_row();
                                    }
                                }
                            });
                    });
                if let Some((stem, format)) = requested {
                    state.submit(ExportJob::Document {
                        client: client.clone(),
                        stem,
                        format,
                    });
                }

                ui.separator();
                ui.horizontal(|ui| {
                    let zipping = state.exports.zipping;
                    let label = if zipping {
                        "압축 중..."
                    } else {
                        "🗄 전체 서류 .zip으로 다운로드"
                    };
                    let button = egui::Button::new(RichText::new(label).size(16.0))
                        .min_size(egui::vec2(240.0, 36.0));
                    if ui.add_enabled(!zipping, button).clicked() {
                        state.submit(ExportJob::Bundle {
                            client: client.clone(),
                        });
                    }
                    if zipping {
                        ui.add(egui::Spinner::new());
                    }
                });

                match &state.exports.last {
                    Some(Ok(path)) => {
                        ui.label(
                            RichText::new(format!("저장됨: {}", path.display()))
                                .small()
                                .color(colors::SUCCESS),
                        );
                    }
                    Some(Err(e)) => {
                        ui.label(
                            RichText::new(format!("오류: {e}"))
                                .small()
                                .color(colors::DANGER),
                        );
                    }
                    None => {}
                }
            });
        self.open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_follow_selected_client() {
        let mut view = DownloadView::default();
        view.refresh_stems("임지혁");
        assert_eq!(view.stems.len(), 20);
        assert!(view.stems[0].starts_with("임지혁_"));

        view.refresh_stems("이지은");
        assert!(view.stems.iter().all(|s| s.starts_with("이지은_")));
    }

    #[test]
    fn opens_and_closes() {
        let mut view = DownloadView::default();
        assert!(!view.is_open());
        view.set_open(true);
        assert!(view.is_open());
    }
}
