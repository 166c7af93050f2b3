//! Main demo screen: document upload, scripted processing, and completion.

use crate::engine::pipeline::Stage;
use crate::types::SelectedFile;
use crate::ui::colors;
use crate::ui::window::{AppState, ScreenView};
use crate::utils::format_file_size;
use eframe::egui::{self, Align2, RichText};

#[derive(Default)]
pub struct DemoView;

impl ScreenView for DemoView {
    fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState<'_>) {
        match state.pipeline.stage {
            Stage::SelectingFiles => show_upload(ui, state),
            Stage::Complete => show_complete(ui, state),
            stage => show_processing(ui, stage),
        }
    }
}

/// Convert files dropped onto the window into upload entries.
///
/// Native drops carry a path; drops without one fall back to the in-memory
/// byte length and reported MIME type.
pub fn collect_dropped(dropped: &[egui::DroppedFile]) -> Vec<SelectedFile> {
    dropped
        .iter()
        .filter_map(|file| match &file.path {
            Some(path) => SelectedFile::from_path(path),
            None => file.bytes.as_ref().map(|bytes| {
                SelectedFile::new(file.name.clone(), bytes.len() as u64, file.mime.clone())
            }),
        })
        .collect()
}

fn pick_files() -> Vec<SelectedFile> {
    rfd::FileDialog::new()
        .set_title("서류 선택")
        .pick_files()
        .unwrap_or_default()
        .iter()
        .filter_map(|path| SelectedFile::from_path(path))
        .collect()
}

// ── Upload ─────────────────────────────────────────────────────────────────────

fn show_upload(ui: &mut egui::Ui, state: &mut AppState<'_>) {
    let required = state.uploads.capacity();
    let complete = state.uploads.is_complete();

    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        let frame = egui::Frame::group(ui.style()).inner_margin(16.0);
        frame.show(ui, |ui| {
            ui.set_width(620.0);

            ui.vertical_centered(|ui| {
                ui.label(RichText::new("현재 의뢰인").small().color(colors::MUTED));
                ui.label(
                    RichText::new(&state.session.selected_client)
                        .size(28.0)
                        .strong()
                        .color(colors::ACCENT),
                );
            });
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("서류 업로드").size(18.0).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (mark, color) = if complete {
                        ("✔", colors::SUCCESS)
                    } else {
                        ("✖", colors::DANGER)
                    };
                    ui.label(RichText::new(mark).size(18.0).color(color));
                    ui.label(
                        RichText::new(format!("{} / {required}", state.uploads.len()))
                            .strong()
                            .color(color),
                    );
                });
            });
            ui.label(
                RichText::new(format!(
                    "진행하려면 {required}개의 서류를 모두 업로드해야 합니다."
                ))
                .color(colors::MUTED),
            );
            ui.add_space(8.0);

            let mut drop_zone = egui::Frame::group(ui.style()).inner_margin(8.0);
            if state.uploads.dragging {
                drop_zone = drop_zone
                    .fill(colors::DROP_HIGHLIGHT)
                    .stroke(egui::Stroke::new(2.0, colors::ACCENT));
            }
            let mut remove: Option<usize> = None;
            drop_zone.show(ui, |ui| {
                ui.set_min_height(256.0);
                ui.set_width(ui.available_width());
                if state.uploads.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(96.0);
                        ui.label(RichText::new("☁").size(36.0).color(colors::MUTED));
                        ui.label(
                            RichText::new("파일을 선택하거나 여기에 드래그 앤 드롭하세요.")
                                .color(colors::MUTED),
                        );
                    });
                    return;
                }
                egui::ScrollArea::vertical()
                    .max_height(256.0)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for (index, file) in state.uploads.files().iter().enumerate() {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(file.kind().icon()).color(colors::ACCENT));
                                let hover = file
                                    .path
                                    .as_ref()
                                    .map_or_else(|| file.name.clone(), |p| p.display().to_string());
                                ui.add(egui::Label::new(&file.name).truncate())
                                    .on_hover_text(hover);
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui
                                            .button(RichText::new("🗑").color(colors::DANGER))
                                            .clicked()
                                        {
                                            remove = Some(index);
                                        }
                                        ui.label(
                                            RichText::new(format_file_size(file.size))
                                                .color(colors::MUTED),
                                        );
                                    },
                                );
                            });
                        }
                    });
            });
            if let Some(index) = remove {
                state.uploads.remove(index);
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("➕ 파일 선택").clicked() {
                    state.uploads.add(pick_files());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let proceed = egui::Button::new(RichText::new("선택 완료 및 진행").size(16.0))
                        .min_size(egui::vec2(160.0, 36.0));
                    if ui.add_enabled(complete, proceed).clicked() {
                        state.pipeline.start(state.now, state.uploads.is_complete());
                    }
                });
            });
        });
    });
}

// ── Processing ─────────────────────────────────────────────────────────────────

fn show_processing(ui: &mut egui::Ui, stage: Stage) {
    let Some(info) = stage.info() else {
        return;
    };
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.add(egui::Spinner::new().size(72.0).color(colors::ACCENT));
        ui.label(RichText::new(info.icon).size(32.0).color(colors::ACCENT));
        ui.add_space(12.0);
        ui.label(RichText::new(info.title).size(24.0).strong());
        ui.label(RichText::new(info.description).color(colors::MUTED));
        if stage.shows_accuracy_badge() {
            ui.add_space(8.0);
            ui.label(
                RichText::new(" AI 기반 95% 정확도 ")
                    .strong()
                    .color(colors::SUCCESS)
                    .background_color(egui::Color32::from_rgb(220, 252, 231)),
            );
        }
    });

    egui::Area::new(egui::Id::new("secure_processing_badge"))
        .anchor(Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .show(ui.ctx(), |ui| {
            ui.label(
                RichText::new("🛡 보안 처리 중...")
                    .small()
                    .color(colors::MUTED),
            );
        });
}

// ── Complete ───────────────────────────────────────────────────────────────────

fn show_complete(ui: &mut egui::Ui, state: &mut AppState<'_>) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.25);
        ui.label(RichText::new("✅").size(56.0).color(colors::SUCCESS));
        ui.label(
            RichText::new(format!(
                "{} 님 서류 생성 완료!",
                state.session.selected_client
            ))
            .size(28.0)
            .strong(),
        );
        ui.label(
            RichText::new("AI가 생성한 문서 초안을 확인하고 다운로드하세요.")
                .color(colors::MUTED),
        );
        ui.add_space(24.0);

        // Two buttons of known width, centred by padding the row.
        let row_width = 2.0 * 200.0 + ui.spacing().item_spacing.x;
        ui.horizontal(|ui| {
            ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
            let size = egui::vec2(200.0, 40.0);
            if ui
                .add(egui::Button::new("⬇ 초안 파일 다운로드").min_size(size))
                .clicked()
            {
                state.open_downloads = true;
            }
            if ui
                .add(egui::Button::new("🔄 다른 의뢰인으로 시작").min_size(size))
                .clicked()
            {
                state.session.back_to_client_selection();
            }
        });
    });
}
