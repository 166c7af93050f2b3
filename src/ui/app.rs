//! Application orchestrator: owns all session state and drives the screens.

use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{self as std_mpsc, Receiver as StdReceiver};
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::engine::{
    pipeline::{Pipeline, Stage},
    session::{Screen, Session},
    upload::UploadSet,
};
use crate::export::Exporter;
use crate::ui::colors;
use crate::ui::screens::{
    client_select::ClientSelectView,
    demo::{DemoView, collect_dropped},
    login::LoginView,
    splash::SplashView,
};
use crate::ui::window::{AppState, AppWindow, ExportStatus, ScreenView};
use crate::ui::windows::download_view::DownloadView;
use crate::worker::{ExportEvent, ExportRequest, runner};
use eframe::egui::{self, RichText};
use tokio::sync::mpsc::{self as tokio_mpsc, Sender as TokioSender};

/// Bound on queued export jobs; clicks beyond it are reported, not queued.
const EXPORT_QUEUE: usize = 32;

// ── App struct ─────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// All domain logic lives in the engine structs; `App` only:
/// 1. Drains export results from the background runner.
/// 2. Advances the splash and pipeline timers.
/// 3. Renders the active screen and the download window.
pub struct App {
    rx: StdReceiver<ExportEvent>,
    job_tx: TokioSender<ExportRequest>,

    // ── Session state ──────────────────────────────────────────────────────
    session: Session,
    uploads: UploadSet,
    pipeline: Pipeline,
    exports: ExportStatus,
    last_screen: Screen,

    // ── Views (UI-only state) ──────────────────────────────────────────────
    splash_view: SplashView,
    login_view: LoginView,
    client_view: ClientSelectView,
    demo_view: DemoView,
    download_view: DownloadView,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let font = config.resolve_font();
        install_fonts(&cc.egui_ctx, font.as_deref());

        let (tx, rx) = std_mpsc::channel();
        let (job_tx, job_rx) = tokio_mpsc::channel(EXPORT_QUEUE);
        let ctx = cc.egui_ctx.clone();
        let pdf_font = config.resolve_pdf_font();
        if pdf_font.is_none() {
            log::warn!("no single-face TTF/OTF font found; PDFs fall back to Helvetica");
        }
        let exporter = Exporter::new(config.output_dir.clone(), pdf_font);
        log::info!("exports go to {}", exporter.output_dir().display());

        // Spawn background Tokio runtime + export loop onto a dedicated OS thread.
        thread::spawn(move || {
            match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt.block_on(runner::run_export_loop(&tx, &ctx, job_rx, exporter)),
                Err(e) => log::error!("failed to build Tokio runtime: {e}"),
            }
        });

        Self {
            rx,
            job_tx,
            session: Session::new(config.splash_duration().as_secs_f64()),
            uploads: UploadSet::new(config.required_files),
            pipeline: Pipeline::new(config.stage_duration().as_secs_f64()),
            exports: ExportStatus::default(),
            last_screen: Screen::Splash,
            splash_view: SplashView,
            login_view: LoginView::default(),
            client_view: ClientSelectView::default(),
            demo_view: DemoView,
            download_view: DownloadView::default(),
        }
    }

    fn on_export_event(&mut self, event: ExportEvent) {
        self.exports.apply(event);
    }

    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (!i.raw.hovered_files.is_empty(), i.raw.dropped_files.clone())
        });
        apply_drag_and_drop(
            &self.session,
            &self.pipeline,
            &mut self.uploads,
            hovering,
            &dropped,
        );
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⎋ 로그아웃").clicked() {
                    self.session.logout();
                }
                ui.label(
                    RichText::new(format!("{}님 환영합니다.", self.session.user_name))
                        .strong()
                        .color(colors::MUTED),
                );
            });
        });
    }

    /// Ask for a repaint exactly when the next timed transition is due.
    fn schedule_repaint(&self, ctx: &egui::Context, now: f64) {
        let due = self
            .session
            .splash_remaining(now)
            .or_else(|| self.pipeline.until_next(now));
        if let Some(secs) = due {
            ctx.request_repaint_after(Duration::from_secs_f64(secs.max(0.016)));
        }
    }
}

/// Files are accepted only on the main screen while the upload step is shown.
fn accepts_files(session: &Session, pipeline: &Pipeline) -> bool {
    session.screen == Screen::Main && pipeline.stage == Stage::SelectingFiles
}

/// Apply one frame of window drag-and-drop input to the upload set.
/// Returns the number of files added.
fn apply_drag_and_drop(
    session: &Session,
    pipeline: &Pipeline,
    uploads: &mut UploadSet,
    hovering: bool,
    dropped: &[egui::DroppedFile],
) -> usize {
    let accepting = accepts_files(session, pipeline);
    uploads.dragging = accepting && hovering;
    if !accepting || dropped.is_empty() {
        return 0;
    }
    uploads.add(collect_dropped(dropped))
}

/// Discard everything tied to the current client once the session has left
/// the main screen (back button or logout). Returns whether a reset happened.
fn discard_on_leave(
    last_screen: Screen,
    session: &Session,
    uploads: &mut UploadSet,
    pipeline: &mut Pipeline,
    exports: &mut ExportStatus,
) -> bool {
    if last_screen != Screen::Main || session.screen == Screen::Main {
        return false;
    }
    uploads.clear();
    pipeline.reset();
    exports.reset();
    true
}

/// Register a Hangul-capable font as a fallback for every egui font family.
fn install_fonts(ctx: &egui::Context, font: Option<&Path>) {
    let Some(path) = font else {
        log::warn!("no CJK font found; Hangul text may not render (use --font)");
        return;
    };
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("failed to read font {}: {e}", path.display());
            return;
        }
    };
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        "hangul".to_owned(),
        Arc::new(egui::FontData::from_owned(bytes)),
    );
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push("hangul".to_owned());
    }
    ctx.set_fonts(fonts);
    log::info!("loaded UI font {}", path.display());
}

// ── eframe::App ────────────────────────────────────────────────────────────────

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);

        // ── 1. Drain export results ───────────────────────────────────────────
        while let Ok(event) = self.rx.try_recv() {
            self.on_export_event(event);
        }

        // ── 2. Timers ─────────────────────────────────────────────────────────
        self.session.tick(now);
        self.pipeline.tick(now);
        self.handle_drag_and_drop(ctx);

        // ── 3. Header ─────────────────────────────────────────────────────────
        if self.session.screen == Screen::Main {
            self.show_header(ctx);
        }

        // ── 4. Central panel ──────────────────────────────────────────────────
        let mut state = AppState {
            session: &mut self.session,
            uploads: &mut self.uploads,
            pipeline: &mut self.pipeline,
            exports: &mut self.exports,
            job_tx: &self.job_tx,
            now,
            open_downloads: false,
        };
        let screen = state.session.screen;
        egui::CentralPanel::default().show(ctx, |ui| match screen {
            Screen::Splash => self.splash_view.show(ui, &mut state),
            Screen::Login => self.login_view.show(ui, &mut state),
            Screen::ClientSelection => self.client_view.show(ui, &mut state),
            Screen::Main => self.demo_view.show(ui, &mut state),
        });

        // ── 5. Download window ────────────────────────────────────────────────
        if state.open_downloads && !self.download_view.is_open() {
            self.download_view.set_open(true);
        }
        if state.session.screen == Screen::Main && state.pipeline.stage == Stage::Complete {
            self.download_view.show(ctx, &mut state);
        }

        // ── 6. Leaving the main screen discards the demo ──────────────────────
        if discard_on_leave(
            self.last_screen,
            &self.session,
            &mut self.uploads,
            &mut self.pipeline,
            &mut self.exports,
        ) {
            self.download_view.set_open(false);
        }
        self.last_screen = self.session.screen;

        self.schedule_repaint(ctx, now);
    }
}
