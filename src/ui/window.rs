//! The `ScreenView` / `AppWindow` traits and the shared `AppState` view passed
//! to each of them.
//!
//! To add a new floating window:
//! 1. Create a new file in `ui/windows/`.
//! 2. Implement `AppWindow` for your struct.
//! 3. Own it in `App` and call `show` from `App::update`.

use crate::engine::{pipeline::Pipeline, session::Session, upload::UploadSet};
use crate::error::AppError;
use crate::worker::{ExportEvent, ExportJob, ExportRequest};
use std::path::PathBuf;
use tokio::sync::mpsc::{Sender as TokioSender, error::TrySendError};

/// UI-side bookkeeping for export jobs in flight.
#[derive(Debug, Default)]
pub struct ExportStatus {
    /// Bumped on every reset; jobs carry it so late results can be told apart.
    pub generation: u64,
    /// A zip bundle has been queued and has not reported back yet.
    pub zipping: bool,
    /// Outcome of the most recent export.
    pub last: Option<Result<PathBuf, String>>,
}

impl ExportStatus {
    /// Forget the current client's exports. Jobs still queued for it keep
    /// running but their results are ignored.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.zipping = false;
        self.last = None;
    }

    /// Record a finished export. Returns `false` if it belongs to an earlier
    /// demo session and was dropped.
    pub fn apply(&mut self, event: ExportEvent) -> bool {
        if event.generation != self.generation {
            log::debug!(
                "dropping stale export result (generation {} != {})",
                event.generation,
                self.generation
            );
            return false;
        }
        if event.job.is_bundle() {
            self.zipping = false;
        }
        self.last = Some(event.result);
        true
    }
}

/// Mutable view of session state shared with every screen and window.
pub struct AppState<'a> {
    pub session: &'a mut Session,
    pub uploads: &'a mut UploadSet,
    pub pipeline: &'a mut Pipeline,
    pub exports: &'a mut ExportStatus,
    pub job_tx: &'a TokioSender<ExportRequest>,
    /// Seconds since application start (egui input time).
    pub now: f64,
    /// Set by a view to ask the orchestrator to open the download window.
    pub open_downloads: bool,
}

impl AppState<'_> {
    /// Queue an export on the background runner. A second bundle request is
    /// dropped while one is still being zipped.
    pub fn submit(&mut self, job: ExportJob) {
        let bundle = job.is_bundle();
        if bundle {
            if self.exports.zipping {
                return;
            }
            self.exports.zipping = true;
        }
        let request = ExportRequest {
            generation: self.exports.generation,
            job,
        };
        if let Err(e) = self.job_tx.try_send(request) {
            let message = match e {
                TrySendError::Closed(_) => AppError::WorkerClosed.to_string(),
                TrySendError::Full(_) => "Export queue is full, try again".to_string(),
            };
            log::error!("{message}");
            if bundle {
                self.exports.zipping = false;
            }
            self.exports.last = Some(Err(message));
        }
    }
}

/// A full-screen view rendered into the central panel.
pub trait ScreenView {
    fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState<'_>);
}

/// Trait implemented by every floating window.
///
/// Each window owns its own open/closed flag and any window-specific UI state.
pub trait AppWindow {
    /// Title shown as the egui window caption.
    fn name(&self) -> &str;

    fn is_open(&self) -> bool;

    fn set_open(&mut self, open: bool);

    /// Draw the window contents. Called every frame by `App::update`.
    fn show(&mut self, ctx: &egui::Context, state: &mut AppState<'_>);
}
