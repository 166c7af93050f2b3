//! Background export runner hosted on its own Tokio runtime.

use crate::export::Exporter;
use crate::utils::local_timestamp;
use crate::worker::{ExportEvent, ExportJob, ExportRequest};
use std::sync::mpsc::Sender as StdSender;
use tokio::sync::mpsc::Receiver;

/// Run a single job synchronously. Timestamps are taken at execution time.
pub fn run_job(exporter: &Exporter, job: &ExportJob) -> crate::error::Result<std::path::PathBuf> {
    let generated_at = local_timestamp();
    match job {
        ExportJob::Document {
            client,
            stem,
            format,
        } => exporter.export_document(client, stem, *format, &generated_at),
        ExportJob::Bundle { client } => exporter.export_bundle(client, &generated_at),
    }
}

/// Long-running async loop: receives [`ExportRequest`]s, runs each on the blocking
/// pool, and forwards [`ExportEvent`]s to the UI thread.
///
/// Exits cleanly when the `job_rx` channel is closed (UI shut down) or the UI
/// side of `tx` is gone.
pub async fn run_export_loop(
    tx: &StdSender<ExportEvent>,
    ctx: &egui::Context,
    mut job_rx: Receiver<ExportRequest>,
    exporter: Exporter,
) {
    while let Some(request) = job_rx.recv().await {
        if let Ok(json) = serde_json::to_string(&request) {
            log::debug!("export job: {json}");
        }

        let ExportRequest { generation, job } = request;
        let worker = exporter.clone();
        let task_job = job.clone();
        let result = match tokio::task::spawn_blocking(move || run_job(&worker, &task_job)).await {
            Ok(Ok(path)) => Ok(path),
            Ok(Err(e)) => {
                if job.is_bundle() {
                    log::error!("Archive generation failed: {e}");
                } else {
                    log::error!("Export failed: {e}");
                }
                Err(e.to_string())
            }
            Err(e) => {
                log::error!("Export task panicked: {e}");
                Err(e.to_string())
            }
        };

        if tx.send(ExportEvent {
            generation,
            job,
            result,
        }).is_err() {
            log::info!("UI receiver dropped, stopping export runner.");
            break;
        }
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentFormat;
    use std::sync::mpsc;

    fn request(generation: u64, job: ExportJob) -> ExportRequest {
        ExportRequest { generation, job }
    }

    #[tokio::test]
    async fn jobs_are_processed_in_order_and_reported() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().to_path_buf(), None);
        let (tx, rx) = mpsc::channel();
        let (job_tx, job_rx) = tokio::sync::mpsc::channel(8);
        let ctx = egui::Context::default();

        job_tx
            .send(request(
                3,
                ExportJob::Document {
                    client: "임지혁".into(),
                    stem: "임지혁_토지대장".into(),
                    format: DocumentFormat::Txt,
                },
            ))
            .await
            .unwrap();
        job_tx
            .send(request(
                3,
                ExportJob::Bundle {
                    client: "임지혁".into(),
                },
            ))
            .await
            .unwrap();
        drop(job_tx);

        run_export_loop(&tx, &ctx, job_rx, exporter).await;

        let first = rx.try_recv().unwrap();
        assert_eq!(first.generation, 3);
        assert!(!first.job.is_bundle());
        assert!(first.result.unwrap().ends_with("임지혁_토지대장.txt"));

        let second = rx.try_recv().unwrap();
        assert!(second.job.is_bundle());
        assert!(second.result.unwrap().ends_with("임지혁_전체서류.zip"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn failures_are_reported_not_retried() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the output directory should be.
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, b"x").unwrap();
        let exporter = Exporter::new(blocker, None);
        let (tx, rx) = mpsc::channel();
        let (job_tx, job_rx) = tokio::sync::mpsc::channel(1);

        job_tx
            .send(request(
                0,
                ExportJob::Bundle {
                    client: "이지은".into(),
                },
            ))
            .await
            .unwrap();
        drop(job_tx);

        run_export_loop(&tx, &egui::Context::default(), job_rx, exporter).await;

        let event = rx.try_recv().unwrap();
        assert!(event.result.is_err());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn job_serialises_with_kind_tag() {
        let job = ExportJob::Document {
            client: "a".into(),
            stem: "a_b".into(),
            format: DocumentFormat::Pdf,
        };
        let json = serde_json::to_value(request(7, job)).unwrap();
        assert_eq!(json["generation"], 7);
        assert_eq!(json["kind"], "document");
        assert_eq!(json["format"], "pdf");
    }
}
