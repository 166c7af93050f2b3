//! Export layer: writes generated placeholder documents to the output directory.

pub mod archive;
pub mod pdf;

use crate::engine::checklist::{document_stems, placeholder_content};
use crate::error::Result;
use crate::types::DocumentFormat;
use crate::utils::sanitize_file_name;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the archive holding every document for `client`.
pub fn bundle_file_name(client: &str) -> String {
    format!("{client}_전체서류.zip")
}

/// Produces document files on disk. Cheap to clone into worker tasks.
#[derive(Debug, Clone)]
pub struct Exporter {
    output_dir: PathBuf,
    font: Option<PathBuf>,
}

impl Exporter {
    pub fn new(output_dir: PathBuf, font: Option<PathBuf>) -> Self {
        Self { output_dir, font }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write one document in `format`, returning the saved path.
    pub fn export_document(
        &self,
        client: &str,
        stem: &str,
        format: DocumentFormat,
        generated_at: &str,
    ) -> Result<PathBuf> {
        let content = placeholder_content(stem, client, generated_at);
        let bytes = match format {
            DocumentFormat::Txt | DocumentFormat::Hwp => content.into_bytes(),
            DocumentFormat::Pdf => pdf::render_pdf(stem, &content, self.font.as_deref())?,
        };
        self.save(&format!("{stem}.{}", format.extension()), &bytes)
    }

    /// Zip every checklist document for `client` as `.txt` entries.
    pub fn export_bundle(&self, client: &str, generated_at: &str) -> Result<PathBuf> {
        let entries: Vec<(String, String)> = document_stems(client)
            .into_iter()
            .map(|stem| {
                let body = placeholder_content(&stem, client, generated_at);
                (format!("{}.txt", sanitize_file_name(&stem)), body)
            })
            .collect();
        let bytes = archive::build_zip(&entries)?;
        self.save(&bundle_file_name(client), &bytes)
    }

    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(sanitize_file_name(file_name));
        fs::write(&path, bytes)?;
        log::info!("saved {} ({} bytes)", path.display(), bytes.len());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use zip::ZipArchive;

    const TS: &str = "2025-03-01 09:00:00";

    #[test]
    fn txt_export_writes_placeholder_text() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().join("out"), None);

        let path = exporter
            .export_document("이지은", "이지은_납세증명서", DocumentFormat::Txt, TS)
            .unwrap();

        assert_eq!(path, dir.path().join("out").join("이지은_납세증명서.txt"));
        let text = fs::read_to_string(path).unwrap();
        assert!(text.starts_with("이지은_납세증명서\n"));
        assert!(text.contains("생성일: 2025-03-01 09:00:00"));
    }

    #[test]
    fn hwp_export_is_text_with_hwp_extension() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().to_path_buf(), None);

        let hwp = exporter
            .export_document("이지은", "이지은_토지대장", DocumentFormat::Hwp, TS)
            .unwrap();
        let txt = exporter
            .export_document("이지은", "이지은_토지대장", DocumentFormat::Txt, TS)
            .unwrap();

        assert_eq!(hwp.extension().unwrap(), "hwp");
        assert_eq!(fs::read(hwp).unwrap(), fs::read(txt).unwrap());
    }

    #[test]
    fn pdf_export_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().to_path_buf(), None);

        let path = exporter
            .export_document("Kim", "Kim_report", DocumentFormat::Pdf, TS)
            .unwrap();

        assert!(fs::read(path).unwrap().starts_with(b"%PDF"));
    }

    #[test]
    fn bundle_contains_every_checklist_document() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().to_path_buf(), None);

        let path = exporter.export_bundle("김채원", TS).unwrap();
        assert_eq!(path.file_name().unwrap(), "김채원_전체서류.zip");

        let mut archive = ZipArchive::new(Cursor::new(fs::read(path).unwrap())).unwrap();
        assert_eq!(archive.len(), 20);
        let first = archive.by_index(0).unwrap();
        assert_eq!(first.name(), "김채원_소득금액증명원(최근5년).txt");
    }

    #[test]
    fn client_names_with_separators_stay_inside_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = Exporter::new(dir.path().to_path_buf(), None);

        let path = exporter.export_bundle("../evil", TS).unwrap();
        assert_eq!(path.parent().unwrap(), dir.path());
    }
}
