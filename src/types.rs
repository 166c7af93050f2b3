//! Shared data-model types: selected files, clients, and export formats.
//!
//! # File identity
//!
//! A selected file is identified by its **name and size** only, matching what a
//! file picker reports. Two picks of the same path collapse into one entry;
//! two different files that happen to share both name and size do as well.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Selected files ─────────────────────────────────────────────────────────────

/// A file handle chosen through the picker or dropped onto the window.
///
/// Only metadata is kept; contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    /// MIME essence, e.g. `"image/png"`.
    pub mime: String,
    pub path: Option<PathBuf>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
            path: None,
        }
    }

    /// Build from a path on disk. Returns `None` for directories and paths
    /// whose metadata cannot be read.
    pub fn from_path(path: &Path) -> Option<Self> {
        let meta = match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => meta,
            Ok(_) => return None,
            Err(e) => {
                log::warn!("skipping {}: {e}", path.display());
                return None;
            }
        };
        let name = path.file_name()?.to_string_lossy().into_owned();
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Some(Self {
            name,
            size: meta.len(),
            mime,
            path: Some(path.to_path_buf()),
        })
    }

    /// Whether `other` denotes the same file for de-duplication purposes.
    pub fn same_identity(&self, other: &SelectedFile) -> bool {
        self.name == other.name && self.size == other.size
    }

    pub fn kind(&self) -> FileKind {
        FileKind::from_mime(&self.mime)
    }
}

/// Coarse file category used to pick a row icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
    Spreadsheet,
    Text,
}

impl FileKind {
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            m if m.starts_with("image/") => FileKind::Image,
            "application/pdf" => FileKind::Pdf,
            "application/vnd.ms-excel"
            | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                FileKind::Spreadsheet
            }
            _ => FileKind::Text,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FileKind::Image => "🖼",
            FileKind::Pdf => "📕",
            FileKind::Spreadsheet => "📊",
            FileKind::Text => "📄",
        }
    }
}

// ── Clients ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientStatus {
    Done,
    Reset,
    InProgress,
}

impl ClientStatus {
    pub fn label(self) -> &'static str {
        match self {
            ClientStatus::Done => "완료",
            ClientStatus::Reset => "초기화",
            ClientStatus::InProgress => "진행중",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Client {
    pub name: &'static str,
    pub status: ClientStatus,
}

/// Case roster shown on the client-selection screen.
pub const PREDEFINED_CLIENTS: &[Client] = &[
    Client {
        name: "임지혁",
        status: ClientStatus::Done,
    },
    Client {
        name: "김채원",
        status: ClientStatus::Reset,
    },
    Client {
        name: "이지은",
        status: ClientStatus::InProgress,
    },
];

// ── Export formats ─────────────────────────────────────────────────────────────

/// Download format for a single generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Txt,
    Pdf,
    /// Plain text under a `.hwp` extension; there is no HWP encoder.
    Hwp,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 3] = [
        DocumentFormat::Txt,
        DocumentFormat::Pdf,
        DocumentFormat::Hwp,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Txt => "txt",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Hwp => "hwp",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            DocumentFormat::Txt => "📄 TXT 다운로드",
            DocumentFormat::Pdf => "⬇ PDF 다운로드",
            DocumentFormat::Hwp => "📦 HWP 다운로드",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_kind_follows_mime() {
        assert_eq!(FileKind::from_mime("image/jpeg"), FileKind::Image);
        assert_eq!(FileKind::from_mime("application/pdf"), FileKind::Pdf);
        assert_eq!(
            FileKind::from_mime(
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            ),
            FileKind::Spreadsheet
        );
        assert_eq!(FileKind::from_mime("application/vnd.ms-excel"), FileKind::Spreadsheet);
        assert_eq!(FileKind::from_mime("application/octet-stream"), FileKind::Text);
    }

    #[test]
    fn identity_is_name_and_size() {
        let a = SelectedFile::new("a.pdf", 10, "application/pdf");
        let same = SelectedFile::new("a.pdf", 10, "image/png");
        let bigger = SelectedFile::new("a.pdf", 11, "application/pdf");
        assert!(a.same_identity(&same));
        assert!(!a.same_identity(&bigger));
    }

    #[test]
    fn from_path_reads_size_and_guesses_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.png");
        std::fs::write(&path, [0u8; 42]).unwrap();

        let file = SelectedFile::from_path(&path).unwrap();
        assert_eq!(file.name, "scan.png");
        assert_eq!(file.size, 42);
        assert_eq!(file.mime, "image/png");
        assert_eq!(file.kind(), FileKind::Image);
    }

    #[test]
    fn from_path_skips_directories_and_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SelectedFile::from_path(dir.path()).is_none());
        assert!(SelectedFile::from_path(&dir.path().join("missing.txt")).is_none());
    }

    #[test]
    fn format_serialises_lowercase() {
        let json = serde_json::to_string(&DocumentFormat::Hwp).unwrap();
        assert_eq!(json, "\"hwp\"");
    }
}
