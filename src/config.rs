//! Command-line configuration.

use crate::error::{AppError, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// System locations probed for a Hangul-capable font when `--font` is absent.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/nanum/NanumGothic.ttf",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "/Library/Fonts/AppleGothic.ttf",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

#[derive(Parser, Debug, Clone)]
#[command(name = "miracle_demo", about = "One-Button Miracle document automation demo")]
pub struct Config {
    /// Exact number of documents a client must upload before processing.
    #[arg(long, env = "MIRACLE_REQUIRED_FILES", default_value_t = 10)]
    pub required_files: usize,

    /// Splash screen duration in milliseconds.
    #[arg(long, default_value_t = 2500)]
    pub splash_ms: u64,

    /// Duration of each scripted processing stage in milliseconds.
    #[arg(long, default_value_t = 2000)]
    pub stage_ms: u64,

    /// Directory generated documents are written to.
    #[arg(long, env = "MIRACLE_OUTPUT_DIR", default_value = "downloads")]
    pub output_dir: PathBuf,

    /// TTF/OTF font with Hangul coverage, used by the UI and PDF export.
    #[arg(long, env = "MIRACLE_FONT")]
    pub font: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            required_files: 10,
            splash_ms: 2500,
            stage_ms: 2000,
            output_dir: PathBuf::from("downloads"),
            font: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.required_files == 0 {
            return Err(AppError::Config(
                "--required-files must be at least 1".to_string(),
            ));
        }
        if self.splash_ms == 0 || self.stage_ms == 0 {
            return Err(AppError::Config(
                "--splash-ms and --stage-ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    pub fn stage_duration(&self) -> Duration {
        Duration::from_millis(self.stage_ms)
    }

    /// The explicit `--font`, or the first system CJK font that exists.
    pub fn resolve_font(&self) -> Option<PathBuf> {
        if let Some(path) = &self.font
            && !path.is_file()
        {
            log::warn!("font {} not found, probing system fonts", path.display());
        }
        self.font_candidates().next()
    }

    /// Like [`Config::resolve_font`], but skips font collections: PDF export
    /// embeds the file as one font program, which a `.ttc` is not.
    pub fn resolve_pdf_font(&self) -> Option<PathBuf> {
        self.font_candidates().find(|p| is_single_face(p))
    }

    fn font_candidates(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.font
            .iter()
            .cloned()
            .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from))
            .filter(|p| p.is_file())
    }
}

/// `true` for `.ttf` / `.otf` files, which hold exactly one face.
pub fn is_single_face(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf") || ext.eq_ignore_ascii_case("otf"))
}
