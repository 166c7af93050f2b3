//! Mock PDF rendering: plain text laid out on A4 pages.

use crate::config::is_single_face;
use crate::error::{AppError, Result};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_TOP: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 20.0;
const FONT_SIZE: f32 = 12.0;
const LINES_PER_PAGE: usize = 45;
const LINE_HEIGHT: f32 = (PAGE_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM) / LINES_PER_PAGE as f32;
/// Usable line width (180 mm at 12 pt) in half-width character cells.
const LINE_CELLS: usize = 84;

fn pdf_err(e: impl std::fmt::Display) -> AppError {
    AppError::Pdf(e.to_string())
}

/// Render `body` into a PDF. With a single-face `font` the text is embedded
/// as-is; otherwise a built-in Helvetica is used and characters it cannot
/// encode become `?`.
pub fn render_pdf(title: &str, body: &str, font: Option<&Path>) -> Result<Vec<u8>> {
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

    let font = font.filter(|path| {
        let single = is_single_face(path);
        if !single {
            log::warn!("{} is a font collection, using Helvetica", path.display());
        }
        single
    });

    let (font_ref, embedded): (IndirectFontRef, bool) = match font {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            (doc.add_external_font(reader).map_err(pdf_err)?, true)
        }
        None => (
            doc.add_builtin_font(BuiltinFont::Helvetica)
                .map_err(pdf_err)?,
            false,
        ),
    };

    let lines = wrap_lines(body, LINE_CELLS);
    for (index, chunk) in paginate(&lines).enumerate() {
        let layer_ref = if index == 0 {
            doc.get_page(page).get_layer(layer)
        } else {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            doc.get_page(next_page).get_layer(next_layer)
        };
        let mut y = PAGE_HEIGHT - MARGIN_TOP;
        for line in chunk {
            let text = if embedded {
                line.clone()
            } else {
                latin1_only(line)
            };
            layer_ref.use_text(text, FONT_SIZE, Mm(MARGIN_LEFT), Mm(y), &font_ref);
            y -= LINE_HEIGHT;
        }
    }

    doc.save_to_bytes().map_err(pdf_err)
}

/// Group wrapped lines into pages of [`LINES_PER_PAGE`].
fn paginate(lines: &[String]) -> impl Iterator<Item = &[String]> {
    lines.chunks(LINES_PER_PAGE)
}

/// Split on newlines, then hard-wrap each line at `max_cells`, counting
/// East Asian wide characters as two cells.
pub fn wrap_lines(text: &str, max_cells: usize) -> Vec<String> {
    let mut out = Vec::new();
    for raw in text.lines() {
        let mut line = String::new();
        let mut cells = 0;
        for c in raw.chars() {
            let w = char_cells(c);
            if cells + w > max_cells && !line.is_empty() {
                out.push(std::mem::take(&mut line));
                cells = 0;
            }
            line.push(c);
            cells += w;
        }
        out.push(line);
    }
    out
}

fn char_cells(c: char) -> usize {
    match c as u32 {
        0x1100..=0x115F | 0x2E80..=0xA4CF | 0xAC00..=0xD7A3 | 0xF900..=0xFAFF | 0xFF00..=0xFF60 => 2,
        _ => 1,
    }
}

fn latin1_only(line: &str) -> String {
    line.chars()
        .map(|c| if (c as u32) < 0x100 { c } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_blank_lines() {
        let lines = wrap_lines("a\n\nb", 10);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn wrap_counts_hangul_as_wide() {
        let lines = wrap_lines("가나다라", 4);
        assert_eq!(lines, vec!["가나", "다라"]);
        let lines = wrap_lines("abcdef", 4);
        assert_eq!(lines, vec!["abcd", "ef"]);
    }

    #[test]
    fn fallback_font_replaces_unencodable_chars() {
        assert_eq!(latin1_only("의뢰인: Kim"), "???: Kim");
    }

    #[test]
    fn renders_pdf_with_builtin_font() {
        let body = "임지혁_토지대장\n\n의뢰인: 임지혁\n".repeat(40);
        let bytes = render_pdf("임지혁_토지대장", &body, None).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn pages_hold_forty_five_lines() {
        let lines: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        let sizes: Vec<usize> = paginate(&lines).map(<[String]>::len).collect();
        assert_eq!(sizes, vec![45, 45, 10]);
        // Last line of a full page stays above the bottom margin.
        let last_y = PAGE_HEIGHT - MARGIN_TOP - (LINES_PER_PAGE - 1) as f32 * LINE_HEIGHT;
        assert!(last_y >= MARGIN_BOTTOM);
    }

    #[test]
    fn font_collection_falls_back_to_builtin() {
        let mut collection = tempfile::Builder::new().suffix(".ttc").tempfile().unwrap();
        std::io::Write::write_all(&mut collection, b"ttcf not a single face").unwrap();
        let bytes = render_pdf("t", "의뢰인: 임지혁", Some(collection.path())).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn missing_font_file_is_an_io_error() {
        let err = render_pdf("t", "body", Some(Path::new("/nonexistent/font.ttf"))).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
