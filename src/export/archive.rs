//! Zip bundling of generated text documents.

use crate::error::Result;
use std::io::{Cursor, Write};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Build an in-memory deflate archive from `(entry_name, text)` pairs.
pub fn build_zip(entries: &[(String, String)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, body) in entries {
        zip.start_file(name.as_str(), options)?;
        zip.write_all(body.as_bytes())?;
    }
    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn entries_keep_order_and_utf8_names() {
        let entries = vec![
            ("임지혁_토지대장.txt".to_string(), "토지대장 본문".to_string()),
            ("임지혁_건축물대장.txt".to_string(), "건축물대장 본문".to_string()),
        ];
        let bytes = build_zip(&entries).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "임지혁_토지대장.txt");

        let mut body = String::new();
        archive
            .by_name("임지혁_건축물대장.txt")
            .unwrap()
            .read_to_string(&mut body)
            .unwrap();
        assert_eq!(body, "건축물대장 본문");
    }

    #[test]
    fn empty_archive_is_still_valid() {
        let bytes = build_zip(&[]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
