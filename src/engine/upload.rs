//! The set of documents selected for upload.

use crate::types::SelectedFile;

/// Ordered, de-duplicated file selection capped at `capacity` entries.
///
/// Processing may only start when exactly `capacity` files are present.
#[derive(Debug)]
pub struct UploadSet {
    files: Vec<SelectedFile>,
    capacity: usize,
    /// A drag is hovering over the window while files are being selected.
    pub dragging: bool,
}

impl UploadSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            files: Vec::with_capacity(capacity),
            capacity,
            dragging: false,
        }
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_complete(&self) -> bool {
        self.files.len() == self.capacity
    }

    /// Append `incoming`, keeping the first occurrence of each name+size pair,
    /// then truncate to capacity. Returns the number of files actually added.
    pub fn add(&mut self, incoming: impl IntoIterator<Item = SelectedFile>) -> usize {
        let before = self.files.len();
        for file in incoming {
            if self.files.len() >= self.capacity {
                break;
            }
            if self.files.iter().any(|f| f.same_identity(&file)) {
                log::debug!("duplicate file ignored: {}", file.name);
                continue;
            }
            self.files.push(file);
        }
        let added = self.files.len() - before;
        log::info!(
            "{added} file(s) added, {}/{} selected",
            self.files.len(),
            self.capacity
        );
        added
    }

    /// Remove the file at `index`; out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<SelectedFile> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> SelectedFile {
        SelectedFile::new(name, size, "application/pdf")
    }

    fn numbered(n: usize) -> Vec<SelectedFile> {
        (0..n).map(|i| file(&format!("doc{i}.pdf"), 100 + i as u64)).collect()
    }

    #[test]
    fn complete_only_at_exact_capacity() {
        let mut set = UploadSet::new(10);
        set.add(numbered(9));
        assert!(!set.is_complete());
        set.add([file("last.pdf", 1)]);
        assert!(set.is_complete());
    }

    #[test]
    fn overflow_is_truncated() {
        let mut set = UploadSet::new(10);
        let added = set.add(numbered(12));
        assert_eq!(added, 10);
        assert_eq!(set.len(), 10);
        assert_eq!(set.files()[9].name, "doc9.pdf");
        assert_eq!(set.add([file("extra.pdf", 5)]), 0);
    }

    #[test]
    fn duplicates_by_name_and_size_are_dropped() {
        let mut set = UploadSet::new(10);
        set.add([file("a.pdf", 1), file("a.pdf", 1), file("a.pdf", 2)]);
        assert_eq!(set.len(), 2);
        set.add([file("a.pdf", 2)]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn duplicates_do_not_consume_capacity() {
        let mut set = UploadSet::new(2);
        set.add([file("a.pdf", 1)]);
        set.add([file("a.pdf", 1), file("b.pdf", 1)]);
        assert_eq!(set.len(), 2);
        assert!(set.is_complete());
    }

    #[test]
    fn remove_makes_set_incomplete_again() {
        let mut set = UploadSet::new(3);
        set.add(numbered(3));
        let removed = set.remove(1).unwrap();
        assert_eq!(removed.name, "doc1.pdf");
        assert!(!set.is_complete());
        assert_eq!(set.files()[1].name, "doc2.pdf");
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut set = UploadSet::new(3);
        set.add(numbered(1));
        assert!(set.remove(5).is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn clear_resets_drag_state() {
        let mut set = UploadSet::new(3);
        set.add(numbered(2));
        set.dragging = true;
        set.clear();
        assert!(set.is_empty());
        assert!(!set.dragging);
    }
}
