use serde::Serialize;
use thiserror::Error;

use crate::config;

/// Metadata of a file the visitor attached. Contents never leave the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
    Document,
    Spreadsheet,
    Slides,
    Other,
}

impl FileKind {
    pub fn icon(self) -> &'static str {
        match self {
            FileKind::Image => "🖼️",
            FileKind::Pdf => "📄",
            FileKind::Document => "📝",
            FileKind::Spreadsheet => "📊",
            FileKind::Slides => "📑",
            FileKind::Other => "📎",
        }
    }
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    pub fn kind(&self) -> FileKind {
        let extension = self
            .name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "svg" => FileKind::Image,
            "pdf" => FileKind::Pdf,
            "doc" | "docx" => FileKind::Document,
            "xls" | "xlsx" => FileKind::Spreadsheet,
            "ppt" | "pptx" => FileKind::Slides,
            _ => FileKind::Other,
        }
    }

    /// Size in KB with one decimal, e.g. "(12.5 KB)".
    pub fn size_label(&self) -> String {
        format!("({:.1} KB)", self.size as f64 / 1024.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileSelectionError {
    #[error("You can upload a maximum of {max} files.")]
    TooManyFiles { max: usize },
}

/// Ordered, bounded list of attached files. Duplicates are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSelection {
    files: Vec<FileDescriptor>,
    max: usize,
}

impl Default for FileSelection {
    fn default() -> Self {
        Self::new(config::MAX_UPLOAD_FILES)
    }
}

impl FileSelection {
    pub fn new(max: usize) -> Self {
        Self {
            files: Vec::new(),
            max,
        }
    }

    /// Appends the whole batch or nothing. Returns the new count.
    pub fn add<I>(&mut self, incoming: I) -> Result<usize, FileSelectionError>
    where
        I: IntoIterator<Item = FileDescriptor>,
    {
        let incoming: Vec<FileDescriptor> = incoming.into_iter().collect();
        if self.files.len() + incoming.len() > self.max {
            log::warn!(
                "rejecting {} file(s): {} already selected, limit is {}",
                incoming.len(),
                self.files.len(),
                self.max
            );
            return Err(FileSelectionError::TooManyFiles { max: self.max });
        }
        self.files.extend(incoming);
        Ok(self.files.len())
    }

    pub fn remove(&mut self, index: usize) -> Option<FileDescriptor> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn as_slice(&self) -> &[FileDescriptor] {
        &self.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pdfs(count: usize) -> Vec<FileDescriptor> {
        (0..count)
            .map(|i| FileDescriptor::new(format!("brief-{i}.pdf"), 2048, "application/pdf"))
            .collect()
    }

    #[test]
    fn rejects_batch_over_limit_without_partial_add() {
        let mut selection = FileSelection::new(5);
        assert_eq!(selection.add(pdfs(6)), Err(FileSelectionError::TooManyFiles { max: 5 }));
        assert!(selection.is_empty());

        selection.add(pdfs(3)).expect("three fit");
        assert_eq!(selection.add(pdfs(3)), Err(FileSelectionError::TooManyFiles { max: 5 }));
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn fills_exactly_to_limit() {
        let mut selection = FileSelection::new(5);
        assert_eq!(selection.add(pdfs(2)), Ok(2));
        assert_eq!(selection.add(pdfs(3)), Ok(5));
    }

    #[test]
    fn duplicate_names_are_kept() {
        let mut selection = FileSelection::default();
        let file = FileDescriptor::new("notes.docx", 100, "application/msword");
        selection.add(vec![file.clone()]).expect("first");
        selection.add(vec![file.clone()]).expect("second");
        assert_eq!(selection.as_slice(), &[file.clone(), file][..]);
    }

    #[test]
    fn remove_by_position() {
        let mut selection = FileSelection::new(5);
        selection.add(pdfs(3)).expect("add");

        let removed = selection.remove(1).expect("in range");
        assert_eq!(removed.name, "brief-1.pdf");
        let names: Vec<&str> = selection.as_slice().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["brief-0.pdf", "brief-2.pdf"]);

        assert_eq!(selection.remove(7), None);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn kind_and_size_label() {
        assert_eq!(FileDescriptor::new("Photo.JPG", 0, "").kind(), FileKind::Image);
        assert_eq!(FileDescriptor::new("deck.pptx", 0, "").kind(), FileKind::Slides);
        assert_eq!(FileDescriptor::new("Makefile", 0, "").kind(), FileKind::Other);
        assert_eq!(FileDescriptor::new("a.pdf", 1536, "").size_label(), "(1.5 KB)");
    }
}
