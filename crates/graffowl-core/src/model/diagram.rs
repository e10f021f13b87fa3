use std::path::{Path, PathBuf};

use log::info;

use crate::{
    container::DiagramDocument,
    model::{ModelError, page::Page},
};

/// A whole diagram: its source and its pages in document order.
#[derive(Debug, Clone)]
pub struct Diagram {
    path: PathBuf,
    file_name: String,
    pages: Vec<Page>,
}

impl Diagram {
    /// Builds the graphic model for every sheet of a document.
    pub fn build(document: &DiagramDocument) -> Result<Self, ModelError> {
        let pages = document
            .sheets()?
            .iter()
            .enumerate()
            .map(|(index, sheet)| Page::build(index, sheet))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            file = document.file_name(),
            pages = pages.len();
            "Diagram model built"
        );

        Ok(Self {
            path: document.path().to_path_buf(),
            file_name: document.file_name(),
            pages,
        })
    }

    /// Loads and builds a diagram from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let document = DiagramDocument::load(path)?;
        Self::build(&document)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// The first page with the given title.
    pub fn page_by_title(&self, title: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.title() == title)
    }
}
