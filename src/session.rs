use crate::models::Dataset;
use std::path::{Path, PathBuf};

/// Everything a command needs: the loaded dataset and where exports go.
///
/// The dataset is owned here and only handed out by shared reference.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Dataset,
    out_dir: Option<PathBuf>,
}

impl Session {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            out_dir: None,
        }
    }

    /// Write exports into `dir` instead of the current working directory.
    pub fn with_out_dir<P: Into<PathBuf>>(mut self, dir: Option<P>) -> Self {
        self.out_dir = dir.map(Into::into);
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn out_dir(&self) -> Option<&Path> {
        self.out_dir.as_deref()
    }

    /// Target path for an export with a fixed `file_name`.
    pub fn output_path(&self, file_name: &str) -> PathBuf {
        match &self.out_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}
