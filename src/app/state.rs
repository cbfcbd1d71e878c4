use crate::error::{Result, UploadError};
use crate::upload::{select_file, SelectedFile, Transaction};
use std::path::Path;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    FileSelected,
    Uploading,
    Success,
    Failed,
}

impl Default for UploadPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Everything the window shows. Only mutated through the methods below.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_file: Option<SelectedFile>,
    pub phase: UploadPhase,
}

impl UploadState {
    /// Handles a pick from the dialog or a drop onto the window.
    ///
    /// A rejected file always clears the current selection.
    pub fn choose_file(&mut self, path: &Path) {
        match select_file(path) {
            Ok(file) => {
                info!("Selected statement '{}'", file.name);
                self.selected_file = Some(file);
                self.error = None;
                self.phase = UploadPhase::FileSelected;
            }
            Err(e) => {
                warn!("Rejected {}: {}", path.display(), e);
                self.selected_file = None;
                self.error = Some(e.to_string());
                self.phase = UploadPhase::Idle;
            }
        }
    }

    /// Starts an attempt. Returns the file to send, or `None` when the
    /// no-file guard fired and nothing should go over the network.
    pub fn begin_upload(&mut self) -> Option<SelectedFile> {
        let Some(file) = self.selected_file.clone() else {
            self.error = Some(UploadError::NoFileSelected.to_string());
            self.phase = UploadPhase::Idle;
            return None;
        };

        self.loading = true;
        self.error = None;
        self.phase = UploadPhase::Uploading;
        Some(file)
    }

    /// Applies the outcome of an attempt. `loading` is cleared on every path.
    pub fn complete_upload(&mut self, result: Result<Vec<Transaction>>) {
        match result {
            Ok(transactions) => {
                self.transactions = transactions;
                self.selected_file = None;
                self.phase = UploadPhase::Success;
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.phase = UploadPhase::Failed;
            }
        }
        self.loading = false;
    }

    pub fn can_upload(&self) -> bool {
        !self.loading && self.selected_file.is_some()
    }

    pub fn has_transactions(&self) -> bool {
        !self.transactions.is_empty()
    }
}
