use crate::upload::dialog_extensions;
use rfd::FileDialog;
use std::path::{Path, PathBuf};

/// The native stand-in for a file `<input>`: opens the picker, accepts
/// drops, and remembers the last chosen name until cleared.
#[derive(Default)]
pub struct FileInput {
    chosen_name: Option<String>,
    last_dir: Option<PathBuf>,
}

impl FileInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self) -> &str {
        self.chosen_name.as_deref().unwrap_or("No file chosen")
    }

    /// Opens the picker filtered to statement formats.
    pub fn browse(&mut self) -> Option<PathBuf> {
        let mut dialog = FileDialog::new()
            .set_title("Choose a bank statement")
            .add_filter("Bank statements", dialog_extensions().as_slice());
        if let Some(dir) = &self.last_dir {
            dialog = dialog.set_directory(dir);
        }

        let path = dialog.pick_file()?;
        self.remember(&path);
        Some(path)
    }

    /// First file dropped onto the window this frame, if any.
    pub fn take_dropped(&mut self, ctx: &egui::Context) -> Option<PathBuf> {
        let path = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .find_map(|file| file.path.clone())
        })?;
        self.remember(&path);
        Some(path)
    }

    /// Forgets the chosen file so the same name can be picked again.
    pub fn clear(&mut self) {
        self.chosen_name = None;
    }

    pub(crate) fn remember(&mut self, path: &Path) {
        self.chosen_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());
        self.last_dir = path.parent().map(|p| p.to_path_buf());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_tracks_chosen_file_until_cleared() {
        let mut input = FileInput::new();
        assert_eq!(input.label(), "No file chosen");

        input.remember(&PathBuf::from("/home/me/Downloads/statement.pdf"));
        assert_eq!(input.label(), "statement.pdf");
        assert_eq!(input.last_dir, Some(PathBuf::from("/home/me/Downloads")));

        input.clear();
        assert_eq!(input.label(), "No file chosen");
        assert_eq!(input.last_dir, Some(PathBuf::from("/home/me/Downloads")));
    }
}
