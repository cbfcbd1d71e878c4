mod file_input;
mod state;
mod ui;

use crate::config::Config;
use crate::error::{Result, UploadError};
use crate::upload::{StatementClient, Transaction};
use eframe::App;
pub use file_input::FileInput;
pub use state::{UploadPhase, UploadState};
use std::path::Path;
use std::sync::mpsc::{self as std_mpsc, TryRecvError};
use tracing::{info, warn};

pub struct StatementUploader {
    state: UploadState,
    file_input: FileInput,
    client: StatementClient,
    upload_receiver: Option<std_mpsc::Receiver<Result<Vec<Transaction>>>>,
}

impl StatementUploader {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        info!("Initializing Bank Statement Uploader");
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        let client = StatementClient::new(&config);
        info!("Statements will be sent to {}", client.upload_url());
        Self {
            state: UploadState::default(),
            file_input: FileInput::new(),
            client,
            upload_receiver: None,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn choose_file(&mut self, path: &Path) {
        self.state.choose_file(path);
    }

    pub fn start_upload(&mut self, ctx: &egui::Context) {
        let Some(file) = self.state.begin_upload() else {
            warn!("Upload requested without a selected file");
            return;
        };

        let (sender, receiver) = std_mpsc::channel();
        self.upload_receiver = Some(receiver);

        let client = self.client.clone();
        let ctx = ctx.clone();

        std::thread::spawn(move || {
            let result = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt.block_on(client.upload_statement(&file)),
                Err(e) => Err(UploadError::transport(format!(
                    "Failed to start upload runtime: {}",
                    e
                ))),
            };

            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Picks up the worker's result, if it has arrived.
    pub fn update_state(&mut self) {
        let Some(receiver) = &self.upload_receiver else {
            return;
        };

        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                warn!("Upload worker exited without reporting a result");
                Err(UploadError::transport(""))
            }
        };

        self.upload_receiver = None;
        self.finish_upload(result);
    }

    fn finish_upload(&mut self, result: Result<Vec<Transaction>>) {
        let succeeded = result.is_ok();
        if let Err(e) = &result {
            warn!("Upload failed: {}", e);
        }

        self.state.complete_upload(result);
        if succeeded {
            self.file_input.clear();
        }
    }
}

impl App for StatementUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state();

        if let Some(path) = self.file_input.take_dropped(ctx) {
            self.choose_file(&path);
        }

        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::parse_transactions;
    use std::path::PathBuf;

    fn uploading_app() -> (StatementUploader, std_mpsc::Sender<Result<Vec<Transaction>>>) {
        let mut app = StatementUploader::with_config(Config::default());
        app.choose_file(&PathBuf::from("/statements/jan.csv"));
        assert!(app.state.begin_upload().is_some());

        let (sender, receiver) = std_mpsc::channel();
        app.upload_receiver = Some(receiver);
        (app, sender)
    }

    #[test]
    fn test_start_without_selection_spawns_no_worker() {
        let mut app = StatementUploader::with_config(Config::default());
        app.start_upload(&egui::Context::default());

        assert!(app.upload_receiver.is_none());
        assert!(!app.state().loading);
        assert_eq!(
            app.state().error.as_deref(),
            Some("Please select a file to upload")
        );
    }

    #[test]
    fn test_start_after_rejected_file_spawns_no_worker() {
        let mut app = StatementUploader::with_config(Config::default());
        app.choose_file(&PathBuf::from("/statements/jan.csv"));
        app.choose_file(&PathBuf::from("/statements/jan.pdf"));
        app.start_upload(&egui::Context::default());

        assert!(app.upload_receiver.is_none());
        assert_eq!(
            app.state().error.as_deref(),
            Some("Please select a file to upload")
        );
    }

    #[test]
    fn test_update_waits_for_worker() {
        let (mut app, _sender) = uploading_app();
        app.update_state();
        assert!(app.state().loading);
        assert!(app.upload_receiver.is_some());
    }

    #[test]
    fn test_success_clears_file_input() {
        let (mut app, sender) = uploading_app();
        app.file_input.remember(Path::new("/statements/jan.csv"));

        let rows = parse_transactions(br#"[{"date":"d","description":"x","amount":2}]"#).unwrap();
        sender.send(Ok(rows)).unwrap();
        app.update_state();

        assert!(!app.state().loading);
        assert_eq!(app.state().transactions.len(), 1);
        assert!(app.state().selected_file.is_none());
        assert_eq!(app.file_input.label(), "No file chosen");
        assert!(app.upload_receiver.is_none());
    }

    #[test]
    fn test_failure_keeps_file_input() {
        let (mut app, sender) = uploading_app();
        app.file_input.remember(Path::new("/statements/jan.csv"));

        sender
            .send(Err(UploadError::Upstream("bad format".into())))
            .unwrap();
        app.update_state();

        assert!(!app.state().loading);
        assert_eq!(app.state().error.as_deref(), Some("bad format"));
        assert_eq!(app.file_input.label(), "jan.csv");
    }

    #[test]
    fn test_vanished_worker_still_clears_loading() {
        let (mut app, sender) = uploading_app();
        drop(sender);
        app.update_state();

        assert!(!app.state().loading);
        assert_eq!(app.state().error.as_deref(), Some("Error uploading file"));
        assert_eq!(app.state().phase, UploadPhase::Failed);
    }
}
