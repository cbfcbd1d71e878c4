use crate::config::Config;
use crate::error::Result;
use crate::upload::file_selector::mime_type;
use crate::upload::response::interpret_response;
use crate::upload::types::{SelectedFile, Transaction};
use reqwest::multipart::{Form, Part};
use tracing::{info, warn};

pub const STATEMENT_FIELD: &str = "statement";

#[derive(Clone)]
pub struct StatementClient {
    client: reqwest::Client,
    upload_url: String,
}

impl StatementClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: config.upload_url(),
        }
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    pub async fn upload_statement(&self, file: &SelectedFile) -> Result<Vec<Transaction>> {
        let content = tokio::fs::read(&file.path).await?;
        info!(
            "Uploading '{}' ({} bytes) to {}",
            file.name,
            content.len(),
            self.upload_url
        );

        let part = Part::bytes(content)
            .file_name(file.name.clone())
            .mime_str(mime_type(&file.extension))?;
        let form = Form::new().part(STATEMENT_FIELD, part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        info!("Upload endpoint responded with {}", status);
        let body = response.bytes().await?;

        match interpret_response(status, &body) {
            Ok(transactions) => {
                info!("Received {} transactions", transactions.len());
                Ok(transactions)
            }
            Err(e) => {
                warn!("Upload of '{}' failed: {}", file.name, e);
                Err(e)
            }
        }
    }
}
