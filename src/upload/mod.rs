mod client;
mod file_selector;
mod response;
mod types;

pub use client::{StatementClient, STATEMENT_FIELD};
pub use file_selector::{
    derive_extension, dialog_extensions, is_allowed_extension, mime_type, select_file,
    ALLOWED_EXTENSIONS,
};
pub use response::{interpret_response, parse_transactions, rejection_error};
pub use types::{SelectedFile, StatementRow, Transaction, DEFAULT_CATEGORY};
