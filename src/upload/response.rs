use crate::error::{Result, UploadError};
use crate::upload::types::{StatementRow, Transaction};
use reqwest::StatusCode;
use serde_json::Value;

/// Turns a finished HTTP exchange into rows or a displayable error.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<Vec<Transaction>> {
    if !status.is_success() {
        return Err(rejection_error(body));
    }
    parse_transactions(body)
}

pub fn parse_transactions(body: &[u8]) -> Result<Vec<Transaction>> {
    let rows: Vec<StatementRow> =
        serde_json::from_slice(body).map_err(|e| UploadError::transport(e.to_string()))?;
    Ok(rows.into_iter().map(Transaction::from).collect())
}

pub fn rejection_error(body: &[u8]) -> UploadError {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => UploadError::upstream(map.get("detail").and_then(detail_text)),
        Ok(_) => UploadError::upstream(None),
        Err(e) => UploadError::transport(e.to_string()),
    }
}

// Falsy values (null, false, 0, "") count as missing.
fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
