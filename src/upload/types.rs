use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Category stamped on every row until real categorization exists.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    /// Lower-cased, dot-prefixed, e.g. `.xlsx`.
    pub extension: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatementRow {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A row ready for display: the upstream fields plus a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl From<StatementRow> for Transaction {
    fn from(mut row: StatementRow) -> Self {
        if row.extra.remove("category").is_some() {
            tracing::debug!("Replacing server-provided category with {}", DEFAULT_CATEGORY);
        }
        Self {
            date: row.date,
            description: row.description,
            amount: row.amount,
            category: DEFAULT_CATEGORY.to_string(),
            extra: row.extra,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AmountRepr {
    Number(f64),
    Text(String),
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match AmountRepr::deserialize(deserializer)? {
        AmountRepr::Number(n) => Ok(n),
        AmountRepr::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount: {:?}", s))),
    }
}
