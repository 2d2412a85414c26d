use serde::{Deserialize, Serialize};

/// One `[[connections]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectionEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl ConnectionEntry {
    /// The configured token, or `"{type}-{index}"` lower-cased, which stays
    /// stable as long as the entry order does.
    pub fn token_or_default(&self, index: usize) -> String {
        self.token.clone().unwrap_or_else(|| format!("{}-{index}", self.kind.to_lowercase()))
    }
}
