use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Identity of a connection: the backend kind plus an opaque token that is
/// unique within that kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ConnectionId {
    #[serde(rename = "type")]
    pub kind: String,
    pub token: String,
}

impl ConnectionId {
    pub fn new(kind: impl Into<String>, token: impl Into<String>) -> Self {
        Self { kind: kind.into(), token: token.into() }
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub name: String,
}

/// Row key used for selection bookkeeping. Equal connections always map to
/// equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionKey(u64);

impl Connection {
    pub fn new(kind: impl Into<String>, token: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: ConnectionId::new(kind, token), name: name.into() }
    }

    pub fn kind(&self) -> &str {
        &self.id.kind
    }

    pub fn key(&self) -> ConnectionKey {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        ConnectionKey(hasher.finish())
    }

    /// Label shown in the explorer toolbar, e.g. `Spark: localhost:4040`.
    pub fn display_label(&self) -> String {
        format!("{}: {}", self.id.kind, self.name)
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Both fields are plain strings; serialization cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Decodes a persisted connection. Anything that is not a well-formed
    /// tagged connection yields `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match serde_json::from_value::<Connection>(value.clone()) {
            Ok(conn) => Some(conn),
            Err(e) => {
                tracing::warn!("Ignoring malformed persisted connection: {e}");
                None
            }
        }
    }
}
