use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionOperation {
    New,
    Remove,
    Connect,
    Disconnect,
}

impl fmt::Display for ConnectionOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::New => "new connection",
            Self::Remove => "remove connection",
            Self::Connect => "connect",
            Self::Disconnect => "disconnect",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub enum ConnectionsError {
    NotYetImplemented(ConnectionOperation),
    StateIo(io::Error),
    StateFormat(serde_json::Error),
}

impl ConnectionsError {
    /// Title and message used when the error is shown to the user.
    pub fn user_message(&self) -> (&'static str, String) {
        match self {
            Self::NotYetImplemented(_) => ("Error", "Not Yet Implemented".into()),
            other => ("Error", other.to_string()),
        }
    }
}

impl fmt::Display for ConnectionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotYetImplemented(op) => write!(f, "Not yet implemented: {op}"),
            Self::StateIo(e) => write!(f, "Client state I/O error: {e}"),
            Self::StateFormat(e) => write!(f, "Client state format error: {e}"),
        }
    }
}

impl std::error::Error for ConnectionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotYetImplemented(_) => None,
            Self::StateIo(e) => Some(e),
            Self::StateFormat(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConnectionsError {
    fn from(e: io::Error) -> Self {
        Self::StateIo(e)
    }
}

impl From<serde_json::Error> for ConnectionsError {
    fn from(e: serde_json::Error) -> Self {
        Self::StateFormat(e)
    }
}
