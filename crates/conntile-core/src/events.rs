use crate::connection::ConnectionId;

/// Backend-originated connection lifecycle notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionEvent {
    Opened(ConnectionId),
    Closed(ConnectionId),
    Updated(ConnectionId),
}

/// Where a connection backend publishes lifecycle events.
pub trait ConnectionEventSink: Send {
    fn publish(&self, event: ConnectionEvent);
}

impl ConnectionEvent {
    pub fn connection_id(&self) -> &ConnectionId {
        match self {
            Self::Opened(id) | Self::Closed(id) | Self::Updated(id) => id,
        }
    }
}
