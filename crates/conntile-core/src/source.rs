use crate::connection::Connection;
use crate::events::ConnectionEventSink;

/// Backing store of known connections. Read-only from the pane's side.
pub trait ConnectionSource {
    fn connections(&self) -> Vec<Connection>;

    /// Hands the source a sink for lifecycle events. A source whose list
    /// never changes has nothing to publish and drops it.
    fn watch(&self, sink: Box<dyn ConnectionEventSink>) {
        drop(sink);
    }
}

/// A fixed list, e.g. the `[[connections]]` entries of the config file.
#[derive(Debug, Clone, Default)]
pub struct StaticConnections {
    connections: Vec<Connection>,
}

impl StaticConnections {
    pub fn new(connections: Vec<Connection>) -> Self {
        Self { connections }
    }
}

impl ConnectionSource for StaticConnections {
    fn connections(&self) -> Vec<Connection> {
        self.connections.clone()
    }
}
