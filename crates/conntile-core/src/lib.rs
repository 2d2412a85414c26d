pub mod client_state;
pub mod connection;
pub mod error;
pub mod events;
pub mod filter;
pub mod source;

pub use client_state::{ClientState, StateValue};
pub use connection::{Connection, ConnectionId, ConnectionKey};
pub use error::{ConnectionOperation, ConnectionsError};
pub use events::{ConnectionEvent, ConnectionEventSink};
pub use filter::{filter_connections, search_terms};
pub use source::{ConnectionSource, StaticConnections};
