use serde_json::Value;

use conntile_core::{
    filter_connections, ClientState, Connection, ConnectionEvent, ConnectionOperation, ConnectionSource,
    ConnectionsError, StateValue,
};

use crate::command::{AppCommand, CommandRegistry};

pub const MODULE_CONNECTIONS: &str = "connections-pane";
pub const KEY_ACTIVE_CONNECTION: &str = "activeConnection";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeightMode {
    Normal,
    Maximized,
}

/// What the presenter needs from the connections pane.
pub trait ConnectionsView {
    fn set_connections(&mut self, connections: Vec<Connection>);
    fn selected_connection(&self) -> Option<&Connection>;
    fn show_connection_explorer(&mut self, connection: &Connection);
    fn show_connections_list(&mut self);
    fn ensure_height(&mut self, mode: HeightMode);
}

/// Application-wide user notifications.
pub trait GlobalDisplay {
    fn show_error_message(&mut self, title: &str, message: &str);
}

pub struct ConnectionsPresenter<V, D> {
    view: V,
    display: D,
    commands: CommandRegistry,
    all_connections: Vec<Connection>,
    search_query: String,
    active_connection: Option<Connection>,
    last_known_active_connection: Option<Connection>,
}

impl<V: ConnectionsView, D: GlobalDisplay> ConnectionsPresenter<V, D> {
    pub fn new(
        view: V,
        display: D,
        source: &dyn ConnectionSource,
        mut commands: CommandRegistry,
        client_state: &ClientState,
    ) -> Self {
        // Connect/disconnect stay hidden until something is selected.
        commands.set_visible(AppCommand::ConnectConnection, false);
        commands.set_visible(AppCommand::DisconnectConnection, false);

        let mut presenter = Self {
            view,
            display,
            commands,
            all_connections: Vec::new(),
            search_query: String::new(),
            active_connection: None,
            last_known_active_connection: None,
        };
        presenter.update_connections(source.connections());
        client_state.init_value(&mut presenter);
        presenter
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn all_connections(&self) -> &[Connection] {
        &self.all_connections
    }

    pub fn active_connection(&self) -> Option<&Connection> {
        self.active_connection.as_ref()
    }

    pub fn on_selection_changed(&mut self) {
        let connected = self.view.selected_connection().is_some_and(is_connected);
        self.commands.set_visible(AppCommand::ConnectConnection, !connected);
        self.commands.set_visible(AppCommand::DisconnectConnection, connected);
    }

    pub fn on_search_changed(&mut self, query: &str) {
        self.search_query = query.to_string();
        let filtered = filter_connections(&self.all_connections, &self.search_query);
        tracing::debug!("Search {query:?} matched {}/{}", filtered.len(), self.all_connections.len());
        self.view.set_connections(filtered);
    }

    pub fn on_explore_requested(&mut self, connection: Connection) {
        self.explore_connection(connection);
        self.view.ensure_height(HeightMode::Maximized);
    }

    pub fn on_back_to_list(&mut self) {
        self.active_connection = None;
        self.view.show_connections_list();
        self.view.ensure_height(HeightMode::Normal);
    }

    pub fn on_new_connection(&mut self) {
        self.report(ConnectionsError::NotYetImplemented(ConnectionOperation::New));
    }

    pub fn on_remove_connection(&mut self) {
        self.report(ConnectionsError::NotYetImplemented(ConnectionOperation::Remove));
    }

    pub fn on_connect_connection(&mut self) {
        self.report(ConnectionsError::NotYetImplemented(ConnectionOperation::Connect));
    }

    pub fn on_disconnect_connection(&mut self) {
        self.report(ConnectionsError::NotYetImplemented(ConnectionOperation::Disconnect));
    }

    pub fn on_connection_event(&mut self, event: &ConnectionEvent) {
        let id = event.connection_id();
        match event {
            ConnectionEvent::Opened(_) => tracing::info!("Connection opened: {id}"),
            ConnectionEvent::Closed(_) => tracing::info!("Connection closed: {id}"),
            ConnectionEvent::Updated(_) => tracing::info!("Connection updated: {id}"),
        }
    }

    fn update_connections(&mut self, connections: Vec<Connection>) {
        self.all_connections = connections;
        self.view.set_connections(filter_connections(&self.all_connections, &self.search_query));
    }

    fn explore_connection(&mut self, connection: Connection) {
        tracing::info!("Exploring {}", connection.id);
        self.view.show_connection_explorer(&connection);
        self.active_connection = Some(connection);
    }

    fn report(&mut self, err: ConnectionsError) {
        tracing::warn!("{err}");
        let (title, message) = err.user_message();
        self.display.show_error_message(title, &message);
    }
}

// Connection state is not tracked yet.
fn is_connected(_connection: &Connection) -> bool {
    false
}

impl<V: ConnectionsView, D: GlobalDisplay> StateValue for ConnectionsPresenter<V, D> {
    fn module(&self) -> &str {
        MODULE_CONNECTIONS
    }

    fn key(&self) -> &str {
        KEY_ACTIVE_CONNECTION
    }

    fn on_init(&mut self, value: Option<Value>) {
        self.active_connection = value.as_ref().and_then(Connection::from_json);
        self.last_known_active_connection = self.active_connection.clone();

        if let Some(connection) = self.active_connection.clone() {
            self.explore_connection(connection);
        }
    }

    fn get_value(&self) -> Option<Value> {
        self.active_connection.as_ref().map(Connection::to_json)
    }

    fn has_changed(&mut self) -> bool {
        if self.last_known_active_connection != self.active_connection {
            self.last_known_active_connection = self.active_connection.clone();
            true
        } else {
            false
        }
    }
}
