mod app_logs_pane;
mod connections_pane;

pub use app_logs_pane::AppLogsPane;
pub use connections_pane::ConnectionsPane;
