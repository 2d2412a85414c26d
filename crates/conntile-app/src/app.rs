use std::time::Duration;

use ratatui::backend::Backend;
use ratatui::Terminal;

use conntile_config::AppConfig;
use conntile_core::{ClientState, Connection, ConnectionSource, StaticConnections};
use conntile_tui::theme::Theme;

use crate::command::CommandRegistry;
use crate::display::ModalDisplay;
use crate::event::{ConnectionBus, EventHandler};
use crate::keybindings::KeybindingDispatcher;
use crate::panes::{AppLogsPane, ConnectionsPane};
use crate::presenter::ConnectionsPresenter;

mod input;
mod render;

/// Log lines kept for the strip; more than any terminal shows.
const LOG_STRIP_LIMIT: usize = 200;

pub struct App {
    running: bool,
    tick_rate: Duration,
    frame_rate: Duration,
    events: EventHandler,
    dispatcher: KeybindingDispatcher,
    presenter: ConnectionsPresenter<ConnectionsPane, ModalDisplay>,
    client_state: ClientState,
    app_logs: AppLogsPane,
    show_logs: bool,
    log_height: u16,
    theme: Theme,
    connections_enabled: bool,
}

impl App {
    pub fn new(config: &AppConfig, client_state: ClientState) -> Self {
        let events = EventHandler::new();
        let dispatcher = KeybindingDispatcher::from_config(&config.keybindings);
        let pane = ConnectionsPane::new(config.general.slide_duration(), events.app_tx());
        let connections_enabled = config.general.connections_enabled;
        let presenter = if connections_enabled {
            let source = StaticConnections::new(seed_connections(config));
            source.watch(Box::new(ConnectionBus::new(events.app_tx())));
            let presenter =
                ConnectionsPresenter::new(pane, ModalDisplay::new(), &source, CommandRegistry::new(), &client_state);
            tracing::info!("Loaded {} connection(s)", presenter.all_connections().len());
            presenter
        } else {
            // Nothing is restored from the store, and nothing is written back to it.
            let source = StaticConnections::new(Vec::new());
            tracing::info!("Connections are disabled");
            ConnectionsPresenter::new(
                pane,
                ModalDisplay::new(),
                &source,
                CommandRegistry::new(),
                &ClientState::in_memory(),
            )
        };

        let mut app = Self {
            running: true,
            tick_rate: config.general.tick_rate(),
            frame_rate: config.general.frame_rate(),
            events,
            dispatcher,
            presenter,
            client_state,
            app_logs: AppLogsPane::new(LOG_STRIP_LIMIT),
            show_logs: config.general.show_app_logs,
            // One row for the strip's top border.
            log_height: config.general.log_lines.saturating_add(1),
            theme: Theme::from_config(&config.theme),
            connections_enabled,
        };
        app.sync_mode();
        app
    }

    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> anyhow::Result<()> {
        self.events.start(self.tick_rate, self.frame_rate);

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            let first = self.events.next().await?;
            self.handle_event(first);

            for event in self.events.drain_pending() {
                if !self.running {
                    break;
                }
                self.handle_event(event);
            }
        }

        self.persist_state();
        Ok(())
    }

    fn persist_state(&mut self) {
        if !self.connections_enabled {
            return;
        }
        if let Err(e) = self.client_state.sync(&mut self.presenter) {
            tracing::error!("Failed to save client state: {e}");
        }
    }
}

fn seed_connections(config: &AppConfig) -> Vec<Connection> {
    config
        .connections
        .iter()
        .enumerate()
        .map(|(index, entry)| Connection::new(entry.kind.clone(), entry.token_or_default(index), entry.name.clone()))
        .collect()
}
