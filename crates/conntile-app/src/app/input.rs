use std::time::Instant;

use crossterm::event::{KeyEvent, KeyEventKind};

use conntile_tui::animation::PanelState;

use crate::command::{Command, InputMode};
use crate::event::{AppEvent, ViewSignal};

use super::App;

impl App {
    pub(super) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => {
                self.app_logs.poll();
                self.persist_state();
            }
            AppEvent::Frame => self.presenter.view_mut().advance(Instant::now()),
            AppEvent::Resize => {}
            AppEvent::View(signal) => self.route_signal(signal),
            AppEvent::Connection(event) => self.presenter.on_connection_event(&event),
        }
        self.sync_mode();
    }

    fn route_signal(&mut self, signal: ViewSignal) {
        match signal {
            ViewSignal::SelectionChanged => self.presenter.on_selection_changed(),
            ViewSignal::SearchChanged(query) => self.presenter.on_search_changed(&query),
            ViewSignal::ExploreRequested(connection) => self.presenter.on_explore_requested(connection),
            ViewSignal::BackToList => self.presenter.on_back_to_list(),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(cmd) = self.dispatcher.dispatch(key) {
            self.handle_command(cmd);
        }
    }

    pub(super) fn handle_command(&mut self, cmd: Command) {
        if cmd.targets_pane() && !self.connections_enabled {
            tracing::debug!("Ignoring {cmd:?}, connections are disabled");
            return;
        }
        if cmd.targets_pane() && self.presenter.view().is_animating() {
            tracing::debug!("Ignoring {cmd:?} during panel slide");
            return;
        }
        if let Some(app_cmd) = cmd.app_command() {
            if !self.presenter.commands().is_visible(app_cmd) {
                tracing::debug!("Ignoring hidden command {app_cmd:?}");
                return;
            }
        }

        match cmd {
            Command::Quit => self.running = false,
            Command::ToggleLogs => {
                self.show_logs = !self.show_logs;
                if self.show_logs {
                    self.app_logs.poll();
                }
            }
            Command::NewConnection => self.presenter.on_new_connection(),
            Command::RemoveConnection => self.presenter.on_remove_connection(),
            Command::ConnectConnection => self.presenter.on_connect_connection(),
            Command::DisconnectConnection => self.presenter.on_disconnect_connection(),
            Command::EnterSearch => self.presenter.view_mut().set_search_active(true),
            Command::SearchInput(c) => self.presenter.view_mut().push_search_char(c),
            Command::SearchBackspace => self.presenter.view_mut().pop_search_char(),
            Command::SearchClear => {
                let view = self.presenter.view_mut();
                view.clear_search();
                view.set_search_active(false);
            }
            Command::ExitSearch => self.presenter.view_mut().set_search_active(false),
            Command::SelectNext => self.presenter.view_mut().select_next(),
            Command::SelectPrev => self.presenter.view_mut().select_prev(),
            Command::Explore => self.presenter.view_mut().request_explore(),
            Command::BackToList => self.presenter.view_mut().request_back(),
            Command::DismissError => self.presenter.display_mut().dismiss(),
        }
    }

    /// Derives the input mode from what is on screen.
    pub(super) fn sync_mode(&mut self) {
        let view = self.presenter.view();
        let mode = if self.presenter.display().current().is_some() {
            InputMode::ErrorDialog
        } else if view.target_panel() == PanelState::Explorer {
            InputMode::Explorer
        } else if view.is_search_active() {
            InputMode::Search
        } else {
            InputMode::Normal
        };
        self.dispatcher.set_mode(mode);
    }
}
