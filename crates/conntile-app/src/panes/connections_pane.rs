use std::time::{Duration, Instant};

use ratatui::prelude::{Buffer, Frame, Rect};
use tokio::sync::mpsc;

use conntile_core::{Connection, ConnectionKey};
use conntile_tui::animation::{PanelState, PanelSwitcher};
use conntile_tui::compose::{blit_shifted, offscreen};
use conntile_tui::theme::Theme;
use conntile_tui::toolbar::Toolbar;
use conntile_tui::widgets::connection_table::ConnectionTableWidget;
use conntile_tui::widgets::explorer::ExplorerWidget;

use crate::command::CommandRegistry;
use crate::event::{AppEvent, ViewSignal};
use crate::keybindings::KeybindingDispatcher;
use crate::presenter::{ConnectionsView, HeightMode};

mod toolbar;

/// Which toolbar the pane shows. Swapped only once a slide has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarLayout {
    Connections,
    Explorer(Connection),
}

/// The selected row. The index tells equal rows apart; the key follows the
/// row when the list is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Selection {
    index: usize,
    key: ConnectionKey,
}

/// The connections list and the per-connection explorer, with a slide
/// between them. Holds only what it needs to render; user intent goes out
/// as [`ViewSignal`]s.
pub struct ConnectionsPane {
    rows: Vec<Connection>,
    selected: Option<Selection>,
    search_query: String,
    search_active: bool,
    explored: Option<Connection>,
    switcher: PanelSwitcher<ToolbarLayout>,
    toolbar: ToolbarLayout,
    height: HeightMode,
    signals: mpsc::UnboundedSender<AppEvent>,
}

impl ConnectionsPane {
    pub fn new(slide_duration: Duration, signals: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            rows: Vec::new(),
            selected: None,
            search_query: String::new(),
            search_active: false,
            explored: None,
            switcher: PanelSwitcher::new(slide_duration),
            toolbar: ToolbarLayout::Connections,
            height: HeightMode::Normal,
            signals,
        }
    }

    fn emit(&self, signal: ViewSignal) {
        if self.signals.send(AppEvent::View(signal)).is_err() {
            tracing::debug!("View signal dropped, receiver closed");
        }
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[Connection] {
        &self.rows
    }

    fn selected_index(&self) -> Option<usize> {
        let selection = self.selected?;
        match self.rows.get(selection.index) {
            Some(row) if row.key() == selection.key => Some(selection.index),
            _ => self.rows.iter().position(|c| c.key() == selection.key),
        }
    }

    fn select_index(&mut self, index: Option<usize>) {
        let next = index.map(|index| Selection { index, key: self.rows[index].key() });
        if self.selected != next {
            self.selected = next;
            self.emit(ViewSignal::SelectionChanged);
        }
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.move_selection(-1);
    }

    fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let len = self.rows.len() as isize;
        let next = match self.selected_index() {
            Some(i) => (i as isize + delta).rem_euclid(len) as usize,
            None if delta >= 0 => 0,
            None => self.rows.len() - 1,
        };
        self.select_index(Some(next));
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    pub fn set_search_active(&mut self, active: bool) {
        self.search_active = active;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.emit(ViewSignal::SearchChanged(self.search_query.clone()));
    }

    pub fn pop_search_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.emit(ViewSignal::SearchChanged(self.search_query.clone()));
        }
    }

    pub fn clear_search(&mut self) {
        if !self.search_query.is_empty() {
            self.search_query.clear();
            self.emit(ViewSignal::SearchChanged(String::new()));
        }
    }

    /// Raises explore for the selected row. Only the list at rest accepts it.
    pub fn request_explore(&mut self) {
        if self.switcher.at_rest() != Some(PanelState::List) {
            return;
        }
        if let Some(connection) = self.selected_connection().cloned() {
            self.emit(ViewSignal::ExploreRequested(connection));
        }
    }

    pub fn request_back(&mut self) {
        if self.switcher.at_rest() == Some(PanelState::Explorer) {
            self.emit(ViewSignal::BackToList);
        }
    }

    /// Finishes a due slide and installs its toolbar.
    pub fn advance(&mut self, now: Instant) {
        for layout in self.switcher.advance(now) {
            self.install_toolbar(layout);
        }
    }

    fn install_toolbar(&mut self, layout: ToolbarLayout) {
        tracing::debug!("Installing {layout:?} toolbar");
        self.toolbar = layout;
    }

    pub fn is_animating(&self) -> bool {
        self.switcher.is_animating()
    }

    /// The panel shown at rest, or the one a running slide is heading to.
    pub fn target_panel(&self) -> PanelState {
        self.switcher.slide().map(|slide| slide.to).unwrap_or_else(|| self.switcher.shown())
    }

    #[cfg(test)]
    pub fn toolbar_layout(&self) -> &ToolbarLayout {
        &self.toolbar
    }

    pub fn height_mode(&self) -> HeightMode {
        self.height
    }

    pub fn toolbar(&self, commands: &CommandRegistry, keys: &KeybindingDispatcher) -> Toolbar {
        toolbar::build(&self.toolbar, commands, keys, &self.search_query, self.search_active)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, total_count: usize, theme: &Theme, now: Instant) {
        let buf = frame.buffer_mut();
        let Some(slide) = self.switcher.slide() else {
            self.render_panel(self.switcher.shown(), area, buf, total_count, theme);
            return;
        };

        let (outgoing_dx, incoming_dx) = slide.offsets(now, area.width);
        let mut outgoing = offscreen(area);
        self.render_panel(slide.from, outgoing.area, &mut outgoing, total_count, theme);
        let mut incoming = offscreen(area);
        self.render_panel(slide.to, incoming.area, &mut incoming, total_count, theme);

        blit_shifted(&outgoing, buf, area, outgoing_dx);
        blit_shifted(&incoming, buf, area, incoming_dx);
    }

    fn render_panel(&self, panel: PanelState, area: Rect, buf: &mut Buffer, total_count: usize, theme: &Theme) {
        match panel {
            PanelState::List => ConnectionTableWidget {
                rows: &self.rows,
                selected: self.selected_index(),
                total_count,
                filter_active: !self.search_query.trim().is_empty(),
                focused: !self.search_active,
                theme,
            }
            .render(area, buf),
            PanelState::Explorer => {
                ExplorerWidget { connection: self.explored.as_ref(), focused: true, theme }.render(area, buf)
            }
        }
    }
}

impl ConnectionsView for ConnectionsPane {
    fn set_connections(&mut self, connections: Vec<Connection>) {
        self.rows = connections;
        if self.selected.is_none() {
            return;
        }
        match self.selected_index() {
            Some(index) => self.selected = self.selected.map(|s| Selection { index, ..s }),
            None => self.select_index(None),
        }
    }

    fn selected_connection(&self) -> Option<&Connection> {
        self.selected_index().map(|index| &self.rows[index])
    }

    fn show_connection_explorer(&mut self, connection: &Connection) {
        self.explored = Some(connection.clone());
        let layout = ToolbarLayout::Explorer(connection.clone());
        if let Some(layout) = self.switcher.request(PanelState::Explorer, layout, Instant::now()) {
            self.install_toolbar(layout);
        }
    }

    fn show_connections_list(&mut self) {
        if let Some(layout) = self.switcher.request(PanelState::List, ToolbarLayout::Connections, Instant::now()) {
            self.install_toolbar(layout);
        }
    }

    fn ensure_height(&mut self, mode: HeightMode) {
        self.height = mode;
    }
}

#[cfg(test)]
mod tests;
