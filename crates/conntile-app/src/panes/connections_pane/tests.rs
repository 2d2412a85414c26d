use std::time::{Duration, Instant};

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use conntile_core::Connection;
use conntile_tui::animation::PanelState;
use conntile_tui::theme::Theme;
use conntile_tui::toolbar::ToolbarItem;

use super::{ConnectionsPane, ToolbarLayout};
use crate::command::{AppCommand, CommandRegistry};
use crate::event::{AppEvent, ViewSignal};
use crate::keybindings::KeybindingDispatcher;
use crate::presenter::{ConnectionsView, HeightMode};

const SLIDE: Duration = Duration::from_millis(300);

fn spark(name: &str) -> Connection {
    Connection::new("Spark", name.to_lowercase(), name)
}

fn pane_with(duration: Duration, rows: Vec<Connection>) -> (ConnectionsPane, mpsc::UnboundedReceiver<AppEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut pane = ConnectionsPane::new(duration, tx);
    pane.set_connections(rows);
    (pane, rx)
}

fn sample() -> (ConnectionsPane, mpsc::UnboundedReceiver<AppEvent>) {
    pane_with(SLIDE, vec![spark("alpha"), spark("beta"), spark("gamma")])
}

fn signals(rx: &mut mpsc::UnboundedReceiver<AppEvent>) -> Vec<ViewSignal> {
    let mut out = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let AppEvent::View(signal) = event {
            out.push(signal);
        }
    }
    out
}

fn selected_name(pane: &ConnectionsPane) -> Option<String> {
    pane.selected_connection().map(|c| c.name.clone())
}

fn keys() -> KeybindingDispatcher {
    KeybindingDispatcher::from_config(&conntile_config::AppConfig::default().keybindings)
}

#[test]
fn starts_without_selection() {
    let (pane, mut rx) = sample();
    assert_eq!(pane.rows().len(), 3);
    assert!(pane.selected_connection().is_none());
    assert!(signals(&mut rx).is_empty());
}

#[test]
fn selection_moves_and_wraps() {
    let (mut pane, mut rx) = sample();

    pane.select_next();
    assert_eq!(selected_name(&pane).as_deref(), Some("alpha"));
    pane.select_prev();
    assert_eq!(selected_name(&pane).as_deref(), Some("gamma"));
    pane.select_next();
    assert_eq!(selected_name(&pane).as_deref(), Some("alpha"));

    assert_eq!(signals(&mut rx), vec![ViewSignal::SelectionChanged; 3]);
}

#[test]
fn selection_steps_over_equal_rows() {
    let (mut pane, mut rx) = pane_with(SLIDE, vec![spark("alpha"), spark("alpha"), spark("beta")]);

    let mut visited = Vec::new();
    for _ in 0..4 {
        pane.select_next();
        visited.push(pane.selected_index());
    }
    assert_eq!(visited, vec![Some(0), Some(1), Some(2), Some(0)]);
    assert_eq!(selected_name(&pane).as_deref(), Some("alpha"));
    assert_eq!(signals(&mut rx), vec![ViewSignal::SelectionChanged; 4]);
}

#[test]
fn select_prev_without_selection_picks_last() {
    let (mut pane, _rx) = sample();
    pane.select_prev();
    assert_eq!(selected_name(&pane).as_deref(), Some("gamma"));
}

#[test]
fn selection_on_empty_list_is_noop() {
    let (mut pane, mut rx) = pane_with(SLIDE, Vec::new());
    pane.select_next();
    assert!(pane.selected_connection().is_none());
    assert!(signals(&mut rx).is_empty());
}

#[test]
fn set_connections_keeps_selection_when_still_present() {
    let (mut pane, mut rx) = sample();
    pane.select_next();
    pane.select_next();
    signals(&mut rx);

    pane.set_connections(vec![spark("beta"), spark("delta")]);
    assert_eq!(selected_name(&pane).as_deref(), Some("beta"));
    assert!(signals(&mut rx).is_empty());
}

#[test]
fn set_connections_drops_selection_when_gone() {
    let (mut pane, mut rx) = sample();
    pane.select_next();
    signals(&mut rx);

    pane.set_connections(vec![spark("beta")]);
    assert!(pane.selected_connection().is_none());
    assert_eq!(signals(&mut rx), vec![ViewSignal::SelectionChanged]);
}

#[test]
fn search_edits_emit_raw_query() {
    let (mut pane, mut rx) = sample();
    pane.push_search_char('S');
    pane.push_search_char(' ');
    pane.push_search_char('l');
    pane.pop_search_char();
    pane.clear_search();
    pane.clear_search();
    pane.pop_search_char();

    assert_eq!(
        signals(&mut rx),
        vec![
            ViewSignal::SearchChanged("S".into()),
            ViewSignal::SearchChanged("S ".into()),
            ViewSignal::SearchChanged("S l".into()),
            ViewSignal::SearchChanged("S ".into()),
            ViewSignal::SearchChanged(String::new()),
        ]
    );
    assert_eq!(pane.search_query(), "");
}

#[test]
fn explore_requires_selection() {
    let (mut pane, mut rx) = sample();
    pane.request_explore();
    assert!(signals(&mut rx).is_empty());

    pane.select_next();
    signals(&mut rx);
    pane.request_explore();
    assert_eq!(signals(&mut rx), vec![ViewSignal::ExploreRequested(spark("alpha"))]);
}

#[test]
fn back_only_from_explorer_at_rest() {
    let (mut pane, mut rx) = sample();
    pane.request_back();
    assert!(signals(&mut rx).is_empty());

    pane.show_connection_explorer(&spark("alpha"));
    pane.request_back();
    assert!(signals(&mut rx).is_empty(), "ignored mid-slide");

    pane.advance(Instant::now() + SLIDE);
    pane.request_back();
    assert_eq!(signals(&mut rx), vec![ViewSignal::BackToList]);
}

#[test]
fn toolbar_swaps_only_after_slide_completes() {
    let (mut pane, _rx) = sample();
    pane.show_connection_explorer(&spark("alpha"));

    assert!(pane.is_animating());
    assert_eq!(pane.target_panel(), PanelState::Explorer);
    assert_eq!(pane.toolbar_layout(), &ToolbarLayout::Connections);

    pane.advance(Instant::now() + SLIDE);
    assert!(!pane.is_animating());
    assert_eq!(pane.toolbar_layout(), &ToolbarLayout::Explorer(spark("alpha")));

    pane.show_connections_list();
    assert_eq!(pane.toolbar_layout(), &ToolbarLayout::Explorer(spark("alpha")));
    pane.advance(Instant::now() + SLIDE);
    assert_eq!(pane.toolbar_layout(), &ToolbarLayout::Connections);
    assert_eq!(pane.target_panel(), PanelState::List);
}

#[test]
fn explore_is_ignored_while_sliding() {
    let (mut pane, mut rx) = sample();
    pane.select_next();
    pane.show_connection_explorer(&spark("beta"));
    signals(&mut rx);

    pane.request_explore();
    assert!(signals(&mut rx).is_empty());
}

#[test]
fn showing_current_panel_installs_toolbar_immediately() {
    let (mut pane, _rx) = pane_with(Duration::ZERO, vec![spark("alpha"), spark("beta")]);
    pane.show_connection_explorer(&spark("alpha"));
    pane.advance(Instant::now());
    assert_eq!(pane.toolbar_layout(), &ToolbarLayout::Explorer(spark("alpha")));

    pane.show_connection_explorer(&spark("beta"));
    assert!(!pane.is_animating());
    assert_eq!(pane.toolbar_layout(), &ToolbarLayout::Explorer(spark("beta")));
}

#[test]
fn ensure_height_is_recorded() {
    let (mut pane, _rx) = sample();
    assert_eq!(pane.height_mode(), HeightMode::Normal);
    pane.ensure_height(HeightMode::Maximized);
    assert_eq!(pane.height_mode(), HeightMode::Maximized);
}

#[test]
fn list_toolbar_follows_command_visibility() {
    let (pane, _rx) = sample();
    let keys = keys();
    let mut commands = CommandRegistry::new();
    commands.set_visible(AppCommand::ConnectConnection, false);
    commands.set_visible(AppCommand::DisconnectConnection, false);

    let toolbar = pane.toolbar(&commands, &keys);
    assert_eq!(toolbar.button_labels(), vec!["New Connection", "Remove"]);
    assert_eq!(toolbar.left().iter().filter(|i| **i == ToolbarItem::Separator).count(), 1);
    assert_eq!(toolbar.right(), &[ToolbarItem::SearchBox { query: String::new(), active: false }]);

    commands.set_visible(AppCommand::ConnectConnection, true);
    let toolbar = pane.toolbar(&commands, &keys);
    assert_eq!(toolbar.button_labels(), vec!["New Connection", "Remove", "Connect"]);
    assert_eq!(toolbar.left().iter().filter(|i| **i == ToolbarItem::Separator).count(), 2);
}

#[test]
fn list_toolbar_order_with_everything_visible() {
    let (pane, _rx) = sample();
    let toolbar = pane.toolbar(&CommandRegistry::new(), &keys());
    let left = toolbar.left();
    assert_eq!(left.len(), 6);
    assert_eq!(left[0], ToolbarItem::Button { label: "New Connection".into(), key: Some("n".into()) });
    assert_eq!(left[1], ToolbarItem::Separator);
    assert!(matches!(&left[2], ToolbarItem::Button { label, .. } if label == "Remove"));
    assert_eq!(left[3], ToolbarItem::Separator);
    assert!(matches!(&left[4], ToolbarItem::Button { label, .. } if label == "Connect"));
    assert!(matches!(&left[5], ToolbarItem::Button { label, .. } if label == "Disconnect"));
}

#[test]
fn explorer_toolbar_has_back_separator_label() {
    let (mut pane, _rx) = pane_with(Duration::ZERO, vec![spark("alpha")]);
    let conn = Connection::new("Spark", "4040", "localhost:4040");
    pane.show_connection_explorer(&conn);
    pane.advance(Instant::now());

    let toolbar = pane.toolbar(&CommandRegistry::new(), &keys());
    assert_eq!(
        toolbar.left(),
        &[
            ToolbarItem::Button { label: "Back".into(), key: Some("Esc".into()) },
            ToolbarItem::Separator,
            ToolbarItem::Label("Spark: localhost:4040".into()),
        ]
    );
    assert!(toolbar.right().is_empty());
}

fn render(pane: &ConnectionsPane, now: Instant) -> String {
    let theme = Theme::default();
    let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            pane.render(frame, area, pane.rows().len(), &theme, now);
        })
        .unwrap();
    let buf = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn renders_list_at_rest() {
    let (pane, _rx) = sample();
    let text = render(&pane, Instant::now());
    assert!(text.contains("Connections"));
    assert!(text.contains("alpha"));
    assert!(!text.contains("Connection Explorer"));
}

#[test]
fn renders_both_panels_mid_slide() {
    let (mut pane, _rx) = sample();
    let start = Instant::now();
    pane.show_connection_explorer(&spark("alpha"));

    let text = render(&pane, start + SLIDE / 2);
    let top = text.lines().next().unwrap();
    assert!(top.contains('┐'), "outgoing list still partly visible");
    assert!(top.contains('┌'), "incoming explorer partly visible");
    assert!(top.contains("alpha"));

    pane.advance(start + SLIDE * 2);
    let text = render(&pane, start + SLIDE * 2);
    assert!(text.contains("Connection Explorer"));
    assert!(!text.contains("Type"));
}
