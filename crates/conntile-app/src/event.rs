use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use conntile_core::{Connection, ConnectionEvent, ConnectionEventSink};

/// User intent raised by the connections pane, routed to one presenter
/// handler each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewSignal {
    SelectionChanged,
    SearchChanged(String),
    ExploreRequested(Connection),
    BackToList,
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    /// Animation frame.
    Frame,
    /// Terminal size changed; the next draw picks up the new area.
    Resize,
    View(ViewSignal),
    /// Published by the connection source through [`ConnectionBus`].
    Connection(ConnectionEvent),
}

/// Forwards connection lifecycle events onto the app event channel.
pub struct ConnectionBus {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl ConnectionBus {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl ConnectionEventSink for ConnectionBus {
    fn publish(&self, event: ConnectionEvent) {
        if self.tx.send(AppEvent::Connection(event)).is_err() {
            tracing::debug!("Connection event dropped, event loop gone");
        }
    }
}

pub struct EventHandler {
    tx: mpsc::UnboundedSender<AppEvent>,
    rx: mpsc::UnboundedReceiver<AppEvent>,
    cancel: CancellationToken,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx, cancel: CancellationToken::new() }
    }

    pub fn app_tx(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    /// Spawns the input reader and the tick and frame timers. They stop when
    /// the handler is dropped.
    pub fn start(&self, tick_rate: Duration, frame_rate: Duration) {
        let input_tx = self.tx.clone();
        let input_cancel = self.cancel.clone();
        tokio::task::spawn_blocking(move || {
            while !input_cancel.is_cancelled() {
                match event::poll(Duration::from_millis(50)) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(e) => {
                        tracing::warn!("Terminal input poll failed: {e}");
                        break;
                    }
                }
                let Some(event) = event::read().ok().and_then(translate_event) else { continue };
                if input_tx.send(event).is_err() {
                    break;
                }
            }
        });

        let tx = self.tx.clone();
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            let mut tick_interval = tokio::time::interval(tick_rate);
            let mut frame_interval = tokio::time::interval(frame_rate);
            loop {
                let event = tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tick_interval.tick() => AppEvent::Tick,
                    _ = frame_interval.tick() => AppEvent::Frame,
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
            tracing::debug!("Event timers stopped");
        });
    }

    pub async fn next(&mut self) -> anyhow::Result<AppEvent> {
        self.rx.recv().await.ok_or_else(|| anyhow::anyhow!("Event channel closed"))
    }

    pub fn drain_pending(&mut self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn translate_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Resize(..) => Some(AppEvent::Resize),
        _ => None,
    }
}
