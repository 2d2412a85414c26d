use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timer intervals below this are raised to it; a zero interval would stop
/// the event timers.
pub const MIN_INTERVAL_MS: u64 = 1;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneralConfig {
    #[serde(alias = "tick-rate-ms")]
    pub tick_rate_ms: u64,
    /// Redraw cadence while a slide transition is running.
    #[serde(alias = "frame-rate-ms")]
    pub frame_rate_ms: u64,
    #[serde(alias = "slide-duration-ms")]
    pub slide_duration_ms: u64,
    #[serde(alias = "show-app-logs")]
    pub show_app_logs: bool,
    #[serde(alias = "log-lines")]
    pub log_lines: u16,
    /// When off the connections pane stays empty and stored client state is left alone.
    #[serde(alias = "connections-enabled")]
    pub connections_enabled: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            frame_rate_ms: 16,
            slide_duration_ms: 300,
            show_app_logs: true,
            log_lines: 6,
            connections_enabled: true,
        }
    }
}

impl GeneralConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_INTERVAL_MS))
    }

    pub fn frame_rate(&self) -> Duration {
        Duration::from_millis(self.frame_rate_ms.max(MIN_INTERVAL_MS))
    }

    pub fn slide_duration(&self) -> Duration {
        Duration::from_millis(self.slide_duration_ms)
    }

    /// Settings that are accepted but adjusted at runtime.
    pub fn warnings(&self) -> Vec<String> {
        [("tick_rate_ms", self.tick_rate_ms), ("frame_rate_ms", self.frame_rate_ms)]
            .into_iter()
            .filter(|(_, ms)| *ms < MIN_INTERVAL_MS)
            .map(|(name, ms)| format!("general.{name} = {ms} is raised to {MIN_INTERVAL_MS}"))
            .collect()
    }
}
