use crate::app_log;

/// Tail of the application log shown in the log strip.
pub struct AppLogsPane {
    lines: Vec<String>,
    limit: usize,
}

impl AppLogsPane {
    pub fn new(limit: usize) -> Self {
        Self { lines: Vec::new(), limit }
    }

    pub fn poll(&mut self) {
        self.lines = app_log::recent_lines(self.limit);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
