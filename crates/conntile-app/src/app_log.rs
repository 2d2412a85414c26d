use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

const MAX_LOG_LINES: usize = 2000;

static LOG_BUFFER: OnceLock<Mutex<VecDeque<String>>> = OnceLock::new();

fn buffer() -> &'static Mutex<VecDeque<String>> {
    LOG_BUFFER.get_or_init(|| Mutex::new(VecDeque::with_capacity(MAX_LOG_LINES)))
}

fn commit_line(line: &str) {
    if line.trim().is_empty() {
        return;
    }
    let Ok(mut lines) = buffer().lock() else { return };
    if lines.len() == MAX_LOG_LINES {
        lines.pop_front();
    }
    lines.push_back(line.to_string());
}

pub fn recent_lines(limit: usize) -> Vec<String> {
    let Ok(lines) = buffer().lock() else { return Vec::new() };
    lines.iter().skip(lines.len().saturating_sub(limit)).cloned().collect()
}

/// Routes `tracing` output into the in-memory buffer shown by the log strip,
/// since stderr is hidden behind the alternate screen.
#[derive(Clone, Default)]
pub struct AppLogMakeWriter;

impl<'a> MakeWriter<'a> for AppLogMakeWriter {
    type Writer = AppLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        AppLogWriter { line_buf: String::new() }
    }
}

/// Holds partial output until a newline arrives; the formatter may split one
/// event across several `write()` calls.
pub struct AppLogWriter {
    line_buf: String,
}

impl Write for AppLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.line_buf.push_str(&text);

        while let Some(pos) = self.line_buf.find('\n') {
            let line = self.line_buf.drain(..=pos).collect::<String>();
            commit_line(line.trim_end_matches('\n'));
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.line_buf.is_empty() {
            let line = std::mem::take(&mut self.line_buf);
            commit_line(line.trim_end_matches('\n'));
        }
        Ok(())
    }
}

impl Drop for AppLogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
