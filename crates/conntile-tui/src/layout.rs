use ratatui::prelude::*;

use crate::theme::Theme;
use crate::toolbar::Toolbar;
use crate::widgets::error_dialog::ErrorDialogWidget;
use crate::widgets::log_strip::LogStripWidget;
use crate::widgets::status_bar::StatusBarWidget;
use crate::widgets::toolbar::ToolbarWidget;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootLayout {
    pub toolbar: Rect,
    pub body: Rect,
    pub logs: Option<Rect>,
    pub status: Rect,
}

impl RootLayout {
    /// `log_height` of `None` hides the log strip and gives its rows to the body.
    pub fn compute(area: Rect, log_height: Option<u16>) -> Self {
        match log_height {
            Some(height) => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1),
                        Constraint::Min(0),
                        Constraint::Length(height),
                        Constraint::Length(1),
                    ])
                    .split(area);
                Self { toolbar: chunks[0], body: chunks[1], logs: Some(chunks[2]), status: chunks[3] }
            }
            None => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
                    .split(area);
                Self { toolbar: chunks[0], body: chunks[1], logs: None, status: chunks[2] }
            }
        }
    }
}

pub struct ErrorDialogView<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

pub struct RenderContext<'a> {
    pub toolbar: &'a Toolbar,
    pub log_lines: Option<&'a [String]>,
    pub log_height: u16,
    pub error_dialog: Option<ErrorDialogView<'a>>,
    pub mode_name: &'a str,
    pub mode_hints: &'a [(String, String)],
    pub active_connection: Option<&'a str>,
    pub theme: &'a Theme,
}

pub fn render_root(frame: &mut Frame, ctx: &RenderContext, render_body: impl FnOnce(&mut Frame, Rect)) {
    let log_height = ctx.log_lines.map(|_| ctx.log_height);
    let layout = RootLayout::compute(frame.area(), log_height);

    ToolbarWidget { toolbar: ctx.toolbar, theme: ctx.theme }.render(frame, layout.toolbar);
    render_body(frame, layout.body);

    if let (Some(area), Some(lines)) = (layout.logs, ctx.log_lines) {
        LogStripWidget { lines, theme: ctx.theme }.render(frame, area);
    }

    let status = StatusBarWidget {
        mode: ctx.mode_name,
        hints: ctx.mode_hints,
        right: ctx.active_connection,
        theme: ctx.theme,
    };
    status.render(frame, layout.status);

    if let Some(ref dialog) = ctx.error_dialog {
        let area = frame.area();
        let widget = ErrorDialogWidget { title: dialog.title, message: dialog.message, theme: ctx.theme };
        widget.render(frame, area);
    }
}
