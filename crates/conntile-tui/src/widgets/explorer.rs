use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use conntile_core::Connection;

use crate::theme::Theme;

/// Placeholder body for a single explored connection.
pub struct ExplorerWidget<'a> {
    pub connection: Option<&'a Connection>,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> ExplorerWidget<'a> {
    pub fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused { self.theme.border_focused } else { self.theme.border };
        let title = match self.connection {
            Some(conn) => format!(" {} ", conn.name),
            None => " Explorer ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title)
            .title_style(Style::default().fg(self.theme.accent).bold());
        let inner = block.inner(area);
        block.render(area, buf);

        let [_, middle, _] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1), Constraint::Fill(1)]).areas(inner);
        Paragraph::new("Connection Explorer")
            .style(self.theme.text_dim)
            .alignment(Alignment::Center)
            .render(middle, buf);
    }
}
