use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::theme::Theme;

/// Modal error message. Blocks the pane until dismissed.
pub struct ErrorDialogWidget<'a> {
    pub title: &'a str,
    pub message: &'a str,
    pub theme: &'a Theme,
}

impl<'a> ErrorDialogWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let lines: Vec<&str> = self.message.lines().collect();
        let max_line_width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let width = (max_line_width as u16 + 6).max(36).min(area.width.saturating_sub(4));
        let height = (lines.len() as u16 + 6).min(area.height.saturating_sub(2));

        let popup = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(self.theme.error.bold())
            .borders(Borders::ALL)
            .border_style(self.theme.error)
            .style(self.theme.dialog);

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let msg = Paragraph::new(self.message)
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(msg, chunks[0]);

        let buttons = Paragraph::new(Line::from(vec![
            Span::styled("[Enter/Esc]", Style::default().fg(self.theme.accent).bold()),
            Span::styled(" OK", Style::default().fg(self.theme.fg)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(buttons, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn error_dialog_renders_title_message_and_button() {
        let theme = Theme::default();
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| {
                let widget = ErrorDialogWidget { title: "Error", message: "Not Yet Implemented", theme: &theme };
                widget.render(frame, frame.area());
            })
            .unwrap();

        let content = buffer_to_string(terminal.backend().buffer());
        assert!(content.contains(" Error "), "should show the title");
        assert!(content.contains("Not Yet Implemented"), "should show the message");
        assert!(content.contains("[Enter/Esc]"), "should show the dismiss hint");
    }
}
