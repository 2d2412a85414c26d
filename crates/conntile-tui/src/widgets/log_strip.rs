use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme::Theme;

/// The most recent application log lines, shown under the pane.
pub struct LogStripWidget<'a> {
    pub lines: &'a [String],
    pub theme: &'a Theme,
}

impl<'a> LogStripWidget<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.border)
            .title(" Log ")
            .title_style(self.theme.text_dim);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let visible = inner.height as usize;
        let skip = self.lines.len().saturating_sub(visible);
        let text: Vec<Line> = self.lines[skip..].iter().map(|l| Line::styled(l.clone(), self.theme.text_dim)).collect();
        frame.render_widget(Paragraph::new(text), inner);
    }
}
