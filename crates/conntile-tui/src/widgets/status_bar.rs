use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme::Theme;

pub struct StatusBarWidget<'a> {
    pub mode: &'a str,
    pub hints: &'a [(String, String)],
    pub right: Option<&'a str>,
    pub theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let bar_style = self.theme.status_bar;
        let mut spans = Vec::new();

        spans.push(Span::styled(
            format!(" {} ", self.mode.to_uppercase()),
            Style::default().fg(self.theme.bg).bg(self.theme.accent).add_modifier(Modifier::BOLD),
        ));

        for (key, desc) in self.hints {
            spans.push(Span::styled(" │ ", bar_style.patch(self.theme.border)));
            spans.push(Span::styled(format!("<{key}>"), bar_style.fg(self.theme.accent)));
            spans.push(Span::styled(format!(" {desc}"), bar_style));
        }

        let right_text = match self.right {
            Some(text) => format!("{text} "),
            None => "No active connection ".into(),
        };
        let right_width = right_text.chars().count() as u16;
        let left_used: u16 = spans.iter().map(|s| s.width() as u16).sum();
        let fill = area.width.saturating_sub(left_used + right_width);

        if fill > 0 {
            spans.push(Span::styled(" ".repeat(fill as usize), bar_style));
        }

        spans.push(Span::styled(right_text, bar_style.add_modifier(Modifier::DIM)));

        let line = Line::from(spans);
        let bar = Paragraph::new(line).style(bar_style);
        frame.render_widget(bar, area);
    }
}
