use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::theme::Theme;
use crate::toolbar::{Toolbar, ToolbarItem};

pub struct ToolbarWidget<'a> {
    pub toolbar: &'a Toolbar,
    pub theme: &'a Theme,
}

impl<'a> ToolbarWidget<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(" ", self.theme.toolbar)];
        for item in self.toolbar.left() {
            spans.extend(self.item_spans(item));
            spans.push(Span::styled(" ", self.theme.toolbar));
        }

        let mut right = Vec::new();
        for item in self.toolbar.right() {
            right.extend(self.item_spans(item));
            right.push(Span::styled(" ", self.theme.toolbar));
        }

        let left_used: u16 = spans.iter().map(|s| s.width() as u16).sum();
        let right_used: u16 = right.iter().map(|s| s.width() as u16).sum();
        let fill = area.width.saturating_sub(left_used + right_used);
        if fill > 0 {
            spans.push(Span::styled(" ".repeat(fill as usize), self.theme.toolbar));
        }
        spans.extend(right);

        let bar = Paragraph::new(Line::from(spans)).style(self.theme.toolbar);
        frame.render_widget(bar, area);
    }

    fn item_spans(&self, item: &ToolbarItem) -> Vec<Span<'static>> {
        let base = self.theme.toolbar;
        match item {
            ToolbarItem::Button { label, key } => {
                let mut spans = Vec::new();
                if let Some(key) = key {
                    spans.push(Span::styled(format!("<{key}>"), base.fg(self.theme.accent)));
                    spans.push(Span::styled(" ", base));
                }
                spans.push(Span::styled(label.clone(), base.add_modifier(Modifier::BOLD)));
                spans
            }
            ToolbarItem::Separator => vec![Span::styled("│", base.patch(self.theme.border))],
            ToolbarItem::Label(text) => vec![Span::styled(text.clone(), base.fg(self.theme.accent).bold())],
            ToolbarItem::SearchBox { query, active } => {
                let cursor = if *active { "_" } else { "" };
                let text_style = if *active { base.patch(self.theme.search) } else { base };
                vec![
                    Span::styled("Search: ", base.patch(self.theme.text_dim)),
                    Span::styled(format!("{query}{cursor}"), text_style),
                ]
            }
        }
    }
}
