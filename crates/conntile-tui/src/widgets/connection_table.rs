use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table, TableState,
};

use conntile_core::Connection;

use crate::theme::Theme;

const EXPLORE_MARKER: &str = "→";

pub struct ConnectionTableWidget<'a> {
    pub rows: &'a [Connection],
    pub selected: Option<usize>,
    pub total_count: usize,
    pub filter_active: bool,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> ConnectionTableWidget<'a> {
    pub fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused { self.theme.border_focused } else { self.theme.border };
        let count_display = if self.filter_active {
            format!(" {}/{} ", self.rows.len(), self.total_count)
        } else {
            format!(" {} ", self.total_count)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Connections ")
            .title_style(Style::default().fg(self.theme.accent).bold())
            .title_bottom(Line::from(count_display).right_aligned().style(self.theme.text_dim));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.rows.is_empty() {
            let msg = if self.filter_active { "No matches" } else { "No connections" };
            Paragraph::new(msg).style(self.theme.text_dim).render(inner, buf);
            return;
        }

        let header = Row::new(
            ["Type", "Name", "Status", ""]
                .into_iter()
                .map(|h| Cell::from(h).style(self.theme.table_header)),
        )
        .height(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|conn| {
                Row::new(vec![
                    Cell::from(conn.kind().to_string()),
                    Cell::from(conn.name.clone()),
                    // Connection status is not tracked yet.
                    Cell::from(""),
                    Cell::from(EXPLORE_MARKER).style(self.theme.text_dim),
                ])
            })
            .collect();

        let widths = [Constraint::Length(10), Constraint::Min(20), Constraint::Length(10), Constraint::Length(2)];
        let table =
            Table::new(rows, widths).header(header).row_highlight_style(self.theme.selection).highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(self.selected);
        StatefulWidget::render(table, inner, buf, &mut state);

        if self.rows.len() > inner.height.saturating_sub(1) as usize {
            let mut scrollbar_state = ScrollbarState::new(self.rows.len()).position(self.selected.unwrap_or(0));
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight).style(self.theme.border);
            StatefulWidget::render(
                scrollbar,
                inner.inner(Margin { vertical: 1, horizontal: 0 }),
                buf,
                &mut scrollbar_state,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_to_string;

    fn render(rows: &[Connection], filter_active: bool, total_count: usize) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 8);
        let mut buf = Buffer::empty(area);
        let widget =
            ConnectionTableWidget { rows, selected: Some(0), total_count, filter_active, focused: true, theme: &theme };
        widget.render(area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn renders_headers_and_rows() {
        let rows = vec![Connection::new("Spark", "1", "Spark Local"), Connection::new("Livy", "2", "Gateway")];
        let text = render(&rows, false, 2);
        assert!(text.contains("Connections"));
        assert!(text.contains("Type"));
        assert!(text.contains("Name"));
        assert!(text.contains("Status"));
        assert!(text.contains("Spark Local"));
        assert!(text.contains("Gateway"));
        assert!(text.contains(" 2 "));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let text = render(&[], false, 0);
        assert!(text.contains("No connections"));
    }

    #[test]
    fn empty_filter_result_shows_no_matches_and_ratio() {
        let text = render(&[], true, 3);
        assert!(text.contains("No matches"));
        assert!(text.contains("0/3"));
    }
}
