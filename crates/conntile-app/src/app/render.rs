use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use conntile_tui::layout::{render_root, ErrorDialogView, RenderContext};
use conntile_tui::toolbar::Toolbar;

use crate::presenter::HeightMode;

use super::App;

impl App {
    /// The log strip gives way while the pane is maximized.
    pub(super) fn logs_visible(&self) -> bool {
        self.show_logs && self.presenter.view().height_mode() == HeightMode::Normal
    }

    /// Key hints for the status bar, without hidden commands.
    pub(super) fn mode_hints(&self) -> Vec<(String, String)> {
        let commands = self.presenter.commands();
        self.dispatcher
            .mode_shortcuts()
            .into_iter()
            .filter(|(name, _, _)| self.connections_enabled || crate::keybindings::is_global_binding(name))
            .filter(|(name, _, _)| {
                crate::keybindings::app_command_for_binding(name).is_none_or(|cmd| commands.is_visible(cmd))
            })
            .map(|(_, key, desc)| (key, desc))
            .collect()
    }

    pub(super) fn render(&self, frame: &mut Frame) {
        let view = self.presenter.view();
        let toolbar = if self.connections_enabled {
            view.toolbar(self.presenter.commands(), &self.dispatcher)
        } else {
            Toolbar::new()
        };
        let hints = self.mode_hints();
        let active = self.presenter.active_connection().map(|c| c.display_label());
        let error_dialog = self
            .presenter
            .display()
            .current()
            .map(|err| ErrorDialogView { title: &err.title, message: &err.message });

        let ctx = RenderContext {
            toolbar: &toolbar,
            log_lines: self.logs_visible().then(|| self.app_logs.lines()),
            log_height: self.log_height,
            error_dialog,
            mode_name: self.dispatcher.mode().name(),
            mode_hints: &hints,
            active_connection: active.as_deref(),
            theme: &self.theme,
        };

        let total = self.presenter.all_connections().len();
        let now = Instant::now();
        render_root(frame, &ctx, |frame, area| {
            if self.connections_enabled {
                view.render(frame, area, total, &self.theme, now);
            } else {
                let notice = Paragraph::new("Connections are disabled")
                    .style(self.theme.text_dim)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).border_style(self.theme.border));
                frame.render_widget(notice, area);
            }
        });
    }
}
