use conntile_tui::toolbar::{Toolbar, ToolbarItem};

use crate::command::{AppCommand, CommandRegistry};
use crate::keybindings::KeybindingDispatcher;

use super::ToolbarLayout;

/// Button groups of the list toolbar, separated left to right.
const LIST_GROUPS: [&[AppCommand]; 3] = [
    &[AppCommand::NewConnection],
    &[AppCommand::RemoveConnection],
    &[AppCommand::ConnectConnection, AppCommand::DisconnectConnection],
];

pub(super) fn build(
    layout: &ToolbarLayout,
    commands: &CommandRegistry,
    keys: &KeybindingDispatcher,
    search_query: &str,
    search_active: bool,
) -> Toolbar {
    let mut toolbar = Toolbar::new();
    match layout {
        ToolbarLayout::Connections => {
            let mut first = true;
            for group in LIST_GROUPS {
                let visible: Vec<AppCommand> = group.iter().copied().filter(|c| commands.is_visible(*c)).collect();
                if visible.is_empty() {
                    continue;
                }
                if !first {
                    toolbar.add_left_separator();
                }
                first = false;
                for command in visible {
                    toolbar.add_left(ToolbarItem::Button {
                        label: command.label().to_string(),
                        key: keys.key_for(command.binding_name()),
                    });
                }
            }
            toolbar.add_right(ToolbarItem::SearchBox { query: search_query.to_string(), active: search_active });
        }
        ToolbarLayout::Explorer(connection) => {
            toolbar
                .add_left(ToolbarItem::Button { label: "Back".into(), key: keys.key_for("back") })
                .add_left_separator()
                .add_left(ToolbarItem::Label(connection.display_label()));
        }
    }
    toolbar
}
