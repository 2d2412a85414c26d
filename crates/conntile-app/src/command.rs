use std::collections::HashSet;

pub use crate::keybindings::InputMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleLogs,

    // Connection commands; subject to registry visibility
    NewConnection,
    RemoveConnection,
    ConnectConnection,
    DisconnectConnection,

    // Search box
    EnterSearch,
    SearchInput(char),
    SearchBackspace,
    SearchClear,
    ExitSearch,

    // List and explorer navigation
    SelectNext,
    SelectPrev,
    Explore,
    BackToList,

    // Error modal
    DismissError,
}

impl Command {
    pub fn app_command(&self) -> Option<AppCommand> {
        match self {
            Self::NewConnection => Some(AppCommand::NewConnection),
            Self::RemoveConnection => Some(AppCommand::RemoveConnection),
            Self::ConnectConnection => Some(AppCommand::ConnectConnection),
            Self::DisconnectConnection => Some(AppCommand::DisconnectConnection),
            _ => None,
        }
    }

    /// Commands that act on the pane body. They are dropped while a slide is
    /// running.
    pub fn targets_pane(&self) -> bool {
        !matches!(self, Self::Quit | Self::ToggleLogs | Self::DismissError)
    }
}

/// Application commands whose visibility the presenter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppCommand {
    NewConnection,
    RemoveConnection,
    ConnectConnection,
    DisconnectConnection,
}

impl AppCommand {
    pub fn label(self) -> &'static str {
        match self {
            Self::NewConnection => "New Connection",
            Self::RemoveConnection => "Remove",
            Self::ConnectConnection => "Connect",
            Self::DisconnectConnection => "Disconnect",
        }
    }

    /// Name of the keybinding entry in the `[keybindings.connections]` group.
    pub fn binding_name(self) -> &'static str {
        match self {
            Self::NewConnection => "new_connection",
            Self::RemoveConnection => "remove_connection",
            Self::ConnectConnection => "connect_connection",
            Self::DisconnectConnection => "disconnect_connection",
        }
    }
}

/// Visibility of the pane's application commands. Everything starts visible.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    hidden: HashSet<AppCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_visible(&mut self, command: AppCommand, visible: bool) {
        if visible {
            self.hidden.remove(&command);
        } else {
            self.hidden.insert(command);
        }
    }

    pub fn is_visible(&self, command: AppCommand) -> bool {
        !self.hidden.contains(&command)
    }
}
