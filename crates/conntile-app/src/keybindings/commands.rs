use crate::command::Command;

pub(super) fn global_command_from_name(name: &str) -> Option<Command> {
    match name {
        "quit" => Some(Command::Quit),
        "toggle_logs" => Some(Command::ToggleLogs),
        _ => None,
    }
}

pub(super) fn global_command_description(name: &str) -> String {
    match name {
        "quit" => "Quit",
        "toggle_logs" => "Logs",
        _ => "Unknown",
    }
    .into()
}

pub(super) fn connections_command_from_name(name: &str) -> Option<Command> {
    match name {
        "new_connection" => Some(Command::NewConnection),
        "remove_connection" => Some(Command::RemoveConnection),
        "connect_connection" => Some(Command::ConnectConnection),
        "disconnect_connection" => Some(Command::DisconnectConnection),
        "search" => Some(Command::EnterSearch),
        "explore" => Some(Command::Explore),
        _ => None,
    }
}

pub(super) fn connections_command_description(name: &str) -> String {
    match name {
        "new_connection" => "New",
        "remove_connection" => "Remove",
        "connect_connection" => "Connect",
        "disconnect_connection" => "Disconnect",
        "search" => "Search",
        "explore" => "Explore",
        _ => "Unknown",
    }
    .into()
}

pub(super) fn navigation_command_from_name(name: &str) -> Option<Command> {
    match name {
        "select_next" => Some(Command::SelectNext),
        "select_prev" => Some(Command::SelectPrev),
        _ => None,
    }
}

pub(super) fn navigation_command_description(name: &str) -> String {
    match name {
        "select_next" => "Down",
        "select_prev" => "Up",
        _ => "Unknown",
    }
    .into()
}

pub(super) fn explorer_command_from_name(name: &str) -> Option<Command> {
    match name {
        "back" => Some(Command::BackToList),
        _ => None,
    }
}

pub(super) fn explorer_command_description(name: &str) -> String {
    match name {
        "back" => "Back",
        _ => "Unknown",
    }
    .into()
}
