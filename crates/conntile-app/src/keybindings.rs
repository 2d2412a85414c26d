use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use conntile_config::KeybindingsConfig;

use crate::command::{AppCommand, Command};

mod commands;
mod parsing;

pub use parsing::parse_key_string;

use commands::{
    connections_command_description, connections_command_from_name, explorer_command_description,
    explorer_command_from_name, global_command_description, global_command_from_name,
    navigation_command_description, navigation_command_from_name,
};
use parsing::{format_key_display, normalize_key_event};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// The connection list has focus.
    Normal,
    Explorer,
    /// Typing into the search box.
    Search,
    ErrorDialog,
}

impl InputMode {
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Explorer => "Explorer",
            Self::Search => "Search",
            Self::ErrorDialog => "Error",
        }
    }
}

/// The registry-controlled command behind a binding name, if any.
pub fn app_command_for_binding(name: &str) -> Option<AppCommand> {
    connections_command_from_name(name).and_then(|cmd| cmd.app_command())
}

pub fn is_global_binding(name: &str) -> bool {
    global_command_from_name(name).is_some()
}

/// (binding name, key string, description)
type ReverseEntry = (String, String, String);

pub struct KeybindingDispatcher {
    mode: InputMode,
    global_bindings: HashMap<KeyEvent, Command>,
    connections_bindings: HashMap<KeyEvent, Command>,
    navigation_bindings: HashMap<KeyEvent, Command>,
    explorer_bindings: HashMap<KeyEvent, Command>,
    reverse_global: Vec<ReverseEntry>,
    reverse_connections: Vec<ReverseEntry>,
    reverse_navigation: Vec<ReverseEntry>,
    reverse_explorer: Vec<ReverseEntry>,
}

fn build_group<'a>(
    group: impl IntoIterator<Item = (&'a String, &'a String)>,
    from_name: fn(&str) -> Option<Command>,
    describe: fn(&str) -> String,
) -> (HashMap<KeyEvent, Command>, Vec<ReverseEntry>) {
    let mut bindings = HashMap::new();
    let mut reverse = Vec::new();
    for (name, key_str) in group {
        let Some(cmd) = from_name(name) else {
            tracing::warn!("Unknown keybinding command: {name}");
            continue;
        };
        match parse_key_string(key_str) {
            Some(key) => {
                bindings.insert(key, cmd);
                reverse.push((name.clone(), key_str.clone(), describe(name)));
            }
            None => tracing::warn!("Invalid key string for {name}: {key_str:?}"),
        }
    }
    (bindings, reverse)
}

impl KeybindingDispatcher {
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        let (global_bindings, reverse_global) =
            build_group(&config.global, global_command_from_name, global_command_description);
        let (connections_bindings, reverse_connections) =
            build_group(&config.connections, connections_command_from_name, connections_command_description);
        let (navigation_bindings, reverse_navigation) =
            build_group(&config.navigation, navigation_command_from_name, navigation_command_description);
        let (explorer_bindings, reverse_explorer) =
            build_group(&config.explorer, explorer_command_from_name, explorer_command_description);

        Self {
            mode: InputMode::Normal,
            global_bindings,
            connections_bindings,
            navigation_bindings,
            explorer_bindings,
            reverse_global,
            reverse_connections,
            reverse_navigation,
            reverse_explorer,
        }
    }

    pub fn dispatch(&self, key: KeyEvent) -> Option<Command> {
        let key = normalize_key_event(key);

        match self.mode {
            InputMode::ErrorDialog => {
                return match key.code {
                    KeyCode::Enter | KeyCode::Esc => Some(Command::DismissError),
                    _ => None,
                };
            }
            InputMode::Search => {
                let typing = !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
                match key.code {
                    KeyCode::Esc => return Some(Command::SearchClear),
                    KeyCode::Enter => return Some(Command::ExitSearch),
                    KeyCode::Backspace => return Some(Command::SearchBackspace),
                    KeyCode::Up => return Some(Command::SelectPrev),
                    KeyCode::Down => return Some(Command::SelectNext),
                    KeyCode::Char(c) if typing => return Some(Command::SearchInput(c)),
                    _ => {}
                }
            }
            InputMode::Normal | InputMode::Explorer => {}
        }

        if let Some(cmd) = self.global_bindings.get(&key) {
            return Some(cmd.clone());
        }

        match self.mode {
            InputMode::Normal => self
                .connections_bindings
                .get(&key)
                .or_else(|| self.navigation_bindings.get(&key))
                .cloned(),
            InputMode::Explorer => self.explorer_bindings.get(&key).cloned(),
            InputMode::Search => None,
            InputMode::ErrorDialog => unreachable!("handled above"),
        }
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            tracing::debug!("Input mode {} -> {}", self.mode.name(), mode.name());
        }
        self.mode = mode;
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Display form of the key bound to `name`, e.g. `Ctrl+q`.
    pub fn key_for(&self, name: &str) -> Option<String> {
        self.reverse_global
            .iter()
            .chain(&self.reverse_connections)
            .chain(&self.reverse_navigation)
            .chain(&self.reverse_explorer)
            .find(|(n, _, _)| n == name)
            .map(|(_, key_str, _)| format_key_display(key_str))
    }

    /// Status bar hints for the current mode as (binding name, key, description).
    pub fn mode_shortcuts(&self) -> Vec<(String, String, String)> {
        let fixed = |pairs: &[(&str, &str)]| -> Vec<(String, String, String)> {
            pairs.iter().map(|(k, d)| (String::new(), k.to_string(), d.to_string())).collect()
        };
        let groups: Vec<&[ReverseEntry]> = match self.mode {
            InputMode::Normal => vec![&self.reverse_connections, &self.reverse_global],
            InputMode::Explorer => vec![&self.reverse_explorer, &self.reverse_global],
            InputMode::Search => {
                return fixed(&[("Enter", "Done"), ("Esc", "Clear"), ("Up/Down", "Select")]);
            }
            InputMode::ErrorDialog => return fixed(&[("Enter/Esc", "Dismiss")]),
        };
        groups
            .into_iter()
            .flatten()
            .map(|(name, key_str, desc)| (name.clone(), format_key_display(key_str), desc.clone()))
            .collect()
    }
}
