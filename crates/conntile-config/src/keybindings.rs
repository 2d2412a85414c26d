use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub global: IndexMap<String, String>,
    #[serde(default)]
    pub connections: IndexMap<String, String>,
    #[serde(default)]
    pub navigation: IndexMap<String, String>,
    #[serde(default)]
    pub explorer: IndexMap<String, String>,
}

/// A binding whose key string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBinding {
    pub group: String,
    pub name: String,
    pub reason: String,
}

/// The same key bound in two places; `first` and `second` are `group.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCollision {
    pub key: String,
    pub first: String,
    pub second: String,
}

impl KeybindingsConfig {
    fn groups(&self) -> [(&'static str, &IndexMap<String, String>); 4] {
        [
            ("global", &self.global),
            ("connections", &self.connections),
            ("navigation", &self.navigation),
            ("explorer", &self.explorer),
        ]
    }

    fn groups_mut(&mut self) -> [&mut IndexMap<String, String>; 4] {
        [&mut self.global, &mut self.connections, &mut self.navigation, &mut self.explorer]
    }

    /// Overlays `user` onto `self` one binding at a time.
    pub(crate) fn merge(&mut self, user: KeybindingsConfig) {
        let KeybindingsConfig { global, connections, navigation, explorer } = user;
        for (target, overrides) in self.groups_mut().into_iter().zip([global, connections, navigation, explorer]) {
            target.extend(overrides);
        }
    }
}

pub fn validate_keybindings(config: &KeybindingsConfig) -> Vec<InvalidBinding> {
    config
        .groups()
        .into_iter()
        .flat_map(|(group, map)| {
            map.iter().filter_map(move |(name, key_str)| {
                validate_key_string(key_str).err().map(|reason| InvalidBinding {
                    group: group.to_string(),
                    name: name.clone(),
                    reason,
                })
            })
        })
        .collect()
}

pub fn check_collisions(config: &KeybindingsConfig) -> Vec<KeyCollision> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut collisions = Vec::new();
    for (group, map) in config.groups() {
        for (name, key_str) in map {
            let owner = format!("{group}.{name}");
            let normalized = collision_key(key_str);
            match seen.get(&normalized) {
                Some(first) => {
                    collisions.push(KeyCollision { key: key_str.clone(), first: first.clone(), second: owner });
                }
                None => {
                    seen.insert(normalized, owner);
                }
            }
        }
    }
    collisions
}

/// Canonical form of a key string as the dispatcher sees it: letter case
/// matters (`N` is Shift+n), Ctrl+letter ignores Shift, shifted punctuation
/// drops Shift, and named keys are case-insensitive.
fn collision_key(key_str: &str) -> String {
    let parts: Vec<&str> = key_str.trim().split('+').collect();
    let Some((key, modifier_parts)) = parts.split_last() else { return String::new() };
    let mut modifiers: Vec<String> = modifier_parts.iter().map(|m| m.to_ascii_lowercase()).collect();

    let mut chars = key.chars();
    let key = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            let has = |name: &str| modifiers.iter().any(|m| m == name);
            let shifted = (c.is_ascii_uppercase() || has("shift")) && !has("ctrl");
            modifiers.retain(|m| m != "shift");
            if shifted {
                modifiers.push("shift".to_string());
            }
            c.to_ascii_lowercase().to_string()
        }
        (Some(c), None) => {
            modifiers.retain(|m| m != "shift");
            c.to_string()
        }
        _ => key.to_ascii_lowercase(),
    };

    modifiers.sort();
    modifiers.dedup();
    modifiers.push(key);
    modifiers.join("+")
}

fn validate_key_string(s: &str) -> Result<(), String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("empty key string".to_string());
    }
    let parts: Vec<&str> = trimmed.split('+').collect();
    if parts.len() == 1 {
        validate_key_part(parts[0])?;
        return Ok(());
    }
    for &modifier in &parts[..parts.len() - 1] {
        match modifier.to_ascii_lowercase().as_str() {
            "alt" | "ctrl" | "shift" => {}
            other => return Err(format!("unknown modifier: {other}")),
        }
    }
    validate_key_part(parts[parts.len() - 1])
}

fn validate_key_part(s: &str) -> Result<(), String> {
    let lower = s.to_ascii_lowercase();
    match lower.as_str() {
        "tab" | "enter" | "esc" | "backspace" | "delete" | "up" | "down" | "left" | "right" | "home" | "end"
        | "pageup" | "pagedown" | "space" => Ok(()),
        _ if s.chars().count() == 1 => Ok(()),
        f if f.starts_with('f') => f[1..].parse::<u8>().map(|_| ()).map_err(|_| format!("invalid function key: {s}")),
        _ => Err(format!("unrecognized key: {s}")),
    }
}
