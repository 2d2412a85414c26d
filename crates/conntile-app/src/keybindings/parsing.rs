use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Canonical form used for lookups: letters carry SHIFT exactly when they
/// are uppercase, shifted punctuation drops SHIFT, and Shift+Tab is BackTab.
pub(super) fn normalize_key_event(key: KeyEvent) -> KeyEvent {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let unshifted = key.modifiers - KeyModifiers::SHIFT;
    match key.code {
        KeyCode::Tab | KeyCode::BackTab if shift => KeyEvent::new(KeyCode::BackTab, unshifted),
        // Ctrl+Shift+<letter> usually arrives as Ctrl+<letter>.
        KeyCode::Char(c) if c.is_ascii_alphabetic() && key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyEvent::new(KeyCode::Char(c.to_ascii_lowercase()), unshifted)
        }
        KeyCode::Char(c) if c.is_ascii_alphabetic() && (shift || c.is_ascii_uppercase()) => {
            KeyEvent::new(KeyCode::Char(c.to_ascii_uppercase()), key.modifiers | KeyModifiers::SHIFT)
        }
        KeyCode::Char(c) if !c.is_ascii_alphabetic() => KeyEvent::new(key.code, unshifted),
        _ => KeyEvent::new(key.code, key.modifiers),
    }
}

/// `ctrl+q` displays as `Ctrl+q`. Modifiers and named keys are capitalized;
/// a single-character key is shown as bound, since its case is significant.
pub(super) fn format_key_display(key_str: &str) -> String {
    key_str
        .trim()
        .split('+')
        .map(|part| {
            let mut chars = part.chars();
            match (chars.next(), chars.clone().next()) {
                (Some(_), None) => part.to_string(),
                (Some(first), Some(_)) => format!("{}{}", first.to_uppercase(), chars.as_str()),
                (None, _) => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let parts: Vec<&str> = s.trim().split('+').collect();
    let (key_part, modifier_parts) = parts.split_last()?;

    let mut modifiers = KeyModifiers::NONE;
    for modifier in modifier_parts {
        modifiers |= match modifier.to_ascii_lowercase().as_str() {
            "alt" => KeyModifiers::ALT,
            "ctrl" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            _ => return None,
        };
    }

    let code = match key_part.to_ascii_lowercase().as_str() {
        "tab" => KeyCode::Tab,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        lower => {
            let mut chars = key_part.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => KeyCode::F(lower.strip_prefix('f')?.parse().ok()?),
            }
        }
    };

    Some(normalize_key_event(KeyEvent::new(code, modifiers)))
}
