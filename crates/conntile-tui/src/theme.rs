use conntile_config::ThemeConfig;
use ratatui::style::{Color, Modifier, Style};

/// Resolved styles for every surface the app draws.
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,
    pub fg: Color,
    pub bg: Color,
    pub table_header: Style,
    pub status_bar: Style,
    pub selection: Style,
    pub border: Style,
    pub border_focused: Style,
    pub text_dim: Style,
    pub dialog: Style,
    pub error: Style,
    pub toolbar: Style,
    pub search: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    /// Unparsable colours fall back to the terminal default.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let color = |raw: &str| parse_color(raw).unwrap_or(Color::Reset);
        let accent = color(&config.accent);
        let fg = color(&config.fg);

        Self {
            accent,
            fg,
            bg: color(&config.bg),
            table_header: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            status_bar: Style::default().fg(color(&config.status_fg)).bg(color(&config.status_bg)),
            selection: Style::default().fg(color(&config.selection_fg)).bg(color(&config.selection_bg)),
            border: Style::default().fg(color(&config.border)),
            border_focused: Style::default().fg(color(&config.border_focused)),
            text_dim: Style::default().fg(color(&config.text_dim)),
            dialog: Style::default().bg(color(&config.dialog_bg)),
            error: Style::default().fg(color(&config.error)),
            toolbar: Style::default().fg(fg).bg(color(&config.toolbar_bg)),
            search: Style::default().fg(color(&config.search_fg)),
        }
    }
}

/// Parse a color string into a ratatui `Color`.
///
/// Supported formats:
/// - `"#89b4fa"`: hex RGB
/// - `"rgb(137,180,250)"`: functional RGB
/// - `"red"`, `"blue"`, etc.: named colors
/// - `"default"`: terminal default (`Color::Reset`)
pub fn parse_color(s: &str) -> anyhow::Result<Color> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("default") {
        return Ok(Color::Reset);
    }

    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 {
            anyhow::bail!("invalid hex color \"{s}\": expected 6 hex digits after '#'");
        }
        let component = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| anyhow::anyhow!("invalid hex color \"{s}\": bad {name} component"))
        };
        return Ok(Color::Rgb(component(0..2, "red")?, component(2..4, "green")?, component(4..6, "blue")?));
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if parts.len() != 3 {
            anyhow::bail!("invalid rgb color \"{s}\": expected rgb(r,g,b)");
        }
        let channel = |raw: &str, name: &str| {
            raw.trim().parse::<u8>().map_err(|_| anyhow::anyhow!("invalid rgb color \"{s}\": bad {name} value"))
        };
        return Ok(Color::Rgb(channel(parts[0], "red")?, channel(parts[1], "green")?, channel(parts[2], "blue")?));
    }

    match s.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Ok(Color::DarkGray),
        "white" => Ok(Color::White),
        _ => anyhow::bail!(
            "unknown color \"{s}\": expected hex (#rrggbb), rgb(r,g,b), a named color (red, blue, ...), or \"default\""
        ),
    }
}
