use serde::{Deserialize, Serialize};

/// Colour strings for the UI. Each value is parsed by the tui crate:
/// `#rrggbb`, `rgb(r,g,b)`, a named colour, or `default`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: String,
    pub fg: String,
    pub bg: String,
    #[serde(alias = "status-bg")]
    pub status_bg: String,
    #[serde(alias = "status-fg")]
    pub status_fg: String,
    #[serde(alias = "selection-bg")]
    pub selection_bg: String,
    #[serde(alias = "selection-fg")]
    pub selection_fg: String,
    pub border: String,
    #[serde(alias = "border-focused")]
    pub border_focused: String,
    #[serde(alias = "text-dim")]
    pub text_dim: String,
    #[serde(alias = "dialog-bg")]
    pub dialog_bg: String,
    pub error: String,
    #[serde(alias = "toolbar-bg")]
    pub toolbar_bg: String,
    #[serde(alias = "search-fg")]
    pub search_fg: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#89b4fa".into(),
            fg: "#cdd6f4".into(),
            bg: "default".into(),
            status_bg: "#1e1e2e".into(),
            status_fg: "#cdd6f4".into(),
            selection_bg: "#45475a".into(),
            selection_fg: "#cdd6f4".into(),
            border: "#585b70".into(),
            border_focused: "#89b4fa".into(),
            text_dim: "#6c7086".into(),
            dialog_bg: "#1e1e2e".into(),
            error: "#f38ba8".into(),
            toolbar_bg: "#313244".into(),
            search_fg: "#f9e2af".into(),
        }
    }
}
