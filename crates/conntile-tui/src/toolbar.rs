/// One slot of a pane toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarItem {
    /// A command button with its key hint.
    Button { label: String, key: Option<String> },
    Separator,
    Label(String),
    SearchBox { query: String, active: bool },
}

/// Left- and right-aligned toolbar items, rendered in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toolbar {
    left: Vec<ToolbarItem>,
    right: Vec<ToolbarItem>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_left(&mut self, item: ToolbarItem) -> &mut Self {
        self.left.push(item);
        self
    }

    pub fn add_left_separator(&mut self) -> &mut Self {
        self.left.push(ToolbarItem::Separator);
        self
    }

    pub fn add_right(&mut self, item: ToolbarItem) -> &mut Self {
        self.right.push(item);
        self
    }

    pub fn left(&self) -> &[ToolbarItem] {
        &self.left
    }

    pub fn right(&self) -> &[ToolbarItem] {
        &self.right
    }

    /// Labels of the buttons, left then right, for quick inspection.
    pub fn button_labels(&self) -> Vec<&str> {
        self.left
            .iter()
            .chain(&self.right)
            .filter_map(|item| match item {
                ToolbarItem::Button { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}
