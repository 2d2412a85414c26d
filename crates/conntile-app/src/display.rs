use crate::presenter::GlobalDisplay;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub title: String,
    pub message: String,
}

/// Shows user-facing errors as a blocking modal; one at a time, the latest
/// replacing any undismissed one.
#[derive(Debug, Default)]
pub struct ModalDisplay {
    current: Option<ErrorMessage>,
}

impl ModalDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&ErrorMessage> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl GlobalDisplay for ModalDisplay {
    fn show_error_message(&mut self, title: &str, message: &str) {
        self.current = Some(ErrorMessage { title: title.to_string(), message: message.to_string() });
    }
}
