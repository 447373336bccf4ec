/// Free-text folder path and the "organize enabled" signal derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathInputGate {
    value: String,
    enabled: bool,
}

impl PathInputGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the tracked value as-is and recomputes the enabled signal.
    pub fn set_path(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.enabled = !self.value.is_empty();
    }

    pub fn clear(&mut self) {
        self.set_path(String::new());
    }

    pub fn is_action_enabled(&self) -> bool {
        self.enabled
    }

    pub fn path(&self) -> &str {
        &self.value
    }
}
