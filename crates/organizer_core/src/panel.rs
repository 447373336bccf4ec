use crate::config_flag::{BackupToggle, ConfigFlagStore, MirrorState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Closed,
    Open,
}

/// Side panel state: visibility plus the backup toggle it hosts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelCoordinator {
    visibility: PanelVisibility,
    toggle: BackupToggle,
}

impl PanelCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> PanelVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == PanelVisibility::Open
    }

    /// Opens the panel and re-synchronizes the toggle from the store.
    /// Returns false if the panel was already open.
    pub fn open(&mut self, store: &ConfigFlagStore) -> bool {
        let was_closed = !self.is_open();
        self.visibility = PanelVisibility::Open;
        self.toggle.observe(store);
        was_closed
    }

    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.visibility = PanelVisibility::Closed;
        was_open
    }

    /// Toggles backup from the panel control. Ignored while the panel is closed.
    pub fn toggle_backup(&mut self, store: &mut ConfigFlagStore) -> Option<bool> {
        if !self.is_open() {
            return None;
        }
        Some(self.toggle.toggle(store))
    }

    /// Re-reads the store if the panel is open and its toggle has gone stale.
    pub fn sync(&mut self, store: &ConfigFlagStore) -> bool {
        if self.is_open() && self.toggle.state(store) == MirrorState::Stale {
            self.toggle.observe(store);
            return true;
        }
        false
    }

    pub fn mirror(&self) -> &BackupToggle {
        &self.toggle
    }
}
