//! Canonical "backup enabled" value and the toggle control's mirror of it.
//!
//! The store is the only source of truth. Every change bumps its revision; a mirror
//! is synced exactly when it has observed the current revision.

use organizer_logging::organizer_debug;

pub type Revision = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigFlagStore {
    value: bool,
    revision: Revision,
}

impl ConfigFlagStore {
    pub fn new(initial: bool) -> Self {
        Self {
            value: initial,
            revision: 0,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Writes a new value and broadcasts it by bumping the revision.
    /// Writing the current value is not a change.
    pub fn set(&mut self, value: bool) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.revision += 1;
        organizer_debug!("Backup flag set to {} (revision {})", value, self.revision);
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorState {
    Stale,
    Synced,
}

/// The toggle control's displayed copy of the backup flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BackupToggle {
    checked: bool,
    observed: Option<Revision>,
}

impl BackupToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn state(&self, store: &ConfigFlagStore) -> MirrorState {
        if self.observed == Some(store.revision()) {
            MirrorState::Synced
        } else {
            MirrorState::Stale
        }
    }

    /// Re-reads the canonical value.
    pub fn observe(&mut self, store: &ConfigFlagStore) {
        self.checked = store.value();
        self.observed = Some(store.revision());
    }

    /// Flips the displayed state and writes it through to the store.
    pub fn toggle(&mut self, store: &mut ConfigFlagStore) -> bool {
        self.checked = !self.checked;
        store.set(self.checked);
        self.observed = Some(store.revision());
        self.checked
    }
}
