use crate::config_flag::{ConfigFlagStore, MirrorState};
use crate::notification::NotificationSink;
use crate::orchestrator::OrganizeOrchestrator;
use crate::panel::PanelCoordinator;
use crate::path_gate::PathInputGate;
use crate::view_model::{AppViewModel, NotificationView, ORGANIZE_LABEL_DISABLED, ORGANIZE_LABEL_ENABLED};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) path: PathInputGate,
    pub(crate) backup: ConfigFlagStore,
    pub(crate) panel: PanelCoordinator,
    pub(crate) organizer: OrganizeOrchestrator,
    pub(crate) notifications: NotificationSink,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded with the backup flag read from persisted configuration.
    pub fn with_backup(enabled: bool) -> Self {
        Self {
            backup: ConfigFlagStore::new(enabled),
            ..Self::default()
        }
    }

    pub fn path(&self) -> &str {
        self.path.path()
    }

    pub fn is_action_enabled(&self) -> bool {
        self.path.is_action_enabled()
    }

    pub fn backup_enabled(&self) -> bool {
        self.backup.value()
    }

    pub fn mirror_state(&self) -> MirrorState {
        self.panel.mirror().state(&self.backup)
    }

    pub fn notifications(&self) -> &NotificationSink {
        &self.notifications
    }

    pub fn view(&self) -> AppViewModel {
        let busy = self.organizer.is_busy();
        let enabled = self.path.is_action_enabled() && !busy;
        let label = if self.path.is_action_enabled() {
            ORGANIZE_LABEL_ENABLED
        } else {
            ORGANIZE_LABEL_DISABLED
        };
        AppViewModel {
            path: self.path.path().to_string(),
            organize_enabled: enabled,
            organize_label: label.to_string(),
            organize_in_flight: busy,
            panel_open: self.panel.is_open(),
            backup_switch: self.panel.mirror().checked(),
            backup_enabled: self.backup.value(),
            notifications: self
                .notifications
                .active()
                .iter()
                .map(NotificationView::from)
                .collect(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn peek_request_id(&self) -> RequestId {
        self.next_request_id + 1
    }

    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
