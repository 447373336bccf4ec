//! Organizer core: pure state machine and view-model helpers.
mod config_flag;
mod effect;
mod msg;
mod notification;
mod orchestrator;
mod panel;
mod path_gate;
mod reply;
mod state;
mod update;
mod view_model;

pub use config_flag::{BackupToggle, ConfigFlagStore, MirrorState, Revision};
pub use effect::Effect;
pub use msg::Msg;
pub use notification::{
    strip_tag, Notification, NotificationId, NotificationSink, Placement, Severity, ERROR_TAG,
    NOTIFICATION_LIFETIME, SUCCESS_TAG,
};
pub use orchestrator::OrganizeOrchestrator;
pub use panel::{PanelCoordinator, PanelVisibility};
pub use path_gate::PathInputGate;
pub use reply::CommandReply;
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, NotificationView, ORGANIZE_LABEL_DISABLED, ORGANIZE_LABEL_ENABLED};
