use std::time::Duration;

use crate::notification::{Notification, NotificationId, Placement, Severity};

pub const ORGANIZE_LABEL_DISABLED: &str = "Enter valid path to folder to organize";
pub const ORGANIZE_LABEL_ENABLED: &str = "Click to organize files";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub path: String,
    pub organize_enabled: bool,
    pub organize_label: String,
    pub organize_in_flight: bool,
    pub panel_open: bool,
    /// What the panel's switch displays.
    pub backup_switch: bool,
    /// Canonical backup flag.
    pub backup_enabled: bool,
    pub notifications: Vec<NotificationView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub severity: Severity,
    pub message: String,
    pub placement: Placement,
    pub emphasis: f32,
    pub remaining: Duration,
}

impl From<&Notification> for NotificationView {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            severity: notification.severity,
            message: notification.message.clone(),
            placement: notification.placement,
            emphasis: notification.emphasis,
            remaining: notification.remaining,
        }
    }
}
