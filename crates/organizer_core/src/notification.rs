use std::time::Duration;

use organizer_logging::organizer_debug;

pub const ERROR_TAG: &str = "Error:";
pub const SUCCESS_TAG: &str = "Success:";

/// Every notification auto-dismisses after this long.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(5);

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Parses a severity label. Anything other than `"success"` or `"error"` is unrecognized.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "success" => Some(Severity::Success),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    TopCenter,
    CenterRight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub severity: Severity,
    pub message: String,
    pub placement: Placement,
    pub emphasis: f32,
    pub remaining: Duration,
}

/// Removes the severity tag from a raw reply text.
///
/// Keeps everything after the first `"Error:"`, then keeps everything after the
/// first `"Success:"` of what is left. Untagged text is returned unchanged.
pub fn strip_tag(raw: &str) -> &str {
    let text = raw.split_once(ERROR_TAG).map_or(raw, |(_, rest)| rest);
    text.split_once(SUCCESS_TAG).map_or(text, |(_, rest)| rest)
}

/// Stack of transient notifications, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationSink {
    active: Vec<Notification>,
    next_id: NotificationId,
}

impl NotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `raw` (tag stripped) with the given severity label.
    ///
    /// Unrecognized labels produce no notification.
    pub fn notify(
        &mut self,
        raw: &str,
        severity: &str,
        placement: Placement,
        emphasis: f32,
    ) -> Option<NotificationId> {
        let Some(severity) = Severity::from_label(severity) else {
            organizer_debug!("Dropping notification with unknown severity {:?}", severity);
            return None;
        };
        Some(self.push(severity, strip_tag(raw).to_string(), placement, emphasis))
    }

    /// Shows an already classified, untagged message.
    pub fn push(
        &mut self,
        severity: Severity,
        message: String,
        placement: Placement,
        emphasis: f32,
    ) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.active.push(Notification {
            id,
            severity,
            message,
            placement,
            emphasis,
            remaining: NOTIFICATION_LIFETIME,
        });
        id
    }

    /// Ages every notification by `elapsed` and drops the expired ones.
    /// Returns true if anything was dropped.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let before = self.active.len();
        for notification in &mut self.active {
            notification.remaining = notification.remaining.saturating_sub(elapsed);
        }
        self.active.retain(|n| !n.remaining.is_zero());
        before != self.active.len()
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        before != self.active.len()
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}
