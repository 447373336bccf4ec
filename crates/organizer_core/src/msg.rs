use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the folder path input.
    PathChanged(String),
    /// User clicked the organize button.
    OrganizeClicked,
    /// Executor finished an organize request.
    OrganizeFinished {
        request_id: crate::RequestId,
        reply: crate::CommandReply,
    },
    /// User opened the side panel.
    PanelOpened,
    /// User closed the side panel.
    PanelClosed,
    /// User flipped the "Enable Backup" switch.
    BackupToggled,
    /// User asked to open the configuration file.
    OpenConfigClicked,
    /// Executor finished opening the configuration file.
    ConfigFileOpened {
        request_id: crate::RequestId,
        reply: crate::CommandReply,
    },
    /// Backup setting read from persisted configuration.
    BackupSettingLoaded(bool),
    /// User dismissed a notification before it expired.
    NotificationDismissed(crate::NotificationId),
    /// Time passed since the previous tick.
    Tick(Duration),
}
