use organizer_core::{AppViewModel, NotificationView, Placement, Severity};

use super::constants::TITLE;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![format!("== {TITLE} ==")];

    let path = if view.path.is_empty() {
        "(empty)"
    } else {
        view.path.as_str()
    };
    lines.push(format!("Folder: {path}"));

    let button = if view.organize_in_flight {
        format!("[ {} ] (organizing...)", view.organize_label)
    } else if view.organize_enabled {
        format!("[ {} ]", view.organize_label)
    } else {
        format!("[ {} ] (disabled)", view.organize_label)
    };
    lines.push(button);

    if view.panel_open {
        let mark = if view.backup_switch { "x" } else { " " };
        lines.push(format!("Panel: [{mark}] Enable Backup"));
    }

    lines.extend(view.notifications.iter().map(format_notification));
    lines
}

fn format_notification(notification: &NotificationView) -> String {
    let badge = match notification.severity {
        Severity::Success => "OK",
        Severity::Error => "ERR",
    };
    let indent = match notification.placement {
        Placement::TopCenter => "",
        Placement::CenterRight => "    ",
    };
    format!(
        "{indent}#{id} [{badge}]{message} ({secs}s)",
        id = notification.id,
        message = notification.message,
        secs = notification.remaining.as_secs_f32().ceil() as u64
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use organizer_core::{ORGANIZE_LABEL_DISABLED, ORGANIZE_LABEL_ENABLED};

    use super::*;

    #[test]
    fn disabled_button_and_hidden_panel() {
        let view = AppViewModel {
            organize_label: ORGANIZE_LABEL_DISABLED.to_string(),
            ..AppViewModel::default()
        };
        assert_eq!(
            render(&view),
            vec![
                "== File Organizer ==".to_string(),
                "Folder: (empty)".to_string(),
                format!("[ {ORGANIZE_LABEL_DISABLED} ] (disabled)"),
            ]
        );
    }

    #[test]
    fn panel_and_notifications_are_listed() {
        let view = AppViewModel {
            path: "/data".to_string(),
            organize_enabled: true,
            organize_label: ORGANIZE_LABEL_ENABLED.to_string(),
            panel_open: true,
            backup_switch: true,
            backup_enabled: true,
            notifications: vec![NotificationView {
                id: 2,
                severity: Severity::Error,
                message: " disk full".to_string(),
                placement: Placement::TopCenter,
                emphasis: 1.0,
                remaining: Duration::from_millis(4_200),
            }],
            ..AppViewModel::default()
        };
        let lines = render(&view);
        assert_eq!(lines[1], "Folder: /data");
        assert_eq!(lines[2], format!("[ {ORGANIZE_LABEL_ENABLED} ]"));
        assert_eq!(lines[3], "Panel: [x] Enable Backup");
        assert_eq!(lines[4], "#2 [ERR] disk full (5s)");
    }
}
