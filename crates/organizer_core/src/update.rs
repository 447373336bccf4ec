use organizer_logging::{organizer_debug, organizer_info};

use crate::notification::Placement;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::PathChanged(text) => {
            state.path.set_path(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::OrganizeClicked => {
            // A rejected click leaves the id counter untouched.
            let request_id = state.peek_request_id();
            match state
                .organizer
                .organize(request_id, &state.path, &state.backup)
            {
                Some(effect) => {
                    state.next_request_id();
                    state.mark_dirty();
                    vec![effect]
                }
                None => Vec::new(),
            }
        }
        Msg::OrganizeFinished { request_id, reply } => {
            state.organizer.settle(
                request_id,
                reply,
                &mut state.path,
                &mut state.notifications,
            );
            state.mark_dirty();
            Vec::new()
        }
        Msg::PanelOpened => {
            if state.panel.open(&state.backup) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::PanelClosed => {
            if state.panel.close() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::BackupToggled => {
            if let Some(enabled) = state.panel.toggle_backup(&mut state.backup) {
                organizer_info!("Backup toggled to {}", enabled);
                state.mark_dirty();
            } else {
                organizer_debug!("Backup toggle ignored: panel closed");
            }
            Vec::new()
        }
        Msg::OpenConfigClicked => {
            let request_id = state.next_request_id();
            vec![Effect::OpenConfigFile { request_id }]
        }
        Msg::ConfigFileOpened { request_id, reply } => {
            let severity = reply.severity().label();
            organizer_info!("Open config request {} settled as {}", request_id, severity);
            state
                .notifications
                .notify(reply.raw(), severity, Placement::CenterRight, 0.8);
            state.mark_dirty();
            Vec::new()
        }
        Msg::BackupSettingLoaded(enabled) => {
            if state.backup.set(enabled) {
                organizer_info!("Backup setting reloaded: {}", enabled);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NotificationDismissed(id) => {
            if state.notifications.dismiss(id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick(elapsed) => {
            if state.notifications.advance(elapsed) {
                state.mark_dirty();
            }
            Vec::new()
        }
    };

    // An open panel never displays a stale switch.
    if state.panel.sync(&state.backup) {
        state.mark_dirty();
    }

    (state, effects)
}
