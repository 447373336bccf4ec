use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use organizer_logging::{organizer_debug, organizer_trace, organizer_warn};

use crate::{CommandExecutor, EngineEvent, RequestId};

enum EngineCommand {
    Organize {
        request_id: RequestId,
        path: String,
        is_backup: bool,
    },
    OpenConfig {
        request_id: RequestId,
    },
}

/// Handle to the background worker that runs commands concurrently.
///
/// Completions are delivered on the receiver returned by [`EngineHandle::spawn`],
/// in the order they finish. Dropping the handle stops the worker.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(
        executor: Arc<dyn CommandExecutor>,
    ) -> io::Result<(Self, mpsc::Receiver<EngineEvent>)> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let executor = executor.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(executor.as_ref(), command, event_tx).await;
                });
            }
            organizer_debug!("Engine command channel closed");
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn organize(&self, request_id: RequestId, path: impl Into<String>, is_backup: bool) {
        self.send(EngineCommand::Organize {
            request_id,
            path: path.into(),
            is_backup,
        });
    }

    pub fn open_config(&self, request_id: RequestId) {
        self.send(EngineCommand::OpenConfig { request_id });
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            organizer_warn!("Engine worker is gone; command dropped");
        }
    }
}

async fn handle_command(
    executor: &dyn CommandExecutor,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Organize {
            request_id,
            path,
            is_backup,
        } => EngineEvent::OrganizeCompleted {
            request_id,
            result: executor.organize_files(path, is_backup).await,
        },
        EngineCommand::OpenConfig { request_id } => EngineEvent::ConfigOpened {
            request_id,
            result: executor.open_config_file().await,
        },
    };
    organizer_trace!("Request {} completed", event.request_id());
    let _ = event_tx.send(event);
}
