use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use organizer_core::{CommandReply, Effect, Msg};
use organizer_engine::{EngineEvent, EngineHandle, EngineSettings, FsExecutor};
use organizer_logging::{organizer_info, organizer_warn};

use super::app::LoopEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: EngineSettings, loop_tx: mpsc::Sender<LoopEvent>) -> anyhow::Result<Self> {
        let executor = Arc::new(FsExecutor::new(settings));
        let (engine, events) = EngineHandle::spawn(executor).context("starting engine runtime")?;
        spawn_event_loop(events, loop_tx);
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::OrganizeFiles {
                    request_id,
                    path,
                    is_backup,
                } => {
                    organizer_info!(
                        "OrganizeFiles request_id={} is_backup={} path={}",
                        request_id,
                        is_backup,
                        path
                    );
                    self.engine.organize(request_id, path, is_backup);
                }
                Effect::OpenConfigFile { request_id } => {
                    organizer_info!("OpenConfigFile request_id={}", request_id);
                    self.engine.open_config(request_id);
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        for event in events {
            if loop_tx.send(LoopEvent::Core(map_event(event))).is_err() {
                break;
            }
        }
    });
}

pub(crate) fn map_event(event: EngineEvent) -> Msg {
    let request_id = event.request_id();
    let reply = CommandReply::from_tagged_text(event.reply_text());
    if let CommandReply::Error(text) = &reply {
        organizer_warn!("Request {} failed: {}", request_id, text);
    }
    match event {
        EngineEvent::OrganizeCompleted { .. } => Msg::OrganizeFinished { request_id, reply },
        EngineEvent::ConfigOpened { .. } => Msg::ConfigFileOpened { request_id, reply },
    }
}
