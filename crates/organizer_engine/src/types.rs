use std::path::PathBuf;

use crate::{OpenConfigError, OrganizeError, OrganizeOutcome};

pub type RequestId = u64;

/// Completion of one engine command. Events arrive in completion order.
#[derive(Debug)]
pub enum EngineEvent {
    OrganizeCompleted {
        request_id: RequestId,
        result: Result<OrganizeOutcome, OrganizeError>,
    },
    ConfigOpened {
        request_id: RequestId,
        result: Result<PathBuf, OpenConfigError>,
    },
}

impl EngineEvent {
    pub fn request_id(&self) -> RequestId {
        match self {
            EngineEvent::OrganizeCompleted { request_id, .. }
            | EngineEvent::ConfigOpened { request_id, .. } => *request_id,
        }
    }

    /// The result as the front end reads it: `"Success:"` or `"Error:"` followed by the message.
    pub fn reply_text(&self) -> String {
        match self {
            EngineEvent::OrganizeCompleted { result, .. } => match result {
                Ok(outcome) => format!("Success: {}", outcome.message()),
                Err(err) => format!("Error: {err}"),
            },
            EngineEvent::ConfigOpened { result, .. } => match result {
                Ok(_) => "Success:Opened config file".to_string(),
                Err(err) => format!("Error: {err}"),
            },
        }
    }
}
