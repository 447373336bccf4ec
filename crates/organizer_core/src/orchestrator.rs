use organizer_logging::{organizer_debug, organizer_info, organizer_warn};

use crate::config_flag::ConfigFlagStore;
use crate::notification::{NotificationSink, Placement};
use crate::path_gate::PathInputGate;
use crate::{CommandReply, Effect, RequestId};

/// Organize action handler with a single-flight guard.
///
/// Clicks that arrive while a request is in flight are dropped, so at most one
/// organize request is pending at a time. The guard clears when the result for
/// that request settles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrganizeOrchestrator {
    in_flight: Option<RequestId>,
}

impl OrganizeOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Issues one organize request for the gated path and the canonical backup flag.
    pub fn organize(
        &mut self,
        request_id: RequestId,
        gate: &PathInputGate,
        store: &ConfigFlagStore,
    ) -> Option<Effect> {
        if !gate.is_action_enabled() {
            organizer_debug!("Organize ignored: no path entered");
            return None;
        }
        if let Some(pending) = self.in_flight {
            organizer_debug!("Organize ignored: request {} still in flight", pending);
            return None;
        }

        self.in_flight = Some(request_id);
        let path = gate.path().to_string();
        let is_backup = store.value();
        organizer_info!(
            "Organize request {} path={} is_backup={}",
            request_id,
            path,
            is_backup
        );
        Some(Effect::OrganizeFiles {
            request_id,
            path,
            is_backup,
        })
    }

    /// Consumes the single result of a request: notify, then reset the path.
    pub fn settle(
        &mut self,
        request_id: RequestId,
        reply: CommandReply,
        gate: &mut PathInputGate,
        sink: &mut NotificationSink,
    ) {
        match self.in_flight {
            Some(pending) if pending == request_id => self.in_flight = None,
            other => organizer_warn!(
                "Organize result {} does not match in-flight request {:?}",
                request_id,
                other
            ),
        }

        let severity = reply.severity().label();
        organizer_info!("Organize request {} settled as {}", request_id, severity);
        sink.notify(reply.raw(), severity, Placement::TopCenter, 1.0);
        gate.clear();
    }
}
