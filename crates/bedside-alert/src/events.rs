use serde::Serialize;
use tracing::{info, warn};

/// A structured alert event.
///
/// Emitted through `tracing` so it lands wherever the binary sends its logs.
#[derive(Debug, Clone, Serialize)]
pub struct AlertEvent {
    pub action: String,
    pub record_id: String,
    pub actor: String,
    pub details: Option<serde_json::Value>,
}

impl AlertEvent {
    pub fn new(
        action: impl Into<String>,
        record_id: impl Into<String>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            action: action.into(),
            record_id: record_id.into(),
            actor: actor.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Emit this event via tracing. Raised alerts log at `warn`, everything
    /// else at `info`.
    pub fn emit(&self) {
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();

        if self.action == "raised" {
            warn!(
                alert.action = %self.action,
                alert.record_id = %self.record_id,
                alert.actor = %self.actor,
                alert.details = %details,
                "alert event"
            );
        } else {
            info!(
                alert.action = %self.action,
                alert.record_id = %self.record_id,
                alert.actor = %self.actor,
                alert.details = %details,
                "alert event"
            );
        }
    }
}
