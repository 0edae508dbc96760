// Usage recorder.
// Emits one structured audit event per served aggregate. Best-effort
// telemetry, never on the caller's error path.

use tracing::info;

use crate::model::RepositoryAggregate;

/// Records that an aggregate was served, and through which surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageRecorder;

impl UsageRecorder {
    pub fn new() -> Self {
        Self
    }

    /// Emit a structured usage event for a served aggregate.
    pub fn record(&self, aggregate: &RepositoryAggregate, via: &str) {
        info!(
            target: "usage",
            owner = %aggregate.owner,
            repo = %aggregate.name,
            stargazers = aggregate.stargazers_count,
            contributors = aggregate.contributors.len(),
            timestamp = chrono::Utc::now().timestamp_millis(),
            via,
            "aggregate served"
        );
    }
}
