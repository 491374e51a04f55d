// src/application/ports/error_log.rs
use chrono::{DateTime, SecondsFormat, Utc};

/// One server-side failure, as written to the operational log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerErrorEntry {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
}

impl ServerErrorEntry {
    /// `[<timestamp>] Server Error: <error>`
    pub fn line(&self) -> String {
        format!(
            "[{}] Server Error: {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.error
        )
    }
}

/// Append-only sink for failures that resolve to a 5xx status.
pub trait ErrorLog: Send + Sync {
    fn record(&self, entry: &ServerErrorEntry);
}
