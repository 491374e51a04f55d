// tests/support/mocks.rs
use chrono::{DateTime, Utc};
use league_errors::application::ports::{
    error_log::{ErrorLog, ServerErrorEntry},
    time::Clock,
};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// テスト用の固定タイムスタンプ
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

#[derive(Clone)]
pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        fixed_now()
    }
}

/// 記録されたサーバーエラーを保持するログシンク
#[derive(Default)]
pub struct CapturingErrorLog {
    entries: Mutex<Vec<ServerErrorEntry>>,
}

impl CapturingErrorLog {
    pub fn entries(&self) -> Vec<ServerErrorEntry> {
        self.entries.lock().expect("log mutex poisoned").clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries().iter().map(ServerErrorEntry::line).collect()
    }
}

impl ErrorLog for CapturingErrorLog {
    fn record(&self, entry: &ServerErrorEntry) {
        self.entries
            .lock()
            .expect("log mutex poisoned")
            .push(entry.clone());
    }
}
