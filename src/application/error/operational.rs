// src/application/error/operational.rs
use serde::{Deserialize, Serialize};
use std::{
    backtrace::{Backtrace, BacktraceStatus},
    fmt,
    panic::Location,
};

/// Secondary error descriptor attached to an error, e.g. one per failed field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Structured(serde_json::Value),
}

impl From<&str> for ErrorDetail {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<String> for ErrorDetail {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<serde_json::Value> for ErrorDetail {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Message(s),
            other => Self::Structured(other),
        }
    }
}

/// Where an error was constructed. Only ever rendered for diagnostics.
#[derive(Debug)]
pub struct Origin {
    location: &'static Location<'static>,
    backtrace: Backtrace,
}

impl Origin {
    #[track_caller]
    pub fn capture() -> Self {
        Self {
            location: Location::caller(),
            backtrace: Backtrace::capture(),
        }
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    at {}", self.location)?;
        if self.backtrace.status() == BacktraceStatus::Captured {
            write!(f, "\n{}", self.backtrace)?;
        }
        Ok(())
    }
}

/// An expected failure raised on purpose by a handler, carrying the status
/// code the client should see.
///
/// The status code is not validated; callers are trusted to pass a real HTTP
/// status. Out-of-range values are rendered as 500 at the HTTP boundary.
#[derive(Debug)]
pub struct OperationalError {
    status_code: u16,
    message: String,
    details: Vec<ErrorDetail>,
    origin: Origin,
}

impl OperationalError {
    #[track_caller]
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            details: Vec::new(),
            origin: Origin::capture(),
        }
    }

    #[track_caller]
    pub fn with_details<I, D>(status_code: u16, message: impl Into<String>, details: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<ErrorDetail>,
    {
        Self {
            status_code,
            message: message.into(),
            details: details.into_iter().map(Into::into).collect(),
            origin: Origin::capture(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &[ErrorDetail] {
        &self.details
    }

    pub fn is_operational(&self) -> bool {
        true
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Trace text in the `Name: message` / `at location` form used in logs.
    pub fn stack(&self) -> String {
        format!("OperationalError: {}\n{}", self.message, self.origin)
    }
}

impl fmt::Display for OperationalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for OperationalError {}
