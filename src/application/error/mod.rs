// src/application/error/mod.rs
pub mod classify;
mod operational;

pub use classify::{ErrorShape, ForeignError, classify};
pub use operational::{ErrorDetail, OperationalError, Origin};

use crate::domain::errors::DomainError;
use std::{any::Any, fmt};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token. Please log in again";
pub const EXPIRED_TOKEN_MESSAGE: &str = "Token expired. Please log in again";
pub const DUPLICATE_ENTRY_MESSAGE: &str = "Duplicate entry";
pub const MISSING_REFERENCE_MESSAGE: &str = "Referenced record does not exist";
pub const FALLBACK_MESSAGE: &str = "Something went wrong";
pub const FALLBACK_STATUS: u16 = 500;

/// Every failure a request can end with. Foreign errors are folded into one
/// of these variants by [`classify`] where they first enter the crate.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Operational(OperationalError),

    #[error("invalid token: {0}")]
    TokenInvalid(Diagnostic),

    #[error("token expired: {0}")]
    TokenExpired(Diagnostic),

    #[error("duplicate entry: {0}")]
    DuplicateKey(Diagnostic),

    #[error("missing referenced record: {0}")]
    MissingReference(Diagnostic),

    #[error("{0}")]
    Unknown(UnknownError),
}

/// What is kept of a foreign error after classification.
#[derive(Debug, Clone, Default)]
pub struct Diagnostic {
    pub repr: String,
    pub trace: Option<String>,
    pub details: Vec<ErrorDetail>,
}

impl Diagnostic {
    pub fn of(shape: &dyn ErrorShape) -> Self {
        Self {
            repr: format!("{shape:?}"),
            trace: shape.stack(),
            details: shape.details(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr)
    }
}

/// An error nothing recognised. It may still carry its own status and message.
#[derive(Debug, Clone, Default)]
pub struct UnknownError {
    pub status_code: Option<u16>,
    pub message: Option<String>,
    pub details: Vec<ErrorDetail>,
    pub repr: String,
    pub trace: Option<String>,
}

impl fmt::Display for UnknownError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str(&self.repr),
        }
    }
}

impl ApplicationError {
    #[track_caller]
    pub fn validation<I, D>(details: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<ErrorDetail>,
    {
        Self::Operational(OperationalError::with_details(400, "Validation failed", details))
    }

    #[track_caller]
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::Operational(OperationalError::new(400, msg))
    }

    #[track_caller]
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Operational(OperationalError::new(401, msg))
    }

    #[track_caller]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::Operational(OperationalError::new(404, msg))
    }

    #[track_caller]
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Operational(OperationalError::new(409, msg))
    }

    #[track_caller]
    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Operational(OperationalError::new(500, msg))
    }

    /// Turns a caught panic payload into an unexpected-defect error.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let text = if let Some(s) = payload.downcast_ref::<&'static str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };

        Self::Unknown(UnknownError {
            repr: format!("handler panicked: {text}"),
            ..UnknownError::default()
        })
    }

    /// Status resolved by the classification table. Not range-checked.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Operational(err) => err.status_code(),
            Self::TokenInvalid(_) | Self::TokenExpired(_) => 401,
            Self::DuplicateKey(_) => 409,
            Self::MissingReference(_) => 400,
            Self::Unknown(err) => err.status_code.unwrap_or(FALLBACK_STATUS),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Operational(err) => err.message(),
            Self::TokenInvalid(_) => INVALID_TOKEN_MESSAGE,
            Self::TokenExpired(_) => EXPIRED_TOKEN_MESSAGE,
            Self::DuplicateKey(_) => DUPLICATE_ENTRY_MESSAGE,
            Self::MissingReference(_) => MISSING_REFERENCE_MESSAGE,
            Self::Unknown(err) => err.message.as_deref().unwrap_or(FALLBACK_MESSAGE),
        }
    }

    pub fn details(&self) -> &[ErrorDetail] {
        match self {
            Self::Operational(err) => err.details(),
            Self::TokenInvalid(d)
            | Self::TokenExpired(d)
            | Self::DuplicateKey(d)
            | Self::MissingReference(d) => &d.details,
            Self::Unknown(err) => &err.details,
        }
    }

    pub fn is_operational(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Diagnostic trace for logs and development responses.
    pub fn stack(&self) -> String {
        match self {
            Self::Operational(err) => err.stack(),
            Self::TokenInvalid(d)
            | Self::TokenExpired(d)
            | Self::DuplicateKey(d)
            | Self::MissingReference(d) => d.trace.clone().unwrap_or_else(|| d.repr.clone()),
            Self::Unknown(err) => err.trace.clone().unwrap_or_else(|| err.repr.clone()),
        }
    }
}

impl From<OperationalError> for ApplicationError {
    fn from(value: OperationalError) -> Self {
        Self::Operational(value)
    }
}

impl From<DomainError> for ApplicationError {
    #[track_caller]
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(problems) => Self::validation(problems),
            DomainError::Conflict(msg) => Self::conflict(msg),
            err @ DomainError::Persistence(_) => Self::Unknown(UnknownError {
                message: Some(err.to_string()),
                repr: format!("{err:?}"),
                ..UnknownError::default()
            }),
        }
    }
}

impl From<ForeignError> for ApplicationError {
    fn from(value: ForeignError) -> Self {
        classify(&value)
    }
}

impl From<jsonwebtoken::errors::Error> for ApplicationError {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        classify(&value)
    }
}

impl From<sqlx::Error> for ApplicationError {
    fn from(value: sqlx::Error) -> Self {
        classify(&value)
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(value: anyhow::Error) -> Self {
        let value = match value.downcast::<ApplicationError>() {
            Ok(err) => return err,
            Err(other) => other,
        };
        let value = match value.downcast::<OperationalError>() {
            Ok(err) => return err.into(),
            Err(other) => other,
        };
        let value = match value.downcast::<DomainError>() {
            Ok(err) => return err.into(),
            Err(other) => other,
        };
        let value = match value.downcast::<jsonwebtoken::errors::Error>() {
            Ok(err) => return err.into(),
            Err(other) => other,
        };
        let value = match value.downcast::<sqlx::Error>() {
            Ok(err) => return err.into(),
            Err(other) => other,
        };

        Self::Unknown(UnknownError {
            message: Some(value.to_string()),
            repr: format!("{value:?}"),
            ..UnknownError::default()
        })
    }
}
