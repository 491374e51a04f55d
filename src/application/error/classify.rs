// src/application/error/classify.rs
//! Folds error-shaped values from outside the crate into [`ApplicationError`].
//!
//! The table is evaluated in a fixed order and the first match wins:
//! token name checks, then driver codes, then the error's own status and
//! message.

use super::{ApplicationError, Diagnostic, ErrorDetail, UnknownError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const INVALID_TOKEN_NAME: &str = "JsonWebTokenError";
pub const EXPIRED_TOKEN_NAME: &str = "TokenExpiredError";
pub const DUPLICATE_ENTRY_CODE: &str = "ER_DUP_ENTRY";
pub const NO_REFERENCED_ROW_CODE: &str = "ER_NO_REFERENCED_ROW";

/// The fields classification may look at. Every field is optional.
pub trait ErrorShape: fmt::Debug {
    fn name(&self) -> Option<&str> {
        None
    }

    fn code(&self) -> Option<&str> {
        None
    }

    fn status_code(&self) -> Option<u16> {
        None
    }

    fn message(&self) -> Option<String> {
        None
    }

    fn details(&self) -> Vec<ErrorDetail> {
        Vec::new()
    }

    fn stack(&self) -> Option<String> {
        None
    }
}

pub fn classify(shape: &dyn ErrorShape) -> ApplicationError {
    match shape.name() {
        Some(INVALID_TOKEN_NAME) => return ApplicationError::TokenInvalid(Diagnostic::of(shape)),
        Some(EXPIRED_TOKEN_NAME) => return ApplicationError::TokenExpired(Diagnostic::of(shape)),
        _ => {}
    }

    match shape.code() {
        Some(DUPLICATE_ENTRY_CODE) => return ApplicationError::DuplicateKey(Diagnostic::of(shape)),
        Some(NO_REFERENCED_ROW_CODE) => {
            return ApplicationError::MissingReference(Diagnostic::of(shape));
        }
        _ => {}
    }

    ApplicationError::Unknown(UnknownError {
        status_code: shape.status_code(),
        message: shape.message(),
        details: shape.details(),
        repr: format!("{shape:?}"),
        trace: shape.stack(),
    })
}

/// A loosely shaped error, e.g. one decoded from an upstream service's JSON
/// error body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, rename = "errors", skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ForeignError {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_details<I, D>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<ErrorDetail>,
    {
        self.details = details.into_iter().map(Into::into).collect();
        self
    }
}

impl ErrorShape for ForeignError {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    fn message(&self) -> Option<String> {
        self.message.clone()
    }

    fn details(&self) -> Vec<ErrorDetail> {
        self.details.clone()
    }

    fn stack(&self) -> Option<String> {
        self.stack.clone()
    }
}

impl ErrorShape for jsonwebtoken::errors::Error {
    fn name(&self) -> Option<&str> {
        use jsonwebtoken::errors::ErrorKind;

        match self.kind() {
            ErrorKind::ExpiredSignature => Some(EXPIRED_TOKEN_NAME),
            _ => Some(INVALID_TOKEN_NAME),
        }
    }

    fn message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl ErrorShape for sqlx::Error {
    fn code(&self) -> Option<&str> {
        use sqlx::error::ErrorKind;

        let sqlx::Error::Database(db_err) = self else {
            return None;
        };
        match db_err.kind() {
            ErrorKind::UniqueViolation => Some(DUPLICATE_ENTRY_CODE),
            ErrorKind::ForeignKeyViolation => Some(NO_REFERENCED_ROW_CODE),
            _ => None,
        }
    }

    fn message(&self) -> Option<String> {
        Some(self.to_string())
    }
}
