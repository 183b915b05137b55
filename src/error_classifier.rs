//! Failure taxonomy and its mapping to HTTP outcomes.
//!
//! Validation and generation raise [`DomainError`]; only [`classify`] turns
//! one into a status and body. Client mistakes, unexpected faults and server
//! failures land in different status families.

use std::io;
use std::num::ParseIntError;

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::{error, warn};

use crate::sequence_generator::Position;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please provide a valid number";
pub const SIMULATED_FAULT_MARKER: &str = "NPE";
pub const NOT_FOUND_PREFIX: &str = "File not available. Please check the request and try again. ";
pub const STORE_FAILURE_PREFIX: &str = "Could not store the sequence in a file: ";
pub const GENERIC_FAILURE_MESSAGE: &str = "It is not you, it is us! Reach out to mail@domain.com";

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input. Please provide a valid number")]
    InvalidInput { source: ParseIntError },

    #[error("Requested position {position} is too large. Please try again.")]
    OutOfRange { position: Position },

    /// `position` is the one whose Fibonacci value is zero.
    #[error("Division by Zero, produced by the fibonacci of {position}")]
    DivisionByZero { position: Position },

    #[error("simulated fault raised by sentinel input")]
    SimulatedFault,

    #[error("{name} ({})", describe_io_error(.source))]
    NotFound { name: String, source: io::Error },

    #[error("{}", describe_io_error(.0))]
    InternalIo(#[source] io::Error),

    #[error(transparent)]
    Uncategorized(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    OutOfRange,
    DivisionByZero,
    SimulatedFault,
    NotFound,
    InternalIo,
    Uncategorized,
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidInput { .. } => ErrorKind::InvalidInput,
            DomainError::OutOfRange { .. } => ErrorKind::OutOfRange,
            DomainError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            DomainError::SimulatedFault => ErrorKind::SimulatedFault,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::InternalIo(_) => ErrorKind::InternalIo,
            DomainError::Uncategorized(_) => ErrorKind::Uncategorized,
        }
    }
}

/// OS message of an I/O error without the trailing ` (os error N)`.
pub fn describe_io_error(err: &io::Error) -> String {
    let text = err.to_string();
    match err.raw_os_error() {
        Some(code) => text
            .strip_suffix(&format!(" (os error {})", code))
            .map(str::to_string)
            .unwrap_or(text),
        None => text,
    }
}

impl From<BlockingError> for DomainError {
    fn from(err: BlockingError) -> Self {
        DomainError::Uncategorized(anyhow::anyhow!("blocking task failed: {}", err))
    }
}

/// Status and body emitted for a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub status: StatusCode,
    pub message: String,
}

pub fn classify(err: &DomainError) -> Classification {
    let (status, message) = match err {
        DomainError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
        DomainError::SimulatedFault => {
            (StatusCode::IM_A_TEAPOT, SIMULATED_FAULT_MARKER.to_string())
        }
        DomainError::OutOfRange { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
        DomainError::DivisionByZero { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, format!("{}{}", NOT_FOUND_PREFIX, err)),
        DomainError::InternalIo(source) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("{}{}", STORE_FAILURE_PREFIX, describe_io_error(source)),
        ),
        // Detail stays in the log, never in the body.
        _ => (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE_MESSAGE.to_string()),
    };
    Classification { status, message }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        classify(self).status
    }

    fn error_response(&self) -> HttpResponse {
        let classification = classify(self);
        if classification.status.is_server_error() {
            error!(kind = ?self.kind(), status = classification.status.as_u16(), error = ?self, "request failed");
        } else {
            warn!(kind = ?self.kind(), status = classification.status.as_u16(), "request rejected: {}", self);
        }
        HttpResponse::build(classification.status)
            .content_type("text/plain; charset=utf-8")
            .body(classification.message)
    }
}
