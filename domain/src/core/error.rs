//! Domain error types

use crate::recommend::domain::Domain;
use serde::Serialize;
use thiserror::Error;

/// Failure categories a request can end in.
///
/// Every failure surfaced to the user (a flow error or a bot message) is
/// classified as exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Required answers are missing. Never reaches the network.
    ValidationIncomplete,
    /// The backend could not be reached.
    TransportUnreachable,
    /// The request exceeded its timeout.
    TransportTimeout,
    /// Non-2xx status, or an explicit error in a 2xx payload.
    BackendError,
    /// 2xx status but the payload does not have the expected shape.
    MalformedResponse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValidationIncomplete => "validation_incomplete",
            ErrorKind::TransportUnreachable => "transport_unreachable",
            ErrorKind::TransportTimeout => "transport_timeout",
            ErrorKind::BackendError => "backend_error",
            ErrorKind::MalformedResponse => "malformed_response",
        }
    }

    /// Generic text shown to the user for this kind of failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::ValidationIncomplete => "필수 항목을 모두 입력해주세요.",
            ErrorKind::TransportUnreachable => {
                "백엔드 서버에 연결할 수 없습니다. 서버가 실행 중인지 확인해주세요."
            }
            ErrorKind::TransportTimeout => {
                "응답 시간이 초과되었습니다. 잠시 후 다시 시도해주세요."
            }
            ErrorKind::BackendError => "서버 오류가 발생했습니다. 잠시 후 다시 시도해주세요.",
            ErrorKind::MalformedResponse => "추천 결과를 불러오지 못했습니다.",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failed request: its category plus the text the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
}

impl Failure {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Failure carrying the generic message for its kind.
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::new(kind, kind.user_message())
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Unknown field '{field}' for {domain} answers")]
    UnknownField { domain: Domain, field: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidAnswer { field: String, reason: String },

    #[error("Malformed {domain} response: {reason}")]
    MalformedResponse { domain: Domain, reason: String },

    #[error("Malformed chat response: {0}")]
    MalformedReply(String),

    /// A 2xx payload that carries the backend's own error message
    #[error("Backend reported an error: {0}")]
    BackendReported(String),
}

impl DomainError {
    /// Map this error onto the user-facing taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::UnknownDomain(_)
            | DomainError::UnknownField { .. }
            | DomainError::InvalidAnswer { .. } => ErrorKind::ValidationIncomplete,
            DomainError::MalformedResponse { .. } | DomainError::MalformedReply(_) => {
                ErrorKind::MalformedResponse
            }
            DomainError::BackendReported(_) => ErrorKind::BackendError,
        }
    }

    /// Reduce to what the user sees. Backend messages are shown verbatim;
    /// everything else gets the generic text for its kind.
    pub fn to_failure(&self) -> Failure {
        match self {
            DomainError::BackendReported(message) => {
                Failure::new(ErrorKind::BackendError, message.clone())
            }
            other => Failure::from_kind(other.kind()),
        }
    }
}
