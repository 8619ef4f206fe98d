use std::fmt;

use bytes::Bytes;
use thiserror::Error;

/// One submission to the backend. Exactly one source is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub source: SubmitSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitSource {
    /// Sent as the `url` text field of the multipart body.
    Url(String),
    /// Sent as the `file` binary field of the multipart body.
    File { name: String, bytes: Bytes },
}

/// Media kind declared by the backend for a completed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

/// A well-formed backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResponse {
    /// `status == "completed"`, with the published artifact.
    Completed { media_url: String, kind: MediaKind },
    /// Any other `status`; `message` is the user-facing text, if any.
    Rejected { message: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SubmitCompleted {
        result: Result<SubmitResponse, SubmitError>,
    },
}

/// Transport-class failure: the request never produced a usable response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct SubmitError {
    pub kind: SubmitFailureKind,
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: SubmitFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailureKind {
    InvalidServerUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedResponse,
}

impl fmt::Display for SubmitFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitFailureKind::InvalidServerUrl => write!(f, "invalid server url"),
            SubmitFailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            SubmitFailureKind::Timeout => write!(f, "timeout"),
            SubmitFailureKind::Network => write!(f, "network error"),
            SubmitFailureKind::MalformedResponse => write!(f, "malformed response"),
        }
    }
}
