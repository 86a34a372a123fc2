use std::fmt;

use crate::JobRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connectivity, DNS or timeout.
    Network,
    /// The server answered with a non-2xx status.
    Response { code: u16 },
    /// The body could not be read as a job list.
    Payload,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::Response { code } => write!(f, "http status {code}"),
            ErrorKind::Payload => write!(f, "invalid payload"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Request lifecycle of one remote resource.
///
/// `data` is always a list. It is empty unless `status` is `Success`, and
/// `error` is set only when `status` is `Error`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchState {
    pub status: FetchStatus,
    pub data: Vec<JobRecord>,
    pub error: Option<ErrorInfo>,
}

impl FetchState {
    pub fn loading() -> Self {
        Self {
            status: FetchStatus::Loading,
            ..Self::default()
        }
    }

    pub fn succeeded(data: Vec<JobRecord>) -> Self {
        Self {
            status: FetchStatus::Success,
            data,
            error: None,
        }
    }

    pub fn failed(error: ErrorInfo) -> Self {
        Self {
            status: FetchStatus::Error,
            data: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }
}
