use std::io;

use jobsee_core::{ErrorInfo, ErrorKind, FetchRequest, JobRecord};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    FetchCompleted {
        request: FetchRequest,
        result: Result<Vec<JobRecord>, ResourceError>,
    },
}

/// Failure of a single resource request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("http status {status}")]
    Response { status: u16 },
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("invalid payload: {0}")]
    Payload(String),
}

impl ResourceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResourceError::Network(_) | ResourceError::Timeout(_) => ErrorKind::Network,
            ResourceError::Response { status } => ErrorKind::Response { code: *status },
            ResourceError::InvalidUrl(_)
            | ResourceError::TooLarge { .. }
            | ResourceError::Payload(_) => ErrorKind::Payload,
        }
    }
}

impl From<&ResourceError> for ErrorInfo {
    fn from(err: &ResourceError) -> Self {
        ErrorInfo::new(err.kind(), err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] ResourceError),
}
