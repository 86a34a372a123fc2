//! Jobsee engine: HTTP resource client, effect execution and share sheets.
mod client;
mod engine;
mod share;
mod types;

pub use client::{
    decode_jobs, ApiSettings, ReqwestResourceClient, ResourceClient, API_HOST_HEADER,
    API_KEY_HEADER, DEFAULT_BASE_URL,
};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use share::{CommandShareSheet, ShareError, ShareSheet, WriterShareSheet};
pub use types::{EngineError, EngineEvent, ResourceError};
