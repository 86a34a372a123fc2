//! Jobsee core: pure request lifecycle, detail-screen state machine and
//! view-model helpers. Nothing in here performs IO.
mod controller;
mod descriptor;
mod detail;
mod effect;
mod fetch_state;
mod msg;
mod record;
mod share;
mod state;
mod update;
mod view_model;

pub use controller::{FetchController, FetchRequest, RequestId};
pub use descriptor::{ParamValue, QueryDescriptor, JOB_DETAILS_ENDPOINT, SEARCH_ENDPOINT};
pub use detail::{render_for, Tab, TabContent, UnknownTab};
pub use effect::Effect;
pub use fetch_state::{ErrorInfo, ErrorKind, FetchState, FetchStatus};
pub use msg::Msg;
pub use record::{JobDetail, JobRecord, JobSummary, MISSING_FIELD, NO_DESCRIPTION};
pub use share::{build_share_text, share_payload, SharePayload, JOB_SHARE_TEMPLATE};
pub use state::{AppState, Screen};
pub use update::{update, NOTHING_TO_SHARE};
pub use view_model::{
    AppViewModel, BodyView, DetailView, JobHeaderView, TabView, EMPTY_MESSAGE, ERROR_MESSAGE,
};
