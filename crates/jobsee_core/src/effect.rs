use crate::{FetchRequest, SharePayload};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Dispatch a request; its outcome comes back as `Msg::FetchCompleted`.
    Fetch(FetchRequest),
    /// Open the platform share sheet.
    Share(SharePayload),
}
