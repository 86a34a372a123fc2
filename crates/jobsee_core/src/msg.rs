use crate::{ErrorInfo, JobRecord, QueryDescriptor, RequestId, Screen, Tab};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Navigated to another search or job within the same screen instance.
    ScreenChanged(Screen),
    /// Pull-to-refresh gesture.
    RefreshRequested,
    /// Engine finished a request issued by an earlier `Effect::Fetch`.
    FetchCompleted {
        request_id: RequestId,
        descriptor: QueryDescriptor,
        result: Result<Vec<JobRecord>, ErrorInfo>,
    },
    /// User picked a content tab on the detail screen.
    TabSelected(Tab),
    /// User pressed the share button.
    ShareRequested,
    /// The share sheet was cancelled or is unavailable.
    ShareFailed(String),
    /// User closed the alert.
    AlertDismissed,
}
