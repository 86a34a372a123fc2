//! Request lifecycle for one remote resource.
//!
//! The controller never performs IO. Every operation that needs the network
//! hands back a [`FetchRequest`] for the caller to dispatch, and the outcome is
//! fed back through [`FetchController::complete`]. Requests are numbered; only
//! the most recently issued one may change the state, so a slow response for
//! an old descriptor or an earlier refresh is dropped on arrival.

use jobsee_logging::jobsee_debug;

use crate::{ErrorInfo, FetchState, JobRecord, QueryDescriptor};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: RequestId,
    pub descriptor: QueryDescriptor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchController {
    descriptor: QueryDescriptor,
    state: FetchState,
    last_issued: RequestId,
    refreshing: bool,
}

impl FetchController {
    /// Starts in `Loading` with the first request ready to dispatch.
    pub fn create(descriptor: QueryDescriptor) -> (Self, FetchRequest) {
        let mut controller = Self {
            descriptor,
            state: FetchState::loading(),
            last_issued: 0,
            refreshing: false,
        };
        let request = controller.issue();
        (controller, request)
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn descriptor(&self) -> &QueryDescriptor {
        &self.descriptor
    }

    /// True while a manual refresh is outstanding. Independent of `status`.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Re-issues the current descriptor. `status` keeps its value until the
    /// new result lands.
    pub fn refetch(&mut self) -> FetchRequest {
        self.refreshing = true;
        self.issue()
    }

    /// Switches to `descriptor`. An equal descriptor is a no-op; a different
    /// one resets the state to `Loading` and supersedes anything in flight.
    pub fn set_descriptor(&mut self, descriptor: QueryDescriptor) -> Option<FetchRequest> {
        if descriptor == self.descriptor {
            return None;
        }
        self.descriptor = descriptor;
        self.state = FetchState::loading();
        self.refreshing = false;
        Some(self.issue())
    }

    /// Applies a finished request. Returns `false` when the result is stale
    /// and was discarded.
    pub fn complete(
        &mut self,
        request_id: RequestId,
        descriptor: &QueryDescriptor,
        result: Result<Vec<JobRecord>, ErrorInfo>,
    ) -> bool {
        if request_id != self.last_issued || *descriptor != self.descriptor {
            jobsee_debug!(
                "Discarding stale result request_id={} descriptor={} (current request_id={} descriptor={})",
                request_id,
                descriptor,
                self.last_issued,
                self.descriptor
            );
            return false;
        }

        self.state = match result {
            Ok(data) => FetchState::succeeded(data),
            Err(error) => FetchState::failed(error),
        };
        self.refreshing = false;
        true
    }

    fn issue(&mut self) -> FetchRequest {
        self.last_issued += 1;
        FetchRequest {
            request_id: self.last_issued,
            descriptor: self.descriptor.clone(),
        }
    }
}
