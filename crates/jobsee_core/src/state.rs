use jobsee_logging::jobsee_warn;

use crate::view_model::{
    AppViewModel, BodyView, DetailView, JobHeaderView, TabView, EMPTY_MESSAGE, ERROR_MESSAGE,
};
use crate::{
    render_for, ErrorInfo, FetchController, FetchRequest, FetchState, FetchStatus, JobDetail,
    JobRecord, JobSummary, QueryDescriptor, RequestId, Tab,
};

/// Which screen a state instance drives, and the request behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Search { query: String, num_pages: u32 },
    JobDetails { job_id: String },
}

impl Screen {
    pub fn descriptor(&self) -> QueryDescriptor {
        match self {
            Screen::Search { query, num_pages } => {
                QueryDescriptor::search(query.as_str(), *num_pages)
            }
            Screen::JobDetails { job_id } => QueryDescriptor::job_details(job_id.as_str()),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Screen::Search { query, .. } => format!("Jobs for \"{query}\""),
            Screen::JobDetails { .. } => "Job details".to_string(),
        }
    }
}

/// State owned by one screen instance. Dropping it discards the controller
/// and any results still in flight are ignored by whoever receives them.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    screen: Screen,
    fetch: FetchController,
    active_tab: Tab,
    summaries: Vec<JobSummary>,
    detail: Option<JobDetail>,
    alert: Option<String>,
    dirty: bool,
}

impl AppState {
    /// Opens `screen`; the returned request must be dispatched.
    pub fn open(screen: Screen) -> (Self, FetchRequest) {
        let (fetch, request) = FetchController::create(screen.descriptor());
        let state = Self {
            screen,
            fetch,
            active_tab: Tab::default(),
            summaries: Vec::new(),
            detail: None,
            alert: None,
            dirty: true,
        };
        (state, request)
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.fetch.state()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn detail(&self) -> Option<&JobDetail> {
        self.detail.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            title: self.screen.title(),
            body: self.body_view(),
            refreshing: self.fetch.is_refreshing(),
            alert: self.alert.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn change_screen(&mut self, screen: Screen) -> Option<FetchRequest> {
        let request = self.fetch.set_descriptor(screen.descriptor());
        if request.is_some() {
            self.active_tab = Tab::default();
            self.summaries.clear();
            self.detail = None;
            self.mark_dirty();
        }
        self.screen = screen;
        request
    }

    pub(crate) fn refetch(&mut self) -> FetchRequest {
        let was_refreshing = self.fetch.is_refreshing();
        let request = self.fetch.refetch();
        if !was_refreshing {
            self.mark_dirty();
        }
        request
    }

    pub(crate) fn apply_fetch_result(
        &mut self,
        request_id: RequestId,
        descriptor: &QueryDescriptor,
        result: Result<Vec<JobRecord>, ErrorInfo>,
    ) {
        // Stale failures are logged at debug by the controller.
        let failure = result.as_ref().err().cloned();
        if !self.fetch.complete(request_id, descriptor, result) {
            return;
        }
        if let Some(error) = failure {
            jobsee_warn!("Fetch {} failed for {}: {}", request_id, descriptor, error);
        }
        self.ingest();
        self.mark_dirty();
    }

    pub(crate) fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.mark_dirty();
        }
    }

    pub(crate) fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
        self.mark_dirty();
    }

    pub(crate) fn dismiss_alert(&mut self) {
        if self.alert.take().is_some() {
            self.mark_dirty();
        }
    }

    // Normalizes fresh results once so views never handle missing fields.
    fn ingest(&mut self) {
        let data = &self.fetch.state().data;
        match self.screen {
            Screen::Search { .. } => {
                self.summaries = data.iter().map(JobSummary::from_record).collect();
                self.detail = None;
            }
            Screen::JobDetails { .. } => {
                self.summaries.clear();
                self.detail = data.first().map(JobDetail::from_record);
            }
        }
    }

    fn body_view(&self) -> BodyView {
        let state = self.fetch.state();
        match state.status {
            FetchStatus::Idle | FetchStatus::Loading => BodyView::Loading,
            FetchStatus::Error => BodyView::Failed {
                message: ERROR_MESSAGE.to_string(),
            },
            FetchStatus::Success => match (&self.screen, &self.detail) {
                (Screen::Search { .. }, _) if !self.summaries.is_empty() => {
                    BodyView::Jobs(self.summaries.clone())
                }
                (Screen::JobDetails { .. }, Some(detail)) => {
                    BodyView::Detail(self.detail_view(detail))
                }
                _ => BodyView::Empty {
                    message: EMPTY_MESSAGE.to_string(),
                },
            },
        }
    }

    fn detail_view(&self, detail: &JobDetail) -> DetailView {
        DetailView {
            header: JobHeaderView {
                title: detail.title.clone(),
                employer_name: detail.employer_name.clone(),
                employer_logo: detail.employer_logo.clone(),
                location: detail.location.clone(),
            },
            tabs: Tab::ALL
                .into_iter()
                .map(|tab| TabView {
                    tab,
                    active: tab == self.active_tab,
                })
                .collect(),
            content: render_for(self.active_tab, detail),
            footer_link: detail.listing_link.clone(),
        }
    }
}
