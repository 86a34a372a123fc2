use crate::{JobSummary, Tab, TabContent};

/// Inline message shown when the last fetch failed.
pub const ERROR_MESSAGE: &str = "Something went wrong";
/// Inline message shown when the last fetch succeeded with nothing.
pub const EMPTY_MESSAGE: &str = "No data found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub title: String,
    pub body: BodyView,
    /// Pull-to-refresh spinner; independent of the body.
    pub refreshing: bool,
    /// Blocking alert the user has to dismiss.
    pub alert: Option<String>,
    pub dirty: bool,
}

impl AppViewModel {
    /// True once the body shows a result rather than a spinner and no
    /// refresh is pending.
    pub fn is_settled(&self) -> bool {
        !self.refreshing && !matches!(self.body, BodyView::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Loading,
    Failed { message: String },
    Empty { message: String },
    Jobs(Vec<JobSummary>),
    Detail(DetailView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub header: JobHeaderView,
    pub tabs: Vec<TabView>,
    pub content: TabContent,
    pub footer_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHeaderView {
    pub title: String,
    pub employer_name: String,
    pub employer_logo: Option<String>,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabView {
    pub tab: Tab,
    pub active: bool,
}
