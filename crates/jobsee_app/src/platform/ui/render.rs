use jobsee_core::{AppViewModel, BodyView, DetailView, JobSummary, TabContent, TabView};

use super::constants::*;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let heading = if view.refreshing {
        format!("== {} == {}", view.title, REFRESHING_LABEL)
    } else {
        format!("== {} ==", view.title)
    };
    lines.push(heading);

    match &view.body {
        BodyView::Loading => lines.push(LOADING_LABEL.to_string()),
        BodyView::Failed { message } | BodyView::Empty { message } => lines.push(message.clone()),
        BodyView::Jobs(jobs) => lines.extend(jobs.iter().map(format_job_card)),
        BodyView::Detail(detail) => render_detail(&mut lines, detail),
    }

    if let Some(alert) = &view.alert {
        lines.push(String::new());
        lines.push(format!("! {alert} (type 'ok' to dismiss)"));
    }

    lines
}

fn format_job_card(job: &JobSummary) -> String {
    let id = job
        .job_id
        .as_deref()
        .map(|id| format!(" [{id}]"))
        .unwrap_or_default();
    format!("- {} | {} | {}{}", job.title, job.employer_name, job.country, id)
}

fn render_detail(lines: &mut Vec<String>, detail: &DetailView) {
    let header = &detail.header;
    lines.push(header.title.clone());
    lines.push(format!("{} / {}", header.employer_name, header.location));
    if let Some(logo) = &header.employer_logo {
        lines.push(format!("Logo: {logo}"));
    }
    lines.push(String::new());
    lines.push(format_tab_strip(&detail.tabs));
    lines.push(String::new());

    match &detail.content {
        TabContent::About { info } => {
            lines.push("About the job:".to_string());
            lines.extend(info.lines().map(ToOwned::to_owned));
        }
        TabContent::Points { title, points } => {
            lines.push(format!("{title}:"));
            lines.extend(points.iter().map(|point| format!("  * {point}")));
        }
    }

    lines.push(String::new());
    lines.push(format!("Apply: {}", detail.footer_link));
}

fn format_tab_strip(tabs: &[TabView]) -> String {
    tabs.iter()
        .map(|view| {
            if view.active {
                format!("[{}]", view.tab)
            } else {
                format!(" {} ", view.tab)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
