use crate::JobDetail;

/// Message template used when sharing a job.
pub const JOB_SHARE_TEMPLATE: &str = "\u{1F31F}Check out this exciting job opportunity\n\n\
Job Title: [Job Title]\n\
Company: [Company Name]\n\
Location: [Job Location]\n\
Employment Type: [Employment Type]\n\n\
\u{1F517} Job Link: [Insert Job Link Here]\n\n\
Join me in exploring this fantastic job opportunity! It's a perfect match for your skills and career goals. Apply now and take your career to the next level. \u{1F680}\n\n \
Credits: Jobsee App";

/// Everything handed to a share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub message: String,
    pub url: String,
    pub title: String,
}

/// Substitutes the bracketed placeholders in `template` with fields of
/// `detail`. Every occurrence is replaced; unknown brackets are left alone.
pub fn build_share_text(detail: &JobDetail, template: &str) -> String {
    [
        ("[Job Title]", detail.title.as_str()),
        ("[Company Name]", detail.employer_name.as_str()),
        ("[Job Location]", detail.location.as_str()),
        ("[Employment Type]", detail.employment_type.as_str()),
        ("[Insert Job Link Here]", detail.apply_link.as_str()),
    ]
    .into_iter()
    .fold(template.to_string(), |text, (placeholder, value)| {
        text.replace(placeholder, value)
    })
}

pub fn share_payload(detail: &JobDetail) -> SharePayload {
    SharePayload {
        message: build_share_text(detail, JOB_SHARE_TEMPLATE),
        url: detail.listing_link.clone(),
        title: detail.title.clone(),
    }
}
