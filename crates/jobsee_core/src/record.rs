use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text shown for any record field the remote API left out.
pub const MISSING_FIELD: &str = "N/A";
/// Text shown when a record carries no description.
pub const NO_DESCRIPTION: &str = "No data provided";

/// Highlight category holding required qualifications.
pub const QUALIFICATIONS: &str = "Qualifications";
/// Highlight category holding job responsibilities.
pub const RESPONSIBILITIES: &str = "Responsibilities";

/// One job listing as returned by the search API.
///
/// Every field is optional: the API omits fields freely and nothing here is
/// validated beyond its JSON type. Fields this schema does not name are kept
/// in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub employer_name: Option<String>,
    #[serde(default)]
    pub employer_logo: Option<String>,
    #[serde(default)]
    pub job_country: Option<String>,
    #[serde(default)]
    pub job_city: Option<String>,
    #[serde(default)]
    pub job_employment_type: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub job_highlights: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub job_apply_link: Option<String>,
    #[serde(default)]
    pub job_google_link: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl JobRecord {
    fn highlight(&self, category: &str) -> Option<&Vec<String>> {
        self.job_highlights.as_ref()?.get(category)
    }
}

/// Card shown for a record in a result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub job_id: Option<String>,
    pub title: String,
    pub employer_name: String,
    pub employer_logo: Option<String>,
    pub country: String,
}

impl JobSummary {
    pub fn from_record(record: &JobRecord) -> Self {
        Self {
            job_id: non_blank(&record.job_id),
            title: text_or_missing(&record.job_title),
            employer_name: text_or_missing(&record.employer_name),
            employer_logo: non_blank(&record.employer_logo),
            country: text_or_missing(&record.job_country),
        }
    }
}

/// Fully defaulted projection of a record used by the detail screen.
///
/// Built once when a record is ingested; consumers never see a missing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDetail {
    pub title: String,
    pub employer_name: String,
    pub employer_logo: Option<String>,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub qualifications: Vec<String>,
    pub responsibilities: Vec<String>,
    pub apply_link: String,
    /// Link shown in the footer and attached to shares: the Google listing,
    /// else the apply link.
    pub listing_link: String,
}

impl JobDetail {
    pub fn from_record(record: &JobRecord) -> Self {
        let apply_link = non_blank(&record.job_apply_link);
        let listing_link = non_blank(&record.job_google_link).or_else(|| apply_link.clone());

        Self {
            title: text_or_missing(&record.job_title),
            employer_name: text_or_missing(&record.employer_name),
            employer_logo: non_blank(&record.employer_logo),
            location: text_or_missing(&record.job_country),
            employment_type: text_or_missing(&record.job_employment_type),
            description: non_blank(&record.job_description)
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            qualifications: points_or_missing(record.highlight(QUALIFICATIONS)),
            responsibilities: points_or_missing(record.highlight(RESPONSIBILITIES)),
            apply_link: apply_link.unwrap_or_else(|| MISSING_FIELD.to_string()),
            listing_link: listing_link.unwrap_or_else(|| MISSING_FIELD.to_string()),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

fn text_or_missing(value: &Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| MISSING_FIELD.to_string())
}

// An empty category renders the same as an absent one.
fn points_or_missing(points: Option<&Vec<String>>) -> Vec<String> {
    match points {
        Some(points) if !points.is_empty() => points.clone(),
        _ => vec![MISSING_FIELD.to_string()],
    }
}
