use std::collections::BTreeMap;
use std::fmt;

/// Endpoint serving keyword searches.
pub const SEARCH_ENDPOINT: &str = "search";
/// Endpoint serving a single job by id.
pub const JOB_DETAILS_ENDPOINT: &str = "job-details";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(text) => f.write_str(text),
            ParamValue::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Number(i64::from(value))
    }
}

/// Identifies one remote request: an endpoint plus its query parameters.
///
/// Parameters are kept sorted by key, so two descriptors compare equal exactly
/// when their endpoints and every key/value pair match, regardless of the
/// order in which parameters were added.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryDescriptor {
    endpoint: String,
    params: BTreeMap<String, ParamValue>,
}

impl QueryDescriptor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// `search?query=<query>&num_pages=<num_pages>`
    pub fn search(query: impl Into<String>, num_pages: u32) -> Self {
        Self::new(SEARCH_ENDPOINT)
            .with_param("query", query.into())
            .with_param("num_pages", num_pages)
    }

    /// `job-details?job_id=<job_id>`
    pub fn job_details(job_id: impl Into<String>) -> Self {
        Self::new(JOB_DETAILS_ENDPOINT).with_param("job_id", job_id.into())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn param(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Query pairs in key order, values rendered as strings.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.to_string()))
    }
}

impl fmt::Display for QueryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.endpoint)?;
        for (index, (key, value)) in self.params.iter().enumerate() {
            let sep = if index == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_insertion_order() {
        let a = QueryDescriptor::new("search")
            .with_param("query", "rust")
            .with_param("num_pages", 1u32);
        let b = QueryDescriptor::new("search")
            .with_param("num_pages", 1u32)
            .with_param("query", "rust");
        assert_eq!(a, b);
        assert_eq!(a, QueryDescriptor::search("rust", 1));
    }

    #[test]
    fn text_and_number_params_are_distinct() {
        let text = QueryDescriptor::new("search").with_param("num_pages", "1");
        let number = QueryDescriptor::new("search").with_param("num_pages", 1u32);
        assert_ne!(text, number);
    }

    #[test]
    fn display_renders_sorted_query() {
        let descriptor = QueryDescriptor::search("React developer", 1);
        assert_eq!(
            descriptor.to_string(),
            "search?num_pages=1&query=React developer"
        );
        assert_eq!(
            QueryDescriptor::job_details("abc").to_string(),
            "job-details?job_id=abc"
        );
    }
}
