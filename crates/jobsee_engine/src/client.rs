use std::time::Duration;

use futures_util::StreamExt;
use jobsee_core::{JobRecord, QueryDescriptor};
use jobsee_logging::jobsee_debug;
use serde::Deserialize;
use url::Url;

use crate::ResourceError;

pub const DEFAULT_BASE_URL: &str = "https://jsearch.p.rapidapi.com/";
pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    /// `None` keeps the transport default.
    pub connect_timeout: Option<Duration>,
    /// `None` keeps the transport default.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Issues one GET per call. No retry, no cache.
#[async_trait::async_trait]
pub trait ResourceClient: Send + Sync {
    async fn fetch(&self, descriptor: &QueryDescriptor) -> Result<Vec<JobRecord>, ResourceError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestResourceClient {
    settings: ApiSettings,
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestResourceClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ResourceError> {
        let base_url = parse_base_url(&settings.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ResourceError::Network(err.to_string()))?;

        Ok(Self {
            settings,
            base_url,
            client,
        })
    }

    /// `{base_url}{endpoint}?{params}`
    pub fn request_url(&self, descriptor: &QueryDescriptor) -> Result<Url, ResourceError> {
        let mut url = self
            .base_url
            .join(descriptor.endpoint())
            .map_err(|err| ResourceError::InvalidUrl(err.to_string()))?;

        let mut pairs = descriptor.query_pairs().peekable();
        if pairs.peek().is_some() {
            let mut query = url.query_pairs_mut();
            for (key, value) in pairs {
                query.append_pair(key, &value);
            }
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl ResourceClient for ReqwestResourceClient {
    async fn fetch(&self, descriptor: &QueryDescriptor) -> Result<Vec<JobRecord>, ResourceError> {
        let url = self.request_url(descriptor)?;
        jobsee_debug!("GET {}", url);

        let mut request = self.client.get(url);
        if let Some(key) = self.settings.api_key.as_deref() {
            request = request.header(API_KEY_HEADER, key);
            if let Some(host) = self.base_url.host_str() {
                request = request.header(API_HOST_HEADER, host);
            }
        }

        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResourceError::Response {
                status: status.as_u16(),
            });
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(ResourceError::TooLarge {
                    max_bytes,
                    actual: Some(content_len),
                });
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(ResourceError::TooLarge {
                    max_bytes,
                    actual: Some(next_len),
                });
            }
            bytes.extend_from_slice(&chunk);
        }

        let jobs = decode_jobs(&bytes)?;
        jobsee_debug!("{} returned {} job(s)", descriptor, jobs.len());
        Ok(jobs)
    }
}

// The search API wraps results as `{"status": ..., "data": [...]}`; a bare
// array is accepted too.
#[derive(Deserialize)]
#[serde(untagged)]
enum JobPayload {
    Envelope { data: Vec<JobRecord> },
    List(Vec<JobRecord>),
}

pub fn decode_jobs(bytes: &[u8]) -> Result<Vec<JobRecord>, ResourceError> {
    match serde_json::from_slice::<JobPayload>(bytes) {
        Ok(JobPayload::Envelope { data }) | Ok(JobPayload::List(data)) => Ok(data),
        Err(err) => Err(ResourceError::Payload(err.to_string())),
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ResourceError> {
    // Without the trailing slash `join` would replace the last path segment.
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&normalized).map_err(|err| ResourceError::InvalidUrl(err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ResourceError::InvalidUrl(format!("not a base url: {raw}")));
    }
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> ResourceError {
    if err.is_timeout() {
        return ResourceError::Timeout(err.to_string());
    }
    ResourceError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ReqwestResourceClient {
        ReqwestResourceClient::new(ApiSettings {
            base_url: base_url.to_string(),
            ..ApiSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn request_url_appends_endpoint_and_encoded_query() {
        let url = client("https://api.example.com/v1")
            .request_url(&QueryDescriptor::search("React developer", 1))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/search?num_pages=1&query=React+developer"
        );
    }

    #[test]
    fn request_url_without_params_has_no_query() {
        let url = client("https://api.example.com/")
            .request_url(&QueryDescriptor::new("estimated-salary"))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/estimated-salary");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = ReqwestResourceClient::new(ApiSettings {
            base_url: "not a url".to_string(),
            ..ApiSettings::default()
        })
        .unwrap_err();
        assert!(matches!(err, ResourceError::InvalidUrl(_)));
    }

    #[test]
    fn decodes_envelope_and_bare_list() {
        let envelope = br#"{"status":"OK","request_id":"x","data":[{"job_id":"1"}]}"#;
        let list = br#"[{"job_id":"1"},{"job_id":"2"}]"#;
        assert_eq!(decode_jobs(envelope).unwrap().len(), 1);
        assert_eq!(decode_jobs(list).unwrap().len(), 2);
    }

    #[test]
    fn rejects_non_list_payload() {
        let err = decode_jobs(br#"{"message":"You are not subscribed"}"#).unwrap_err();
        assert!(matches!(err, ResourceError::Payload(_)));
    }
}
