use std::time::Duration;

use jobsee_core::{ErrorInfo, ErrorKind, QueryDescriptor};
use jobsee_engine::{ApiSettings, ReqwestResourceClient, ResourceClient, ResourceError};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestResourceClient {
    ReqwestResourceClient::new(ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    })
    .expect("client")
}

#[tokio::test]
async fn search_sends_query_and_decodes_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "React developer"))
        .and(query_param("num_pages", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "data": [
                { "job_id": "1", "job_title": "Frontend Engineer", "employer_name": "Acme" },
                { "job_id": "2", "job_title": "React Developer" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = client_for(&server)
        .fetch(&QueryDescriptor::search("React developer", 1))
        .await
        .expect("fetch ok");

    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].job_title.as_deref(), Some("Frontend Engineer"));
    assert_eq!(jobs[1].employer_name, None);
}

#[tokio::test]
async fn empty_result_is_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let jobs = client_for(&server)
        .fetch(&QueryDescriptor::search("nothing", 1))
        .await
        .expect("fetch ok");
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn server_error_maps_to_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/job-details"))
        .and(query_param("job_id", "abc"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch(&QueryDescriptor::job_details("abc"))
        .await
        .unwrap_err();

    assert_eq!(err, ResourceError::Response { status: 500 });
    assert_eq!(
        ErrorInfo::from(&err).kind,
        ErrorKind::Response { code: 500 }
    );
}

#[tokio::test]
async fn api_key_is_sent_with_host() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/job-details"))
        .and(header("X-RapidAPI-Key", "secret"))
        .and(header("X-RapidAPI-Host", "127.0.0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "job_id": "abc" }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestResourceClient::new(ApiSettings {
        base_url: server.uri(),
        api_key: Some("secret".to_string()),
        ..ApiSettings::default()
    })
    .unwrap();

    let jobs = client
        .fetch(&QueryDescriptor::job_details("abc"))
        .await
        .expect("fetch ok");
    assert_eq!(jobs[0].job_id.as_deref(), Some("abc"));
}

#[tokio::test]
async fn slow_response_times_out_as_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "data": [] })),
        )
        .mount(&server)
        .await;

    let client = ReqwestResourceClient::new(ApiSettings {
        base_url: server.uri(),
        request_timeout: Some(Duration::from_millis(50)),
        ..ApiSettings::default()
    })
    .unwrap();

    let err = client
        .fetch(&QueryDescriptor::search("slow", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ResourceError::Timeout(_)), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::Network);
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    // Nothing listens on port 1.
    let client = ReqwestResourceClient::new(ApiSettings {
        base_url: "http://127.0.0.1:1".to_string(),
        connect_timeout: Some(Duration::from_secs(2)),
        ..ApiSettings::default()
    })
    .unwrap();

    let err = client
        .fetch(&QueryDescriptor::search("offline", 1))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network, "{err:?}");
}

#[tokio::test]
async fn rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"job_id\":\"123456\"}]"))
        .mount(&server)
        .await;

    let client = ReqwestResourceClient::new(ApiSettings {
        base_url: server.uri(),
        max_bytes: 10,
        ..ApiSettings::default()
    })
    .unwrap();

    let err = client
        .fetch(&QueryDescriptor::search("big", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ResourceError::TooLarge { max_bytes: 10, .. }), "{err:?}");
    assert_eq!(err.kind(), ErrorKind::Payload);
}

#[tokio::test]
async fn non_json_body_is_payload_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .fetch(&QueryDescriptor::search("html", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, ResourceError::Payload(_)), "{err:?}");
}
