//! `ApiClient` against a local HTTP server.

use api::{ApiClient, ApiConfig, ApiError, DocumentFile, Field};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(format!("{}/api/v1/", server.uri())))
}

fn policy_pdf() -> DocumentFile {
    DocumentFile::new("policy.pdf", "application/pdf", b"%PDF-1.4 fire safety".to_vec())
}

#[tokio::test]
async fn upload_sends_multipart_file_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/documents/upload"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": "Covers fire safety.",
            "entities": [{"text": "ACME", "label": "ORG", "severity": "high"}],
            "compliance_report": {"compliant_requirements": ["Fire exits"]},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let envelope = client_for(&server).upload_document(policy_pdf()).await.unwrap();
    let results = envelope.results.unwrap();
    assert_eq!(results.summary, Field::Text("Covers fire safety.".into()));
    assert_eq!(results.entities.count(), 1);
    assert!(results.clause_traceability.is_absent());

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data"), "{content_type}");

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains(r#"name="file"; filename="policy.pdf""#), "{body}");
    assert!(body.contains("application/pdf"), "{body}");
    assert!(body.contains("%PDF-1.4 fire safety"), "{body}");
}

#[tokio::test]
async fn upload_failure_surfaces_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/documents/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "OCR failed"})))
        .mount(&server)
        .await;

    let err = client_for(&server).upload_document(policy_pdf()).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Http {
            status: 500,
            message: "OCR failed".into()
        }
    );
    assert_eq!(err.to_string(), "OCR failed");
}

#[tokio::test]
async fn upload_rejects_non_object_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/documents/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "an", "object"])))
        .mount(&server)
        .await;

    let err = client_for(&server).upload_document(policy_pdf()).await.unwrap_err();
    assert_eq!(err, ApiError::InvalidResponse);
    assert_eq!(err.to_string(), "Invalid response format from server");
}

#[tokio::test]
async fn config_calls_return_body_unmodified() {
    let server = MockServer::start().await;
    let company = json!({"name": "ACME", "sites": [{"id": 1, "country": "ES"}], "audited": null});
    let rules = json!([{"id": "R-1", "title": {"title": "Fire exits"}}, 42]);
    Mock::given(method("GET"))
        .and(path("/api/v1/config/company"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(company.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/config/rules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rules.clone()))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_company_config().await.unwrap(), company);
    assert_eq!(client.get_compliance_rules().await.unwrap(), rules);
}

#[tokio::test]
async fn config_errors_follow_the_same_contract() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/config/company"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "Not allowed"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/config/rules"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>missing</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.get_company_config().await.unwrap_err().to_string(), "Not allowed");
    assert_eq!(
        client.get_compliance_rules().await.unwrap_err().to_string(),
        "HTTP error! status: 404"
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Nothing listens on the discard port.
    let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9/api/v1"));
    let err = client.get_company_config().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)), "{err:?}");
}
