use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{endpoints, AnalysisPayload, ApiConfig, ApiError, UploadEnvelope};

/// A locally selected document ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Anything that can analyse a document. The upload flow depends on this seam
/// rather than on [`ApiClient`] directly.
#[allow(async_fn_in_trait)]
pub trait DocumentService {
    async fn upload_document(&self, file: DocumentFile) -> Result<UploadEnvelope, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// POST the file as multipart form data (field `file`).
    pub async fn upload_document(&self, file: DocumentFile) -> Result<UploadEnvelope, ApiError> {
        let url = self.config.endpoint(endpoints::UPLOAD);
        info!(
            name = %file.name,
            mime = %file.mime,
            size = file.bytes.len(),
            %url,
            "uploading document"
        );

        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(&file.mime)?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let body = read_success_body(response).await?;
        let envelope = decode_upload(&body)?;
        debug!("analysis payload decoded");
        Ok(envelope)
    }

    /// Company profile used by the backend's rule engine; returned unmodified.
    pub async fn get_company_config(&self) -> Result<Value, ApiError> {
        self.get_json(endpoints::COMPANY_CONFIG).await
    }

    /// Compliance rule catalogue; returned unmodified.
    pub async fn get_compliance_rules(&self) -> Result<Value, ApiError> {
        self.get_json(endpoints::COMPLIANCE_RULES).await
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.config.endpoint(path);
        debug!(%url, "fetching");

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let body = read_success_body(response).await?;
        serde_json::from_slice(&body).map_err(|_| ApiError::InvalidResponse)
    }
}

impl DocumentService for ApiClient {
    async fn upload_document(&self, file: DocumentFile) -> Result<UploadEnvelope, ApiError> {
        ApiClient::upload_document(self, file).await
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        // An unreadable error body just means there is no `detail` to show.
        let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        let message = error_message(status.as_u16(), &body);
        warn!(status = status.as_u16(), %message, "backend returned an error");
        return Err(ApiError::Http {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.bytes().await?.to_vec())
}

/// Message for a failed call: the body's `detail` if present, else a generic
/// status line.
pub(crate) fn error_message(status: u16, body: &[u8]) -> String {
    let detail = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned());

    match detail {
        Some(Value::String(text)) if !text.is_empty() => text,
        Some(Value::Null) | Some(Value::String(_)) | None => {
            format!("HTTP error! status: {status}")
        }
        Some(Value::Bool(false)) => format!("HTTP error! status: {status}"),
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => {
            format!("HTTP error! status: {status}")
        }
        // Validation errors arrive as structured detail; show them as JSON text.
        Some(other) => other.to_string(),
    }
}

pub(crate) fn decode_upload(body: &[u8]) -> Result<UploadEnvelope, ApiError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| ApiError::InvalidResponse)?;
    if !value.is_object() {
        return Err(ApiError::InvalidResponse);
    }

    let results: AnalysisPayload =
        serde_json::from_value(value).map_err(|_| ApiError::InvalidResponse)?;
    Ok(UploadEnvelope {
        results: Some(results),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Field;
    use serde_json::json;

    #[test]
    fn detail_is_used_as_message() {
        let body = br#"{"detail":"OCR failed"}"#;
        assert_eq!(error_message(500, body), "OCR failed");
    }

    #[test]
    fn missing_detail_falls_back_to_status() {
        assert_eq!(error_message(502, b"<html>bad gateway</html>"), "HTTP error! status: 502");
        assert_eq!(error_message(404, br#"{"error":"nope"}"#), "HTTP error! status: 404");
        assert_eq!(error_message(400, br#"{"detail":""}"#), "HTTP error! status: 400");
        assert_eq!(error_message(500, b""), "HTTP error! status: 500");
        assert_eq!(error_message(500, br#"{"detail":0}"#), "HTTP error! status: 500");
        assert_eq!(error_message(500, br#"{"detail":false}"#), "HTTP error! status: 500");
        assert_eq!(error_message(500, br#"{"detail":7}"#), "7");
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let body = br#"{"detail":[{"loc":["file"],"msg":"field required"}]}"#;
        let message = error_message(422, body);
        assert!(message.contains("field required"));
    }

    #[test]
    fn upload_body_is_wrapped_in_results() {
        let body = serde_json::to_vec(&json!({
            "summary": "Policy covers fire safety.",
            "entities": [{"text": "ACME", "label": "ORG", "severity": "high"}],
            "compliance_report": {"total_clauses": 4},
        }))
        .unwrap();

        let envelope = decode_upload(&body).unwrap();
        let results = envelope.results.expect("results present");
        assert_eq!(results.summary, Field::Text("Policy covers fire safety.".into()));
        assert_eq!(results.entities.count(), 1);
        assert!(results.clause_traceability.is_absent());
    }

    #[test]
    fn non_object_bodies_are_rejected() {
        assert_eq!(decode_upload(b"[1,2,3]"), Err(ApiError::InvalidResponse));
        assert_eq!(decode_upload(b"\"ok\""), Err(ApiError::InvalidResponse));
        assert_eq!(decode_upload(b"null"), Err(ApiError::InvalidResponse));
        assert_eq!(decode_upload(b"not json"), Err(ApiError::InvalidResponse));
    }

    #[test]
    fn invalid_response_message_is_user_facing() {
        assert_eq!(
            ApiError::InvalidResponse.to_string(),
            "Invalid response format from server"
        );
    }

    #[test]
    fn document_file_reports_size() {
        let file = DocumentFile::new("a.txt", "text/plain", vec![0u8; 12]);
        assert_eq!(file.size(), 12);
    }
}
