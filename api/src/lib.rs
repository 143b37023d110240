//! HTTP client for the DocIntel analysis backend.
//!
//! The backend is an external collaborator: this crate only knows how to reach
//! it, how to turn its failures into readable messages, and how to decode its
//! loosely-shaped payloads into [`schema::Field`] values the UI can coerce.

mod client;
mod config;
mod error;
pub mod schema;

pub use client::{ApiClient, DocumentFile, DocumentService};
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use schema::{AnalysisPayload, Field, UploadEnvelope};

/// Endpoint paths, relative to [`ApiConfig::base_url`].
pub mod endpoints {
    pub const UPLOAD: &str = "/documents/upload";
    pub const COMPANY_CONFIG: &str = "/config/company";
    pub const COMPLIANCE_RULES: &str = "/config/rules";
}
