//! Projection of a loosely-typed [`AnalysisPayload`] into [`AnalysisView`].
//!
//! This is the only place that looks at payload shapes. Every leaf of the
//! view is a `String` (or a count), so components cannot render a raw JSON
//! object by accident. The payload is only borrowed; building the view twice
//! yields equal views.

use api::{AnalysisPayload, Field};
use serde_json::Value;

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NOT_AN_ARRAY: &str = "Not an array";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalysisView {
    /// `None` when the backend sent nothing worth showing.
    pub summary: Option<String>,
    pub stats: ComplianceStats,
    pub compliant: Vec<String>,
    pub missing: Vec<String>,
    pub pending: Vec<String>,
    pub entities: Vec<EntityRow>,
    pub clauses: Vec<ClauseRow>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplianceStats {
    pub total_requirements: String,
    pub compliant: usize,
    pub missing: usize,
    pub pending: usize,
    pub risk_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRow {
    pub text: String,
    pub label: String,
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseRow {
    Valid(ClauseDetail),
    /// The clause value was not an object.
    Invalid { key: String },
}

impl ClauseRow {
    pub fn key(&self) -> &str {
        match self {
            ClauseRow::Valid(detail) => &detail.key,
            ClauseRow::Invalid { key } => key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseDetail {
    pub key: String,
    pub id: String,
    pub title: String,
    pub status: String,
    pub severity: String,
    pub recommendation: String,
    pub required: String,
    pub matched_paragraphs: String,
}

impl AnalysisView {
    pub fn from_payload(payload: &AnalysisPayload) -> Self {
        let report = &payload.compliance_report;
        let compliant = requirement_labels(&report.get("compliant_requirements"));
        let missing = requirement_labels(&report.get("missing_requirements"));
        let pending = requirement_labels(&report.get("pending_requirements"));

        let stats = ComplianceStats {
            total_requirements: report.get("total_clauses").text_or("0"),
            compliant: compliant.len(),
            missing: missing.len(),
            pending: pending.len(),
            risk_level: report.get("risk_level").text_or(UNKNOWN),
        };

        Self {
            summary: summary_text(&payload.summary),
            stats,
            compliant,
            missing,
            pending,
            entities: entity_rows(&payload.entities),
            clauses: clause_rows(&payload.clause_traceability),
        }
    }
}

fn summary_text(summary: &Field) -> Option<String> {
    if !summary.is_truthy() {
        return None;
    }
    let text = summary.text_or("");
    (!text.trim().is_empty()).then_some(text)
}

/// Labels of a requirement list: a nested `title`, else the value itself,
/// else [`UNKNOWN`]. A list of the wrong shape counts as empty.
pub fn requirement_labels(list: &Field) -> Vec<String> {
    list.items()
        .unwrap_or_default()
        .iter()
        .map(|item| Field::from(item).text_or(UNKNOWN))
        .collect()
}

pub fn entity_rows(entities: &Field) -> Vec<EntityRow> {
    entities
        .items()
        .unwrap_or_default()
        .iter()
        .map(|item| {
            let entity = Field::from(item);
            EntityRow {
                text: entity.get("text").text_or(UNKNOWN),
                label: entity.get("label").text_or(UNKNOWN),
                severity: entity.get("severity").text_or("low"),
            }
        })
        .collect()
}

/// Clauses in backend order.
pub fn clause_rows(clauses: &Field) -> Vec<ClauseRow> {
    let Some(entries) = clauses.entries() else {
        return Vec::new();
    };
    entries
        .iter()
        .map(|(key, value)| match value {
            Value::Object(_) => ClauseRow::Valid(clause_detail(key, &Field::from(value))),
            _ => ClauseRow::Invalid { key: key.clone() },
        })
        .collect()
}

fn clause_detail(key: &str, clause: &Field) -> ClauseDetail {
    ClauseDetail {
        key: key.to_string(),
        id: clause.get("id").text_or(NOT_AVAILABLE),
        title: clause.get("title").text_or(NOT_AVAILABLE),
        status: clause.get("status").text_or(NOT_AVAILABLE),
        severity: clause.get("severity").text_or(NOT_AVAILABLE),
        recommendation: clause.get("recommendation").text_or(NOT_AVAILABLE),
        required: clause.get("required").text_or("false"),
        matched_paragraphs: matched_paragraphs(&clause.get("matched_paragraphs")),
    }
}

fn matched_paragraphs(field: &Field) -> String {
    match field {
        Field::Sequence(items) => items.len().to_string(),
        other if !other.is_truthy() => "0".to_string(),
        _ => NOT_AN_ARRAY.to_string(),
    }
}
