//! Analysis results: normalisation of the backend payload, derived
//! aggregates, the results panels and the PDF report.

pub mod aggregates;
pub mod charts;
pub mod export;
pub mod normalize;
pub mod pdf;
pub mod tabs;
pub mod view;

pub use aggregates::{
    label_histogram, ComplianceDistribution, LabelBucket, RiskTone, SeverityFilter,
};
pub use normalize::{
    clause_rows, entity_rows, requirement_labels, AnalysisView, ClauseDetail, ClauseRow,
    ComplianceStats, EntityRow,
};
pub use pdf::{analysis_report, REPORT_FILENAME};
pub use view::{stat_cards, AnalysisResults, StatCard, StatGrid};
