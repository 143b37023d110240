//! Chart-ready numbers derived from an [`AnalysisView`].

use std::collections::HashMap;

use super::{AnalysisView, EntityRow};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelBucket {
    pub label: String,
    pub count: usize,
}

/// Entities per label, labels in first-seen order.
pub fn label_histogram(entities: &[EntityRow]) -> Vec<LabelBucket> {
    let mut buckets: Vec<LabelBucket> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entity in entities {
        match index.get(entity.label.as_str()) {
            Some(&slot) => buckets[slot].count += 1,
            None => {
                index.insert(entity.label.as_str(), buckets.len());
                buckets.push(LabelBucket {
                    label: entity.label.clone(),
                    count: 1,
                });
            }
        }
    }
    buckets
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComplianceDistribution {
    pub compliant: usize,
    pub missing: usize,
    pub pending: usize,
}

impl ComplianceDistribution {
    pub fn of(view: &AnalysisView) -> Self {
        Self {
            compliant: view.stats.compliant,
            missing: view.stats.missing,
            pending: view.stats.pending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeverityFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl SeverityFilter {
    pub const OPTIONS: [SeverityFilter; 4] = [
        SeverityFilter::All,
        SeverityFilter::High,
        SeverityFilter::Medium,
        SeverityFilter::Low,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeverityFilter::All => "All",
            SeverityFilter::High => "High",
            SeverityFilter::Medium => "Medium",
            SeverityFilter::Low => "Low",
        }
    }

    /// Inverse of [`SeverityFilter::label`], case-insensitive.
    pub fn parse(value: &str) -> Option<Self> {
        Self::OPTIONS
            .into_iter()
            .find(|filter| filter.label().eq_ignore_ascii_case(value.trim()))
    }

    pub fn matches(self, entity: &EntityRow) -> bool {
        match self {
            SeverityFilter::All => true,
            other => entity.severity.to_lowercase() == other.label().to_lowercase(),
        }
    }

    pub fn apply(self, entities: &[EntityRow]) -> Vec<EntityRow> {
        entities
            .iter()
            .filter(|entity| self.matches(entity))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTone {
    High,
    Medium,
    Low,
    Neutral,
}

impl RiskTone {
    /// Severities and risk levels share one vocabulary.
    pub fn from_severity(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "high" => RiskTone::High,
            "medium" => RiskTone::Medium,
            "low" => RiskTone::Low,
            _ => RiskTone::Neutral,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            RiskTone::High => "tone--high",
            RiskTone::Medium => "tone--medium",
            RiskTone::Low => "tone--low",
            RiskTone::Neutral => "tone--neutral",
        }
    }
}
