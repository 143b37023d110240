use dioxus::prelude::*;
use time::macros::{date, format_description};
use time::Date;

use crate::core::format::{format_percent, share};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Compliant,
    HighRisk,
    Pending,
}

impl ActivityStatus {
    pub fn label(self) -> &'static str {
        match self {
            ActivityStatus::Compliant => "compliant",
            ActivityStatus::HighRisk => "high-risk",
            ActivityStatus::Pending => "pending",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ActivityStatus::Compliant => "tone--low",
            ActivityStatus::HighRisk => "tone--high",
            ActivityStatus::Pending => "tone--medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub name: &'static str,
    pub status: ActivityStatus,
    pub date: Date,
    pub score: u8,
}

impl ActivityRecord {
    pub fn date_label(&self) -> String {
        self.date
            .format(format_description!("[year]-[month]-[day]"))
            .unwrap_or_default()
    }
}

/// Fixed figures shown until the dashboard is backed by real data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_documents: usize,
    pub compliant: usize,
    pub high_risk: usize,
    pub pending: usize,
    pub average_score: u8,
    pub recent: Vec<ActivityRecord>,
}

impl DashboardStats {
    pub fn mock() -> Self {
        Self {
            total_documents: 24,
            compliant: 18,
            high_risk: 3,
            pending: 3,
            average_score: 85,
            recent: vec![
                ActivityRecord {
                    name: "Safety Protocol v2.1.pdf",
                    status: ActivityStatus::Compliant,
                    date: date!(2024 - 06 - 21),
                    score: 92,
                },
                ActivityRecord {
                    name: "Emergency Procedures.docx",
                    status: ActivityStatus::HighRisk,
                    date: date!(2024 - 06 - 20),
                    score: 45,
                },
                ActivityRecord {
                    name: "Training Manual.pdf",
                    status: ActivityStatus::Pending,
                    date: date!(2024 - 06 - 19),
                    score: 78,
                },
                ActivityRecord {
                    name: "Compliance Report Q2.pdf",
                    status: ActivityStatus::Compliant,
                    date: date!(2024 - 06 - 18),
                    score: 88,
                },
            ],
        }
    }

    /// `(label, share of total documents, tone)` for the overview bars.
    pub fn overview(&self) -> [(&'static str, f64, &'static str); 3] {
        [
            ("Compliant", share(self.compliant, self.total_documents), "tone--low"),
            ("High risk", share(self.high_risk, self.total_documents), "tone--high"),
            ("Pending review", share(self.pending, self.total_documents), "tone--medium"),
        ]
    }
}

#[component]
pub fn DashboardPage() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let stats = DashboardStats::mock();
    let overview: Vec<(&str, String, String)> = stats
        .overview()
        .into_iter()
        .map(|(label, pct, tone)| (label, format!("{pct:.0}%"), tone.to_string()))
        .collect();
    let average = format_percent(stats.average_score);

    rsx! {
        section { class: "page page-dashboard",
            header { class: "page__header",
                h1 { {crate::t!("dashboard-title")} }
                p { class: "page__lede", {crate::t!("dashboard-lede")} }
            }

            div { class: "stat-grid",
                div { class: "stat-card",
                    span { class: "stat-card__label", "Total Documents" }
                    strong { class: "stat-card__value", "{stats.total_documents}" }
                }
                div { class: "stat-card",
                    span { class: "stat-card__label", "Compliant" }
                    strong { class: "stat-card__value tone--low", "{stats.compliant}" }
                }
                div { class: "stat-card",
                    span { class: "stat-card__label", "High Risk" }
                    strong { class: "stat-card__value tone--high", "{stats.high_risk}" }
                }
                div { class: "stat-card",
                    span { class: "stat-card__label", "Pending Review" }
                    strong { class: "stat-card__value tone--medium", "{stats.pending}" }
                }
                div { class: "stat-card",
                    span { class: "stat-card__label", "Average Score" }
                    strong { class: "stat-card__value", "{average}" }
                }
            }

            div { class: "dashboard-grid",
                section { class: "card",
                    h3 { class: "card__title", "Compliance Overview" }
                    ul { class: "chart__bars",
                        for (label, width, tone) in overview {
                            li { key: "{label}", class: "chart__row",
                                span { class: "chart__label", "{label}" }
                                span { class: "chart__track",
                                    span { class: "chart__bar {tone}", style: "width: {width}" }
                                }
                                span { class: "chart__value", "{width}" }
                            }
                        }
                    }
                }

                section { class: "card",
                    h3 { class: "card__title", "Recent Activity" }
                    ul { class: "activity-list",
                        for record in stats.recent.iter() {
                            li { key: "{record.name}", class: "activity-list__item",
                                div {
                                    p { class: "activity-list__name", "{record.name}" }
                                    p { class: "activity-list__meta", "{record.date_label()}" }
                                }
                                span { class: "badge {record.status.css_class()}", "{record.status.label()}" }
                                strong { class: "activity-list__score", "{record.score}%" }
                            }
                        }
                    }
                }

                section { class: "card",
                    h3 { class: "card__title", "Quick Actions" }
                    div { class: "quick-actions",
                        button { r#type: "button", class: "button", "Upload New Document" }
                        button { r#type: "button", class: "button", "Generate Report" }
                        button { r#type: "button", class: "button", "Review High Risk Items" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_figures_are_fixed() {
        let stats = DashboardStats::mock();
        assert_eq!(stats.total_documents, 24);
        assert_eq!((stats.compliant, stats.high_risk, stats.pending), (18, 3, 3));
        assert_eq!(stats.average_score, 85);
        assert_eq!(stats.recent.len(), 4);
        assert_eq!(stats.recent[1].status.label(), "high-risk");
        assert_eq!(stats.recent[0].date_label(), "2024-06-21");
    }

    #[test]
    fn overview_is_share_of_total() {
        let overview = DashboardStats::mock().overview();
        assert_eq!(overview[0].1, 75.0);
        assert_eq!(overview[1].1, 12.5);
    }
}
