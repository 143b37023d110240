use dioxus::prelude::*;

use super::aggregates::{label_histogram, ComplianceDistribution, RiskTone, SeverityFilter};
use super::charts::{distribution_bars, histogram_bars, BarChart};
use super::{AnalysisView, ClauseRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsTab {
    #[default]
    Compliance,
    Entities,
    Clauses,
}

impl ResultsTab {
    pub const ALL: [ResultsTab; 3] = [
        ResultsTab::Compliance,
        ResultsTab::Entities,
        ResultsTab::Clauses,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ResultsTab::Compliance => "Compliance Overview",
            ResultsTab::Entities => "Entities",
            ResultsTab::Clauses => "Clause Traceability",
        }
    }
}

#[component]
pub fn ComplianceTab(view: AnalysisView) -> Element {
    let distribution = ComplianceDistribution::of(&view);
    let groups = [
        ("Compliant", "tone--low", view.compliant.clone()),
        ("Missing", "tone--high", view.missing.clone()),
        ("Pending", "tone--medium", view.pending.clone()),
    ];

    rsx! {
        div { class: "tab-panel",
            BarChart {
                title: "Compliance distribution".to_string(),
                bars: distribution_bars(distribution),
            }
            div { class: "requirement-groups",
                for (heading, tone, labels) in groups {
                    section { key: "{heading}", class: "requirement-group",
                        h4 { class: "requirement-group__title {tone}", "{heading} ({labels.len()})" }
                        if labels.is_empty() {
                            p { class: "card__placeholder", "None reported" }
                        } else {
                            ul { class: "requirement-group__list",
                                for (index, label) in labels.iter().enumerate() {
                                    li { key: "{index}", "{label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EntitiesTab(view: AnalysisView) -> Element {
    let mut filter = use_signal(SeverityFilter::default);
    let buckets = label_histogram(&view.entities);
    let visible = filter().apply(&view.entities);

    rsx! {
        div { class: "tab-panel",
            BarChart {
                title: "Entities by label".to_string(),
                bars: histogram_bars(&buckets),
            }
            div { class: "entity-filter",
                label { r#for: "severity-filter", "Severity" }
                select {
                    id: "severity-filter",
                    value: "{filter().label()}",
                    oninput: move |evt: FormEvent| {
                        if let Some(next) = SeverityFilter::parse(&evt.value()) {
                            filter.set(next);
                        }
                    },
                    for choice in SeverityFilter::OPTIONS {
                        option { key: "{choice.label()}", value: "{choice.label()}", "{choice.label()}" }
                    }
                }
                span { class: "entity-filter__count", "{visible.len()} of {view.entities.len()}" }
            }
            if visible.is_empty() {
                p { class: "card__placeholder", "No entities match this filter" }
            } else {
                ul { class: "entity-list",
                    for (index, entity) in visible.iter().enumerate() {
                        li { key: "{index}", class: "entity-list__item",
                            span { class: "entity-list__text", "{entity.text}" }
                            span { class: "badge", "{entity.label}" }
                            span {
                                class: "badge {RiskTone::from_severity(&entity.severity).css_class()}",
                                "{entity.severity}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClausesTab(view: AnalysisView) -> Element {
    rsx! {
        div { class: "tab-panel",
            if view.clauses.is_empty() {
                p { class: "card__placeholder", "No clause traceability data" }
            } else {
                div { class: "clause-grid",
                    for clause in view.clauses.iter() {
                        {match clause {
                            ClauseRow::Valid(detail) => rsx! {
                                article { key: "{detail.key}", class: "clause-card",
                                    header { class: "clause-card__header",
                                        h4 { class: "clause-card__title", "{detail.title}" }
                                        span { class: "badge {RiskTone::from_severity(&detail.severity).css_class()}",
                                            "{detail.severity}"
                                        }
                                    }
                                    dl { class: "clause-card__facts",
                                        dt { "Clause" }
                                        dd { "{detail.key}" }
                                        dt { "ID" }
                                        dd { "{detail.id}" }
                                        dt { "Status" }
                                        dd { "{detail.status}" }
                                        dt { "Required" }
                                        dd { "{detail.required}" }
                                        dt { "Matched paragraphs" }
                                        dd { "{detail.matched_paragraphs}" }
                                    }
                                    p { class: "clause-card__recommendation",
                                        strong { "Recommendation: " }
                                        "{detail.recommendation}"
                                    }
                                }
                            },
                            ClauseRow::Invalid { key } => rsx! {
                                article { key: "{key}", class: "clause-card clause-card--invalid",
                                    h4 { class: "clause-card__title", "{key}" }
                                    p { "Invalid data" }
                                }
                            },
                        }}
                    }
                }
            }
        }
    }
}
