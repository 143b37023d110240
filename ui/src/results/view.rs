use api::AnalysisPayload;
use dioxus::prelude::*;

use crate::core::timing::sleep_ms;

use super::aggregates::RiskTone;
use super::export::ReportExport;
use super::tabs::{ClausesTab, ComplianceTab, EntitiesTab, ResultsTab};
use super::{AnalysisView, ComplianceStats};

/// Cosmetic delay before the panels replace the skeleton.
pub const SETTLING_DELAY_MS: u64 = 500;

/// Renders one analysis. Mount a fresh instance (via `key`) per result so
/// the settling flag and selected tab start over.
#[component]
pub fn AnalysisResults(results: AnalysisPayload) -> Element {
    let mut settling = use_signal(|| true);
    let mut tab = use_signal(ResultsTab::default);
    use_hook(|| {
        spawn(async move {
            sleep_ms(SETTLING_DELAY_MS).await;
            settling.set(false);
        })
    });

    if settling() {
        return rsx! {
            section { class: "card results-loading",
                div { class: "spinner", aria_hidden: "true" }
                p { "Preparing analysis…" }
            }
        };
    }

    let view = AnalysisView::from_payload(&results);
    let stats = view.stats.clone();

    rsx! {
        section { class: "results",
            header { class: "results__header",
                h2 { "Analysis Results" }
                ReportExport { view: view.clone() }
            }

            StatGrid { stats }

            if let Some(summary) = view.summary.as_ref() {
                section { class: "card",
                    h3 { class: "card__title", "Executive Summary" }
                    p { class: "results__summary", "{summary}" }
                }
            }

            section { class: "card",
                nav { class: "tabs", role: "tablist",
                    for choice in ResultsTab::ALL {
                        button {
                            key: "{choice.title()}",
                            r#type: "button",
                            role: "tab",
                            class: if tab() == choice { "tabs__tab tabs__tab--active" } else { "tabs__tab" },
                            onclick: move |_| tab.set(choice),
                            "{choice.title()}"
                        }
                    }
                }
                {match tab() {
                    ResultsTab::Compliance => rsx! { ComplianceTab { view: view.clone() } },
                    ResultsTab::Entities => rsx! { EntitiesTab { view: view.clone() } },
                    ResultsTab::Clauses => rsx! { ClausesTab { view: view.clone() } },
                }}
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub tone: &'static str,
}

/// Headline figures, in display order.
pub fn stat_cards(stats: &ComplianceStats) -> [StatCard; 5] {
    [
        StatCard {
            label: "Total Requirements",
            value: stats.total_requirements.clone(),
            tone: "",
        },
        StatCard {
            label: "Compliant",
            value: stats.compliant.to_string(),
            tone: "tone--low",
        },
        StatCard {
            label: "Missing",
            value: stats.missing.to_string(),
            tone: "tone--high",
        },
        StatCard {
            label: "Pending",
            value: stats.pending.to_string(),
            tone: "tone--medium",
        },
        StatCard {
            label: "Risk Level",
            value: stats.risk_level.clone(),
            tone: RiskTone::from_severity(&stats.risk_level).css_class(),
        },
    ]
}

#[component]
pub fn StatGrid(stats: ComplianceStats) -> Element {
    rsx! {
        div { class: "stat-grid",
            for card in stat_cards(&stats) {
                div { key: "{card.label}", class: "stat-card",
                    span { class: "stat-card__label", "{card.label}" }
                    strong { class: "stat-card__value {card.tone}", "{card.value}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_carry_every_count() {
        let stats = ComplianceStats {
            total_requirements: "6".into(),
            compliant: 3,
            missing: 1,
            pending: 2,
            risk_level: "medium".into(),
        };
        let cards = stat_cards(&stats);
        let values: Vec<(&str, &str)> = cards.iter().map(|c| (c.label, c.value.as_str())).collect();
        assert_eq!(
            values,
            [
                ("Total Requirements", "6"),
                ("Compliant", "3"),
                ("Missing", "1"),
                ("Pending", "2"),
                ("Risk Level", "medium"),
            ]
        );
        assert_eq!(cards[4].tone, "tone--medium");
    }
}
