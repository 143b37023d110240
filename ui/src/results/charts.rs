use dioxus::prelude::*;

use crate::core::format;

use super::aggregates::{ComplianceDistribution, LabelBucket};

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: usize,
    pub tone: &'static str,
}

pub fn distribution_bars(distribution: ComplianceDistribution) -> Vec<ChartBar> {
    vec![
        ChartBar {
            label: "Compliant".into(),
            value: distribution.compliant,
            tone: "tone--low",
        },
        ChartBar {
            label: "Missing".into(),
            value: distribution.missing,
            tone: "tone--high",
        },
        ChartBar {
            label: "Pending".into(),
            value: distribution.pending,
            tone: "tone--medium",
        },
    ]
}

pub fn histogram_bars(buckets: &[LabelBucket]) -> Vec<ChartBar> {
    buckets
        .iter()
        .map(|bucket| ChartBar {
            label: bucket.label.clone(),
            value: bucket.count,
            tone: "tone--neutral",
        })
        .collect()
}

/// Horizontal bars scaled against the largest value.
#[component]
pub fn BarChart(title: String, bars: Vec<ChartBar>) -> Element {
    let peak = bars.iter().map(|bar| bar.value).max().unwrap_or(0);
    let rows: Vec<(ChartBar, String)> = bars
        .into_iter()
        .map(|bar| {
            let width = format!("{:.0}%", format::share(bar.value, peak));
            (bar, width)
        })
        .collect();

    rsx! {
        figure { class: "chart",
            figcaption { class: "chart__title", "{title}" }
            if peak == 0 {
                p { class: "chart__empty", "No data to chart" }
            } else {
                ul { class: "chart__bars",
                    for (bar, width) in rows {
                        li { key: "{bar.label}", class: "chart__row",
                            span { class: "chart__label", "{bar.label}" }
                            span { class: "chart__track",
                                span {
                                    class: "chart__bar {bar.tone}",
                                    style: "width: {width}",
                                }
                            }
                            span { class: "chart__value", "{bar.value}" }
                        }
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
    fn distribution_bars_follow_report_order() {
        let bars = distribution_bars(ComplianceDistribution {
            compliant: 4,
            missing: 2,
            pending: 1,
        });
        let values: Vec<_> = bars.iter().map(|b| (b.label.as_str(), b.value)).collect();
        assert_eq!(values, [("Compliant", 4), ("Missing", 2), ("Pending", 1)]);
    }
}
