//! Read-only analytics derived from a node's counters

use crate::flow::Analytics;

/// One bar of the performance chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: &'static str,
    pub value: u64,
}

/// Rates computed from the stored counters.
///
/// Both rates are 0 whenever nothing has been sent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticsSummary {
    pub sent: u64,
    pub clicked: u64,
    pub converted: u64,
    pub click_rate: f64,
    pub conversion_rate: f64,
}

fn rate(count: u64, sent: u64) -> f64 {
    if sent == 0 {
        return 0.0;
    }
    count as f64 / sent as f64
}

/// Render a ratio as a percentage with one decimal, or `0%` when zero
pub fn format_rate(rate: f64) -> String {
    if rate > 0.0 {
        format!("{:.1}%", rate * 100.0)
    } else {
        "0%".to_string()
    }
}

impl AnalyticsSummary {
    pub fn click_rate_text(&self) -> String {
        format_rate(self.click_rate)
    }

    pub fn conversion_rate_text(&self) -> String {
        format_rate(self.conversion_rate)
    }

    /// Series handed to the chart renderer
    pub fn chart_series(&self) -> [ChartPoint; 3] {
        [
            ChartPoint {
                label: "Sent",
                value: self.sent,
            },
            ChartPoint {
                label: "Clicked",
                value: self.clicked,
            },
            ChartPoint {
                label: "Converted",
                value: self.converted,
            },
        ]
    }
}

impl From<&Analytics> for AnalyticsSummary {
    fn from(a: &Analytics) -> Self {
        Self {
            sent: a.sent,
            clicked: a.clicked,
            converted: a.converted,
            click_rate: rate(a.clicked, a.sent),
            conversion_rate: rate(a.converted, a.sent),
        }
    }
}
