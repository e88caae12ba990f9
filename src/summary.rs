//! Cost totals and ratios derived from a cost record

use crate::coerce::ToRaw;
use crate::format::format_percent;
use crate::record::CostRecord;
use serde::{Deserialize, Serialize};

/// Text shown for a ratio that cannot be computed
pub const UNDEFINED_RATIO: &str = "N/A";

/// Coerced totals and percentage ratios for one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Sum of the five coerced cost fields
    pub total_cost: f64,

    /// Coerced monthly revenue
    pub monthly_revenue: f64,

    /// Total cost as a percentage of revenue; `None` without revenue
    pub cost_ratio: Option<f64>,

    /// Net profit as a percentage of revenue; `None` without revenue
    pub net_margin: Option<f64>,
}

impl CostSummary {
    /// Compute totals and ratios for a record of any field type
    pub fn from_record<T: ToRaw>(record: &CostRecord<T>) -> Self {
        let total_cost = record.total_cost();
        let monthly_revenue = record.monthly_revenue_value();

        let (cost_ratio, net_margin) = if monthly_revenue == 0.0 {
            (None, None)
        } else {
            let share = total_cost / monthly_revenue;
            (Some(share * 100.0), Some((1.0 - share) * 100.0))
        };

        Self {
            total_cost,
            monthly_revenue,
            cost_ratio,
            net_margin,
        }
    }

    /// Cost ratio as a percentage rounded to `decimals` places, or `N/A`
    pub fn cost_ratio_text(&self, decimals: usize) -> String {
        ratio_text(self.cost_ratio, decimals)
    }

    /// Net margin as a percentage rounded to `decimals` places, or `N/A`
    pub fn net_margin_text(&self, decimals: usize) -> String {
        ratio_text(self.net_margin, decimals)
    }

    /// Whether the total matches a known regression value
    pub fn matches_expected(&self, expected: f64) -> bool {
        (self.total_cost - expected).abs() < 1e-9
    }

    /// Summary as a JSON object; undefined ratios are `null`
    pub fn to_json(&self) -> serde_json::Value {
        let mut stats = serde_json::Map::new();
        stats.insert("total_cost".to_string(), self.total_cost.into());
        stats.insert("monthly_revenue".to_string(), self.monthly_revenue.into());
        stats.insert(
            "cost_ratio".to_string(),
            self.cost_ratio
                .map_or(serde_json::Value::Null, serde_json::Value::from),
        );
        stats.insert(
            "net_margin".to_string(),
            self.net_margin
                .map_or(serde_json::Value::Null, serde_json::Value::from),
        );
        serde_json::Value::Object(stats)
    }
}

fn ratio_text(ratio: Option<f64>, decimals: usize) -> String {
    match ratio {
        Some(value) => format_percent(value, decimals),
        None => UNDEFINED_RATIO.to_string(),
    }
}
