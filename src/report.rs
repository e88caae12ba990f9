//! The coercion diagnostic
//!
//! [`build_report`] walks both sample records through the same straight-line
//! sequence: raw fields, coerced totals and ratios, formatted amounts, field
//! types, and the contrast between numeric addition and the string
//! concatenation an uncoerced `+` produces. Output is collected as lines so it
//! stays deterministic and testable; the binary prints it unchanged.

use crate::coerce::{RawValue, ToRaw, display_number};
use crate::config::Config;
use crate::format::format_currency;
use crate::logging::{LogContext, get_logger_with_context};
use crate::record::{NumericCostRecord, StringCostRecord};
use crate::summary::CostSummary;
use std::fmt;

/// Collected output and the values behind it
#[derive(Debug, Clone)]
pub struct DiagnosticReport {
    /// Output lines, in print order
    pub lines: Vec<String>,

    /// Totals for the numeric sample
    pub numeric: CostSummary,

    /// Cost fields of the numeric sample joined as text
    pub naive_concatenation: String,

    /// Totals for the string sample
    pub string: CostSummary,

    /// Whether the string sample coerced to the expected total
    pub matches_expected: bool,

    /// Uncoerced `+` over the string sample's cost fields
    pub string_naive_sum: RawValue,
}

impl fmt::Display for DiagnosticReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Run the diagnostic over the built-in samples
pub fn build_report(config: &Config) -> DiagnosticReport {
    let policy = config.formatting.number_format();
    let symbol = config.formatting.currency_symbol.as_str();
    let decimals = config.formatting.ratio_decimals;
    let mut lines = Vec::new();

    let numeric_log = get_logger_with_context(LogContext::new("report").with_sample("numeric"));
    let numeric_record = NumericCostRecord::sample();

    lines.push("=== Numeric sample: raw fields ===".to_string());
    for (name, value) in numeric_record.fields() {
        lines.push(format!("{}: {}", name, display_number(*value)));
    }

    let numeric = CostSummary::from_record(&numeric_record);
    numeric_log.debug(&format!(
        "total_cost={} monthly_revenue={}",
        numeric.total_cost, numeric.monthly_revenue
    ));

    lines.push("=== Coerced totals ===".to_string());
    lines.push(format!("totalCost: {}", display_number(numeric.total_cost)));
    lines.push(format!(
        "Total cost ratio: {}",
        numeric.cost_ratio_text(decimals)
    ));
    lines.push(format!(
        "Net profit ratio: {}",
        numeric.net_margin_text(decimals)
    ));

    lines.push("=== Formatted values ===".to_string());
    lines.push(format!(
        "Total cost: {}",
        format_currency(&numeric.total_cost, symbol, &policy)
    ));
    lines.push(format!(
        "Monthly revenue: {}",
        format_currency(&numeric.monthly_revenue, symbol, &policy)
    ));

    lines.push("=== Cost field types ===".to_string());
    for (name, value) in numeric_record.cost_fields() {
        lines.push(format!("{}: {}", name, value.to_raw().type_tag()));
    }

    let naive_concatenation = numeric_record.concatenated_costs();
    lines.push("=== Addition vs concatenation ===".to_string());
    lines.push(format!("❌ String concatenation: {}", naive_concatenation));
    lines.push(format!(
        "✅ Numeric sum: {}",
        display_number(numeric.total_cost)
    ));

    if config.report.json_summary {
        lines.push(format!("Numeric summary: {}", numeric.to_json()));
    }

    let string_log = get_logger_with_context(LogContext::new("report").with_sample("string"));
    let string_record = StringCostRecord::sample();
    let string = CostSummary::from_record(&string_record);

    let expected = config.checks.expected_total_cost;
    let matches_expected = string.matches_expected(expected);
    if matches_expected {
        string_log.debug("coerced total matches expected value");
    } else {
        string_log.warn(&format!(
            "coerced total {} differs from expected {}",
            string.total_cost, expected
        ));
    }

    lines.push("=== String sample ===".to_string());
    lines.push(format!(
        "✅ Coerced totalCost: {}",
        display_number(string.total_cost)
    ));
    lines.push(format!(
        "totalCost == {}: {}",
        display_number(expected),
        matches_expected
    ));

    let string_naive_sum = string_record.naive_cost_sum();
    lines.push(format!("❌ Uncoerced sum: {}", string_naive_sum));
    lines.push(format!(
        "❌ Uncoerced sum type: {}",
        string_naive_sum.type_tag()
    ));

    if config.report.json_summary {
        lines.push(format!("String summary: {}", string.to_json()));
    }

    DiagnosticReport {
        lines,
        numeric,
        naive_concatenation,
        string,
        matches_expected,
        string_naive_sum,
    }
}
