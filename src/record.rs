//! Cost records for the restaurant model
//!
//! A record holds one revenue figure and five cost categories. The field type
//! is generic so the same shape can carry numbers or the raw text a form
//! submits.

use crate::coerce::{RawValue, ToRaw, loose_sum, to_number};
use serde::{Deserialize, Serialize};

/// Names of the five cost fields, in declaration order
pub const COST_FIELD_NAMES: [&str; 5] = [
    "food_cost",
    "labor_cost",
    "rent_cost",
    "marketing_cost",
    "utility_cost",
];

/// Monthly revenue plus the five cost categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord<T> {
    /// Monthly revenue
    pub monthly_revenue: T,

    /// Ingredient and beverage cost
    pub food_cost: T,

    /// Staff wages
    pub labor_cost: T,

    /// Premises rent
    pub rent_cost: T,

    /// Advertising and promotion
    pub marketing_cost: T,

    /// Water, power and gas
    pub utility_cost: T,
}

/// Record with numeric fields
pub type NumericCostRecord = CostRecord<f64>;

/// Record with numeric-looking text fields, as posted by a form
pub type StringCostRecord = CostRecord<String>;

impl NumericCostRecord {
    /// Fixed sample used by the diagnostic
    pub fn sample() -> Self {
        Self {
            monthly_revenue: 150000.0,
            food_cost: 60000.0,
            labor_cost: 50000.0,
            rent_cost: 30000.0,
            marketing_cost: 10000.0,
            utility_cost: 8000.0,
        }
    }
}

impl StringCostRecord {
    /// The numeric sample with every field as text
    pub fn sample() -> Self {
        Self {
            monthly_revenue: "150000".to_string(),
            food_cost: "60000".to_string(),
            labor_cost: "50000".to_string(),
            rent_cost: "30000".to_string(),
            marketing_cost: "10000".to_string(),
            utility_cost: "8000".to_string(),
        }
    }
}

impl<T> CostRecord<T> {
    /// The five cost fields with their names
    pub fn cost_fields(&self) -> [(&'static str, &T); 5] {
        [
            (COST_FIELD_NAMES[0], &self.food_cost),
            (COST_FIELD_NAMES[1], &self.labor_cost),
            (COST_FIELD_NAMES[2], &self.rent_cost),
            (COST_FIELD_NAMES[3], &self.marketing_cost),
            (COST_FIELD_NAMES[4], &self.utility_cost),
        ]
    }

    /// All six fields with their names, revenue first
    pub fn fields(&self) -> [(&'static str, &T); 6] {
        let [food, labor, rent, marketing, utility] = self.cost_fields();
        [
            ("monthly_revenue", &self.monthly_revenue),
            food,
            labor,
            rent,
            marketing,
            utility,
        ]
    }
}

impl<T: ToRaw> CostRecord<T> {
    /// Sum of the coerced cost fields
    pub fn total_cost(&self) -> f64 {
        self.cost_fields()
            .iter()
            .map(|(_, value)| to_number(*value))
            .sum()
    }

    /// Coerced monthly revenue
    pub fn monthly_revenue_value(&self) -> f64 {
        to_number(&self.monthly_revenue)
    }

    /// Cost fields folded with untyped `+`, no coercion
    pub fn naive_cost_sum(&self) -> RawValue {
        loose_sum(self.cost_fields().iter().map(|(_, value)| *value))
    }

    /// Cost fields joined as text, starting from an empty string
    pub fn concatenated_costs(&self) -> String {
        let seed = RawValue::Text(String::new());
        loose_sum(
            std::iter::once(seed).chain(self.cost_fields().iter().map(|(_, v)| v.to_raw())),
        )
        .display()
    }
}
