use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// series order is the chart category order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoldingPoint {
    pub label: String,
    pub value: Decimal,
}

impl HoldingPoint {
    pub fn new(label: &str, value: Decimal) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

// one (label, magnitude) pair per point, preserving series order
// the bar baseline stays at zero, values below zero clamp to an empty bar
pub fn to_bars(points: &[HoldingPoint]) -> Vec<(String, u64)> {
    points
        .iter()
        .map(|point| {
            (
                point.label.clone(),
                point.value.round_dp(0).to_u64().unwrap_or(0),
            )
        })
        .collect()
}
