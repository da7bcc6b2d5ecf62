use serde::{Deserialize, Serialize};

use super::RouteOption;

/// ordinal environmental rating of a route option, derived from its savings
/// percentage. variants are declared worst to best so that `Ord` follows the
/// rating order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EcoRating {
    Poor,
    Medium,
    Good,
    Excellent,
}

impl EcoRating {
    /// bands use inclusive lower bounds: [90, inf) Excellent, [50, 90) Good,
    /// [20, 50) Medium, everything else Poor.
    pub fn classify(savings_percentage: f64) -> EcoRating {
        if savings_percentage >= 90.0 {
            EcoRating::Excellent
        } else if savings_percentage >= 50.0 {
            EcoRating::Good
        } else if savings_percentage >= 20.0 {
            EcoRating::Medium
        } else {
            EcoRating::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EcoRating::Excellent => "Excellent",
            EcoRating::Good => "Good",
            EcoRating::Medium => "Medium",
            EcoRating::Poor => "Poor",
        }
    }

    pub fn style_class(&self) -> &'static str {
        match self {
            EcoRating::Excellent => "eco-best",
            EcoRating::Good => "eco-good",
            EcoRating::Medium => "eco-medium",
            EcoRating::Poor => "eco-poor",
        }
    }
}

impl From<&RouteOption> for EcoRating {
    fn from(option: &RouteOption) -> Self {
        EcoRating::classify(option.savings_percentage())
    }
}

impl std::fmt::Display for EcoRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
