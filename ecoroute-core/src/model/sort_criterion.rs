use std::cmp::Ordering;
use std::str::FromStr;

use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{RouteOption, RouteOptionError};

/// the criteria a user can rank route options by.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortCriterion {
    /// shortest duration first
    Time,
    /// cheapest first
    Cost,
    /// most emissions saved first
    Eco,
}

impl SortCriterion {
    pub fn compare(&self, a: &RouteOption, b: &RouteOption) -> Ordering {
        match self {
            SortCriterion::Time => compare_f64(a.duration_minutes(), b.duration_minutes()),
            SortCriterion::Cost => compare_f64(a.cost_estimate(), b.cost_estimate()),
            SortCriterion::Eco => compare_f64(b.emissions_saved_kg(), a.emissions_saved_kg()),
        }
    }

    /// reorders the options in place. the sort is stable, so options with
    /// equal keys keep their relative order, and ranking twice by the same
    /// criterion changes nothing.
    pub fn rank(&self, options: &mut [RouteOption]) {
        options.sort_by(|a, b| self.compare(a, b));
    }
}

// normalized options never hold NaN. treating incomparable values as equal
// also keeps -0.0 and 0.0 in their original order.
fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl FromStr for SortCriterion {
    type Err = RouteOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "time" => Ok(SortCriterion::Time),
            "cost" => Ok(SortCriterion::Cost),
            "eco" => Ok(SortCriterion::Eco),
            _ => Err(RouteOptionError::UnknownSortCriterion {
                value: s.to_string(),
                expected: SortCriterion::value_variants()
                    .iter()
                    .map(|c| format!("'{c}'"))
                    .join(", "),
            }),
        }
    }
}

impl std::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SortCriterion::Time => "time",
            SortCriterion::Cost => "cost",
            SortCriterion::Eco => "eco",
        };
        write!(f, "{s}")
    }
}
