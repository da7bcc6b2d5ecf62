use serde::{Deserialize, Serialize};

use super::RouteOption;

/// one tree absorbs roughly 22 kg CO2 per year, or about 0.0025 kg per hour.
pub const TREE_ABSORPTION_KG_PER_HOUR: f64 = 0.0025;

/// styling tag attached to a savings message
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageSeverity {
    Success,
    Info,
    Warning,
}

impl MessageSeverity {
    pub fn style_class(&self) -> &'static str {
        match self {
            MessageSeverity::Success => "alert alert-success",
            MessageSeverity::Info => "alert alert-info",
            MessageSeverity::Warning => "alert alert-warning",
        }
    }
}

/// encouragement shown alongside the best option, chosen by its savings
/// percentage with descending exclusive thresholds: > 80, > 50, > 20, else.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SavingsMessage {
    Significant,
    Helping,
    GoodStart,
    GreenerAvailable,
}

impl SavingsMessage {
    pub fn from_savings_percentage(savings_percentage: f64) -> SavingsMessage {
        if savings_percentage > 80.0 {
            SavingsMessage::Significant
        } else if savings_percentage > 50.0 {
            SavingsMessage::Helping
        } else if savings_percentage > 20.0 {
            SavingsMessage::GoodStart
        } else {
            SavingsMessage::GreenerAvailable
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            SavingsMessage::Significant => {
                "Excellent choice! You are making a significant difference!"
            }
            SavingsMessage::Helping => "Great job! You are helping reduce carbon emissions!",
            SavingsMessage::GoodStart => "Good start! Consider greener options when possible.",
            SavingsMessage::GreenerAvailable => "There are greener transport options available!",
        }
    }

    pub fn severity(&self) -> MessageSeverity {
        match self {
            SavingsMessage::Significant | SavingsMessage::Helping => MessageSeverity::Success,
            SavingsMessage::GoodStart => MessageSeverity::Info,
            SavingsMessage::GreenerAvailable => MessageSeverity::Warning,
        }
    }
}

/// read-only summary of the option that saves the most emissions.
///
/// the best option is picked by absolute kg saved while the message is picked
/// by that option's savings percentage. the two can disagree for an option with
/// a high percentage but a small absolute saving; both are reported as-is.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SavingsSummary {
    /// position of the best option in the collection it was computed from
    pub best_index: usize,
    pub mode: String,
    pub emissions_saved_kg: f64,
    pub savings_percentage: f64,
    pub tree_equivalent_hours: i64,
    pub message: SavingsMessage,
}

impl SavingsSummary {
    /// summarizes a collection of options. returns None for an empty
    /// collection; callers are expected to only summarize non-empty results.
    ///
    /// ties on emissions saved go to the option that appears first.
    pub fn from_options(options: &[RouteOption]) -> Option<SavingsSummary> {
        let (best_index, best) = options.iter().enumerate().reduce(|best, next| {
            if next.1.emissions_saved_kg() > best.1.emissions_saved_kg() {
                next
            } else {
                best
            }
        })?;
        let tree_hours = best.emissions_saved_kg() / TREE_ABSORPTION_KG_PER_HOUR;
        Some(SavingsSummary {
            best_index,
            mode: best.mode().to_string(),
            emissions_saved_kg: best.emissions_saved_kg(),
            savings_percentage: best.savings_percentage(),
            tree_equivalent_hours: tree_hours.round() as i64,
            message: SavingsMessage::from_savings_percentage(best.savings_percentage()),
        })
    }

    /// kg saved with one decimal, as displayed
    pub fn formatted_emissions_saved(&self) -> String {
        format!("{:.1}", self.emissions_saved_kg)
    }
}
