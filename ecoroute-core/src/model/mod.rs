mod eco_rating;
mod error;
mod history_entry;
mod route_option;
mod savings_summary;
mod sort_criterion;
mod travel_mode;

pub use eco_rating::EcoRating;
pub use error::RouteOptionError;
pub use history_entry::{prepend_bounded, SelectionHistoryEntry, HISTORY_CAPACITY};
pub use route_option::{Position, RouteOption, MISSING_SUMMARY, UNKNOWN_MODE};
pub use savings_summary::{
    MessageSeverity, SavingsMessage, SavingsSummary, TREE_ABSORPTION_KG_PER_HOUR,
};
pub use sort_criterion::SortCriterion;
pub use travel_mode::TravelMode;
