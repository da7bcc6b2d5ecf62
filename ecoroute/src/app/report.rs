use ecoroute_core::model::{
    EcoRating, RouteOption, SavingsSummary, SelectionHistoryEntry, HISTORY_CAPACITY,
};
use itertools::Itertools;

pub const NO_ROUTES_MESSAGE: &str = "No routes available.";

/// one row per option, numbered by the index `choose` expects
pub fn format_options(options: &[RouteOption]) -> String {
    let header = format!(
        "{:>3}  {:<8} {:<10} {:<10} {:>8} {:>9} {:>8} {:>10} {:>13} {:>12}",
        "#", "mode", "icon", "eco", "time", "distance", "cost", "CO2", "CO2 vs car", "saved"
    );
    let rows = options.iter().enumerate().map(|(index, option)| {
        format!(
            "{:>3}  {:<8} {:<10} {:<10} {:>8} {:>9} {:>8} {:>10} {:>13} {:>12}",
            index,
            option.mode_label(),
            option.travel_mode().icon(),
            EcoRating::from(option).label(),
            format!("{:.0} min", option.duration_minutes()),
            format!("{:.1} km", option.distance_km()),
            format!("${:.2}", option.cost_estimate()),
            format!("{:.1} kg", option.emissions_kg()),
            format!("{:.0}% less", option.savings_percentage()),
            format!("{:.1} kg", option.emissions_saved_kg()),
        )
    });
    std::iter::once(header).chain(rows).join("\n")
}

pub fn format_summary(summary: &SavingsSummary) -> String {
    [
        format!(
            "Best option: {} saves {} kg CO2, about {} tree-hours of absorption.",
            summary.mode,
            summary.formatted_emissions_saved(),
            summary.tree_equivalent_hours
        ),
        format!(
            "[{}] {}",
            summary.message.severity().style_class(),
            summary.message.text()
        ),
    ]
    .iter()
    .join("\n")
}

/// most recent first, as stored. at most [`HISTORY_CAPACITY`] entries are
/// shown, even when the stored history was edited to hold more.
pub fn format_history(entries: &[SelectionHistoryEntry]) -> String {
    if entries.is_empty() {
        return String::from("No recent selections.");
    }
    entries
        .iter()
        .take(HISTORY_CAPACITY)
        .map(|e| {
            format!(
                "{}  {:<6} {:.1} km, {:.1} kg CO2 saved",
                e.timestamp.format("%Y-%m-%d %H:%M"),
                e.mode,
                e.distance_km,
                e.emissions_saved_kg
            )
        })
        .join("\n")
}
