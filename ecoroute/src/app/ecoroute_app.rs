use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::{Parser, Subcommand};
use ecoroute_core::model::SortCriterion;
use serde::{Deserialize, Serialize};

use super::{format_history, format_options, format_summary, RouteSource, NO_ROUTES_MESSAGE};
use crate::{
    config::EcoRouteConfig,
    geometry::{GeoJsonMapSurface, GeometryResolver},
    history::{HistoryStore, JsonFileHistoryStore},
    service::{HttpGeocoder, RouteQuery},
    session::{QueryOutcome, RouteSession},
    EcoRouteError,
};

/// Command line tool for comparing transportation options by time, cost and carbon emissions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct EcoRouteApp {
    /// TOML file overriding the default configuration. ECOROUTE_* environment
    /// variables are applied on top.
    #[arg(short, long, global = true)]
    pub config_file: Option<String>,

    #[command(subcommand)]
    pub op: EcoRouteOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum EcoRouteOperation {
    /// list the route options between two places with their savings summary
    Compare {
        #[arg(short, long)]
        origin: String,

        #[arg(short, long)]
        destination: String,

        /// order the options by this criterion. if not provided, options are
        /// listed in the order returned by the route service.
        #[arg(short, long, value_enum)]
        sort: Option<SortCriterion>,

        /// use a route query response saved as JSON instead of the route service
        #[arg(short, long)]
        local_source: Option<String>,
    },
    /// confirm one option, record it in the history and write its map as GeoJSON
    Choose {
        #[arg(short, long)]
        origin: String,

        #[arg(short, long)]
        destination: String,

        /// position of the option as listed by `compare` with the same sort
        #[arg(short, long)]
        index: usize,

        #[arg(short, long, value_enum)]
        sort: Option<SortCriterion>,

        #[arg(short, long)]
        local_source: Option<String>,

        /// file to write the map to. defaults to route.geojson in the
        /// current working directory.
        #[arg(long)]
        output: Option<String>,
    },
    /// show the most recent confirmed selections
    History,
}

impl EcoRouteApp {
    pub fn run(&self) -> Result<(), EcoRouteError> {
        let config = EcoRouteConfig::load(self.config_file.as_ref().map(Path::new))?;
        self.op.run(&config)
    }
}

impl EcoRouteOperation {
    pub fn run(&self, config: &EcoRouteConfig) -> Result<(), EcoRouteError> {
        match self {
            EcoRouteOperation::Compare {
                origin,
                destination,
                sort,
                local_source,
            } => {
                let runtime = build_runtime()?;
                let mut session = RouteSession::new();
                let query = RouteQuery::new(origin, destination)?;
                let source = RouteSource::new(&config.service, local_source.as_ref().map(Path::new))?;
                if !load_options(&runtime, &mut session, &source, &query, *sort) {
                    println!("{NO_ROUTES_MESSAGE}");
                    return Ok(());
                }
                print_comparison(&session);
                Ok(())
            }
            EcoRouteOperation::Choose {
                origin,
                destination,
                index,
                sort,
                local_source,
                output,
            } => {
                let runtime = build_runtime()?;
                let mut session = RouteSession::new();
                let query = RouteQuery::new(origin, destination)?;
                let source = RouteSource::new(&config.service, local_source.as_ref().map(Path::new))?;
                if !load_options(&runtime, &mut session, &source, &query, *sort) {
                    println!("{NO_ROUTES_MESSAGE}");
                    return Ok(());
                }

                let mut store = JsonFileHistoryStore::new(config.history.directory());
                let pending = session
                    .confirm_selection(*index, &mut store, Utc::now())
                    .ok_or_else(|| {
                        EcoRouteError::InvalidUserInput(format!(
                            "option index {index} is out of range, {} options available",
                            session.options().len()
                        ))
                    })?;
                let option = pending.option();
                println!(
                    "Selected {}: {:.0} mins, {:.1} km, {:.1} kg CO2 saved",
                    option.mode_label(),
                    option.duration_minutes(),
                    option.distance_km(),
                    option.emissions_saved_kg()
                );

                let geocoder = HttpGeocoder::try_from(&config.service)?;
                let resolver = GeometryResolver::new(geocoder, config.map.clone())?;
                let resolved = runtime.block_on(pending.resolve(&resolver));
                let tier = resolved.plan.tier();
                let mut surface = GeoJsonMapSurface::new();
                if !session.complete_resolution(resolved, &mut surface) {
                    return Err(EcoRouteError::InternalError(String::from(
                        "selection was replaced before its map was drawn",
                    )));
                }
                let output_path = output
                    .as_ref()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("route.geojson"));
                surface.write(&output_path)?;
                log::info!("wrote {tier} map to {}", output_path.display());
                if let Some(notice) = surface.notice() {
                    println!("{notice}");
                }
                println!("Map written to {}", output_path.display());
                Ok(())
            }
            EcoRouteOperation::History => {
                let store = JsonFileHistoryStore::new(config.history.directory());
                let entries = store.read_all().unwrap_or_else(|e| {
                    log::warn!("could not read selection history: {e}");
                    vec![]
                });
                println!("{}", format_history(&entries));
                Ok(())
            }
        }
    }
}

fn build_runtime() -> Result<tokio::runtime::Runtime, EcoRouteError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            EcoRouteError::TokioError(format!("failure creating async rust tokio runtime: {e}"))
        })
}

/// runs the query and applies the requested ordering. false when there is
/// nothing to show.
fn load_options(
    runtime: &tokio::runtime::Runtime,
    session: &mut RouteSession,
    source: &RouteSource,
    query: &RouteQuery,
    sort: Option<SortCriterion>,
) -> bool {
    match runtime.block_on(session.submit_query(source, query)) {
        QueryOutcome::Routes { count } => {
            log::info!(
                "{count} route options from '{}' to '{}'",
                query.origin(),
                query.destination()
            );
        }
        QueryOutcome::NoRoutes { reason } => {
            log::warn!("no routes: {reason}");
            return false;
        }
        QueryOutcome::Superseded => return false,
    }
    if let Some(criterion) = sort {
        session.sort_by(criterion);
    }
    true
}

fn print_comparison(session: &RouteSession) {
    println!("{}", format_options(session.options()));
    if let Some(summary) = session.summary() {
        println!();
        println!("{}", format_summary(summary));
    }
}
