use clap::Parser;
use ecoroute::{app::EcoRouteApp, EcoRouteError};

fn main() -> Result<(), EcoRouteError> {
    env_logger::init();
    let args = EcoRouteApp::parse();
    args.run()
}
