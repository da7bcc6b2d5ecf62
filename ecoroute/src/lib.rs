pub mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod service;
pub mod session;

pub use error::EcoRouteError;
