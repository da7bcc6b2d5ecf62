#[derive(thiserror::Error, Debug)]
pub enum RouteOptionError {
    #[error("unknown sort criterion '{value}', expected one of {expected}")]
    UnknownSortCriterion { value: String, expected: String },
    #[error("position {index} has {arity} value(s), expected [lon, lat]")]
    PositionArity { index: usize, arity: usize },
    #[error("position {index} is not a finite coordinate: [{lon}, {lat}]")]
    NonFinitePosition { index: usize, lon: f64, lat: f64 },
    #[error("position {index} is out of range for [lon, lat]: [{lon}, {lat}]")]
    PositionOutOfRange { index: usize, lon: f64, lat: f64 },
    #[error("Invalid or empty geometry: {0}")]
    InvalidGeometry(String),
}
