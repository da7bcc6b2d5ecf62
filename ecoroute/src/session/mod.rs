mod query_outcome;
mod resolution;
mod route_session;

pub use query_outcome::QueryOutcome;
pub use resolution::{PendingResolution, ResolutionTicket, ResolvedSelection};
pub use route_session::RouteSession;
