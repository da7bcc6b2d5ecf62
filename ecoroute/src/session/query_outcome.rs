/// how a route query ended, from the session's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// the session now holds this many options
    Routes { count: usize },
    /// nothing to show. the reason is for logs and status lines, the user sees
    /// "no routes available".
    NoRoutes { reason: String },
    /// a newer query was started before this response arrived. the session
    /// was left untouched.
    Superseded,
}

impl QueryOutcome {
    pub fn has_routes(&self) -> bool {
        matches!(self, QueryOutcome::Routes { .. })
    }
}
