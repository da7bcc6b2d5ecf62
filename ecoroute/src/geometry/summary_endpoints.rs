use regex::Regex;

use crate::EcoRouteError;

/// pulls origin and destination names out of a route summary such as
/// "Take bus route 42 from Kigali to Musanze".
#[derive(Debug, Clone)]
pub struct SummaryEndpoints {
    pattern: Regex,
}

impl SummaryEndpoints {
    pub fn new() -> Result<SummaryEndpoints, EcoRouteError> {
        let pattern = Regex::new(r"from (.*) to (.*)").map_err(|e| {
            EcoRouteError::InternalError(format!("failure compiling summary pattern: {e}"))
        })?;
        Ok(SummaryEndpoints { pattern })
    }

    /// returns (origin, destination) when the summary matches and both names
    /// are non-empty. matching is greedy, so with several " to " separators
    /// the last one splits the names.
    pub fn parse(&self, summary: &str) -> Option<(String, String)> {
        let captures = self.pattern.captures(summary)?;
        let origin = captures.get(1)?.as_str().trim();
        let destination = captures.get(2)?.as_str().trim();
        if origin.is_empty() || destination.is_empty() {
            return None;
        }
        Some((origin.to_string(), destination.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(summary: &str) -> Option<(String, String)> {
        SummaryEndpoints::new().unwrap().parse(summary)
    }

    #[test]
    fn test_parse_summaries() {
        assert_eq!(
            parse("Drive from Kigali to Musanze"),
            Some((String::from("Kigali"), String::from("Musanze")))
        );
        assert_eq!(
            parse("Take the train from Kigali station to Musanze station"),
            Some((String::from("Kigali station"), String::from("Musanze station")))
        );
        assert_eq!(
            parse("from Kigali to Musanze"),
            Some((String::from("Kigali"), String::from("Musanze")))
        );
    }

    #[test]
    fn test_parse_is_greedy() {
        assert_eq!(
            parse("from Huye to Nyanza to Muhanga"),
            Some((String::from("Huye to Nyanza"), String::from("Muhanga")))
        );
    }

    #[test]
    fn test_unparseable_summaries() {
        assert_eq!(parse("No summary available"), None);
        assert_eq!(parse("Cycle along the lake"), None);
        assert_eq!(parse("From Kigali To Musanze"), None);
        assert_eq!(parse("from  to Musanze"), None);
        assert_eq!(parse(""), None);
    }
}
