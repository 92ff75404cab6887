//! Train service classes.

use std::fmt;

/// The class of service a train runs as. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceType {
    Express,
    Local,
}

impl ServiceType {
    /// Every accepted value, in display order.
    pub const ALL: [ServiceType; 2] = [ServiceType::Express, ServiceType::Local];

    /// The exact text persisted in `trains.service_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::Express => "express",
            ServiceType::Local => "local",
        }
    }

    /// Parse the persisted text. Matching is exact: no trimming, no case folding.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_values() {
        assert_eq!(ServiceType::parse("express"), Some(ServiceType::Express));
        assert_eq!(ServiceType::parse("local"), Some(ServiceType::Local));
    }

    #[test]
    fn rejects_case_and_whitespace_variants() {
        assert_eq!(ServiceType::parse("Express"), None);
        assert_eq!(ServiceType::parse("LOCAL"), None);
        assert_eq!(ServiceType::parse(" local"), None);
        assert_eq!(ServiceType::parse("freight"), None);
    }

    #[test]
    fn display_matches_stored_text() {
        for t in ServiceType::ALL {
            assert_eq!(t.to_string(), t.as_str());
        }
    }
}
