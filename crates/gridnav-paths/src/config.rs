//! Search settings.

/// Settings for a [`PathFinder`](crate::PathFinder).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum number of nodes to close before giving up. `None` searches
    /// until the goal is reached or the frontier is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Bound the number of node expansions per search.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SearchConfig::default());

        let cfg: SearchConfig = serde_json::from_str(r#"{"max_expansions": 64}"#).unwrap();
        assert_eq!(cfg.max_expansions, Some(64));
    }
}
