/// Limits applied to a single search.
///
/// The default places no limits: the search runs until the goal is found or
/// the frontier is exhausted. With a limit set, a search that hits it stops
/// early and reports no path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Maximum number of nodes moved to the closed set.
    pub max_expansions: Option<usize>,
    /// Maximum number of nodes simultaneously open.
    pub max_open: Option<usize>,
}

impl SearchConfig {
    /// Configuration with no limits.
    pub const fn new() -> Self {
        Self {
            max_expansions: None,
            max_open: None,
        }
    }

    /// Cap the number of expanded nodes.
    pub const fn with_max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Cap the size of the open set.
    pub const fn with_max_open(mut self, n: usize) -> Self {
        self.max_open = Some(n);
        self
    }

    /// Whether `expanded` closed nodes or `open` open nodes exceed a limit.
    #[inline]
    pub(crate) fn exceeded(&self, expanded: usize, open: usize) -> bool {
        self.max_expansions.is_some_and(|m| expanded > m) || self.max_open.is_some_and(|m| open > m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited() {
        let c = SearchConfig::default();
        assert_eq!(c, SearchConfig::new());
        assert!(!c.exceeded(usize::MAX, usize::MAX));
    }

    #[test]
    fn limits_are_inclusive() {
        let c = SearchConfig::new().with_max_expansions(3).with_max_open(5);
        assert!(!c.exceeded(3, 5));
        assert!(c.exceeded(4, 0));
        assert!(c.exceeded(0, 6));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_unlimited() {
        let c: SearchConfig = serde_json::from_str(r#"{"max_expansions": 10}"#).unwrap();
        assert_eq!(c, SearchConfig::new().with_max_expansions(10));
    }
}
