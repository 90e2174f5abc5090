//! Empty Plan Policy Value Object
//!
//! Decides what happens when two types share no mappable fields.

use serde::{Deserialize, Serialize};

/// What the plan compiler does with a plan that binds zero fields
///
/// - `Allow`: Silently produce a plan that yields default destinations
/// - `Warn`: Same as `Allow`, plus a WARN log event (default)
/// - `Reject`: Fail the mapping request with `MapError::EmptyPlan`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPlanPolicy {
    /// Produce the empty plan without any diagnostic
    Allow,
    /// Produce the empty plan and log a warning (default)
    #[default]
    Warn,
    /// Refuse to produce an empty plan
    Reject,
}

impl EmptyPlanPolicy {
    /// Parse a policy name, case-insensitive
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "allow" => Some(Self::Allow),
            "warn" => Some(Self::Warn),
            "reject" => Some(Self::Reject),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_warn() {
        assert_eq!(EmptyPlanPolicy::default(), EmptyPlanPolicy::Warn);
    }

    #[test]
    fn serde_lowercase() {
        let json = r#""reject""#;
        let policy: EmptyPlanPolicy = serde_json::from_str(json).unwrap();
        assert_eq!(policy, EmptyPlanPolicy::Reject);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(EmptyPlanPolicy::parse(" Allow "), Some(EmptyPlanPolicy::Allow));
        assert_eq!(EmptyPlanPolicy::parse("WARN"), Some(EmptyPlanPolicy::Warn));
        assert_eq!(EmptyPlanPolicy::parse("strict"), None);
    }
}
