//! Search knobs, loadable from JSON and overridable from the environment.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const ENV_MAX_SETTLED: &str = "RCSP_MAX_SETTLED";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Stop with `Aborted` once this many labels have been settled without
    /// reaching the target. `None` runs until the frontier is exhausted.
    pub max_settled: Option<usize>,
}

impl SearchConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> { Ok(serde_json::from_str(json)?) }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> { Self::default().with_env_overrides() }

    pub fn with_env_overrides(self) -> Result<Self, ConfigError> { self.with_overrides(|name| std::env::var(name).ok()) }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(ENV_MAX_SETTLED) {
            let trimmed = raw.trim();
            self.max_settled = match trimmed {
                "" | "none" | "off" => None,
                _ => Some(trimmed.parse().map_err(|_| ConfigError::Env { name: ENV_MAX_SETTLED, value: raw.clone() })?),
            };
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_and_rejects_unknown_fields() {
        assert_eq!(SearchConfig::from_json(r#"{"max_settled": 12}"#).unwrap().max_settled, Some(12));
        assert_eq!(SearchConfig::from_json("{}").unwrap(), SearchConfig::default());
        assert!(matches!(SearchConfig::from_json(r#"{"max_cost": 3}"#), Err(ConfigError::Json(_))));
    }

    fn set(value: &'static str) -> impl Fn(&str) -> Option<String> {
        move |name| (name == ENV_MAX_SETTLED).then(|| value.to_string())
    }

    #[test]
    fn env_overrides() {
        let base = SearchConfig { max_settled: Some(3) };
        assert_eq!(base.clone().with_overrides(set("40")).unwrap().max_settled, Some(40));
        assert_eq!(base.clone().with_overrides(set("off")).unwrap().max_settled, None);
        assert_eq!(base.clone().with_overrides(|_| None).unwrap().max_settled, Some(3));
        assert!(matches!(
            base.with_overrides(set("many")),
            Err(ConfigError::Env { name: ENV_MAX_SETTLED, .. })
        ));
    }
}
