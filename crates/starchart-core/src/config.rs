//! Configuration for the record engine
//!
//! Settings arrive from the environment of the surrounding service but are
//! passed into the engine as an explicit value, keeping the validator and
//! quota gate free of ad-hoc process-state reads.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable holding the root domain suffix
pub const ROOT_DOMAIN_VAR: &str = "ROOT_DOMAIN";

/// Environment variable holding the per-user record limit
pub const RECORD_LIMIT_VAR: &str = "USER_DNS_RECORD_LIMIT";

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarchartConfig {
    /// Root domain all user subdomains are scoped under (e.g. "starchart.com")
    pub root_domain: String,

    /// Maximum number of records a single user may own.
    /// `None` means no limit is enforced.
    #[serde(default)]
    pub user_record_limit: Option<u32>,
}

impl StarchartConfig {
    /// Create a configuration with no per-user limit
    pub fn new(root_domain: impl Into<String>) -> Self {
        Self {
            root_domain: root_domain.into(),
            user_record_limit: None,
        }
    }

    /// Set the per-user record limit
    pub fn with_record_limit(mut self, limit: u32) -> Self {
        self.user_record_limit = Some(limit);
        self
    }

    /// Read configuration from the process environment
    ///
    /// `ROOT_DOMAIN` is required; `USER_DNS_RECORD_LIMIT` is optional and
    /// unset means unlimited.
    pub fn from_env() -> Result<Self, crate::Error> {
        let root_domain = std::env::var(ROOT_DOMAIN_VAR)
            .map_err(|_| crate::Error::config(format!("{ROOT_DOMAIN_VAR} is not set")))?;

        let user_record_limit = match std::env::var(RECORD_LIMIT_VAR) {
            Ok(raw) => Some(raw.parse::<u32>().map_err(|_| {
                crate::Error::config(format!("{RECORD_LIMIT_VAR} is not a valid integer: {raw}"))
            })?),
            Err(_) => None,
        };

        debug!(%root_domain, ?user_record_limit, "loaded configuration from environment");

        let config = Self {
            root_domain,
            user_record_limit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.root_domain.is_empty() {
            return Err(crate::Error::config("root domain cannot be empty"));
        }
        if self.root_domain.starts_with('.') || self.root_domain.ends_with('.') {
            return Err(crate::Error::config(
                "root domain cannot start or end with a dot",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_root_domain() {
        let config = StarchartConfig::new("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_dotted_edges() {
        assert!(StarchartConfig::new(".starchart.com").validate().is_err());
        assert!(StarchartConfig::new("starchart.com.").validate().is_err());
        assert!(StarchartConfig::new("starchart.com").validate().is_ok());
    }

    #[test]
    fn builder_sets_limit() {
        let config = StarchartConfig::new("starchart.com").with_record_limit(5);
        assert_eq!(config.user_record_limit, Some(5));
    }
}
