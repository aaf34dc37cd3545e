//! Runtime settings for the documentation generator.
//!
//! The `doc` command takes no flags, so settings come from built-in defaults
//! layered under `LINKERD_DOC_*` environment variables.

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

use crate::error::DocError;

/// Prefix for environment variables read by [`DocConfig::load`].
pub const ENV_PREFIX: &str = "LINKERD_DOC_";

/// Settings for a `linkerd doc` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocConfig {
    /// `tracing` filter directive applied to diagnostics on stderr.
    pub log_filter: String,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_owned(),
        }
    }
}

impl DocConfig {
    /// Defaults merged with `LINKERD_DOC_*` environment variables.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Loads the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::Configuration`] when an environment value cannot
    /// be decoded.
    pub fn load() -> Result<Self, DocError> {
        Self::figment().extract().map_err(DocError::from)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn defaults_apply_without_environment() {
        figment::Jail::expect_with(|_jail| {
            let config = DocConfig::load().map_err(<figment::Error as serde::de::Error>::custom)?;
            assert_eq!(config, DocConfig::default());
            Ok(())
        });
    }

    #[rstest]
    fn environment_overrides_log_filter() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LINKERD_DOC_LOG_FILTER", "linkerd_doc=debug");
            let config = DocConfig::load().map_err(<figment::Error as serde::de::Error>::custom)?;
            assert_eq!(config.log_filter, "linkerd_doc=debug");
            Ok(())
        });
    }

    #[rstest]
    fn unrelated_variables_are_ignored() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LINKERD_LOG_FILTER", "trace");
            let config: DocConfig = DocConfig::figment().extract()?;
            assert_eq!(config.log_filter, "warn");
            Ok(())
        });
    }
}
