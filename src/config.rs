use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::whitelist::Whitelist;

/// Extra whitelist tokens supplied by the host, merged with the built-ins.
///
/// Expected YAML shape (both keys optional):
///
/// ```yaml
/// platforms:
///   - smarttv
/// environments:
///   - qa
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetaConfig {
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub environments: Vec<String>,
}

impl MetaConfig {
    /// Load extra whitelist tokens from a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Built-in platforms followed by the configured extras.
    pub(crate) fn platform_whitelist(&self) -> Whitelist {
        Whitelist::platforms().extend(self.platforms.iter().cloned())
    }

    /// Built-in environments followed by the configured extras.
    pub(crate) fn environment_whitelist(&self) -> Whitelist {
        Whitelist::environments().extend(self.environments.iter().cloned())
    }
}
