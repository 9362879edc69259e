use crate::config::MetaConfig;
use crate::error::MetaError;
use crate::types::ClientMeta;
use crate::whitelist::{Whitelist, PLATFORM_WEB};

/// Parses meta headers against a pair of whitelists.
///
/// Build one per process and pass it to callers explicitly. `parse()` takes
/// `&self` and allocates only local data, so a shared instance is safe to use
/// from any number of threads or requests without coordination.
pub struct MetaParser {
    platforms: Whitelist,
    environments: Whitelist,
}

impl MetaParser {
    /// A parser accepting only the built-in platforms and environments.
    pub fn new() -> Self {
        Self {
            platforms: Whitelist::platforms(),
            environments: Whitelist::environments(),
        }
    }

    /// A parser accepting the built-ins plus the configured extras.
    pub fn from_config(config: &MetaConfig) -> Self {
        Self {
            platforms: config.platform_whitelist(),
            environments: config.environment_whitelist(),
        }
    }

    /// A parser over fully caller-supplied whitelists.
    pub fn with_whitelists(platforms: Whitelist, environments: Whitelist) -> Self {
        Self {
            platforms,
            environments,
        }
    }

    /// Parse one meta header value into a [`ClientMeta`] record.
    ///
    /// The header is split on `;` into positional tokens, untrimmed:
    /// platform, environment, and for non-web platforms also version,
    /// device OS version, and device identifier. Fails fast on the first
    /// violation.
    pub fn parse(&self, header: &str) -> Result<ClientMeta, MetaError> {
        let mut tokens = header.split(';');

        let platform = tokens
            .next()
            .filter(|t| self.platforms.contains(*t))
            .ok_or_else(|| MetaError::UnsupportedPlatform {
                allowed: self.platforms.join(),
            })?
            .to_string();

        let environment = tokens
            .next()
            .filter(|t| self.environments.contains(*t))
            .ok_or_else(|| MetaError::UnsupportedEnvironment {
                allowed: self.environments.join(),
            })?
            .to_string();

        // Web has no further positional fields; a normal User-Agent header
        // already carries that information.
        if platform == PLATFORM_WEB {
            return Ok(ClientMeta::web(platform, environment));
        }

        let version = tokens.next().ok_or(MetaError::MissingVersion)?.to_string();

        let device_os_version = tokens
            .next()
            .ok_or(MetaError::MissingDeviceOsVersion)?
            .to_string();

        let device = tokens.next().ok_or(MetaError::MissingDevice)?.to_string();

        Ok(ClientMeta::native(
            platform,
            environment,
            version,
            device_os_version,
            device,
        ))
    }
}

impl Default for MetaParser {
    fn default() -> Self {
        Self::new()
    }
}
