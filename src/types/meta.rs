use serde::Serialize;

use crate::helpers::split_version;
use crate::whitelist::PLATFORM_WEB;

/// Structured client metadata parsed from one meta header.
///
/// Immutable after construction; one instance per inbound header value.
/// Serializes to a key-ordered mapping (platform, environment, version,
/// majorVersion, minorVersion, patchVersion, deviceOsVersion, device) for
/// logging/telemetry use by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientMeta {
    platform: String,
    environment: String,
    version: String,
    major_version: u32,
    minor_version: u32,
    patch_version: u32,
    device_os_version: Option<String>,
    device: Option<String>,
}

impl ClientMeta {
    /// Web clients carry a normal User-Agent header, so the meta header stops
    /// after the environment token and the version/device fields keep their
    /// defaults.
    pub(crate) fn web(platform: String, environment: String) -> Self {
        Self {
            platform,
            environment,
            version: "0".to_string(),
            major_version: 0,
            minor_version: 0,
            patch_version: 0,
            device_os_version: None,
            device: None,
        }
    }

    pub(crate) fn native(
        platform: String,
        environment: String,
        version: String,
        device_os_version: String,
        device: String,
    ) -> Self {
        let (major_version, minor_version, patch_version) = split_version(&version);
        Self {
            platform,
            environment,
            version,
            major_version,
            minor_version,
            patch_version,
            device_os_version: Some(device_os_version),
            device: Some(device),
        }
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// The raw version token, e.g. "2.10.3". "0" for web clients.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn major_version(&self) -> u32 {
        self.major_version
    }

    pub fn minor_version(&self) -> u32 {
        self.minor_version
    }

    pub fn patch_version(&self) -> u32 {
        self.patch_version
    }

    pub fn device_os_version(&self) -> Option<&str> {
        self.device_os_version.as_deref()
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    pub fn is_web(&self) -> bool {
        self.platform == PLATFORM_WEB
    }
}
