use indexmap::IndexSet;

pub const PLATFORM_IOS: &str = "ios";
pub const PLATFORM_ANDROID: &str = "android";
pub const PLATFORM_WINDOWS: &str = "windows";
/// Reserved platform: web clients carry a normal User-Agent header, so the
/// meta header stops after the environment token for them.
pub const PLATFORM_WEB: &str = "web";

pub const ENV_LOCAL: &str = "local";
pub const ENV_DEVELOPMENT: &str = "development";
pub const ENV_STAGING: &str = "staging";
pub const ENV_PRODUCTION: &str = "production";

const BUILTIN_PLATFORMS: [&str; 4] =
    [PLATFORM_IOS, PLATFORM_ANDROID, PLATFORM_WINDOWS, PLATFORM_WEB];

const BUILTIN_ENVIRONMENTS: [&str; 4] = [ENV_LOCAL, ENV_DEVELOPMENT, ENV_STAGING, ENV_PRODUCTION];

/// Ordered set of accepted tokens for one header field.
///
/// Uses IndexSet to preserve insertion order (built-ins first, configured
/// extras after, duplicates collapsed) so error messages enumerate the
/// accepted tokens deterministically.
#[derive(Debug, Clone)]
pub struct Whitelist(IndexSet<String>);

impl Whitelist {
    /// The built-in platform tokens: ios, android, windows, web.
    pub fn platforms() -> Self {
        Self(BUILTIN_PLATFORMS.iter().map(|s| s.to_string()).collect())
    }

    /// The built-in environment tokens: local, development, staging, production.
    pub fn environments() -> Self {
        Self(BUILTIN_ENVIRONMENTS.iter().map(|s| s.to_string()).collect())
    }

    /// Append configured extra tokens after the built-ins.
    pub fn extend<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(extras.into_iter().map(Into::into));
        self
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Comma-joined token list for validation error messages.
    pub(crate) fn join(&self) -> String {
        self.0
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}
