mod config;
mod error;
mod helpers;
mod parser;
mod types;
mod whitelist;

pub use config::MetaConfig;
pub use error::{Error, MetaError, Result};
pub use parser::MetaParser;
pub use types::*;
pub use whitelist::{
    Whitelist, ENV_DEVELOPMENT, ENV_LOCAL, ENV_PRODUCTION, ENV_STAGING, PLATFORM_ANDROID,
    PLATFORM_IOS, PLATFORM_WEB, PLATFORM_WINDOWS,
};
