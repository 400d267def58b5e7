mod manager;
mod proxy;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_DEST, Defaults, ResolveOptions, ResolvedConfig,
    resolve_config,
};
pub use proxy::{ProxySpec, parse_proxy};
