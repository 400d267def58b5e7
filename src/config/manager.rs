use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use super::proxy::{ProxySpec, parse_proxy};
use crate::paths;
use crate::translation::{AUTO_DETECT, DEFAULT_SERVICE_URL, resolve_language};

/// Destination language used when neither the CLI nor the config file names one.
pub const DEFAULT_DEST: &str = "zh-cn";

/// Default settings in the `[gtranslate]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Defaults {
    /// Translation service host or URL.
    pub url: Option<String>,
    /// Destination language.
    pub dest: Option<String>,
    /// Source language (`auto` to detect).
    pub src: Option<String>,
    /// Proxy URL.
    pub proxy: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<f64>,
    /// Whether translated chunks are cached.
    pub cache: Option<bool>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/gtranslate/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub gtranslate: Defaults,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub url: Option<String>,
    pub dest: Option<String>,
    pub src: Option<String>,
    pub proxy: Option<String>,
    pub timeout: Option<f64>,
    pub no_cache: bool,
}

/// Settings for one invocation after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub service_url: String,
    /// Destination language abbreviation.
    pub dest: String,
    /// Source language abbreviation or `auto`.
    pub src: String,
    pub proxy: Option<ProxySpec>,
    pub timeout: Option<Duration>,
    pub cache: bool,
}

/// Resolves configuration: CLI options, then the config file, then built-in defaults.
///
/// # Errors
///
/// Returns an error for an unknown language, an invalid proxy or a
/// non-positive timeout.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let defaults = &config_file.gtranslate;

    let service_url = options
        .url
        .as_ref()
        .or(defaults.url.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

    let dest = options
        .dest
        .as_deref()
        .or(defaults.dest.as_deref())
        .unwrap_or(DEFAULT_DEST);
    let dest = resolve_language(dest, false)?.to_string();

    let src = options
        .src
        .as_deref()
        .or(defaults.src.as_deref())
        .unwrap_or(AUTO_DETECT);
    let src = resolve_language(src, true)?.to_string();

    let proxy = options
        .proxy
        .as_deref()
        .or(defaults.proxy.as_deref())
        .map(parse_proxy)
        .transpose()?;

    let timeout = options
        .timeout
        .or(defaults.timeout)
        .map(timeout_from_secs)
        .transpose()?;

    let cache = !options.no_cache && defaults.cache.unwrap_or(true);

    Ok(ResolvedConfig {
        service_url,
        dest,
        src,
        proxy,
        timeout,
        cache,
    })
}

fn timeout_from_secs(secs: f64) -> Result<Duration> {
    if !secs.is_finite() || secs <= 0.0 {
        bail!("Invalid timeout: {secs} (expected a positive number of seconds)");
    }
    Duration::try_from_secs_f64(secs).with_context(|| format!("Invalid timeout: {secs}"))
}

/// Locates and loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/gtranslate/config.toml`
    /// or `~/.config/gtranslate/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir, contents: Option<&str>) -> ConfigManager {
        let path = temp_dir.path().join("config.toml");
        if let Some(contents) = contents {
            fs::write(&path, contents).unwrap();
        }
        ConfigManager::with_path(path)
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(
            &temp_dir,
            Some(
                r#"[gtranslate]
url = "translate.google.com"
dest = "ja"
src = "en"
proxy = "socks5://127.0.0.1:1080"
timeout = 2.5
cache = false
"#,
            ),
        );

        let loaded = manager.load().unwrap();

        assert_eq!(
            loaded,
            ConfigFile {
                gtranslate: Defaults {
                    url: Some("translate.google.com".to_string()),
                    dest: Some("ja".to_string()),
                    src: Some("en".to_string()),
                    proxy: Some("socks5://127.0.0.1:1080".to_string()),
                    timeout: Some(2.5),
                    cache: Some(false),
                },
            }
        );
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir, None);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir, Some("[gtranslate\nurl = "));

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir, Some("[gtranslate]\ndest = \"fr\"\n"));

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.gtranslate.dest.as_deref(), Some("fr"));
        assert!(loaded.gtranslate.url.is_none());
    }

    #[test]
    fn test_resolve_config_defaults() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(resolved.dest, "zh-cn");
        assert_eq!(resolved.src, "auto");
        assert!(resolved.proxy.is_none());
        assert!(resolved.timeout.is_none());
        assert!(resolved.cache);
    }

    #[test]
    fn test_resolve_config_normalizes_languages() {
        let options = ResolveOptions {
            dest: Some("Japanese".to_string()),
            src: Some("EN".to_string()),
            ..ResolveOptions::default()
        };

        let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();

        assert_eq!(resolved.dest, "ja");
        assert_eq!(resolved.src, "en");
    }

    #[test]
    fn test_resolve_config_rejects_auto_destination() {
        let options = ResolveOptions {
            dest: Some("auto".to_string()),
            ..ResolveOptions::default()
        };

        assert!(resolve_config(&options, &ConfigFile::default()).is_err());
    }

    #[test]
    fn test_resolve_config_timeout() {
        let options = ResolveOptions {
            timeout: Some(1.5),
            ..ResolveOptions::default()
        };

        let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();
        assert_eq!(resolved.timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_resolve_config_invalid_timeout() {
        for timeout in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let options = ResolveOptions {
                timeout: Some(timeout),
                ..ResolveOptions::default()
            };
            let result = resolve_config(&options, &ConfigFile::default());
            assert!(result.unwrap_err().to_string().contains("Invalid timeout"));
        }
    }

    #[test]
    fn test_resolve_config_proxy() {
        let options = ResolveOptions {
            proxy: Some("127.0.0.1:1080".to_string()),
            ..ResolveOptions::default()
        };

        let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();
        assert_eq!(resolved.proxy.unwrap().url(), "http://127.0.0.1:1080");
    }

    #[test]
    fn test_resolve_config_cache_switches() {
        let mut config = ConfigFile::default();
        config.gtranslate.cache = Some(false);
        assert!(!resolve_config(&ResolveOptions::default(), &config).unwrap().cache);

        let options = ResolveOptions {
            no_cache: true,
            ..ResolveOptions::default()
        };
        assert!(!resolve_config(&options, &ConfigFile::default()).unwrap().cache);
    }
}
