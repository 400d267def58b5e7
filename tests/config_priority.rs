#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use gtranslate::config::{ConfigFile, Defaults, ResolveOptions, resolve_config};
use std::time::Duration;

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        gtranslate: Defaults {
            url: Some("translate.google.com".to_string()),
            dest: Some("ja".to_string()),
            src: Some("en".to_string()),
            proxy: Some("socks5://127.0.0.1:1080".to_string()),
            timeout: Some(10.0),
            cache: Some(true),
        },
    }
}

#[test]
fn test_config_file_values_used_without_cli() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.service_url, "translate.google.com");
    assert_eq!(resolved.dest, "ja");
    assert_eq!(resolved.src, "en");
    assert_eq!(resolved.proxy.unwrap().url(), "socks5://127.0.0.1:1080");
    assert_eq!(resolved.timeout, Some(Duration::from_secs(10)));
    assert!(resolved.cache);
}

#[test]
fn test_all_cli_options_override_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        url: Some("http://localhost:5000".to_string()),
        dest: Some("fr".to_string()),
        src: Some("auto".to_string()),
        proxy: Some("http://proxy.local:3128".to_string()),
        timeout: Some(0.5),
        no_cache: true,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.service_url, "http://localhost:5000");
    assert_eq!(resolved.dest, "fr");
    assert_eq!(resolved.src, "auto");
    assert_eq!(resolved.proxy.unwrap().url(), "http://proxy.local:3128");
    assert_eq!(resolved.timeout, Some(Duration::from_millis(500)));
    assert!(!resolved.cache);
}

#[test]
fn test_cli_dest_overrides_only_dest() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        dest: Some("korean".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.dest, "ko");
    assert_eq!(resolved.service_url, "translate.google.com");
    assert_eq!(resolved.src, "en");
}

#[test]
fn test_builtin_defaults_without_file() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.service_url, "translate.googleapis.com");
    assert_eq!(resolved.dest, "zh-cn");
    assert_eq!(resolved.src, "auto");
}

#[test]
fn test_invalid_language_in_config_file_is_error() {
    let mut config = make_config_with_defaults();
    config.gtranslate.dest = Some("elvish".to_string());

    assert!(resolve_config(&ResolveOptions::default(), &config).is_err());
}

#[test]
fn test_cli_overrides_invalid_config_value() {
    let mut config = make_config_with_defaults();
    config.gtranslate.dest = Some("elvish".to_string());
    let options = ResolveOptions {
        dest: Some("de".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();
    assert_eq!(resolved.dest, "de");
}
