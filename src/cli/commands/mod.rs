//! Command implementations.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::status;
use crate::translation::{ClientOptions, GoogleClient, Translator};

/// Language table listing.
pub mod languages;

/// Translation command handler.
pub mod translate;

/// Resolves configuration, builds the client and checks that the service answers.
pub(crate) async fn connect(
    options: &ResolveOptions,
) -> Result<(ResolvedConfig, Translator<GoogleClient>)> {
    let file_config = ConfigManager::new()?.load_or_default()?;
    let config = resolve_config(options, &file_config)?;

    if let Some(proxy) = &config.proxy {
        status!("use proxies: {proxy}");
    }

    let client = GoogleClient::new(&ClientOptions {
        service_url: config.service_url.clone(),
        proxy: config.proxy.as_ref().map(|p| p.url()),
        timeout: config.timeout,
    })?;

    let translator = Translator::new(client).with_source_language(&config.src);
    translator.check_service().await?;

    Ok((config, translator))
}
