use anyhow::Result;
use std::path::PathBuf;

use super::connect;
use crate::cache::CacheManager;
use crate::config::ResolveOptions;
use crate::fs::write_output;
use crate::input::InputReader;
use crate::translation::language_name;
use crate::ui::Spinner;
use crate::{info, warn};

pub struct TranslateOptions {
    /// Positional words: the text, or a file path.
    pub text: Vec<String>,
    pub output: Option<PathBuf>,
    pub resolve: ResolveOptions,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let (config, mut translator) = connect(&options.resolve).await?;

    if config.cache {
        match CacheManager::new() {
            Ok(cache) => translator = translator.with_cache(cache),
            Err(e) => {
                warn!("translation cache disabled: {e:#}");
            }
        }
    }

    let Some(text) = InputReader::collect(&options.text)? else {
        return Ok(());
    };

    info!(
        "translate into: {} ({})",
        config.dest,
        language_name(&config.dest).unwrap_or("unknown")
    );

    let spinner = Spinner::new("Translating...");
    let result = translator
        .translate_with_progress(&text, &config.dest, |chunk, total| {
            if total > 1 {
                spinner.set_message(format!("Translating chunk {chunk}/{total}..."));
            }
        })
        .await;
    spinner.stop();
    let translated = result?;

    match &options.output {
        Some(path) => {
            write_output(path, &format!("{translated}\n"))?;
            info!("result saved to: {}", path.display());
        }
        None => println!("{translated}"),
    }

    Ok(())
}
