use anyhow::Result;

use super::connect;
use crate::config::ResolveOptions;

/// Prints the supported languages once the service has answered the health check.
pub async fn run_languages(options: &ResolveOptions) -> Result<()> {
    let (_, translator) = connect(options).await?;
    translator.show_languages();
    Ok(())
}
