use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use gtranslate::cli::Args;
use gtranslate::cli::commands::{languages, translate};
use gtranslate::config::ResolveOptions;
use gtranslate::error;
use gtranslate::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let resolve = ResolveOptions {
        url: args.url,
        dest: args.dest,
        src: args.src,
        proxy: args.proxy,
        timeout: args.timeout,
        no_cache: args.no_cache,
    };

    if args.list {
        return languages::run_languages(&resolve).await;
    }

    translate::run_translate(translate::TranslateOptions {
        text: args.text,
        output: args.output,
        resolve,
    })
    .await
}
