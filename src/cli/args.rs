use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gtranslate")]
#[command(about = "A simple command-line wrapper around Google Translate")]
#[command(version)]
#[command(after_help = "homepage: https://github.com/suqingdong/simple-googletrans")]
pub struct Args {
    /// Text to translate, or a path to a file (reads stdin or prompts if omitted)
    pub text: Vec<String>,

    /// The url of the translation service [default: translate.googleapis.com]
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// The destination language [default: zh-cn]
    #[arg(short = 'd', long)]
    pub dest: Option<String>,

    /// The source language [default: auto]
    #[arg(short = 's', long)]
    pub src: Option<String>,

    /// Write the result to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// List the available languages
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Use a proxy, e.g. socks5://127.0.0.1:1080
    #[arg(short = 'p', long)]
    pub proxy: Option<String>,

    /// The timeout for translating, in seconds
    #[arg(short = 't', long)]
    pub timeout: Option<f64>,

    /// Disable the translation cache
    #[arg(short = 'n', long)]
    pub no_cache: bool,

    /// Suppress status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
