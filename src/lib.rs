//! # gtranslate - Google Translate from the command line
//!
//! `gtranslate` sends text, or the contents of a file, to the Google Translate
//! web endpoint and prints the translation. Texts longer than the service's
//! per-request limit are split at sentence boundaries and translated chunk by
//! chunk.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate into the default language (zh-cn)
//! gtranslate hello world
//!
//! # Translate a file into Japanese and save the result
//! gtranslate -d ja -o notes.ja.txt ./notes.txt
//!
//! # List the supported languages
//! gtranslate --list
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use gtranslate::translation::{ClientOptions, GoogleClient, Translator};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = GoogleClient::new(&ClientOptions {
//!     service_url: "translate.googleapis.com".to_string(),
//!     ..ClientOptions::default()
//! })?;
//! let translator = Translator::new(client);
//! translator.check_service().await?;
//! println!("{}", translator.translate("hello world", "zh-cn").await?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/gtranslate/config.toml`:
//!
//! ```toml
//! [gtranslate]
//! url = "translate.googleapis.com"
//! dest = "ja"
//! proxy = "socks5://127.0.0.1:1080"
//! timeout = 10.0
//! cache = true
//! ```

/// Translation cache using `SQLite`.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and proxy parsing.
pub mod config;

/// File system utilities.
pub mod fs;

/// Input reading from arguments, files, stdin and the terminal prompt.
pub mod input;

/// Global output configuration and logging macros.
pub mod output;

/// XDG-style path utilities for configuration and cache.
pub mod paths;

/// Translation backend, facade, chunking and language table.
pub mod translation;

/// Terminal UI components (spinner, colors, prompt).
pub mod ui;
