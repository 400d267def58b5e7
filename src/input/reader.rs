use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::ui;

pub const MAX_INPUT_SIZE: usize = 10 * 1024 * 1024; // 10MB

const PROMPT: &str = "Please input a string or a file";

pub struct InputReader;

impl InputReader {
    /// Builds the source argument from the positional words.
    ///
    /// Words are joined with single spaces. Without words, piped stdin is
    /// read, or the user is prompted on a terminal. Returns `Ok(None)` when
    /// the prompt is cancelled.
    pub fn collect(words: &[String]) -> Result<Option<String>> {
        let joined = words.join(" ");
        if !joined.is_empty() {
            return Ok(Some(joined));
        }

        if io::stdin().is_terminal() {
            ui::prompt_text(PROMPT)
        } else {
            Self::read_stdin().map(Some)
        }
    }

    /// Returns the contents of `text` if it names an existing file, else `text` itself.
    pub fn resolve(text: &str) -> Result<String> {
        let content = if Path::new(text).is_file() {
            Self::read_file(text)?
        } else {
            text.to_string()
        };

        if content.trim().is_empty() {
            bail!("Input is empty");
        }
        Ok(content)
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Input size ({:.1} MB) exceeds maximum allowed size (10 MB).",
                size as f64 / 1024.0 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Input size ({:.1} MB) exceeds maximum allowed size (10 MB).",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
