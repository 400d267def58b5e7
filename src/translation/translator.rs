//! Translation facade: health check, chunked translation and the language table.

use anyhow::{Context, Result};

use super::client::TranslateBackend;
use super::language::{AUTO_DETECT, print_languages};
use super::splitter::{MAX_CHUNK_CHARS, join_translations, split_text};
use crate::cache::{CacheKey, CacheManager};
use crate::input::InputReader;

/// Text sent by [`Translator::check_service`].
const PROBE_TEXT: &str = "hello world";

pub struct Translator<B> {
    backend: B,
    cache: Option<CacheManager>,
    src: String,
    max_chunk_chars: usize,
}

impl<B: TranslateBackend> Translator<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            cache: None,
            src: AUTO_DETECT.to_string(),
            max_chunk_chars: MAX_CHUNK_CHARS,
        }
    }

    #[must_use]
    pub fn with_cache(mut self, cache: CacheManager) -> Self {
        self.cache = Some(cache);
        self
    }

    #[must_use]
    pub fn with_source_language(mut self, src: &str) -> Self {
        self.src = src.to_string();
        self
    }

    #[must_use]
    pub fn with_max_chunk_chars(mut self, max_chunk_chars: usize) -> Self {
        self.max_chunk_chars = max_chunk_chars;
        self
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Fails fast when the backend cannot answer a trivial detection request.
    pub async fn check_service(&self) -> Result<()> {
        self.backend
            .detect(PROBE_TEXT)
            .await
            .with_context(|| format!("service not available: {}", self.backend.service_url()))?;
        Ok(())
    }

    /// Translates `text` (or the contents of the file it names) into `dest`.
    pub async fn translate(&self, text: &str, dest: &str) -> Result<String> {
        self.translate_with_progress(text, dest, |_, _| {}).await
    }

    /// Like [`Translator::translate`], reporting `(chunk, total)` before each chunk.
    pub async fn translate_with_progress(
        &self,
        text: &str,
        dest: &str,
        mut on_chunk: impl FnMut(usize, usize) + Send,
    ) -> Result<String> {
        let text = InputReader::resolve(text)?;
        let chunks = split_text(&text, self.max_chunk_chars);

        let mut translated = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            on_chunk(index + 1, chunks.len());
            let piece = self
                .translate_chunk(chunk, dest)
                .await
                .with_context(|| {
                    format!("Failed to translate chunk {}/{}", index + 1, chunks.len())
                })?;
            translated.push(piece);
        }

        Ok(join_translations(&translated, dest))
    }

    async fn translate_chunk(&self, chunk: &str, dest: &str) -> Result<String> {
        let key = CacheKey {
            service_url: self.backend.service_url(),
            src: &self.src,
            dest,
            text: chunk,
        };

        if let Some(cache) = &self.cache
            && let Some(cached) = cache.get(&key)?
        {
            return Ok(cached);
        }

        let translated = self.backend.translate(chunk, &self.src, dest).await?;

        if let Some(cache) = &self.cache
            && !translated.text.is_empty()
        {
            cache.put(&key, &translated.text)?;
        }

        Ok(translated.text)
    }

    /// Prints the table of supported languages.
    #[allow(clippy::unused_self)]
    pub fn show_languages(&self) {
        print_languages();
    }
}
