mod client;
mod language;
mod splitter;
mod translator;

pub use client::{
    ClientOptions, DEFAULT_SERVICE_URL, Detected, GoogleClient, TranslateBackend, Translated,
    normalize_service_url, parse_translation,
};
pub use language::{
    AUTO_DETECT, LANGUAGES, language_name, print_languages, render_language_table,
    resolve_language,
};
pub use splitter::{MAX_CHUNK_CHARS, join_translations, split_text};
pub use translator::Translator;
