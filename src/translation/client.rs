use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::{Client, Proxy, Url};
use serde_json::Value;
use std::time::Duration;

use super::language::AUTO_DETECT;

/// Service host used when neither the CLI nor the config file names one.
pub const DEFAULT_SERVICE_URL: &str = "translate.googleapis.com";

const TRANSLATE_PATH: &str = "/translate_a/single";

/// A translated piece of text as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub text: String,
    /// Source language reported by the backend.
    pub src: String,
}

/// Result of a language detection call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detected {
    pub lang: String,
}

/// A machine-translation service.
#[async_trait]
pub trait TranslateBackend: Send + Sync {
    /// Translates `text` from `src` (or [`AUTO_DETECT`]) into `dest`.
    async fn translate(&self, text: &str, src: &str, dest: &str) -> Result<Translated>;

    /// Detects the language of `text`.
    async fn detect(&self, text: &str) -> Result<Detected>;

    /// The service URL, for log and error messages.
    fn service_url(&self) -> &str;
}

/// Connection settings for [`GoogleClient`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Host (`translate.googleapis.com`) or full base URL of the service.
    pub service_url: String,
    /// Proxy URL applied to every request.
    pub proxy: Option<String>,
    /// Timeout for a whole request.
    pub timeout: Option<Duration>,
}

/// Client for the Google Translate web endpoint.
pub struct GoogleClient {
    client: Client,
    base_url: Url,
    service_url: String,
}

impl GoogleClient {
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let base_url = normalize_service_url(&options.service_url)?;

        let mut builder = Client::builder();
        if let Some(proxy) = &options.proxy {
            let proxy =
                Proxy::all(proxy.as_str()).with_context(|| format!("Invalid proxy: {proxy}"))?;
            builder = builder.proxy(proxy);
        }
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            service_url: options.service_url.clone(),
        })
    }

    /// Query parameters only; the text goes in the form body.
    fn request_url(&self, src: &str, dest: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(TRANSLATE_PATH);
        url.query_pairs_mut()
            .clear()
            .append_pair("client", "gtx")
            .append_pair("sl", src)
            .append_pair("tl", dest)
            .append_pair("dt", "t");
        url
    }

    async fn fetch(&self, text: &str, src: &str, dest: &str) -> Result<Value> {
        let url = self.request_url(src, dest);

        let response = self
            .client
            .post(url)
            .form(&[("q", text)])
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to translation service: {}",
                    self.service_url
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Translation request failed with status {status}: {body}");
        }

        response
            .json::<Value>()
            .await
            .context("Failed to decode translation response")
    }
}

#[async_trait]
impl TranslateBackend for GoogleClient {
    async fn translate(&self, text: &str, src: &str, dest: &str) -> Result<Translated> {
        let data = self.fetch(text, src, dest).await?;
        parse_translation(&data)
    }

    async fn detect(&self, text: &str) -> Result<Detected> {
        let data = self.fetch(text, AUTO_DETECT, "en").await?;
        parse_translation(&data).map(|translated| Detected {
            lang: translated.src,
        })
    }

    fn service_url(&self) -> &str {
        &self.service_url
    }
}

/// Turns a host or URL into the service base URL; bare hosts use https.
pub fn normalize_service_url(raw: &str) -> Result<Url> {
    let raw = raw.trim().trim_end_matches('/');
    if raw.is_empty() {
        bail!("Service URL is empty");
    }

    let with_scheme = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };

    let url = Url::parse(&with_scheme).with_context(|| format!("Invalid service URL: {raw}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("Unsupported service URL scheme: {}", url.scheme());
    }
    Ok(url)
}

/// Extracts the translation from a `translate_a/single` response.
///
/// The body is a JSON array: element 0 holds `[translated, original, ...]`
/// segments, element 2 the detected source language.
pub fn parse_translation(data: &Value) -> Result<Translated> {
    let segments = data
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| anyhow!("Unexpected translation response: {data}"))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    let src = data
        .get(2)
        .and_then(Value::as_str)
        .unwrap_or(AUTO_DETECT)
        .to_string();

    Ok(Translated { text, src })
}
