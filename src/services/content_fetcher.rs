use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use scraper::{Html, Node, Selector};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Elements whose text never renders.
const HIDDEN_ELEMENTS: [&str; 5] = ["script", "style", "noscript", "template", "head"];

/// Text extracted from one page, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageText {
    Text(String),
    /// The page declared a non-English language while English-only was on.
    Filtered { language: String },
    Unavailable(String),
}

impl PageText {
    /// Collapses to the plain string used in prompts; anything but `Text` is empty.
    pub fn into_text(self) -> String {
        match self {
            PageText::Text(text) => text,
            PageText::Filtered { .. } | PageText::Unavailable(_) => String::new(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str, max_chars: usize, english_only: bool) -> PageText;
}

pub struct HttpPageFetcher {
    client: reqwest::Client,
    max_body_bytes: usize,
}

impl HttpPageFetcher {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build page client: {}", e)))?;

        Ok(Self {
            client,
            max_body_bytes: config.max_page_bytes,
        })
    }

    async fn fetch_html(&self, url: &str) -> Result<String, String> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {}", status));
        }

        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| format!("failed to read body: {}", e))?
        {
            if append_capped(&mut body, &chunk, self.max_body_bytes) {
                log::debug!("Truncated {} at {} bytes", url, self.max_body_bytes);
                break;
            }
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_text(&self, url: &str, max_chars: usize, english_only: bool) -> PageText {
        let html = match self.fetch_html(url).await {
            Ok(html) => html,
            Err(reason) => {
                log::warn!("Could not fetch {}: {}", url, reason);
                return PageText::Unavailable(reason);
            }
        };

        let page = extract_page_text(&html, max_chars, english_only);
        if let PageText::Filtered { language } = &page {
            log::info!("Skipping {}: declared language '{}'", url, language);
        }
        page
    }
}

/// Appends as much of `chunk` as fits under `limit` bytes. Returns true once
/// the buffer is full and reading should stop.
pub fn append_capped(body: &mut Vec<u8>, chunk: &[u8], limit: usize) -> bool {
    let room = limit.saturating_sub(body.len());
    body.extend_from_slice(&chunk[..chunk.len().min(room)]);
    body.len() >= limit
}

/// Parses `html`, applies the English-only check and returns visible text
/// collapsed to single spaces and cut to `max_chars` characters.
pub fn extract_page_text(html: &str, max_chars: usize, english_only: bool) -> PageText {
    let document = Html::parse_document(html);

    if english_only {
        if let Some(language) = declared_language(&document) {
            if !language.to_ascii_lowercase().starts_with("en") {
                return PageText::Filtered { language };
            }
        }
    }

    PageText::Text(visible_text(&document).chars().take(max_chars).collect())
}

/// The root `lang` attribute, else a `content-language` http-equiv meta tag.
/// Blank values count as undeclared.
pub fn declared_language(document: &Html) -> Option<String> {
    let from_root = document
        .root_element()
        .value()
        .attr("lang")
        .map(str::trim)
        .filter(|lang| !lang.is_empty());

    if let Some(lang) = from_root {
        return Some(lang.to_string());
    }

    let meta = Selector::parse("meta[http-equiv]").ok()?;
    document
        .select(&meta)
        .find(|el| {
            el.value()
                .attr("http-equiv")
                .is_some_and(|v| v.trim().eq_ignore_ascii_case("content-language"))
        })
        .and_then(|el| el.value().attr("content"))
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
}

fn visible_text(document: &Html) -> String {
    let mut words: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });

        if !hidden {
            words.extend(text.split_whitespace());
        }
    }

    words.join(" ")
}
