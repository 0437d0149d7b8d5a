use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::{Client, Url};
use tracing::debug;

use crate::error::{Error, Result};

pub const BASE_URL: &str = "https://saisonmanager.de";

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125 Safari/537.36";
const ACCEPT_LANGUAGE_DE: &str = "de-DE,de;q=0.9,en;q=0.8";

/// Client for the saisonmanager.de website. There is no public API, so all
/// data is pulled out of the rendered HTML pages.
#[derive(Debug, Clone)]
pub struct SaisonManager {
    http: Client,
    base_url: Url,
}

impl SaisonManager {
    pub fn new() -> Self {
        Self::with_base_url(Url::parse(BASE_URL).expect("valid base url"))
    }

    /// Points the client at a different origin. Used by tests to scrape a
    /// local mock server instead of the live site.
    pub fn with_base_url(base_url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_DE));
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .expect("http client");
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) async fn fetch_html(&self, path: &str) -> Result<String> {
        let url = build_url(&self.base_url, path);
        debug!(%url, "fetching page");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::Network {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                path: path.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| Error::Network {
            path: path.to_string(),
            source,
        })
    }
}

impl Default for SaisonManager {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn build_url(base: &Url, path: &str) -> String {
    base.join(path)
        .map(Into::into)
        .unwrap_or_else(|_| path.to_string())
}
