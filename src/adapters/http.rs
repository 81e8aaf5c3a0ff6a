use crate::domain::ports::FeedSource;
use crate::utils::error::{FeedError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

const ACCEPT_FEED: &str = "application/opds+json, application/json;q=0.9, */*;q=0.1";

/// 透過 HTTP(S) 提供的 feed，以單一 GET 取得
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    client: Client,
    headers: HashMap<String, String>,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self> {
        Self::with_timeout(url, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn with_timeout(url: &str, timeout: Duration) -> Result<Self> {
        validate_url("source", url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.to_string(),
            client,
            headers: HashMap::new(),
        })
    }

    /// 額外的請求標頭 (例如私有目錄的授權)
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }
}

#[async_trait]
impl FeedSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Making API request to: {}", self.url);
        let mut request = self.client.get(&self.url).header(ACCEPT, ACCEPT_FEED);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(FeedError::HttpStatusError {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
