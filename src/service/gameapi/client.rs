use std::{fmt, time::Duration};

use reqwest::blocking::Client;
use tracing::debug;

/// Read-only access to the static data feed.
///
/// Implementations must be shareable across the worker threads that fetch the
/// data documents in parallel.
pub trait DataFeed: Send + Sync {
    fn get_text(&self, url: &str) -> Result<String, RequestError>;

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, RequestError>;
}

/// Data Dragon over HTTP.
pub struct DdragonClient {
    client: Client,
}

impl DdragonClient {
    pub fn new(timeout: Duration) -> Result<Self, ClientInitError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    fn send(&self, url: &str) -> Result<reqwest::blocking::Response, RequestError> {
        debug!(url, "GET");
        let response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(RequestError::InvalidResponse(
                response.status().as_u16(),
                url.to_string(),
            ));
        }
        Ok(response)
    }
}

impl DataFeed for DdragonClient {
    fn get_text(&self, url: &str) -> Result<String, RequestError> {
        let text = self.send(url)?.text()?;
        Ok(text)
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>, RequestError> {
        let bytes = self.send(url)?.bytes()?;
        Ok(bytes.to_vec())
    }
}

/// URL layout of the feed for one locale.
#[derive(Debug, Clone)]
pub struct FeedEndpoints {
    base_url: String,
    locale: String,
}

impl FeedEndpoints {
    pub fn new(base_url: &str, locale: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            locale: locale.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn versions(&self) -> String {
        format!("{}/api/versions.json", self.base_url)
    }

    pub fn document(&self, version: &str, document: FeedDocument) -> String {
        format!(
            "{}/cdn/{}/data/{}/{}",
            self.base_url,
            version,
            self.locale,
            document.file_name()
        )
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum FeedDocument {
    Champions,
    Items,
    SummonerSpells,
    RuneTrees,
}

impl FeedDocument {
    pub const ALL: [FeedDocument; 4] = [
        FeedDocument::Champions,
        FeedDocument::Items,
        FeedDocument::SummonerSpells,
        FeedDocument::RuneTrees,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            FeedDocument::Champions => "champion.json",
            FeedDocument::Items => "item.json",
            FeedDocument::SummonerSpells => "summoner.json",
            FeedDocument::RuneTrees => "runesReforged.json",
        }
    }
}

#[derive(Debug)]
pub enum ClientInitError {
    HttpClientCreation(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::HttpClientCreation(e) => {
                write!(f, "Failed to create HTTP client: {}", e)
            }
        }
    }
}

impl std::error::Error for ClientInitError {}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::HttpClientCreation(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    NetworkError(reqwest::Error),
    InvalidResponse(u16, String),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::NetworkError(e) => write!(f, "Network error: {}", e),
            RequestError::InvalidResponse(status, url) => {
                write!(f, "Server returned error {} for {}", status, url)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError(error)
    }
}
