use crate::config::BrowserConfig;
use postcore::query::PostQuery;
use postcore::{parse_total_pages, Post, PostPage};
use reqwest::{header, Client, StatusCode, Url};
use std::future::Future;
use thiserror::Error;
use tracing::debug;

pub const TOTAL_PAGES_HEADER: &str = "X-WP-TotalPages";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered {status}")]
    Status { url: String, status: StatusCode },
    #[error("response from {url} is not a post list: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that can answer a [`PostQuery`].
pub trait PostSource: Send + Sync + 'static {
    fn fetch(&self, query: &PostQuery) -> impl Future<Output = Result<PostPage, FetchError>> + Send;
}

/// HTTP client for a WordPress posts collection.
#[derive(Debug, Clone)]
pub struct WpClient {
    http: Client,
    endpoint: Url,
}

impl WpClient {
    pub fn new(config: &BrowserConfig) -> reqwest::Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, endpoint: config.endpoint.clone() })
    }

    pub fn endpoint(&self) -> &Url { &self.endpoint }

    pub async fn fetch_page(&self, query: &PostQuery) -> Result<PostPage, FetchError> {
        let url = query.url(&self.endpoint);
        debug!(%url, "GET posts");
        let resp = self
            .http
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status });
        }

        let total_pages = parse_total_pages(
            resp.headers().get(TOTAL_PAGES_HEADER).and_then(|v| v.to_str().ok()),
        );
        let bytes = resp
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;
        let posts: Vec<Post> = serde_json::from_slice(&bytes)
            .map_err(|source| FetchError::Decode { url: url.to_string(), source })?;

        Ok(PostPage { posts, total_pages })
    }
}

impl PostSource for WpClient {
    fn fetch(&self, query: &PostQuery) -> impl Future<Output = Result<PostPage, FetchError>> + Send {
        self.fetch_page(query)
    }
}
