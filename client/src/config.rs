use postcore::query::DEFAULT_ENDPOINT;
use postcore::PageSize;
use std::time::Duration;
use url::Url;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);
pub const DEFAULT_USER_AGENT: &str = concat!("wp-post-browser/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// WordPress posts collection, e.g. `https://host/wp-json/wp/v2/posts`.
    pub endpoint: Url,
    /// Quiet period after the last search edit before it is committed.
    pub debounce: Duration,
    pub page_size: PageSize,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("valid default endpoint"),
            debounce: DEFAULT_DEBOUNCE,
            page_size: PageSize::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl BrowserConfig {
    pub fn with_endpoint(endpoint: Url) -> Self {
        Self { endpoint, ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_public_listing() {
        let c = BrowserConfig::default();
        assert_eq!(c.endpoint.as_str(), "https://techcrunch.com/wp-json/wp/v2/posts");
        assert_eq!(c.debounce, Duration::from_millis(500));
        assert_eq!(c.page_size.get(), 12);
        assert!(c.user_agent.starts_with("wp-post-browser/"));
    }
}
