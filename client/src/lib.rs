pub mod browser;
pub mod config;
pub mod debounce;
pub mod fetch;

pub use browser::PostBrowser;
pub use config::BrowserConfig;
pub use fetch::{FetchError, PostSource, WpClient};
