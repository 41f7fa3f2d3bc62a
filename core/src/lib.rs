pub mod media;
pub mod query;
pub mod render;
pub mod state;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub type PostId = u64;

/// Total page count used when the API does not report a usable one.
pub const FALLBACK_TOTAL_PAGES: u32 = 1;

/// Markup produced by WordPress (`title.rendered`, `excerpt.rendered`).
///
/// The renderer emits this verbatim; every other string it writes is escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(markup: impl Into<String>) -> Self { Self(markup.into()) }
    pub fn as_markup(&self) -> &str { &self.0 }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rendered {
    pub rendered: TrustedHtml,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: Rendered,
    pub excerpt: Rendered,
    pub link: String,
    /// Raw `_embedded` object; only present when the request carried `_embed`.
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<serde_json::Value>,
}

impl Post {
    pub fn featured_image_url(&self) -> &str {
        media::featured_image_url(self.embedded.as_ref())
    }
}

/// One decoded response of the posts collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total_pages: u32,
}

/// Parse the `X-WP-TotalPages` header value, degrading to [`FALLBACK_TOTAL_PAGES`].
pub fn parse_total_pages(header: Option<&str>) -> u32 {
    header
        .and_then(|v| v.trim().parse::<u32>().ok())
        .map(|n| n.max(1))
        .unwrap_or(FALLBACK_TOTAL_PAGES)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Six,
    #[default]
    Twelve,
    Eighteen,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Six, PageSize::Twelve, PageSize::Eighteen];

    pub fn get(self) -> u32 {
        match self {
            PageSize::Six => 6,
            PageSize::Twelve => 12,
            PageSize::Eighteen => 18,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        match n {
            6 => Ok(PageSize::Six),
            12 => Ok(PageSize::Twelve),
            18 => Ok(PageSize::Eighteen),
            _ => Err(InvalidPageSize(n.to_string())),
        }
    }
}

impl FromStr for PageSize {
    type Err = InvalidPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map_err(|_| InvalidPageSize(s.to_string()))
            .and_then(PageSize::try_from)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.get()) }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("page size must be one of 6, 12 or 18 (got `{0}`)")]
pub struct InvalidPageSize(pub String);
