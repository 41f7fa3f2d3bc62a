use crate::PageSize;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://techcrunch.com/wp-json/wp/v2/posts";

/// The committed (page size, page, search) triple a fetch is issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub per_page: PageSize,
    pub page: u32,
    pub search: String,
}

impl PostQuery {
    /// Query string in the order the posts collection is always asked:
    /// `_embed`, `per_page`, `page`, then `search` only when non-empty.
    pub fn query_string(&self) -> String {
        let mut q = format!("_embed&per_page={}&page={}", self.per_page, self.page);
        if !self.search.is_empty() {
            q.push_str("&search=");
            q.push_str(&urlencoding::encode(&self.search));
        }
        q
    }

    pub fn url(&self, endpoint: &Url) -> Url {
        let mut u = endpoint.clone();
        u.set_query(Some(&self.query_string()));
        u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Url { Url::parse(DEFAULT_ENDPOINT).unwrap() }

    #[test]
    fn default_query_has_no_search() {
        let q = PostQuery { per_page: PageSize::Twelve, page: 1, search: String::new() };
        assert_eq!(
            q.url(&endpoint()).as_str(),
            "https://techcrunch.com/wp-json/wp/v2/posts?_embed&per_page=12&page=1"
        );
    }

    #[test]
    fn search_is_percent_encoded() {
        let q = PostQuery { per_page: PageSize::Six, page: 3, search: "rust & c++/wasm".into() };
        assert_eq!(q.query_string(), "_embed&per_page=6&page=3&search=rust%20%26%20c%2B%2B%2Fwasm");
    }

    #[test]
    fn endpoint_query_is_replaced() {
        let ep = Url::parse("http://127.0.0.1:9000/wp-json/wp/v2/posts?stale=1").unwrap();
        let q = PostQuery { per_page: PageSize::Eighteen, page: 2, search: "react".into() };
        assert_eq!(q.url(&ep).query(), Some("_embed&per_page=18&page=2&search=react"));
    }
}
