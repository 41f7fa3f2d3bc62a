use lazy_static::lazy_static;
use postcore::state::BrowserState;
use postcore::TrustedHtml;
use regex::Regex;
use scraper::Html;
use std::fmt::Write;

lazy_static! {
    static ref WS: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Flatten WordPress markup to a single line of text.
pub fn html_to_text(html: &TrustedHtml) -> String {
    let text = Html::parse_fragment(html.as_markup()).root_element().text().collect::<String>();
    WS.replace_all(text.trim(), " ").into_owned()
}

pub fn render_text(state: &BrowserState) -> String {
    let mut out = String::new();
    let _ = write!(out, "search: {:?}", state.search.debounced);
    if state.search.raw != state.search.debounced {
        let _ = write!(out, " (typing {:?})", state.search.raw);
    }
    let _ = writeln!(out, " | per page: {}", state.page.size);

    if state.results.loading {
        out.push_str("Loading...\n");
        return out;
    }

    for post in state.results.posts.iter() {
        let _ = writeln!(out, "#{} {}", post.id, html_to_text(&post.title.rendered));
        let excerpt = html_to_text(&post.excerpt.rendered);
        if !excerpt.is_empty() {
            let _ = writeln!(out, "    {excerpt}");
        }
        let _ = writeln!(out, "    image: {}", post.featured_image_url());
        let _ = writeln!(out, "    {}", post.link);
    }

    let pager = state.pager();
    let prev = if pager.prev_enabled { "◀ Prev" } else { "  ----" };
    let next = if pager.next_enabled { "Next ▶" } else { "----  " };
    let _ = writeln!(out, "{prev}  {}  {next}", pager.label);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcore::state::Event;
    use postcore::{PageSize, Post, PostPage, Rendered};

    #[test]
    fn markup_is_flattened() {
        let html = TrustedHtml::new("<p>Rust&#8217;s   <strong>big</strong>\n year</p>\n");
        assert_eq!(html_to_text(&html), "Rust\u{2019}s big year");
    }

    #[test]
    fn text_view_lists_posts_and_pager() {
        let post = Post {
            id: 7,
            title: Rendered { rendered: TrustedHtml::new("Hello &amp; welcome") },
            excerpt: Rendered { rendered: TrustedHtml::new("<p>Intro</p>") },
            link: "https://example.com/7".into(),
            embedded: None,
        };
        let t = BrowserState::new(PageSize::Six).reduce(Event::Mounted);
        let loading = render_text(&t.state);
        assert!(loading.contains("Loading..."));

        let seq = t.state.issued();
        let s = t.state.reduce(Event::FetchCompleted { seq, page: Some(PostPage { posts: vec![post], total_pages: 3 }) }).state;
        let text = render_text(&s);
        assert!(text.contains("#7 Hello & welcome"));
        assert!(text.contains("    Intro"));
        assert!(text.contains(postcore::media::PLACEHOLDER_IMAGE_URL));
        assert!(text.contains("Page 1 of 3  Next ▶"));
        assert!(!text.contains("◀ Prev"));
    }
}
