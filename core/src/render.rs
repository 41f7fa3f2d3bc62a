use crate::state::BrowserState;
use crate::{PageSize, Post};
use std::borrow::Cow;
use std::fmt::Write;

/// Render a snapshot as an HTML fragment.
///
/// Post titles and excerpts are [`TrustedHtml`](crate::TrustedHtml) and go out
/// as-is; everything else is escaped.
pub fn render_html(state: &BrowserState) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str("<div class=\"container\">");
    out.push_str("<h1>WordPress posts</h1>");
    render_controls(&mut out, state);

    if state.results.loading {
        out.push_str("<p>Loading...</p>");
    } else {
        out.push_str("<div class=\"grid\">");
        for post in state.results.posts.iter() {
            render_card(&mut out, post);
        }
        out.push_str("</div>");
        render_pager(&mut out, state);
    }

    out.push_str("</div>");
    out
}

fn render_controls(out: &mut String, state: &BrowserState) {
    let _ = write!(
        out,
        "<div class=\"controls\"><input type=\"text\" name=\"search\" placeholder=\"Search posts...\" value=\"{}\"><select name=\"per_page\">",
        html_escape(&state.search.raw)
    );
    for size in PageSize::ALL {
        let selected = if size == state.page.size { " selected" } else { "" };
        let _ = write!(out, "<option value=\"{size}\"{selected}>{size}</option>");
    }
    out.push_str("</select></div>");
}

fn render_card(out: &mut String, post: &Post) {
    let _ = write!(
        out,
        "<div class=\"card\" data-id=\"{id}\"><img src=\"{img}\" alt=\"Post\"><h3>{title}</h3><div class=\"excerpt\">{excerpt}</div>\
         <a href=\"{link}\" target=\"_blank\" rel=\"noopener noreferrer\">Read More →</a></div>",
        id = post.id,
        img = html_escape(post.featured_image_url()),
        title = post.title.rendered.as_markup(),
        excerpt = post.excerpt.rendered.as_markup(),
        link = html_escape(&post.link),
    );
}

fn render_pager(out: &mut String, state: &BrowserState) {
    let pager = state.pager();
    let disabled = |enabled: bool| if enabled { "" } else { " disabled" };
    let _ = write!(
        out,
        "<div class=\"pagination\"><button name=\"prev\"{}>◀ Prev</button><span>{}</span><button name=\"next\"{}>Next ▶</button></div>",
        disabled(pager.prev_enabled),
        html_escape(&pager.label),
        disabled(pager.next_enabled),
    );
}

fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
