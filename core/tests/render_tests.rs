use postcore::render::render_html;
use postcore::state::{BrowserState, Effect, Event};
use postcore::{PageSize, Post, PostPage};
use scraper::{Html, Selector};
use serde_json::json;

fn posts() -> Vec<Post> {
    serde_json::from_value(json!([
        {
            "id": 1,
            "title": {"rendered": "Ships &amp; <em>Rust</em>"},
            "excerpt": {"rendered": "<p>First <strong>post</strong></p>"},
            "link": "https://example.com/a?x=1&y=2",
            "_embedded": {"wp:featuredmedia": [{"source_url": "https://cdn.example.com/a.jpg"}]}
        },
        {
            "id": 2,
            "title": {"rendered": "No image"},
            "excerpt": {"rendered": "<p>Second</p>"},
            "link": "https://example.com/b"
        }
    ]))
    .unwrap()
}

fn loaded(total_pages: u32) -> BrowserState {
    let t = BrowserState::new(PageSize::Twelve).reduce(Event::Mounted);
    let Some(Effect::Fetch { seq, .. }) = t.effects.first().cloned() else { panic!("no fetch") };
    t.state
        .reduce(Event::FetchCompleted { seq, page: Some(PostPage { posts: posts(), total_pages }) })
        .state
}

fn sel(s: &str) -> Selector { Selector::parse(s).unwrap() }

#[test]
fn trusted_fields_are_markup() {
    let doc = Html::parse_fragment(&render_html(&loaded(5)));
    let h3: Vec<_> = doc.select(&sel(".card h3 em")).collect();
    assert_eq!(h3.len(), 1);
    assert_eq!(h3[0].text().collect::<String>(), "Rust");
    assert_eq!(doc.select(&sel(".card .excerpt strong")).count(), 1);
}

#[test]
fn untrusted_fields_are_escaped() {
    let mut state = loaded(5);
    state = state.reduce(Event::SearchTextChanged("<script>\"x\"".into())).state;
    let html = render_html(&state);
    assert!(!html.contains("<script>"));
    let doc = Html::parse_fragment(&html);
    let input = doc.select(&sel("input[name=search]")).next().unwrap();
    assert_eq!(input.value().attr("value"), Some("<script>\"x\""));
    let link = doc.select(&sel(".card a")).next().unwrap();
    assert_eq!(link.value().attr("href"), Some("https://example.com/a?x=1&y=2"));
    assert_eq!(link.value().attr("rel"), Some("noopener noreferrer"));
}

#[test]
fn images_fall_back_to_placeholder() {
    let doc = Html::parse_fragment(&render_html(&loaded(5)));
    let srcs: Vec<_> = doc.select(&sel(".card img")).filter_map(|i| i.value().attr("src")).collect();
    assert_eq!(srcs, vec!["https://cdn.example.com/a.jpg", postcore::media::PLACEHOLDER_IMAGE_URL]);
}

#[test]
fn pager_on_first_of_five() {
    let doc = Html::parse_fragment(&render_html(&loaded(5)));
    let label = doc.select(&sel(".pagination span")).next().unwrap().text().collect::<String>();
    assert_eq!(label, "Page 1 of 5");
    assert!(doc.select(&sel("button[name=prev][disabled]")).next().is_some());
    assert!(doc.select(&sel("button[name=next][disabled]")).next().is_none());
    let selected = doc.select(&sel("option[selected]")).next().unwrap();
    assert_eq!(selected.value().attr("value"), Some("12"));
}

#[test]
fn loading_hides_grid_and_pager() {
    let state = loaded(5).reduce(Event::NextPage).state;
    let doc = Html::parse_fragment(&render_html(&state));
    assert_eq!(doc.select(&sel("p")).next().unwrap().text().collect::<String>(), "Loading...");
    assert_eq!(doc.select(&sel(".grid")).count(), 0);
    assert_eq!(doc.select(&sel(".pagination")).count(), 0);
}
