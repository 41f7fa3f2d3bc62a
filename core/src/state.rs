//! Post browser state and its transitions.
//!
//! Every event produces a fresh [`BrowserState`] snapshot plus the effects the
//! runtime must perform (arm the debounce timer, issue a fetch). Debounce timers
//! and fetches are tagged with generation numbers; completions carrying an
//! older generation are ignored.

use crate::query::PostQuery;
use crate::{PageSize, Post, PostPage, FALLBACK_TOTAL_PAGES};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub raw: String,
    pub debounced: String,
    /// Generation of the most recently armed debounce timer.
    pub pending: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub size: PageSize,
    pub current: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub posts: Arc<Vec<Post>>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    pub search: SearchState,
    pub page: PageState,
    pub results: ResultSet,
    issued: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Mounted,
    SearchTextChanged(String),
    DebounceElapsed { seq: u64, text: String },
    PageSizeChanged(PageSize),
    NextPage,
    PrevPage,
    /// `page` is `None` when the request failed; the failure has already been reported.
    FetchCompleted { seq: u64, page: Option<PostPage> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScheduleDebounce { seq: u64, text: String },
    Fetch { seq: u64, query: PostQuery },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: BrowserState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &BrowserState) -> Self {
        Self { state: state.clone(), effects: Vec::new() }
    }
}

/// What the pagination controls show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub label: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl BrowserState {
    pub fn new(size: PageSize) -> Self {
        Self {
            search: SearchState::default(),
            page: PageState { size, current: 1, total: FALLBACK_TOTAL_PAGES },
            results: ResultSet::default(),
            issued: 0,
        }
    }

    /// Sequence number of the most recently issued fetch (0 before the first).
    pub fn issued(&self) -> u64 { self.issued }

    pub fn query(&self) -> PostQuery {
        PostQuery {
            per_page: self.page.size,
            page: self.page.current,
            search: self.search.debounced.clone(),
        }
    }

    /// Paging waits for the outstanding fetch; until then `total` may belong to another query.
    pub fn can_go_prev(&self) -> bool { !self.results.loading && self.page.current > 1 }

    pub fn can_go_next(&self) -> bool { !self.results.loading && self.page.current < self.page.total }

    pub fn pager(&self) -> Pager {
        Pager {
            label: format!("Page {} of {}", self.page.current, self.page.total),
            prev_enabled: self.can_go_prev(),
            next_enabled: self.can_go_next(),
        }
    }

    pub fn reduce(&self, event: Event) -> Transition {
        let mut next = self.clone();
        let effects = match event {
            Event::Mounted => vec![next.issue()],
            Event::SearchTextChanged(text) => {
                if text == next.search.raw {
                    return Transition::unchanged(self);
                }
                next.search.raw = text.clone();
                next.search.pending += 1;
                vec![Effect::ScheduleDebounce { seq: next.search.pending, text }]
            }
            Event::DebounceElapsed { seq, text } => {
                if seq != next.search.pending || text == next.search.debounced {
                    return Transition::unchanged(self);
                }
                next.search.debounced = text;
                next.page.current = 1;
                vec![next.issue()]
            }
            Event::PageSizeChanged(size) => {
                if size == next.page.size {
                    return Transition::unchanged(self);
                }
                next.page.size = size;
                next.page.current = 1;
                vec![next.issue()]
            }
            Event::NextPage => {
                if !next.can_go_next() {
                    return Transition::unchanged(self);
                }
                next.page.current += 1;
                vec![next.issue()]
            }
            Event::PrevPage => {
                if !next.can_go_prev() {
                    return Transition::unchanged(self);
                }
                next.page.current -= 1;
                vec![next.issue()]
            }
            Event::FetchCompleted { seq, page } => {
                if seq != next.issued {
                    return Transition::unchanged(self);
                }
                next.results.loading = false;
                // failures keep whatever was on screen
                if let Some(page) = page {
                    next.results.posts = Arc::new(page.posts);
                    next.page.total = page.total_pages.max(1);
                    next.page.current = next.page.current.min(next.page.total);
                }
                Vec::new()
            }
        };
        Transition { state: next, effects }
    }

    fn issue(&mut self) -> Effect {
        self.issued += 1;
        self.results.loading = true;
        Effect::Fetch { seq: self.issued, query: self.query() }
    }
}
