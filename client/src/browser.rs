use crate::config::BrowserConfig;
use crate::debounce::Debouncer;
use crate::fetch::PostSource;
use postcore::state::{BrowserState, Effect, Event, Transition};
use postcore::PageSize;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, error, warn};

#[derive(Debug)]
enum Command {
    SearchText(String),
    PageSize(PageSize),
    Next,
    Prev,
}

impl From<Command> for Event {
    fn from(c: Command) -> Self {
        match c {
            Command::SearchText(text) => Event::SearchTextChanged(text),
            Command::PageSize(size) => Event::PageSizeChanged(size),
            Command::Next => Event::NextPage,
            Command::Prev => Event::PrevPage,
        }
    }
}

/// A mounted post browser.
///
/// The event loop task owns the state; callers send input through the
/// setters and observe snapshots through [`PostBrowser::subscribe`].
pub struct PostBrowser {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<BrowserState>,
    task: JoinHandle<()>,
}

impl PostBrowser {
    /// Start the event loop and issue the initial fetch. Must be called inside a tokio runtime.
    pub fn mount<S: PostSource>(source: S, config: &BrowserConfig) -> Self {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let initial = BrowserState::new(config.page_size);
        let (snapshot_tx, snapshots) = watch::channel(initial.clone());
        let event_loop = EventLoop {
            source: Arc::new(source),
            debouncer: Debouncer::new(config.debounce),
            fetches: JoinSet::new(),
            snapshots: snapshot_tx,
            state: initial,
        };
        let task = tokio::spawn(event_loop.run(command_rx));
        Self { commands, snapshots, task }
    }

    pub fn set_search_text(&self, text: impl Into<String>) { self.send(Command::SearchText(text.into())) }

    pub fn set_page_size(&self, size: PageSize) { self.send(Command::PageSize(size)) }

    pub fn next_page(&self) { self.send(Command::Next) }

    pub fn prev_page(&self) { self.send(Command::Prev) }

    pub fn subscribe(&self) -> watch::Receiver<BrowserState> { self.snapshots.clone() }

    pub fn snapshot(&self) -> BrowserState { self.snapshots.borrow().clone() }

    /// Stop the event loop, cancelling the pending debounce timer and in-flight fetches.
    pub async fn unmount(self) {
        let PostBrowser { commands, task, .. } = self;
        drop(commands);
        if let Err(e) = task.await {
            if e.is_panic() {
                error!(error = %e, "post browser event loop panicked");
            }
        }
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            warn!("post browser is no longer running");
        }
    }
}

struct EventLoop<S> {
    source: Arc<S>,
    debouncer: Debouncer,
    fetches: JoinSet<()>,
    snapshots: watch::Sender<BrowserState>,
    state: BrowserState,
}

impl<S: PostSource> EventLoop<S> {
    async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        let (events_tx, mut events) = mpsc::unbounded_channel::<Event>();
        self.apply(Event::Mounted, &events_tx);

        loop {
            let event = tokio::select! {
                command = commands.recv() => match command {
                    Some(c) => Event::from(c),
                    None => break,
                },
                Some(event) = events.recv() => event,
                Some(_) = self.fetches.join_next(), if !self.fetches.is_empty() => continue,
            };
            self.apply(event, &events_tx);
        }

        self.debouncer.cancel();
        self.fetches.abort_all();
        debug!("post browser unmounted");
    }

    fn apply(&mut self, event: Event, events: &mpsc::UnboundedSender<Event>) {
        if let Event::FetchCompleted { seq, .. } = &event {
            if *seq != self.state.issued() {
                debug!(seq, latest = self.state.issued(), "discarding stale response");
            }
        }

        let Transition { state, effects } = self.state.reduce(event);
        for effect in effects {
            match effect {
                Effect::ScheduleDebounce { seq, text } => {
                    let tx = events.clone();
                    self.debouncer.schedule(move || {
                        let _ = tx.send(Event::DebounceElapsed { seq, text });
                    });
                }
                Effect::Fetch { seq, query } => {
                    debug!(seq, per_page = %query.per_page, page = query.page, search = %query.search, "issuing fetch");
                    let source = Arc::clone(&self.source);
                    let tx = events.clone();
                    self.fetches.spawn(async move {
                        let page = match source.fetch(&query).await {
                            Ok(page) => Some(page),
                            Err(e) => {
                                error!(seq, error = %e, "error fetching posts");
                                None
                            }
                        };
                        let _ = tx.send(Event::FetchCompleted { seq, page });
                    });
                }
            }
        }

        if state != self.state {
            self.state = state;
            self.snapshots.send_replace(self.state.clone());
        }
    }
}
