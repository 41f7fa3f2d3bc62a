use anyhow::{anyhow, bail, Result};
use client::PostBrowser;
use postcore::PageSize;

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the search box contents; an empty text clears the search.
    Search(String),
    Next,
    Prev,
    Size(PageSize),
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.trim_start().split_once(' ') {
            Some((w, r)) => (w, r),
            None => (line.trim(), ""),
        };
        match word {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "next" | "n" => Ok(Command::Next),
            "prev" | "p" => Ok(Command::Prev),
            "size" => rest
                .parse::<PageSize>()
                .map(Command::Size)
                .map_err(|e| anyhow!(e)),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => bail!("unknown command `{other}` (try: search <text>, next, prev, size <6|12|18>, quit)"),
        }
    }

    pub fn dispatch(self, browser: &PostBrowser) {
        match self {
            Command::Search(text) => browser.set_search_text(text),
            Command::Next => browser.next_page(),
            Command::Prev => browser.prev_page(),
            Command::Size(size) => browser.set_page_size(size),
            Command::Quit => {}
        }
    }
}
