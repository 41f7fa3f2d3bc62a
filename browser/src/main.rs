mod commands;
mod view;

use anyhow::{bail, Result};
use clap::Parser;
use client::config::{BrowserConfig, DEFAULT_USER_AGENT};
use client::{PostBrowser, WpClient};
use commands::Command;
use postcore::query::DEFAULT_ENDPOINT;
use postcore::state::BrowserState;
use postcore::PageSize;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "browser")]
#[command(about = "Browse a WordPress blog: debounced search, paging, page size")]
struct Args {
    /// WordPress posts collection endpoint
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: Url,
    /// Posts per page (6, 12 or 18)
    #[arg(long, default_value_t = PageSize::Twelve)]
    per_page: PageSize,
    /// Quiet period after the last search edit, in milliseconds
    #[arg(long, default_value_t = 500)]
    debounce_ms: u64,
    /// Request timeout seconds
    #[arg(long, default_value_t = 12)]
    timeout_secs: u64,
    /// User-Agent sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,
    /// Print each snapshot as an HTML fragment instead of text
    #[arg(long, default_value_t = false)]
    html: bool,
}

impl Args {
    fn config(&self) -> Result<BrowserConfig> {
        if self.timeout_secs == 0 {
            bail!("--timeout-secs must be at least 1");
        }
        if !matches!(self.endpoint.scheme(), "http" | "https") {
            bail!("--endpoint must be an http(s) url, got {}", self.endpoint);
        }
        Ok(BrowserConfig {
            endpoint: self.endpoint.clone(),
            debounce: Duration::from_millis(self.debounce_ms),
            page_size: self.per_page,
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        })
    }
}

fn print_snapshot(state: &BrowserState, html: bool) {
    if html {
        println!("{}", postcore::render::render_html(state));
    } else {
        println!("{}", view::render_text(state));
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let args = Args::parse();
    let config = args.config()?;

    let client = WpClient::new(&config)?;
    info!(endpoint = %config.endpoint, per_page = %config.page_size, "mounting post browser");
    let browser = PostBrowser::mount(client, &config);
    let mut snapshots = browser.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() { break; }
                let state = snapshots.borrow_and_update().clone();
                print_snapshot(&state, args.html);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // input closed: let the last search commit and its fetch land
                    let settled = snapshots
                        .wait_for(|s| s.issued() > 0 && !s.results.loading && s.search.raw == s.search.debounced)
                        .await
                        .map(|s| s.clone());
                    if let Ok(state) = settled {
                        print_snapshot(&state, args.html);
                    }
                    break;
                };
                if line.trim().is_empty() { continue; }
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => command.dispatch(&browser),
                    Err(e) => eprintln!("{e}"),
                }
            }
        }
    }

    browser.unmount().await;
    info!("post browser unmounted");
    Ok(())
}
