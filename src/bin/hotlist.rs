//! hotlist - fetch today's Zhihu hot list and merge it into the per-day archive.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotlist::credentials::load_cookie_header;
use hotlist::{
    BrowserOptions, Cascade, CanonicalItem, DailyStore, HotClient, HotError, RunSummary, dedupe,
    items_from_payload, today_key, write_outputs,
};

#[derive(Debug, Parser)]
#[command(name = "hotlist", version, about = "Fetch the Zhihu hot list and archive it by day")]
struct Args {
    /// Directory holding `hotLinks.json` and the `YYYY-MM-DD.json` day files.
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// Day to merge into (defaults to today, local time).
    #[arg(long)]
    date: Option<String>,

    /// Read a saved API payload instead of hitting the network.
    #[arg(long)]
    from_file: Option<PathBuf>,

    /// Skip the embedded page state strategy (API, then browser).
    #[arg(long)]
    no_page: bool,

    /// Show the browser window. Ignored when `CI` is set.
    #[arg(long)]
    headful: bool,

    /// Cookie JSON file used when neither cookie variable is set.
    #[arg(long, default_value = "env/cookies.json")]
    cookies_file: PathBuf,

    /// Chrome or Chromium executable for the browser strategy.
    #[arg(long, env = "HOTLIST_CHROME")]
    chrome: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(summary) => {
            tracing::info!(
                "Done: {} items, {} new, {} total for {}.",
                summary.total,
                summary.new_items,
                summary.day_total,
                summary.date_key
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<RunSummary, HotError> {
    let date_key = args.date.clone().unwrap_or_else(today_key);
    let store = DailyStore::new(&args.out_dir);
    // Fail on a bad --date before any fetching.
    store.day_path(&date_key)?;

    let client = build_client(&args)?;
    let items: Vec<CanonicalItem> = match &args.from_file {
        Some(path) => {
            tracing::info!("Reading payload from {}", path.display());
            let payload = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            items_from_payload(payload, client.canonicalizer())
        }
        None => {
            let cascade = if args.no_page {
                Cascade::without_page()
            } else {
                Cascade::standard()
            };
            dedupe(cascade.acquire(&client).await?)
        }
    };

    write_outputs(&store, &date_key, &items)
}

fn build_client(args: &Args) -> Result<HotClient, HotError> {
    let ci = std::env::var_os("CI").is_some();
    let browser = BrowserOptions {
        headless: ci || !args.headful,
        chrome_executable: args.chrome.clone(),
        ..BrowserOptions::default()
    };

    let mut builder = HotClient::builder().browser(browser);
    // The offline path never sends requests, so the credential is not needed there.
    if args.from_file.is_none() {
        if let Some(cookie) = load_cookie_header(&args.cookies_file) {
            builder = builder.cookie(cookie);
        }
    }
    builder.build()
}
