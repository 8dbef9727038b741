//! # Postboard Main Entry Point
//!
//! Full-screen posts browser, or a one-page printout when stdout is not a
//! terminal or `--print` is given.

use anyhow::{Context, Result};
use postboard::{
    cmd_args::CommandLineArgs,
    config::{self, Settings},
    engine::{self, ListView},
    events::Message,
    views, AppController, InteractionLog, PostsClient,
};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{filter::LevelFilter, fmt::time::ChronoLocal, EnvFilter};

/// Crates whose chatter is capped at `warn`
const NOISY_CRATES: &[&str] = &[
    "reqwest",
    "hyper",
    "hyper_util",
    "h2",
    "tokio",
    "tokio_util",
    "tokio_rustls",
    "rustls",
    "tower",
    "mio",
];

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing_subscriber(cmd_args.verbose(), cmd_args.log_file())?;

    let settings = Settings::resolve(&cmd_args)?;
    tracing::debug!("Resolved settings: {:?}", settings);

    if cmd_args.print() || !atty::is(atty::Stream::Stdout) {
        let stdout = std::io::stdout();
        return print_page(&settings, &cmd_args, &mut stdout.lock()).await;
    }

    let mut app = AppController::new(&settings, InteractionLog::new())?;
    for ch in cmd_args.search().unwrap_or_default().chars() {
        app.dispatch(Message::SearchInput(ch));
    }
    app.run().await
}

/// Fetch the posts once and write the page picked by `--search`/`--page`
async fn print_page<W: Write>(
    settings: &Settings,
    cmd_args: &CommandLineArgs,
    out: &mut W,
) -> Result<()> {
    let client = PostsClient::new(settings.base_url.clone(), settings.request_timeout)?;
    let posts = client.fetch_posts().await.context("Error fetching posts")?;
    let posts = engine::dedup_by_id(posts);

    let view = ListView::derive(
        &posts,
        cmd_args.search().unwrap_or_default(),
        settings.items_per_page,
        cmd_args.page(),
    );
    out.write_all(views::format_page(&view).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn init_tracing_subscriber(verbose: bool, log_file: Option<&str>) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(verbose)?)
        .with_timer(ChronoLocal::rfc_3339());

    let installed = match log_file {
        Some(path) => builder
            .with_writer(Mutex::new(open_log_file(path)?))
            .with_ansi(false)
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}

/// Filter from `POSTBOARD_LOG_LEVEL`, defaulting to `error` (`debug` when verbose)
fn build_env_filter(verbose: bool) -> Result<EnvFilter> {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::ERROR
    };
    let mut filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(config::LOG_LEVEL_ENV_VAR)
        .from_env_lossy();
    for name in NOISY_CRATES {
        filter = filter.add_directive(format!("{name}=warn").parse()?);
    }
    Ok(filter)
}

/// Open `path` for appending after expanding `~` and environment variables
fn open_log_file(path: &str) -> Result<File> {
    let expanded = shellexpand::full(path)
        .with_context(|| format!("Failed to expand log file path '{path}'"))?;
    let path = PathBuf::from(expanded.as_ref());
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))
}
