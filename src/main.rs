// Entry point: parses settings, installs logging, and dispatches the subcommand.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::runtime::Runtime;
use tracing::{debug, info, warn};

use tridash::app::App;
use tridash::cli::{Cli, Command};
use tridash::snapshot;
use tridash::state::DashboardData;
use tridash::{CachedAccessor, Config, DashError, RefreshJob, Result, logging};

fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    match run(cli, dotenv.is_ok()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tridash: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, dotenv_loaded: bool) -> Result<()> {
    let command = cli.command.unwrap_or(Command::Dashboard);
    match command {
        Command::Dashboard => logging::init_file(&snapshot::log_path())?,
        _ => logging::init_stderr()?,
    }
    debug!(dotenv_loaded, ?command, "starting");

    let config = Config::from_settings(&cli.settings)?;
    let runtime = Runtime::new()?;

    match command {
        Command::Dashboard => dashboard(&config, &runtime),
        Command::Sync => runtime.block_on(sync_daemon(&config)),
        Command::Fetch => runtime.block_on(fetch_once(&config)),
        Command::Peek => runtime.block_on(peek(&config)),
    }
}

/// Terminal dashboard with the refresh job running in the background.
fn dashboard(config: &Config, runtime: &Runtime) -> Result<()> {
    let data = DashboardData::new(&config.snapshot_path, &config.history_path);
    let mut app = App::new(data, runtime.handle().clone());

    if config.has_remote() {
        let client = config.metrics_client()?;
        let accessor = Arc::new(CachedAccessor::new(client.clone(), config.cache_ttl));
        let refresh = {
            let _guard = runtime.enter();
            RefreshJob::new(client, &config.snapshot_path)
                .with_events(app.events())
                .spawn(config.refresh_interval)
        };
        app = app.with_remote(refresh, accessor);
    } else {
        warn!("no metrics API configured, background refresh disabled");
    }

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Some(refresh) = app.take_refresh() {
        runtime.block_on(refresh.shutdown());
    }
    result.map_err(DashError::Io)
}

/// Headless refresh loop until Ctrl-C.
async fn sync_daemon(config: &Config) -> Result<()> {
    let client = config.metrics_client()?;
    let handle = RefreshJob::new(client, &config.snapshot_path).spawn(config.refresh_interval);

    tokio::signal::ctrl_c().await?;
    info!("interrupt received, stopping");
    handle.shutdown().await;
    Ok(())
}

/// One refresh, reporting failure through the exit code.
async fn fetch_once(config: &Config) -> Result<()> {
    let client = config.metrics_client()?;
    RefreshJob::new(client, &config.snapshot_path)
        .run_once()
        .await
}

/// Print the remote document without touching the snapshot store.
async fn peek(config: &Config) -> Result<()> {
    let accessor = CachedAccessor::new(config.metrics_client()?, config.cache_ttl);
    let document = accessor
        .get()
        .await
        .ok_or_else(|| DashError::Other("metrics API returned no data".to_string()))?;

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
