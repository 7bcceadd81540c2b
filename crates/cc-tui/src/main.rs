mod app;
mod command;
mod headless;
mod panels;
mod ui;
mod widgets;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::runtime::Handle;

use cc_core::clock::ClockTicker;
use cc_core::config::Config;
use cc_core::executor::{CannedExecutor, Dispatcher, Resolution, ResponseTable};
use cc_core::fixtures::DashboardData;

use crate::app::App;

#[derive(Debug, Default)]
struct Args {
    headless: bool,
    json_logs: bool,
    config: Option<PathBuf>,
    fixtures: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl Args {
    // Simple flag parsing, no clap dependency.
    fn parse(args: &[String]) -> Self {
        let value_of = |flag: &str| {
            args.iter()
                .position(|a| a == flag)
                .and_then(|i| args.get(i + 1))
                .map(PathBuf::from)
        };
        Self {
            headless: args.iter().any(|a| a == "--headless"),
            json_logs: args.iter().any(|a| a == "--json-logs"),
            config: value_of("--config"),
            fixtures: value_of("--fixtures"),
            log_file: value_of("--log-file"),
        }
    }
}

fn main() -> Result<()> {
    let argv: Vec<String> = std::env::args().collect();
    let args = Args::parse(&argv);

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    init_logging(&args, &config)?;

    let data = match &args.fixtures {
        Some(path) => DashboardData::load_from(path)
            .with_context(|| format!("loading fixtures {}", path.display()))?,
        None => DashboardData::demo(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("cc-worker")
        .enable_time()
        .build()
        .context("starting async runtime")?;

    let executor = Arc::new(CannedExecutor::new(
        ResponseTable::default(),
        config.console.response_delay(),
    ));
    let (dispatcher, resolutions) = Dispatcher::new(runtime.handle().clone(), executor);
    let app = App::new(data, &config);

    if args.headless {
        let input = headless::spawn_stdin_reader().context("starting stdin reader")?;
        let mut stdout = io::stdout().lock();
        headless::run(app, &dispatcher, &input, &resolutions, &mut stdout)
            .context("writing headless events")?;
        return Ok(());
    }

    // Set up panic hook to restore terminal on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(app, &config, runtime.handle(), &dispatcher, &resolutions);

    restore_terminal()?;
    result
}

fn init_logging(args: &Args, config: &Config) -> Result<()> {
    let level = config.general.log_level.as_str();
    match &args.log_file {
        Some(path) => {
            cc_telemetry::logging::init_logging_to_file(
                "command-center",
                level,
                path,
                args.json_logs,
            )
            .with_context(|| format!("opening log file {}", path.display()))?;
        }
        // stdout carries the JSON event stream, logs go to stderr.
        None if args.headless => {
            if args.json_logs {
                cc_telemetry::logging::init_logging_json("command-center", level);
            } else {
                cc_telemetry::logging::init_logging("command-center", level);
            }
        }
        // The dashboard owns the terminal; only errors may reach stderr.
        None => cc_telemetry::logging::init_logging("command-center", "error"),
    }
    Ok(())
}

/// Run the interactive dashboard with the standard crossterm backend.
fn run(
    mut app: App,
    config: &Config,
    handle: &Handle,
    dispatcher: &Dispatcher,
    resolutions: &flume::Receiver<Resolution>,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (clock_tx, clock_rx) = flume::unbounded();
    let clock = ClockTicker::start(handle, config.clock.period(), clock_tx);
    tracing::info!("dashboard started");

    loop {
        while let Ok(now) = clock_rx.try_recv() {
            app.set_time(now);
        }
        while let Ok(resolution) = resolutions.try_recv() {
            app.apply_resolution(resolution);
        }

        terminal.draw(|frame| {
            ui::render(frame, &app);
        })?;

        if ct_event::poll(config.ui.poll_interval())? {
            if let Event::Key(key) = ct_event::read()? {
                app.on_key(key);
            }
        }

        for pending in app.take_submitted() {
            dispatcher.dispatch(pending);
        }

        if app.should_quit {
            break;
        }
    }

    drop(clock);
    tracing::info!(
        pending = app.console.pending_count(),
        lines = app.console.transcript().total_pushed(),
        "dashboard stopped"
    );
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}
