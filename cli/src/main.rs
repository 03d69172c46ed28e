//! CLI entrypoint for derby-vote
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use derby_application::{NoWidgetView, VotingWidget, WidgetView};
use derby_domain::{CodeValidation, ItemId, OutputFormat};
use derby_infrastructure::{ConfigLoader, FileCarConfig, FileConfig, HttpVoteApi};
use derby_presentation::{
    Cli, OutputConfig, ProgressReporter, ReplConfig, SimpleProgress, WidgetRepl, formatter_for,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        for line in ConfigLoader::config_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting derby-vote");

    let config = load_config(&cli)?;

    let output = OutputConfig::new(config.output.format, config.output.color).with_cli_overrides(&cli);
    output.apply_color();

    let cars = config.cars();
    let items: Vec<ItemId> = cars.iter().map(|car| car.id.clone()).collect();

    // === Dependency Injection ===
    // Create infrastructure adapter (HTTP voting API)
    let api = Arc::new(HttpVoteApi::new(
        &config.server.base_url,
        &config.server.behavior(),
        config.server.user_agent(),
    )?);
    info!("Voting server: {}", api.base_url());

    let view: Arc<dyn WidgetView> = if cli.is_one_shot() && output.format == OutputFormat::Json {
        Arc::new(NoWidgetView)
    } else if cli.quiet {
        Arc::new(SimpleProgress::new(cars.clone()))
    } else {
        Arc::new(ProgressReporter::new(cars.clone()))
    };

    let widget = Arc::new(VotingWidget::new(api, items)?.with_view(view));

    // Page load: lock the widget if this session already voted
    widget.initialize().await;

    let formatter = formatter_for(output.format);

    // One-shot mode
    if let Some(code) = &cli.code {
        let validation = widget.submit_code(code);

        let outcome = match &cli.vote {
            Some(id) => Some(widget.vote(&ItemId::new(id.as_str())?).await),
            None => None,
        };

        println!(
            "{}",
            formatter.format_run(&widget.snapshot(), outcome.as_ref(), &cars)
        );

        let succeeded = match &outcome {
            Some(outcome) => outcome.is_recorded(),
            None => matches!(validation, CodeValidation::Accepted(_)),
        };
        return Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    // Interactive mode
    let repl = WidgetRepl::new(widget, cars)
        .with_formatter(formatter)
        .with_config(ReplConfig::default());
    repl.run().await?;

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging based on verbosity level
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            subscriber.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            subscriber.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

/// Load file configuration and apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(server) = &cli.server {
        config.server.base_url = server.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.server.timeout_seconds = Some(timeout);
    }
    if !cli.cars.is_empty() {
        config.cars = cli.cars.iter().map(FileCarConfig::new).collect();
    }

    for issue in config.validate() {
        if issue.is_error() {
            bail!("Invalid configuration: {}", issue.message);
        }
        warn!("{}", issue.message);
    }

    Ok(config)
}
