//! CLI entrypoint for CultureMate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use culturemate_application::{
    ChatController, FlowController, NoProgress, RequestProgressNotifier,
};
use culturemate_infrastructure::{ConfigLoader, FileConfig, FileOutputFormat, HttpBackendGateway};
use culturemate_presentation::{
    ChatRepl, Cli, FlowWizard, OutputFormat, ProgressReporter, ReedlineInput, SimpleProgress,
    parse_domain, run_one_shot,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting CultureMate (backend {})", config.backend.base_url);

    // === Dependency Injection ===
    let gateway = Arc::new(
        HttpBackendGateway::from_config(&config.backend)
            .context("Failed to create backend client")?,
    );
    let params = config.backend.request_params();

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(ChatController::new(gateway).with_params(params))
            .with_progress(progress_for(&cli, &config));

        if let Some(message) = &cli.message {
            let reply = repl
                .send(message)
                .await
                .ok_or_else(|| anyhow!("Message is empty"))?;
            println!("{}", reply);
            return Ok(ExitCode::SUCCESS);
        }

        repl.run(&mut ReedlineInput::new("chat"))
            .await
            .context("Chat input failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut controller = FlowController::new(gateway).with_params(params);

    // One-shot mode
    if let Some(name) = &cli.domain {
        let domain = parse_domain(name).ok_or_else(|| {
            anyhow!(
                "Unknown domain '{}'. Expected one of: exhibition, festival, tour",
                name
            )
        })?;
        let format = cli.output.unwrap_or(match config.output.format {
            FileOutputFormat::Cards => OutputFormat::Cards,
            FileOutputFormat::Json => OutputFormat::Json,
        });
        // Keep stdout clean for machine-readable output.
        let progress: Box<dyn RequestProgressNotifier> = match format {
            OutputFormat::Json => Box::new(NoProgress),
            OutputFormat::Cards => progress_for(&cli, &config),
        };

        let report =
            run_one_shot(&mut controller, domain, &cli.answer, format, progress.as_ref()).await;
        println!("{}", report.output);
        return Ok(if report.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    // Interactive wizard
    let mut wizard = FlowWizard::new(controller).with_progress(progress_for(&cli, &config));
    wizard
        .run(&mut ReedlineInput::new("culturemate"))
        .await
        .context("Wizard input failed")?;

    Ok(ExitCode::SUCCESS)
}

/// Merge config sources, apply CLI overrides, and validate.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(base_url) = &cli.base_url {
        config.backend.base_url = base_url.clone();
    }

    let problems = config.validate();
    if !problems.is_empty() {
        for problem in &problems {
            error!("Invalid configuration: {}", problem);
        }
        bail!(
            "Invalid configuration: {}",
            problems
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        );
    }

    Ok(config)
}

fn progress_for(cli: &Cli, config: &FileConfig) -> Box<dyn RequestProgressNotifier> {
    if cli.quiet {
        Box::new(NoProgress)
    } else if config.repl.show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}
