//! CLI Adapter.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use url::Url;

use crate::adapters::GitCommandAdapter;
use crate::app::logging;
use crate::app::pipeline::RunOutcome;
use crate::domain::{
    AccessToken, AppError, ForgeApiConfig, INSTALL_PATH, InstallOutcome, MirrorConfig,
    MirrorConfigInput, SettingsFileDto, detect_from_local_remotes,
};

#[derive(Parser)]
#[command(name = "gh-mirror")]
#[command(version)]
#[command(
    about = "Generate a GitHub Actions workflow that syncs an external repository into a GitHub mirror",
    long_about = None
)]
struct Cli {
    /// Primary repository URL (https://host/owner/name or git@host:owner/name)
    #[arg(short = 'p', long = "primary", value_name = "URL")]
    primary: Option<String>,
    /// GitHub mirror repository URL; detected from local git remotes when omitted
    #[arg(short = 'm', long = "mirror", value_name = "URL")]
    mirror: Option<String>,
    /// Branch to sync from in the primary repository [default: main]
    #[arg(long, value_name = "NAME")]
    primary_branch: Option<String>,
    /// Branch to sync into in the mirror repository [default: main]
    #[arg(long, value_name = "NAME")]
    mirror_branch: Option<String>,
    /// Sync cadence: hourly, daily or weekly [default: hourly]
    #[arg(short = 'i', long = "interval", value_name = "INTERVAL")]
    interval: Option<String>,
    /// Replace mirror history with the primary's instead of merging [default: true]
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set,
        value_parser = clap::value_parser!(bool)
    )]
    force: Option<bool>,
    /// Output file; empty or '-' writes to stdout [default: .github/workflows/sync.yaml]
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<String>,
    /// Install the workflow into the mirror through the GitHub API (needs GH_TOKEN or GITHUB_TOKEN)
    #[arg(long)]
    setup: bool,
    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", value_name = "URL")]
    api_url: Option<Url>,
    /// TOML settings file; command-line flags take precedence
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    install_interrupt_handler();

    match run_sync(cli) {
        Ok(outcome) => report(&outcome),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn install_interrupt_handler() {
    if let Err(e) = ctrlc::set_handler(|| {
        tracing::info!("Received termination signal, shutting down");
        std::process::exit(1);
    }) {
        tracing::warn!(error = %e, "Failed to install signal handler");
    }
}

fn run_sync(cli: Cli) -> Result<RunOutcome, AppError> {
    let (cfg, api) = load_configuration(cli).map_err(|e| e.in_stage("configuration"))?;

    tracing::info!(
        primary_repo = cfg.primary_repo(),
        mirror_repo = cfg.mirror_repo(),
        primary_branch = %cfg.primary_branch(),
        mirror_branch = %cfg.mirror_branch(),
        sync_interval = %cfg.sync_interval(),
        "Configuration loaded"
    );

    crate::execute(&cfg, &api)
}

fn load_configuration(cli: Cli) -> Result<(MirrorConfig, ForgeApiConfig), AppError> {
    let flags = MirrorConfigInput {
        primary_repo: cli.primary,
        mirror_repo: cli.mirror,
        primary_branch: cli.primary_branch,
        mirror_branch: cli.mirror_branch,
        sync_interval: cli.interval,
        force_sync: cli.force,
        output_file: cli.output,
        setup_workflow: cli.setup,
        access_token: AccessToken::from_env(),
    };

    let (mut input, file_api_url) = match cli.config.as_deref() {
        Some(path) => {
            let settings = SettingsFileDto::load(path)?;
            tracing::debug!(path = %path.display(), "Loaded settings file");
            let api_url = settings.api_url.clone();
            (flags.or(settings.into()), api_url)
        }
        None => (flags, None),
    };

    if input.lacks_mirror() {
        input.mirror_repo = detect_mirror();
    }

    let mut api = ForgeApiConfig::default();
    if let Some(url) = cli.api_url.or(file_api_url) {
        api.api_url = url;
    }

    Ok((MirrorConfig::from_input(input)?, api))
}

fn detect_mirror() -> Option<String> {
    let git = match GitCommandAdapter::current() {
        Ok(git) => git,
        Err(e) => {
            tracing::debug!(error = %e, "Cannot inspect local git remotes");
            return None;
        }
    };

    let detected = detect_from_local_remotes(&git);
    if let Some(mirror) = &detected {
        tracing::info!(mirror_repo = %mirror, "Auto-detected GitHub mirror repository");
    }
    detected
}

fn report(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Printed => {}
        RunOutcome::Written(path) => {
            println!("✅ Wrote sync workflow to {}", path.display());
        }
        RunOutcome::Installed { repository, outcome: InstallOutcome::Created } => {
            println!("✅ Created {} in {}", INSTALL_PATH, repository);
        }
        RunOutcome::Installed { repository, outcome: InstallOutcome::Updated } => {
            println!("✅ Updated {} in {}", INSTALL_PATH, repository);
        }
    }
}
