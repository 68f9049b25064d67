mod cli;
mod report;
mod scenario;

use std::process::ExitCode;

use snapdesk_common::{ConfigError, SnapdeskError};
use snapdesk_config::SnapdeskConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::scenario::{Runner, Script};

const DEFAULT_DIRECTIVE: &str = "snapdesk=info";

/// Install the stderr subscriber so stdout carries only the report.
fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

/// An explicit `--config` must load; the platform default falls back to
/// built-in settings.
fn resolve_config(args: &Args, loaded: Result<SnapdeskConfig, ConfigError>) -> Result<SnapdeskConfig, SnapdeskError> {
    match (loaded, &args.config) {
        (Ok(config), _) => Ok(config),
        (Err(e), Some(_)) => Err(e.into()),
        (Err(e), None) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            Ok(SnapdeskConfig::default())
        }
    }
}

fn run(args: &Args, config: SnapdeskConfig) -> Result<(), SnapdeskError> {
    let text = std::fs::read_to_string(&args.script)?;
    let script = Script::from_json(&text)?;
    tracing::info!(
        script = %args.script.display(),
        steps = script.steps.len(),
        "replaying script"
    );

    let mut runner = Runner::new(config, script.manager.as_ref());
    runner.run(&script.steps)?;
    tracing::info!(
        windows = runner.manager().active_workspace().window_count(),
        snaps = runner.manager().active_workspace().engine().snaps().len(),
        "script complete"
    );
    println!("{}", runner.report().to_json(args.compact)?);
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = match &args.config {
        Some(path) => snapdesk_config::load_config_from(path),
        None => snapdesk_config::load_config(),
    };
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.directive(),
        (None, Err(_)) => DEFAULT_DIRECTIVE.to_owned(),
    };
    init_logging(&directive);
    tracing::info!("snapdesk v{} starting...", env!("CARGO_PKG_VERSION"));

    let result = resolve_config(&args, loaded).and_then(|config| run(&args, config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
