//! Portfolio site — server entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Resolve effective log level (CLI `-v` flags > env > config)
//!   4. Init logger once
//!   5. Compose and render the page
//!   6. Spawn Ctrl-C → shutdown signal watcher
//!   7. Serve until shutdown

use portfolio_site::{config, error, logger, server};

use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), error::AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = match parse_cli_args(std::env::args().skip(1)) {
        Ok(CliCommand::Run(args)) => args,
        Ok(CliCommand::Help) => {
            print_help();
            return Ok(());
        }
        Err(msg) => return Err(error::AppError::Config(msg)),
    };

    let config = config::load(args.config_path.as_deref())?;

    let effective_log_level = args.log_level.unwrap_or(config.server.log_level.as_str());
    logger::init(effective_log_level, args.log_level.is_some())?;

    info!(
        bind = %config.server.bind,
        base_url = %config.site.base_url,
        static_dir = ?config.site.static_dir,
        configured_log_level = %config.server.log_level,
        effective_log_level = %effective_log_level,
        "config loaded"
    );

    let state = server::AppState::from_config(&config)?;

    // Shared shutdown token — Ctrl-C cancels it.
    let shutdown = CancellationToken::new();
    let ctrlc_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("ctrl-c received — initiating shutdown");
            ctrlc_token.cancel();
        }
    });

    server::run(&config.server.bind, state, shutdown).await
}

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
}

#[derive(Debug, PartialEq)]
enum CliCommand {
    Run(CliArgs),
    Help,
}

fn print_help() {
    println!("Usage: portfolio-site [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -h, --help                 Print help");
    println!("  -f, --config <PATH>        Path to configuration file (default: config/default.toml)");
    println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
}

fn parse_cli_args(args: impl IntoIterator<Item = String>) -> Result<CliCommand, String> {
    let mut verbosity = 0u8;
    let mut config_path = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "-f" | "--config" => match iter.next() {
                Some(path) => config_path = Some(path),
                None => return Err("-f/--config requires a path argument".to_string()),
            },
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    // Each -v raises verbosity one tier:
    //   -v → warn, -vv → info, -vvv → debug, -vvvv+ → trace
    let log_level = match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    };

    Ok(CliCommand::Run(CliArgs { log_level, config_path }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, String> {
        parse_cli_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn no_args_runs_with_config_level() {
        assert_eq!(parse(&[]).unwrap(), CliCommand::Run(CliArgs::default()));
    }

    #[test]
    fn verbosity_tiers() {
        let level = |args: &[&str]| match parse(args).unwrap() {
            CliCommand::Run(a) => a.log_level,
            CliCommand::Help => panic!("unexpected help"),
        };
        assert_eq!(level(&["-v"]), Some("warn"));
        assert_eq!(level(&["-vvv"]), Some("debug"));
        assert_eq!(level(&["-vv", "-vv"]), Some("trace"));
    }

    #[test]
    fn config_path_flag() {
        let CliCommand::Run(args) = parse(&["--config", "site.toml"]).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(args.config_path.as_deref(), Some("site.toml"));
        assert!(parse(&["-f"]).is_err());
    }

    #[test]
    fn help_flag() {
        assert_eq!(parse(&["-h"]).unwrap(), CliCommand::Help);
    }
}
