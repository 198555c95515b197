mod collectors;
mod config;
mod correlate;
mod error;
mod exec;
mod models;
mod platform;
mod util;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use exec::SystemRunner;
use platform::{Capabilities, Platform};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "poollight", about = "Light the locate LED of unhealthy ZFS pool drives", version)]
struct Cli {
    /// Decide LED states and log them without issuing storcli locate commands
    #[arg(long)]
    dry_run: bool,

    /// Print the decided actions as a JSON snapshot on stdout
    #[arg(long)]
    json: bool,

    /// Print a human-readable slot table on stdout
    #[arg(long)]
    report: bool,

    /// Override OS detection: linux, freebsd
    #[arg(long)]
    platform: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print config file path and effective values, then exit
    #[arg(long)]
    show_config: bool,

    /// Debug-level logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = Config::load(cli.config.as_deref()).context("loading configuration")?;

    if cli.show_config {
        return run_print_config(&cfg, cli.config.as_deref());
    }

    let setting = cli.platform.as_deref().unwrap_or(&cfg.general.platform);
    let platform = Platform::select(setting)?;

    if !nix::unistd::Uid::effective().is_root() {
        warn!("not running as root; storcli and smartctl will likely fail");
    }

    let runner = SystemRunner;
    let caps = Capabilities::new(platform, &runner, &cfg.tools);
    let actions = correlate::run(&caps, &cfg);

    if cli.dry_run {
        for a in &actions {
            info!(slot = %a.address, led = a.led.label(), disk = %a.identity, "dry run, not changing LED");
        }
    } else {
        let failed = correlate::apply(&caps, &actions);
        if failed > 0 {
            warn!(failed, total = actions.len(), "some locate commands failed");
        }
    }

    if cli.json {
        let snapshot = util::report::snapshot(&actions, &platform.to_string(), cli.dry_run);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    if cli.report {
        print!("{}", util::report::generate(&actions, cli.dry_run));
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "poollight=debug" } else { "poollight=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_print_config(cfg: &Config, explicit: Option<&std::path::Path>) -> Result<()> {
    let path = explicit
        .map(|p| p.to_path_buf())
        .or_else(Config::config_path)
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    print!("{}", cfg.to_toml()?);
    Ok(())
}
