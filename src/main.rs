//! Cinch CLI - CSS bundle inliner and minifier
//!
//! Usage: cinch [--root DIR] [--manifest PATH] [-o PATH] [--dry-run] [--json]
//!
//! Reads the bundle manifest (css/app.bundle.css by default), inlines the
//! files named by its `@import url(...)` directives, minifies the result
//! and writes it to css/app.bundle.min.css.

mod cli;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cinch::bundle::{self, BuildOptions};
use cinch::config::Config;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = load_config(&cli);
    let options = BuildOptions {
        dry_run: cli.dry_run,
    };

    let report = bundle::build(&cli.root, &config, &options)?;

    if cli.json {
        let event = serde_json::json!({
            "event": "bundle",
            "output": report.output.display().to_string(),
            "bytes": report.bytes,
            "imports": report.imports,
            "dry_run": cli.dry_run,
        });
        println!("{}", serde_json::to_string(&event)?);
    } else if cli.dry_run {
        println!(
            "Would write minified bundle to {} ({} bytes)",
            report.output.display(),
            report.bytes
        );
    } else {
        println!(
            "Wrote minified bundle to {} ({} bytes)",
            report.output.display(),
            report.bytes
        );
    }

    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

/// Resolve the effective configuration: project/user file, CINCH_* env,
/// then CLI path overrides on top.
fn load_config(cli: &Cli) -> Config {
    let project_config = cli.root.join("cinch.toml");
    let mut config = if project_config.exists() {
        match Config::load_with_warnings(&project_config) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    match &warning.suggestion {
                        Some(suggestion) => eprintln!(
                            "⚠ unknown config key '{}' in {} (did you mean '{}'?)",
                            warning.key,
                            warning.file.display(),
                            suggestion
                        ),
                        None => eprintln!(
                            "⚠ unknown config key '{}' in {}",
                            warning.key,
                            warning.file.display()
                        ),
                    }
                }
                config.with_env_overrides()
            }
            Err(e) => {
                eprintln!("⚠ {e}; falling back to defaults");
                Config::default().with_env_overrides()
            }
        }
    } else {
        Config::load_or_default(&cli.root)
    };

    if let Some(manifest) = &cli.manifest {
        config.bundle.manifest = manifest.clone();
    }
    if let Some(out) = &cli.out {
        config.bundle.output = out.clone();
    }

    config
}
