use std::path::PathBuf;

use clap::Parser;

/// Cinch - CSS bundle inliner and minifier
///
/// Invoked bare, reads css/app.bundle.css under the project root and
/// writes the minified bundle to css/app.bundle.min.css.
#[derive(Parser, Debug)]
#[command(name = "cinch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root containing the css/ directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Manifest path relative to the root (overrides config)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Output path relative to the root (overrides config)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Report what would be written without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
