use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use navitty::app::config::{CONFIG_FILE, Config};
use navitty::app::{App, navitty_home};
use navitty::infra::fs::Filesystem;
use navitty::infra::fs::local::LocalFs;
use navitty::logging;
use tracing::info;

/// Terminal file navigator with a fuzzy quick-open picker.
#[derive(Debug, Parser)]
#[command(name = "navitty", version, about)]
struct Args {
    /// Directory to browse; falls back to the configured default, then the
    /// current directory.
    path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    let home = navitty_home();
    logging::init(&home.join("navitty.log"))?;
    let config = Config::load(&home.join(CONFIG_FILE));

    let root = resolve_root(&args, &config)?;
    info!("starting in {}", root.display());
    let fs: Arc<dyn Filesystem> = Arc::new(LocalFs::new(root.clone()));
    let mut app = App::new(root, config, fs).await;

    navitty::runtime::run(&mut app).await
}

/// Picks the start directory: CLI argument, configured default, current
/// directory — in that order.
fn resolve_root(args: &Args, config: &Config) -> io::Result<PathBuf> {
    let requested = args
        .path
        .clone()
        .or_else(|| config.default_path.clone())
        .map_or_else(std::env::current_dir, Ok)?;
    let root = requested.canonicalize()?;
    if !root.is_dir() {
        return Err(io::Error::other(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    Ok(root)
}
