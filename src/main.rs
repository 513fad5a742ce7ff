//! Binary entry point: set up logging, find the inventory file, and hand the
//! session to the console menu. The menu performs the startup load itself so a
//! missing or empty file is reported like any other load.
use cd_inventory::{inventory_path, run_app, App, Inventory};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `CD_INVENTORY_LOG=debug`.
const LOG_ENV_VAR: &str = "CD_INVENTORY_LOG";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let path = inventory_path();
    tracing::debug!(path = %path.display(), "using inventory file");

    let mut app = App::new(Inventory::new(), path);
    run_app(&mut app)
}

/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
