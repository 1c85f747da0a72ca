use anyhow::{Context, Result};

use crate::args::Cli;
use crate::config::{Config, resolve_data_dir};
use crate::tui;
use stocklet_core::App;
use stocklet_store::Store;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

    let config = Config::load_from(&data_dir.join("config.toml"))?;

    // Storage unavailability is the one fatal error class: there is no
    // offline mode, so abort startup with a clear message.
    let db_path = data_dir.join("inventory.db");
    let mut store = Store::open(&db_path)?;
    if config.seed_examples {
        store.seed_example_items()?;
    }

    let app = App::new(store)?.with_currency(config.currency);
    tui::run(app)
}
