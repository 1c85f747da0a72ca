use clap::Parser;

#[derive(Parser)]
#[command(name = "stocklet")]
#[command(about = "Manage and check out local inventory from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding the inventory database and config.toml
    /// (defaults to $STOCKLET_PATH, then the platform data dir,
    /// then ~/.stocklet)
    #[arg(long)]
    pub data_dir: Option<String>,
}
