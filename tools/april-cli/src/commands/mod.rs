//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod play;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only list products from this collection.
    #[arg(short, long)]
    pub collection: Option<String>,

    /// Show product descriptions and fabrics.
    #[arg(short, long)]
    pub long: bool,
}

/// Arguments for the play command.
#[derive(Args)]
pub struct PlayArgs {
    /// Script file to run.
    pub script: String,

    /// Keep going after a step fails.
    #[arg(short, long)]
    pub keep_going: bool,

    /// Start with the bag panel open.
    #[arg(long)]
    pub open: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Where to write the file.
        #[arg(default_value = "april.toml")]
        path: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
