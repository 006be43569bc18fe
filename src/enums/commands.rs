use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP relay
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        config: Option<PathBuf>,
        /// Keep history in process memory instead of the hosted store
        #[clap(long)]
        ephemeral_store: bool,
    },
    /// Load and validate configuration without starting the server
    Check {
        #[clap(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the DDL for the history tables
    Schema,
}
