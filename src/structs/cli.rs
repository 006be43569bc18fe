use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "review-relay")]
#[clap(about = "HTTP relay for AI code review with hosted history", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
