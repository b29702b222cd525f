use crate::options::sub_command::Commands;
use clap::Parser;

/// program to generate, validate and inject browser fingerprints.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Build main sub commands
    #[clap(subcommand)]
    pub command: Commands,
    /// Log what each step is doing on standard error
    #[clap(short, long)]
    pub verbose: bool,
}
