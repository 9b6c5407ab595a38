use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file (default: built-in defaults).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Path to the tree to operate on, as JSON.
    #[arg(short, long)]
    pub tree: PathBuf,
    /// Name of the container to focus before running the command.
    #[arg(short, long)]
    pub focus: Option<String>,
    /// Lay out every workspace before running the command.
    ///
    /// Useful for hand-written trees that leave out sizes or fractions.
    #[arg(long)]
    pub arrange_first: bool,
    /// Command to run, such as `resize grow width 10 px`.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}
