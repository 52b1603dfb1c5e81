use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// dirtree - Render a directory hierarchy as a box-drawing tree
#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to render
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Include files, annotated with their size in bytes
    #[arg(short, long)]
    pub files: bool,

    /// Path to configuration file
    #[arg(short, long, env = "DIRTREE_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL", conflicts_with = "man")]
    pub completions: Option<Shell>,

    /// Print a man page and exit
    #[arg(long)]
    pub man: bool,
}
