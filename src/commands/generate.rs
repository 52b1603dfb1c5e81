//! Shell completion and man page generation

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::{Result, TreeError};

/// Write completions for `shell` to `writer`
pub fn completions<W: Write>(shell: Shell, writer: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    // clap_complete panics on a failed write, so render into memory first.
    let mut script = Vec::new();
    clap_complete::generate(shell, &mut cmd, name, &mut script);
    writer.write_all(&script).map_err(TreeError::SinkWrite)
}

/// Write a roff man page to `writer`
pub fn man_page<W: Write>(writer: &mut W) -> Result<()> {
    clap_mangen::Man::new(Cli::command())
        .render(writer)
        .map_err(TreeError::SinkWrite)
}
