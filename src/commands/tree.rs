//! Tree command implementation

use std::io::{self, Write};

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{Result, TreeError};
use crate::tree::{render_tree, RenderOptions, RenderStats};

/// Combine command-line flags with the loaded configuration.
///
/// `-f` can only turn file rendering on; the config supplies the default.
pub fn render_options(cli: &Cli, config: &Config) -> RenderOptions {
    RenderOptions::new()
        .with_files(cli.files || config.render.print_files)
        .with_traversal(config.render.traversal)
}

/// Render the tree for `cli.path` into `writer`
pub fn render_to<W: Write + ?Sized>(
    cli: &Cli,
    config: &Config,
    writer: &mut W,
) -> Result<RenderStats> {
    let options = render_options(cli, config);

    tracing::info!(
        path = %cli.path.display(),
        print_files = options.print_files,
        "Rendering directory tree"
    );

    let stats = render_tree(writer, &cli.path, &options)?;
    writer.flush().map_err(TreeError::SinkWrite)?;

    tracing::debug!(?stats, "Render complete");
    Ok(stats)
}

/// Run the tree command against stdout
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_to(cli, config, &mut out)?;
    Ok(())
}
