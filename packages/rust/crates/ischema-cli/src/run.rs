//! Command implementations: `--init` and the default generate mode.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ischema_core::IndexEncoding;
use ischema_io::{GenerateReport, Generator, init_config, load_config, prepare_out_dir};

/// Project root from the CLI, falling back to the working directory.
pub(crate) fn project_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root),
        None => std::env::current_dir().context("resolve current directory"),
    }
}

/// Write the starter config and return its path.
pub(crate) fn run_init(root: &Path) -> Result<PathBuf> {
    let path = init_config(root).context("write ischema.json")?;
    tracing::info!(path = %path.display(), "initialized config");
    Ok(path)
}

/// Load config, prepare the output directory and compile every schema.
pub(crate) async fn run_generate(
    root: &Path,
    index_encoding: Option<IndexEncoding>,
) -> Result<GenerateReport> {
    let mut config = load_config(root).context("load ischema.json")?.resolve(root);
    if let Some(encoding) = index_encoding {
        config.index_encoding = encoding;
    }
    tracing::debug!(
        root_dir = %config.root_dir.display(),
        out_dir = %config.out_dir.display(),
        encoding = ?config.index_encoding,
        "resolved config"
    );

    prepare_out_dir(&config.out_dir)
        .await
        .with_context(|| format!("create output directory {}", config.out_dir.display()))?;

    Generator::new(config)
        .run()
        .await
        .context("schema generation failed")
}
