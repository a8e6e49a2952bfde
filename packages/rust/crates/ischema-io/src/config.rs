//! Project config loader: `ischema.json` in the project root.
//!
//! ```json
//! {
//! 	"options": {
//! 		"rootDir": ".",
//! 		"outDir": "./schemas"
//! 	}
//! }
//! ```
//!
//! Every key is optional. Relative directories are resolved against the
//! project root, not the working directory.

use std::path::{Path, PathBuf};

use ischema_core::{GrammarConfig, IndexEncoding};
use serde::{Deserialize, Serialize};

use crate::discover::DiscoverOptions;
use crate::error::{ConfigError, IoError};

/// Config file name looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "ischema.json";

/// Default upper bound for a single source file (8MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 8 * 1024 * 1024;

/// Top-level `ischema.json` shape: `{ "options": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Generation options.
    #[serde(default)]
    pub options: ProjectOptions,
}

/// The `options` object of `ischema.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectOptions {
    /// Directory scanned for sources.
    pub root_dir: PathBuf,
    /// Directory receiving `<title>.json` files.
    pub out_dir: PathBuf,
    /// Source extensions (e.g. `[".ts"]`).
    pub extensions: Vec<String>,
    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,
    /// Skip dot-files and dot-directories.
    pub skip_hidden: bool,
    /// Per-file size limit in bytes.
    pub max_file_size: u64,
    /// Where nested index signatures are recorded.
    pub index_encoding: IndexEncoding,
    /// Marker literals (`startMarker`, `endMarker`, `indexOpener`).
    #[serde(flatten)]
    pub grammar: GrammarConfig,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        let discover = DiscoverOptions::default();
        Self {
            root_dir: PathBuf::from("."),
            out_dir: PathBuf::from("."),
            extensions: discover.extensions,
            skip_dirs: discover.skip_dirs,
            skip_hidden: discover.skip_hidden,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            index_encoding: IndexEncoding::default(),
            grammar: GrammarConfig::default(),
        }
    }
}

/// Config with absolute directories, ready for a generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Directory scanned for sources.
    pub root_dir: PathBuf,
    /// Directory receiving schema files.
    pub out_dir: PathBuf,
    /// Discovery filters.
    pub discover: DiscoverOptions,
    /// Per-file size limit in bytes.
    pub max_file_size: u64,
    /// Index signature placement.
    pub index_encoding: IndexEncoding,
    /// Marker literals.
    pub grammar: GrammarConfig,
}

impl ProjectConfig {
    /// Resolve relative directories against `project_root`.
    #[must_use]
    pub fn resolve(self, project_root: &Path) -> ResolvedConfig {
        let options = self.options;
        ResolvedConfig {
            root_dir: resolve_dir(project_root, options.root_dir),
            out_dir: resolve_dir(project_root, options.out_dir),
            discover: DiscoverOptions {
                extensions: options.extensions,
                skip_hidden: options.skip_hidden,
                skip_dirs: options.skip_dirs,
            },
            max_file_size: options.max_file_size,
            index_encoding: options.index_encoding,
            grammar: options.grammar,
        }
    }
}

fn resolve_dir(project_root: &Path, dir: PathBuf) -> PathBuf {
    if dir.is_absolute() {
        dir
    } else {
        project_root.join(dir)
    }
}

/// Load `ischema.json` from `project_root`.
///
/// A missing file yields the defaults (`rootDir` and `outDir` both `.`).
///
/// # Errors
/// `ConfigError::Read` if the file exists but cannot be read,
/// `ConfigError::Parse` if it is not a valid config.
pub fn load_config(project_root: &Path) -> Result<ProjectConfig, ConfigError> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ProjectConfig::default());
    }
    let bytes = std::fs::read(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse { path, source })
}

/// Write the starter `ischema.json` into `project_root`, replacing any
/// existing file. Returns the written path.
///
/// # Errors
/// `ConfigError::Write` if the file cannot be written.
pub fn init_config(project_root: &Path) -> Result<PathBuf, ConfigError> {
    let path = project_root.join(CONFIG_FILE_NAME);
    let template = "{\n\t\"options\": {\n\t\t\"rootDir\": \".\",\n\t\t\"outDir\": \"./schemas\"\n\t}\n}";
    std::fs::write(&path, template).map_err(|source| ConfigError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Create the output directory (and parents) if it does not exist.
///
/// # Errors
/// Returns `IoError::System` if the directory cannot be created.
pub async fn prepare_out_dir(out_dir: &Path) -> Result<(), IoError> {
    tokio::fs::create_dir_all(out_dir).await?;
    Ok(())
}
