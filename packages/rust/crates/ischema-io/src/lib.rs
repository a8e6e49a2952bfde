#![allow(clippy::doc_markdown)]

//! ischema-io - Filesystem side of the ischema compiler
//!
//! Finds marked source files, reads them safely, loads `ischema.json`,
//! validates compiled schemas against draft-07 and writes them out.
//!
//! # Architecture
//!
//! ```text
//! ischema-io/src/
//! ├── lib.rs       # Re-exports (this file)
//! ├── error.rs     # IoError, ConfigError, SinkError, GenerateError
//! ├── detect.rs    # Binary detection & decoding
//! ├── read.rs      # Async source reading (Tokio)
//! ├── discover.rs  # Recursive source discovery (walkdir)
//! ├── config.rs    # ischema.json loading, init and resolution
//! ├── validate.rs  # SchemaValidator, Draft7Validator
//! ├── sink.rs      # DirectorySink: validate, then persist
//! └── generate.rs  # Generator: discover → parse → compile → sink
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use ischema_io::{Generator, load_config, prepare_out_dir};
//!
//! let config = load_config(root)?.resolve(root);
//! prepare_out_dir(&config.out_dir).await?;
//! let report = Generator::new(config).run().await?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod detect;
mod discover;
mod error;
mod generate;
mod read;
mod sink;
mod validate;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use config::{
    CONFIG_FILE_NAME, DEFAULT_MAX_FILE_SIZE, ProjectConfig, ProjectOptions, ResolvedConfig,
    init_config, load_config, prepare_out_dir,
};
pub use detect::{decode_source, is_binary};
pub use discover::{DiscoverOptions, discover_sources};
pub use error::{ConfigError, GenerateError, IoError, SinkError};
pub use generate::{GenerateReport, Generator};
pub use read::read_source;
pub use sink::DirectorySink;
pub use validate::{Draft7Validator, SchemaValidator};
