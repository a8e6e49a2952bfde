//! Generation driver: discover → read → parse → compile → validate → write.
//!
//! Files, blocks and schemas are processed strictly in order. The first
//! rejected schema aborts the run; schemas written before it stay on disk.

use std::path::PathBuf;

use ischema_core::{SchemaCompiler, parse_source};

use crate::config::ResolvedConfig;
use crate::discover::discover_sources;
use crate::error::GenerateError;
use crate::read::read_source;
use crate::sink::DirectorySink;
use crate::validate::{Draft7Validator, SchemaValidator};

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Number of source files read.
    pub files_scanned: usize,
    /// Written schema files, in processing order.
    pub schemas_written: Vec<PathBuf>,
}

/// Runs one generation pass over a project.
#[derive(Debug)]
pub struct Generator<V = Draft7Validator> {
    config: ResolvedConfig,
    compiler: SchemaCompiler,
    sink: DirectorySink<V>,
}

impl Generator {
    /// Generator validating with [`Draft7Validator`].
    #[must_use]
    pub fn new(config: ResolvedConfig) -> Self {
        Self::with_validator(config, Draft7Validator)
    }
}

impl<V: SchemaValidator> Generator<V> {
    /// Generator using a custom validator.
    pub fn with_validator(config: ResolvedConfig, validator: V) -> Self {
        let compiler = SchemaCompiler::new(config.index_encoding);
        let sink = DirectorySink::with_validator(config.out_dir.clone(), validator);
        Self {
            config,
            compiler,
            sink,
        }
    }

    /// Resolved configuration driving this run.
    #[must_use]
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Process every discovered source file.
    ///
    /// # Errors
    /// Fails on the first discovery, read, compile, validation or write error.
    pub async fn run(&self) -> Result<GenerateReport, GenerateError> {
        let files = discover_sources(&self.config.root_dir, &self.config.discover)
            .map_err(GenerateError::Discover)?;

        let mut report = GenerateReport::default();
        for path in files {
            let written = self.process_file(path).await?;
            report.files_scanned += 1;
            report.schemas_written.extend(written);
        }
        Ok(report)
    }

    async fn process_file(&self, path: PathBuf) -> Result<Vec<PathBuf>, GenerateError> {
        let text = read_source(&path, self.config.max_file_size)
            .await
            .map_err(|source| GenerateError::Read {
                path: path.clone(),
                source,
            })?;

        let interfaces = parse_source(&text, &self.config.grammar);
        tracing::debug!(
            file = %path.display(),
            interfaces = interfaces.len(),
            "scanned source"
        );

        let mut written = Vec::with_capacity(interfaces.len());
        for interface in &interfaces {
            if interface.name.is_empty() {
                tracing::debug!(file = %path.display(), "skipping declaration without a name");
                continue;
            }
            let schema = self.compiler.compile(interface)?;
            let out = self.sink.persist(&schema).await?;
            tracing::info!(
                title = %schema.title,
                source = %path.display(),
                out = %out.display(),
                "wrote schema"
            );
            written.push(out);
        }
        Ok(written)
    }
}
