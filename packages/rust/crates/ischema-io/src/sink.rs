//! Schema sink: validate a compiled schema, then write it to disk.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ischema_core::Schema;

use crate::error::SinkError;
use crate::validate::{Draft7Validator, SchemaValidator};

/// Writes accepted schemas to `<out_dir>/<title>.json`.
#[derive(Debug, Clone)]
pub struct DirectorySink<V = Draft7Validator> {
    out_dir: PathBuf,
    validator: V,
}

impl DirectorySink {
    /// Sink validating with [`Draft7Validator`].
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self::with_validator(out_dir, Draft7Validator)
    }
}

impl<V: SchemaValidator> DirectorySink<V> {
    /// Sink using a custom validator.
    pub fn with_validator(out_dir: impl Into<PathBuf>, validator: V) -> Self {
        Self {
            out_dir: out_dir.into(),
            validator,
        }
    }

    /// Destination directory.
    #[must_use]
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Validate `schema` and, only if accepted, write it as tab-indented JSON.
    ///
    /// Returns the written path.
    ///
    /// # Errors
    /// `SinkError::UnsafeTitle` when the title would leave `out_dir`,
    /// `SinkError::Rejected` when validation fails (nothing written in either
    /// case), `SinkError::Write` when the file cannot be written.
    pub async fn persist(&self, schema: &Schema) -> Result<PathBuf, SinkError> {
        let file_name = checked_file_name(schema)?;
        let value = schema.to_value()?;
        if let Err(reason) = self.validator.check(&value) {
            return Err(SinkError::Rejected {
                title: schema.title.clone(),
                reason,
            });
        }

        let path = self.out_dir.join(file_name);
        let bytes = schema.to_pretty_vec()?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| SinkError::Write {
                path: path.clone(),
                source,
            })?;
        Ok(path)
    }
}

/// `<title>.json`, provided it stays a single component under the out dir.
fn checked_file_name(schema: &Schema) -> Result<String, SinkError> {
    let title = &schema.title;
    let file_name = schema.file_name();
    let single = Path::new(&file_name).file_name() == Some(OsStr::new(&file_name));
    if title.is_empty() || title.contains(['/', '\\']) || title.contains("..") || !single {
        return Err(SinkError::UnsafeTitle {
            title: title.clone(),
        });
    }
    Ok(file_name)
}
