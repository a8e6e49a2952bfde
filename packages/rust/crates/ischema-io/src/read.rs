//! Loading interface source files for the generator.

use std::path::Path;

use tokio::fs as tokio_fs;

use crate::detect::decode_source;
use crate::error::IoError;

/// Load one source file as text, refusing files over `max_bytes`
/// (the project's `maxFileSize`) before any bytes are read.
///
/// # Errors
/// `NotFound` when the file is missing, `TooLarge` past `max_bytes`,
/// `BinaryFile` for binary content, `System` for other I/O failures.
pub async fn read_source<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<String, IoError> {
    let path = path.as_ref();

    let size = match tokio_fs::metadata(path).await {
        Ok(metadata) => metadata.len(),
        Err(_) => return Err(IoError::NotFound(path.display().to_string())),
    };
    if size > max_bytes {
        return Err(IoError::TooLarge(size, max_bytes));
    }

    decode_source(tokio_fs::read(path).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_source() {
        let dir = tempfile::TempDir::new().unwrap();
        let p = dir.path().join("model.ts");
        tokio_fs::write(&p, "/* SCHEMA */").await.unwrap();
        assert_eq!(read_source(&p, 1024).await.unwrap(), "/* SCHEMA */");
    }

    #[tokio::test]
    async fn test_read_source_too_large() {
        let dir = tempfile::TempDir::new().unwrap();
        let p = dir.path().join("big.ts");
        tokio_fs::write(&p, "12345678901234567890").await.unwrap();
        assert!(matches!(
            read_source(&p, 10).await,
            Err(IoError::TooLarge(20, 10))
        ));
    }

    #[tokio::test]
    async fn test_read_source_missing() {
        let result = read_source("/nonexistent/model.ts", 1024).await;
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
