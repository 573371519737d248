use std::fs;
use std::path::{Path, PathBuf};

/// The manuscript home page, excluded from conversion
pub const HOME_PAGE: &str = "index.md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
}

/// Create the output directory if it doesn't already exist.
///
/// Idempotent: succeeds when the directory is already present.
pub fn ensure_output_dir(path: &Path) -> Result<(), IoError> {
    fs::create_dir_all(path).map_err(IoError::Io)
}

/// List convertible manuscript files directly contained in the source
/// directory (non-recursive).
///
/// Keeps entries with an exact `md` extension, skipping the home page.
/// Entries are sorted by filename so processing order is reproducible.
pub fn list_eligible_sources(source_dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !source_dir.is_dir() {
        return Err(IoError::InvalidSourceDir(
            "source directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(source_dir).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }
        if let Some(ext) = path.extension()
            && ext == "md"
            && path.file_name().is_some_and(|name| name != HOME_PAGE)
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read a manuscript file's full text
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write converted text to an output file, overwriting any previous run's
/// copy. Output is always UTF-8.
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    fs::write(path, content).map_err(IoError::Io)
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
