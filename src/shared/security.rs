use crate::shared::error::HonkerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for text inputs (dependency descriptions, templates)
pub const MAX_TEXT_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Maximum size accepted for a single archive entry read into memory
pub const MAX_ENTRY_SIZE: u64 = 32 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// `symlink_metadata()` is used so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "dependency description")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_size(metadata.len(), path, max_size)
}

/// Validates a size against a limit
///
/// # Errors
/// Returns an error if the size exceeds the maximum
pub fn validate_size(size: u64, path: &Path, max_size: u64) -> Result<()> {
    if size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            size,
            max_size
        );
    }
    Ok(())
}

/// Reads a UTF-8 text file after [`validate_regular_file`] succeeds
pub fn read_text_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description, MAX_TEXT_FILE_SIZE)?;
    fs::read_to_string(path).map_err(|e| {
        HonkerError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not readable as UTF-8 text: {}", file_description, e),
        }
        .into()
    })
}
