//! File saving helpers for rendered drawings and gallery pages.

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Default directory for rendered drawings (`~/Pictures/Sketchwall`).
pub fn default_output_directory() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Sketchwall")
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the directory exists, creating it if necessary.
///
/// Returns the canonicalized path to the directory.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf> {
    if !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory)
            .with_context(|| format!("Failed to create {}", directory.display()))?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes `data` to `path`, creating the parent directory when needed.
///
/// The file is readable and writable by the current user only.
pub fn write_private_file(path: &Path, data: &[u8]) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    log::info!("Writing {} ({} bytes)", path.display(), data.len());
    fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    }

    Ok(path.to_path_buf())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Reduces arbitrary text to a short, filesystem-safe file stem.
pub fn sanitize_file_stem(text: &str) -> String {
    let stem: String = text
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let stem = stem
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    let stem: String = stem.chars().take(40).collect();
    if stem.is_empty() {
        "drawing".to_string()
    } else {
        stem
    }
}
