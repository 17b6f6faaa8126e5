//! Filesystem source strategy.
//!
//! Discovers UI source files under the configured roots and reads them for the
//! validators. Walk rules:
//! - `node_modules`, `backup` (or whatever `skip_dirs` names) are never entered
//! - hidden files and directories are skipped
//! - symlinks are not followed by default
//! - devices, pipes, and sockets are skipped
//!
//! Reads are bounded by `max_file_size`, and the result list is sorted so two
//! runs over the same tree visit files in the same order.

use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::config::DesignConfig;
use crate::error::{ScanError, ScanErrorKind};

/// Check if a path matches any of the exclude patterns
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    exclude_patterns.iter().any(|pattern| {
        pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}

/// Whether the walk should yield (and, for directories, descend into) `entry`.
///
/// The walk root itself is always kept, so `./components` is not mistaken for
/// a hidden entry.
fn is_walkable(entry: &DirEntry, skip_dirs: &[String]) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    let Some(name) = entry.file_name().to_str() else {
        return true;
    };
    if name.starts_with('.') {
        return false;
    }
    !(entry.file_type().is_dir() && skip_dirs.iter().any(|skip| skip == name))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

fn compile_excludes(patterns: &[String]) -> Result<Vec<Pattern>, ScanError> {
    patterns
        .iter()
        .map(|pat_str| {
            Pattern::new(pat_str).map_err(|e| {
                ScanError::new(
                    pat_str,
                    ScanErrorKind::InvalidExcludePattern,
                    format!("Invalid exclude glob pattern '{pat_str}': {e}"),
                )
            })
        })
        .collect()
}

#[cfg(unix)]
fn is_special_file(entry: &DirEntry) -> bool {
    use std::os::unix::fs::FileTypeExt;
    entry.metadata().map(|m| m.file_type()).is_ok_and(|ft| {
        ft.is_block_device() || ft.is_char_device() || ft.is_fifo() || ft.is_socket()
    })
}

#[cfg(not(unix))]
fn is_special_file(_entry: &DirEntry) -> bool {
    false
}

/// Find all source files under `config.scan_dirs`.
///
/// Scan roots that do not exist are skipped with a warning; the stock layout
/// does not require every root to be present.
///
/// # Errors
///
/// Returns a `ScanError` if an exclude pattern is invalid or the directory
/// walk fails (permission denied, symlink loop, ...). A partial walk is never
/// reported as a result.
pub fn find_source_files(config: &DesignConfig) -> Result<Vec<PathBuf>, ScanError> {
    let exclude_patterns = compile_excludes(&config.exclude)?;
    let mut files = Vec::new();

    for dir in &config.scan_dirs {
        let root = config.root.join(dir);

        if root.is_file() {
            if has_extension(&root, &config.extensions)
                && !matches_exclude(&root, &exclude_patterns)
            {
                files.push(root);
            }
            continue;
        }

        if !root.is_dir() {
            tracing::warn!(root = %root.display(), "scan root does not exist; skipping");
            continue;
        }

        let walker = WalkDir::new(&root)
            .follow_links(config.follow_links)
            .into_iter()
            .filter_entry(|entry| is_walkable(entry, &config.skip_dirs));

        for entry_result in walker {
            let entry = entry_result.map_err(|walk_err| {
                let path = walk_err
                    .path()
                    .map_or_else(|| root.clone(), Path::to_path_buf);
                ScanError::new(
                    path,
                    ScanErrorKind::WalkError,
                    format!("Directory traversal error: {walk_err}"),
                )
            })?;

            let file_path = entry.path();
            if !file_path.is_file() || is_special_file(&entry) {
                continue;
            }
            if !has_extension(file_path, &config.extensions) {
                continue;
            }
            if matches_exclude(file_path, &exclude_patterns) {
                tracing::debug!(file = %file_path.display(), "excluded by pattern");
                continue;
            }

            files.push(file_path.to_path_buf());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Read a file using a bounded read, enforcing `max_file_size`.
///
/// # Errors
///
/// Returns a `ScanError` if the file cannot be opened or read, exceeds
/// `max_file_size`, or is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, ScanError> {
    read_optional(path, max_file_size)?.ok_or_else(|| {
        ScanError::new(
            path,
            ScanErrorKind::IoError,
            "Failed to open file: file not found".to_owned(),
        )
    })
}

/// Like [`read_file_bounded`], but a missing file is `Ok(None)` rather than an error.
///
/// # Errors
///
/// Returns a `ScanError` for every failure other than "not found".
pub fn read_optional(path: &Path, max_file_size: u64) -> Result<Option<String>, ScanError> {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ScanError::new(
                path,
                ScanErrorKind::IoError,
                format!("Failed to open file: {e}"),
            ));
        }
    };

    // Read one byte past the limit so an oversized file is detectable.
    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| {
            ScanError::new(
                path,
                ScanErrorKind::IoError,
                format!("Failed to read file: {e}"),
            )
        })?;

    if buffer.len() as u64 > max_file_size {
        return Err(ScanError::new(
            path,
            ScanErrorKind::FileTooLarge,
            format!("File exceeds maximum size of {max_file_size} bytes"),
        ));
    }

    String::from_utf8(buffer).map(Some).map_err(|_| {
        ScanError::new(
            path,
            ScanErrorKind::InvalidEncoding,
            "File is not valid UTF-8".to_owned(),
        )
    })
}
