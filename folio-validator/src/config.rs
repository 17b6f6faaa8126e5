//! Configuration types for the content and design validators.
//!
//! The file lists both checks operate on are data, not control flow: `Default`
//! reproduces the stock portfolio layout, and callers (the CLI) override any
//! list they need to.

use std::path::PathBuf;

/// Default maximum file size in bytes (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10_485_760;

/// Default number of lines searched after a `year` literal for its `role` and `company`.
pub const DEFAULT_LOOKAHEAD: usize = 10;

/// Component files (relative to the components directory) that embed employment history.
pub const DEFAULT_CONTENT_FILES: &[&str] = &[
    "experience-section.tsx",
    "resume-timeline.tsx",
    "about-section.tsx",
];

/// Roots walked by the design validator, relative to the project root.
pub const DEFAULT_SCAN_DIRS: &[&str] = &["components", "app", "lib"];

/// Files whose absence fails the design check outright.
pub const DEFAULT_CRITICAL_FILES: &[&str] = &[
    "app/layout.tsx",
    "app/page.tsx",
    "components/navigation.tsx",
];

/// Directories never descended into, matched by exact name.
pub const DEFAULT_SKIP_DIRS: &[&str] = &["node_modules", "backup"];

/// Extensions considered UI source.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx"];

fn to_paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Options for the content consistency check.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ContentConfig {
    /// Project root; every other path is resolved against it.
    pub root: PathBuf,
    /// Directory holding the component files, relative to `root`.
    pub components_dir: PathBuf,
    /// Component files to scan, relative to `components_dir`.
    pub files: Vec<PathBuf>,
    /// Lines searched after (and including) a `year` line for `role`/`company`.
    pub lookahead: usize,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            components_dir: PathBuf::from("components"),
            files: to_paths(DEFAULT_CONTENT_FILES),
            lookahead: DEFAULT_LOOKAHEAD,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl ContentConfig {
    /// Scanned files as `(display path, on-disk path)` pairs.
    ///
    /// The display path is relative to `root` so reports stay stable no matter
    /// where the tool is invoked from.
    #[must_use]
    pub fn resolved_files(&self) -> Vec<(PathBuf, PathBuf)> {
        self.files
            .iter()
            .map(|file| {
                let display = self.components_dir.join(file);
                let on_disk = self.root.join(&display);
                (display, on_disk)
            })
            .collect()
    }
}

/// Options for the design-token compliance check.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DesignConfig {
    /// Project root; every other path is resolved against it.
    pub root: PathBuf,
    /// Directories walked recursively, relative to `root`.
    pub scan_dirs: Vec<PathBuf>,
    /// Files that must exist, relative to `root`. Each is validated even if
    /// it lives outside `scan_dirs`.
    pub critical_files: Vec<PathBuf>,
    /// Directory names skipped during the walk (hidden entries are always skipped).
    pub skip_dirs: Vec<String>,
    /// File extensions (without the dot) that are scanned.
    pub extensions: Vec<String>,
    /// Exclude patterns (glob format), matched against the path and the file name.
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links while walking (default: `false`).
    pub follow_links: bool,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            scan_dirs: to_paths(DEFAULT_SCAN_DIRS),
            critical_files: to_paths(DEFAULT_CRITICAL_FILES),
            skip_dirs: to_strings(DEFAULT_SKIP_DIRS),
            extensions: to_strings(DEFAULT_EXTENSIONS),
            exclude: Vec::new(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            follow_links: false,
        }
    }
}
