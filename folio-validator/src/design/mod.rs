//! Design-token compliance validator.
//!
//! Walks the configured roots, checks every line of every UI source file
//! against [`rules::RULES`], and classifies each file with
//! [`severity::classify`]. Critical files are validated as well and must exist.

pub mod rules;
pub mod severity;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::DesignConfig;
use crate::report::{DesignReport, FileReport, Violation};
use crate::strategy::fs::{find_source_files, read_file_bounded};
use rules::RULES;

/// Check one file's text.
///
/// Violations are collected in a single top-to-bottom pass, so they come out
/// in line order. Each rule contributes at most one violation per line.
#[must_use]
pub fn validate_source(content: &str, file: &Path) -> FileReport {
    let mut violations = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        for rule in RULES.iter().filter(|rule| rule.is_violated_by(line)) {
            violations.push(Violation {
                kind: rule.kind,
                line: idx + 1,
                content: line.trim().to_owned(),
                suggestion: rule.suggestion,
                rule: rule.id,
            });
        }
    }

    let severity = severity::classify(&violations);
    FileReport {
        file: file.to_owned(),
        violations,
        severity,
    }
}

/// Read and check a single file, reporting it under `display`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is larger than
/// `max_file_size`, or is not valid UTF-8.
pub fn validate_file(path: &Path, display: &Path, max_file_size: u64) -> anyhow::Result<FileReport> {
    let content = read_file_bounded(path, max_file_size)?;
    Ok(validate_source(&content, display))
}

fn display_path(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root).unwrap_or(path).to_path_buf()
}

/// Check every UI source file under `config.scan_dirs` plus the critical files.
///
/// # Errors
///
/// Returns an error if the walk fails or a discovered file cannot be read.
/// A missing critical file is not an error; it is recorded in the report and
/// fails it.
pub fn validate_project(config: &DesignConfig) -> anyhow::Result<DesignReport> {
    let mut files: BTreeSet<PathBuf> = find_source_files(config)
        .context("Failed to discover source files")?
        .into_iter()
        .collect();

    let mut missing_critical = Vec::new();
    for critical in &config.critical_files {
        let path = config.root.join(critical);
        if path.is_file() {
            files.insert(path);
        } else {
            tracing::error!(file = %critical.display(), "critical file is missing");
            missing_critical.push(critical.clone());
        }
    }

    let mut reports = Vec::new();
    for path in &files {
        let shown = display_path(&config.root, path);
        let report = validate_file(path, &shown, config.max_file_size)
            .with_context(|| format!("Failed to validate {}", shown.display()))?;
        tracing::debug!(
            file = %shown.display(),
            violations = report.violations.len(),
            severity = %report.severity,
            "checked file"
        );
        if !report.violations.is_empty() {
            reports.push(report);
        }
    }

    Ok(DesignReport::new(files.len(), reports, missing_critical))
}
