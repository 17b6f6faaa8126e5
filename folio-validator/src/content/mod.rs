//! Content consistency validator.
//!
//! Employment history is duplicated across several components as literal
//! `year` / `role` / `company` fields. Three passes run over the configured
//! files, in order:
//! 1. employment consistency: one `(company, role)` must carry one `year`
//! 2. professional info: open-ended and malformed dates are flagged as warnings
//! 3. structural integrity: every file exists and carries all three fields

pub mod dates;
pub mod extract;

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use anyhow::Context;

use crate::config::ContentConfig;
use crate::report::{ContentReport, Finding};
use crate::strategy::fs::read_optional;
use dates::{is_accepted_format, is_open_ended};
use extract::{EmploymentEntry, extract_entries, year_literals};

/// Literal markers every configured file must contain.
pub const REQUIRED_FIELDS: &[&str] = &["year:", "role:", "company:"];

/// A configured component file and its text, if it exists.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path used in findings.
    pub path: PathBuf,
    /// `None` when the file does not exist.
    pub content: Option<String>,
}

/// Run the content checks against the files named in `config`.
///
/// Missing files are findings, not errors.
///
/// # Errors
///
/// Returns an error if an existing file cannot be read (permissions, size
/// limit, encoding).
pub fn validate_content(config: &ContentConfig) -> anyhow::Result<ContentReport> {
    let mut sources = Vec::with_capacity(config.files.len());
    for (shown, on_disk) in config.resolved_files() {
        let content = read_optional(&on_disk, config.max_file_size)
            .with_context(|| format!("Failed to read component file {}", shown.display()))?;
        tracing::debug!(
            file = %shown.display(),
            present = content.is_some(),
            "loaded component file"
        );
        sources.push(SourceFile {
            path: shown,
            content,
        });
    }

    Ok(validate_sources(&sources, config.lookahead))
}

/// Run the three content passes over already-loaded sources.
#[must_use]
pub fn validate_sources(sources: &[SourceFile], lookahead: usize) -> ContentReport {
    let mut report = ContentReport {
        files_checked: sources.iter().filter(|s| s.content.is_some()).count(),
        ..ContentReport::default()
    };

    check_employment_consistency(sources, lookahead, &mut report);
    check_professional_info(sources, &mut report);
    check_structural_integrity(sources, &mut report);
    report
}

fn present(sources: &[SourceFile]) -> impl Iterator<Item = (&SourceFile, &str)> {
    sources
        .iter()
        .filter_map(|s| s.content.as_deref().map(|content| (s, content)))
}

fn check_employment_consistency(sources: &[SourceFile], lookahead: usize, report: &mut ContentReport) {
    let entries: Vec<EmploymentEntry> = present(sources)
        .flat_map(|(source, content)| extract_entries(content, &source.path, lookahead))
        .collect();

    let mut groups: BTreeMap<(&str, &str), Vec<&EmploymentEntry>> = BTreeMap::new();
    for entry in &entries {
        groups
            .entry((entry.company.as_str(), entry.role.as_str()))
            .or_default()
            .push(entry);
    }

    let mut mismatched = 0;
    for ((company, role), group) in &groups {
        let years: BTreeSet<&str> = group.iter().map(|e| e.year.as_str()).collect();
        if years.len() < 2 {
            continue;
        }
        mismatched += 1;
        let locations: Vec<String> = group
            .iter()
            .map(|e| format!("    {}:{} -> {}", e.file.display(), e.line, e.year))
            .collect();
        report.errors.push(Finding::general(format!(
            "Inconsistent years for \"{role}\" at \"{company}\":\n{}",
            locations.join("\n")
        )));
    }

    report.entries_found = entries.len();
    report.info.push(Finding::general(format!(
        "Found {} employment entries ({} company/role pairs) across {} files",
        entries.len(),
        groups.len(),
        report.files_checked
    )));
    if mismatched == 0 && !groups.is_empty() {
        report.info.push(Finding::general(
            "All company/role pairs use consistent years",
        ));
    }
}

fn check_professional_info(sources: &[SourceFile], report: &mut ContentReport) {
    let mut checked = 0;
    for (source, content) in present(sources) {
        for literal in year_literals(content) {
            checked += 1;
            if is_open_ended(&literal.value) {
                report.warnings.push(Finding::at_line(
                    &source.path,
                    literal.line,
                    format!(
                        "Open-ended date \"{}\"; confirm the position is still current",
                        literal.value
                    ),
                ));
            }
            if !is_accepted_format(&literal.value) {
                report.warnings.push(Finding::at_line(
                    &source.path,
                    literal.line,
                    format!(
                        "Date \"{}\" does not match YYYY\u{2014}YYYY, YYYY\u{2014}Present or YYYY",
                        literal.value
                    ),
                ));
            }
        }
    }
    report
        .info
        .push(Finding::general(format!("Checked {checked} date values")));
}

fn check_structural_integrity(sources: &[SourceFile], report: &mut ContentReport) {
    let errors_before = report.errors.len();
    for source in sources {
        let Some(content) = source.content.as_deref() else {
            report
                .errors
                .push(Finding::in_file(&source.path, "Required file is missing"));
            continue;
        };
        for field in REQUIRED_FIELDS {
            if !content.contains(field) {
                report.errors.push(Finding::in_file(
                    &source.path,
                    format!("Required field `{field}` not found"),
                ));
            }
        }
    }

    if report.errors.len() == errors_before {
        report.info.push(Finding::general(format!(
            "All {} required files present with year/role/company fields",
            sources.len()
        )));
    }
}
