//! Report types produced by the content and design validators.
//!
//! Reports are plain in-memory aggregates built fresh on every run.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A single message recorded by the content validator.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct Finding {
    /// File the message refers to, if any.
    pub file: Option<PathBuf>,
    /// Line number (1-indexed); 0 when the message is not tied to a line.
    pub line: usize,
    /// Human-readable description. May span several lines.
    pub message: String,
}

impl Finding {
    /// A message not tied to any file.
    #[must_use]
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            file: None,
            line: 0,
            message: message.into(),
        }
    }

    /// A message about a whole file.
    #[must_use]
    pub fn in_file(file: &Path, message: impl Into<String>) -> Self {
        Self {
            file: Some(file.to_owned()),
            line: 0,
            message: message.into(),
        }
    }

    /// A message about one line of a file.
    #[must_use]
    pub fn at_line(file: &Path, line: usize, message: impl Into<String>) -> Self {
        Self {
            file: Some(file.to_owned()),
            line,
            message: message.into(),
        }
    }

    /// Format the finding for human-readable output.
    ///
    /// `{file}:{line}: {message}`, `{file}: {message}`, or just `{message}`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        match &self.file {
            Some(file) if self.line > 0 => {
                format!("{}:{}: {}", file.display(), self.line, self.message)
            }
            Some(file) => format!("{}: {}", file.display(), self.message),
            None => self.message.clone(),
        }
    }
}

/// Result of a content consistency run.
#[derive(Debug, Clone, Default, Serialize)]
#[non_exhaustive]
pub struct ContentReport {
    /// Number of configured files that were present and read.
    pub files_checked: usize,
    /// Employment entries (year + role + company) extracted across all files.
    pub entries_found: usize,
    /// Fatal problems: missing files/fields and year mismatches.
    pub errors: Vec<Finding>,
    /// Advisory problems: open-ended or malformed dates.
    pub warnings: Vec<Finding>,
    /// Progress notes for the human report.
    pub info: Vec<Finding>,
}

impl ContentReport {
    /// Whether the run recorded no errors. Warnings never fail a run.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Coarse urgency of a file's violations, ordered from least to most severe.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All tiers, most severe first.
    pub const ALL: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// CRITICAL and HIGH fail the design check; MEDIUM and LOW are reported only.
    #[must_use]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a design-token violation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    #[serde(rename = "SPACING_VIOLATION")]
    Spacing,
    #[serde(rename = "COLOR_VIOLATION")]
    Color,
    #[serde(rename = "TYPOGRAPHY_VIOLATION")]
    Typography,
    #[serde(rename = "SYSTEM_VIOLATION")]
    System,
    #[serde(rename = "SHADOW_VIOLATION")]
    Shadow,
}

impl ViolationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spacing => "SPACING_VIOLATION",
            Self::Color => "COLOR_VIOLATION",
            Self::Typography => "TYPOGRAPHY_VIOLATION",
            Self::System => "SYSTEM_VIOLATION",
            Self::Shadow => "SHADOW_VIOLATION",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rule match on one line of one file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct Violation {
    #[serde(rename = "type")]
    pub kind: ViolationKind,
    /// Line number (1-indexed).
    pub line: usize,
    /// The offending line, trimmed.
    pub content: String,
    /// Fixed advisory text for the rule.
    pub suggestion: &'static str,
    /// Identifier of the violated rule, e.g. `spacing-off-grid`.
    pub rule: &'static str,
}

/// All violations found in a single file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileReport {
    pub file: PathBuf,
    /// In line order.
    pub violations: Vec<Violation>,
    pub severity: Severity,
}

/// Result of a design-token run.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct DesignReport {
    /// Number of files read and checked.
    pub scanned_files: usize,
    /// Whether no file is CRITICAL/HIGH and every critical file exists.
    pub ok: bool,
    /// Files with at least one violation, sorted by path.
    pub files: Vec<FileReport>,
    /// Critical files that do not exist.
    pub missing_critical: Vec<PathBuf>,
}

impl DesignReport {
    #[must_use]
    pub fn new(scanned_files: usize, files: Vec<FileReport>, missing_critical: Vec<PathBuf>) -> Self {
        let ok = missing_critical.is_empty() && !files.iter().any(|f| f.severity.is_blocking());
        Self {
            scanned_files,
            ok,
            files,
            missing_critical,
        }
    }

    /// Total number of violations across all files.
    #[must_use]
    pub fn violations_count(&self) -> usize {
        self.files.iter().map(|f| f.violations.len()).sum()
    }

    /// Number of files classified at exactly `severity`.
    #[must_use]
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.files.iter().filter(|f| f.severity == severity).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_finding_with_line() {
        let finding = Finding::at_line(Path::new("components/a.tsx"), 12, "bad date");
        assert_eq!(
            finding.format_human_readable(),
            "components/a.tsx:12: bad date"
        );
    }

    #[test]
    fn test_format_finding_without_line() {
        let finding = Finding::in_file(Path::new("components/a.tsx"), "missing field");
        assert_eq!(
            finding.format_human_readable(),
            "components/a.tsx: missing field"
        );
        assert_eq!(Finding::general("done").format_human_readable(), "done");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert!(Severity::High.is_blocking());
        assert!(!Severity::Medium.is_blocking());
    }

    #[test]
    fn test_design_report_ok_requires_critical_files() {
        let report = DesignReport::new(3, vec![], vec![PathBuf::from("app/layout.tsx")]);
        assert!(!report.ok);
        assert!(DesignReport::new(3, vec![], vec![]).ok);
    }

    #[test]
    fn test_violation_serializes_type_tag() {
        let violation = Violation {
            kind: ViolationKind::Spacing,
            line: 3,
            content: "<div className=\"py-5\">".to_owned(),
            suggestion: "use the grid",
            rule: "spacing-off-grid",
        };
        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["type"], "SPACING_VIOLATION");
        assert_eq!(json["line"], 3);
    }
}
