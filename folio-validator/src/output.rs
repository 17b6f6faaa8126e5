//! Shared output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for `ContentReport` and
//! `DesignReport`. Plain text carries no ANSI codes; coloring belongs to the
//! CLI layer. Output depends only on the report, so two runs over an
//! unchanged tree print identical bytes.

use std::io::Write;

use serde::Serialize;

use crate::report::{ContentReport, DesignReport, Finding, Severity};

const RULE_WIDTH: usize = 80;

/// Banner line printed when the design check passes.
pub const DESIGN_PASSED: &str = "DESIGN SYSTEM VALIDATION PASSED";
/// Banner line printed when the design check fails.
pub const DESIGN_FAILED: &str = "DESIGN SYSTEM VALIDATION FAILED";
/// Banner line printed when the content check passes.
pub const CONTENT_PASSED: &str = "CONTENT VALIDATION PASSED";
/// Banner line printed when the content check fails.
pub const CONTENT_FAILED: &str = "CONTENT VALIDATION FAILED";

/// Format any report as pretty JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<T: Serialize>(report: &T, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

fn write_header(writer: &mut dyn Write, title: &str) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(writer, "  {title}")?;
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(writer)?;
    Ok(())
}

fn write_section(writer: &mut dyn Write, title: &str) -> anyhow::Result<()> {
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(writer, "  {title}")?;
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
    Ok(())
}

fn write_findings(writer: &mut dyn Write, title: &str, findings: &[Finding]) -> anyhow::Result<()> {
    if findings.is_empty() {
        return Ok(());
    }
    write_section(writer, title)?;
    for finding in findings {
        writeln!(writer, "{}", finding.format_human_readable())?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Format a `ContentReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_content_human(report: &ContentReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    write_header(writer, "CONTENT CONSISTENCY VALIDATOR")?;
    writeln!(writer, "  Files checked:       {}", report.files_checked)?;
    writeln!(writer, "  Employment entries:  {}", report.entries_found)?;
    writeln!(writer, "  Errors:              {}", report.errors.len())?;
    writeln!(writer, "  Warnings:            {}", report.warnings.len())?;
    writeln!(writer)?;

    write_findings(writer, "INFO", &report.info)?;
    write_findings(writer, "WARNINGS", &report.warnings)?;
    write_findings(writer, "ERRORS", &report.errors)?;

    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    if report.is_valid() {
        writeln!(writer, "\u{2713} {CONTENT_PASSED}")?;
        if !report.warnings.is_empty() {
            writeln!(
                writer,
                "  {} warning(s) to review; warnings do not fail the build",
                report.warnings.len()
            )?;
        }
    } else {
        writeln!(
            writer,
            "\u{2717} {CONTENT_FAILED}: {} error(s)",
            report.errors.len()
        )?;
        writeln!(writer)?;
        writeln!(writer, "  To fix:")?;
        writeln!(
            writer,
            "    - Use the same year string for a role everywhere it appears"
        )?;
        writeln!(
            writer,
            "    - Keep year:, role: and company: fields in every listed component"
        )?;
    }
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Format a `DesignReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_design_human(report: &DesignReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    write_header(writer, "DESIGN SYSTEM VALIDATOR")?;
    writeln!(writer, "  Files scanned:          {}", report.scanned_files)?;
    writeln!(writer, "  Files with violations:  {}", report.files.len())?;
    writeln!(writer, "  Violations found:       {}", report.violations_count())?;
    let tallies: Vec<String> = Severity::ALL
        .iter()
        .map(|s| format!("{s}: {}", report.count_by_severity(*s)))
        .collect();
    writeln!(writer, "  By severity:            {}", tallies.join("  "))?;
    writeln!(writer)?;

    if !report.missing_critical.is_empty() {
        write_section(writer, "MISSING CRITICAL FILES")?;
        for missing in &report.missing_critical {
            writeln!(writer, "{}: critical file not found", missing.display())?;
        }
        writeln!(writer)?;
    }

    if !report.files.is_empty() {
        write_section(writer, "VIOLATIONS")?;
        for file in &report.files {
            writeln!(
                writer,
                "[{}] {} ({} violation(s))",
                file.severity,
                file.file.display(),
                file.violations.len()
            )?;
            for violation in &file.violations {
                writeln!(
                    writer,
                    "    line {}: {} ({})",
                    violation.line, violation.kind, violation.rule
                )?;
                writeln!(writer, "      > {}", violation.content)?;
                writeln!(writer, "      fix: {}", violation.suggestion)?;
            }
            writeln!(writer)?;
        }
    }

    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    if report.ok {
        writeln!(writer, "\u{2713} {DESIGN_PASSED}")?;
    } else {
        writeln!(writer, "\u{2717} {DESIGN_FAILED}")?;
        let blocking =
            report.count_by_severity(Severity::Critical) + report.count_by_severity(Severity::High);
        if blocking > 0 {
            writeln!(
                writer,
                "  {blocking} file(s) with CRITICAL or HIGH violations must be fixed"
            )?;
        }
        if !report.missing_critical.is_empty() {
            writeln!(
                writer,
                "  {} critical file(s) missing",
                report.missing_critical.len()
            )?;
        }
    }
    writeln!(writer, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    use crate::design::validate_source;

    fn render_design(report: &DesignReport) -> String {
        let mut buf = Vec::new();
        write_design_human(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_design_human_passed() {
        let report = DesignReport::new(4, vec![], vec![]);
        let output = render_design(&report);
        assert!(output.contains("Files scanned:          4"), "{output}");
        assert!(output.contains(DESIGN_PASSED));
        assert!(!output.contains("VIOLATIONS\n"));
    }

    #[test]
    fn test_design_human_lists_violations() {
        let file = validate_source("<div className=\"py-5\" />\n", Path::new("components/a.tsx"));
        let report = DesignReport::new(1, vec![file], vec![PathBuf::from("app/layout.tsx")]);
        let output = render_design(&report);

        assert!(output.contains("[CRITICAL] components/a.tsx (1 violation(s))"), "{output}");
        assert!(output.contains("line 1: SPACING_VIOLATION (spacing-off-grid)"));
        assert!(output.contains("app/layout.tsx: critical file not found"));
        assert!(output.contains(DESIGN_FAILED));
    }

    #[test]
    fn test_content_human_sections() {
        let mut report = ContentReport::default();
        report.warnings.push(Finding::at_line(Path::new("a.tsx"), 3, "odd date"));
        let mut buf = Vec::new();
        write_content_human(&report, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("WARNINGS"));
        assert!(output.contains("a.tsx:3: odd date"));
        assert!(!output.contains("ERRORS\n"));
        assert!(output.contains(CONTENT_PASSED));
    }

    #[test]
    fn test_json_contract() {
        let report = DesignReport::new(2, vec![], vec![]);
        let mut buf = Vec::new();
        write_json(&report, &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["scanned_files"], 2);
        assert_eq!(json["ok"], true);
        assert!(json["files"].as_array().unwrap().is_empty());
    }
}
