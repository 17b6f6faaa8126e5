//! Integration tests for `folio_validator::validate_content`.

use std::fs;
use std::path::{Path, PathBuf};

use folio_validator::output::{CONTENT_FAILED, CONTENT_PASSED, write_content_human};
use folio_validator::{ContentConfig, ContentReport, validate_content};
use tempfile::TempDir;

fn entry(year: &str, role: &str, company: &str) -> String {
    format!(
        "  {{\n    year: \"{year}\",\n    role: \"{role}\",\n    company: \"{company}\",\n    highlights: [],\n  }},\n"
    )
}

fn component(entries: &[String]) -> String {
    format!(
        "export const experience = [\n{}];\n",
        entries.concat()
    )
}

fn write_component(root: &Path, name: &str, content: &str) {
    let dir = root.join("components");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

fn config_for(root: &Path, files: &[&str]) -> ContentConfig {
    let mut config = ContentConfig::default();
    config.root = root.to_path_buf();
    config.files = files.iter().map(PathBuf::from).collect();
    config
}

fn render(report: &ContentReport) -> String {
    let mut buf = Vec::new();
    write_content_human(report, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_consistent_history_passes() {
    let tmp = TempDir::new().unwrap();
    let jobs = component(&[
        entry("2023\u{2014}2024", "Business Partner", "Globant"),
        entry("2019\u{2014}2023", "Engineer", "Acme"),
    ]);
    write_component(tmp.path(), "experience.tsx", &jobs);
    write_component(tmp.path(), "timeline.tsx", &jobs);

    let report = validate_content(&config_for(tmp.path(), &["experience.tsx", "timeline.tsx"])).unwrap();
    assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    assert_eq!(report.files_checked, 2);
    assert_eq!(report.entries_found, 4);
    assert!(report.warnings.is_empty());
    assert!(render(&report).contains(CONTENT_PASSED));
}

#[test]
fn test_year_mismatch_across_files_fails() {
    let tmp = TempDir::new().unwrap();
    write_component(
        tmp.path(),
        "experience.tsx",
        &component(&[entry("2023\u{2014}Present", "Business Partner", "Globant")]),
    );
    write_component(
        tmp.path(),
        "timeline.tsx",
        &component(&[entry("2023\u{2014}2024", "Business Partner", "Globant")]),
    );

    let report = validate_content(&config_for(tmp.path(), &["experience.tsx", "timeline.tsx"])).unwrap();
    assert!(!report.is_valid());
    assert_eq!(report.errors.len(), 1);

    let output = render(&report);
    assert!(output.contains("components/experience.tsx:3"), "{output}");
    assert!(output.contains("components/timeline.tsx:3"), "{output}");
    assert!(output.contains(CONTENT_FAILED));
}

#[test]
fn test_missing_file_and_fields_are_errors() {
    let tmp = TempDir::new().unwrap();
    write_component(tmp.path(), "about.tsx", "export const About = () => <p>year: 2020</p>;\n");

    let report = validate_content(&config_for(tmp.path(), &["about.tsx", "gone.tsx"])).unwrap();
    let errors: Vec<String> = report.errors.iter().map(|e| e.format_human_readable()).collect();
    assert_eq!(
        errors,
        vec![
            "components/about.tsx: Required field `role:` not found",
            "components/about.tsx: Required field `company:` not found",
            "components/gone.tsx: Required file is missing",
        ]
    );
}

#[test]
fn test_bad_date_format_is_only_a_warning() {
    let tmp = TempDir::new().unwrap();
    write_component(
        tmp.path(),
        "experience.tsx",
        &component(&[entry("2021-2022", "Designer", "Studio")]),
    );

    let report = validate_content(&config_for(tmp.path(), &["experience.tsx"])).unwrap();
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].line, 3);
}

#[test]
fn test_default_file_list_is_used() {
    let tmp = TempDir::new().unwrap();
    let mut config = ContentConfig::default();
    config.root = tmp.path().to_path_buf();

    let report = validate_content(&config).unwrap();
    assert_eq!(report.errors.len(), folio_validator::DEFAULT_CONTENT_FILES.len());
    assert!(
        report
            .errors
            .iter()
            .all(|e| e.message == "Required file is missing")
    );
}

#[test]
fn test_reports_are_idempotent() {
    let tmp = TempDir::new().unwrap();
    write_component(
        tmp.path(),
        "experience.tsx",
        &component(&[
            entry("2023\u{2014}Present", "Lead", "Studio"),
            entry("2020", "Lead", "Studio"),
        ]),
    );
    let config = config_for(tmp.path(), &["experience.tsx"]);

    let first = render(&validate_content(&config).unwrap());
    let second = render(&validate_content(&config).unwrap());
    assert_eq!(first, second);
}
