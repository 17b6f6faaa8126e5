//! Employment entry extraction from component source text.
//!
//! Entries are scraped line by line: a `year: "..."` literal anchors an
//! entry, and its `role` and `company` are the nearest matching literals in a
//! bounded window starting at that line. Nothing here understands object
//! literals; reformatting a component can pair fields differently.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// `field: <literal>` where the literal is closed by the quote that opened it,
/// so `"McDonald's"` keeps its apostrophe.
fn field_pattern(field: &str) -> Regex {
    let pattern = format!(r#"\b{field}\s*:\s*(?:"([^"]*)"|'([^']*)'|`([^`]*)`)"#);
    match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid `{field}` field regex: {err}"),
    }
}

static YEAR_FIELD: LazyLock<Regex> = LazyLock::new(|| field_pattern("year"));
static ROLE_FIELD: LazyLock<Regex> = LazyLock::new(|| field_pattern("role"));
static COMPANY_FIELD: LazyLock<Regex> = LazyLock::new(|| field_pattern("company"));

/// A `(year, role, company)` triple scraped from one file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmploymentEntry {
    pub file: PathBuf,
    /// Line of the `year` literal (1-indexed).
    pub line: usize,
    pub year: String,
    pub role: String,
    pub company: String,
}

/// A `year` literal and the line it sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearLiteral {
    /// Line number (1-indexed).
    pub line: usize,
    pub value: String,
}

fn first_capture(pattern: &Regex, line: &str) -> Option<String> {
    let caps = pattern.captures(line)?;
    (1..=3)
        .find_map(|group| caps.get(group))
        .map(|m| m.as_str().to_owned())
}

/// Every `year: "<value>"` literal in `content`, first match per line.
#[must_use]
pub fn year_literals(content: &str) -> Vec<YearLiteral> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            first_capture(&YEAR_FIELD, line).map(|value| YearLiteral {
                line: idx + 1,
                value,
            })
        })
        .collect()
}

/// Extract employment entries from `content`.
///
/// For each `year` literal, the window covers the `year` line itself plus the
/// following `lookahead` lines. The first `role` and the first `company`
/// literal in the window are paired with the year. A year without both is
/// dropped.
#[must_use]
pub fn extract_entries(content: &str, file: &Path, lookahead: usize) -> Vec<EmploymentEntry> {
    let lines: Vec<&str> = content.lines().collect();
    let mut entries = Vec::new();

    for literal in year_literals(content) {
        let start = literal.line - 1;
        let end = lines
            .len()
            .min(start.saturating_add(lookahead).saturating_add(1));
        let window = &lines[start..end];

        let role = window.iter().find_map(|l| first_capture(&ROLE_FIELD, l));
        let company = window.iter().find_map(|l| first_capture(&COMPANY_FIELD, l));

        if let (Some(role), Some(company)) = (role, company) {
            entries.push(EmploymentEntry {
                file: file.to_owned(),
                line: literal.line,
                year: literal.value,
                role,
                company,
            });
        } else {
            tracing::debug!(
                file = %file.display(),
                line = literal.line,
                "year literal without role/company in window"
            );
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMELINE: &str = concat!(
        "const jobs = [\n",
        "  {\n",
        "    year: \"2023\u{2014}Present\",\n",
        "    role: \"Business Partner\",\n",
        "    company: \"Globant\",\n",
        "    description: \"Partnering with delivery teams\",\n",
        "  },\n",
        "  {\n",
        "    year: '2019',\n",
        "    role: 'Engineer',\n",
        "    company: 'Acme',\n",
        "  },\n",
        "];\n",
    );

    #[test]
    fn test_year_literals_accept_both_quote_styles() {
        let years = year_literals(TIMELINE);
        let values: Vec<&str> = years.iter().map(|y| y.value.as_str()).collect();
        assert_eq!(values, vec!["2023\u{2014}Present", "2019"]);
        assert_eq!(years[0].line, 3);
        assert_eq!(years[1].line, 9);
    }

    #[test]
    fn test_extract_pairs_nearest_fields() {
        let entries = extract_entries(TIMELINE, Path::new("timeline.tsx"), 10);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].role, "Business Partner");
        assert_eq!(entries[0].company, "Globant");
        assert_eq!(entries[0].line, 3);
        assert_eq!(entries[1].role, "Engineer");
        assert_eq!(entries[1].company, "Acme");
    }

    #[test]
    fn test_extract_single_line_object() {
        let content = r#"{ year: "2021", role: "Designer", company: "Studio" }"#;
        let entries = extract_entries(content, Path::new("a.tsx"), 10);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].year, "2021");
        assert_eq!(entries[0].company, "Studio");
    }

    #[test]
    fn test_extract_window_is_bounded() {
        let mut content = String::from("year: \"2020\",\n");
        for _ in 0..10 {
            content.push_str("filler: true,\n");
        }
        content.push_str("role: \"Late\",\ncompany: \"Far\",\n");

        assert!(extract_entries(&content, Path::new("a.tsx"), 10).is_empty());
        assert_eq!(extract_entries(&content, Path::new("a.tsx"), 12).len(), 1);
    }

    #[test]
    fn test_extract_role_at_window_edge_is_found() {
        let mut content = String::from("year: \"2020\",\n");
        for _ in 0..8 {
            content.push_str("filler: true,\n");
        }
        content.push_str("role: \"Edge\",\ncompany: \"Line\",\n");

        let entries = extract_entries(&content, Path::new("a.tsx"), 10);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Line");
    }

    #[test]
    fn test_apostrophe_inside_double_quotes_is_kept() {
        let content = concat!(
            "year: \"2019\",\n",
            "role: \"Director\",\n",
            "company: \"McDonald's Digital\",\n",
            "year: `2021`,\n",
            "role: 'Lead',\n",
            "company: `Say \"Hi\" Labs`,\n",
        );
        let entries = extract_entries(content, Path::new("a.tsx"), 2);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].company, "McDonald's Digital");
        assert_eq!(entries[1].year, "2021");
        assert_eq!(entries[1].role, "Lead");
        assert_eq!(entries[1].company, "Say \"Hi\" Labs");
    }

    #[test]
    fn test_unbounded_lookahead_clamps_to_file_end() {
        let entries = extract_entries(TIMELINE, Path::new("timeline.tsx"), usize::MAX);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].company, "Acme");
    }

    #[test]
    fn test_field_names_need_word_boundary() {
        let content = "fiscalyear: \"2020\",\nrole: \"R\",\ncompany: \"C\",\n";
        assert!(year_literals(content).is_empty());
    }
}
