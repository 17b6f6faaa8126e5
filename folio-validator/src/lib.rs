//! # folio-validator
//!
//! Build-time checks for the portfolio site's UI sources.
//!
//! - **Content consistency** ([`validate_content`]): employment history is
//!   written as literal `year` / `role` / `company` fields in several
//!   components; the same company and role must carry the same years
//!   everywhere, and dates must use an accepted format.
//! - **Design-token compliance** ([`validate_project`]): every `.ts`/`.tsx`
//!   file under the scan roots is checked line by line for off-grid spacing,
//!   ad hoc colors, custom typography, legacy design-system references, and
//!   custom shadows or radii.
//!
//! Sources are scanned as text; nothing is parsed as TypeScript.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use folio_validator::{DesignConfig, validate_project};
//!
//! let mut config = DesignConfig::default();
//! config.root = PathBuf::from("site");
//!
//! let report = validate_project(&config).unwrap();
//! println!("Files scanned: {}", report.scanned_files);
//! println!("Violations: {}", report.violations_count());
//! println!("OK: {}", report.ok);
//! ```

mod config;
pub mod content;
pub mod design;
mod error;
pub mod output;
mod report;
pub mod strategy;

pub use config::{
    ContentConfig, DEFAULT_CONTENT_FILES, DEFAULT_CRITICAL_FILES, DEFAULT_LOOKAHEAD,
    DEFAULT_MAX_FILE_SIZE, DEFAULT_SCAN_DIRS, DesignConfig,
};
pub use content::extract::EmploymentEntry;
pub use content::validate_content;
pub use design::{validate_file, validate_project, validate_source};
pub use error::{ScanError, ScanErrorKind};
pub use report::{
    ContentReport, DesignReport, FileReport, Finding, Severity, Violation, ViolationKind,
};
