//! CLI argument parsing and subcommand dispatch.

use std::io::{IsTerminal, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use folio_validator::output::{write_content_human, write_design_human, write_json};
use folio_validator::{
    ContentConfig, DEFAULT_LOOKAHEAD, DesignConfig, validate_content, validate_project,
};

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Build-time content and design-token checks for the portfolio site",
    long_about = "Scan the site's UI sources as plain text and fail the build on \
                  inconsistent employment history or design-token violations.\n\n\
                  Exit codes: 0 = passed, 1 = validation failed or the scan could not run.",
    after_help = "Examples:\n  folio content\n  folio design --root ../site\n  folio design --dir components --critical app/layout.tsx\n  folio content --file experience.tsx --format json"
)]
pub struct Cli {
    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Project root that all other paths are resolved against.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Report format written to stdout.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that employment history agrees across components
    #[command(
        long_about = "Extract year/role/company literals from the listed components, \
                      fail on a role whose years differ between files or on missing \
                      files/fields, and warn on open-ended or malformed dates."
    )]
    Content(ContentArgs),
    /// Check UI sources against the design-token policy
    #[command(
        long_about = "Walk the scan roots for .ts/.tsx files and flag off-grid spacing, \
                      ad hoc colors, custom typography, legacy design-system references \
                      and custom shadows. CRITICAL/HIGH files and missing critical files \
                      fail the run."
    )]
    Design(DesignArgs),
}

#[derive(Args, Debug)]
pub struct ContentArgs {
    /// Directory holding the component files, relative to --root.
    #[arg(long, default_value = "components")]
    pub components_dir: PathBuf,

    /// Component file to scan, relative to --components-dir. Repeatable; replaces the default list.
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Lines searched after a year literal for its role and company.
    #[arg(long, default_value_t = DEFAULT_LOOKAHEAD)]
    pub lookahead: usize,
}

#[derive(Args, Debug)]
pub struct DesignArgs {
    /// Directory to scan, relative to --root. Repeatable; replaces the default roots.
    #[arg(long = "dir", value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// File that must exist, relative to --root. Repeatable; replaces the default list.
    #[arg(long = "critical", value_name = "PATH")]
    pub critical: Vec<PathBuf>,

    /// Glob pattern of files to skip. Repeatable.
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,
}

/// Run the selected subcommand. `Ok(false)` means the checks ran and failed.
///
/// # Errors
///
/// Returns an error if the scan itself could not complete or the report
/// could not be written.
pub fn run(cli: &Cli) -> anyhow::Result<bool> {
    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match &cli.command {
        Commands::Content(args) => run_content(cli, args),
        Commands::Design(args) => run_design(cli, args),
    }
}

fn run_content(cli: &Cli, args: &ContentArgs) -> anyhow::Result<bool> {
    let mut config = ContentConfig::default();
    config.root.clone_from(&cli.root);
    config.components_dir.clone_from(&args.components_dir);
    if !args.files.is_empty() {
        config.files.clone_from(&args.files);
    }
    config.lookahead = args.lookahead;

    tracing::info!(
        root = %config.root.display(),
        files = config.files.len(),
        lookahead = config.lookahead,
        "running content checks"
    );
    let report = validate_content(&config)?;
    emit(cli.format, &report, write_content_human)?;
    Ok(report.is_valid())
}

fn run_design(cli: &Cli, args: &DesignArgs) -> anyhow::Result<bool> {
    let mut config = DesignConfig::default();
    config.root.clone_from(&cli.root);
    if !args.dirs.is_empty() {
        config.scan_dirs.clone_from(&args.dirs);
    }
    if !args.critical.is_empty() {
        config.critical_files.clone_from(&args.critical);
    }
    config.exclude.clone_from(&args.exclude);

    tracing::info!(
        root = %config.root.display(),
        roots = config.scan_dirs.len(),
        critical = config.critical_files.len(),
        "running design checks"
    );
    let report = validate_project(&config)?;
    emit(cli.format, &report, write_design_human)?;
    Ok(report.ok)
}

type HumanWriter<T> = fn(&T, &mut dyn Write) -> anyhow::Result<()>;

fn emit<T: Serialize>(format: OutputFormat, report: &T, human: HumanWriter<T>) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    match format {
        OutputFormat::Json => write_json(report, &mut out),
        OutputFormat::Human => {
            let mut buf = Vec::new();
            human(report, &mut buf)?;
            for line in String::from_utf8(buf)?.lines() {
                writeln!(out, "{}", colorize(line))?;
            }
            Ok(())
        }
    }
}

fn colorize(line: &str) -> String {
    if line.starts_with('\u{2713}') {
        line.green().bold().to_string()
    } else if line.starts_with('\u{2717}') {
        line.red().bold().to_string()
    } else if line.starts_with("[CRITICAL]") || line.starts_with("[HIGH]") {
        line.red().to_string()
    } else if line.starts_with("[MEDIUM]") || line.starts_with("[LOW]") {
        line.yellow().to_string()
    } else {
        line.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_design_overrides() {
        let cli = Cli::try_parse_from([
            "folio",
            "design",
            "--root",
            "site",
            "--dir",
            "components",
            "--dir",
            "app",
            "--critical",
            "app/layout.tsx",
        ])
        .unwrap();

        assert_eq!(cli.root, PathBuf::from("site"));
        let Commands::Design(args) = cli.command else {
            panic!("expected design subcommand");
        };
        assert_eq!(args.dirs.len(), 2);
        assert_eq!(args.critical, vec![PathBuf::from("app/layout.tsx")]);
    }

    #[test]
    fn test_parse_content_defaults() {
        let cli = Cli::try_parse_from(["folio", "content"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Human);
        assert_eq!(cli.verbose, 0);
        let Commands::Content(args) = cli.command else {
            panic!("expected content subcommand");
        };
        assert!(args.files.is_empty());
        assert_eq!(args.lookahead, DEFAULT_LOOKAHEAD);
        assert_eq!(args.components_dir, PathBuf::from("components"));
    }

    #[test]
    fn test_colorize_leaves_plain_lines_untouched() {
        colored::control::set_override(false);
        assert_eq!(colorize("  Files scanned:  3"), "  Files scanned:  3");
        assert_eq!(colorize("[CRITICAL] a.tsx"), "[CRITICAL] a.tsx");
    }
}
