//! Main workflow orchestration logic
//!
//! Validates the invocation, reads the history, builds the changelog and
//! writes the report. Kept apart from `main.rs` so the workflow can be
//! called programmatically without depending on clap.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::changelog::build_changelog;
use crate::config::Config;
use crate::error::{ChangelogError, Result};
use crate::git::{collect_history, CommitSource, Git2Repository, History};
use crate::output::{resolve_output_path, write_report, Destination};
use crate::render::{OutputFormat, RenderOptions};
use crate::warnings::ChangelogWarning;

/// Format flags as given on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatFlags {
    pub txt: bool,
    pub md: bool,
    pub html: bool,
    pub rtf: bool,
}

/// Pick one format from the requested flags.
///
/// When several are set the first of html, rtf, md, txt wins and the rest
/// are reported in a [ChangelogWarning::MultipleFormats].
///
/// # Errors
/// * [ChangelogError::MissingFormat] - If no flag is set
pub fn select_format(flags: FormatFlags) -> Result<(OutputFormat, Option<ChangelogWarning>)> {
    let requested: Vec<OutputFormat> = [
        (flags.html, OutputFormat::Html),
        (flags.rtf, OutputFormat::Rtf),
        (flags.md, OutputFormat::Md),
        (flags.txt, OutputFormat::Txt),
    ]
    .into_iter()
    .filter_map(|(set, format)| set.then_some(format))
    .collect();

    let (chosen, ignored) = requested
        .split_first()
        .ok_or(ChangelogError::MissingFormat)?;

    let warning = (!ignored.is_empty()).then(|| ChangelogWarning::MultipleFormats {
        chosen: chosen.token().to_string(),
        ignored: ignored.iter().map(|f| f.token().to_string()).collect(),
    });

    Ok((*chosen, warning))
}

/// Arguments for the generate workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    /// Path inside the repository to read
    pub repo: PathBuf,

    /// Branch to read; the primary branch when `None`
    pub branch: Option<String>,

    pub format: OutputFormat,

    /// Omit the attribution footer
    pub suppress_credit: bool,

    /// Output file; stdout when `None`
    pub output: Option<PathBuf>,

    /// Page stdout output on a terminal
    pub page: bool,
}

impl GenerateArgs {
    pub fn new(format: OutputFormat) -> Self {
        GenerateArgs {
            repo: PathBuf::from("."),
            branch: None,
            format,
            suppress_credit: false,
            output: None,
            page: false,
        }
    }
}

/// Result of a successful generate workflow
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateSummary {
    /// The branch that was read
    pub branch: String,

    pub buckets: usize,

    pub commits: usize,

    /// Final output path, with any inferred extension
    pub output: Option<PathBuf>,

    /// Non-fatal conditions met while building
    pub warnings: Vec<ChangelogWarning>,
}

/// Main generate workflow against the git repository at `args.repo`.
///
/// Orchestrates the whole run:
/// 1. Validate the output file name (before touching the repository)
/// 2. Read the branch history; the repository is released afterwards
/// 3. Build the changelog
/// 4. Render it to the destination
pub fn run_generate(args: &GenerateArgs, config: &Config) -> Result<GenerateSummary> {
    let destination = resolve_destination(args)?;

    let history = {
        let repo = Git2Repository::open(&args.repo)?;
        collect_history(&repo, args.branch.as_deref())?
    };

    write_history(history, args, config, destination)
}

/// Generate workflow against any [CommitSource]
pub fn run_with_source<S: CommitSource + ?Sized>(
    source: &S,
    args: &GenerateArgs,
    config: &Config,
) -> Result<GenerateSummary> {
    let destination = resolve_destination(args)?;
    let history = collect_history(source, args.branch.as_deref())?;
    write_history(history, args, config, destination)
}

fn resolve_destination(args: &GenerateArgs) -> Result<Destination> {
    match &args.output {
        Some(requested) => {
            let path = resolve_output_path(requested, args.format)?;
            if &path != requested {
                info!("Outfile: {}", path.display());
            }
            Ok(Destination::File(path))
        }
        None => Ok(Destination::Stdout { page: args.page }),
    }
}

fn write_history(
    history: History,
    args: &GenerateArgs,
    config: &Config,
    destination: Destination,
) -> Result<GenerateSummary> {
    let outcome = build_changelog(&history.branch, &history.commits, &history.tags);
    let changelog = outcome.changelog;
    debug!(
        "Built {} buckets from {} commits",
        changelog.buckets().len(),
        changelog.message_count()
    );

    let options = RenderOptions::from_config(config, changelog.branch(), args.suppress_credit);
    write_report(args.format, &changelog, &options, &destination)?;

    let output = match destination {
        Destination::File(path) => Some(path),
        Destination::Stdout { .. } => None,
    };

    Ok(GenerateSummary {
        branch: history.branch,
        buckets: changelog.buckets().len(),
        commits: changelog.message_count(),
        output,
        warnings: outcome.warnings,
    })
}
