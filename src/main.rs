use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use changelog_gen::cli::{self, FormatFlags, GenerateArgs};
use changelog_gen::{config, ui, ChangelogError};

#[derive(clap::Parser)]
#[command(
    name = "changelog-gen",
    about = "Generate a changelog grouped by release tag from git history",
    disable_version_flag = true
)]
struct Args {
    #[arg(long, visible_alias = "text", help = "Plain text output")]
    txt: bool,

    #[arg(long, help = "Rich Text Format output")]
    rtf: bool,

    #[arg(long, help = "Markdown output")]
    md: bool,

    #[arg(long, help = "HTML output")]
    html: bool,

    #[arg(long, default_value = ".", help = "Path to the git repository")]
    repo: PathBuf,

    #[arg(short, long, help = "Branch to read (defaults to the current branch)")]
    branch: Option<String>,

    #[arg(long, help = "Omit the attribution footer")]
    nocredit: bool,

    #[arg(
        short,
        long,
        help = "Output file; the format extension is added when missing"
    )]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Page output on an interactive terminal")]
    page: bool,

    #[arg(long, help = "Log progress to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.version {
        eprintln!("changelog-gen {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            let usage = e
                .downcast_ref::<ChangelogError>()
                .is_some_and(ChangelogError::is_usage);
            if usage {
                ui::display_usage();
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(args: Args) -> Result<()> {
    let (format, warning) = cli::select_format(FormatFlags {
        txt: args.txt,
        md: args.md,
        html: args.html,
        rtf: args.rtf,
    })?;
    if let Some(warning) = warning {
        ui::display_warning(&warning);
    }

    let config =
        config::load_config(args.config.as_deref()).context("Failed to load configuration")?;

    let generate = GenerateArgs {
        repo: args.repo,
        branch: args.branch,
        format,
        suppress_credit: args.nocredit,
        output: args.output,
        page: args.page,
    };

    let summary = cli::run_generate(&generate, &config)?;
    for warning in &summary.warnings {
        ui::display_warning(warning);
    }

    if let Some(path) = &summary.output {
        ui::display_status(&format!(
            "Wrote {} ({} releases, {} commits on {})",
            path.display(),
            summary.buckets,
            summary.commits,
            summary.branch
        ));
    }

    Ok(())
}
