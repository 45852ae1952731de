//! generate-module - Scaffold a new oRPC API module in a supastarter monorepo

use anyhow::Result;
use api_scaffolder_core::error::FAILURE_EXIT_CODE;
use api_scaffolder_core::report::Reporter;
use api_scaffolder_core::{scaffold_module, ScaffoldError, ScaffoldRequest};
use clap::Parser;
use std::io::{Stderr, Stdout, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "generate-module")]
#[command(about = "Scaffold a new API module (oRPC)")]
#[command(
    after_help = "Run from the monorepo root. The new router still has to be mounted in packages/api/orpc/router.ts by hand."
)]
#[command(version)]
pub struct Args {
    /// Module name (e.g. feedback, user-settings)
    pub name: String,

    /// Monorepo root to scaffold into
    #[arg(short = 'C', long, default_value = ".")]
    pub root: PathBuf,

    /// Check preconditions and list the files that would be created, without writing anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// List each file written into the module
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for ScaffoldRequest {
    fn from(args: Args) -> Self {
        ScaffoldRequest {
            dry_run: args.dry_run,
            ..ScaffoldRequest::new(args.name, args.root)
        }
    }
}

async fn run(args: Args, reporter: &mut Reporter<Stdout, Stderr>) -> Result<()> {
    let verbose = args.verbose;
    let request = ScaffoldRequest::from(args);
    let outcome = scaffold_module(&request).await?;

    if request.dry_run {
        reporter.dry_run(&outcome.paths.module_dir, outcome.module.paths())?;
    } else {
        if verbose {
            reporter.written(outcome.module.paths())?;
        }
        reporter.success(&outcome.paths.module_dir, &outcome.name, &outcome.layout)?;
    }

    Ok(())
}

/// Print the diagnostic for a failed run and pick the exit code
fn report_failure<O: Write, E: Write>(
    err: &anyhow::Error,
    reporter: &mut Reporter<O, E>,
) -> u8 {
    match err.downcast_ref::<ScaffoldError>() {
        Some(scaffold_err) => {
            let _ = reporter.scaffold_error(scaffold_err);
            scaffold_err.exit_code()
        }
        None => {
            let _ = reporter.error(format!("{:#}", err));
            FAILURE_EXIT_CODE
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    let mut reporter = Reporter::stdio();

    match run(args, &mut reporter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report_failure(&err, &mut reporter)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_positional_name() {
        let args = Args::try_parse_from(["generate-module", "feedback"]).unwrap();
        assert_eq!(args.name, "feedback");
        assert_eq!(args.root, PathBuf::from("."));
        assert!(!args.dry_run);
    }

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "generate-module",
            "--dry-run",
            "-v",
            "-C",
            "/tmp/repo",
            "Feedback Form",
        ])
        .unwrap();
        assert!(args.verbose);
        let request = ScaffoldRequest::from(args);
        assert_eq!(request.raw_name, "Feedback Form");
        assert_eq!(request.root, PathBuf::from("/tmp/repo"));
        assert!(request.dry_run);
        assert!(request.layout.is_none());
    }

    #[test]
    fn test_report_failure_uses_scaffold_exit_code() {
        let err = anyhow::Error::from(ScaffoldError::MissingApiRoot {
            path: PathBuf::from("packages/api"),
        });
        let mut reporter = Reporter::new(Vec::new(), Vec::new());

        let code = report_failure(&err, &mut reporter);

        let (out, stderr) = reporter.into_inner();
        let stderr = String::from_utf8(stderr).unwrap();
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(stderr.lines().count(), 1);
        assert!(stderr.contains("packages/api not found"));
    }

    #[test]
    fn test_name_is_required() {
        assert!(Args::try_parse_from(["generate-module"]).is_err());
    }
}
