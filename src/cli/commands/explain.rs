//! `explain` command: print the diagnostic for a failure code

use crate::cli::args::{ExplainArgs, OutputFormat};
use crate::reporter::{Diagnostic, ErrorReporter};
use anyhow::{Context, Result};
use colored::*;
use std::io;
use std::process::ExitCode;

pub fn run(args: &ExplainArgs) -> Result<ExitCode> {
    let diagnostic = Diagnostic::from_code(args.code, args.file.as_deref());

    match args.output_format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&diagnostic).context("Failed to serialize diagnostic")?;
            println!("{}", json);
        }
        OutputFormat::Human if diagnostic.is_none() => {
            println!("{}", format!("Code {} has no diagnostic", args.code).dimmed());
        }
        OutputFormat::Human => {
            ErrorReporter::new(io::stdout().lock())
                .report(args.code, args.file.as_deref())
                .context("Failed to write diagnostic")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
