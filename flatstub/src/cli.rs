//! Command-line driver.

use crate::args::Args;
use anyhow::{Context, Result};
use flatstub_codegen::{generate_from_file, generate_to_file};
use std::io::Write;

/// Runs one generation as described by the arguments.
///
/// With `--stdout` the generated source goes to `stdout`; otherwise it is
/// written to the OUTPUT path.
///
/// # Errors
/// Returns an error if generation fails or the output cannot be written.
pub fn run(args: &Args, stdout: &mut impl Write) -> Result<()> {
    let config = args.generator_config();

    if args.stdout {
        let stub = generate_from_file(&args.schema, &config)
            .with_context(|| format!("failed to generate stub from {}", args.schema.display()))?;
        stdout.write_all(stub.code.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let output = args
        .output
        .as_deref()
        .context("an OUTPUT path is required unless --stdout is given")?;
    let report = generate_to_file(&args.schema, output, &config).with_context(|| {
        format!(
            "failed to generate {} from {}",
            output.display(),
            args.schema.display()
        )
    })?;

    if !report.is_clean() {
        tracing::warn!(
            "{} functions in {} have no return statement",
            report.unhandled.len(),
            output.display()
        );
    }
    tracing::info!("Wrote {}", output.display());

    Ok(())
}
