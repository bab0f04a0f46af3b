//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() -> eyre::Result<()> {
    tripweave_cli::run()?;
    Ok(())
}
