use anyhow::Result;
use clap::Parser;

use crate::commands::{CheckArgs, handle_check};
pub mod commands;

pub use commands::CheckFailed;

#[derive(Parser, Debug)]
#[command(
    name = "bumpgate",
    author,
    version,
    about = "A merge gate that fails the build when the project version was not bumped",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(flatten)]
    check: CheckArgs,
}

/// # Errors
/// Returns error if the check cannot run or recorded any failure.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    handle_check(&cli.check).await
}
