//! Implementation of the `istring format` command.

use super::shared::ValueArgs;

/// Arguments for the format command.
#[derive(Debug, clap::Args)]
pub struct FormatArgs {
    /// Template with {key} placeholders
    pub template: String,

    #[command(flatten)]
    pub values: ValueArgs,
}

/// Run the format command.
pub fn run_format(args: FormatArgs) -> miette::Result<i32> {
    let values = args.values.load()?;
    println!("{}", istring::format(&args.template, &values));
    Ok(exitcode::OK)
}
