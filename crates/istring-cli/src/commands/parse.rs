//! Implementation of the `istring parse` command.

use istring::{parse_choices, parse_choices_strict};

use crate::output::table::format_choices_table;

/// Arguments for the parse command.
#[derive(Debug, clap::Args)]
pub struct ParseArgs {
    /// Choice template to parse
    pub template: String,

    /// Fail on entries without a '#' separator
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the parse command.
pub fn run_parse(args: ParseArgs) -> miette::Result<i32> {
    let parsed = if args.strict {
        match parse_choices_strict(&args.template) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("Parse error: {}", e);
                return Ok(exitcode::DATAERR);
            }
        }
    } else {
        parse_choices(&args.template)
    };

    if args.json {
        let text = serde_json::to_string_pretty(&parsed)
            .map_err(|e| miette::miette!("Cannot serialize parse result: {}", e))?;
        println!("{}", text);
    } else {
        println!("{}", format_choices_table(&parsed));
    }
    Ok(exitcode::OK)
}
