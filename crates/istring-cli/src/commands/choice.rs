//! Implementation of the `istring choice` command.

use clap::ArgGroup;
use istring::{Message, Reference};
use serde::Serialize;
use tracing::debug;

use super::shared::{MatchArgs, ValueArgs};

/// Arguments for the choice command.
#[derive(Debug, clap::Args)]
#[command(group(
    ArgGroup::new("reference")
        .required(true)
        .args(["boolean", "text", "number", "count"])
))]
pub struct ChoiceArgs {
    /// Choice template, e.g. "0#none|1#one|#{n} many"
    pub template: String,

    /// Resolve against a boolean
    #[arg(long = "bool")]
    pub boolean: Option<bool>,

    /// Resolve against a string using pattern selectors
    #[arg(long)]
    pub text: Option<String>,

    /// Resolve against a floating-point number
    #[arg(long, allow_negative_numbers = true)]
    pub number: Option<f64>,

    /// Resolve against an integer count
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    #[command(flatten)]
    pub values: ValueArgs,

    #[command(flatten)]
    pub matching: MatchArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for choice results.
#[derive(Serialize)]
pub struct ChoiceResult {
    pub reference: String,
    pub result: String,
}

/// Run the choice command.
pub fn run_choice(args: ChoiceArgs) -> miette::Result<i32> {
    let values = args.values.load()?;
    let message = Message::with_options(args.template.as_str(), args.matching.options());

    let reference = match (args.boolean, args.text, args.number, args.count) {
        (Some(b), _, _, _) => Reference::Boolean(b),
        (_, Some(s), _, _) => Reference::Text(s),
        (_, _, Some(n), _) => Reference::Number(n),
        (_, _, _, Some(count)) => istring::count_reference(count),
        (None, None, None, None) => return Err(miette::miette!("No reference value given")),
    };
    let shown = reference.to_string();
    debug!(reference = %shown, choices = message.choices().len(), "resolving choice");
    let result = message.format_choice(reference, &values);

    if args.json {
        let output = ChoiceResult {
            reference: shown,
            result,
        };
        let text = serde_json::to_string_pretty(&output)
            .map_err(|e| miette::miette!("Cannot serialize result: {}", e))?;
        println!("{}", text);
    } else {
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
