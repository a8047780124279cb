//! Implementation of the `istring check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use istring::{lint_choices, ChoiceWarning};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use super::shared::MatchArgs;
use crate::output::diagnostic::TemplateDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files with one template per line
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub matching: MatchArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a warning found in a file.
#[derive(Serialize)]
pub struct FileWarning {
    pub file: String,
    pub line: usize,
    #[serde(flatten)]
    pub warning: ChoiceWarning,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let options = args.matching.options();
    let mut found: Vec<FileWarning> = Vec::new();

    for path in &args.files {
        debug!(file = %path.display(), "checking templates");
        let content = match read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Cannot read {}: {}", path.display(), e);
                return Ok(exitcode::NOINPUT);
            }
        };
        for (line_index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            for warning in lint_choices(line, &options) {
                if !args.json {
                    report(path, &content, line_index, &warning);
                }
                found.push(FileWarning {
                    file: path.display().to_string(),
                    line: line_index + 1,
                    warning,
                });
            }
        }
    }

    if args.json {
        let text = serde_json::to_string_pretty(&found)
            .map_err(|e| miette::miette!("Cannot serialize warnings: {}", e))?;
        println!("{}", text);
    } else if found.is_empty() {
        println!("{}", "No warnings found".if_supports_color(Stream::Stdout, |t| t.green()));
    } else {
        println!(
            "{}",
            format!("{} warning(s)", found.len())
                .if_supports_color(Stream::Stdout, |t| t.yellow())
        );
    }

    Ok(if found.is_empty() { exitcode::OK } else { 1 })
}

fn report(path: &Path, content: &str, line_index: usize, warning: &ChoiceWarning) {
    let diagnostic = TemplateDiagnostic::for_line(path, content, line_index, warning);
    eprintln!("{:?}", miette::Report::new(diagnostic));
}
