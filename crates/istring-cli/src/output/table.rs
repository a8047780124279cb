//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use istring::ParsedChoices;

/// Format parsed choices as a table, marking the entry that supplies the
/// default text.
pub fn format_choices_table(parsed: &ParsedChoices) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Selector", "Text", "Default"]);

    for (index, (selector, text)) in parsed.iter().enumerate() {
        let is_default = parsed.default_index() == Some(index);
        table.add_row(vec![
            index.to_string(),
            selector.to_string(),
            text.to_string(),
            if is_default { "yes" } else { "" }.to_string(),
        ]);
    }

    table
}
