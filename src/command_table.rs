//! Extraction of trailing `[N]: {json}` option-reference lines from raw
//! input, before grid construction (spec.md §3 "Command table", §6 Input).

use std::collections::HashMap;

use regex::Regex;
use std::sync::LazyLock;

/// Matches a whole line of the form `[N]` optional `:` whitespace `{...}`.
/// The JSON body may not itself contain `{` or `}`, matching the spec's
/// ungreedy-brace regex.
static COMMAND_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\d+)\]:?\s+(\{[^{}]+\})$").expect("static regex is valid"));

/// Decimal-key -> parsed JSON option blob.
pub type CommandTable = HashMap<String, serde_json::Value>;

/// Strips every matching trailing line from `input` and parses its JSON
/// body into the command table. A line whose JSON body fails to parse is
/// still stripped (it's not part of the diagram) but contributes no entry,
/// matching spec.md §7 ("malformed option references ... left in the grid
/// as text" — here the malformed line itself is dropped before reaching the
/// grid, since it can never have been a legitimate diagram line).
pub fn extract(input: &str) -> (String, CommandTable) {
    let mut table = CommandTable::new();
    let mut remaining = Vec::new();

    for line in input.lines() {
        if let Some(caps) = COMMAND_LINE.captures(line) {
            let key = caps[1].to_string();
            let json_text = &caps[2];
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(json_text) {
                table.insert(key, value);
            }
            continue;
        }
        remaining.push(line);
    }

    (remaining.join("\n"), table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_command_table_and_strips_lines() {
        let input = "+---+\n|   |\n+---+\n[1]: {\"fill\": \"#f00\"}\n";
        let (text, table) = extract(input);
        assert_eq!(text, "+---+\n|   |\n+---+");
        assert_eq!(table.get("1").unwrap()["fill"], "#f00");
    }

    #[test]
    fn malformed_json_drops_line_without_entry() {
        let input = "+---+\n[2]: {not json}\n";
        let (text, table) = extract(input);
        assert_eq!(text, "+---+");
        assert!(table.is_empty());
    }

    #[test]
    fn non_matching_lines_pass_through() {
        let input = "+---+\n|[1]|\n+---+";
        let (text, table) = extract(input);
        assert_eq!(text, input);
        assert!(table.is_empty());
    }
}
