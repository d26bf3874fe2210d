//! Input line tokenizer.

/// Splits an input line into a lower-cased command and its raw arguments.
///
/// Returns `None` for an empty or whitespace-only line. Arguments keep their
/// original casing; only the command name is normalized.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.map(str::to_string).collect()))
}
