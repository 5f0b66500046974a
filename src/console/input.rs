//! Parsing of single-character answers.

/// Parses a cell answer: exactly one character `1`-`9`.
///
/// Returns the 0-based cell index.
pub fn parse_cell(answer: &str) -> Option<usize> {
    let mut chars = answer.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ '1'..='9'), None) => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

/// Parses a yes/no answer: exactly one character, `Y` or `N` in any case.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer {
        "Y" | "y" => Some(true),
        "N" | "n" => Some(false),
        _ => None,
    }
}

/// Strips the line terminator left by `read_line`.
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
