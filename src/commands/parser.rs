//! Input line parsing.

/// A non-blank input line split into a command word and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    /// Lowercased command word
    pub command: String,
    /// Whitespace-separated arguments, in order
    pub args: Vec<&'a str>,
}

/// Split a line on whitespace. Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();

    Some(ParsedInput {
        command,
        args: words.collect(),
    })
}
