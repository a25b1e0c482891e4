/// Character used to underline the protocol title.
pub const TITLE_UNDERLINE: char = '*';

/// Build a reST section title: the text, then an underline of equal
/// character count. No trailing newline.
pub fn section_title(title: &str, underline: char) -> String {
    let rule: String = std::iter::repeat(underline)
        .take(title.chars().count())
        .collect();
    format!("{title}\n{rule}")
}

/// Prefix every `\n`-separated line with `indent` spaces.
///
/// Blank lines are indented too, and a trailing newline yields a final
/// indented empty line.
pub fn indent_lines(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    text.split('\n')
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
