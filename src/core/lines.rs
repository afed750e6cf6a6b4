//! Purpose: Split decoded file text into terminator-preserving lines.
//! Exports: `split_lines`.
//! Role: Pure helper behind `api::read_lines`; no I/O.
//! Invariants: Every line but possibly the last ends with exactly one `\n`.
//! Invariants: `\r\n` and lone `\r` terminators are normalised to `\n`.
//! Invariants: Concatenating the output yields the input with newlines normalised.

pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            '\n' => {
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
