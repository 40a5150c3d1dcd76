//! Sanitizing service-provided text before it reaches a terminal or report
//!
//! Case titles, numbers and links come from the case locator verbatim. The
//! report is line-oriented (one field per line), so a field must never carry
//! its own line breaks, and nothing printed to stdout may carry escape
//! sequences.

/// Flattens a field onto one line and drops terminal control sequences
///
/// ANSI CSI sequences (`ESC [ ... letter`) are removed. Each line break
/// (`\r\n`, `\n` or `\r`) and each tab becomes one space; any other control
/// character is dropped. Everything else, including spacing, is kept as sent.
pub fn sanitize_field(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' => {
                if chars.peek() == Some(&'[') {
                    chars.next();
                    for next_ch in chars.by_ref() {
                        if next_ch.is_ascii_alphabetic() {
                            break;
                        }
                    }
                }
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push(' ');
            }
            '\n' | '\t' => result.push(' '),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}
