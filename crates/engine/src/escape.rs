//! Default class-name escaper.
//!
//! Hosts normally inject their own; this one follows the CSS identifier rules
//! closely enough for grid set names (`grid-1/2`, `grid-cards:wide`, ...).

use std::fmt::Write;

/// Escape `class` into a fragment usable after `.` in a selector.
pub fn escape_class_name(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len() * 2);
    let mut chars = class.chars().peekable();
    let mut first = true;

    while let Some(ch) = chars.next() {
        let leading_digit = ch.is_ascii_digit() && first;
        match ch {
            '\0' => escaped.push('\u{FFFD}'),
            c if c.is_control() => push_hex(&mut escaped, c),
            c if leading_digit => push_hex(&mut escaped, c),
            '-' if first && chars.peek().is_some_and(|c| c.is_ascii_digit()) => {
                escaped.push('-');
                if let Some(digit) = chars.next() {
                    push_hex(&mut escaped, digit);
                }
            }
            '-' if first && chars.peek().is_none() => escaped.push_str("\\-"),
            c if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() => {
                escaped.push(c)
            }
            c => {
                escaped.push('\\');
                escaped.push(c);
            }
        }
        first = false;
    }

    escaped
}

fn push_hex(out: &mut String, ch: char) {
    // Trailing space terminates the escape sequence.
    let _ = write!(out, "\\{:x} ", ch as u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(escape_class_name("grid-standard"), "grid-standard");
        assert_eq!(escape_class_name("grid_cards-2"), "grid_cards-2");
    }

    #[test]
    fn metacharacters_are_backslashed() {
        assert_eq!(escape_class_name("grid-1/2"), "grid-1\\/2");
        assert_eq!(escape_class_name("grid-a:b"), "grid-a\\:b");
        assert_eq!(escape_class_name("grid-[x]"), "grid-\\[x\\]");
        assert_eq!(escape_class_name("grid-a.b"), "grid-a\\.b");
        assert_eq!(escape_class_name("grid a"), "grid\\ a");
    }

    #[test]
    fn leading_digit_is_hex_escaped() {
        assert_eq!(escape_class_name("2col"), "\\32 col");
        assert_eq!(escape_class_name("-2col"), "-\\32 col");
        assert_eq!(escape_class_name("-"), "\\-");
    }

    #[test]
    fn control_characters_are_hex_escaped() {
        assert_eq!(escape_class_name("a\tb"), "a\\9 b");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(escape_class_name("grid-größe"), "grid-größe");
    }
}
