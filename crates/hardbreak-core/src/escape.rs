//! Selective escaping of literal text.
//!
//! Only the characters that would be mis-parsed are escaped: brackets
//! (outside link labels), asterisk runs short enough to open emphasis,
//! and backticks. Underscores are deliberately left alone so that
//! underscore emphasis keeps rendering naturally.

/// Escape literal text for safe re-serialization.
///
/// - `[` and `]` are escaped unless the text sits inside a link label
///   (where brackets are already delimited by the link syntax).
/// - Each maximal run of `*` of length 1 or 2 has every asterisk
///   escaped; runs of 3+ are not valid emphasis delimiters and stay
///   literal.
/// - Every backtick is escaped.
///
/// A single forward scan applies each class to the original run
/// boundaries, so no inserted backslash is ever re-escaped.
pub fn escape(text: &str, in_link_label: bool) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '[' | ']' if !in_link_label => {
                out.push('\\');
                out.push(c);
            }
            '*' => {
                let mut run = 1;
                while chars.peek() == Some(&'*') {
                    chars.next();
                    run += 1;
                }
                for _ in 0..run {
                    if run <= 2 {
                        out.push('\\');
                    }
                    out.push('*');
                }
            }
            '`' => {
                out.push('\\');
                out.push('`');
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_outside_link() {
        assert_eq!(escape("a [b] c", false), "a \\[b\\] c");
    }

    #[test]
    fn test_brackets_inside_link_label() {
        assert_eq!(escape("a [b] c", true), "a [b] c");
    }

    #[test]
    fn test_asterisk_runs() {
        assert_eq!(
            escape("*x* **y** ***z***", false),
            "\\*x\\* \\*\\*y\\*\\* ***z***"
        );
    }

    #[test]
    fn test_backticks() {
        assert_eq!(escape("`code`", false), "\\`code\\`");
    }

    #[test]
    fn test_underscores_untouched() {
        assert_eq!(escape("_emphasis_ and snake_case", false), "_emphasis_ and snake_case");
    }

    #[test]
    fn test_asterisks_escaped_inside_link_label() {
        assert_eq!(escape("*x*", true), "\\*x\\*");
        assert_eq!(escape("`c`", true), "\\`c\\`");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape("plain text.", false), "plain text.");
    }

    #[test]
    fn test_empty() {
        assert_eq!(escape("", false), "");
    }
}
