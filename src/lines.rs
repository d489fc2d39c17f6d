/// Characters that end a line: `\n`, `\r` (alone or as `\r\n`), vertical tab,
/// form feed, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Splits on every line break; a trailing break does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(idx) = rest.find(LINE_BREAKS) {
        lines.push(&rest[..idx]);
        let tail = &rest[idx..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crlf_counts_once() {
        assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn lone_carriage_return_and_control_breaks() {
        assert_eq!(
            split_lines("a\rb\x0bc\x0cd\x1ce\u{85}f\u{2028}g\u{2029}h"),
            vec!["a", "b", "c", "d", "e", "f", "g", "h"]
        );
    }

    #[test]
    fn blank_lines_survive() {
        assert_eq!(split_lines("\n\nx"), vec!["", "", "x"]);
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
    }
}
