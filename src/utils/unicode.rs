use unicode_width::UnicodeWidthChar;

/// Truncate `s` to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut. Never splits a character.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}

pub fn display_width(s: &str) -> usize {
    s.chars().map(|ch| ch.width().unwrap_or(0)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_pass_through() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncation_appends_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn test_zero_width_budget() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_wide_characters() {
        // Each CJK character is two columns wide.
        assert_eq!(display_width("你好"), 4);
        assert_eq!(truncate_to_width("你好世界", 5), "你好…");
    }

    #[test]
    fn test_never_splits_a_character() {
        let truncated = truncate_to_width("ab你cd", 3);
        assert!(truncated.is_char_boundary(truncated.len()));
        assert_eq!(truncated, "ab…");
    }
}
