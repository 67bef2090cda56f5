use unicode_width::UnicodeWidthStr;

const ELLIPSIS: char = '…';

/// Cut `s` down to at most `width` display columns, marking the cut with an ellipsis
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.width() <= width {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut used = 0;
    for c in s.chars() {
        let char_width = UnicodeWidthStr::width(c.encode_utf8(&mut [0; 4]));
        // leave one column for the ellipsis
        if used + char_width > width - 1 {
            break;
        }
        used += char_width;
        result.push(c);
    }
    result.push(ELLIPSIS);
    result
}

/// Parse a `#rrggbb` colour into its components
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("hello, world!", 13, "hello, world!")]
    #[case("hello, world!", 20, "hello, world!")]
    #[case("hello, world!", 6, "hello…")]
    #[case("hello, world!", 1, "…")]
    #[case("hello, world!", 0, "")]
    fn test_truncate_to_width_ascii(
        #[case] input: &str,
        #[case] width: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(truncate_to_width(input, width), expected);
    }

    #[test]
    fn test_truncate_to_width_double_width() {
        // each character occupies two columns
        assert_eq!(truncate_to_width("こんにちは", 10), "こんにちは");
        assert_eq!(truncate_to_width("こんにちは", 6), "こん…");
        assert_eq!(truncate_to_width("こんにちは", 5), "こん…");
    }

    #[rstest]
    #[case("#000000", Some((0, 0, 0)))]
    #[case("#ffffff", Some((255, 255, 255)))]
    #[case("#1a2B3c", Some((0x1a, 0x2b, 0x3c)))]
    #[case("ffffff", None)]
    #[case("#fff", None)]
    #[case("#gggggg", None)]
    #[case("#ééé", None)]
    fn test_parse_hex_color(#[case] input: &str, #[case] expected: Option<(u8, u8, u8)>) {
        assert_eq!(parse_hex_color(input), expected);
    }
}
