/// Escape special characters in a literal body for pbxproj output.
/// Control chars (except `\n`, which gets `\n`) become `\Uxxxx`; standard
/// escapes cover `\a \b \f \r \t \v \n \" \\`.
pub fn add_quotes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\x07' => result.push_str("\\a"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            '\x0B' => result.push_str("\\v"),
            '\n' => result.push_str("\\n"),
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            c if (c as u32) < 0x20 && c != '\n' => {
                result.push_str(&format!("\\U{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}

/// Wrap `value` in double quotes unless it is safe to write bare.
///
/// Safe charset is `[A-Za-z0-9/._]` — notably narrower than real Xcode's
/// own writer (no `$`, `:`, or `-`). Followed literally here per spec.
pub fn ensure_quotes(value: &str) -> String {
    let escaped = add_quotes(value);
    if is_safe_unquoted(&escaped) {
        escaped
    } else {
        format!("\"{}\"", escaped)
    }
}

/// Check if a string can be written without quotes: `[A-Za-z0-9/._]+`.
pub fn is_safe_unquoted(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    s.bytes()
        .all(|b| matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'/' | b'.' | b'_'))
}

/// Format binary data as a hex data literal, e.g. `<deadbeef>` → `<DEADBEEF>`.
pub fn format_data(data: &[u8]) -> String {
    let hex: String = data.iter().map(|b| format!("{:02X}", b)).collect();
    format!("<{}>", hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_quotes_basic() {
        assert_eq!(add_quotes("hello"), "hello");
        assert_eq!(add_quotes("hello\nworld"), "hello\\nworld");
        assert_eq!(add_quotes("hello\tworld"), "hello\\tworld");
        assert_eq!(add_quotes(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(add_quotes("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn add_quotes_control_chars() {
        assert_eq!(add_quotes("\x00"), "\\U0000");
        assert_eq!(add_quotes("\x1F"), "\\U001f");
    }

    #[test]
    fn ensure_quotes_safe() {
        assert_eq!(ensure_quotes("hello"), "hello");
        assert_eq!(ensure_quotes("path/to/file.swift"), "path/to/file.swift");
        assert_eq!(ensure_quotes("PRODUCT_NAME"), "PRODUCT_NAME");
    }

    #[test]
    fn ensure_quotes_needs_quotes_for_dollar_colon_hyphen_and_space() {
        assert_eq!(ensure_quotes("$inherited"), "\"$inherited\"");
        assert_eq!(ensure_quotes("BUILT_PRODUCTS_DIR:foo"), "\"BUILT_PRODUCTS_DIR:foo\"");
        assert_eq!(ensure_quotes("foo-bar"), "\"foo-bar\"");
        assert_eq!(ensure_quotes("hello world"), "\"hello world\"");
        assert_eq!(ensure_quotes(""), "\"\"");
    }

    #[test]
    fn format_data_roundtrips_hex() {
        assert_eq!(format_data(&[0xAB, 0xCD, 0x12, 0x34]), "<ABCD1234>");
        assert_eq!(format_data(&[]), "<>");
    }
}
