//! Python literal rendering for the generated `pelicanconf.py`.
//!
//! Output matches what Python's `repr()` prints for `str`, `bool` and
//! `int`, so the rendered file can be executed as-is.

use crate::domain::settings::SettingValue;

/// Render a value as Python source text.
pub fn python_literal(value: &SettingValue) -> String {
    match value {
        SettingValue::Text(s) => python_str(s),
        SettingValue::Bool(true) => "True".to_owned(),
        SettingValue::Bool(false) | SettingValue::Disabled => "False".to_owned(),
        SettingValue::Int(n) => n.to_string(),
    }
}

/// Quote a string the way `repr(str)` does.
///
/// Single quotes are preferred; double quotes are used only when the text
/// contains a single quote and no double quote.
pub fn python_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                out.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_string_uses_single_quotes() {
        assert_eq!(python_str("Meu Blog"), "'Meu Blog'");
    }

    #[test]
    fn single_quote_switches_to_double_quotes() {
        assert_eq!(python_str("Ana's blog"), "\"Ana's blog\"");
    }

    #[test]
    fn both_quotes_escape_the_single_one() {
        assert_eq!(python_str(r#"it's "x""#), r#"'it\'s "x"'"#);
    }

    #[test]
    fn backslashes_and_controls_are_escaped() {
        assert_eq!(python_str("a\\b\nc\u{1}"), "'a\\\\b\\nc\\x01'");
    }

    #[test]
    fn non_ascii_is_kept() {
        assert_eq!(python_str("São Paulo"), "'São Paulo'");
    }

    #[test]
    fn scalars() {
        assert_eq!(python_literal(&SettingValue::Bool(true)), "True");
        assert_eq!(python_literal(&SettingValue::Bool(false)), "False");
        assert_eq!(python_literal(&SettingValue::Disabled), "False");
        assert_eq!(python_literal(&SettingValue::Int(10)), "10");
        assert_eq!(python_literal(&SettingValue::Text(String::new())), "''");
    }
}
