//! Line-oriented VDF (Valve Data Format) key/value reader
//!
//! `libraryfolders.vdf` and `appmanifest_*.acf` put one `"key"  "value"`
//! pair per line. This reads those pairs without caring about the nesting,
//! so callers only ever match on keys and never on quote positions.

use std::iter::Peekable;
use std::str::Chars;

/// One `"key" "value"` pair from a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Parse a single line of the form `"key" <whitespace> "value"`.
///
/// Surrounding whitespace is ignored, as is anything after the value.
/// Section headers (`"AppState"`), braces and unterminated strings return
/// `None`.
pub fn parse_line(line: &str) -> Option<KeyValue> {
    let mut chars = line.trim().chars().peekable();

    let key = parse_quoted_string(&mut chars)?;
    skip_whitespace(&mut chars);
    let value = parse_quoted_string(&mut chars)?;

    Some(KeyValue { key, value })
}

/// Iterate the key/value pairs of a whole document, skipping other lines
pub fn pairs(content: &str) -> impl Iterator<Item = KeyValue> + '_ {
    content.lines().filter_map(parse_line)
}

/// Parse a quoted string "..."
fn parse_quoted_string(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    // Expect opening quote
    if chars.next() != Some('"') {
        return None;
    }

    let mut result = String::new();

    loop {
        match chars.next() {
            None => return None, // Unterminated string
            Some('"') => break,
            Some('\\') => match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some(c) => {
                    result.push('\\');
                    result.push(c);
                }
                None => return None,
            },
            Some(c) => result.push(c),
        }
    }

    Some(result)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_separated_pair() {
        let kv = parse_line("\t\t\"path\"\t\t\"/mnt/games/SteamLibrary\"").unwrap();
        assert_eq!(kv.key, "path");
        assert_eq!(kv.value, "/mnt/games/SteamLibrary");
    }

    #[test]
    fn test_parse_without_separator_and_trailing_text() {
        let kv = parse_line(r#""name""Portal 2" // comment"#).unwrap();
        assert_eq!(kv.key, "name");
        assert_eq!(kv.value, "Portal 2");
    }

    #[test]
    fn test_escapes_are_decoded() {
        let kv = parse_line(r#""path"  "D:\\Games\\Steam \"Lib\"""#).unwrap();
        assert_eq!(kv.value, r#"D:\Games\Steam "Lib""#);

        let kv = parse_line(r#""name" "odd\q""#).unwrap();
        assert_eq!(kv.value, r"odd\q");
    }

    #[test]
    fn test_non_pair_lines_are_rejected() {
        assert_eq!(parse_line("\"AppState\""), None);
        assert_eq!(parse_line("{"), None);
        assert_eq!(parse_line("}"), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("\"path\""), None);
        assert_eq!(parse_line("\"path\" \"unterminated"), None);
        assert_eq!(parse_line("path /mnt/games"), None);
    }

    #[test]
    fn test_empty_value_is_kept() {
        let kv = parse_line("\"label\"\t\t\"\"").unwrap();
        assert_eq!(kv.key, "label");
        assert_eq!(kv.value, "");
    }

    #[test]
    fn test_pairs_skips_structure() {
        let content = r#"
"libraryfolders"
{
    "0"
    {
        "path"      "/home/user/.local/share/Steam"
        "label"     ""
    }
}
"#;
        let keys: Vec<String> = pairs(content).map(|kv| kv.key).collect();
        assert_eq!(keys, vec!["path", "label"]);
    }
}
