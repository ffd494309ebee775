//! Decoding of list-valued cells
//!
//! Source tables store list columns (`Tags`, `Tags AAT URL`,
//! `Tags Wikidata URL`) as list literals such as `['Vases', "Women"]`.
//! This module parses exactly that shape: a bracketed, comma-separated
//! sequence of single- or double-quoted strings. Nothing is ever evaluated.
//! Any other input is treated as malformed and decodes to an empty list.

use serde_json::Value;
use std::iter::Peekable;
use std::str::Chars;
use tracing::debug;

/// Parse a list literal of quoted strings.
///
/// Returns `None` when the input is not a well-formed list literal.
///
/// ```
/// use musegraph::entity::list::parse_list_literal;
///
/// assert_eq!(
///     parse_list_literal("['Vases', \"Women\"]"),
///     Some(vec!["Vases".to_string(), "Women".to_string()])
/// );
/// assert_eq!(parse_list_literal("[]"), Some(vec![]));
/// assert_eq!(parse_list_literal("__import__('os')"), None);
/// ```
pub fn parse_list_literal(input: &str) -> Option<Vec<String>> {
    let mut chars = input.trim().chars().peekable();
    if chars.next()? != '[' {
        return None;
    }

    let mut items = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match *chars.peek()? {
            ']' => {
                chars.next();
                break;
            }
            quote @ ('\'' | '"') => {
                chars.next();
                items.push(read_quoted(&mut chars, quote)?);
                skip_whitespace(&mut chars);
                match chars.next()? {
                    ',' => continue,
                    ']' => break,
                    _ => return None,
                }
            }
            _ => return None,
        }
    }

    // Input was trimmed, so anything left is trailing garbage
    if chars.next().is_some() {
        return None;
    }
    Some(items)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

fn read_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Option<String> {
    let mut out = String::new();
    loop {
        let c = chars.next()?;
        if c == quote {
            return Some(out);
        }
        if c == '\\' {
            let escaped = chars.next()?;
            out.push(match escaped {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                other => other,
            });
        } else {
            out.push(c);
        }
    }
}

/// Decode a raw cell into an ordered list of strings.
///
/// Accepts a native JSON array of strings or a list literal string.
/// Absent cells decode to an empty list; malformed cells are logged and
/// also decode to an empty list.
pub fn decode_list(field: &str, value: Option<&Value>) -> Vec<String> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let strings: Option<Vec<String>> = items
                .iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect();
            strings.unwrap_or_else(|| {
                debug!(field, "List field contains non-string elements, using empty list");
                Vec::new()
            })
        }
        Some(Value::String(raw)) if is_missing_text(raw) => Vec::new(),
        Some(Value::String(raw)) => parse_list_literal(raw).unwrap_or_else(|| {
            debug!(field, raw = %raw, "Malformed list field, using empty list");
            Vec::new()
        }),
        Some(other) => {
            debug!(field, value = %other, "List field has unexpected type, using empty list");
            Vec::new()
        }
    }
}

/// Decode the first name out of a possibly multi-valued name cell.
///
/// A list literal yields its first element; a plain string yields its first
/// `|`-delimited segment. Returns `None` when nothing usable is present.
pub fn first_name(field: &str, value: Option<&Value>) -> Option<String> {
    let candidate = match value? {
        Value::String(raw) if raw.trim_start().starts_with('[') => {
            match parse_list_literal(raw) {
                Some(names) => names.into_iter().next(),
                None => {
                    debug!(field, raw = %raw, "Malformed name list");
                    None
                }
            }
        }
        Value::String(raw) => raw.split('|').next().map(str::to_string),
        Value::Array(items) => items.first().and_then(Value::as_str).map(str::to_string),
        _ => None,
    }?;

    let trimmed = candidate.trim();
    if is_missing_text(trimmed) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Empty strings and pandas' `nan` marker both mean "no value"
pub(crate) fn is_missing_text(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.eq_ignore_ascii_case("nan")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_mixed_quotes() {
        let parsed = parse_list_literal(r#"['Men', "Horses", 'Lyres']"#).unwrap();
        assert_eq!(parsed, vec!["Men", "Horses", "Lyres"]);
    }

    #[test]
    fn test_parse_escapes_and_commas_inside_quotes() {
        let parsed = parse_list_literal(r"['Dionysos, god', 'it\'s']").unwrap();
        assert_eq!(parsed, vec!["Dionysos, god", "it's"]);
    }

    #[test]
    fn test_parse_trailing_comma() {
        assert_eq!(parse_list_literal("['a',]").unwrap(), vec!["a"]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_list_literal("['unterminated").is_none());
        assert!(parse_list_literal("[1, 2]").is_none());
        assert!(parse_list_literal("['a'] trailing").is_none());
        assert!(parse_list_literal("[,]").is_none());
        assert!(parse_list_literal("Vases").is_none());
        assert!(parse_list_literal("").is_none());
    }

    #[test]
    fn test_decode_list_degrades_to_empty() {
        assert!(decode_list("Tags", Some(&json!("not a list"))).is_empty());
        assert!(decode_list("Tags", Some(&json!(42))).is_empty());
        assert!(decode_list("Tags", Some(&json!([1, "a"]))).is_empty());
        assert!(decode_list("Tags", Some(&json!("nan"))).is_empty());
        assert!(decode_list("Tags", None).is_empty());
    }

    #[test]
    fn test_decode_list_native_array() {
        let decoded = decode_list("Tags", Some(&json!(["Vases", "Women"])));
        assert_eq!(decoded, vec!["Vases", "Women"]);
    }

    #[test]
    fn test_first_name_variants() {
        assert_eq!(
            first_name("n", Some(&json!("['Jane Doe', 'John Smith']"))).as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(
            first_name("n", Some(&json!("Jane Doe|John Smith"))).as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(first_name("n", Some(&json!("['broken"))), None);
        assert_eq!(first_name("n", Some(&json!("[]"))), None);
        assert_eq!(first_name("n", Some(&json!(""))), None);
        assert_eq!(first_name("n", None), None);
    }
}
