/* src/server/injector/rust/src/helpers.rs */

use serde_json::Value;

pub(crate) fn resolve<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
  let mut current = data;
  for key in path.split('.') {
    current = current.get(key)?;
  }
  Some(current)
}

/// Text form of a data value. Arrays and objects become JSON text.
pub(crate) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

/// Escape text for a double-quoted attribute or for element text. Fragments
/// only apply it to attributes: content fields are trusted markup.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

/// First `max_chars` characters, with `...` appended when cut.
pub(crate) fn excerpt(s: &str, max_chars: usize) -> String {
  match s.char_indices().nth(max_chars) {
    Some((idx, _)) => format!("{}...", s[..idx].trim_end()),
    None => s.to_string(),
  }
}

/// Byte offset just past the opening `<body ...>` tag, case-insensitive.
pub(crate) fn body_open_end(html: &str) -> Option<usize> {
  let lower = html.to_ascii_lowercase();
  let mut from = 0;
  while let Some(rel) = lower[from..].find("<body") {
    let start = from + rel;
    let after = start + "<body".len();
    match lower.as_bytes().get(after) {
      Some(b'>') => return Some(after + 1),
      Some(b) if b.is_ascii_whitespace() || *b == b'/' => {
        return lower[after..].find('>').map(|p| after + p + 1);
      }
      _ => from = after,
    }
  }
  None
}

/// Byte offset of the first match of `needle` (ASCII, lowercase), ignoring case.
pub(crate) fn find_ignore_case(html: &str, needle: &str) -> Option<usize> {
  html.to_ascii_lowercase().find(needle)
}

/// Like `find_ignore_case` but returns the last match.
pub(crate) fn rfind_ignore_case(html: &str, needle: &str) -> Option<usize> {
  html.to_ascii_lowercase().rfind(needle)
}
