/* src/server/injector/rust/src/token.rs */

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
  Text(&'a str),
  /// `raw` is the full `{{ ... }}` span, `name` the trimmed path inside it.
  Placeholder { raw: &'a str, name: &'a str },
}

pub(crate) const TOKEN_OPEN: &str = "{{";
pub(crate) const TOKEN_CLOSE: &str = "}}";

/// Placeholder paths: `name` or `name.sub[.sub...]`, made of ASCII
/// alphanumerics plus `_`, `-` and `$`.
pub(crate) fn is_token_name(name: &str) -> bool {
  !name.is_empty()
    && name.split('.').all(|segment| {
      !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'$'))
    })
}

pub(crate) fn tokenize(template: &str) -> Vec<Token<'_>> {
  let mut tokens = Vec::new();
  let mut pos = 0;
  let mut text_start = 0;

  while pos < template.len() {
    let Some(rel) = template[pos..].find(TOKEN_OPEN) else {
      break;
    };
    let open = pos + rel;
    let after_open = open + TOKEN_OPEN.len();
    let Some(close_rel) = template[after_open..].find(TOKEN_CLOSE) else {
      // Unclosed braces -- rest is text
      break;
    };
    let name = template[after_open..after_open + close_rel].trim();
    if is_token_name(name) {
      if open > text_start {
        tokens.push(Token::Text(&template[text_start..open]));
      }
      let end = after_open + close_rel + TOKEN_CLOSE.len();
      tokens.push(Token::Placeholder { raw: &template[open..end], name });
      pos = end;
      text_start = end;
    } else {
      // Not a placeholder; rescan one byte later so `{{{x}}}` still finds `{{x}}`
      pos = open + 1;
    }
  }

  if text_start < template.len() {
    tokens.push(Token::Text(&template[text_start..]));
  }
  tokens
}
