use crate::token::{Token, TokenType};
use crate::util::is_url_char;

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// Byte length of the URL at the start of `rest`, if any.
///
/// Brackets are part of the URL only when balanced, and trailing `.`/`,`
/// are left to the surrounding text.
pub(super) fn scan_url(rest: &str) -> Option<usize> {
    let scheme_len = SCHEMES.iter().find(|s| rest.starts_with(*s))?.len();

    let mut brackets = vec![];
    let mut end = scheme_len;
    for (i, c) in rest[scheme_len..].char_indices() {
        let accepted = match c {
            '(' | '[' => {
                brackets.push(c);
                true
            }
            ')' | ']' => {
                let open = if c == ')' { '(' } else { '[' };
                if brackets.last() == Some(&open) {
                    brackets.pop();
                    true
                } else {
                    false
                }
            }
            _ => is_url_char(c),
        };
        if !accepted {
            break;
        }
        if brackets.is_empty() {
            end = scheme_len + i + c.len_utf8();
        }
    }

    let url = rest[..end].trim_end_matches(|c: char| c == '.' || c == ',');
    if url.len() <= scheme_len {
        return None;
    }

    Some(url.len())
}

pub(super) fn tokenize_url(rest: &str) -> Option<Token> {
    let len = scan_url(rest)?;

    Some(Token::simple(TokenType::Url, &rest[..len]))
}

/// `[title](url)`. The token keeps the whole text; the parser splits it.
pub(super) fn tokenize_url_with_title(rest: &str) -> Option<Token> {
    let body = rest.strip_prefix('[')?;
    let close = body.find(']')?;
    let title = &body[..close];
    if title.is_empty() || title.contains(|c: char| c == '[' || c == '\n') {
        return None;
    }

    let target = body[close..].strip_prefix("](")?;
    let url_len = scan_url(target)?;
    if !target[url_len..].starts_with(')') {
        return None;
    }

    let len = "[".len() + close + "](".len() + url_len + ")".len();
    Some(Token::simple(TokenType::UrlWithTitle, &rest[..len]))
}
