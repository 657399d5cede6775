use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::{Token, TokenType};

// 末尾の改行まで含めて 1 行
static QUOTE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(>>?) ([^\n]*\n)").unwrap());

/// Consumes every consecutive quote line of the same level starting at `rest`.
pub(super) fn tokenize_quote(rest: &str) -> Option<Token> {
    let marker = QUOTE_LINE_REGEX.captures(rest)?.get(1)?.as_str();
    let token_type = if marker == ">>" {
        TokenType::QuoteLine2
    } else {
        TokenType::QuoteLine1
    };

    let mut whole_text = String::new();
    let mut extracted_value = String::new();
    let mut remaining = rest;
    while let Some(caps) = QUOTE_LINE_REGEX.captures(remaining) {
        if &caps[1] != marker {
            break;
        }
        let line = &caps[0];
        whole_text.push_str(line);
        extracted_value.push_str(&caps[2]);
        remaining = &remaining[line.len()..];
    }

    Some(Token::new(token_type, extracted_value, whole_text))
}

#[cfg(test)]
mod tests {
    use super::tokenize_quote;
    use crate::token::{Token, TokenType};

    #[test]
    fn test_quote_levels_do_not_merge() {
        assert_eq!(
            tokenize_quote("> a\n>> b\n"),
            Some(Token::new(TokenType::QuoteLine1, "a\n", "> a\n"))
        );
        assert_eq!(
            tokenize_quote(">> b\n> a\n"),
            Some(Token::new(TokenType::QuoteLine2, "b\n", ">> b\n"))
        );
    }

    #[test]
    fn test_nested_marker_stays_in_body() {
        assert_eq!(
            tokenize_quote("> > a\n"),
            Some(Token::new(TokenType::QuoteLine1, "> a\n", "> > a\n"))
        );
        assert_eq!(tokenize_quote(">>> a\n"), None);
        assert_eq!(tokenize_quote(">a\n"), None);
    }
}
