use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::{Token, TokenType};

// $[name.key=value,key2 ...
static FUNCTION_START_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$\[([a-zA-Z0-9_]+(?:\.[a-zA-Z0-9_.,=\-]+)?) ").unwrap());

pub(super) fn tokenize_function_start(rest: &str) -> Option<Token> {
    let caps = FUNCTION_START_REGEX.captures(rest)?;

    Some(Token::new(TokenType::FunctionStart, &caps[1], &caps[0]))
}

#[cfg(test)]
mod tests {
    use super::tokenize_function_start;
    use crate::token::{Token, TokenType};

    #[test]
    fn test_tokenize_function_start() {
        assert_eq!(
            tokenize_function_start("$[x2 abc]"),
            Some(Token::new(TokenType::FunctionStart, "x2", "$[x2 "))
        );
        assert_eq!(
            tokenize_function_start("$[position.x=-1.5,y=2 abc]"),
            Some(Token::new(
                TokenType::FunctionStart,
                "position.x=-1.5,y=2",
                "$[position.x=-1.5,y=2 "
            ))
        );
        assert_eq!(tokenize_function_start("$[x2]"), None);
        assert_eq!(tokenize_function_start("$x2 "), None);
    }
}
