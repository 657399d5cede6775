use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::{Token, TokenType};

// @user または @user@host
static MENTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@([a-zA-Z0-9_]+(?:-[a-zA-Z0-9_]+)*(?:@[a-zA-Z0-9_\-]+(?:\.[a-zA-Z0-9_\-]+)*)?)")
        .unwrap()
});

pub(super) fn tokenize_mention(rest: &str) -> Option<Token> {
    let caps = MENTION_REGEX.captures(rest)?;

    Some(Token::new(TokenType::Mention, &caps[1], &caps[0]))
}
