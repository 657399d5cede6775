use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::{Token, TokenType};

static EMOJI_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:([a-zA-Z0-9_+\-]+):").unwrap());

pub(super) fn tokenize_emoji_code(rest: &str) -> Option<Token> {
    let caps = EMOJI_CODE_REGEX.captures(rest)?;
    let whole_text = &caps[0];

    // 12:30:45 のような英数字に挟まれたものは絵文字ではない
    let next_char = rest[whole_text.len()..].chars().next();
    if next_char.map(|c| c.is_ascii_alphanumeric()) == Some(true) {
        return None;
    }

    Some(Token::new(TokenType::EmojiCode, &caps[1], whole_text))
}
