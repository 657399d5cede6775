use crate::token::{Token, TokenType};
use crate::util::follows_word_char;

/// `***`, `**` and `*`, longest first.
pub(super) fn tokenize_asterisk(rest: &str) -> Option<Token> {
    let token = match rest.chars().take_while(|&c| c == '*').count() {
        0 => return None,
        1 => Token::simple(TokenType::ItalicAsta, "*"),
        2 => Token::simple(TokenType::BoldAsta, "**"),
        _ => Token::simple(TokenType::Big, "***"),
    };

    Some(token)
}

/// `__` and `_`. An underscore run glued to ASCII words on both sides
/// (`snake_case`) is not a delimiter.
pub(super) fn tokenize_underscore(input: &str, pos: usize) -> Option<Token> {
    let rest = &input[pos..];
    let run = rest.chars().take_while(|&c| c == '_').count();
    let delimiter = if run >= 2 { "__" } else { "_" };

    let next_char = rest[delimiter.len()..].chars().next();
    if follows_word_char(input, pos) && next_char.map(|c| c.is_ascii_alphanumeric()) == Some(true)
    {
        return None;
    }

    let token_type = if run >= 2 {
        TokenType::BoldUnder
    } else {
        TokenType::ItalicUnder
    };

    Some(Token::simple(token_type, delimiter))
}

pub(super) fn tokenize_wave(rest: &str) -> Option<Token> {
    rest.starts_with("~~")
        .then(|| Token::simple(TokenType::StrikeWave, "~~"))
}
