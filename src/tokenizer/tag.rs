use crate::token::{Token, TokenType};

const CENTER_START: &str = "<center>";
const CENTER_END: &str = "</center>";

static TAGS: [(&str, TokenType); 10] = [
    (CENTER_START, TokenType::CenterStart),
    (CENTER_END, TokenType::CenterEnd),
    ("<small>", TokenType::SmallStart),
    ("</small>", TokenType::SmallEnd),
    ("<b>", TokenType::BoldTagStart),
    ("</b>", TokenType::BoldTagEnd),
    ("<i>", TokenType::ItalicTagStart),
    ("</i>", TokenType::ItalicTagEnd),
    ("<s>", TokenType::StrikeTagStart),
    ("</s>", TokenType::StrikeTagEnd),
];

pub(super) fn tokenize_tag(rest: &str) -> Option<Token> {
    let &(tag, token_type) = TAGS.iter().find(|(tag, _)| rest.starts_with(tag))?;

    // <center> の直後の改行は中身に含めない
    if token_type == TokenType::CenterStart && rest[tag.len()..].starts_with('\n') {
        return Some(Token::new(token_type, tag, format!("{}\n", tag)));
    }

    Some(Token::simple(token_type, tag))
}

/// `\n</center>`: the line feed before the closing tag belongs to the tag.
pub(super) fn tokenize_center_end_after_newline(rest: &str) -> Option<Token> {
    rest.strip_prefix('\n')?
        .starts_with(CENTER_END)
        .then(|| Token::new(TokenType::CenterEnd, CENTER_END, format!("\n{}", CENTER_END)))
}

#[cfg(test)]
mod tests {
    use super::{tokenize_center_end_after_newline, tokenize_tag};
    use crate::token::{Token, TokenType};

    #[test]
    fn test_tokenize_tag() {
        assert_eq!(
            tokenize_tag("<s>abc"),
            Some(Token::simple(TokenType::StrikeTagStart, "<s>"))
        );
        assert_eq!(
            tokenize_tag("<small>abc"),
            Some(Token::simple(TokenType::SmallStart, "<small>"))
        );
        assert_eq!(tokenize_tag("<span>abc"), None);
        assert_eq!(tokenize_tag("<"), None);
    }

    #[test]
    fn test_center_newlines() {
        assert_eq!(
            tokenize_tag("<center>\nabc"),
            Some(Token::new(TokenType::CenterStart, "<center>", "<center>\n"))
        );
        assert_eq!(
            tokenize_center_end_after_newline("\n</center>"),
            Some(Token::new(TokenType::CenterEnd, "</center>", "\n</center>"))
        );
        assert_eq!(tokenize_center_end_after_newline("\nabc"), None);
    }
}
