/// `pos` is the first byte of the input or follows a line feed.
pub(crate) fn is_head_of_line(input: &str, pos: usize) -> bool {
    pos == 0 || input[..pos].ends_with('\n')
}

/// Mentions and emoji codes must not be glued to a preceding word.
pub(crate) fn follows_word_char(input: &str, pos: usize) -> bool {
    input[..pos]
        .chars()
        .next_back()
        .map(|c| c.is_ascii_alphanumeric())
        == Some(true)
}

pub(crate) fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '.' | ',' | '_' | '/' | ':' | '%' | '#' | '@' | '$' | '&' | '?' | '!' | '~' | '=' | '+'
                | '-'
        )
}

#[cfg(test)]
mod tests {
    use super::{follows_word_char, is_head_of_line};

    #[test]
    fn test_is_head_of_line() {
        assert!(is_head_of_line("> a", 0));
        assert!(is_head_of_line("x\n> a", 2));
        assert!(!is_head_of_line("x > a", 2));
    }

    #[test]
    fn test_follows_word_char() {
        assert!(follows_word_char("a@b", 1));
        assert!(!follows_word_char(" @b", 1));
        assert!(!follows_word_char("@b", 0));
        // only ASCII words block a mention
        assert!(!follows_word_char("あ@b", "あ".len()));
    }
}
