mod emoji;
mod emphasis;
mod function;
mod link;
mod mention;
mod quote;
mod tag;

use tracing::debug;

use self::{
    emoji::tokenize_emoji_code,
    emphasis::{tokenize_asterisk, tokenize_underscore, tokenize_wave},
    function::tokenize_function_start,
    link::{tokenize_url, tokenize_url_with_title},
    mention::tokenize_mention,
    quote::tokenize_quote,
    tag::{tokenize_center_end_after_newline, tokenize_tag},
};
use crate::token::{Token, TokenType, TokenizeResult};
use crate::util::{follows_word_char, is_head_of_line};

/// Splits `input` into tokens. Never fails: anything that is not markup
/// ends up in a `Text` token.
pub fn tokenize(input: &str) -> TokenizeResult {
    tokenize_with(input, true)
}

/// `quote_lines == false` leaves `>` lines as plain text. The parser uses
/// it to replay a quote whose construct is disabled.
pub(crate) fn tokenize_with(input: &str, quote_lines: bool) -> TokenizeResult {
    let mut tokens: Vec<Token> = Vec::new();
    let mut buffer = String::new();

    let mut pos = 0;
    while let Some(char) = input[pos..].chars().next() {
        let rest = &input[pos..];
        let token = match char {
            '>' if quote_lines && is_head_of_line(input, pos) => tokenize_quote(rest),
            '<' => tokenize_tag(rest),
            '\n' => tokenize_center_end_after_newline(rest),
            '*' => tokenize_asterisk(rest),
            '_' => tokenize_underscore(input, pos),
            '~' => tokenize_wave(rest),
            '`' => Some(Token::simple(TokenType::InlineCode, "`")),
            '$' => tokenize_function_start(rest),
            // "$[" の閉じかどうかは構文解析で決める
            ']' => Some(Token::simple(TokenType::FunctionEnd, "]")),
            '[' => tokenize_url_with_title(rest),
            'h' => tokenize_url(rest),
            '@' if !follows_word_char(input, pos) => tokenize_mention(rest),
            ':' if !follows_word_char(input, pos) => tokenize_emoji_code(rest),
            _ => None,
        };

        match token {
            Some(token) => {
                flush_text(&mut tokens, &mut buffer);
                pos += token.whole_text.len();
                tokens.push(token);
            }
            None => {
                buffer.push(char);
                pos += char.len_utf8();
            }
        }
    }
    flush_text(&mut tokens, &mut buffer);

    debug!(tokens = tokens.len(), quote_lines, "tokenized");

    TokenizeResult {
        success: true,
        tokens,
    }
}

fn flush_text(tokens: &mut Vec<Token>, buffer: &mut String) {
    if !buffer.is_empty() {
        tokens.push(Token::text(buffer.clone()));
        buffer.clear();
    }
}
