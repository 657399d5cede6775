use serde::Serialize;

/// A classified span of the source text.
///
/// `whole_text` is exactly what the tokenizer consumed, delimiters included.
/// Concatenating `whole_text` over a token list gives back the input.
/// `extracted_value` is the payload with delimiters stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub token_type: TokenType,
    pub extracted_value: String,
    pub whole_text: String,
}

impl Token {
    pub fn new(
        token_type: TokenType,
        extracted_value: impl Into<String>,
        whole_text: impl Into<String>,
    ) -> Self {
        Token {
            token_type,
            extracted_value: extracted_value.into(),
            whole_text: whole_text.into(),
        }
    }

    /// Token whose payload and source text are the same string.
    pub fn simple(token_type: TokenType, text: impl Into<String>) -> Self {
        let text = text.into();
        Token {
            token_type,
            extracted_value: text.clone(),
            whole_text: text,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Token::simple(TokenType::Text, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    Text,
    QuoteLine1,
    QuoteLine2,
    CenterStart,
    CenterEnd,
    Big,
    BoldAsta,
    BoldTagStart,
    BoldTagEnd,
    BoldUnder,
    SmallStart,
    SmallEnd,
    ItalicTagStart,
    ItalicTagEnd,
    ItalicAsta,
    ItalicUnder,
    StrikeTagStart,
    StrikeTagEnd,
    StrikeWave,
    FunctionStart,
    FunctionEnd,
    InlineCode,
    EmojiCode,
    Mention,
    Url,
    UrlWithTitle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TokenizeResult {
    /// Always `true`: unrecognized spans degrade to `Text` tokens.
    pub success: bool,
    pub tokens: Vec<Token>,
}

impl TokenizeResult {
    /// Source text rebuilt from the token stream.
    pub fn whole_text(&self) -> String {
        self.tokens.iter().map(|t| t.whole_text.as_str()).collect()
    }
}
