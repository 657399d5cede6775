use serde::{Deserialize, Serialize};

use crate::token::TokenType;

/// Per-construct toggles. A disabled construct is emitted as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOption {
    pub enable_quote: bool,
    pub enable_center: bool,
    pub enable_big: bool,
    pub enable_bold: bool,
    pub enable_small: bool,
    pub enable_italic: bool,
    pub enable_strike: bool,
    pub enable_function: bool,
    pub enable_inline: bool,
    pub enable_emoji: bool,
    pub enable_mention: bool,
    pub enable_url: bool,
}

impl Default for ParseOption {
    fn default() -> Self {
        ParseOption {
            enable_quote: true,
            enable_center: true,
            enable_big: true,
            enable_bold: true,
            enable_small: true,
            enable_italic: true,
            enable_strike: true,
            enable_function: true,
            enable_inline: true,
            enable_emoji: true,
            enable_mention: true,
            enable_url: true,
        }
    }
}

impl ParseOption {
    pub fn all_disabled() -> Self {
        ParseOption {
            enable_quote: false,
            enable_center: false,
            enable_big: false,
            enable_bold: false,
            enable_small: false,
            enable_italic: false,
            enable_strike: false,
            enable_function: false,
            enable_inline: false,
            enable_emoji: false,
            enable_mention: false,
            enable_url: false,
        }
    }

    /// Option used inside `` `...` ``: nothing but the closing backtick is
    /// interpreted, whatever the caller enabled.
    pub fn inline_code_only() -> Self {
        ParseOption {
            enable_inline: true,
            ..ParseOption::all_disabled()
        }
    }

    /// Option used for the title of `[title](url)`.
    pub fn for_link_title(&self) -> Self {
        ParseOption {
            enable_url: false,
            enable_mention: false,
            ..*self
        }
    }

    pub fn is_enabled(&self, token_type: TokenType) -> bool {
        match token_type {
            TokenType::Text => true,
            TokenType::QuoteLine1 | TokenType::QuoteLine2 => self.enable_quote,
            TokenType::CenterStart | TokenType::CenterEnd => self.enable_center,
            TokenType::Big => self.enable_big,
            TokenType::BoldAsta
            | TokenType::BoldTagStart
            | TokenType::BoldTagEnd
            | TokenType::BoldUnder => self.enable_bold,
            TokenType::SmallStart | TokenType::SmallEnd => self.enable_small,
            TokenType::ItalicTagStart
            | TokenType::ItalicTagEnd
            | TokenType::ItalicAsta
            | TokenType::ItalicUnder => self.enable_italic,
            TokenType::StrikeTagStart | TokenType::StrikeTagEnd | TokenType::StrikeWave => {
                self.enable_strike
            }
            TokenType::FunctionStart | TokenType::FunctionEnd => self.enable_function,
            TokenType::InlineCode => self.enable_inline,
            TokenType::EmojiCode => self.enable_emoji,
            TokenType::Mention => self.enable_mention,
            TokenType::Url | TokenType::UrlWithTitle => self.enable_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ParseOption;
    use crate::token::TokenType;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let option: ParseOption = serde_json::from_str(r#"{"enableUrl":false}"#).unwrap();
        assert_eq!(
            option,
            ParseOption {
                enable_url: false,
                ..ParseOption::default()
            }
        );
    }

    #[test]
    fn test_inline_code_only() {
        let option = ParseOption::inline_code_only();
        assert!(option.is_enabled(TokenType::InlineCode));
        assert!(option.is_enabled(TokenType::Text));
        assert!(!option.is_enabled(TokenType::BoldAsta));
        assert!(!option.is_enabled(TokenType::QuoteLine1));
        assert!(!option.is_enabled(TokenType::EmojiCode));
    }

    #[test]
    fn test_link_title_option_derives_from_caller() {
        let caller = ParseOption {
            enable_bold: false,
            ..ParseOption::default()
        };
        let title = caller.for_link_title();
        assert!(!title.enable_url);
        assert!(!title.enable_mention);
        assert!(!title.enable_bold);
        assert!(title.enable_italic);
        // the caller's value is untouched
        assert!(caller.enable_url);
    }
}
