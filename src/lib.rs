//! Parser for MFM, the markup used in Misskey notes.
//!
//! Text goes through [`tokenize`] and then [`parse`]; [`parse_text`] does
//! both. The result is a list of [`MfmNode`] for a renderer to lay out.

mod ast;
mod option;
mod parser;
mod token;
mod tokenizer;
mod util;

pub use ast::{MfmNode, QuoteLevel};
pub use option::ParseOption;
pub use parser::{parse, MAX_DEPTH};
pub use token::{Token, TokenType, TokenizeResult};
pub use tokenizer::tokenize;

pub fn parse_text(input: &str, option: &ParseOption) -> Vec<MfmNode> {
    parse(&tokenize(input).tokens, option)
}

#[cfg(test)]
mod tests {
    use super::{parse_text, MfmNode, ParseOption};

    #[test]
    fn test_parse_text() {
        assert_eq!(
            parse_text("<center>**Hello**</center>", &ParseOption::default()),
            vec![MfmNode::Center {
                children: vec![MfmNode::Bold {
                    children: vec![MfmNode::text("Hello")]
                }]
            }]
        );
    }
}
