mod cursor;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use self::cursor::{Checkpoint, TokenCursor};
use crate::ast::{MfmNode, QuoteLevel};
use crate::option::ParseOption;
use crate::token::{Token, TokenType};
use crate::tokenizer::{tokenize, tokenize_with};

/// Nesting level from which only the active frame's terminator is honored.
pub const MAX_DEPTH: usize = 10;

// __ の間は [a-zA-Z0-9 ] のみ
static BOLD_UNDER_CONTENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9 ]+$").unwrap());
// * と _ の間は [a-zA-Z0-9] のみ
static ITALIC_CONTENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());
// ~~ の間は改行不可
static STRIKE_WAVE_CONTENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\n]+$").unwrap());
// ` の間は改行および ´ 不可
static INLINE_CODE_CONTENT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^´\n]+$").unwrap());

/// The construct whose closing token ends the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ParseState {
    Normal,
    Center,
    Big,
    BoldAsta,
    BoldTag,
    BoldUnder,
    Small,
    ItalicTag,
    ItalicAsta,
    ItalicUnder,
    StrikeTag,
    StrikeWave,
    Function,
    InlineCode,
}

impl ParseState {
    fn terminator(self) -> Option<TokenType> {
        match self {
            ParseState::Normal => None,
            ParseState::Center => Some(TokenType::CenterEnd),
            ParseState::Big => Some(TokenType::Big),
            ParseState::BoldAsta => Some(TokenType::BoldAsta),
            ParseState::BoldTag => Some(TokenType::BoldTagEnd),
            ParseState::BoldUnder => Some(TokenType::BoldUnder),
            ParseState::Small => Some(TokenType::SmallEnd),
            ParseState::ItalicTag => Some(TokenType::ItalicTagEnd),
            ParseState::ItalicAsta => Some(TokenType::ItalicAsta),
            ParseState::ItalicUnder => Some(TokenType::ItalicUnder),
            ParseState::StrikeTag => Some(TokenType::StrikeTagEnd),
            ParseState::StrikeWave => Some(TokenType::StrikeWave),
            ParseState::Function => Some(TokenType::FunctionEnd),
            ParseState::InlineCode => Some(TokenType::InlineCode),
        }
    }
}

#[derive(Debug)]
struct ParseResult {
    /// The frame met its terminator (always true for `Normal`).
    success: bool,
    nodes: Vec<MfmNode>,
}

/// Builds the syntax tree for `tokens`. Never fails: constructs that do not
/// close, are disabled or nest too deep come out as text.
pub fn parse(tokens: &[Token], option: &ParseOption) -> Vec<MfmNode> {
    parse_at_depth(tokens, option, 0)
}

/// Fresh cursor over an independent token stream, e.g. a quote body.
fn parse_at_depth(tokens: &[Token], option: &ParseOption, depth: usize) -> Vec<MfmNode> {
    let mut parser = SyntaxParser {
        cursor: TokenCursor::new(tokens),
        frames: HashMap::new(),
    };
    parser.parse(ParseState::Normal, option, depth).nodes
}

/// `(state, position after the opener, depth)`. Inside one parser the option
/// is fixed per state, so the key decides the frame's outcome.
type FrameKey = (ParseState, usize, usize);

struct SyntaxParser<'a> {
    cursor: TokenCursor<'a>,
    /// Finished frames: children and the position after the terminator, or
    /// `None` when the frame ran off the end.
    frames: HashMap<FrameKey, Option<(Vec<MfmNode>, Checkpoint)>>,
}

impl<'a> SyntaxParser<'a> {
    fn parse(&mut self, state: ParseState, option: &ParseOption, depth: usize) -> ParseResult {
        let mut nodes = Vec::new();

        while let Some(token) = self.cursor.next() {
            let closes_frame = state.terminator() == Some(token.token_type);

            // 無効化されたもの、ネストが深すぎるものはそのまま出力する
            if !option.is_enabled(token.token_type) || (depth >= MAX_DEPTH && !closes_frame) {
                push_literal(&mut nodes, token, option, depth);
                continue;
            }

            if closes_frame {
                return ParseResult {
                    success: true,
                    nodes,
                };
            }

            match token.token_type {
                TokenType::Text => push_text(&mut nodes, &token.whole_text),

                TokenType::QuoteLine1 | TokenType::QuoteLine2 => {
                    let level = if token.token_type == TokenType::QuoteLine2 {
                        QuoteLevel::Level2
                    } else {
                        QuoteLevel::Level1
                    };
                    let body = tokenize(&token.extracted_value);
                    let children = parse_at_depth(&body.tokens, option, depth + 1);
                    nodes.push(MfmNode::Quote { level, children });
                }

                // 開いていないものの閉じタグ
                TokenType::CenterEnd
                | TokenType::BoldTagEnd
                | TokenType::SmallEnd
                | TokenType::ItalicTagEnd
                | TokenType::StrikeTagEnd
                | TokenType::FunctionEnd => push_text(&mut nodes, &token.whole_text),

                TokenType::CenterStart => {
                    match self.parse_nested(ParseState::Center, option, depth) {
                        Some(children) => nodes.push(MfmNode::Center { children }),
                        None => push_text(&mut nodes, &token.whole_text),
                    }
                }

                TokenType::Big => match self.parse_nested(ParseState::Big, option, depth) {
                    Some(children) => nodes.push(MfmNode::Big { children }),
                    None => push_text(&mut nodes, &token.whole_text),
                },

                TokenType::BoldAsta => {
                    match self.parse_nested(ParseState::BoldAsta, option, depth) {
                        Some(children) => nodes.push(MfmNode::Bold { children }),
                        None => push_text(&mut nodes, &token.whole_text),
                    }
                }

                TokenType::BoldTagStart => {
                    match self.parse_nested(ParseState::BoldTag, option, depth) {
                        Some(children) => nodes.push(MfmNode::Bold { children }),
                        None => push_text(&mut nodes, &token.whole_text),
                    }
                }

                TokenType::BoldUnder => {
                    match self.parse_nested(ParseState::BoldUnder, option, depth) {
                        Some(children)
                            if is_text_matching(&children, &BOLD_UNDER_CONTENT_REGEX) =>
                        {
                            nodes.push(MfmNode::Bold { children })
                        }
                        Some(children) => push_delimited(&mut nodes, &token.whole_text, children),
                        None => push_text(&mut nodes, &token.whole_text),
                    }
                }

                TokenType::SmallStart => match self.parse_nested(ParseState::Small, option, depth) {
                    Some(children) => nodes.push(MfmNode::Small { children }),
                    None => push_text(&mut nodes, &token.whole_text),
                },

                TokenType::ItalicTagStart => {
                    match self.parse_nested(ParseState::ItalicTag, option, depth) {
                        Some(children) => nodes.push(MfmNode::Italic { children }),
                        None => push_text(&mut nodes, &token.whole_text),
                    }
                }

                TokenType::ItalicAsta => {
                    match self.parse_nested(ParseState::ItalicAsta, option, depth) {
                        Some(children) if is_text_matching(&children, &ITALIC_CONTENT_REGEX) => {
                            nodes.push(MfmNode::Italic { children })
                        }
                        Some(children) => push_delimited(&mut nodes, &token.whole_text, children),
                        None => push_text(&mut nodes, &token.whole_text),
                    }
                }

                TokenType::ItalicUnder => {
                    match self.parse_nested(ParseState::ItalicUnder, option, depth) {
                        Some(children) if is_text_matching(&children, &ITALIC_CONTENT_REGEX) => {
                            nodes.push(MfmNode::Italic { children })
                        }
                        Some(children) => push_delimited(&mut nodes, &token.whole_text, children),
                        None => push_text(&mut nodes, &token.whole_text),
                    }
                }

                TokenType::StrikeTagStart => {
                    match self.parse_nested(ParseState::StrikeTag, option, depth) {
                        Some(children) => nodes.push(MfmNode::Strike { children }),
                        None => push_text(&mut nodes, &token.whole_text),
                    }
                }

                TokenType::StrikeWave => {
                    match self.parse_nested(ParseState::StrikeWave, option, depth) {
                        Some(children)
                            if is_text_matching(&children, &STRIKE_WAVE_CONTENT_REGEX) =>
                        {
                            nodes.push(MfmNode::Strike { children })
                        }
                        Some(children) => push_delimited(&mut nodes, &token.whole_text, children),
                        None => push_text(&mut nodes, &token.whole_text),
                    }
                }

                TokenType::FunctionStart => {
                    match self.parse_nested(ParseState::Function, option, depth) {
                        Some(children) => nodes.push(MfmNode::Function {
                            props: token.extracted_value.clone(),
                            children,
                        }),
                        None => push_text(&mut nodes, &token.whole_text),
                    }
                }

                TokenType::InlineCode => {
                    // 中身はマークアップとして解釈しない
                    let inline_code_only = ParseOption::inline_code_only();
                    match self.parse_nested(ParseState::InlineCode, &inline_code_only, depth) {
                        Some(children)
                            if is_text_matching(&children, &INLINE_CODE_CONTENT_REGEX) =>
                        {
                            nodes.push(MfmNode::InlineCode { children })
                        }
                        Some(children) => push_delimited(&mut nodes, &token.whole_text, children),
                        None => push_text(&mut nodes, &token.whole_text),
                    }
                }

                TokenType::EmojiCode => nodes.push(MfmNode::EmojiCode {
                    name: token.extracted_value.clone(),
                }),

                TokenType::Mention => nodes.push(MfmNode::Mention {
                    value: token.extracted_value.clone(),
                }),

                TokenType::Url => nodes.push(MfmNode::Url {
                    value: token.extracted_value.clone(),
                }),

                TokenType::UrlWithTitle => match split_url_with_title(&token.extracted_value) {
                    Some((title, url)) => {
                        // title は "hoge**bold**" のようにマークアップを含むことがある
                        let title_tokens = tokenize(title);
                        let children = parse_at_depth(
                            &title_tokens.tokens,
                            &option.for_link_title(),
                            depth + 1,
                        );
                        nodes.push(MfmNode::UrlWithTitle {
                            url: url.to_string(),
                            children,
                        });
                    }
                    None => push_text(&mut nodes, &token.whole_text),
                },
            }
        }

        // Normal 以外で終端に達したら失敗
        ParseResult {
            success: state == ParseState::Normal,
            nodes,
        }
    }

    /// Parses a frame for `state` right after its opening token.
    ///
    /// Returns `None` when the stream ends before the terminator; the cursor
    /// is then back just after the opener so the caller re-reads the span.
    /// Each frame is parsed at most once per position and depth.
    fn parse_nested(
        &mut self,
        state: ParseState,
        option: &ParseOption,
        depth: usize,
    ) -> Option<Vec<MfmNode>> {
        let terminator = state.terminator()?;
        let key = (state, self.cursor.position(), depth);
        if let Some(frame) = self.frames.get(&key).cloned() {
            trace!(?state, pos = key.1, depth, "frame reused");
            let (nodes, end) = frame?;
            self.cursor.restore(end);
            return Some(nodes);
        }

        if !self
            .cursor
            .remaining()
            .iter()
            .any(|t| t.token_type == terminator)
        {
            trace!(?state, pos = self.cursor.position(), "no terminator ahead");
            self.frames.insert(key, None);
            return None;
        }

        let checkpoint = self.cursor.checkpoint();
        let result = self.parse(state, option, depth + 1);
        if result.success {
            let end = self.cursor.checkpoint();
            self.frames.insert(key, Some((result.nodes.clone(), end)));
            return Some(result.nodes);
        }

        trace!(?state, pos = self.cursor.position(), "backtrack");
        self.cursor.restore(checkpoint);
        self.frames.insert(key, None);

        None
    }
}

fn push_literal(nodes: &mut Vec<MfmNode>, token: &Token, option: &ParseOption, depth: usize) {
    match token.token_type {
        // 引用として扱わない場合も中身のマークアップは解析する
        TokenType::QuoteLine1 | TokenType::QuoteLine2 if depth < MAX_DEPTH => {
            let replay = tokenize_with(&token.whole_text, false);
            let children = parse_at_depth(&replay.tokens, option, depth + 1);
            extend_with_text_merge(nodes, children);
        }
        TokenType::Text => push_text(nodes, &token.whole_text),
        _ => {
            if depth >= MAX_DEPTH {
                trace!(token_type = ?token.token_type, depth, "too deep, emitted as text");
            }
            push_text(nodes, &token.whole_text);
        }
    }
}

/// Appends `s`, merging into a trailing `Text` node.
fn push_text(nodes: &mut Vec<MfmNode>, s: &str) {
    if let Some(MfmNode::Text { value }) = nodes.last_mut() {
        value.push_str(s);
    } else {
        nodes.push(MfmNode::text(s));
    }
}

fn extend_with_text_merge(nodes: &mut Vec<MfmNode>, children: Vec<MfmNode>) {
    for node in children {
        match node {
            MfmNode::Text { value } => push_text(nodes, &value),
            node => nodes.push(node),
        }
    }
}

/// Rejected ambiguous delimiter: the delimiters go back around the
/// untouched children as text.
fn push_delimited(nodes: &mut Vec<MfmNode>, delimiter: &str, children: Vec<MfmNode>) {
    push_text(nodes, delimiter);
    extend_with_text_merge(nodes, children);
    push_text(nodes, delimiter);
}

fn is_text_matching(children: &[MfmNode], regex: &Regex) -> bool {
    matches!(children, [MfmNode::Text { value }] if regex.is_match(value))
}

/// `[title](url)` → `(title, url)`
fn split_url_with_title(s: &str) -> Option<(&str, &str)> {
    let (title, rest) = s.strip_prefix('[')?.split_once("](")?;
    let url = rest.strip_suffix(')')?;

    Some((title, url))
}
