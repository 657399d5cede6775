use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MfmNode {
    Text {
        value: String,
    },
    Bold {
        children: Vec<MfmNode>,
    },
    Italic {
        children: Vec<MfmNode>,
    },
    Strike {
        children: Vec<MfmNode>,
    },
    Big {
        children: Vec<MfmNode>,
    },
    Center {
        children: Vec<MfmNode>,
    },
    Small {
        children: Vec<MfmNode>,
    },
    Quote {
        level: QuoteLevel,
        children: Vec<MfmNode>,
    },
    /// `$[props ...]`. `props` is the raw `name.key=value,...` string.
    Function {
        props: String,
        children: Vec<MfmNode>,
    },
    EmojiCode {
        name: String,
    },
    Mention {
        value: String,
    },
    Url {
        value: String,
    },
    UrlWithTitle {
        url: String,
        children: Vec<MfmNode>,
    },
    InlineCode {
        children: Vec<MfmNode>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuoteLevel {
    Level1,
    Level2,
}

impl MfmNode {
    pub fn text(value: impl Into<String>) -> Self {
        MfmNode::Text {
            value: value.into(),
        }
    }

    /// Whether a renderer can lay the node out inside a line.
    pub fn is_inline(&self) -> bool {
        match self {
            MfmNode::Center { .. }
            | MfmNode::Small { .. }
            | MfmNode::Big { .. }
            | MfmNode::Function { .. } => false,
            MfmNode::Text { .. }
            | MfmNode::Bold { .. }
            | MfmNode::Italic { .. }
            | MfmNode::Strike { .. }
            | MfmNode::Quote { .. }
            | MfmNode::EmojiCode { .. }
            | MfmNode::Mention { .. }
            | MfmNode::Url { .. }
            | MfmNode::UrlWithTitle { .. }
            | MfmNode::InlineCode { .. } => true,
        }
    }

    pub fn children(&self) -> &[MfmNode] {
        match self {
            MfmNode::Bold { children }
            | MfmNode::Italic { children }
            | MfmNode::Strike { children }
            | MfmNode::Big { children }
            | MfmNode::Center { children }
            | MfmNode::Small { children }
            | MfmNode::Quote { children, .. }
            | MfmNode::Function { children, .. }
            | MfmNode::UrlWithTitle { children, .. }
            | MfmNode::InlineCode { children } => children,
            MfmNode::Text { .. }
            | MfmNode::EmojiCode { .. }
            | MfmNode::Mention { .. }
            | MfmNode::Url { .. } => &[],
        }
    }

    /// Concatenation of every `Text` value below this node, in order.
    pub fn plain_text(&self) -> String {
        match self {
            MfmNode::Text { value } => value.clone(),
            _ => self.children().iter().map(MfmNode::plain_text).collect(),
        }
    }

    /// Function name. Same as the raw props for now.
    pub fn name(&self) -> Option<&str> {
        match self {
            MfmNode::Function { props, .. } => Some(props.as_str()),
            _ => None,
        }
    }

    // TODO: split `props` into name and arguments once the `$[name.k=v]`
    // argument grammar is pinned down.
    pub fn args(&self) -> &[String] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::{MfmNode, QuoteLevel};

    #[test]
    fn test_is_inline() {
        assert!(MfmNode::text("a").is_inline());
        assert!(MfmNode::Quote {
            level: QuoteLevel::Level1,
            children: vec![],
        }
        .is_inline());
        assert!(!MfmNode::Center { children: vec![] }.is_inline());
        assert!(!MfmNode::Function {
            props: "x2".to_string(),
            children: vec![],
        }
        .is_inline());
    }

    #[test]
    fn test_plain_text() {
        let node = MfmNode::Bold {
            children: vec![
                MfmNode::text("a"),
                MfmNode::Italic {
                    children: vec![MfmNode::text("b")],
                },
                MfmNode::EmojiCode {
                    name: "smile".to_string(),
                },
                MfmNode::text("c"),
            ],
        };
        assert_eq!(node.plain_text(), "abc");
    }

    #[test]
    fn test_serialize() {
        let node = MfmNode::Bold {
            children: vec![MfmNode::text("abc")],
        };
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"type":"bold","children":[{"type":"text","value":"abc"}]}"#
        );
    }

    #[test]
    fn test_serialize_quote_level() {
        let node = MfmNode::Quote {
            level: QuoteLevel::Level2,
            children: vec![MfmNode::text("a\n")],
        };
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            r#"{"type":"quote","level":"level2","children":[{"type":"text","value":"a\n"}]}"#
        );
    }
}
