use crate::token::Token;

/// Read position over one token stream, shared by every frame of a parse.
#[derive(Debug)]
pub(crate) struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Checkpoint(usize);

impl<'a> TokenCursor<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    pub(crate) fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;

        Some(token)
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> &'a [Token] {
        &self.tokens[self.pos..]
    }

    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub(crate) fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }
}

#[cfg(test)]
mod tests {
    use super::TokenCursor;
    use crate::token::Token;

    #[test]
    fn test_checkpoint_restore() {
        let tokens = vec![Token::text("a"), Token::text("b"), Token::text("c")];
        let mut cursor = TokenCursor::new(&tokens);

        assert_eq!(cursor.next(), Some(&tokens[0]));
        let checkpoint = cursor.checkpoint();
        assert_eq!(cursor.next(), Some(&tokens[1]));
        assert_eq!(cursor.next(), Some(&tokens[2]));
        assert_eq!(cursor.next(), None);

        cursor.restore(checkpoint);
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.remaining(), &tokens[1..]);
    }
}
