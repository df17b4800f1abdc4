use thiserror::Error;

use crate::ast::{Assign, IndexStep, Node, Token, TokenKind};

/// Errors raised while turning tokens into a syntax tree.
///
/// Parsing stops at the first error; there is no recovery.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at position {position}")]
    UnexpectedToken {
        expected: String,
        found: String,
        position: usize,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: String },

    #[error("invalid array index '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    #[error("unexpected trailing {found} at position {position}")]
    TrailingInput { found: String, position: usize },

    #[error("query nested deeper than {} levels at position {position}", MAX_DEPTH)]
    NestingTooDeep { position: usize },
}

/// Deepest syntax tree the parser builds. Each bracket, brace and pipe adds
/// one level; evaluation recurses once per level.
pub const MAX_DEPTH: usize = 256;

/// Recursive-descent parser over a token sequence.
///
/// ```text
/// Expr       := Term ( '|' Term )*
/// Term       := IndexChain | '[' Expr ']' | '{' Assign ( ',' Assign )* '}'
/// Assign     := ( IDENT | STRING ) ':' Expr
/// IndexChain := '.' ( '.' | IDENT | STRING | '[' ( ']' | NUMBER ']' | IDENT ']' | STRING ']' ) )*
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::Eof)) {
            let end = tokens
                .last()
                .map(|t| t.position + t.text.chars().count())
                .unwrap_or(0);
            tokens.push(Token::new(TokenKind::Eof, "", end));
        }
        Parser {
            tokens,
            position: 0,
            depth: 0,
        }
    }

    fn current_token(&self) -> &Token {
        // `new` guarantees a trailing Eof, and `advance` never moves past it.
        &self.tokens[self.position]
    }

    fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token().is(kind)
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current_token();
        if token.is(TokenKind::Eof) {
            ParseError::UnexpectedEof {
                expected: expected.to_string(),
            }
        } else {
            ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.to_string(),
                position: token.position,
            }
        }
    }

    /// Enters one more level of nesting at the current token.
    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ParseError::NestingTooDeep {
                position: self.current_token().position,
            });
        }
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&kind.to_string()))
        }
    }

    /// Parses exactly one expression spanning the whole token sequence.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        let expr = self.parse_expression()?;

        if !self.check(TokenKind::Eof) {
            let token = self.current_token();
            return Err(ParseError::TrailingInput {
                found: token.to_string(),
                position: token.position,
            });
        }

        Ok(expr)
    }

    /// Pipes fold to the left: `a | b | c` is `Pipe(Pipe(a, b), c)`.
    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        let mut expr = self.parse_term()?;
        let mut pipes = 0;

        // Every fold deepens the left spine of the tree.
        while self.check(TokenKind::Pipe) {
            self.descend()?;
            pipes += 1;
            self.advance();
            let right = self.parse_term()?;
            expr = Node::pipe(expr, right);
        }

        self.depth -= pipes;
        Ok(expr)
    }

    fn parse_term(&mut self) -> Result<Node, ParseError> {
        match self.current_token().kind {
            TokenKind::Dot => self.parse_index_chain(),
            TokenKind::LBracket => {
                self.descend()?;
                self.advance();
                let body = self.parse_expression()?;
                self.expect(TokenKind::RBracket)?;
                self.depth -= 1;
                Ok(Node::Array(Box::new(body)))
            }
            TokenKind::LBrace => self.parse_object(),
            _ => Err(self.unexpected("'.', '[' or '{'")),
        }
    }

    fn parse_index_chain(&mut self) -> Result<Node, ParseError> {
        self.expect(TokenKind::Dot)?;

        let mut steps = Vec::new();
        let mut after_dot = true;

        loop {
            match self.current_token().kind {
                TokenKind::Dot => {
                    self.advance();
                    if after_dot {
                        steps.push(IndexStep::Root);
                    }
                    after_dot = true;
                }
                TokenKind::Ident | TokenKind::String => {
                    let token = self.advance();
                    steps.push(IndexStep::Field(token.text));
                    after_dot = false;
                }
                TokenKind::LBracket => {
                    self.advance();
                    steps.push(self.parse_bracket_step()?);
                    after_dot = false;
                }
                _ => break,
            }
        }

        if steps.is_empty() {
            steps.push(IndexStep::Root);
        }

        Ok(Node::Index(steps))
    }

    /// Parses what follows `[` inside an index chain.
    fn parse_bracket_step(&mut self) -> Result<IndexStep, ParseError> {
        let step = match self.current_token().kind {
            TokenKind::RBracket => {
                self.advance();
                return Ok(IndexStep::Iterate);
            }
            TokenKind::Number => {
                let token = self.advance();
                let index = token
                    .text
                    .parse::<usize>()
                    .map_err(|_| ParseError::InvalidNumber {
                        text: token.text.clone(),
                        position: token.position,
                    })?;
                IndexStep::Element(index)
            }
            TokenKind::Ident | TokenKind::String => IndexStep::Field(self.advance().text),
            _ => return Err(self.unexpected("']', number, identifier or string")),
        };

        self.expect(TokenKind::RBracket)?;
        Ok(step)
    }

    fn parse_object(&mut self) -> Result<Node, ParseError> {
        self.descend()?;
        self.expect(TokenKind::LBrace)?;

        let mut assigns = vec![self.parse_assign()?];
        while self.check(TokenKind::Comma) {
            self.advance();
            assigns.push(self.parse_assign()?);
        }

        if !self.check(TokenKind::RBrace) {
            return Err(self.unexpected("',' or '}'"));
        }
        self.advance();
        self.depth -= 1;

        Ok(Node::Object(assigns))
    }

    fn parse_assign(&mut self) -> Result<Assign, ParseError> {
        let key = match self.current_token().kind {
            TokenKind::Ident | TokenKind::String => self.advance().text,
            _ => return Err(self.unexpected("object key")),
        };

        self.expect(TokenKind::Colon)?;
        let value = self.parse_expression()?;

        Ok(Assign::new(key, value))
    }
}

/// Parses a full token sequence (as produced by [`crate::lexer::tokenize`]).
pub fn parse(tokens: Vec<Token>) -> Result<Node, ParseError> {
    let node = Parser::new(tokens).parse()?;
    log::debug!("parsed query: {:?}", node);
    Ok(node)
}
