use thiserror::Error;

use crate::ast::{Token, TokenKind};

/// Raised by [`ensure_legal`] when the token stream holds an illegal token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("illegal token found: '{text}' at position {position}")]
    IllegalToken { text: String, position: usize },
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if accept(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    /// Reads a double-quoted run. Field names need no escapes, so the content
    /// is taken verbatim up to the closing quote.
    fn read_string(&mut self, start: usize) -> Token {
        self.advance(); // Consume opening quote
        let content = self.read_while(|c| c != '"');

        if self.current_char() == Some('"') {
            self.advance();
            Token::new(TokenKind::String, content, start)
        } else {
            Token::new(TokenKind::Illegal, format!("\"{}", content), start)
        }
    }

    fn single(&mut self, kind: TokenKind, ch: char, start: usize) -> Token {
        self.advance();
        Token::new(kind, ch.to_string(), start)
    }

    /// Returns the next token. Past the end of input this keeps returning
    /// [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.position;

        match self.current_char() {
            None => Token::new(TokenKind::Eof, "", start),
            Some(ch @ '.') => self.single(TokenKind::Dot, ch, start),
            Some(ch @ '[') => self.single(TokenKind::LBracket, ch, start),
            Some(ch @ ']') => self.single(TokenKind::RBracket, ch, start),
            Some(ch @ '{') => self.single(TokenKind::LBrace, ch, start),
            Some(ch @ '}') => self.single(TokenKind::RBrace, ch, start),
            Some(ch @ '|') => self.single(TokenKind::Pipe, ch, start),
            Some(ch @ ',') => self.single(TokenKind::Comma, ch, start),
            Some(ch @ ':') => self.single(TokenKind::Colon, ch, start),
            Some('"') => self.read_string(start),
            Some(ch) if ch.is_ascii_alphabetic() || ch == '_' => {
                let ident = self.read_while(|c| c.is_ascii_alphanumeric() || c == '_');
                Token::new(TokenKind::Ident, ident, start)
            }
            Some(ch) if ch.is_ascii_digit() => {
                let number = self.read_while(|c| c.is_ascii_digit());
                Token::new(TokenKind::Number, number, start)
            }
            Some(ch) => self.single(TokenKind::Illegal, ch, start),
        }
    }

    /// Consumes the lexer, returning every token up to and including `Eof`.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                break;
            }
        }
        log::debug!("lexed {} tokens", tokens.len());
        tokens
    }
}

/// Splits `text` into tokens, always ending with exactly one `Eof`.
///
/// Never fails: unknown characters become [`TokenKind::Illegal`] tokens.
///
/// ```
/// use gq::ast::TokenKind;
/// use gq::lexer::tokenize;
///
/// let kinds: Vec<_> = tokenize(".a[0]").into_iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Dot,
///         TokenKind::Ident,
///         TokenKind::LBracket,
///         TokenKind::Number,
///         TokenKind::RBracket,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<Token> {
    Lexer::new(text).tokenize()
}

/// Fails on the first illegal token, if any.
pub fn ensure_legal(tokens: &[Token]) -> Result<(), LexError> {
    match tokens.iter().find(|t| t.is(TokenKind::Illegal)) {
        Some(token) => Err(LexError::IllegalToken {
            text: token.text.clone(),
            position: token.position,
        }),
        None => Ok(()),
    }
}

#[test]
fn test_punctuation() {
    let mut lexer = Lexer::new("{a: .[]} | [.]");
    assert_eq!(lexer.next_token().kind, TokenKind::LBrace);
    assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "a", 1));
    assert_eq!(lexer.next_token().kind, TokenKind::Colon);
    assert_eq!(lexer.next_token().kind, TokenKind::Dot);
    assert_eq!(lexer.next_token().kind, TokenKind::LBracket);
    assert_eq!(lexer.next_token().kind, TokenKind::RBracket);
    assert_eq!(lexer.next_token().kind, TokenKind::RBrace);
    assert_eq!(lexer.next_token().kind, TokenKind::Pipe);
    assert_eq!(lexer.next_token().kind, TokenKind::LBracket);
    assert_eq!(lexer.next_token().kind, TokenKind::Dot);
    assert_eq!(lexer.next_token().kind, TokenKind::RBracket);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_unterminated_string_is_illegal() {
    let tokens = tokenize(".\"abc");
    assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "\"abc", 1));
    assert_eq!(
        ensure_legal(&tokens),
        Err(LexError::IllegalToken {
            text: "\"abc".to_string(),
            position: 1
        })
    );
}
