use std::fmt;

/// The kind of a lexical token.
///
/// Every punctuation kind is exactly one character; the language has no
/// two-character operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Dot, starts an index chain or separates its segments
    ///
    /// # Examples
    /// ```text
    /// .
    /// .a.b
    /// ```
    Dot,

    /// Left bracket, used for array construction and bracketed indexing
    ///
    /// # Examples
    /// ```text
    /// [.[]]
    /// .[0]
    /// .["key"]
    /// ```
    LBracket,

    /// Right bracket
    RBracket,

    /// Left brace for object construction
    ///
    /// # Examples
    /// ```text
    /// {name: .user.name}
    /// ```
    LBrace,

    /// Right brace
    RBrace,

    /// Pipeline operator
    ///
    /// # Examples
    /// ```text
    /// .[] | .name
    /// ```
    Pipe,

    /// Separates fields of an object constructor
    Comma,

    /// Separates an object key from its value expression
    Colon,

    /// Field name
    ///
    /// Starts with a letter or underscore, followed by letters, digits, or
    /// underscores.
    ///
    /// # Examples
    /// ```text
    /// user
    /// item_count
    /// _internal
    /// ```
    Ident,

    /// Unsigned integer literal (array index)
    Number,

    /// Double-quoted field name; the token text has the quotes stripped
    ///
    /// # Examples
    /// ```text
    /// "first name"
    /// ```
    String,

    /// End of input
    Eof,

    /// Character (or unterminated string) the lexer could not recognize
    Illegal,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Dot => "'.'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Pipe => "'|'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Ident => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Eof => "end of input",
            TokenKind::Illegal => "illegal token",
        };
        f.write_str(name)
    }
}

/// A token together with its source text and character offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Number | TokenKind::Illegal => {
                write!(f, "{} '{}'", self.kind, self.text)
            }
            TokenKind::String => write!(f, "string \"{}\"", self.text),
            _ => write!(f, "{}", self.kind),
        }
    }
}
