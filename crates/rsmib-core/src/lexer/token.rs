//! Token types and source positions.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

/// Source position of a token or AST node.
///
/// `line` and `column` are 1-based; `column` counts bytes from the start
/// of the line. All positions produced from one input share the same
/// filename allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    /// Name of the source file.
    pub file: Arc<str>,
    /// Byte offset from the start of the input.
    pub offset: u32,
    /// 1-based line number.
    pub line: u32,
    /// 1-based byte column within the line.
    pub column: u32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub fn new(file: Arc<str>, offset: u32, line: u32, column: u32) -> Self {
        Self {
            file,
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Token with kind, lexeme value, and source position.
///
/// The `value` holds the lexeme, with the transformations described on
/// each [`TokenKind`] variant applied (quote stripping and whitespace
/// normalization for `Text`, suffix upper-casing for `ExtUtcTime`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The lexeme, post-normalization.
    pub value: String,
    /// Location of the first byte of the lexeme.
    pub position: Position,
}

impl Token {
    /// Create a new token.
    #[must_use]
    pub fn new(kind: TokenKind, value: String, position: Position) -> Self {
        Self {
            kind,
            value,
            position,
        }
    }
}

/// Token kinds.
///
/// Keywords are not distinguished here: they are lexed as [`Ident`] and
/// recognized by the parser in context, which is what lets MIB authors
/// import symbols such as `APPLICATION-SPECIFIC-MIB` without clashing
/// with the grammar.
///
/// [`Ident`]: TokenKind::Ident
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Returned indefinitely once reached.
    Eof,
    /// Lexical error; the value carries the offending lexeme.
    Illegal,
    /// Run of whitespace. Consumed between tokens, never delivered.
    Whitespace,
    /// `--` comment to end of line. Consumed between tokens, never delivered.
    Comment,

    // === Literals ===
    /// Identifier: `letter (letter | digit | '-')*`.
    Ident,
    /// Unsigned decimal integer.
    Int,
    /// Double-quoted text, quotes stripped and whitespace normalized.
    Text,
    /// Hex string `'0AF1'H`, lexeme kept intact including quotes and suffix.
    HexString,
    /// Binary string `'0110'B`, lexeme kept intact including quotes and suffix.
    BinString,
    /// Quoted timestamp like `"202404300000Z"`, quotes kept, suffix upper-cased.
    ExtUtcTime,
    /// ASN.1 application tag `[APPLICATION n]`.
    Asn1Tag,

    // === Multi-word keywords ===
    /// `OBJECT IDENTIFIER`, spanning intervening whitespace and comments.
    ObjectIdentifier,
    /// `OCTET STRING`, spanning intervening whitespace and comments.
    OctetString,

    // === Punctuation ===
    /// `::=`
    Assign,
    /// `..`
    Range,
    /// `|`
    Pipe,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Eof => "end of input",
            Self::Illegal => "illegal token",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::Ident => "identifier",
            Self::Int => "integer",
            Self::Text => "text",
            Self::HexString => "hex string",
            Self::BinString => "binary string",
            Self::ExtUtcTime => "UTC time",
            Self::Asn1Tag => "ASN.1 tag",
            Self::ObjectIdentifier => "OBJECT IDENTIFIER",
            Self::OctetString => "OCTET STRING",
            Self::Assign => "'::='",
            Self::Range => "'..'",
            Self::Pipe => "'|'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Dot => "'.'",
            Self::Minus => "'-'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
