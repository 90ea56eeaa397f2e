//! MIB lexer module.
//!
//! Tokenizes SMIv1/SMIv2 MIB source text into a stream of value-carrying
//! tokens with exact source positions.

mod token;

pub use token::{Position, Token, TokenKind};

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// A diagnostic message recorded for an [`Illegal`](TokenKind::Illegal) token.
///
/// The lexer never halts on bad input: it records a diagnostic, emits the
/// offending lexeme as an `Illegal` token, and keeps going. The parser
/// turns the first `Illegal` token it meets into a hard error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Location of the offending lexeme.
    pub position: Position,
    /// Human-readable message.
    pub message: String,
}

/// Saved cursor state, used to rewind after a failed ASN.1 tag scan.
#[derive(Clone, Copy)]
struct Cursor {
    pos: usize,
    line: u32,
    column: u32,
}

/// MIB lexer.
///
/// Whitespace and `--` comments are consumed between tokens and never
/// delivered. Multi-word keywords (`OBJECT IDENTIFIER`, `OCTET STRING`)
/// are recognized across intervening whitespace and comments. Once the
/// input is exhausted, [`next_token`](Lexer::next_token) returns
/// [`Eof`](TokenKind::Eof) indefinitely.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Filename, shared into every emitted [`Position`].
    file: Arc<str>,
    /// Current byte position.
    pos: usize,
    /// 1-based line of the current position.
    line: u32,
    /// 1-based byte column of the current position.
    column: u32,
    /// Collected diagnostics.
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source text.
    #[must_use]
    pub fn new(file: &str, source: &'src str) -> Self {
        Self {
            source,
            file: Arc::from(file),
            pos: 0,
            line: 1,
            column: 1,
            diagnostics: Vec::new(),
        }
    }

    /// Get a reference to collected diagnostics.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consume the lexer and return collected diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// The position of the next byte to be consumed.
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.file.clone(), self.pos as u32, self.line, self.column)
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.pos;
        let position = Lexer::position(self);

        let Some(c) = self.peek() else {
            return Token::new(TokenKind::Eof, String::new(), position);
        };

        match c {
            ':' => self.scan_assign(start, position),
            '.' => {
                self.advance();
                if self.peek() == Some('.') {
                    self.advance();
                    self.token(TokenKind::Range, start, position)
                } else {
                    self.token(TokenKind::Dot, start, position)
                }
            }
            '|' => self.single(TokenKind::Pipe, start, position),
            '{' => self.single(TokenKind::LBrace, start, position),
            '}' => self.single(TokenKind::RBrace, start, position),
            '(' => self.single(TokenKind::LParen, start, position),
            ')' => self.single(TokenKind::RParen, start, position),
            ',' => self.single(TokenKind::Comma, start, position),
            ';' => self.single(TokenKind::Semicolon, start, position),
            ']' => self.single(TokenKind::RBracket, start, position),
            // A `--` comment would have been consumed by skip_trivia, so a
            // dash here is always the minus token.
            '-' => self.single(TokenKind::Minus, start, position),
            '[' => self.scan_asn1_tag(start, position),
            '"' => self.scan_text(start, position),
            '\'' => self.scan_quoted_string(start, position),
            c if c.is_ascii_digit() => {
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
                self.token(TokenKind::Int, start, position)
            }
            c if c.is_alphabetic() => self.scan_identifier(start, position),
            c => {
                self.advance();
                self.error(position.clone(), &format!("illegal character {c:?}"));
                self.token(TokenKind::Illegal, start, position)
            }
        }
    }

    // === Cursor primitives ===

    /// The unconsumed remainder of the input.
    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Peek at the next character without advancing.
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Peek at the character after the next one.
    fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consume one character, updating line and column tracking.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += c.len_utf8() as u32;
        }
        Some(c)
    }

    /// Consume characters until the cursor reaches `end`.
    fn advance_to(&mut self, end: usize) {
        while self.pos < end {
            self.advance();
        }
    }

    fn snapshot(&self) -> Cursor {
        Cursor {
            pos: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    fn restore(&mut self, cursor: Cursor) {
        self.pos = cursor.pos;
        self.line = cursor.line;
        self.column = cursor.column;
    }

    /// Record a diagnostic for an illegal lexeme.
    fn error(&mut self, position: Position, message: &str) {
        self.diagnostics.push(Diagnostic {
            position,
            message: String::from(message),
        });
    }

    /// Build a token whose value is the source slice from `start`.
    fn token(&self, kind: TokenKind, start: usize, position: Position) -> Token {
        Token::new(kind, String::from(&self.source[start..self.pos]), position)
    }

    /// Consume one character and build its single-character token.
    fn single(&mut self, kind: TokenKind, start: usize, position: Position) -> Token {
        self.advance();
        self.token(kind, start, position)
    }

    // === Trivia ===

    /// Skip whitespace and `--` comments. Comments run to end of line.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('-') if self.peek_second() == Some('-') => {
                    self.advance();
                    self.advance();
                    while let Some(c) = self.advance() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                _ => break,
            }
        }
    }

    /// Skip whitespace only (inside ASN.1 tags).
    fn skip_spaces(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    // === Scanners ===

    /// `::=`, or an illegal `::` / `:` prefix.
    fn scan_assign(&mut self, start: usize, position: Position) -> Token {
        self.advance();
        if self.peek() == Some(':') {
            self.advance();
            if self.peek() == Some('=') {
                self.advance();
                return self.token(TokenKind::Assign, start, position);
            }
            self.error(position.clone(), "expected '=' after '::'");
            return self.token(TokenKind::Illegal, start, position);
        }
        self.error(position.clone(), "unexpected ':'");
        self.token(TokenKind::Illegal, start, position)
    }

    /// Identifier, or a multi-word keyword.
    fn scan_identifier(&mut self, start: usize, position: Position) -> Token {
        // Multi-word keywords span whitespace and comments between the
        // two words; if the second word is absent the first is an
        // ordinary identifier.
        if self.rest().starts_with("OBJECT") {
            if let Some(end) = self.multiword_end("OBJECT", "IDENTIFIER") {
                self.advance_to(end);
                return self.token(TokenKind::ObjectIdentifier, start, position);
            }
        }
        if self.rest().starts_with("OCTET") {
            if let Some(end) = self.multiword_end("OCTET", "STRING") {
                self.advance_to(end);
                return self.token(TokenKind::OctetString, start, position);
            }
        }

        self.advance();
        while let Some(c) = self.peek() {
            if c == '-' {
                // A dash starting a `--` comment ends the identifier.
                if self.peek_second() == Some('-') {
                    break;
                }
                self.advance();
            } else if c.is_alphanumeric() {
                self.advance();
            } else {
                break;
            }
        }
        self.token(TokenKind::Ident, start, position)
    }

    /// If the input at the cursor is `first`, then whitespace/comments,
    /// then `second`, return the byte offset just past `second`.
    fn multiword_end(&self, first: &str, second: &str) -> Option<usize> {
        let mut i = self.pos + first.len();
        loop {
            let rest = &self.source[i..];
            let c = rest.chars().next()?;
            if c.is_whitespace() {
                i += c.len_utf8();
                continue;
            }
            if c == '-' && rest[c.len_utf8()..].starts_with('-') {
                i += 2;
                while let Some(c) = self.source[i..].chars().next() {
                    i += c.len_utf8();
                    if c == '\n' {
                        break;
                    }
                }
                continue;
            }
            break;
        }
        self.source[i..].starts_with(second).then(|| i + second.len())
    }

    /// Double-quoted literal: `Text` with normalized content, or
    /// `ExtUtcTime` when the raw content is a timestamp.
    fn scan_text(&mut self, start: usize, position: Position) -> Token {
        self.advance(); // opening quote

        let mut content = String::new();
        let mut at_line_start = true;
        let mut last_was_space = false;

        loop {
            let Some(mut c) = self.advance() else {
                self.error(position.clone(), "unterminated string literal");
                return self.token(TokenKind::Illegal, start, position);
            };
            if c == '\\' {
                // `\"` and `\\` escapes; the escaped character is kept as-is.
                let Some(escaped) = self.advance() else {
                    self.error(position.clone(), "unterminated string literal");
                    return self.token(TokenKind::Illegal, start, position);
                };
                content.push(escaped);
                at_line_start = false;
                last_was_space = false;
                continue;
            }
            if c == '"' {
                break;
            }
            if c == '\r' {
                if self.peek() == Some('\n') {
                    continue; // CRLF: the LF is handled next iteration
                }
                c = ' '; // bare CR counts as inline whitespace
            }
            if c == '\n' {
                content.push('\n');
                at_line_start = true;
                last_was_space = false;
            } else if c == ' ' || c == '\t' {
                // Leading whitespace on a line is dropped; runs of inline
                // whitespace collapse to a single space.
                if !at_line_start && !last_was_space {
                    content.push(' ');
                    last_was_space = true;
                }
            } else {
                content.push(c);
                at_line_start = false;
                last_was_space = false;
            }
        }

        // The raw quoted content decides between Text and ExtUTCTime:
        // 10 or 12 digits plus a trailing Z.
        let raw = &self.source[start..self.pos];
        let inner = &raw[1..raw.len() - 1];
        if (inner.len() == 11 || inner.len() == 13)
            && inner.ends_with(['z', 'Z'])
            && inner[..inner.len() - 1].bytes().all(|b| b.is_ascii_digit())
        {
            let mut value = String::with_capacity(raw.len());
            value.push('"');
            value.push_str(&inner[..inner.len() - 1]);
            value.push('Z');
            value.push('"');
            return Token::new(TokenKind::ExtUtcTime, value, position);
        }

        while content.ends_with([' ', '\n', '\t']) {
            content.pop();
        }
        Token::new(TokenKind::Text, content, position)
    }

    /// Single-quoted literal: `HexString` or `BinString` depending on the
    /// mandatory suffix.
    fn scan_quoted_string(&mut self, start: usize, position: Position) -> Token {
        self.advance(); // opening quote

        loop {
            match self.peek() {
                Some('\'') => {
                    self.advance();
                    break;
                }
                None | Some('\n') => {
                    self.error(
                        position.clone(),
                        "unterminated or multi-line single-quoted string",
                    );
                    return self.token(TokenKind::Illegal, start, position);
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        let content = &self.source[start + 1..self.pos - 1];
        match self.peek() {
            Some('H' | 'h') => {
                self.advance();
                if content.bytes().all(|b| b.is_ascii_hexdigit()) {
                    self.token(TokenKind::HexString, start, position)
                } else {
                    self.error(position.clone(), "invalid character in hex string");
                    self.token(TokenKind::Illegal, start, position)
                }
            }
            Some('B' | 'b') => {
                self.advance();
                if content.bytes().all(|b| b == b'0' || b == b'1') {
                    self.token(TokenKind::BinString, start, position)
                } else {
                    self.error(position.clone(), "invalid character in binary string");
                    self.token(TokenKind::Illegal, start, position)
                }
            }
            suffix => {
                self.error(
                    position.clone(),
                    "missing 'H' or 'B' suffix on single-quoted string",
                );
                if suffix.is_some_and(|c| !c.is_whitespace()) {
                    self.advance();
                }
                self.token(TokenKind::Illegal, start, position)
            }
        }
    }

    /// `[APPLICATION n]`. Any deviation yields an `Illegal` token covering
    /// the consumed prefix; a lone `[` is rewound so the rest of the line
    /// lexes normally.
    fn scan_asn1_tag(&mut self, start: usize, position: Position) -> Token {
        self.advance(); // '['
        let after_bracket = self.snapshot();

        self.skip_spaces();
        if !self.rest().starts_with("APPLICATION") {
            self.error(position.clone(), "expected APPLICATION in ASN.1 tag");
            self.restore(after_bracket);
            return self.token(TokenKind::Illegal, start, position);
        }
        for _ in 0.."APPLICATION".len() {
            self.advance();
        }

        self.skip_spaces();
        if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.error(position.clone(), "expected tag number after APPLICATION");
            return self.token(TokenKind::Illegal, start, position);
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        self.skip_spaces();
        if self.peek() != Some(']') {
            self.error(position.clone(), "expected ']' to close ASN.1 tag");
            return self.token(TokenKind::Illegal, start, position);
        }
        self.advance();
        self.token(TokenKind::Asn1Tag, start, position)
    }
}

/// Iterator over tokens, ending after the first `Eof`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}
