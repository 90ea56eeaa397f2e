//! MIB parser module.
//!
//! Parses SMIv1/SMIv2 MIB source text into a typed [`Module`] AST.
//!
//! The parser is hand-written recursive descent with a single token of
//! lookahead. It halts on the first grammar mismatch; MIB syntax is
//! dense enough that speculative recovery mostly produces cascading
//! noise, so none is attempted. Semantic validation (cross-references,
//! range well-formedness, duplicate OIDs) is the resolver's job:
//! invalid-but-syntactic input parses fine.

use crate::ast::{
    Access, AgentCapabilities, CapabilitiesModule, Compliance, ComplianceGroup, ComplianceModule,
    ComplianceObject, Date, Identifier, Implicit, Import, IndexEntry, Macro, MacroBody, Module,
    ModuleBody, ModuleCompliance, ModuleIdentity, NamedNumber, Node, NodeKind, NotificationGroup,
    NotificationType, ObjectGroup, ObjectIdentity, ObjectType, Oid, Range, Revision, Sequence,
    SequenceEntry, SequenceKind, Status, SubIdentifier, SubType, Syntax, SyntaxConstraint,
    SyntaxType, TextualConvention, TrapType, Type, TypeBody, Variation,
};
use crate::lexer::{Lexer, Position, Token, TokenKind};
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Statuses legal on SMIv1-era clauses (OBJECT-TYPE).
const STATUS_SMI_V1: &[Status] = &[
    Status::Mandatory,
    Status::Optional,
    Status::Current,
    Status::Deprecated,
    Status::Obsolete,
];

/// Statuses legal on SMIv2-only macros.
const STATUS_SMI_V2: &[Status] = &[Status::Current, Status::Deprecated, Status::Obsolete];

/// Access values legal on OBJECT-TYPE.
const ACCESS_OBJECT_TYPE: &[Access] = &[
    Access::NotAccessible,
    Access::AccessibleForNotify,
    Access::ReadOnly,
    Access::ReadWrite,
    Access::ReadCreate,
    Access::WriteOnly,
];

/// Access values legal on compliance MIN-ACCESS.
const ACCESS_MIN: &[Access] = &[
    Access::NotAccessible,
    Access::AccessibleForNotify,
    Access::ReadOnly,
    Access::ReadWrite,
    Access::ReadCreate,
];

/// Access values legal on capability variations.
const ACCESS_VARIATION: &[Access] = &[
    Access::WriteOnly,
    Access::NotImplemented,
    Access::AccessibleForNotify,
    Access::ReadOnly,
    Access::ReadWrite,
    Access::ReadCreate,
];

/// A grammar mismatch, reported at the first offending token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    /// Where the mismatch happened.
    pub position: Position,
    /// What was expected and what was found.
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Parse a complete MIB module from source text.
///
/// `file` is used for positions in the AST and in error messages.
///
/// ```
/// let module = rsmib_core::parser::parse(
///     "TEST-MIB.mib",
///     "TEST-MIB DEFINITIONS ::= BEGIN testOid OBJECT IDENTIFIER ::= { iso 3 } END",
/// )
/// .unwrap();
/// assert_eq!(module.name.as_str(), "TEST-MIB");
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] on the first lexical or grammatical
/// mismatch. Partial ASTs are not returned.
pub fn parse(file: &str, source: &str) -> Result<Module, ParseError> {
    Parser::new(file, source).parse_module()
}

/// MIB parser over a token stream.
struct Parser<'src> {
    lexer: Lexer<'src>,
    /// Single-token lookahead buffer.
    current: Token,
}

impl<'src> Parser<'src> {
    fn new(file: &str, source: &'src str) -> Self {
        let mut lexer = Lexer::new(file, source);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    // === Token access ===

    /// Consume the current token and pull the next one.
    fn bump(&mut self) -> Token {
        let next = self.lexer.next_token();
        core::mem::replace(&mut self.current, next)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Keywords are lexed as identifiers; match one by its literal.
    fn check_keyword(&self, keyword: &str) -> bool {
        self.current.kind == TokenKind::Ident && self.current.value == keyword
    }

    fn accept(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.bump())
        } else {
            None
        }
    }

    fn accept_keyword(&mut self, keyword: &str) -> bool {
        if self.check_keyword(keyword) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.bump())
        } else {
            Err(self.error_expected(kind.name()))
        }
    }

    fn expect_described(&mut self, kind: TokenKind, what: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.bump())
        } else {
            Err(self.error_expected(what))
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<Token, ParseError> {
        if self.check_keyword(keyword) {
            Ok(self.bump())
        } else {
            Err(self.error_expected(&format!("`{keyword}`")))
        }
    }

    // === Errors ===

    fn error_expected(&self, expected: &str) -> ParseError {
        if self.current.kind == TokenKind::Illegal {
            return self.illegal_error();
        }
        ParseError {
            position: self.current.position.clone(),
            message: format!("expected {}, got {}", expected, describe(&self.current)),
        }
    }

    /// Turn the current `Illegal` token into an error, reusing the
    /// lexer's diagnostic for it when one was recorded.
    fn illegal_error(&self) -> ParseError {
        let message = self
            .lexer
            .diagnostics()
            .iter()
            .rev()
            .find(|d| d.position == self.current.position)
            .map(|d| d.message.clone())
            .unwrap_or_else(|| format!("illegal token `{}`", self.current.value));
        ParseError {
            position: self.current.position.clone(),
            message,
        }
    }

    // === Module structure ===

    /// `Module := Ident 'DEFINITIONS' '::=' 'BEGIN' ModuleBody 'END'`
    fn parse_module(mut self) -> Result<Module, ParseError> {
        let name_token = self.expect_described(TokenKind::Ident, "a module name")?;
        let position = name_token.position.clone();
        let name = Identifier::from(name_token.value);

        self.expect_keyword("DEFINITIONS")?;
        self.expect(TokenKind::Assign)?;
        self.expect_keyword("BEGIN")?;

        let body = self.parse_module_body()?;

        self.expect_keyword("END")?;
        if !self.check(TokenKind::Eof) {
            return Err(self.error_expected("end of input after `END`"));
        }

        Ok(Module {
            name,
            body,
            position,
        })
    }

    fn parse_module_body(&mut self) -> Result<ModuleBody, ParseError> {
        let mut body = ModuleBody::default();

        if self.accept_keyword("EXPORTS") {
            body.exports = self.parse_exports()?;
        }
        if self.accept_keyword("IMPORTS") {
            body.imports = self.parse_imports()?;
        }

        while !self.check_keyword("END") && !self.check(TokenKind::Eof) {
            self.parse_body_item(&mut body)?;
        }
        Ok(body)
    }

    /// `ExportsClause := 'EXPORTS' Ident (',' Ident)* ';'`
    fn parse_exports(&mut self) -> Result<Vec<Identifier>, ParseError> {
        let mut names = vec![Identifier::from(
            self.expect_described(TokenKind::Ident, "an exported name")?.value,
        )];
        while self.accept(TokenKind::Comma).is_some() {
            names.push(Identifier::from(
                self.expect_described(TokenKind::Ident, "an exported name")?.value,
            ));
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(names)
    }

    /// `ImportsClause := 'IMPORTS' (Ident (',' Ident)* 'FROM' Ident)+ ';'`
    ///
    /// Every `FROM` group becomes one [`Import`], in source order.
    fn parse_imports(&mut self) -> Result<Vec<Import>, ParseError> {
        let mut imports = Vec::new();
        loop {
            let first = self.expect_described(TokenKind::Ident, "an imported name")?;
            let position = first.position.clone();
            let mut names = vec![Identifier::from(first.value)];
            while self.accept(TokenKind::Comma).is_some() {
                names.push(Identifier::from(
                    self.expect_described(TokenKind::Ident, "an imported name")?.value,
                ));
            }
            self.expect_keyword("FROM")?;
            let module = Identifier::from(
                self.expect_described(TokenKind::Ident, "a module name")?.value,
            );
            imports.push(Import {
                names,
                module,
                position,
            });

            if self.accept(TokenKind::Semicolon).is_some() {
                break;
            }
        }
        Ok(imports)
    }

    /// One definition: a MACRO, a type assignment, or an OID-bearing node.
    fn parse_body_item(&mut self, body: &mut ModuleBody) -> Result<(), ParseError> {
        let name_token = self.expect_described(TokenKind::Ident, "a definition name")?;
        let position = name_token.position.clone();
        let name = Identifier::from(name_token.value);

        if self.check_keyword("MACRO") {
            let definition = self.parse_macro(name, position)?;
            body.macros.push(definition);
            return Ok(());
        }

        if self.accept(TokenKind::Assign).is_some() {
            let definition = self.parse_type_body(name, position)?;
            body.types.push(definition);
            return Ok(());
        }

        if self.accept(TokenKind::ObjectIdentifier).is_some() {
            self.expect(TokenKind::Assign)?;
            let oid = self.parse_oid_value()?;
            body.nodes.push(Node {
                name,
                oid: Some(oid),
                position,
                kind: NodeKind::OidAssignment,
            });
            return Ok(());
        }

        if self.check_keyword("MODULE-IDENTITY") {
            let identity = self.parse_module_identity(name, position)?;
            if body.identity.is_none() {
                body.identity = Some(identity);
            } else {
                body.nodes.push(Node {
                    name: identity.name.clone(),
                    oid: identity.oid.clone(),
                    position: identity.position.clone(),
                    kind: NodeKind::ModuleIdentity(identity),
                });
            }
            return Ok(());
        }

        let (kind, oid) = if self.check_keyword("OBJECT-IDENTITY") {
            let (definition, oid) = self.parse_object_identity()?;
            (NodeKind::ObjectIdentity(definition), Some(oid))
        } else if self.check_keyword("OBJECT-TYPE") {
            let (definition, oid) = self.parse_object_type()?;
            (NodeKind::ObjectType(definition), Some(oid))
        } else if self.check_keyword("NOTIFICATION-TYPE") {
            let (definition, oid) = self.parse_notification_type()?;
            (NodeKind::NotificationType(definition), Some(oid))
        } else if self.check_keyword("TRAP-TYPE") {
            (NodeKind::TrapType(self.parse_trap_type()?), None)
        } else if self.check_keyword("OBJECT-GROUP") {
            let (definition, oid) = self.parse_object_group()?;
            (NodeKind::ObjectGroup(definition), Some(oid))
        } else if self.check_keyword("NOTIFICATION-GROUP") {
            let (definition, oid) = self.parse_notification_group()?;
            (NodeKind::NotificationGroup(definition), Some(oid))
        } else if self.check_keyword("MODULE-COMPLIANCE") {
            let (definition, oid) = self.parse_module_compliance()?;
            (NodeKind::ModuleCompliance(definition), Some(oid))
        } else if self.check_keyword("AGENT-CAPABILITIES") {
            let (definition, oid) = self.parse_agent_capabilities()?;
            (NodeKind::AgentCapabilities(definition), Some(oid))
        } else {
            return Err(self.error_expected("a macro keyword, `OBJECT IDENTIFIER`, or `::=`"));
        };

        body.nodes.push(Node {
            name,
            oid,
            position,
            kind,
        });
        Ok(())
    }

    // === Shared clause parsers ===

    /// Consume a Text token and return its normalized content.
    fn parse_text(&mut self) -> Result<String, ParseError> {
        Ok(self.expect_described(TokenKind::Text, "quoted text")?.value)
    }

    /// Consume an ExtUTCTime token and return it without quotes.
    fn parse_date(&mut self) -> Result<Date, ParseError> {
        let token = self.expect_described(TokenKind::ExtUtcTime, "a UTC time literal")?;
        let value = &token.value[1..token.value.len() - 1];
        Ok(Date(String::from(value)))
    }

    /// Consume a status identifier from the allowed set.
    fn parse_status(&mut self, allowed: &[Status]) -> Result<Status, ParseError> {
        if self.check(TokenKind::Ident) {
            if let Some(status) = Status::from_keyword(&self.current.value) {
                if allowed.contains(&status) {
                    self.bump();
                    return Ok(status);
                }
            }
        }
        Err(self.error_expected("a status value"))
    }

    /// Consume an access identifier from the allowed set.
    fn parse_access(&mut self, allowed: &[Access]) -> Result<Access, ParseError> {
        if self.check(TokenKind::Ident) {
            if let Some(access) = Access::from_keyword(&self.current.value) {
                if allowed.contains(&access) {
                    self.bump();
                    return Ok(access);
                }
            }
        }
        Err(self.error_expected("an access value"))
    }

    /// `'{' Ident (',' Ident)* ','? '}'`, used for OBJECTS,
    /// NOTIFICATIONS, VARIABLES, INCLUDES, MANDATORY-GROUPS, and
    /// CREATION-REQUIRES lists, all of which tolerate a trailing comma.
    fn parse_identifier_list(&mut self) -> Result<Vec<Identifier>, ParseError> {
        self.expect(TokenKind::LBrace)?;
        let mut names = vec![Identifier::from(
            self.expect_described(TokenKind::Ident, "a name")?.value,
        )];
        while self.accept(TokenKind::Comma).is_some() {
            if self.check(TokenKind::RBrace) {
                break;
            }
            names.push(Identifier::from(
                self.expect_described(TokenKind::Ident, "a name")?.value,
            ));
        }
        self.expect(TokenKind::RBrace)?;
        Ok(names)
    }

    /// The `{ ... }` OID value of an assignment. At least one
    /// sub-identifier; commas are not part of this grammar.
    fn parse_oid_value(&mut self) -> Result<Oid, ParseError> {
        let open = self.expect(TokenKind::LBrace)?;
        let position = open.position;

        let mut sub_identifiers = Vec::new();
        loop {
            match self.current.kind {
                TokenKind::Int => {
                    let token = self.bump();
                    sub_identifiers.push(SubIdentifier::Number(self.parse_sub_id(&token)?));
                }
                TokenKind::Ident => {
                    let token = self.bump();
                    let name = Identifier::from(token.value);
                    if self.accept(TokenKind::LParen).is_some() {
                        let number_token =
                            self.expect_described(TokenKind::Int, "a sub-identifier number")?;
                        let number = self.parse_sub_id(&number_token)?;
                        self.expect(TokenKind::RParen)?;
                        sub_identifiers.push(SubIdentifier::NamedNumber { name, number });
                    } else {
                        sub_identifiers.push(SubIdentifier::Name(name));
                    }
                }
                TokenKind::RBrace if !sub_identifiers.is_empty() => {
                    self.bump();
                    break;
                }
                _ => return Err(self.error_expected("a sub-identifier")),
            }
        }
        Ok(Oid {
            sub_identifiers,
            position,
        })
    }

    fn parse_sub_id(&self, token: &Token) -> Result<u32, ParseError> {
        token.value.parse().map_err(|_| ParseError {
            position: token.position.clone(),
            message: format!("sub-identifier `{}` out of range", token.value),
        })
    }

    /// `'::=' '{' oid '}'` finishing a macro instance.
    fn parse_oid_assignment(&mut self) -> Result<Oid, ParseError> {
        self.expect(TokenKind::Assign)?;
        self.parse_oid_value()
    }

    // === Type syntax ===

    /// SYNTAX clause value: `SEQUENCE OF <entry>` or a [`SyntaxType`].
    fn parse_syntax(&mut self) -> Result<Syntax, ParseError> {
        if self.check_keyword("SEQUENCE") {
            self.bump();
            self.expect_keyword("OF")?;
            let entry = self.expect_described(TokenKind::Ident, "an entry type name")?;
            return Ok(Syntax::SequenceOf(Identifier::from(entry.value)));
        }
        Ok(Syntax::Type(self.parse_syntax_type()?))
    }

    /// Type reference with optional refinement:
    /// `Name`, `Name (0..7)`, `Name (SIZE (0..63))`, `Name { a(0), b(1) }`.
    fn parse_syntax_type(&mut self) -> Result<SyntaxType, ParseError> {
        let (name, position) = match self.current.kind {
            TokenKind::ObjectIdentifier => {
                let token = self.bump();
                (Identifier::from("OBJECT IDENTIFIER"), token.position)
            }
            TokenKind::OctetString => {
                let token = self.bump();
                (Identifier::from("OCTET STRING"), token.position)
            }
            TokenKind::Ident => {
                let token = self.bump();
                let position = token.position;
                (Identifier::from(token.value), position)
            }
            _ => return Err(self.error_expected("a type name")),
        };

        let constraint = if self.accept(TokenKind::LParen).is_some() {
            let sub_type = self.parse_sub_type()?;
            self.expect(TokenKind::RParen)?;
            Some(SyntaxConstraint::SubType(sub_type))
        } else if self.check(TokenKind::LBrace) {
            Some(SyntaxConstraint::Enum(self.parse_named_numbers()?))
        } else {
            None
        };

        Ok(SyntaxType {
            name,
            constraint,
            position,
        })
    }

    /// Constraint inside parentheses: `SIZE ( ranges )` or ranges.
    fn parse_sub_type(&mut self) -> Result<SubType, ParseError> {
        if self.accept_keyword("SIZE") {
            self.expect(TokenKind::LParen)?;
            let ranges = self.parse_ranges()?;
            self.expect(TokenKind::RParen)?;
            Ok(SubType::Size(ranges))
        } else {
            Ok(SubType::Integer(self.parse_ranges()?))
        }
    }

    fn parse_ranges(&mut self) -> Result<Vec<Range>, ParseError> {
        let mut ranges = vec![self.parse_range()?];
        while self.accept(TokenKind::Pipe).is_some() {
            ranges.push(self.parse_range()?);
        }
        Ok(ranges)
    }

    fn parse_range(&mut self) -> Result<Range, ParseError> {
        let start = self.parse_range_value()?;
        let end = if self.accept(TokenKind::Range).is_some() {
            Some(self.parse_range_value()?)
        } else {
            None
        };
        Ok(Range { start, end })
    }

    /// Range endpoints keep their lexemes: signed integers, hex/binary
    /// strings, and identifiers (`MIN`, `MAX`) all pass through for the
    /// resolver to interpret.
    fn parse_range_value(&mut self) -> Result<String, ParseError> {
        match self.current.kind {
            TokenKind::Minus => {
                self.bump();
                let int = self.expect_described(TokenKind::Int, "an integer after '-'")?;
                Ok(format!("-{}", int.value))
            }
            TokenKind::Int | TokenKind::HexString | TokenKind::BinString | TokenKind::Ident => {
                Ok(self.bump().value)
            }
            _ => Err(self.error_expected("a range value")),
        }
    }

    /// `'{' label '(' value ')' (',' ...)* ','? '}'`
    fn parse_named_numbers(&mut self) -> Result<Vec<NamedNumber>, ParseError> {
        self.expect(TokenKind::LBrace)?;
        let mut values = vec![self.parse_named_number()?];
        while self.accept(TokenKind::Comma).is_some() {
            if self.check(TokenKind::RBrace) {
                break;
            }
            values.push(self.parse_named_number()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(values)
    }

    fn parse_named_number(&mut self) -> Result<NamedNumber, ParseError> {
        let name = self.expect_described(TokenKind::Ident, "a label")?;
        self.expect(TokenKind::LParen)?;
        let value = match self.current.kind {
            TokenKind::Minus => {
                self.bump();
                let int = self.expect_described(TokenKind::Int, "an integer after '-'")?;
                format!("-{}", int.value)
            }
            TokenKind::Int => self.bump().value,
            _ => return Err(self.error_expected("a number")),
        };
        self.expect(TokenKind::RParen)?;
        Ok(NamedNumber {
            name: Identifier::from(name.value),
            value,
        })
    }

    // === Type assignments ===

    /// Body after `Name ::=`.
    fn parse_type_body(&mut self, name: Identifier, position: Position) -> Result<Type, ParseError> {
        let body = if self.accept_keyword("TEXTUAL-CONVENTION") {
            TypeBody::TextualConvention(self.parse_textual_convention()?)
        } else if self.check_keyword("SEQUENCE") || self.check_keyword("CHOICE") {
            TypeBody::Sequence(self.parse_sequence()?)
        } else if self.check(TokenKind::Asn1Tag) {
            let tag = self.bump().value;
            self.expect_keyword("IMPLICIT")?;
            TypeBody::Implicit(Implicit {
                tag,
                syntax: self.parse_syntax_type()?,
            })
        } else {
            TypeBody::Syntax(self.parse_syntax_type()?)
        };
        Ok(Type {
            name,
            body,
            position,
        })
    }

    fn parse_textual_convention(&mut self) -> Result<TextualConvention, ParseError> {
        let display_hint = if self.accept_keyword("DISPLAY-HINT") {
            Some(self.parse_text()?)
        } else {
            None
        };
        self.expect_keyword("STATUS")?;
        let status = self.parse_status(STATUS_SMI_V2)?;
        self.expect_keyword("DESCRIPTION")?;
        let description = self.parse_text()?;
        let reference = if self.accept_keyword("REFERENCE") {
            Some(self.parse_text()?)
        } else {
            None
        };
        self.expect_keyword("SYNTAX")?;
        let syntax = self.parse_syntax_type()?;
        Ok(TextualConvention {
            display_hint,
            status,
            description,
            reference,
            syntax,
        })
    }

    /// `('SEQUENCE' | 'CHOICE') '{' descriptor syntax (',' ...)* ','? '}'`
    fn parse_sequence(&mut self) -> Result<Sequence, ParseError> {
        let kind = if self.accept_keyword("CHOICE") {
            SequenceKind::Choice
        } else {
            self.expect_keyword("SEQUENCE")?;
            SequenceKind::Sequence
        };
        self.expect(TokenKind::LBrace)?;
        let mut entries = vec![self.parse_sequence_entry()?];
        while self.accept(TokenKind::Comma).is_some() {
            if self.check(TokenKind::RBrace) {
                break;
            }
            entries.push(self.parse_sequence_entry()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(Sequence { kind, entries })
    }

    fn parse_sequence_entry(&mut self) -> Result<SequenceEntry, ParseError> {
        let descriptor = self.expect_described(TokenKind::Ident, "a field descriptor")?;
        let syntax = self.parse_syntax_type()?;
        Ok(SequenceEntry {
            descriptor: Identifier::from(descriptor.value),
            syntax,
        })
    }

    // === Macro instances ===

    fn parse_module_identity(
        &mut self,
        name: Identifier,
        position: Position,
    ) -> Result<ModuleIdentity, ParseError> {
        self.bump(); // MODULE-IDENTITY
        self.expect_keyword("LAST-UPDATED")?;
        let last_updated = self.parse_date()?;
        self.expect_keyword("ORGANIZATION")?;
        let organization = self.parse_text()?;
        self.expect_keyword("CONTACT-INFO")?;
        let contact_info = self.parse_text()?;
        self.expect_keyword("DESCRIPTION")?;
        let description = self.parse_text()?;

        let mut revisions = Vec::new();
        while self.accept_keyword("REVISION") {
            let date = self.parse_date()?;
            self.expect_keyword("DESCRIPTION")?;
            let description = self.parse_text()?;
            revisions.push(Revision { date, description });
        }

        let oid = self.parse_oid_assignment()?;
        Ok(ModuleIdentity {
            name,
            last_updated,
            organization,
            contact_info,
            description,
            revisions,
            oid: Some(oid),
            position,
        })
    }

    fn parse_object_identity(&mut self) -> Result<(ObjectIdentity, Oid), ParseError> {
        self.bump(); // OBJECT-IDENTITY
        self.expect_keyword("STATUS")?;
        let status = self.parse_status(STATUS_SMI_V2)?;
        self.expect_keyword("DESCRIPTION")?;
        let description = self.parse_text()?;
        let reference = if self.accept_keyword("REFERENCE") {
            Some(self.parse_text()?)
        } else {
            None
        };
        let oid = self.parse_oid_assignment()?;
        Ok((
            ObjectIdentity {
                status,
                description,
                reference,
            },
            oid,
        ))
    }

    fn parse_object_type(&mut self) -> Result<(ObjectType, Oid), ParseError> {
        self.bump(); // OBJECT-TYPE
        self.expect_keyword("SYNTAX")?;
        let syntax = self.parse_syntax()?;

        let units = if self.accept_keyword("UNITS") {
            Some(self.parse_text()?)
        } else {
            None
        };

        if !self.check_keyword("MAX-ACCESS") && !self.check_keyword("ACCESS") {
            return Err(self.error_expected("`MAX-ACCESS` or `ACCESS`"));
        }
        self.bump();
        let access = self.parse_access(ACCESS_OBJECT_TYPE)?;

        self.expect_keyword("STATUS")?;
        let status = self.parse_status(STATUS_SMI_V1)?;

        // DESCRIPTION is mandatory in SMIv2 but absent from plenty of
        // SMIv1 modules, so it parses as optional.
        let description = if self.accept_keyword("DESCRIPTION") {
            Some(self.parse_text()?)
        } else {
            None
        };
        let reference = if self.accept_keyword("REFERENCE") {
            Some(self.parse_text()?)
        } else {
            None
        };

        let mut index = Vec::new();
        let mut augments = None;
        if self.accept_keyword("INDEX") {
            index = self.parse_index_list()?;
        } else if self.accept_keyword("AUGMENTS") {
            self.expect(TokenKind::LBrace)?;
            let target = self.expect_described(TokenKind::Ident, "a row to augment")?;
            self.expect(TokenKind::RBrace)?;
            augments = Some(Identifier::from(target.value));
        }

        let defval = if self.check_keyword("DEFVAL") {
            Some(self.parse_defval()?)
        } else {
            None
        };

        let oid = self.parse_oid_assignment()?;
        Ok((
            ObjectType {
                syntax,
                units,
                access,
                status,
                description,
                reference,
                index,
                augments,
                defval,
            },
            oid,
        ))
    }

    /// `'{' 'IMPLIED'? Ident (',' 'IMPLIED'? Ident)* '}'` - no trailing comma.
    fn parse_index_list(&mut self) -> Result<Vec<IndexEntry>, ParseError> {
        self.expect(TokenKind::LBrace)?;
        let mut entries = Vec::new();
        loop {
            let implied = self.accept_keyword("IMPLIED");
            let name = self.expect_described(TokenKind::Ident, "an index object")?;
            entries.push(IndexEntry {
                implied,
                name: Identifier::from(name.value),
            });
            if self.accept(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.expect(TokenKind::RBrace)?;
        Ok(entries)
    }

    /// `'DEFVAL' '{' payload '}'`. The payload lexeme passes through
    /// uninterpreted; OID-valued and BITS-valued defaults only make
    /// sense to the resolver.
    fn parse_defval(&mut self) -> Result<String, ParseError> {
        self.bump(); // DEFVAL
        self.expect(TokenKind::LBrace)?;
        let value = match self.current.kind {
            TokenKind::Minus => {
                self.bump();
                let int = self.expect_described(TokenKind::Int, "an integer after '-'")?;
                format!("-{}", int.value)
            }
            TokenKind::Int
            | TokenKind::HexString
            | TokenKind::BinString
            | TokenKind::Text
            | TokenKind::Ident => self.bump().value,
            TokenKind::LBrace => self.parse_defval_braced()?,
            _ => return Err(self.error_expected("a DEFVAL payload")),
        };
        self.expect(TokenKind::RBrace)?;
        Ok(value)
    }

    /// Braced DEFVAL payload: `{ Int+ }` (an OID value) or
    /// `{ Ident (',' Ident)* ','? }` (a BITS value, possibly empty).
    fn parse_defval_braced(&mut self) -> Result<String, ParseError> {
        self.bump(); // inner {
        let mut items: Vec<String> = Vec::new();
        let mut oid_form = false;
        if self.check(TokenKind::Int) {
            oid_form = true;
            while self.check(TokenKind::Int) {
                items.push(self.bump().value);
            }
        } else if self.check(TokenKind::Ident) {
            items.push(self.bump().value);
            while self.accept(TokenKind::Comma).is_some() {
                if self.check(TokenKind::RBrace) {
                    break;
                }
                items.push(self.expect_described(TokenKind::Ident, "a name")?.value);
            }
        }
        self.expect(TokenKind::RBrace)?;
        if items.is_empty() {
            return Ok(String::from("{ }"));
        }
        let joined = if oid_form {
            items.join(" ")
        } else {
            items.join(", ")
        };
        Ok(format!("{{ {joined} }}"))
    }

    fn parse_notification_type(&mut self) -> Result<(NotificationType, Oid), ParseError> {
        self.bump(); // NOTIFICATION-TYPE
        let objects = if self.accept_keyword("OBJECTS") {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        self.expect_keyword("STATUS")?;
        let status = self.parse_status(STATUS_SMI_V2)?;
        self.expect_keyword("DESCRIPTION")?;
        let description = self.parse_text()?;
        let reference = if self.accept_keyword("REFERENCE") {
            Some(self.parse_text()?)
        } else {
            None
        };
        let oid = self.parse_oid_assignment()?;
        Ok((
            NotificationType {
                objects,
                status,
                description,
                reference,
            },
            oid,
        ))
    }

    /// TRAP-TYPE assigns a bare trap number, not an OID value. The
    /// number lexeme is preserved; synthesizing the trap OID from the
    /// enterprise is resolver business.
    fn parse_trap_type(&mut self) -> Result<TrapType, ParseError> {
        self.bump(); // TRAP-TYPE
        self.expect_keyword("ENTERPRISE")?;
        let enterprise = Identifier::from(
            self.expect_described(TokenKind::Ident, "an enterprise name")?.value,
        );
        let variables = if self.accept_keyword("VARIABLES") {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        let description = if self.accept_keyword("DESCRIPTION") {
            Some(self.parse_text()?)
        } else {
            None
        };
        let reference = if self.accept_keyword("REFERENCE") {
            Some(self.parse_text()?)
        } else {
            None
        };
        self.expect(TokenKind::Assign)?;
        let number = self.expect_described(TokenKind::Int, "a trap number")?.value;
        Ok(TrapType {
            enterprise,
            variables,
            description,
            reference,
            number,
        })
    }

    fn parse_object_group(&mut self) -> Result<(ObjectGroup, Oid), ParseError> {
        self.bump(); // OBJECT-GROUP
        self.expect_keyword("OBJECTS")?;
        let objects = self.parse_identifier_list()?;
        self.expect_keyword("STATUS")?;
        let status = self.parse_status(STATUS_SMI_V2)?;
        self.expect_keyword("DESCRIPTION")?;
        let description = self.parse_text()?;
        let reference = if self.accept_keyword("REFERENCE") {
            Some(self.parse_text()?)
        } else {
            None
        };
        let oid = self.parse_oid_assignment()?;
        Ok((
            ObjectGroup {
                objects,
                status,
                description,
                reference,
            },
            oid,
        ))
    }

    fn parse_notification_group(&mut self) -> Result<(NotificationGroup, Oid), ParseError> {
        self.bump(); // NOTIFICATION-GROUP
        self.expect_keyword("NOTIFICATIONS")?;
        let notifications = self.parse_identifier_list()?;
        self.expect_keyword("STATUS")?;
        let status = self.parse_status(STATUS_SMI_V2)?;
        self.expect_keyword("DESCRIPTION")?;
        let description = self.parse_text()?;
        let reference = if self.accept_keyword("REFERENCE") {
            Some(self.parse_text()?)
        } else {
            None
        };
        let oid = self.parse_oid_assignment()?;
        Ok((
            NotificationGroup {
                notifications,
                status,
                description,
                reference,
            },
            oid,
        ))
    }

    fn parse_module_compliance(&mut self) -> Result<(ModuleCompliance, Oid), ParseError> {
        self.bump(); // MODULE-COMPLIANCE
        self.expect_keyword("STATUS")?;
        let status = self.parse_status(STATUS_SMI_V2)?;
        self.expect_keyword("DESCRIPTION")?;
        let description = self.parse_text()?;
        let reference = if self.accept_keyword("REFERENCE") {
            Some(self.parse_text()?)
        } else {
            None
        };

        if !self.check_keyword("MODULE") {
            return Err(self.error_expected("`MODULE`"));
        }
        let mut modules = Vec::new();
        while self.accept_keyword("MODULE") {
            modules.push(self.parse_compliance_module()?);
        }

        let oid = self.parse_oid_assignment()?;
        Ok((
            ModuleCompliance {
                status,
                description,
                reference,
                modules,
            },
            oid,
        ))
    }

    fn parse_compliance_module(&mut self) -> Result<ComplianceModule, ParseError> {
        let name = self.parse_compliance_module_name();
        let mandatory_groups = if self.accept_keyword("MANDATORY-GROUPS") {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };

        let mut compliances = Vec::new();
        loop {
            if self.accept_keyword("GROUP") {
                let group = self.expect_described(TokenKind::Ident, "a group name")?;
                self.expect_keyword("DESCRIPTION")?;
                let description = self.parse_text()?;
                compliances.push(Compliance::Group(ComplianceGroup {
                    name: Identifier::from(group.value),
                    description,
                }));
            } else if self.accept_keyword("OBJECT") {
                let object = self.expect_described(TokenKind::Ident, "an object name")?;
                let syntax = if self.accept_keyword("SYNTAX") {
                    Some(self.parse_syntax()?)
                } else {
                    None
                };
                let write_syntax = if self.accept_keyword("WRITE-SYNTAX") {
                    Some(self.parse_syntax()?)
                } else {
                    None
                };
                let min_access = if self.accept_keyword("MIN-ACCESS") {
                    Some(self.parse_access(ACCESS_MIN)?)
                } else {
                    None
                };
                self.expect_keyword("DESCRIPTION")?;
                let description = self.parse_text()?;
                compliances.push(Compliance::Object(ComplianceObject {
                    name: Identifier::from(object.value),
                    syntax,
                    write_syntax,
                    min_access,
                    description,
                }));
            } else {
                break;
            }
        }

        Ok(ComplianceModule {
            name,
            mandatory_groups,
            compliances,
        })
    }

    /// The module name after `MODULE` is optional: when the next token
    /// already starts the following clause (`::=`, `MANDATORY-GROUPS`,
    /// `GROUP`, `OBJECT`) the name is taken as empty.
    fn parse_compliance_module_name(&mut self) -> Option<Identifier> {
        if self.check(TokenKind::Assign)
            || self.check_keyword("MANDATORY-GROUPS")
            || self.check_keyword("GROUP")
            || self.check_keyword("OBJECT")
        {
            return None;
        }
        if self.check(TokenKind::Ident) {
            return Some(Identifier::from(self.bump().value));
        }
        None
    }

    fn parse_agent_capabilities(&mut self) -> Result<(AgentCapabilities, Oid), ParseError> {
        self.bump(); // AGENT-CAPABILITIES
        self.expect_keyword("PRODUCT-RELEASE")?;
        let product_release = self.parse_text()?;
        self.expect_keyword("STATUS")?;
        let status = self.parse_status(STATUS_SMI_V2)?;
        self.expect_keyword("DESCRIPTION")?;
        let description = self.parse_text()?;
        let reference = if self.accept_keyword("REFERENCE") {
            Some(self.parse_text()?)
        } else {
            None
        };

        let mut modules = Vec::new();
        while self.accept_keyword("SUPPORTS") {
            let supports = Identifier::from(
                self.expect_described(TokenKind::Ident, "a module name")?.value,
            );
            self.expect_keyword("INCLUDES")?;
            let includes = self.parse_identifier_list()?;
            let mut variations = Vec::new();
            while self.accept_keyword("VARIATION") {
                variations.push(self.parse_variation()?);
            }
            modules.push(CapabilitiesModule {
                supports,
                includes,
                variations,
            });
        }

        let oid = self.parse_oid_assignment()?;
        Ok((
            AgentCapabilities {
                product_release,
                status,
                description,
                reference,
                modules,
            },
            oid,
        ))
    }

    fn parse_variation(&mut self) -> Result<Variation, ParseError> {
        let name = Identifier::from(
            self.expect_described(TokenKind::Ident, "a variation name")?.value,
        );
        let syntax = if self.accept_keyword("SYNTAX") {
            Some(self.parse_syntax()?)
        } else {
            None
        };
        let write_syntax = if self.accept_keyword("WRITE-SYNTAX") {
            Some(self.parse_syntax()?)
        } else {
            None
        };
        let access = if self.accept_keyword("ACCESS") {
            Some(self.parse_access(ACCESS_VARIATION)?)
        } else {
            None
        };
        let creation_requires = if self.accept_keyword("CREATION-REQUIRES") {
            self.parse_identifier_list()?
        } else {
            Vec::new()
        };
        let defval = if self.check_keyword("DEFVAL") {
            Some(self.parse_defval()?)
        } else {
            None
        };
        self.expect_keyword("DESCRIPTION")?;
        let description = self.parse_text()?;
        Ok(Variation {
            name,
            syntax,
            write_syntax,
            access,
            creation_requires,
            defval,
            description,
        })
    }

    // === User-defined MACRO bodies ===

    /// `Name MACRO ::= BEGIN ... END`, collected opaquely.
    ///
    /// Sections split at `TYPE NOTATION`, `VALUE NOTATION`, or
    /// `<token> ::=` headers. Section text is the source tokens joined
    /// by single spaces, with text literals re-quoted.
    fn parse_macro(&mut self, name: Identifier, position: Position) -> Result<Macro, ParseError> {
        self.bump(); // MACRO
        self.expect(TokenKind::Assign)?;
        self.expect_keyword("BEGIN")?;

        let mut body = MacroBody::default();
        let mut section: Option<String> = None;
        let mut text = String::new();

        loop {
            if self.check(TokenKind::Eof) {
                return Err(self.error_expected("`END`"));
            }
            if self.check(TokenKind::Illegal) {
                return Err(self.illegal_error());
            }
            if self.accept_keyword("END") {
                break;
            }

            let token = self.bump();
            if (token.value == "TYPE" || token.value == "VALUE") && self.check_keyword("NOTATION")
            {
                self.bump(); // NOTATION
                flush_macro_section(&mut body, section.take(), &mut text);
                section = Some(format!("{} NOTATION", token.value));
                self.accept(TokenKind::Assign);
                continue;
            }
            if self.check(TokenKind::Assign) {
                self.bump();
                flush_macro_section(&mut body, section.take(), &mut text);
                section = Some(token.value);
                continue;
            }

            if !text.is_empty() {
                text.push(' ');
            }
            if token.kind == TokenKind::Text {
                text.push('"');
                text.push_str(&token.value);
                text.push('"');
            } else {
                text.push_str(&token.value);
            }
        }
        flush_macro_section(&mut body, section.take(), &mut text);

        Ok(Macro {
            name,
            body,
            position,
        })
    }
}

/// Store an accumulated MACRO body section into its slot.
fn flush_macro_section(body: &mut MacroBody, section: Option<String>, text: &mut String) {
    let value = core::mem::take(text);
    match section {
        None => {}
        Some(name) if name == "TYPE NOTATION" => body.type_notation = Some(value),
        Some(name) if name == "VALUE NOTATION" => body.value_notation = Some(value),
        Some(name) => {
            body.tokens.insert(name, value);
        }
    }
}

/// Describe a token for an error message.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::Eof => String::from("end of input"),
        TokenKind::Ident
        | TokenKind::Int
        | TokenKind::Text
        | TokenKind::HexString
        | TokenKind::BinString
        | TokenKind::ExtUtcTime
        | TokenKind::Asn1Tag
        | TokenKind::Illegal
        | TokenKind::ObjectIdentifier
        | TokenKind::OctetString => format!("{} `{}`", token.kind, token.value),
        _ => String::from(token.kind.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_ok(source: &str) -> Module {
        match parse("test.mib", source) {
            Ok(module) => module,
            Err(error) => panic!("parse failed: {error}"),
        }
    }

    fn parse_err(source: &str) -> ParseError {
        match parse("test.mib", source) {
            Ok(_) => panic!("expected a parse error"),
            Err(error) => error,
        }
    }

    /// Wrap an OBJECT-TYPE body in a minimal module and return its node.
    fn parse_object_type_node(clauses: &str) -> Node {
        let source = format!(
            "TEST-MIB DEFINITIONS ::= BEGIN\ntestObject OBJECT-TYPE\n{clauses}\n::= {{ test 1 }}\nEND"
        );
        let module = parse_ok(&source);
        assert_eq!(module.body.nodes.len(), 1);
        module.body.nodes.into_iter().next().unwrap()
    }

    #[test]
    fn simple_module() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN testOid OBJECT IDENTIFIER ::= { iso org dod } END",
        );
        assert_eq!(module.name, "TEST-MIB");
        assert_eq!(module.body.nodes.len(), 1);

        let node = &module.body.nodes[0];
        assert_eq!(node.name, "testOid");
        assert!(matches!(node.kind, NodeKind::OidAssignment));

        let oid = node.oid.as_ref().unwrap();
        assert_eq!(oid.sub_identifiers.len(), 3);
        for (sub, expected) in oid.sub_identifiers.iter().zip(["iso", "org", "dod"]) {
            assert_eq!(sub.name().unwrap(), expected);
            assert_eq!(sub.number(), None);
        }
    }

    #[test]
    fn oid_with_numbers_and_named_numbers() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             testOid OBJECT IDENTIFIER ::= { iso org(3) 6 internet(1) }
             END",
        );
        let oid = module.body.nodes[0].oid.as_ref().unwrap();
        assert_eq!(oid.sub_identifiers[0], SubIdentifier::Name(Identifier::from("iso")));
        assert_eq!(
            oid.sub_identifiers[1],
            SubIdentifier::NamedNumber {
                name: Identifier::from("org"),
                number: 3,
            }
        );
        assert_eq!(oid.sub_identifiers[2], SubIdentifier::Number(6));
        assert_eq!(oid.sub_identifiers[3].number(), Some(1));
    }

    #[test]
    fn empty_oid_rejected() {
        let error = parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN testOid OBJECT IDENTIFIER ::= { } END",
        );
        assert!(error.message.contains("sub-identifier"));
    }

    #[test]
    fn oid_trailing_comma_rejected() {
        parse_err("TEST-MIB DEFINITIONS ::= BEGIN testOid OBJECT IDENTIFIER ::= { iso, } END");
    }

    #[test]
    fn oid_illegal_token_reports_lexer_diagnostic() {
        let error =
            parse_err("TEST-MIB DEFINITIONS ::= BEGIN testOid OBJECT IDENTIFIER ::= { iso $ } END");
        assert!(error.message.contains('$'), "message: {}", error.message);
    }

    #[test]
    fn error_positions_point_into_source() {
        let error = parse_err("TEST-MIB DEFINITIONS ::= BEGIN\n  bogus\nEND");
        assert_eq!(error.position.line, 3);
        assert!(error.message.contains("expected"));
    }

    #[test]
    fn missing_begin() {
        parse_err("TEST-MIB DEFINITIONS ::= testIdentity MODULE-IDENTITY END");
    }

    #[test]
    fn empty_input() {
        parse_err("");
    }

    #[test]
    fn comments_only() {
        parse_err("-- a comment\n-- another comment\n");
    }

    #[test]
    fn multi_clause_imports() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             IMPORTS
                 itemA1, itemA2 FROM MODULE-A
                 itemB1 FROM MODULE-B
                 itemC1, itemC2 FROM MODULE-C;
             END",
        );
        let imports = &module.body.imports;
        assert_eq!(imports.len(), 3);
        assert_eq!(imports[0].module, "MODULE-A");
        assert_eq!(imports[0].names, vec![Identifier::from("itemA1"), Identifier::from("itemA2")]);
        assert_eq!(imports[1].module, "MODULE-B");
        assert_eq!(imports[1].names, vec![Identifier::from("itemB1")]);
        assert_eq!(imports[2].module, "MODULE-C");
        assert_eq!(imports[2].names.len(), 2);
    }

    #[test]
    fn keyword_prefixed_import_module() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             IMPORTS someObject FROM APPLICATION-SPECIFIC-MIB;
             END",
        );
        assert_eq!(module.body.imports.len(), 1);
        assert_eq!(module.body.imports[0].module, "APPLICATION-SPECIFIC-MIB");
    }

    #[test]
    fn exports_clause() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             EXPORTS alpha, beta;
             alpha OBJECT IDENTIFIER ::= { iso 1 }
             END",
        );
        assert_eq!(
            module.body.exports,
            vec![Identifier::from("alpha"), Identifier::from("beta")]
        );
    }

    #[test]
    fn object_type_with_refined_integer() {
        let node = parse_object_type_node(
            "SYNTAX Integer32 (0..255)
             MAX-ACCESS read-only
             STATUS current
             DESCRIPTION \"x\"",
        );
        let object_type = node.object_type().unwrap();
        let syntax_type = object_type.syntax.syntax_type().unwrap();
        assert_eq!(syntax_type.name, "Integer32");
        let sub_type = syntax_type.sub_type().unwrap();
        assert!(matches!(sub_type, SubType::Integer(_)));
        assert_eq!(
            sub_type.ranges(),
            &[Range {
                start: String::from("0"),
                end: Some(String::from("255")),
            }]
        );
        assert_eq!(object_type.access, Access::ReadOnly);
        assert_eq!(object_type.status, Status::Current);
        assert_eq!(object_type.description.as_deref(), Some("x"));
    }

    #[test]
    fn object_type_size_constraint() {
        let node = parse_object_type_node(
            "SYNTAX DisplayString (SIZE (0..255))
             MAX-ACCESS read-create
             STATUS current
             DESCRIPTION \"sized\"",
        );
        let syntax_type = node.object_type().unwrap().syntax.syntax_type().unwrap();
        let sub_type = syntax_type.sub_type().unwrap();
        assert!(matches!(sub_type, SubType::Size(_)));
        assert_eq!(sub_type.ranges()[0].start, "0");
        assert_eq!(sub_type.ranges()[0].end.as_deref(), Some("255"));
    }

    #[test]
    fn range_alternatives_and_literal_endpoints() {
        let node = parse_object_type_node(
            "SYNTAX Integer32 (-20..-10 | 0 | 'FF'H..'1F'H | MIN..MAX)
             MAX-ACCESS read-only
             STATUS current
             DESCRIPTION \"ranges\"",
        );
        let syntax_type = node.object_type().unwrap().syntax.syntax_type().unwrap();
        let ranges = syntax_type.sub_type().unwrap().ranges();
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges[0].start, "-20");
        assert_eq!(ranges[0].end.as_deref(), Some("-10"));
        assert_eq!(ranges[1].start, "0");
        assert_eq!(ranges[1].end, None);
        assert_eq!(ranges[2].start, "'FF'H");
        assert_eq!(ranges[2].end.as_deref(), Some("'1F'H"));
        assert_eq!(ranges[3].start, "MIN");
        assert_eq!(ranges[3].end.as_deref(), Some("MAX"));
    }

    #[test]
    fn bits_enum() {
        let node = parse_object_type_node(
            "SYNTAX BITS { sunday(0), monday(1), tuesday(2), wednesday(3),
                           thursday(4), friday(5), saturday(6) }
             MAX-ACCESS read-write
             STATUS current
             DESCRIPTION \"days\"",
        );
        let syntax_type = node.object_type().unwrap().syntax.syntax_type().unwrap();
        assert_eq!(syntax_type.name, "BITS");
        let values = syntax_type.named_values().unwrap();
        assert_eq!(values.len(), 7);
        let names: Vec<_> = values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            ["sunday", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday"]
        );
        for (index, value) in values.iter().enumerate() {
            assert_eq!(value.value, format!("{index}"));
        }
    }

    #[test]
    fn integer_enum_with_trailing_comma_and_negative_value() {
        let node = parse_object_type_node(
            "SYNTAX INTEGER { up(1), down(2), broken(-1), }
             MAX-ACCESS read-only
             STATUS current
             DESCRIPTION \"states\"",
        );
        let syntax_type = node.object_type().unwrap().syntax.syntax_type().unwrap();
        let values = syntax_type.named_values().unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[2].name, "broken");
        assert_eq!(values[2].value, "-1");
    }

    #[test]
    fn object_type_sequence_of() {
        let node = parse_object_type_node(
            "SYNTAX SEQUENCE OF EvalEntry
             MAX-ACCESS not-accessible
             STATUS current
             DESCRIPTION \"table\"",
        );
        let object_type = node.object_type().unwrap();
        assert_eq!(
            object_type.syntax.sequence_of().unwrap().as_str(),
            "EvalEntry"
        );
    }

    #[test]
    fn object_type_index_and_units() {
        let node = parse_object_type_node(
            "SYNTAX EvalEntry
             UNITS \"seconds\"
             MAX-ACCESS not-accessible
             STATUS current
             DESCRIPTION \"row\"
             INDEX { evalIndex, IMPLIED evalName }",
        );
        let object_type = node.object_type().unwrap();
        assert_eq!(object_type.units.as_deref(), Some("seconds"));
        assert_eq!(object_type.index.len(), 2);
        assert!(!object_type.index[0].implied);
        assert_eq!(object_type.index[0].name, "evalIndex");
        assert!(object_type.index[1].implied);
        assert_eq!(object_type.index[1].name, "evalName");
        assert!(object_type.augments.is_none());
    }

    #[test]
    fn object_type_augments() {
        let node = parse_object_type_node(
            "SYNTAX EvalEntry
             MAX-ACCESS not-accessible
             STATUS current
             DESCRIPTION \"row\"
             AUGMENTS { ifEntry }",
        );
        let object_type = node.object_type().unwrap();
        assert!(object_type.index.is_empty());
        assert_eq!(object_type.augments.as_ref().unwrap(), &Identifier::from("ifEntry"));
    }

    #[test]
    fn object_type_smi_v1_access_and_status() {
        let node = parse_object_type_node(
            "SYNTAX INTEGER
             ACCESS write-only
             STATUS mandatory",
        );
        let object_type = node.object_type().unwrap();
        assert_eq!(object_type.access, Access::WriteOnly);
        assert_eq!(object_type.status, Status::Mandatory);
        assert!(object_type.description.is_none());
    }

    #[test]
    fn defval_payload_forms() {
        let cases = [
            ("DEFVAL { 0 }", "0"),
            ("DEFVAL { -5 }", "-5"),
            ("DEFVAL { active }", "active"),
            ("DEFVAL { \"public\" }", "public"),
            ("DEFVAL { 'FF'H }", "'FF'H"),
            ("DEFVAL { '1010'B }", "'1010'B"),
            ("DEFVAL { { 1 3 6 } }", "{ 1 3 6 }"),
            ("DEFVAL { { a, b } }", "{ a, b }"),
            ("DEFVAL { { } }", "{ }"),
        ];
        for (clause, expected) in cases {
            let node = parse_object_type_node(&format!(
                "SYNTAX INTEGER
                 MAX-ACCESS read-write
                 STATUS current
                 DESCRIPTION \"d\"
                 {clause}"
            ));
            assert_eq!(
                node.object_type().unwrap().defval.as_deref(),
                Some(expected),
                "clause: {clause}"
            );
        }
    }

    #[test]
    fn object_type_missing_syntax() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             testObject OBJECT-TYPE
                 MAX-ACCESS read-only
                 STATUS current
                 DESCRIPTION \"no syntax\"
                 ::= { test 1 }
             END",
        );
    }

    #[test]
    fn object_type_missing_access() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             testObject OBJECT-TYPE
                 SYNTAX INTEGER
                 STATUS current
                 DESCRIPTION \"no access\"
                 ::= { test 1 }
             END",
        );
    }

    #[test]
    fn object_type_missing_status() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             testObject OBJECT-TYPE
                 SYNTAX INTEGER
                 MAX-ACCESS read-only
                 DESCRIPTION \"no status\"
                 ::= { test 1 }
             END",
        );
    }

    #[test]
    fn module_identity_hoisted_with_revisions() {
        let module = parse_ok(
            "FIZBIN-MIB DEFINITIONS ::= BEGIN
             IMPORTS MODULE-IDENTITY, experimental FROM SNMPv2-SMI;
             fizbin MODULE-IDENTITY
                 LAST-UPDATED \"199505241811Z\"
                 ORGANIZATION \"IETF SNMPv2 Working Group\"
                 CONTACT-INFO
                         \"        Marshall T. Rose
                          Postal: Dover Beach Consulting, Inc.\"
                 DESCRIPTION
                         \"The MIB module for entities implementing the xxxx
                         protocol.\"
                 REVISION      \"9505241811Z\"
                 DESCRIPTION
                         \"The latest version of this MIB module.\"
                 REVISION      \"9210070433Z\"
                 DESCRIPTION
                         \"The initial version of this MIB module.\"
                 ::= { experimental 101 }
             END",
        );
        assert!(module.body.nodes.is_empty(), "identity must not stay in nodes");
        let identity = module.body.identity.as_ref().unwrap();
        assert_eq!(identity.name, "fizbin");
        assert_eq!(identity.organization, "IETF SNMPv2 Working Group");
        assert!(identity.contact_info.contains("Marshall T. Rose"));
        assert!(identity.description.contains("The MIB module for entities"));

        let last_updated = identity.last_updated.to_datetime().unwrap();
        assert_eq!(last_updated.year(), 1995);
        assert_eq!(last_updated.month(), time::Month::May);
        assert_eq!(last_updated.day(), 24);
        assert_eq!(last_updated.hour(), 18);
        assert_eq!(last_updated.minute(), 11);

        assert_eq!(identity.revisions.len(), 2);
        let first = identity.revisions[0].date.to_datetime().unwrap();
        assert_eq!(first.year(), 1995);
        let second = identity.revisions[1].date.to_datetime().unwrap();
        assert_eq!(second.year(), 1992);
        assert_eq!(second.month(), time::Month::October);
        assert_eq!(second.hour(), 4);
        assert_eq!(second.minute(), 33);

        let oid = identity.oid.as_ref().unwrap();
        assert_eq!(oid.sub_identifiers[0].name().unwrap(), "experimental");
        assert_eq!(oid.sub_identifiers[1].number(), Some(101));
    }

    #[test]
    fn second_module_identity_stays_in_nodes() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             first MODULE-IDENTITY
                 LAST-UPDATED \"202401010000Z\"
                 ORGANIZATION \"o\" CONTACT-INFO \"c\" DESCRIPTION \"d\"
                 ::= { enterprises 1 }
             second MODULE-IDENTITY
                 LAST-UPDATED \"202401010000Z\"
                 ORGANIZATION \"o\" CONTACT-INFO \"c\" DESCRIPTION \"d\"
                 ::= { enterprises 2 }
             END",
        );
        assert_eq!(module.body.identity.as_ref().unwrap().name, "first");
        assert_eq!(module.body.nodes.len(), 1);
        assert!(matches!(module.body.nodes[0].kind, NodeKind::ModuleIdentity(_)));
    }

    #[test]
    fn module_identity_missing_organization() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             bad MODULE-IDENTITY
                 LAST-UPDATED \"202401010000Z\"
                 CONTACT-INFO \"c\" DESCRIPTION \"d\"
                 ::= { enterprises 1 }
             END",
        );
    }

    #[test]
    fn object_identity() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             fizbin69 OBJECT-IDENTITY
                 STATUS  current
                 DESCRIPTION \"The authoritative identity of the Fizbin 69 chipset.\"
                 REFERENCE \"Fizbin Datasheet v6.9\"
                 ::= { fizbinChipSets 1 }
             END",
        );
        let node = &module.body.nodes[0];
        let identity = node.object_identity().unwrap();
        assert_eq!(identity.status, Status::Current);
        assert!(identity.description.contains("Fizbin 69 chipset"));
        assert_eq!(identity.reference.as_deref(), Some("Fizbin Datasheet v6.9"));
    }

    #[test]
    fn object_identity_rejects_v1_status() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             bad OBJECT-IDENTITY
                 STATUS mandatory
                 DESCRIPTION \"v1 status is not valid here\"
                 ::= { x 1 }
             END",
        );
    }

    #[test]
    fn notification_type() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             linkDown NOTIFICATION-TYPE
                 OBJECTS { ifIndex, ifAdminStatus, ifOperStatus }
                 STATUS  current
                 DESCRIPTION \"A linkDown trap.\"
                 REFERENCE \"RFC 2863\"
                 ::= { snmpTraps 3 }
             END",
        );
        let notification = module.body.nodes[0].notification_type().unwrap();
        assert_eq!(notification.objects.len(), 3);
        assert_eq!(notification.objects[0], "ifIndex");
        assert_eq!(notification.status, Status::Current);
        assert_eq!(notification.reference.as_deref(), Some("RFC 2863"));
    }

    #[test]
    fn notification_type_missing_status() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             bad NOTIFICATION-TYPE
                 DESCRIPTION \"missing status\"
                 ::= { x 1 }
             END",
        );
    }

    #[test]
    fn trap_type_keeps_number_and_no_oid() {
        let module = parse_ok(
            "TRAP-TEST-MIB DEFINITIONS ::= BEGIN
             IMPORTS enterprises, TRAP-TYPE FROM RFC1155-SMI;
             acmeTrap TRAP-TYPE
                 ENTERPRISE acme
                 VARIABLES { ifIndex }
                 DESCRIPTION \"This is an example trap.\"
                 ::= 7
             END",
        );
        let node = &module.body.nodes[0];
        assert!(node.oid.is_none(), "trap nodes carry no OID");
        let trap = node.trap_type().unwrap();
        assert_eq!(trap.enterprise, "acme");
        assert_eq!(trap.variables, vec![Identifier::from("ifIndex")]);
        assert_eq!(trap.number, "7");
    }

    #[test]
    fn trap_type_missing_enterprise() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             badTrap TRAP-TYPE
                 DESCRIPTION \"missing enterprise\"
                 ::= 8
             END",
        );
    }

    #[test]
    fn object_group_with_trailing_comma() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             testGroup OBJECT-GROUP
                 OBJECTS { obj1, obj2, }
                 STATUS current
                 DESCRIPTION \"A group of objects.\"
                 REFERENCE \"RFC ABC\"
                 ::= { groups 3 }
             END",
        );
        let group = module.body.nodes[0].object_group().unwrap();
        assert_eq!(group.objects, vec![Identifier::from("obj1"), Identifier::from("obj2")]);
        assert_eq!(group.reference.as_deref(), Some("RFC ABC"));
    }

    #[test]
    fn object_group_missing_objects() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             badGroup OBJECT-GROUP
                 STATUS current
                 DESCRIPTION \"missing objects\"
                 ::= { x 1 }
             END",
        );
    }

    #[test]
    fn notification_group() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             testNotifications NOTIFICATION-GROUP
                 NOTIFICATIONS { notif1, notif2 }
                 STATUS current
                 DESCRIPTION \"A group of notifications.\"
                 ::= { groups 4 }
             END",
        );
        let group = module.body.nodes[0].notification_group().unwrap();
        assert_eq!(group.notifications.len(), 2);
    }

    #[test]
    fn module_compliance() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             testCompliance MODULE-COMPLIANCE
                 STATUS current
                 DESCRIPTION \"Compliance statement.\"
                 MODULE -- this module
                     MANDATORY-GROUPS { groupA, groupB }
                     GROUP groupC
                     DESCRIPTION \"Conditionally required.\"
                     OBJECT obj1
                     SYNTAX INTEGER (0..7)
                     WRITE-SYNTAX INTEGER (1..7)
                     MIN-ACCESS read-only
                     DESCRIPTION \"Refined.\"
                 MODULE OTHER-MIB
                     MANDATORY-GROUPS { groupD }
                 ::= { compliances 1 }
             END",
        );
        let compliance = module.body.nodes[0].module_compliance().unwrap();
        assert_eq!(compliance.status, Status::Current);
        assert_eq!(compliance.modules.len(), 2);

        let first = &compliance.modules[0];
        assert!(first.name.is_none(), "first MODULE clause names no module");
        assert_eq!(
            first.mandatory_groups,
            vec![Identifier::from("groupA"), Identifier::from("groupB")]
        );
        assert_eq!(first.compliances.len(), 2);
        match &first.compliances[0] {
            Compliance::Group(group) => {
                assert_eq!(group.name, "groupC");
                assert_eq!(group.description, "Conditionally required.");
            }
            Compliance::Object(_) => panic!("expected GROUP refinement first"),
        }
        match &first.compliances[1] {
            Compliance::Object(object) => {
                assert_eq!(object.name, "obj1");
                assert!(object.syntax.is_some());
                assert!(object.write_syntax.is_some());
                assert_eq!(object.min_access, Some(Access::ReadOnly));
            }
            Compliance::Group(_) => panic!("expected OBJECT refinement second"),
        }

        let second = &compliance.modules[1];
        assert_eq!(second.name.as_ref().unwrap(), &Identifier::from("OTHER-MIB"));
        assert_eq!(second.mandatory_groups, vec![Identifier::from("groupD")]);
    }

    #[test]
    fn module_compliance_requires_module_clause() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             badCompliance MODULE-COMPLIANCE
                 STATUS current
                 DESCRIPTION \"no MODULE clause\"
                 ::= { x 1 }
             END",
        );
    }

    #[test]
    fn agent_capabilities() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             exampleAgent AGENT-CAPABILITIES
                 PRODUCT-RELEASE \"ACME Agent release 1.1\"
                 STATUS current
                 DESCRIPTION \"ACME agent capabilities.\"
                 SUPPORTS IF-MIB
                     INCLUDES { ifGeneralGroup, ifPacketGroup }
                     VARIATION ifAdminStatus
                         SYNTAX INTEGER { up(1), down(2) }
                         ACCESS read-only
                         DESCRIPTION \"Unable to set testing.\"
                     VARIATION ifOperStatus
                         DEFVAL { up }
                         DESCRIPTION \"Defaults to up.\"
                 SUPPORTS TCP-MIB
                     INCLUDES { tcpGroup }
                 ::= { capabilities 1 }
             END",
        );
        let capabilities = module.body.nodes[0].agent_capabilities().unwrap();
        assert_eq!(capabilities.product_release, "ACME Agent release 1.1");
        assert_eq!(capabilities.modules.len(), 2);

        let first = &capabilities.modules[0];
        assert_eq!(first.supports, "IF-MIB");
        assert_eq!(first.includes.len(), 2);
        assert_eq!(first.variations.len(), 2);
        let variation = &first.variations[0];
        assert_eq!(variation.name, "ifAdminStatus");
        assert!(variation.syntax.is_some());
        assert_eq!(variation.access, Some(Access::ReadOnly));
        assert_eq!(first.variations[1].defval.as_deref(), Some("up"));

        assert_eq!(capabilities.modules[1].supports, "TCP-MIB");
        assert!(capabilities.modules[1].variations.is_empty());
    }

    #[test]
    fn agent_capabilities_variation_allows_not_implemented() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             a AGENT-CAPABILITIES
                 PRODUCT-RELEASE \"r\"
                 STATUS current
                 DESCRIPTION \"d\"
                 SUPPORTS SOME-MIB
                     INCLUDES { g }
                     VARIATION obj
                         ACCESS not-implemented
                         CREATION-REQUIRES { other, }
                         DESCRIPTION \"not there\"
                 ::= { caps 2 }
             END",
        );
        let variation = &module.body.nodes[0].agent_capabilities().unwrap().modules[0].variations[0];
        assert_eq!(variation.access, Some(Access::NotImplemented));
        assert_eq!(variation.creation_requires, vec![Identifier::from("other")]);
    }

    #[test]
    fn type_assignment_alias() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             InterfaceIndex ::= Integer32 (1..2147483647)
             END",
        );
        assert_eq!(module.body.types.len(), 1);
        let ty = &module.body.types[0];
        assert_eq!(ty.name, "InterfaceIndex");
        match &ty.body {
            TypeBody::Syntax(syntax) => {
                assert_eq!(syntax.name, "Integer32");
                assert!(syntax.sub_type().is_some());
            }
            _ => panic!("expected a plain syntax body"),
        }
    }

    #[test]
    fn type_assignment_sequence() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             EvalEntry ::= SEQUENCE {
                 evalIndex       Integer32,
                 evalString      DisplayString,
                 evalStatus      RowStatus
             }
             END",
        );
        match &module.body.types[0].body {
            TypeBody::Sequence(sequence) => {
                assert_eq!(sequence.kind, SequenceKind::Sequence);
                assert_eq!(sequence.entries.len(), 3);
                assert_eq!(sequence.entries[0].descriptor, "evalIndex");
                assert_eq!(sequence.entries[0].syntax.name, "Integer32");
            }
            _ => panic!("expected a SEQUENCE body"),
        }
    }

    #[test]
    fn type_assignment_choice_with_multiword_syntax() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             NetworkAddress ::= CHOICE {
                 internet IpAddress,
                 opaque OCTET STRING,
                 oid OBJECT IDENTIFIER,
             }
             END",
        );
        match &module.body.types[0].body {
            TypeBody::Sequence(sequence) => {
                assert_eq!(sequence.kind, SequenceKind::Choice);
                assert_eq!(sequence.entries.len(), 3);
                assert_eq!(sequence.entries[1].syntax.name, "OCTET STRING");
                assert_eq!(sequence.entries[2].syntax.name, "OBJECT IDENTIFIER");
            }
            _ => panic!("expected a CHOICE body"),
        }
    }

    #[test]
    fn type_assignment_implicit_tag() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             Counter ::= [APPLICATION 1] IMPLICIT INTEGER (0..4294967295)
             END",
        );
        match &module.body.types[0].body {
            TypeBody::Implicit(implicit) => {
                assert_eq!(implicit.tag, "[APPLICATION 1]");
                assert_eq!(implicit.syntax.name, "INTEGER");
                assert!(implicit.syntax.sub_type().is_some());
            }
            _ => panic!("expected an IMPLICIT body"),
        }
    }

    #[test]
    fn textual_convention() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             DisplayString ::= TEXTUAL-CONVENTION
                 DISPLAY-HINT \"255a\"
                 STATUS       current
                 DESCRIPTION  \"Represents textual information.\"
                 REFERENCE    \"RFC 2579\"
                 SYNTAX       OCTET STRING (SIZE (0..255))
             END",
        );
        match &module.body.types[0].body {
            TypeBody::TextualConvention(tc) => {
                assert_eq!(tc.display_hint.as_deref(), Some("255a"));
                assert_eq!(tc.status, Status::Current);
                assert_eq!(tc.reference.as_deref(), Some("RFC 2579"));
                assert_eq!(tc.syntax.name, "OCTET STRING");
                assert!(matches!(tc.syntax.sub_type(), Some(SubType::Size(_))));
            }
            _ => panic!("expected a TEXTUAL-CONVENTION body"),
        }
    }

    #[test]
    fn textual_convention_missing_syntax() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             Bad ::= TEXTUAL-CONVENTION
                 STATUS current
                 DESCRIPTION \"no syntax\"
             END",
        );
    }

    #[test]
    fn macro_body_sections() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             OBJECT-TYPE MACRO ::=
             BEGIN
                 TYPE NOTATION ::= Syntax UnitsPart AccessPart
                 VALUE NOTATION ::= value ( VALUE ObjectName )
                 UnitsPart ::= \"UNITS\" Text | empty
                 StatusPart ::= \"STATUS\" Status
             END
             END",
        );
        assert_eq!(module.body.macros.len(), 1);
        let definition = &module.body.macros[0];
        assert_eq!(definition.name, "OBJECT-TYPE");
        let body = &definition.body;
        assert_eq!(
            body.type_notation.as_deref(),
            Some("Syntax UnitsPart AccessPart")
        );
        assert_eq!(
            body.value_notation.as_deref(),
            Some("value ( VALUE ObjectName )")
        );
        assert_eq!(
            body.tokens.get("UnitsPart").map(String::as_str),
            Some("\"UNITS\" Text | empty")
        );
        assert_eq!(
            body.tokens.get("StatusPart").map(String::as_str),
            Some("\"STATUS\" Status")
        );
    }

    #[test]
    fn minimal_macro_body() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             MINIMAL-MACRO MACRO ::=
             BEGIN
                 -- no notations, no tokens
             END
             END",
        );
        let body = &module.body.macros[0].body;
        assert!(body.type_notation.is_none());
        assert!(body.value_notation.is_none());
        assert!(body.tokens.is_empty());
    }

    #[test]
    fn macro_value_notation_spacing() {
        let module = parse_ok(
            "TEST-MIB DEFINITIONS ::= BEGIN
             VALUE-ONLY MACRO ::=
             BEGIN
                 VALUE NOTATION ::= someValue(1)
             END
             END",
        );
        assert_eq!(
            module.body.macros[0].body.value_notation.as_deref(),
            Some("someValue ( 1 )")
        );
    }

    #[test]
    fn macro_missing_end() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             BAD-MACRO MACRO ::=
             BEGIN
                 TYPE NOTATION ::= foo
             ",
        );
    }

    #[test]
    fn macro_illegal_token_inside_body() {
        parse_err(
            "TEST-MIB DEFINITIONS ::= BEGIN
             BAD-MACRO MACRO ::=
             BEGIN
                 TYPE NOTATION ::= $invalid$
             END
             END",
        );
    }

    #[test]
    fn trailing_tokens_after_end_rejected() {
        parse_err("TEST-MIB DEFINITIONS ::= BEGIN END leftover");
    }

    #[test]
    fn whitespace_insensitive_reparse_yields_same_ast() {
        let compact = parse_ok(
            "T-MIB DEFINITIONS ::= BEGIN t OBJECT-TYPE SYNTAX INTEGER { a(1) } MAX-ACCESS read-only STATUS current DESCRIPTION \"d\" ::= { x 1 } END",
        );
        let spread = parse_ok(
            "T-MIB DEFINITIONS ::=\n  BEGIN\n  t OBJECT-TYPE\n    SYNTAX INTEGER { a(1) }\n    MAX-ACCESS read-only\n    STATUS current\n    DESCRIPTION \"d\"\n    ::= { x 1 }\n  END",
        );
        let a = compact.body.nodes[0].object_type().unwrap();
        let b = spread.body.nodes[0].object_type().unwrap();
        assert_eq!(a.syntax, b.syntax);
        assert_eq!(a.access, b.access);
        assert_eq!(a.status, b.status);
        assert_eq!(a.description, b.description);
    }

    #[test]
    fn parse_error_display_includes_position() {
        let error = parse_err("TEST-MIB DEFINITIONS ::= BEGIN ::");
        let rendered = format!("{error}");
        assert!(rendered.starts_with("test.mib:"), "rendered: {rendered}");
    }
}
