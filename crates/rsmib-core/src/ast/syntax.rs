//! Type syntax AST: SYNTAX clauses, refinements, and type assignments.

use super::{Identifier, Status};
use crate::lexer::Position;
use alloc::string::String;
use alloc::vec::Vec;

/// The syntax of an OBJECT-TYPE or compliance refinement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Syntax {
    /// Table syntax: `SEQUENCE OF EntryType`
    SequenceOf(Identifier),
    /// Everything else.
    Type(SyntaxType),
}

impl Syntax {
    /// The inner [`SyntaxType`], unless this is `SEQUENCE OF`.
    #[must_use]
    pub fn syntax_type(&self) -> Option<&SyntaxType> {
        match self {
            Self::SequenceOf(_) => None,
            Self::Type(syntax_type) => Some(syntax_type),
        }
    }

    /// The entry type of a `SEQUENCE OF` syntax.
    #[must_use]
    pub fn sequence_of(&self) -> Option<&Identifier> {
        match self {
            Self::SequenceOf(entry) => Some(entry),
            Self::Type(_) => None,
        }
    }
}

/// A type reference with an optional refinement.
///
/// `name` may be a base type (`INTEGER`, `OCTET STRING`,
/// `OBJECT IDENTIFIER`, `BITS`) or any user-defined identifier. The
/// refinement is either a sub-typing constraint or an enumeration,
/// never both.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxType {
    /// The referenced type name.
    pub name: Identifier,
    /// Optional refinement.
    pub constraint: Option<SyntaxConstraint>,
    /// Location of the type name.
    pub position: Position,
}

impl SyntaxType {
    /// The sub-typing constraint, if present.
    #[must_use]
    pub fn sub_type(&self) -> Option<&SubType> {
        match &self.constraint {
            Some(SyntaxConstraint::SubType(sub_type)) => Some(sub_type),
            _ => None,
        }
    }

    /// The named values of an `INTEGER { ... }` / `BITS { ... }` refinement.
    #[must_use]
    pub fn named_values(&self) -> Option<&[NamedNumber]> {
        match &self.constraint {
            Some(SyntaxConstraint::Enum(values)) => Some(values),
            _ => None,
        }
    }
}

/// Refinement attached to a [`SyntaxType`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxConstraint {
    /// Parenthesized ranges: `(0..255)` or `(SIZE (0..255))`
    SubType(SubType),
    /// Enumeration: `INTEGER { up(1), down(2) }`, `BITS { a(0), b(1) }`
    Enum(Vec<NamedNumber>),
}

/// Sub-typing constraint: ranges, directly or under `SIZE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubType {
    /// `(SIZE (0..255 | 1024))` - octet-string-family length ranges.
    Size(Vec<Range>),
    /// `(0..255 | 512)` - integer-family value ranges.
    Integer(Vec<Range>),
}

impl SubType {
    /// The ranges regardless of flavor.
    #[must_use]
    pub fn ranges(&self) -> &[Range] {
        match self {
            Self::Size(ranges) | Self::Integer(ranges) => ranges,
        }
    }
}

/// One range of a sub-typing constraint.
///
/// Endpoints keep their literal lexemes (`"0"`, `"-10"`, `"'FF'H"`,
/// `"MAX"`) for later numeric interpretation by the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Range {
    /// Lower endpoint, or the single value when `end` is absent.
    pub start: String,
    /// Upper endpoint of a `start..end` range.
    pub end: Option<String>,
}

/// Named number in an enumeration or BITS list, e.g. `up(1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedNumber {
    /// The label.
    pub name: Identifier,
    /// The signed integer lexeme.
    pub value: String,
}

/// A type assignment: `Name ::= <body>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Type {
    /// Assigned type name.
    pub name: Identifier,
    /// The assigned body.
    pub body: TypeBody,
    /// Location of the type name.
    pub position: Position,
}

/// Body of a type assignment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeBody {
    /// `::= TEXTUAL-CONVENTION ...`
    TextualConvention(TextualConvention),
    /// `::= SEQUENCE { ... }` or `::= CHOICE { ... }`
    Sequence(Sequence),
    /// `::= [APPLICATION n] IMPLICIT <syntax>`
    Implicit(Implicit),
    /// `::= <syntax>` - a plain refinement or alias.
    Syntax(SyntaxType),
}

/// A TEXTUAL-CONVENTION body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextualConvention {
    /// DISPLAY-HINT value.
    pub display_hint: Option<String>,
    /// STATUS value.
    pub status: Status,
    /// DESCRIPTION text.
    pub description: String,
    /// REFERENCE text.
    pub reference: Option<String>,
    /// Underlying SYNTAX.
    pub syntax: SyntaxType,
}

/// A SEQUENCE or CHOICE body with at least one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequence {
    /// SEQUENCE or CHOICE.
    pub kind: SequenceKind,
    /// The entries, in source order.
    pub entries: Vec<SequenceEntry>,
}

/// Discriminates SEQUENCE from CHOICE bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceKind {
    /// `SEQUENCE { ... }`
    Sequence,
    /// `CHOICE { ... }`
    Choice,
}

/// One entry of a SEQUENCE or CHOICE body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceEntry {
    /// Field descriptor.
    pub descriptor: Identifier,
    /// Field syntax.
    pub syntax: SyntaxType,
}

/// An implicitly tagged type: `[APPLICATION n] IMPLICIT <syntax>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Implicit {
    /// The ASN.1 tag lexeme, e.g. `[APPLICATION 4]`.
    pub tag: String,
    /// The tagged syntax.
    pub syntax: SyntaxType,
}
