//! OID value AST types.

use super::Identifier;
use crate::lexer::Position;
use alloc::vec::Vec;

/// An OID value, the `{ ... }` part of an assignment.
///
/// Examples:
/// - `{ ifEntry 1 }` - parent reference + number
/// - `{ iso org(3) dod(6) internet(1) }` - full path with named numbers
///
/// Always holds at least one sub-identifier; the parser rejects `{ }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Oid {
    /// The sub-identifiers, in source order.
    pub sub_identifiers: Vec<SubIdentifier>,
    /// Location of the opening brace.
    pub position: Position,
}

/// One sub-identifier of an OID value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubIdentifier {
    /// Numeric form: `1`
    Number(u32),
    /// Named reference: `internet`
    Name(Identifier),
    /// Named number: `org(3)`
    NamedNumber {
        /// The name.
        name: Identifier,
        /// The numeric value.
        number: u32,
    },
}

impl SubIdentifier {
    /// The name, if this sub-identifier has one.
    #[must_use]
    pub fn name(&self) -> Option<&Identifier> {
        match self {
            Self::Number(_) => None,
            Self::Name(name) | Self::NamedNumber { name, .. } => Some(name),
        }
    }

    /// The numeric value, if this sub-identifier has one.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        match self {
            Self::Name(_) => None,
            Self::Number(number) | Self::NamedNumber { number, .. } => Some(*number),
        }
    }
}
