//! Abstract Syntax Tree types for parsed MIB modules.
//!
//! The AST captures syntactic structure as-written, preserving source
//! positions for diagnostics. Cross-references between definitions are
//! kept as plain identifiers; resolving them into a graph is the job of
//! a downstream resolver, not this crate.

mod common;
mod definition;
mod module;
mod oid;
mod syntax;

pub use common::{Access, Date, DateError, Identifier, Status};
pub use definition::{
    AgentCapabilities, CapabilitiesModule, Compliance, ComplianceGroup, ComplianceModule,
    ComplianceObject, IndexEntry, Macro, MacroBody, ModuleCompliance, ModuleIdentity, Node,
    NodeKind, NotificationGroup, NotificationType, ObjectGroup, ObjectIdentity, ObjectType,
    Revision, TrapType, Variation,
};
pub use module::{Import, Module, ModuleBody};
pub use oid::{Oid, SubIdentifier};
pub use syntax::{
    Implicit, NamedNumber, Range, Sequence, SequenceEntry, SequenceKind, SubType, Syntax,
    SyntaxConstraint, SyntaxType, TextualConvention, Type, TypeBody,
};
