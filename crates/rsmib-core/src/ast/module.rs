//! Module-level AST types.

use super::{Identifier, Macro, ModuleIdentity, Node, Type};
use crate::lexer::Position;
use alloc::vec::Vec;

/// A parsed MIB module.
///
/// ```text
/// MODULE-NAME DEFINITIONS ::= BEGIN
///     IMPORTS ... ;
///     <definitions>
/// END
/// ```
#[derive(Clone, Debug)]
pub struct Module {
    /// Module name, e.g. `IF-MIB`.
    pub name: Identifier,
    /// Everything between BEGIN and END.
    pub body: ModuleBody,
    /// Location of the module name.
    pub position: Position,
}

/// The body of a module, grouped by definition class.
#[derive(Clone, Debug, Default)]
pub struct ModuleBody {
    /// Names listed in the EXPORTS clause (SMIv1, rare).
    pub exports: Vec<Identifier>,
    /// Import clauses, one per `FROM` group, in source order.
    pub imports: Vec<Import>,
    /// The module's MODULE-IDENTITY, when present. The first identity
    /// definition lands here instead of in `nodes`.
    pub identity: Option<ModuleIdentity>,
    /// OID-bearing definitions (macro instances and bare assignments).
    pub nodes: Vec<Node>,
    /// Type assignments.
    pub types: Vec<Type>,
    /// User-defined MACRO definitions.
    pub macros: Vec<Macro>,
}

/// One `<names> FROM <module>` group of an IMPORTS clause.
///
/// A single `IMPORTS` keyword may introduce several groups terminated by
/// one semicolon; each group becomes one `Import`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Import {
    /// The imported names. Never empty.
    pub names: Vec<Identifier>,
    /// The module they come from.
    pub module: Identifier,
    /// Location of the first imported name.
    pub position: Position,
}
