//! OID-bearing definitions: macro instances and bare OID assignments.

use super::{Access, Date, Identifier, Oid, Status, Syntax};
use crate::lexer::Position;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

/// One OID-bearing definition in a module body.
///
/// `oid` is `None` only for TRAP-TYPE definitions, whose assignment is a
/// bare trap number rather than an OID value; the number is preserved on
/// the [`TrapType`] payload for the resolver.
#[derive(Clone, Debug)]
pub struct Node {
    /// Defined name.
    pub name: Identifier,
    /// The assigned OID value.
    pub oid: Option<Oid>,
    /// Location of the defined name.
    pub position: Position,
    /// Which kind of definition this is.
    pub kind: NodeKind,
}

impl Node {
    /// The OBJECT-TYPE payload, if this node is one.
    #[must_use]
    pub fn object_type(&self) -> Option<&ObjectType> {
        match &self.kind {
            NodeKind::ObjectType(def) => Some(def),
            _ => None,
        }
    }

    /// The OBJECT-IDENTITY payload, if this node is one.
    #[must_use]
    pub fn object_identity(&self) -> Option<&ObjectIdentity> {
        match &self.kind {
            NodeKind::ObjectIdentity(def) => Some(def),
            _ => None,
        }
    }

    /// The NOTIFICATION-TYPE payload, if this node is one.
    #[must_use]
    pub fn notification_type(&self) -> Option<&NotificationType> {
        match &self.kind {
            NodeKind::NotificationType(def) => Some(def),
            _ => None,
        }
    }

    /// The TRAP-TYPE payload, if this node is one.
    #[must_use]
    pub fn trap_type(&self) -> Option<&TrapType> {
        match &self.kind {
            NodeKind::TrapType(def) => Some(def),
            _ => None,
        }
    }

    /// The OBJECT-GROUP payload, if this node is one.
    #[must_use]
    pub fn object_group(&self) -> Option<&ObjectGroup> {
        match &self.kind {
            NodeKind::ObjectGroup(def) => Some(def),
            _ => None,
        }
    }

    /// The NOTIFICATION-GROUP payload, if this node is one.
    #[must_use]
    pub fn notification_group(&self) -> Option<&NotificationGroup> {
        match &self.kind {
            NodeKind::NotificationGroup(def) => Some(def),
            _ => None,
        }
    }

    /// The MODULE-COMPLIANCE payload, if this node is one.
    #[must_use]
    pub fn module_compliance(&self) -> Option<&ModuleCompliance> {
        match &self.kind {
            NodeKind::ModuleCompliance(def) => Some(def),
            _ => None,
        }
    }

    /// The AGENT-CAPABILITIES payload, if this node is one.
    #[must_use]
    pub fn agent_capabilities(&self) -> Option<&AgentCapabilities> {
        match &self.kind {
            NodeKind::AgentCapabilities(def) => Some(def),
            _ => None,
        }
    }
}

/// Discriminates the definition kinds a [`Node`] can hold.
#[derive(Clone, Debug)]
pub enum NodeKind {
    /// Bare assignment: `name OBJECT IDENTIFIER ::= { ... }`
    OidAssignment,
    /// `name OBJECT-IDENTITY ...`
    ObjectIdentity(ObjectIdentity),
    /// `name OBJECT-TYPE ...`
    ObjectType(ObjectType),
    /// `name NOTIFICATION-TYPE ...`
    NotificationType(NotificationType),
    /// `name TRAP-TYPE ...` (SMIv1)
    TrapType(TrapType),
    /// `name OBJECT-GROUP ...`
    ObjectGroup(ObjectGroup),
    /// `name NOTIFICATION-GROUP ...`
    NotificationGroup(NotificationGroup),
    /// `name MODULE-COMPLIANCE ...`
    ModuleCompliance(ModuleCompliance),
    /// `name AGENT-CAPABILITIES ...`
    AgentCapabilities(AgentCapabilities),
    /// A MODULE-IDENTITY that was not the module's first one. The first
    /// one is hoisted to [`ModuleBody::identity`](super::ModuleBody).
    ModuleIdentity(ModuleIdentity),
}

/// MODULE-IDENTITY definition.
///
/// Carries its own name and OID so it can live on
/// [`ModuleBody::identity`](super::ModuleBody) detached from any node.
#[derive(Clone, Debug)]
pub struct ModuleIdentity {
    /// Identity name.
    pub name: Identifier,
    /// LAST-UPDATED timestamp.
    pub last_updated: Date,
    /// ORGANIZATION text.
    pub organization: String,
    /// CONTACT-INFO text.
    pub contact_info: String,
    /// DESCRIPTION text.
    pub description: String,
    /// REVISION history, in source order.
    pub revisions: Vec<Revision>,
    /// The assigned OID value.
    pub oid: Option<Oid>,
    /// Location of the identity name.
    pub position: Position,
}

/// One REVISION entry of a MODULE-IDENTITY.
#[derive(Clone, Debug)]
pub struct Revision {
    /// Revision timestamp.
    pub date: Date,
    /// Revision description.
    pub description: String,
}

/// OBJECT-IDENTITY definition.
#[derive(Clone, Debug)]
pub struct ObjectIdentity {
    /// STATUS value.
    pub status: Status,
    /// DESCRIPTION text.
    pub description: String,
    /// REFERENCE text.
    pub reference: Option<String>,
}

/// OBJECT-TYPE definition, the workhorse of any MIB.
///
/// ```text
/// ifIndex OBJECT-TYPE
///     SYNTAX      InterfaceIndex
///     MAX-ACCESS  read-only
///     STATUS      current
///     DESCRIPTION "..."
///     ::= { ifEntry 1 }
/// ```
#[derive(Clone, Debug)]
pub struct ObjectType {
    /// SYNTAX clause.
    pub syntax: Syntax,
    /// UNITS text.
    pub units: Option<String>,
    /// MAX-ACCESS (SMIv2) or ACCESS (SMIv1) value.
    pub access: Access,
    /// STATUS value.
    pub status: Status,
    /// DESCRIPTION text. Optional in SMIv1.
    pub description: Option<String>,
    /// REFERENCE text.
    pub reference: Option<String>,
    /// INDEX entries of a row definition. Empty when absent.
    pub index: Vec<IndexEntry>,
    /// AUGMENTS target of a row definition. Mutually exclusive with `index`.
    pub augments: Option<Identifier>,
    /// DEFVAL payload, preserved as written for the resolver.
    pub defval: Option<String>,
}

/// One entry of an INDEX clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    /// Whether the entry is marked IMPLIED.
    pub implied: bool,
    /// The indexing object.
    pub name: Identifier,
}

/// NOTIFICATION-TYPE definition (SMIv2).
#[derive(Clone, Debug)]
pub struct NotificationType {
    /// OBJECTS varbind list. Empty when absent.
    pub objects: Vec<Identifier>,
    /// STATUS value.
    pub status: Status,
    /// DESCRIPTION text.
    pub description: String,
    /// REFERENCE text.
    pub reference: Option<String>,
}

/// TRAP-TYPE definition (SMIv1).
///
/// The assignment is a bare trap number; the enclosing node's `oid`
/// stays `None` and the resolver combines `enterprise` with `number`.
#[derive(Clone, Debug)]
pub struct TrapType {
    /// ENTERPRISE reference.
    pub enterprise: Identifier,
    /// VARIABLES varbind list. Empty when absent.
    pub variables: Vec<Identifier>,
    /// DESCRIPTION text.
    pub description: Option<String>,
    /// REFERENCE text.
    pub reference: Option<String>,
    /// The trap number lexeme from `::= <number>`.
    pub number: String,
}

/// OBJECT-GROUP definition.
#[derive(Clone, Debug)]
pub struct ObjectGroup {
    /// The grouped objects. Never empty.
    pub objects: Vec<Identifier>,
    /// STATUS value.
    pub status: Status,
    /// DESCRIPTION text.
    pub description: String,
    /// REFERENCE text.
    pub reference: Option<String>,
}

/// NOTIFICATION-GROUP definition.
#[derive(Clone, Debug)]
pub struct NotificationGroup {
    /// The grouped notifications. Never empty.
    pub notifications: Vec<Identifier>,
    /// STATUS value.
    pub status: Status,
    /// DESCRIPTION text.
    pub description: String,
    /// REFERENCE text.
    pub reference: Option<String>,
}

/// MODULE-COMPLIANCE definition.
#[derive(Clone, Debug)]
pub struct ModuleCompliance {
    /// STATUS value.
    pub status: Status,
    /// DESCRIPTION text.
    pub description: String,
    /// REFERENCE text.
    pub reference: Option<String>,
    /// MODULE clauses, at least one.
    pub modules: Vec<ComplianceModule>,
}

/// One MODULE clause of a MODULE-COMPLIANCE.
#[derive(Clone, Debug)]
pub struct ComplianceModule {
    /// Module name; `None` means the current module.
    pub name: Option<Identifier>,
    /// MANDATORY-GROUPS list. Empty when absent.
    pub mandatory_groups: Vec<Identifier>,
    /// GROUP and OBJECT refinements, in source order.
    pub compliances: Vec<Compliance>,
}

/// A conditional-compliance item inside a MODULE clause.
#[derive(Clone, Debug)]
pub enum Compliance {
    /// `GROUP <name> DESCRIPTION <text>`
    Group(ComplianceGroup),
    /// `OBJECT <name> ... DESCRIPTION <text>`
    Object(ComplianceObject),
}

/// GROUP refinement of a compliance MODULE clause.
#[derive(Clone, Debug)]
pub struct ComplianceGroup {
    /// The conditionally required group.
    pub name: Identifier,
    /// Why it is conditional.
    pub description: String,
}

/// OBJECT refinement of a compliance MODULE clause.
#[derive(Clone, Debug)]
pub struct ComplianceObject {
    /// The refined object.
    pub name: Identifier,
    /// SYNTAX restriction.
    pub syntax: Option<Syntax>,
    /// WRITE-SYNTAX restriction.
    pub write_syntax: Option<Syntax>,
    /// MIN-ACCESS restriction.
    pub min_access: Option<Access>,
    /// Refinement rationale.
    pub description: String,
}

/// AGENT-CAPABILITIES definition.
#[derive(Clone, Debug)]
pub struct AgentCapabilities {
    /// PRODUCT-RELEASE text.
    pub product_release: String,
    /// STATUS value.
    pub status: Status,
    /// DESCRIPTION text.
    pub description: String,
    /// REFERENCE text.
    pub reference: Option<String>,
    /// SUPPORTS clauses, in source order.
    pub modules: Vec<CapabilitiesModule>,
}

/// One SUPPORTS clause of an AGENT-CAPABILITIES.
#[derive(Clone, Debug)]
pub struct CapabilitiesModule {
    /// The supported module.
    pub supports: Identifier,
    /// INCLUDES group list. Required, never empty.
    pub includes: Vec<Identifier>,
    /// VARIATION refinements, in source order.
    pub variations: Vec<Variation>,
}

/// One VARIATION of a SUPPORTS clause.
#[derive(Clone, Debug)]
pub struct Variation {
    /// The varied object or notification.
    pub name: Identifier,
    /// SYNTAX restriction.
    pub syntax: Option<Syntax>,
    /// WRITE-SYNTAX restriction.
    pub write_syntax: Option<Syntax>,
    /// ACCESS restriction.
    pub access: Option<Access>,
    /// CREATION-REQUIRES list. Empty when absent.
    pub creation_requires: Vec<Identifier>,
    /// DEFVAL payload, preserved as written.
    pub defval: Option<String>,
    /// Variation rationale.
    pub description: String,
}

/// A user-defined MACRO definition, e.g. `OBJECT-TYPE MACRO ::= BEGIN ... END`.
///
/// The body is kept opaquely; its notation grammar is not interpreted.
#[derive(Clone, Debug)]
pub struct Macro {
    /// MACRO name.
    pub name: Identifier,
    /// The opaque body.
    pub body: MacroBody,
    /// Location of the MACRO name.
    pub position: Position,
}

/// Opaquely collected MACRO body sections.
///
/// The body text between BEGIN and END is split into sections at
/// `TYPE NOTATION`, `VALUE NOTATION`, and `<name> ::=` headers. Section
/// text is the source tokens joined by single spaces, with text literals
/// re-quoted so their lexical shape survives for human inspection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MacroBody {
    /// The `TYPE NOTATION ::= ...` section.
    pub type_notation: Option<String>,
    /// The `VALUE NOTATION ::= ...` section.
    pub value_notation: Option<String>,
    /// All other `<name> ::= ...` sections, keyed by name.
    pub tokens: BTreeMap<String, String>,
}
