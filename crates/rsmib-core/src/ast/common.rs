//! Common AST types used across modules.

use alloc::string::String;
use core::fmt;

/// Identifier as written in the source.
///
/// SMI identifiers are case-sensitive. Uppercase initials denote module
/// and type names; lowercase initials denote object names and labels.
/// The parser does not enforce the case convention.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(pub String);

impl Identifier {
    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Self(String::from(name))
    }
}

impl From<String> for Identifier {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// An ExtUTCTime lexeme, e.g. `202404300000Z` or `9505241811Z`.
///
/// Stored without quotes, exactly as written apart from the upper-cased
/// suffix. Use [`to_datetime`](Date::to_datetime) to interpret it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Date(pub String);

impl Date {
    /// The raw lexeme.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the lexeme as a calendar timestamp (UTC).
    ///
    /// Accepts `YYMMDDHHMMZ` and `YYYYMMDDHHMMZ`. Two-digit years follow
    /// the usual SMI convention: 69–99 mean 19xx, 00–68 mean 20xx.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Malformed`] when the lexeme does not have one
    /// of the two shapes, and [`DateError::OutOfRange`] when a field is
    /// not a valid calendar value (month 13, hour 25, ...).
    pub fn to_datetime(&self) -> Result<time::PrimitiveDateTime, DateError> {
        let digits = self
            .0
            .strip_suffix(['Z', 'z'])
            .ok_or(DateError::Malformed)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::Malformed);
        }

        let (year, rest) = match digits.len() {
            10 => {
                let two: i32 = digits[..2].parse().map_err(|_| DateError::Malformed)?;
                let year = if two >= 69 { 1900 + two } else { 2000 + two };
                (year, &digits[2..])
            }
            12 => {
                let year: i32 = digits[..4].parse().map_err(|_| DateError::Malformed)?;
                (year, &digits[4..])
            }
            _ => return Err(DateError::Malformed),
        };

        let field = |range: core::ops::Range<usize>| -> Result<u8, DateError> {
            rest[range].parse().map_err(|_| DateError::Malformed)
        };
        let month = time::Month::try_from(field(0..2)?).map_err(|_| DateError::OutOfRange)?;
        let date = time::Date::from_calendar_date(year, month, field(2..4)?)
            .map_err(|_| DateError::OutOfRange)?;
        let tod = time::Time::from_hms(field(4..6)?, field(6..8)?, 0)
            .map_err(|_| DateError::OutOfRange)?;
        Ok(time::PrimitiveDateTime::new(date, tod))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error interpreting a [`Date`] lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateError {
    /// Not a 10- or 12-digit string with a `Z` suffix.
    Malformed,
    /// Digits are well-formed but name an impossible calendar value.
    OutOfRange,
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => f.write_str("malformed ExtUTCTime lexeme"),
            Self::OutOfRange => f.write_str("ExtUTCTime field out of range"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DateError {}

/// STATUS clause value.
///
/// `mandatory` and `optional` are SMIv1-only; the parser rejects them in
/// SMIv2-only macros.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// `mandatory` (SMIv1)
    Mandatory,
    /// `optional` (SMIv1)
    Optional,
    /// `current`
    Current,
    /// `deprecated`
    Deprecated,
    /// `obsolete`
    Obsolete,
}

impl Status {
    /// The literal as it appears in MIB source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mandatory => "mandatory",
            Self::Optional => "optional",
            Self::Current => "current",
            Self::Deprecated => "deprecated",
            Self::Obsolete => "obsolete",
        }
    }

    /// Map a source literal to its status value.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "mandatory" => Some(Self::Mandatory),
            "optional" => Some(Self::Optional),
            "current" => Some(Self::Current),
            "deprecated" => Some(Self::Deprecated),
            "obsolete" => Some(Self::Obsolete),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ACCESS / MAX-ACCESS / MIN-ACCESS clause value.
///
/// Which subset is legal depends on the macro; see the per-clause
/// parsers. `not-implemented` only appears in AGENT-CAPABILITIES
/// variations, `write-only` is SMIv1 legacy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    /// `not-accessible`
    NotAccessible,
    /// `accessible-for-notify`
    AccessibleForNotify,
    /// `read-only`
    ReadOnly,
    /// `read-write`
    ReadWrite,
    /// `read-create`
    ReadCreate,
    /// `write-only`
    WriteOnly,
    /// `not-implemented`
    NotImplemented,
}

impl Access {
    /// The literal as it appears in MIB source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotAccessible => "not-accessible",
            Self::AccessibleForNotify => "accessible-for-notify",
            Self::ReadOnly => "read-only",
            Self::ReadWrite => "read-write",
            Self::ReadCreate => "read-create",
            Self::WriteOnly => "write-only",
            Self::NotImplemented => "not-implemented",
        }
    }

    /// Map a source literal to its access value.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "not-accessible" => Some(Self::NotAccessible),
            "accessible-for-notify" => Some(Self::AccessibleForNotify),
            "read-only" => Some(Self::ReadOnly),
            "read-write" => Some(Self::ReadWrite),
            "read-create" => Some(Self::ReadCreate),
            "write-only" => Some(Self::WriteOnly),
            "not-implemented" => Some(Self::NotImplemented),
            _ => None,
        }
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
