use core::fmt;
use core::panic::Location;

use thiserror::Error;

// -----------------------------------------------------------------------------
// ContractKind

/// Which side of a contract was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ContractKind {
    /// A requirement on the caller, checked on entry.
    Precondition,
    /// A promise of the callee, checked on exit.
    Postcondition,
    /// An internal invariant, checked anywhere.
    Assertion,
}

impl ContractKind {
    /// Lower-case name used in diagnostics.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Precondition => "precondition",
            Self::Postcondition => "postcondition",
            Self::Assertion => "assertion",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// ContractViolation

/// The error object produced when a contract check fails.
///
/// Under the `raise` policy this value is the panic payload, so it can be
/// recovered with [`catch_violation`](crate::catch_violation).
///
/// # Examples
///
/// ```
/// use gl_contract::{ContractKind, ContractViolation};
/// use core::panic::Location;
///
/// let v = ContractViolation::new(ContractKind::Precondition, Some("len > 0"), Location::caller());
///
/// assert_eq!(v.kind(), ContractKind::Precondition);
/// assert_eq!(v.message(), Some("len > 0"));
/// assert!(v.to_string().starts_with("precondition failure at "));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContractViolation {
    #[error("{kind} failure at {location}")]
    Bare {
        kind: ContractKind,
        location: &'static Location<'static>,
    },

    #[error("{kind} failure at {location}: {message}")]
    Described {
        kind: ContractKind,
        message: &'static str,
        location: &'static Location<'static>,
    },
}

impl ContractViolation {
    /// Creates a violation record. An empty message counts as no message.
    #[inline]
    pub const fn new(
        kind: ContractKind,
        message: Option<&'static str>,
        location: &'static Location<'static>,
    ) -> Self {
        match message {
            Some(message) if !message.is_empty() => Self::Described {
                kind,
                message,
                location,
            },
            _ => Self::Bare { kind, location },
        }
    }

    /// Returns which kind of contract was broken.
    #[inline]
    pub const fn kind(&self) -> ContractKind {
        match self {
            Self::Bare { kind, .. } | Self::Described { kind, .. } => *kind,
        }
    }

    /// Returns the diagnostic message, if one was supplied.
    #[inline]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::Bare { .. } => None,
            Self::Described { message, .. } => Some(*message),
        }
    }

    /// Returns the source location of the failed check.
    #[inline]
    pub const fn location(&self) -> &'static Location<'static> {
        match self {
            Self::Bare { location, .. } | Self::Described { location, .. } => *location,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
