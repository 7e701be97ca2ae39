//! Unified error type for the PetScale calculators.
//!
//! Every calculator funnels its failures into [`CalcError`].  None of them
//! are fatal: the host-facing functions log the error once and report the
//! metric as unknown, so a bad attribute never stops the evaluation loop.

use core::fmt;

use log::{error, warn};

// ---------------------------------------------------------------------------
// Calculator error
// ---------------------------------------------------------------------------

/// Why a metric could not be computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A required attribute or reading is absent.
    MissingInput { field: &'static str },
    /// A value is present but malformed (e.g. a birthday not in calendar form).
    UnparsableInput { field: &'static str, value: String },
    /// A well-formed categorical value has no entry in its factor table.
    UnknownKey { table: &'static str, key: String },
    /// The species is neither `dog` nor `cat`.
    InvalidSpecies(String),
}

impl CalcError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingInput { field }
    }

    pub fn unparsable(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnparsableInput {
            field,
            value: value.into(),
        }
    }

    pub fn unknown_key(table: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            table,
            key: key.into(),
        }
    }

    /// Report this error on the log channel.
    ///
    /// An invalid species can only come from a host that bypassed the
    /// species selector, so it is logged at error level.  Everything else is
    /// expected during normal operation and logged as a warning.
    pub fn log(&self, context: &str) {
        match self {
            Self::InvalidSpecies(_) => error!("{context}: {self}"),
            _ => warn!("{context}: {self}"),
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInput { field } => write!(f, "missing input: {field}"),
            Self::UnparsableInput { field, value } => {
                write!(f, "unparsable {field}: {value:?}")
            }
            Self::UnknownKey { table, key } => write!(f, "unknown {table} key: {key:?}"),
            Self::InvalidSpecies(value) => write!(f, "invalid species: {value:?}"),
        }
    }
}

impl std::error::Error for CalcError {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Calculator-wide `Result` alias.
pub type Result<T> = core::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_value() {
        let e = CalcError::unknown_key("breed", "dragon");
        assert_eq!(e.to_string(), "unknown breed key: \"dragon\"");

        let e = CalcError::unparsable("birthday", "yesterday");
        assert_eq!(e.to_string(), "unparsable birthday: \"yesterday\"");

        let e = CalcError::missing("temperament");
        assert_eq!(e.to_string(), "missing input: temperament");

        let e = CalcError::InvalidSpecies("hamster".into());
        assert_eq!(e.to_string(), "invalid species: \"hamster\"");
    }
}
