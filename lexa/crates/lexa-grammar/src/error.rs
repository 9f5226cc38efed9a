//! Error types for grammar construction.
//!
//! Every variant describes a defect in a grammar definition. They are detected
//! when a configuration is built, never while probing text.

use thiserror::Error;

/// A contract violation found while building a language configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A spelling appears in both reserved sets.
    #[error("{language}: `{spelling}` is both a reserved identifier and a reserved operator")]
    ReservedOverlap {
        language: &'static str,
        spelling: &'static str,
    },

    /// A reserved identifier the identifier grammar would never produce.
    #[error("{language}: reserved identifier `{spelling}` is not a well-formed identifier")]
    ReservedNotIdentifier {
        language: &'static str,
        spelling: &'static str,
    },

    /// An empty string in a reserved set.
    #[error("{language}: reserved sets may not contain the empty string")]
    EmptyReserved { language: &'static str },

    /// An earlier delimiter alternative hides a later one.
    #[error("delimiter `{earlier}` is tried before `{later}` and shadows it")]
    ShadowedDelimiter {
        earlier: &'static str,
        later: &'static str,
    },

    /// An earlier literal prefix hides a later one.
    #[error("literal prefix `{earlier}` is tried before `{later}` and shadows it")]
    ShadowedPrefix {
        earlier: &'static str,
        later: &'static str,
    },

    /// An unprefixed numeric form is tried before a prefixed one.
    #[error("{earlier} literal is tried before the prefixed {later} literal and shadows it")]
    ShadowedNumericForm {
        earlier: &'static str,
        later: &'static str,
    },

    /// A delimiter, comment marker or prefix with no characters.
    #[error("{what} may not be empty")]
    EmptyDelimiter { what: &'static str },
}

/// Result type alias for grammar construction.
pub type GrammarResult<T> = std::result::Result<T, GrammarError>;

/// Error returned when a language name or extension is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(pub String);
