use thiserror::Error;

/// Generation failed because the environment could not supply randomness.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("random source unavailable: {0}")]
    RandomSource(String),
}

/// The family a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The input could not be deserialized.
    InvalidFormat,
    /// A required value is empty.
    Empty,
    /// A numeric value is outside its global bound.
    OutOfRange,
    /// A value is not on its allowlist.
    NotAllowed,
    /// A sequence has too many entries.
    TooMany,
    /// The user-agent does not follow the browser grammar.
    UserAgentGrammar,
}

/// One violated validation rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid fingerprint format: {0}")]
    InvalidFormat(String),

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: String,
        max: String,
    },

    #[error("{field} '{value}' is not allowed")]
    NotAllowed { field: &'static str, value: String },

    #[error("{field} has {len} entries, at most {max} allowed")]
    TooMany {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("userAgent does not match the browser user-agent grammar")]
    UserAgentGrammar,
}

impl ValidationError {
    /// The rule family.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::InvalidFormat(_) => ValidationErrorKind::InvalidFormat,
            ValidationError::Empty { .. } => ValidationErrorKind::Empty,
            ValidationError::OutOfRange { .. } => ValidationErrorKind::OutOfRange,
            ValidationError::NotAllowed { .. } => ValidationErrorKind::NotAllowed,
            ValidationError::TooMany { .. } => ValidationErrorKind::TooMany,
            ValidationError::UserAgentGrammar => ValidationErrorKind::UserAgentGrammar,
        }
    }

    /// The JSON key of the offending attribute, if one applies.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::Empty { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::TooMany { field, .. } => Some(field),
            ValidationError::UserAgentGrammar => Some("userAgent"),
            ValidationError::InvalidFormat(_) => None,
        }
    }
}
