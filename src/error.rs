use crate::value::ValueType;
use std::fmt;
use thiserror::Error;

/// What a conversion expected its boundary value to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRequirement {
    /// Kebab conversion: any string, `null` rejected up front.
    NonNullString,
    /// camelCase / dot.case: any string, reporting what arrived instead.
    String { received: ValueType },
}

impl fmt::Display for TypeRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRequirement::NonNullString => write!(f, "Input must be a non-null string."),
            TypeRequirement::String { received } => {
                write!(f, "Expected a string, but received {}", received)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("{0}")]
    InvalidInputType(TypeRequirement),
}

impl CaseError {
    /// Runtime type of the rejected value, when the failing check records it.
    pub fn received(&self) -> Option<ValueType> {
        match self {
            CaseError::InvalidInputType(TypeRequirement::String { received }) => Some(*received),
            CaseError::InvalidInputType(TypeRequirement::NonNullString) => None,
        }
    }
}

pub type Result<T, E = CaseError> = std::result::Result<T, E>;
