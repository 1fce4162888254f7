// Two boundary checks that disagree on purpose: the kebab path rejects with a
// fixed message, the split-and-rejoin path names the offending type.

use crate::error::{CaseError, Result, TypeRequirement};
use crate::value::ValueType;
use serde_json::Value;

/// Accept only a string; `null` and everything else get the fixed message.
pub fn require_non_null_string(value: &Value) -> Result<&str> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        other => {
            tracing::debug!(received = %ValueType::of(other), "rejected non-string kebab input");
            Err(CaseError::InvalidInputType(TypeRequirement::NonNullString))
        }
    }
}

/// Accept only a string, reporting the runtime type of anything else.
pub fn require_string(value: &Value) -> Result<&str> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        other => {
            let received = ValueType::of(other);
            tracing::debug!(%received, "rejected non-string input");
            Err(CaseError::InvalidInputType(TypeRequirement::String { received }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_pass_through() {
        assert_eq!(require_string(&json!("")).unwrap(), "");
        assert_eq!(require_non_null_string(&json!("a b")).unwrap(), "a b");
    }

    #[test]
    fn test_null_handling_differs() {
        let kebab = require_non_null_string(&Value::Null).unwrap_err();
        let split = require_string(&Value::Null).unwrap_err();

        assert_eq!(kebab.to_string(), "Input must be a non-null string.");
        assert_eq!(split.to_string(), "Expected a string, but received object");
        assert_ne!(kebab, split);
    }

    #[test]
    fn test_reports_received_type() {
        let err = require_string(&json!(true)).unwrap_err();
        assert_eq!(err.received(), Some(ValueType::Boolean));
        assert!(err.to_string().contains("boolean"));
    }
}
