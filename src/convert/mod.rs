pub mod join;
pub mod kebab;
pub mod tokenizer;
pub mod validate;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use kebab::to_kebab_case;

/// Convert `input` to camelCase.
///
/// Words are delimited by runs of whitespace, underscores or hyphens. The
/// first word stays lowercase and every later word is capitalized.
///
/// ```
/// assert_eq!(recase::to_camel_case("USER_ID"), "userId");
/// assert_eq!(recase::to_camel_case("  mobile-number "), "mobileNumber");
/// ```
pub fn to_camel_case(input: &str) -> String {
    join::camel(&tokenizer::tokenize(input))
}

/// Convert `input` to dot.case, splitting words the same way as
/// [`to_camel_case`].
///
/// ```
/// assert_eq!(recase::to_dot_case("first name"), "first.name");
/// ```
pub fn to_dot_case(input: &str) -> String {
    join::dot(&tokenizer::tokenize(input))
}

/// Kebab conversion of an arbitrary value. Anything but a string, `null`
/// included, fails with the fixed non-null-string message.
pub fn kebab_case_value(value: &Value) -> Result<String> {
    validate::require_non_null_string(value).map(to_kebab_case)
}

/// camelCase conversion of an arbitrary value. A non-string fails with its
/// runtime type name in the message.
pub fn camel_case_value(value: &Value) -> Result<String> {
    validate::require_string(value).map(to_camel_case)
}

/// dot.case conversion of an arbitrary value, checked like
/// [`camel_case_value`].
pub fn dot_case_value(value: &Value) -> Result<String> {
    validate::require_string(value).map(to_dot_case)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Kebab,
    Camel,
    Dot,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [CaseStyle::Kebab, CaseStyle::Camel, CaseStyle::Dot];

    pub fn apply(&self, input: &str) -> String {
        match self {
            CaseStyle::Kebab => to_kebab_case(input),
            CaseStyle::Camel => to_camel_case(input),
            CaseStyle::Dot => to_dot_case(input),
        }
    }

    pub fn apply_value(&self, value: &Value) -> Result<String> {
        match self {
            CaseStyle::Kebab => kebab_case_value(value),
            CaseStyle::Camel => camel_case_value(value),
            CaseStyle::Dot => dot_case_value(value),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Kebab => "kebab",
            CaseStyle::Camel => "camel",
            CaseStyle::Dot => "dot",
        }
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "camel" | "camelcase" | "camel-case" => Ok(CaseStyle::Camel),
            "dot" | "dot.case" | "dot-case" => Ok(CaseStyle::Dot),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
