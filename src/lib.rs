pub mod cli;
pub mod config;
pub mod convert;
pub mod converter;
pub mod error;
pub mod value;

pub use config::Config;
pub use convert::{
    camel_case_value, dot_case_value, kebab_case_value, to_camel_case, to_dot_case,
    to_kebab_case, CaseStyle,
};
pub use converter::Converter;
pub use error::{CaseError, TypeRequirement};
pub use value::ValueType;

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConvertReport {
    pub converted: usize,
    pub rejected: usize,
    pub results: Vec<Conversion>,
}

/// One input run through one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub style: CaseStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Conversion {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
