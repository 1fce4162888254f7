use crate::{CaseStyle, Config, Conversion, ConvertReport};
use serde_json::Value;

/// Runs raw inputs through one or more case styles.
pub struct Converter {
    styles: Vec<CaseStyle>,
    json_input: bool,
}

impl Converter {
    pub fn new(config: &Config, json_input: bool) -> Self {
        let styles = if config.all_styles {
            CaseStyle::ALL.to_vec()
        } else {
            vec![config.style]
        };

        Self { styles, json_input }
    }

    pub fn styles(&self) -> &[CaseStyle] {
        &self.styles
    }

    pub fn run<S: AsRef<str>>(&self, inputs: &[S]) -> ConvertReport {
        let mut report = ConvertReport::default();

        for input in inputs {
            let input = input.as_ref();
            for conversion in self.convert(input) {
                if conversion.is_ok() {
                    report.converted += 1;
                } else {
                    report.rejected += 1;
                }
                report.results.push(conversion);
            }
        }

        tracing::debug!(
            converted = report.converted,
            rejected = report.rejected,
            "conversion run finished"
        );
        report
    }

    fn convert(&self, input: &str) -> Vec<Conversion> {
        // Plain inputs are always strings and cannot fail.
        if !self.json_input {
            return self
                .styles
                .iter()
                .map(|style| Conversion {
                    input: input.to_string(),
                    style: *style,
                    output: Some(style.apply(input)),
                    error: None,
                })
                .collect();
        }

        let value = match serde_json::from_str::<Value>(input) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(input, error = %e, "input is not valid JSON");
                let message = format!("Invalid JSON value: {}", e);
                return self
                    .styles
                    .iter()
                    .map(|style| Conversion {
                        input: input.to_string(),
                        style: *style,
                        output: None,
                        error: Some(message.clone()),
                    })
                    .collect();
            }
        };

        self.styles
            .iter()
            .map(|style| match style.apply_value(&value) {
                Ok(output) => Conversion {
                    input: input.to_string(),
                    style: *style,
                    output: Some(output),
                    error: None,
                },
                Err(e) => Conversion {
                    input: input.to_string(),
                    style: *style,
                    output: None,
                    error: Some(e.to_string()),
                },
            })
            .collect()
    }
}
