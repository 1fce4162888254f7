use crate::{CaseStyle, Conversion, ConvertReport};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Examples shown by `--demo`.
pub const DEMO_INPUTS: [(CaseStyle, &str); 10] = [
    (CaseStyle::Kebab, "Hello World"),
    (CaseStyle::Kebab, "my_variable_name"),
    (CaseStyle::Kebab, "AnotherExampleHere"),
    (CaseStyle::Camel, "first name"),
    (CaseStyle::Camel, "USER_ID"),
    (CaseStyle::Camel, "  mobile-number "),
    (CaseStyle::Camel, ""),
    (CaseStyle::Dot, "first name"),
    (CaseStyle::Dot, "USER_ID"),
    (CaseStyle::Dot, "  mobile-number "),
];

pub fn print_report(report: &ConvertReport, multi_style: bool, colored_output: bool, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let (out, err) = render_text(report, multi_style, colored_output);
            if !out.is_empty() {
                print!("{}", out);
            }
            if !err.is_empty() {
                eprint!("{}", err);
            }
        }
        OutputFormat::Json => println!("{}", render_json(report)),
    }
}

/// Render text output, split into the stdout and stderr halves.
///
/// With one style each successful conversion is a bare line, so the output
/// can be piped. With several styles every line is labelled with its style.
pub fn render_text(report: &ConvertReport, multi_style: bool, colored_output: bool) -> (String, String) {
    let mut out = String::new();
    let mut err = String::new();

    for conversion in &report.results {
        match (&conversion.output, &conversion.error) {
            (Some(output), _) => {
                if multi_style {
                    out.push_str(&format_labelled(conversion, output, colored_output));
                } else {
                    out.push_str(output);
                }
                out.push('\n');
            }
            (None, Some(message)) => {
                err.push_str(&format_rejection(conversion, message, colored_output));
                err.push('\n');
            }
            (None, None) => {}
        }
    }

    if report.rejected > 0 {
        err.push_str(&format_summary(report, colored_output));
        err.push('\n');
    }

    (out, err)
}

fn format_labelled(conversion: &Conversion, output: &str, colored_output: bool) -> String {
    let label = format!("{:>5}", conversion.style.as_str());
    if colored_output {
        format!(
            "{} {} {}",
            label.blue().bold(),
            format!("{:?}", conversion.input).dimmed(),
            output.green()
        )
    } else {
        format!("{} {:?} {}", label, conversion.input, output)
    }
}

fn format_rejection(conversion: &Conversion, message: &str, colored_output: bool) -> String {
    if colored_output {
        format!(
            "{} {} {} {}",
            "error:".red().bold(),
            conversion.style.as_str().blue(),
            conversion.input.bold(),
            message
        )
    } else {
        format!("error: {} {} {}", conversion.style.as_str(), conversion.input, message)
    }
}

fn format_summary(report: &ConvertReport, colored_output: bool) -> String {
    let noun = if report.rejected == 1 { "input" } else { "inputs" };
    if colored_output {
        format!(
            "{} {} {} rejected, {} converted",
            "✗".red().bold(),
            report.rejected.to_string().red().bold(),
            noun,
            report.converted
        )
    } else {
        format!("✗ {} {} rejected, {} converted", report.rejected, noun, report.converted)
    }
}

pub fn render_json(report: &ConvertReport) -> String {
    // Only strings and integers inside; serialization cannot fail.
    serde_json::to_string_pretty(report).unwrap_or_default()
}

pub fn print_demo(colored_output: bool) {
    for (style, input) in DEMO_INPUTS {
        let output = style.apply(input);
        if colored_output {
            println!(
                "{:>5} {:<22} {}",
                style.as_str().blue().bold(),
                format!("{:?}", input),
                format!("{:?}", output).green()
            );
        } else {
            println!("{:>5} {:<22} {:?}", style.as_str(), format!("{:?}", input), output);
        }
    }
}
