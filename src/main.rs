use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::config::Overrides;
use recase::{CaseStyle, Config, Converter};
use std::io::{self, BufRead, IsTerminal};

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert strings to kebab-case, camelCase or dot.case", long_about = None)]
struct Cli {
    /// Strings to convert (read from stdin, one per line, when omitted)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Case style to convert to (kebab, camel, dot)
    #[arg(short, long)]
    style: Option<CaseStyle>,

    /// Convert every input to every style
    #[arg(short, long, conflicts_with = "style")]
    all: bool,

    /// Treat each input as a JSON value instead of a raw string
    #[arg(long)]
    json: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some inputs were rejected
    #[arg(long)]
    no_fail: bool,

    /// Print example conversions and exit
    #[arg(long)]
    demo: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(Overrides {
        style: cli.style,
        all_styles: cli.all,
        no_color: cli.no_color,
        format: cli.format,
    })?;
    tracing::debug!(?config, "configuration loaded");

    if cli.demo {
        output::print_demo(config.color);
        return Ok(());
    }

    let inputs = if cli.inputs.is_empty() {
        read_stdin_inputs()?
    } else {
        cli.inputs
    };

    let converter = Converter::new(&config, cli.json);
    let report = converter.run(&inputs);
    output::print_report(
        &report,
        converter.styles().len() > 1,
        config.color,
        config.format,
    );

    if report.rejected > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn read_stdin_inputs() -> Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        anyhow::bail!("No inputs specified. Pass strings as arguments or pipe them on stdin.");
    }

    stdin
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read inputs from stdin")
}

fn init_logger() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match std::env::var("RECASE_LOG") {
        Ok(env) => EnvFilter::new(env),
        _ => return,
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
