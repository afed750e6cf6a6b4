//! Purpose: `exprline` CLI entry point.
//! Role: Binary crate root; parses args, runs the decode pipeline, prints one value.
//! Invariants: Stdout carries exactly one rendered value on success and nothing on failure.
//! Invariants: Errors go to stderr (human text on a TTY, JSON otherwise).
//! Invariants: Process exit code is derived from `api::to_exit_code`.
use std::error::Error as StdError;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum, ValueHint, error::ErrorKind as ClapErrorKind};
use clap_complete::aot::Shell;
use exprline::api::{self, Error, ErrorKind, to_exit_code};
use exprline::render::{OutputFormat, render};
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

fn main() {
    let exit_code = match run(std::env::args_os()) {
        Ok(()) => 0,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

#[derive(Parser)]
#[command(
    name = "exprline",
    version,
    about = "Print the JSON expression stored on line 3 of a snapshot-style file",
    long_about = None,
    after_help = r#"The third line must read `expression: <json>`. The JSON value is decoded
and printed: strings bare, everything else as JSON.

EXAMPLES
  $ exprline tests/snapshots/parse__simple.snap
  $ exprline --format pretty report.snap
  $ RUST_LOG=debug exprline report.snap"#
)]
struct Cli {
    #[arg(
        value_hint = ValueHint::FilePath,
        required_unless_present = "completions",
        help = "File whose third line holds the expression"
    )]
    path: Option<PathBuf>,
    #[arg(
        long,
        default_value = "display",
        value_enum,
        help = "Stdout rendering: display (bare strings) | json | pretty"
    )]
    format: FormatArg,
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics and pretty output: auto|always|never"
    )]
    color: ColorMode,
    #[arg(
        long,
        value_enum,
        value_name = "SHELL",
        conflicts_with = "path",
        help = "Print a shell completion script and exit"
    )]
    completions: Option<Shell>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FormatArg {
    Display,
    Json,
    Pretty,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Display => OutputFormat::Display,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Pretty => OutputFormat::Pretty,
        }
    }
}

fn run<I>(args: I) -> Result<(), (Error, ColorMode)>
where
    I: IntoIterator<Item = OsString>,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => {
                return err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                });
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage)
                        .with_message(clap_error_summary(&err))
                        .with_hint("Run `exprline --help` for usage."),
                    ColorMode::Auto,
                ));
            }
        },
    };

    init_tracing();
    let color_mode = cli.color;
    execute(cli)
        .map_err(add_input_hint)
        .map_err(add_io_hint)
        .map_err(|err| (err, color_mode))
}

fn execute(cli: Cli) -> Result<(), Error> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::aot::generate(shell, &mut cmd, "exprline", &mut io::stdout());
        return Ok(());
    }
    let path = cli.path.ok_or_else(|| {
        Error::new(ErrorKind::Usage).with_message("missing required argument <PATH>")
    })?;

    let value = api::decode_file(&path)?;
    let use_color = cli.color.use_color(io::stdout().is_terminal());
    let text = render(&value, cli.format.into(), use_color);
    emit_output(&text)
}

fn emit_output(text: &str) -> Result<(), Error> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")
        .and_then(|()| stdout.flush())
        .map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to write output")
                .with_source(err)
        })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn clap_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.trim_start_matches("error:").trim().to_string())
        .unwrap_or_else(|| "invalid arguments".to_string())
}

fn add_input_hint(err: Error) -> Error {
    if err.kind() != ErrorKind::Invalid || err.hint().is_some() {
        return err;
    }
    err.with_hint(format!(
        "Line {} must look like: {}<json>",
        api::EXPRESSION_LINE,
        api::PREFIX
    ))
}

fn add_io_hint(err: Error) -> Error {
    if err.hint().is_some() {
        return err;
    }
    match err.kind() {
        ErrorKind::NotFound => err.with_hint("Check that the path exists and is spelled correctly."),
        ErrorKind::Permission => err.with_hint("Permission denied. Check the file's read permissions."),
        ErrorKind::Io => err.with_hint("I/O error. Check that the file is readable UTF-8 text."),
        _ => err,
    }
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let json = serde_json::to_string(&error_json(err)).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::NotFound => "not found".to_string(),
        ErrorKind::Permission => "permission denied".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
        ErrorKind::Invalid => "invalid input".to_string(),
        ErrorKind::Decode => "invalid json".to_string(),
    }
}

// The message often repeats the direct source's text; only report causes that add detail.
fn error_causes(err: &Error) -> Vec<String> {
    let message = error_message(err);
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        let text = source.to_string();
        if text != message {
            causes.push(text);
        }
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    if let Some(line) = err.line() {
        inner.insert("line".to_string(), json!(line));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = vec![format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    )];

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!(
            "{} {}",
            colorize_label("path:", use_color, AnsiColor::Yellow),
            path.display()
        ));
    }
    if let Some(line) = err.line() {
        lines.push(format!(
            "{} {line}",
            colorize_label("line:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(cause) = error_causes(err).first() {
        lines.push(format!(
            "{} {cause}",
            colorize_label("caused by:", use_color, AnsiColor::Yellow)
        ));
    }

    lines.join("\n")
}

#[derive(Copy, Clone)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, use_color: bool, color: AnsiColor) -> String {
    if !use_color {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\x1b[{code}m{label}\x1b[0m")
}
