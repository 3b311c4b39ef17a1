//! Loading values for commands that consume them.
//!
//! Values arrive inline, from a file, or from stdin, written either in
//! literal notation or as a JSON array. Literal errors are rendered
//! against the source text with the offending span underlined.

use std::io::{self, Read};
use std::ops::Range;
use std::path::{Path, PathBuf};

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use realtype_lib::json::values_from_json;
use realtype_lib::{LiteralError, Value, parse_value, parse_values};

pub struct InputArgs {
    pub values: Option<String>,
    pub file: Option<PathBuf>,
    pub input_json: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{error}")]
    Literal { text: String, error: LiteralError },
}

impl InputError {
    /// Human-readable report, with a source snippet for literal errors.
    pub fn render(&self, colored: bool) -> String {
        match self {
            InputError::Literal { text, error } => render_literal_error(text, error, colored),
            other => format!("error: {other}"),
        }
    }
}

/// Read and parse the values named by `args`.
pub fn load_values(args: &InputArgs) -> Result<Vec<Value>, InputError> {
    let text = match (&args.values, &args.file) {
        (Some(values), _) => values.clone(),
        (None, Some(path)) => read_file(path)?,
        (None, None) => read_stdin()?,
    };
    parse_input(text, args.input_json)
}

pub fn parse_input(text: String, input_json: bool) -> Result<Vec<Value>, InputError> {
    if input_json {
        return Ok(values_from_json(&text)?);
    }
    parse_values(&text).map_err(|error| InputError::Literal { text, error })
}

/// Parse one literal, keeping the text around for error rendering.
pub fn parse_one(text: &str) -> Result<Value, InputError> {
    parse_value(text).map_err(|error| InputError::Literal {
        text: text.to_owned(),
        error,
    })
}

fn read_file(path: &Path) -> Result<String, InputError> {
    if path.as_os_str() == "-" {
        return read_stdin();
    }
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn read_stdin() -> Result<String, InputError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|source| InputError::Read {
            path: "<stdin>".to_owned(),
            source,
        })?;
    Ok(text)
}

pub fn render_literal_error(source: &str, error: &LiteralError, colored: bool) -> String {
    let renderer = if colored {
        Renderer::styled()
    } else {
        Renderer::plain()
    };

    let message = error.to_string();
    let snippet = Snippet::source(source).line_start(1).annotation(
        AnnotationKind::Primary
            .span(adjust_range(&error.span, source.len()))
            .label(&message),
    );
    let report = [Level::ERROR.primary_title(&message).element(snippet)];
    renderer.render(&report).to_string()
}

/// Empty spans (end of input) get one column so the caret shows.
fn adjust_range(span: &Range<usize>, limit: usize) -> Range<usize> {
    if span.start == span.end {
        return span.start..(span.start + 1).min(limit);
    }
    span.clone()
}

/// Print the error and exit with status 1.
pub fn fail(err: &InputError, colored: bool) -> ! {
    eprintln!("{}", err.render(colored));
    std::process::exit(1);
}
