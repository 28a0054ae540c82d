use std::io::{self, Write};

use serde_json::Value;

use posh_common::Colors;

use crate::commands::OutputFormat;
use crate::error::CliError;

/// Trait for presenting output to the user.
///
/// Handlers build both a human-readable rendering and a structured value;
/// the presenter decides which one reaches the writer.
pub trait Presenter {
    /// Present a result. `text` of `None` prints nothing in text mode.
    fn present(&self, out: &mut dyn Write, text: Option<&str>, value: &Value) -> io::Result<()>;

    /// Present an error with its suggestion.
    fn present_error(&self, err: &mut dyn Write, error: &CliError) -> io::Result<()>;
}

/// Text presenter for human-readable output.
pub struct TextPresenter;

impl Presenter for TextPresenter {
    fn present(&self, out: &mut dyn Write, text: Option<&str>, _value: &Value) -> io::Result<()> {
        match text {
            Some(text) => writeln!(out, "{}", text),
            None => Ok(()),
        }
    }

    fn present_error(&self, err: &mut dyn Write, error: &CliError) -> io::Result<()> {
        writeln!(err, "{} {}", Colors::error("Error:"), error)?;
        if let Some(suggestion) = error.suggestion() {
            writeln!(err, "{} {}", Colors::dim("Suggestion:"), suggestion)?;
        }
        Ok(())
    }
}

/// JSON presenter for machine-readable output.
pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn present(&self, out: &mut dyn Write, _text: Option<&str>, value: &Value) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        writeln!(out, "{}", rendered)
    }

    fn present_error(&self, err: &mut dyn Write, error: &CliError) -> io::Result<()> {
        let rendered = serde_json::to_string_pretty(&error.to_json()).map_err(io::Error::other)?;
        writeln!(err, "{}", rendered)
    }
}

pub fn create_presenter(format: &OutputFormat) -> Box<dyn Presenter> {
    match format {
        OutputFormat::Json => Box::new(JsonPresenter),
        OutputFormat::Text => Box::new(TextPresenter),
    }
}
