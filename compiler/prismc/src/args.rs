//! Command-line flags shared by `parse`, `lex` and `check`.

use crate::CliError;
use prism_diagnostic::emitter::ColorMode;
use prism_lexer_core::Encoding;
use prism_parse::{FrozenStringLiteral, Options};
use std::path::PathBuf;

/// A source to process.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    File(PathBuf),
    /// Code given with `-e`.
    Inline(String),
}

impl Input {
    /// Name shown in diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            Input::File(path) => path.display().to_string(),
            Input::Inline(_) => "-e".to_owned(),
        }
    }

    /// Source bytes of this input.
    pub fn read(&self) -> Result<Vec<u8>, CliError> {
        match self {
            Input::File(path) => std::fs::read(path).map_err(|err| CliError::read(path.clone(), err)),
            Input::Inline(code) => Ok(code.clone().into_bytes()),
        }
    }
}

/// Parsed command line of one subcommand.
#[derive(Debug)]
pub struct Invocation {
    pub inputs: Vec<Input>,
    pub options: Options,
    pub color: ColorMode,
}

/// Parse the arguments following the subcommand name.
///
/// Flags and inputs may be interleaved; `--name value` and `--name=value`
/// are both accepted.
pub fn parse_invocation(args: &[String]) -> Result<Invocation, CliError> {
    let mut inputs = Vec::new();
    let mut options = Options::new();
    let mut color = ColorMode::Auto;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_owned())),
            _ => (arg.as_str(), None),
        };
        let mut value = |name: &'static str| -> Result<String, CliError> {
            match &inline_value {
                Some(value) => Ok(value.clone()),
                None => iter.next().cloned().ok_or(CliError::MissingValue(name)),
            }
        };

        match flag {
            "-e" => inputs.push(Input::Inline(value("-e")?)),
            "--encoding" => {
                let name = value("--encoding")?;
                let encoding = Encoding::find(name.as_bytes()).ok_or(CliError::UnknownEncoding(name))?;
                options = options.with_encoding(encoding);
            }
            "--line" => {
                let text = value("--line")?;
                let line = text.parse::<i32>().map_err(|_| CliError::InvalidLine(text))?;
                options = options.with_line(line);
            }
            "--color" => {
                let mode = value("--color")?;
                color = parse_color(&mode).ok_or(CliError::InvalidColor(mode))?;
            }
            "--frozen-string-literal" => {
                options = options.with_frozen_string_literal(FrozenStringLiteral::Enabled);
            }
            "--no-frozen-string-literal" => {
                options = options.with_frozen_string_literal(FrozenStringLiteral::Disabled);
            }
            "--no-warnings" | "-W0" => options = options.with_verbose(false),
            _ if flag.starts_with('-') && flag.len() > 1 => return Err(CliError::UnknownOption(arg.clone())),
            _ => inputs.push(Input::File(PathBuf::from(arg))),
        }
    }

    if inputs.is_empty() {
        return Err(CliError::NoInput);
    }
    Ok(Invocation {
        inputs,
        options,
        color,
    })
}

fn parse_color(mode: &str) -> Option<ColorMode> {
    match mode {
        "auto" => Some(ColorMode::Auto),
        "always" => Some(ColorMode::Always),
        "never" => Some(ColorMode::Never),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
