//! printf-style rendering of catalog templates.
//!
//! Catalog entries use a tiny subset of C conversions:
//!
//! - `%s` a string argument
//! - `%.Ns` the first `N` characters of a string argument
//! - `%.*s` a string argument (the length travels with the slice)
//! - `%d` an integer argument
//! - `%%` a literal percent sign
//!
//! Anything else after `%` is rejected so a template typo surfaces as an
//! error instead of a garbled message.

use std::fmt::Write;

/// One argument for a template conversion.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FormatArg<'a> {
    Str(&'a str),
    Int(i64),
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        FormatArg::Str(value)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        FormatArg::Str(value)
    }
}

impl From<i64> for FormatArg<'_> {
    fn from(value: i64) -> Self {
        FormatArg::Int(value)
    }
}

impl From<i32> for FormatArg<'_> {
    fn from(value: i32) -> Self {
        FormatArg::Int(i64::from(value))
    }
}

impl From<u32> for FormatArg<'_> {
    fn from(value: u32) -> Self {
        FormatArg::Int(i64::from(value))
    }
}

/// Why a template could not be rendered.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FormatError {
    #[error("template needs argument {index} but only {given} were given")]
    MissingArgument { index: usize, given: usize },
    #[error("argument {index} should be {expected}")]
    TypeMismatch { index: usize, expected: &'static str },
    #[error("{unused} argument(s) left over after rendering the template")]
    UnusedArguments { unused: usize },
    #[error("unsupported conversion `%{conversion}` in template")]
    UnknownConversion { conversion: char },
    #[error("template ends inside a conversion")]
    Truncated,
}

/// A parsed conversion.
enum Conversion {
    Percent,
    Str { precision: Option<usize> },
    Int,
}

/// Parse the conversion starting right after a `%`. Returns the conversion
/// and the number of template bytes it used.
fn parse_conversion(rest: &[u8]) -> Result<(Conversion, usize), FormatError> {
    match rest {
        [] => Err(FormatError::Truncated),
        [b'%', ..] => Ok((Conversion::Percent, 1)),
        [b's', ..] => Ok((Conversion::Str { precision: None }, 1)),
        [b'd', ..] => Ok((Conversion::Int, 1)),
        [b'.', b'*', b's', ..] => Ok((Conversion::Str { precision: None }, 3)),
        [b'.', tail @ ..] => {
            let digits = tail.iter().take_while(|b| b.is_ascii_digit()).count();
            match tail.get(digits) {
                Some(b's') if digits > 0 => {
                    let precision = tail[..digits]
                        .iter()
                        .fold(0usize, |acc, b| acc * 10 + usize::from(b - b'0'));
                    Ok((
                        Conversion::Str {
                            precision: Some(precision),
                        },
                        digits + 2,
                    ))
                }
                Some(&other) => Err(FormatError::UnknownConversion {
                    conversion: char::from(other),
                }),
                None => Err(FormatError::Truncated),
            }
        }
        [other, ..] => Err(FormatError::UnknownConversion {
            conversion: char::from(*other),
        }),
    }
}

/// Render `template` with `args`, consuming them left to right.
pub fn format_message(template: &str, args: &[FormatArg<'_>]) -> Result<String, FormatError> {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len() + 16);
    let mut next_arg = 0;
    let mut literal_start = 0;
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] != b'%' {
            index += 1;
            continue;
        }
        out.push_str(&template[literal_start..index]);
        let (conversion, used) = parse_conversion(&bytes[index + 1..])?;
        index += 1 + used;
        literal_start = index;

        if let Conversion::Percent = conversion {
            out.push('%');
            continue;
        }

        let arg = args.get(next_arg).ok_or(FormatError::MissingArgument {
            index: next_arg,
            given: args.len(),
        })?;
        match (conversion, arg) {
            (Conversion::Str { precision }, FormatArg::Str(value)) => match precision {
                Some(limit) => out.extend(value.chars().take(limit)),
                None => out.push_str(value),
            },
            (Conversion::Int, FormatArg::Int(value)) => {
                let _ = write!(out, "{value}");
            }
            (Conversion::Str { .. }, FormatArg::Int(_)) => {
                return Err(FormatError::TypeMismatch {
                    index: next_arg,
                    expected: "a string",
                })
            }
            (_, FormatArg::Str(_)) => {
                return Err(FormatError::TypeMismatch {
                    index: next_arg,
                    expected: "an integer",
                })
            }
            (Conversion::Percent, FormatArg::Int(_)) => {}
        }
        next_arg += 1;
    }
    out.push_str(&template[literal_start..]);

    if next_arg < args.len() {
        return Err(FormatError::UnusedArguments {
            unused: args.len() - next_arg,
        });
    }
    Ok(out)
}

/// Whether `template` contains at least one argument-taking conversion.
pub(crate) fn has_conversions(template: &str) -> bool {
    let bytes = template.as_bytes();
    bytes.iter().enumerate().any(|(index, &b)| {
        b == b'%'
            && matches!(
                parse_conversion(&bytes[index + 1..]),
                Ok((Conversion::Str { .. } | Conversion::Int, _))
            )
    })
}

#[cfg(test)]
mod tests;
