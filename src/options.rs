use std::path::PathBuf;

use thiserror::Error;

use crate::parser::parser::DEFAULT_MAX_DEPTH;

pub const VERSION: &str = concat!("Renaisscript compiler version ", env!("CARGO_PKG_VERSION"));

pub const HELP: &str = "\
Usage: renaisscript [option...] [rensfile...].rens

  -h                print help guide and exit successfully
  -S                print the token listing to stdout
  -d <depth>        maximum nesting depth of blocks and expressions
  -v                print version and exit successfully
";

#[derive(Error, Debug, PartialEq)]
pub enum OptionsError {
    #[error("option or flag '{0}' undefined")]
    UnknownOption(String),
    #[error("option '{0}' requires a value")]
    MissingValue(String),
    #[error("invalid nesting depth '{0}'")]
    InvalidDepth(String),
    #[error("input file not found in arguments")]
    MissingInput,
    #[error("unparsed argument/s detected: {}", .0.join(" "))]
    UnparsedArguments(Vec<String>),
    #[error("incomplete option flag '{0}'")]
    IncompleteFlag(String),
}

/// What the driver was asked to do.
#[derive(Debug, PartialEq)]
pub enum Command {
    Help,
    Version,
    Compile(Options),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub input: PathBuf,
    /// Print the token listing before parsing
    pub print_tokens: bool,
    pub max_depth: usize,
}

impl Options {
    /// Parses the command-line arguments, without the program name.
    ///
    /// Flags may come before or after the input file. `-h` and `-v` return as soon
    /// as they are seen.
    pub fn parse<I>(args: I) -> Result<Command, OptionsError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut print_tokens = false;
        let mut max_depth = DEFAULT_MAX_DEPTH;
        let mut inputs = Vec::new();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" => return Ok(Command::Help),
                "-v" => return Ok(Command::Version),
                "-S" => print_tokens = true,
                "-d" => {
                    let value = args
                        .next()
                        .ok_or_else(|| OptionsError::MissingValue(String::from("-d")))?;
                    max_depth = parse_depth(&value)?;
                }
                "-" => return Err(OptionsError::IncompleteFlag(String::from("-"))),
                flag if flag.starts_with("-d") => max_depth = parse_depth(&flag[2..])?,
                flag if flag.starts_with('-') => {
                    return Err(OptionsError::UnknownOption(String::from(flag)))
                }
                _ => inputs.push(arg),
            }
        }

        let mut inputs = inputs.into_iter();
        let input = inputs.next().ok_or(OptionsError::MissingInput)?;

        let extra: Vec<String> = inputs.collect();
        if !extra.is_empty() {
            return Err(OptionsError::UnparsedArguments(extra));
        }

        Ok(Command::Compile(Options {
            input: PathBuf::from(input),
            print_tokens,
            max_depth,
        }))
    }
}

fn parse_depth(value: &str) -> Result<usize, OptionsError> {
    match value.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(OptionsError::InvalidDepth(String::from(value))),
    }
}
