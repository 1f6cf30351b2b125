use std::ffi::OsString;
use std::fmt;

use camino::Utf8PathBuf;
use clap::Parser;
use clap::error::{ContextKind, ErrorKind};

use crate::grid::GridShape;

pub const USAGE: &str = "Usage: gridgen <rows> <cols> <output_file>";
pub const EXAMPLE: &str = "Example: gridgen 5 3 inputFiles/random_input.txt";

/// Positional arguments accepted by `gridgen`.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "gridgen",
    version,
    about = "Write a grid of random fixed-width numeric fields to a file",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Number of lines to write.
    pub rows: usize,
    /// Number of 5-digit fields per line.
    pub cols: usize,
    /// Destination file; missing parent directories are created.
    pub output: Utf8PathBuf,
}

impl Cli {
    pub fn shape(&self) -> GridShape {
        GridShape::new(self.rows, self.cols)
    }
}

/// Reasons the command line could not be turned into a [`Cli`].
#[derive(Debug)]
pub enum ArgError {
    /// Wrong number of positional arguments or an unknown flag.
    Usage,
    /// `rows` or `cols` was not a non-negative base-10 integer.
    InvalidNumber(Option<String>),
    /// An argument, in practice the output path, was not valid UTF-8.
    InvalidUtf8,
    /// `--help` or `--version`; clap renders the text itself.
    Display(clap::Error),
}

impl ArgError {
    fn from_clap(err: clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgError::Display(err),
            ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
                let value = err.get(ContextKind::InvalidValue).map(|v| v.to_string());
                ArgError::InvalidNumber(value)
            }
            ErrorKind::InvalidUtf8 => ArgError::InvalidUtf8,
            _ => ArgError::Usage,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ArgError::Display(err) => err.exit_code(),
            ArgError::Usage | ArgError::InvalidNumber(_) | ArgError::InvalidUtf8 => 1,
        }
    }

    /// Print the message to stdout.
    pub fn report(&self) {
        match self {
            ArgError::Display(err) => {
                let _ = err.print();
            }
            other => println!("{}", other),
        }
    }
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::Usage => write!(f, "{}\n{}", USAGE, EXAMPLE),
            ArgError::InvalidNumber(Some(value)) => write!(
                f,
                "Error: rows and cols must be non-negative integers (got `{}`)",
                value
            ),
            ArgError::InvalidNumber(None) => {
                write!(f, "Error: rows and cols must be non-negative integers")
            }
            ArgError::InvalidUtf8 => write!(f, "Error: output_file must be valid UTF-8"),
            ArgError::Display(err) => write!(f, "{}", err),
        }
    }
}

pub fn parse_from<I, T>(args: I) -> Result<Cli, ArgError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(ArgError::from_clap)
}
