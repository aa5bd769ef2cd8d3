// SPDX-License-Identifier: MIT OR Apache-2.0
//! Input and output streams.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Destination of the SVG chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartTarget {
    /// Process standard output
    Stdout,
    /// A file, created or truncated
    File(PathBuf),
}

impl ChartTarget {
    /// Open the target for writing
    ///
    /// # Errors
    ///
    /// Returns the error from creating the file.
    pub fn open(&self) -> io::Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout())),
            Self::File(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        }
    }
}

impl fmt::Display for ChartTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read the whole input, from `path` or standard input
///
/// # Errors
///
/// Returns the read error.
pub fn read_input(path: Option<&Path>) -> io::Result<String> {
    if let Some(p) = path {
        fs::read_to_string(p)
    } else {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        Ok(input)
    }
}
