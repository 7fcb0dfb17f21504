use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Where an integer literal came from, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// 1-based line of the table file.
    Line(usize),
    /// 1-based position in the point list.
    Point(usize),
    /// 0-based index into an evaluation table.
    Entry(usize),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(line) => write!(f, "line {line}"),
            Self::Point(idx) => write!(f, "point {idx}"),
            Self::Entry(idx) => write!(f, "entry {idx}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("table has {0} values; expected 2^k for some k")]
    NotPowerOfTwo(usize),

    #[error("field modulus {0} is not prime")]
    NonPrimeModulus(u64),

    #[error("{source_of}: invalid integer literal '{literal}'")]
    MalformedInteger { source_of: Source, literal: String },

    #[error("{source_of}: {value} is not an element of F_{modulus}")]
    InvalidFieldElement {
        source_of: Source,
        value: u64,
        modulus: u64,
    },

    #[error("expected {expected} points, got {got}")]
    PointCountMismatch { expected: usize, got: usize },

    #[error("{0} variables do not fit in a table indexed by usize")]
    TooManyVariables(usize),

    #[error("chi table has {chi} entries but evaluation table has {evals}")]
    TableSizeMismatch { chi: usize, evals: usize },

    #[error("not enough arguments: need a table file and {needed} point(s)")]
    InsufficientArguments { needed: usize },

    #[error("could not read table file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
