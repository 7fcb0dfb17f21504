//! Reading evaluation tables from the plain-text table format.
//!
//! ```text
//! 7        <- prime modulus
//! 3        <- f(0...00)
//! 5        <- f(0...01)
//! ...      <- 2^k values in total, one per line
//! ```

use std::{fs, path::Path};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    errors::{Error, Result, Source},
    field::{check_element, FieldElement, Modulus, RangePolicy},
    poly_utils::{evals::EvaluationTable, MultilinearPoint},
    utils::log2_exact,
};

/// Splits `text` into lines, dropping the single trailing empty line left by a final newline.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<_> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

fn parse_integer(literal: &str, source_of: Source) -> Result<u64> {
    literal
        .trim()
        .parse()
        .map_err(|_| Error::MalformedInteger {
            source_of,
            literal: literal.trim().to_owned(),
        })
}

/// Parses a table: the modulus on the first line, then one field element per line.
///
/// The line count is checked before anything is parsed, so a table of the wrong size fails
/// with [`Error::NotPowerOfTwo`] even if its contents are also malformed.
pub fn parse_table(lines: &[&str], policy: RangePolicy) -> Result<EvaluationTable> {
    let (first, values) = lines
        .split_first()
        .ok_or(Error::NotPowerOfTwo(0))?;
    log2_exact(values.len())?;

    let modulus = Modulus::new(parse_integer(first, Source::Line(1))?)?;

    let evals = values
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            let source_of = Source::Line(idx + 2);
            let value = parse_integer(line, source_of.clone())?;
            check_element(value, modulus, policy, source_of)
        })
        .collect::<Result<Vec<_>>>()?;

    EvaluationTable::new(modulus, evals, policy)
}

/// Reads and parses the table file at `path`.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_table(path: impl AsRef<Path>, policy: RangePolicy) -> Result<EvaluationTable> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })?;
    let table = parse_table(&split_lines(&text), policy)?;
    info!(
        modulus = table.modulus().value(),
        num_variables = table.num_variables(),
        "loaded evaluation table"
    );
    Ok(table)
}

/// Parses point literals as elements of `F_p`, reporting failures by 1-based position.
pub fn parse_points<S: AsRef<str>>(
    literals: &[S],
    modulus: Modulus,
    policy: RangePolicy,
) -> Result<MultilinearPoint> {
    literals
        .iter()
        .enumerate()
        .map(|(idx, literal)| {
            let source_of = Source::Point(idx + 1);
            let value = parse_integer(literal.as_ref(), source_of.clone())?;
            check_element(value, modulus, policy, source_of)
        })
        .collect::<Result<Vec<FieldElement>>>()
        .map(MultilinearPoint)
}

/// Everything a single evaluation produced.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub modulus: Modulus,
    pub num_variables: usize,
    #[serde(skip)]
    pub evals: Vec<FieldElement>,
    pub points: MultilinearPoint,
    pub result: FieldElement,
}

/// Loads the table at `path`, parses `point_literals` and evaluates.
///
/// An empty point list is only accepted for a single-entry table.
pub fn run<S: AsRef<str>>(
    path: impl AsRef<Path>,
    point_literals: &[S],
    policy: RangePolicy,
) -> Result<Evaluation> {
    let table = load_table(path, policy)?;
    if point_literals.is_empty() && table.num_variables() > 0 {
        return Err(Error::InsufficientArguments {
            needed: table.num_variables(),
        });
    }
    let points = parse_points(point_literals, table.modulus(), policy)?;
    let result = table.evaluate(&points)?;

    Ok(Evaluation {
        modulus: table.modulus(),
        num_variables: table.num_variables(),
        evals: table.evals().to_vec(),
        points,
        result,
    })
}
