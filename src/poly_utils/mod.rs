use serde::Serialize;

use crate::{
    errors::{Result, Source},
    field::{self, check_element, FieldElement, Modulus, RangePolicy},
    utils::to_binary,
};

use self::hypercube::BinaryHypercubePoint;

pub mod chi;
pub mod evals;
pub mod hypercube;

/// Point (x_1,..., x_n) in F_p^n for some n. Often, the x_i are binary.
/// For the latter case, we also have BinaryHypercubePoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MultilinearPoint(pub Vec<FieldElement>);

impl MultilinearPoint {
    /// returns the number of variables.
    pub fn n_variables(&self) -> usize {
        self.0.len()
    }

    // NOTE: Conversion BinaryHypercube <-> MultilinearPoint converts a
    // multilinear point (x1,x2,...,x_n) into the number with bit-pattern 0...0 x_1 x_2 ... x_n, provided all x_i are in {0,1}.
    // That means we pad zero bits in BinaryHypercube from the msb end and use big-endian for the actual conversion.

    /// Creates a MultilinearPoint from a BinaryHypercubePoint; the latter models the same thing, but is restricted to binary entries.
    pub fn from_binary_hypercube_point(point: BinaryHypercubePoint, num_variables: usize) -> Self {
        Self(
            to_binary(point.0, num_variables)
                .into_iter()
                .map(u64::from)
                .collect(),
        )
    }

    /// Converts to a BinaryHypercubePoint, provided the MultilinearPoint is actually in {0,1}^n.
    pub fn to_hypercube(&self) -> Option<BinaryHypercubePoint> {
        let mut counter = 0;
        for &coord in &self.0 {
            match coord {
                0 => counter <<= 1,
                1 => counter = (counter << 1) + 1,
                _ => return None,
            }
        }

        Some(BinaryHypercubePoint(counter))
    }

    /// Checks every coordinate against the accepted element range of `F_p`.
    pub fn validate(&self, modulus: Modulus, policy: RangePolicy) -> Result<()> {
        for (idx, &coord) in self.0.iter().enumerate() {
            check_element(coord, modulus, policy, Source::Point(idx + 1))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for MultilinearPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Compute eq(coords, point) directly, where eq is the equality polynomial and point is binary.
///
/// This is the product over all variables of `coords[i]` or `1 - coords[i]`, costing `O(n)` per
/// point; [`chi::eval_chi_table`] produces all `2^n` of these at once in `O(2^n)`.
pub fn eq_poly(
    coords: &MultilinearPoint,
    point: BinaryHypercubePoint,
    modulus: Modulus,
) -> FieldElement {
    let mut point = point.0;
    let n_variables = coords.n_variables();
    assert!(point < (1 << n_variables)); // check that the lengths of coords and point match.

    let mut acc = 1 % modulus.value();

    for &val in coords.0.iter().rev() {
        let factor = if point & 1 == 1 {
            val
        } else {
            field::one_minus(val, modulus)
        };
        acc = field::mul(acc, factor, modulus);
        point >>= 1;
    }

    acc
}
