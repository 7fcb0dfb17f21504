//! Tables of the equality-indicator ("chi") polynomials over `{0,1}^k`.
//!
//! For a point `r = (r_0, ..., r_{k-1})`, the chi polynomial of a Boolean word `w` is
//!
//! ```ignore
//! chi_w(r) = Π_j (w_j == 1 ? r_j : 1 - r_j)
//! ```
//!
//! and the multilinear extension of `f` is `Σ_w f(w) * chi_w(r)`. The table of all `2^k` values
//! is built by dynamic programming, one variable at a time (Vu, Setty, Blumberg, Walfish,
//! "A hybrid architecture for interactive verifiable computation", S&P 2013).

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{instrument, trace};

use super::MultilinearPoint;
use crate::{
    errors::{Error, Result},
    field::{self, FieldElement, Modulus, RangePolicy},
};
#[cfg(feature = "parallel")]
use crate::utils::workload_size;

/// How coordinates of a point map onto the bits of a table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    /// `point[0]` is the most significant bit of the index.
    MsbFirst,
    /// `point[0]` is the least significant bit of the index.
    LsbFirst,
}

/// The convention of the table file format: `point[0]` selects between the two halves of the
/// table, so index `0b10` of a 2-variable table is the word `(1, 0)`.
pub const BIT_ORDER: BitOrder = BitOrder::MsbFirst;

/// Builds the `2^num_variables` chi values at `points` using [`BIT_ORDER`].
///
/// `chi[w]` is the product over variables `j` of `points[j]` if bit `j` of `w` is set and
/// `1 - points[j]` otherwise. The entries always sum to one.
pub fn eval_chi_table(
    num_variables: usize,
    modulus: Modulus,
    points: &MultilinearPoint,
    policy: RangePolicy,
) -> Result<Vec<FieldElement>> {
    eval_chi_table_with_order(num_variables, modulus, points, policy, BIT_ORDER)
}

/// As [`eval_chi_table`], with an explicit bit order.
///
/// Fails with [`Error::TooManyVariables`] if `2^num_variables` does not fit in a `usize`.
#[instrument(skip(points))]
pub fn eval_chi_table_with_order(
    num_variables: usize,
    modulus: Modulus,
    points: &MultilinearPoint,
    policy: RangePolicy,
    order: BitOrder,
) -> Result<Vec<FieldElement>> {
    if points.n_variables() != num_variables {
        return Err(Error::PointCountMismatch {
            expected: num_variables,
            got: points.n_variables(),
        });
    }
    if num_variables >= usize::BITS as usize {
        return Err(Error::TooManyVariables(num_variables));
    }
    points.validate(modulus, policy)?;

    // The first coordinate consumed ends up as the most significant bit.
    let chi_table = match order {
        BitOrder::MsbFirst => build(num_variables, modulus, points.0.iter().copied()),
        BitOrder::LsbFirst => build(num_variables, modulus, points.0.iter().rev().copied()),
    };

    trace!(?chi_table, "built chi table");
    Ok(chi_table)
}

/// The doubling DP over already validated coordinates.
fn build(
    num_variables: usize,
    modulus: Modulus,
    mut coords: impl Iterator<Item = FieldElement>,
) -> Vec<FieldElement> {
    let Some(first) = coords.next() else {
        // Empty product.
        return vec![1];
    };

    // Two buffers of the final size; each round reads `curr[..size]` and writes
    // `next[..2 * size]`, then they trade places.
    let full_size = 1 << num_variables;
    let mut curr = vec![0; full_size];
    let mut next = vec![0; full_size];

    curr[0] = field::one_minus(first, modulus);
    curr[1] = first % modulus.value();

    let mut size = 2;
    for coord in coords {
        let zero = field::one_minus(coord, modulus);
        let one = coord % modulus.value();
        expand(&curr[..size], &mut next[..size << 1], zero, one, modulus);
        std::mem::swap(&mut curr, &mut next);
        size <<= 1;
    }
    debug_assert_eq!(size, full_size);

    curr
}

/// `dst[2j] = src[j] * zero` and `dst[2j + 1] = src[j] * one`.
fn expand(
    src: &[FieldElement],
    dst: &mut [FieldElement],
    zero: FieldElement,
    one: FieldElement,
    modulus: Modulus,
) {
    debug_assert_eq!(dst.len(), src.len() * 2);

    #[cfg(feature = "parallel")]
    if src.len() > workload_size::<FieldElement>() {
        dst.par_chunks_exact_mut(2)
            .zip(src.par_iter())
            .for_each(|(pair, &c)| {
                pair[0] = field::mul(c, zero, modulus);
                pair[1] = field::mul(c, one, modulus);
            });
        return;
    }

    for (pair, &c) in dst.chunks_exact_mut(2).zip(src) {
        pair[0] = field::mul(c, zero, modulus);
        pair[1] = field::mul(c, one, modulus);
    }
}
