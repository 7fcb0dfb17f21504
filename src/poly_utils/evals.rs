use std::ops::Index;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use super::{chi::eval_chi_table, MultilinearPoint};
use crate::{
    errors::{Error, Result, Source},
    field::{self, check_element, FieldElement, Modulus, RangePolicy},
    utils::log2_exact,
};
#[cfg(feature = "parallel")]
use crate::utils::workload_size;

/// A function `f : {0,1}^k -> F_p`, stored via its values on the hypercube.
///
/// `evals[i]` is `f` at the k-bit big-endian word of `i` (see [`super::chi::BIT_ORDER`]).
/// The table is read-only once built; each call to [`Self::evaluate`] works on its own scratch
/// space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationTable {
    modulus: Modulus,
    /// Accepted element range, applied to the table on construction and to every point.
    policy: RangePolicy,
    /// `evals.len() == 1 << num_variables`
    evals: Vec<FieldElement>,
    num_variables: usize,
}

impl EvaluationTable {
    /// Validates `evals` as a table over `F_p`.
    ///
    /// Fails with [`Error::NotPowerOfTwo`] before looking at any value, then with
    /// [`Error::InvalidFieldElement`] naming the first out-of-range entry.
    pub fn new(modulus: Modulus, evals: Vec<FieldElement>, policy: RangePolicy) -> Result<Self> {
        let num_variables = log2_exact(evals.len())?;
        for (idx, &value) in evals.iter().enumerate() {
            check_element(value, modulus, policy, Source::Entry(idx))?;
        }

        Ok(Self {
            modulus,
            policy,
            evals,
            num_variables,
        })
    }

    /// Evaluates the multilinear extension of the table at `point`.
    ///
    /// ```ignore
    /// f(r) = Σ_{w ∈ {0,1}^k} f(w) * chi_w(r)
    /// ```
    ///
    /// `point` must have exactly `num_variables` coordinates, each in the accepted range.
    #[instrument(skip_all, fields(num_variables = self.num_variables, modulus = self.modulus.value()))]
    pub fn evaluate(&self, point: &MultilinearPoint) -> Result<FieldElement> {
        mle(self.modulus, &self.evals, point, self.policy)
    }

    /// Evaluates at several points. The evaluations are independent of each other and run in
    /// parallel with the `parallel` feature.
    pub fn evaluate_many(&self, points: &[MultilinearPoint]) -> Result<Vec<FieldElement>> {
        #[cfg(feature = "parallel")]
        let result = points.par_iter().map(|point| self.evaluate(point)).collect();

        #[cfg(not(feature = "parallel"))]
        let result = points.iter().map(|point| self.evaluate(point)).collect();

        result
    }

    pub const fn modulus(&self) -> Modulus {
        self.modulus
    }

    pub fn evals(&self) -> &[FieldElement] {
        &self.evals
    }

    /// Returns the total number of stored evaluations, `2^num_variables`.
    pub fn num_evals(&self) -> usize {
        self.evals.len()
    }

    pub const fn num_variables(&self) -> usize {
        self.num_variables
    }
}

impl Index<usize> for EvaluationTable {
    type Output = FieldElement;

    fn index(&self, index: usize) -> &Self::Output {
        &self.evals[index]
    }
}

/// Evaluates the multilinear extension of `eval_table` over `F_p` at `point`.
///
/// `eval_table.len()` must be a power of two `2^k` and `point` must have `k` coordinates.
/// Table entries are assumed to be in range already; [`EvaluationTable::new`] checks that.
pub fn mle(
    modulus: Modulus,
    eval_table: &[FieldElement],
    point: &MultilinearPoint,
    policy: RangePolicy,
) -> Result<FieldElement> {
    let num_variables = log2_exact(eval_table.len())?;
    let chi_table = eval_chi_table(num_variables, modulus, point, policy)?;
    if chi_table.len() != eval_table.len() {
        return Err(Error::TableSizeMismatch {
            chi: chi_table.len(),
            evals: eval_table.len(),
        });
    }

    let result = dot(eval_table, &chi_table, modulus);
    debug!(%point, result, "evaluated multilinear extension");
    Ok(result)
}

/// `Σ a[i] * b[i] mod p`
fn dot(a: &[FieldElement], b: &[FieldElement], modulus: Modulus) -> FieldElement {
    debug_assert_eq!(a.len(), b.len());

    #[cfg(feature = "parallel")]
    if a.len() > workload_size::<FieldElement>() {
        return a
            .par_iter()
            .zip(b.par_iter())
            .map(|(&x, &y)| field::mul(x, y, modulus))
            .reduce(|| 0, |x, y| field::add(x, y, modulus));
    }

    a.iter()
        .zip(b)
        .fold(0, |acc, (&x, &y)| field::add(acc, field::mul(x, y, modulus), modulus))
}
