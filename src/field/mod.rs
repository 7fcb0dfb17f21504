//! Arithmetic in the prime field `F_p` for a modulus chosen at runtime.
//!
//! Elements are plain `u64` values; every operation takes the [`Modulus`] explicitly so there
//! is never an implicit global field. Products are formed in `u128`, which is wide enough for
//! any 64-bit modulus.

use serde::Serialize;

use crate::errors::{Error, Result, Source};

pub mod prime;

pub use prime::is_prime;

/// A field element. Canonical elements lie in `[0, p-1]`; see [`RangePolicy`].
pub type FieldElement = u64;

/// The modulus `p` of the prime field `F_p`. Only constructible from a prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Modulus(u64);

impl Modulus {
    /// Fails with [`Error::NonPrimeModulus`] unless `p` is prime.
    pub fn new(p: u64) -> Result<Self> {
        if is_prime(p) {
            Ok(Self(p))
        } else {
            Err(Error::NonPrimeModulus(p))
        }
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Modulus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which integers are accepted as field elements on input.
///
/// `Strict` is the mathematically correct `[0, p-1]`. `Inclusive` also admits `p` itself
/// (which every operation then reduces to zero), for tables produced by older tooling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangePolicy {
    #[default]
    Strict,
    Inclusive,
}

impl RangePolicy {
    pub const fn contains(&self, value: u64, modulus: Modulus) -> bool {
        match self {
            Self::Strict => value < modulus.0,
            Self::Inclusive => value <= modulus.0,
        }
    }
}

/// Checks that `value` is an accepted element of `F_p` under `policy`.
pub fn check_element(
    value: u64,
    modulus: Modulus,
    policy: RangePolicy,
    source_of: Source,
) -> Result<FieldElement> {
    if policy.contains(value, modulus) {
        Ok(value)
    } else {
        Err(Error::InvalidFieldElement {
            source_of,
            value,
            modulus: modulus.0,
        })
    }
}

/// `-x mod p`, computed as `(p-1) * x mod p`.
pub const fn neg(x: FieldElement, modulus: Modulus) -> FieldElement {
    mul(modulus.0 - 1, x, modulus)
}

/// `a * b mod p`
pub const fn mul(a: FieldElement, b: FieldElement, modulus: Modulus) -> FieldElement {
    ((a as u128 * b as u128) % modulus.0 as u128) as u64
}

/// `a + b mod p`
pub const fn add(a: FieldElement, b: FieldElement, modulus: Modulus) -> FieldElement {
    ((a as u128 + b as u128) % modulus.0 as u128) as u64
}

/// `1 - x mod p`, the chi factor of a zero bit.
pub const fn one_minus(x: FieldElement, modulus: Modulus) -> FieldElement {
    add(1, neg(x, modulus), modulus)
}
