use crate::errors::{Error, Result};

// checks whether the given number n is a power of two.
pub const fn is_power_of_two(n: usize) -> bool {
    n != 0 && n.is_power_of_two()
}

/// Returns `k` such that `n == 2^k`.
///
/// Fails with [`Error::NotPowerOfTwo`] if `n` is zero or has more than one bit set.
pub fn log2_exact(n: usize) -> Result<usize> {
    if is_power_of_two(n) {
        Ok(n.trailing_zeros() as usize)
    } else {
        Err(Error::NotPowerOfTwo(n))
    }
}

/// performs big-endian binary decomposition of `value` and returns the result.
///
/// `n_bits` must be at must usize::BITS. If it is strictly smaller, the most significant bits of `value` are ignored.
/// The returned vector v ends with the least significant bit of `value` and always has exactly `n_bits` many elements.
pub fn to_binary(value: usize, n_bits: usize) -> Vec<bool> {
    assert!(n_bits <= usize::BITS as usize);
    (0..n_bits)
        .map(|i| (value >> (n_bits - 1 - i)) & 1 == 1)
        .collect()
}

/// Number of elements of type `T` that fit in L1; below this, splitting work across threads
/// costs more than it saves.
#[cfg(feature = "parallel")]
pub const fn workload_size<T: Sized>() -> usize {
    const CACHE_SIZE: usize = 1 << 15;
    CACHE_SIZE / std::mem::size_of::<T>()
}
