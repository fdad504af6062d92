//! The djb2 string hash and its reduction to a bucket index

use std::num::NonZeroUsize;

/// Initial accumulator value of the djb2 scheme
pub const DJB2_SEED: u64 = 5381;

/// Computes the djb2 hash of a byte string.
///
/// Each byte is folded in as `hash * 33 + byte` using wrapping 64-bit arithmetic, so the
/// result is the same on every platform. An empty input yields [`DJB2_SEED`].
#[must_use]
pub fn djb2(bytes: &[u8]) -> u64 {
    bytes.iter().fold(DJB2_SEED, |hash, &byte| {
        hash.wrapping_shl(5).wrapping_add(hash).wrapping_add(u64::from(byte))
    })
}

/// Maps a byte string to a bucket index in `[0, modulus)`.
///
/// Callers pass the table's current capacity, so the index of a key changes whenever the
/// capacity does.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::arithmetic_side_effects)]
pub fn bucket_index(bytes: &[u8], modulus: NonZeroUsize) -> usize {
    // usize is at most 64 bits wide on supported targets, so widening the modulus is lossless
    // and the remainder is strictly smaller than it, which makes narrowing back lossless too.
    (djb2(bytes) % modulus.get() as u64) as usize
}
