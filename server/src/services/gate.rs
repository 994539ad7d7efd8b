//! Shared-password check.
//!
//! Both sides are trimmed and hashed before comparison, so the comparison
//! always runs over two fixed-length digests regardless of input length.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use sha2::{Digest, Sha256};

fn digest(value: &str) -> [u8; 32] {
    let mut out = [0_u8; 32];
    out.copy_from_slice(&Sha256::digest(value.trim().as_bytes()));
    out
}

/// Whether `input` matches the configured password after trimming.
#[must_use]
pub fn password_matches(configured: &str, input: &str) -> bool {
    let expected = digest(configured);
    let actual = digest(input);
    expected.iter().zip(actual.iter()).fold(0_u8, |acc, (a, b)| acc | (a ^ b)) == 0
}
