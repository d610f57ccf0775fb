//! The `Secret` entity: a caller-owned exponent, wiped on drop.

use num_bigint::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A single non-negative secret exponent `x`, with `1 <= x`.
///
/// Conceptually paired with the [`crate::Group`] it was generated for; the
/// binding is not enforced structurally, so callers must not mix a
/// `Secret` with a group other than the one it was produced for.
///
/// `Secret` does not implement `Clone`, to avoid accidental duplication of
/// sensitive key material, and zeroizes its byte representation on drop —
/// the scoped-acquisition-with-guaranteed-wipe discipline used for ECDSA
/// and Paillier secrets elsewhere in the corpus.
#[derive(Zeroize, ZeroizeOnDrop, PartialEq)]
pub struct Secret {
    bytes: Vec<u8>,
}

impl Secret {
    pub(crate) fn new(x: &BigUint) -> Self {
        Self {
            bytes: x.to_bytes_be(),
        }
    }

    /// The exponent as a `BigUint`, reconstructed from the zeroizable byte
    /// buffer on each access.
    pub(crate) fn value(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret").field("x", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_round_trips_through_bytes() {
        let x = BigUint::from(12345u32);
        let s = Secret::new(&x);
        assert_eq!(s.value(), x);
    }

    #[test]
    fn debug_does_not_leak_value() {
        let s = Secret::new(&BigUint::from(42u32));
        assert!(!format!("{s:?}").contains("42"));
    }
}
