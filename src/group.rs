//! The `Group` entity and the public-element validation predicate.

use num_bigint::BigUint;
use num_traits::One;

/// An immutable finite-field Diffie-Hellman group: a prime modulus `p`, a
/// generator `gg`, and an optional subgroup order `q`.
///
/// `q` is optional because a caller building a group outside the registry
/// (e.g. via [`crate::gen_group`] with a non-safe-prime modulus) may not
/// know its subgroup order. When absent, exponent sizing falls back to the
/// modulus bit length and the full subgroup check `y^q mod p = 1` is
/// unavailable; only [`bad_public_key`] is applied. Every group in
/// [`crate::registry`] sets `q`, including the safe-prime Oakley groups,
/// where it is `(p - 1) / 2`.
///
/// Constructed once from a registry table or via [`crate::gen_group`], and
/// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub p: BigUint,
    pub gg: BigUint,
    pub q: Option<BigUint>,
}

impl Group {
    /// General three-parameter constructor: `p`, `gg`, and `q` are each
    /// whitespace-tolerant, case-insensitive hex strings.
    ///
    /// Callers are trusted to supply a consistent triple (`gg^q mod p = 1`);
    /// this constructor does not verify it. Only [`crate::gen_group`]
    /// performs that verification, because it is the one path that invents
    /// fresh parameters rather than reproducing a published, audited group.
    pub fn new(p_hex: &str, gg_hex: &str, q_hex: &str) -> Self {
        Self {
            p: parse_hex(p_hex),
            gg: parse_hex(gg_hex),
            q: Some(parse_hex(q_hex)),
        }
    }

    /// Safe-prime convenience constructor: parses `p`, sets `gg = 2` and
    /// `q = (p - 1) / 2`.
    pub fn safe_prime(p_hex: &str) -> Self {
        let p = parse_hex(p_hex);
        let q = (&p - BigUint::one()) / BigUint::from(2u32);
        Self {
            p,
            gg: BigUint::from(2u32),
            q: Some(q),
        }
    }

    /// Bit length of the modulus.
    pub fn modulus_size(&self) -> u64 {
        self.p.bits()
    }
}

/// Bit length of `group.p`. Free function mirroring the spec's
/// `modulus_size(group)` so callers are not forced to reach for the method.
pub fn modulus_size(group: &Group) -> u64 {
    group.modulus_size()
}

/// `true` iff `y` is a degenerate public element for `group`: `y <= 1`,
/// `y >= p - 1`, or `y == gg`.
///
/// These are the small-subgroup and trivially-weak cases reachable without
/// knowing `q`. The `y == gg` branch is conservative — it is not strictly
/// required for correctness, since an honest peer whose exponent happens
/// to be `1 (mod ord gg)` would also trip it — but it is retained for
/// parity with the reference design and flagged as a potential interop
/// hazard rather than relaxed.
pub fn bad_public_key(group: &Group, y: &BigUint) -> bool {
    if y <= &BigUint::one() {
        return true;
    }
    let p_minus_one = &group.p - BigUint::one();
    if y >= &p_minus_one {
        return true;
    }
    y == &group.gg
}

/// Strips ASCII whitespace from `hex` and parses the remainder as an
/// unsigned big-endian hex integer, case-insensitively.
///
/// Registry constants are compile-time-known-good literals; malformed
/// input panics rather than returning a `Result`, mirroring the teacher's
/// `unwrap()`-on-known-good-literal style in `BitSize::fixed_prime`.
pub(crate) fn parse_hex(hex: &str) -> BigUint {
    let cleaned: String = hex.chars().filter(|c| !c.is_whitespace()).collect();
    BigUint::parse_bytes(cleaned.as_bytes(), 16)
        .unwrap_or_else(|| panic!("invalid hex literal in group registry: {cleaned}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_prime_sets_gg_2_and_q_half_p_minus_one() {
        // p = 23 is a safe prime: q = (23-1)/2 = 11, also prime.
        let g = Group::safe_prime("17");
        assert_eq!(g.p, BigUint::from(0x17u32));
        assert_eq!(g.gg, BigUint::from(2u32));
        assert_eq!(g.q, Some((BigUint::from(0x17u32) - BigUint::one()) / BigUint::from(2u32)));
    }

    #[test]
    fn parse_hex_ignores_whitespace_and_case() {
        let a = parse_hex("DE AD\nBE\tEF");
        let b = parse_hex("deadbeef");
        assert_eq!(a, b);
    }

    #[test]
    fn bad_public_key_rejects_zero_one_generator_and_p_minus_one() {
        let g = Group::safe_prime("17"); // p = 23, gg = 2
        let p = g.p.clone();
        assert!(bad_public_key(&g, &BigUint::from(0u32)));
        assert!(bad_public_key(&g, &BigUint::from(1u32)));
        assert!(bad_public_key(&g, &g.gg));
        assert!(bad_public_key(&g, &(&p - BigUint::one())));
        assert!(!bad_public_key(&g, &BigUint::from(4u32)));
    }

    #[test]
    fn modulus_size_matches_bit_length() {
        let g = Group::safe_prime("17");
        assert_eq!(modulus_size(&g), g.p.bits());
    }
}
