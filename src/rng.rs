//! Random-number source abstraction.
//!
//! The group-generation and key-generation algorithms are pure functions of
//! their inputs plus whatever randomness the caller supplies. This module
//! treats the RNG as an external collaborator, in the spirit of the
//! teacher crate's use of `rand::rngs::OsRng` for `BitSize::n_bit_random`,
//! but generalizes it to a trait so callers can inject a deterministic,
//! seedable RNG in tests (`rand_chacha::ChaCha20Rng`) and a CSPRNG in
//! production (`rand::rngs::OsRng`).

use num_bigint::{BigUint, RandomBits};
use num_prime::nt_funcs::is_prime;
use num_traits::One;
use rand::{CryptoRng, Rng, RngCore};

/// Uniform random bit generation plus safe-prime sampling, as required by
/// `gen_key` and `gen_group`.
pub trait DhRng {
    /// A uniformly random integer of exactly `bits` bits. When `msb_set` is
    /// true the top bit is forced to 1, guaranteeing the value occupies the
    /// full requested bit length.
    fn gen_bits(&mut self, bits: u64, msb_set: bool) -> BigUint;

    /// A safe-prime pair `(q, p)` with `p = 2q + 1`, both prime, and
    /// `p` occupying `bits` or `bits + 1` bits.
    fn safe_prime(&mut self, bits: u64) -> (BigUint, BigUint);
}

impl<R: RngCore + CryptoRng> DhRng for R {
    fn gen_bits(&mut self, bits: u64, msb_set: bool) -> BigUint {
        assert!(bits > 0, "gen_bits requires a positive bit length");
        let mut value: BigUint = self.sample(RandomBits::new(bits));
        if msb_set {
            value.set_bit(bits - 1, true);
        }
        value
    }

    fn safe_prime(&mut self, bits: u64) -> (BigUint, BigUint) {
        assert!(bits > 1, "safe_prime requires at least 2 bits");
        let two = BigUint::from(2u32);
        loop {
            let q = self.gen_bits(bits - 1, true) | BigUint::one();
            let p = &two * &q + BigUint::one();
            if is_prime(&q, None).probably() && is_prime(&p, None).probably() {
                tracing::trace!(bits, "found safe prime candidate");
                return (q, p);
            }
        }
    }
}
