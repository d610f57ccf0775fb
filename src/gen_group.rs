//! Safe-prime group generation with a verified generator.

use num_bigint::BigUint;
use num_traits::One;

use crate::error::DhError;
use crate::group::Group;
use crate::rng::DhRng;

/// Generates a fresh safe-prime group of `bits` bits with `gg = 2`.
///
/// Draws `(q, p) = rng.safe_prime(bits)` and accepts the pair only once
/// `2^q mod p = 1`, i.e. once 2 is confirmed to generate the order-`q`
/// subgroup; otherwise it retries with a fresh safe-prime draw. Retry is
/// unbounded in principle but terminates quickly in practice, since 2 is a
/// quadratic residue mod `p` for roughly half of all safe primes `p`.
pub fn gen_group(rng: &mut impl DhRng, bits: u64) -> Result<Group, DhError> {
    if bits < 8 {
        return Err(DhError::InvalidArgument(format!(
            "bits must be >= 8, got {bits}"
        )));
    }

    let gg = BigUint::from(2u32);
    loop {
        let (q, p) = rng.safe_prime(bits);
        if gg.modpow(&q, &p) == BigUint::one() {
            tracing::debug!(bits = p.bits(), "generated safe-prime group");
            return Ok(Group {
                p,
                gg,
                q: Some(q),
            });
        }
        tracing::trace!("generator check failed for safe-prime candidate, retrying");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn rejects_too_small_bit_size() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(
            gen_group(&mut rng, 7),
            Err(DhError::InvalidArgument("bits must be >= 8, got 7".into()))
        );
    }

    #[test]
    fn produces_verified_safe_prime_group() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let g = gen_group(&mut rng, 64).unwrap();

        assert!(g.p.bits() == 64 || g.p.bits() == 65);
        assert_eq!(g.gg, BigUint::from(2u32));
        let q = g.q.clone().unwrap();
        assert_eq!(q, (&g.p - BigUint::one()) / BigUint::from(2u32));
        assert_eq!(g.gg.modpow(&q, &g.p), BigUint::one());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig { cases: 20, .. ProptestConfig::default() })]
            #[test]
            fn produces_a_verified_safe_prime_group_for_arbitrary_seeds_and_sizes(
                seed in any::<u64>(),
                bits in 9u64..40u64,
            ) {
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                let g = gen_group(&mut rng, bits).unwrap();

                prop_assert!(g.p.bits() == bits || g.p.bits() == bits + 1);
                prop_assert_eq!(&g.gg, &BigUint::from(2u32));
                let q = g.q.clone().unwrap();
                prop_assert_eq!(&q, &((&g.p - BigUint::one()) / BigUint::from(2u32)));
                prop_assert_eq!(g.gg.modpow(&q, &g.p), BigUint::one());
            }
        }
    }
}
