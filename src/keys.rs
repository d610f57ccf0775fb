//! The key-lifecycle operations: `key_of_secret`, `gen_key`, `shared`.

use num_bigint::BigUint;

use crate::error::DhError;
use crate::exponent::exp_size;
use crate::group::{bad_public_key, Group};
use crate::rng::DhRng;
use crate::secret::Secret;

/// Derives the public element for a given secret, failing if it is
/// degenerate.
///
/// This is the deterministic counterpart to [`gen_key`]: given the same
/// `group` and `secret_bytes`, it always returns the same result. Unlike
/// [`gen_key`], it never retries — a degenerate result here means the
/// caller supplied a pathological secret for this group, which is a
/// programmer error, not a normal runtime condition.
pub fn key_of_secret(group: &Group, secret_bytes: &[u8]) -> Result<(Secret, Vec<u8>), DhError> {
    let x = BigUint::from_bytes_be(secret_bytes);
    key_of_secret_value(group, &x).map_err(|_| DhError::InvalidPublicKey)
}

/// Internal helper returning a tagged result instead of raising, so that
/// [`gen_key`]'s retry loop can drive it without relying on exceptions for
/// control flow (see spec design notes on replacing the reference
/// implementation's `try`/`catch` retry with a loop over `Err`).
struct BadPublic;

fn key_of_secret_value(group: &Group, x: &BigUint) -> Result<(Secret, Vec<u8>), BadPublic> {
    let y = group.gg.modpow(x, &group.p);
    if bad_public_key(group, &y) {
        return Err(BadPublic);
    }
    Ok((Secret::new(x), y.to_bytes_be()))
}

/// Generates a fresh `(secret, public_bytes)` pair.
///
/// `bits_hint`, if given, overrides the table-recommended exponent size
/// from [`exp_size`]; either way the final size is capped at
/// `bit_length(group.q)` when `q` is known, else at `bit_length(group.p)`.
/// When `bits_hint` exceeds that cap, the draw is silently truncated to
/// the cap — callers cannot widen the exponent beyond the group's order.
pub fn gen_key(
    group: &Group,
    rng: &mut impl DhRng,
    bits_hint: Option<u64>,
) -> (Secret, Vec<u8>) {
    let pb = group.p.bits();
    let requested = bits_hint.unwrap_or_else(|| exp_size(pb));
    let cap = group.q.as_ref().map(|q| q.bits()).unwrap_or(pb);
    let s_bits = requested.min(cap).max(1);

    loop {
        let x = rng.gen_bits(s_bits, true);
        match key_of_secret_value(group, &x) {
            Ok(pair) => {
                tracing::debug!(modulus_bits = pb, exponent_bits = s_bits, "generated key pair");
                return pair;
            }
            Err(BadPublic) => {
                tracing::trace!("rejected degenerate public key candidate, retrying");
            }
        }
    }
}

/// Computes the shared secret from `secret` and a peer's public
/// contribution, or `None` if the peer's contribution is degenerate.
///
/// A bad peer key is a normal, adversarial-but-expected protocol outcome,
/// not an error: this function never panics or returns `Err` on untrusted
/// input. No timing masking is applied — the design relies on ephemeral
/// (single-use) secrets to bound what a timing side channel could leak.
pub fn shared(group: &Group, secret: &Secret, peer_bytes: &[u8]) -> Option<Vec<u8>> {
    let y = BigUint::from_bytes_be(peer_bytes);
    if bad_public_key(group, &y) {
        return None;
    }
    Some(y.modpow(&secret.value(), &group.p).to_bytes_be())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn small_safe_prime_group() -> Group {
        // p = 23 (safe prime, q = 11), gg = 2.
        Group::safe_prime("17")
    }

    #[test]
    fn key_of_secret_rejects_degenerate_exponents() {
        let g = small_safe_prime_group();
        // x = 0 => gg^0 mod p = 1, degenerate.
        assert_eq!(
            key_of_secret(&g, &[0u8]),
            Err(DhError::InvalidPublicKey)
        );
    }

    #[test]
    fn key_of_secret_accepts_well_formed_exponent() {
        let g = small_safe_prime_group();
        let (_secret, public) = key_of_secret(&g, &[4u8]).unwrap();
        // gg^4 mod 23 = 16
        assert_eq!(public, BigUint::from(16u32).to_bytes_be());
    }

    #[test]
    fn key_of_secret_matches_known_answer_hex() {
        let g = small_safe_prime_group();
        let (_secret, public) = key_of_secret(&g, &[4u8]).unwrap();
        assert_eq!(hex::encode(&public), "10");
    }

    fn large_safe_prime_group() -> Group {
        Group::safe_prime(
            "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDEE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3BE39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF6955817183995497CEA956AE515D2261898FA051015728E5A8AACAA68FFFFFFFFFFFFFFFF",
        )
    }

    #[test]
    fn gen_key_and_shared_round_trip() {
        let g = large_safe_prime_group();
        let mut rng_a = ChaCha20Rng::seed_from_u64(1);
        let mut rng_b = ChaCha20Rng::seed_from_u64(2);

        let (secret_a, public_a) = gen_key(&g, &mut rng_a, None);
        let (secret_b, public_b) = gen_key(&g, &mut rng_b, None);

        let shared_a = shared(&g, &secret_a, &public_b).expect("peer key should validate");
        let shared_b = shared(&g, &secret_b, &public_a).expect("peer key should validate");
        assert_eq!(shared_a, shared_b);
    }

    #[test]
    fn gen_key_caps_exponent_at_subgroup_order() {
        let g = Group::safe_prime("17"); // p = 23, q = 11 (4 bits)
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let (secret, _public) = gen_key(&g, &mut rng, Some(800));
        assert!(secret.value().bits() <= g.q.as_ref().unwrap().bits());
    }

    #[test]
    fn shared_rejects_degenerate_peer_contributions() {
        let g = small_safe_prime_group();
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let (secret, _public) = gen_key(&g, &mut rng, None);

        for bad in [
            BigUint::from(0u32),
            BigUint::from(1u32),
            &g.p - BigUint::from(1u32),
            g.gg.clone(),
        ] {
            assert_eq!(shared(&g, &secret, &bad.to_bytes_be()), None);
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig { cases: 50, .. ProptestConfig::default() })]
            #[test]
            fn gen_key_and_shared_round_trip_for_arbitrary_seeds(
                seed_a in any::<u64>(),
                seed_b in any::<u64>(),
            ) {
                let g = large_safe_prime_group();
                let mut rng_a = ChaCha20Rng::seed_from_u64(seed_a);
                let mut rng_b = ChaCha20Rng::seed_from_u64(seed_b);

                let (secret_a, public_a) = gen_key(&g, &mut rng_a, None);
                let (secret_b, public_b) = gen_key(&g, &mut rng_b, None);

                let shared_a = shared(&g, &secret_a, &public_b);
                let shared_b = shared(&g, &secret_b, &public_a);
                prop_assert!(shared_a.is_some());
                prop_assert_eq!(shared_a, shared_b);
            }
        }
    }
}
