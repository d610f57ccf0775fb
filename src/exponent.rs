//! Recommended short-exponent bit lengths, by modulus bit length.

/// `(modulus bits upper bound, recommended exponent bits)`, scanned in
/// declared order; the first entry whose bound is `>= bits` wins.
const EXPONENT_SIZE_TABLE: &[(u64, u64)] = &[
    (1024, 180),
    (2048, 225),
    (3072, 275),
    (4096, 325),
    (6144, 375),
    (8192, 400),
];

/// Default exponent size, in bits, above which `EXPONENT_SIZE_TABLE` has no
/// entry.
const FALLBACK_EXPONENT_BITS: u64 = 512;

/// The recommended exponent bit length for a modulus of `bits` bits.
pub fn exp_size(bits: u64) -> u64 {
    EXPONENT_SIZE_TABLE
        .iter()
        .find(|(bound, _)| bits <= *bound)
        .map(|(_, exp_bits)| *exp_bits)
        .unwrap_or(FALLBACK_EXPONENT_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_boundaries_match_spec() {
        assert_eq!(exp_size(1024), 180);
        assert_eq!(exp_size(2048), 225);
        assert_eq!(exp_size(3072), 275);
        assert_eq!(exp_size(4096), 325);
        assert_eq!(exp_size(6144), 375);
        assert_eq!(exp_size(8192), 400);
        assert_eq!(exp_size(8193), 512);
    }

    #[test]
    fn below_smallest_bound_uses_smallest_entry() {
        assert_eq!(exp_size(512), 180);
        assert_eq!(exp_size(1), 180);
    }

    #[test]
    fn first_match_wins_at_exact_bounds() {
        // 2048 matches the 2048 bound, not the 3072 one.
        assert_eq!(exp_size(2048), 225);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn exp_size_is_bounded_and_monotonic(bits in 1u64..20_000) {
                let size = exp_size(bits);
                prop_assert!((180..=512).contains(&size));
                if bits > 1 {
                    prop_assert!(exp_size(bits - 1) <= size);
                }
            }
        }
    }
}
