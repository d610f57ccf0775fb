//! # FFDH — finite-field Diffie-Hellman key agreement
//!
//! This crate implements finite-field (classic, non-elliptic-curve)
//! Diffie-Hellman key agreement over a prime modulus: group construction and
//! validation, key-pair generation, and shared-secret derivation, plus a
//! registry of RFC-standard named groups (Oakley, MODP, FFDHE and DSA-style
//! domain-parameter groups).
//!
//! ### Core operations
//! - [`gen_group`] — generate a fresh safe-prime group with a verified
//!   generator.
//! - [`gen_key`] — generate a `(secret, public)` key pair for a group.
//! - [`key_of_secret`] — deterministically derive the public element for a
//!   caller-supplied secret.
//! - [`shared`] — derive the shared secret from a local secret and a peer's
//!   public contribution.
//! - [`registry`] — RFC 2409 / 3526 / 5114 / 7919 named groups.
//!
//! ## Usage
//!
//! ```
//! use ffdh::{gen_key, shared, registry};
//! use rand::rngs::OsRng;
//!
//! let group = registry::ffdhe2048();
//! let mut rng = OsRng;
//!
//! let (secret_a, public_a) = gen_key(group, &mut rng, None);
//! let (secret_b, public_b) = gen_key(group, &mut rng, None);
//!
//! let shared_a = shared(group, &secret_a, &public_b).unwrap();
//! let shared_b = shared(group, &secret_b, &public_a).unwrap();
//! assert_eq!(shared_a, shared_b);
//! ```
//!
//! All randomness is drawn through the [`DhRng`] trait, which is
//! blanket-implemented for any `rand::RngCore + rand::CryptoRng` source —
//! use [`rand::rngs::OsRng`] in production and a seeded
//! `rand_chacha::ChaCha20Rng` for deterministic tests.

mod error;
mod exponent;
mod gen_group;
mod group;
mod keys;
pub mod registry;
mod rng;
mod secret;

pub use error::DhError;
pub use exponent::exp_size;
pub use gen_group::gen_group;
pub use group::{bad_public_key, modulus_size, Group};
pub use keys::{gen_key, key_of_secret, shared};
pub use rng::DhRng;
pub use secret::Secret;
