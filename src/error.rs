use thiserror::Error;

/// Errors surfaced directly to callers.
///
/// Rejection of a *peer's* public contribution is not modeled as an error
/// (see [`crate::shared`]); these variants cover the caller's own
/// misuse or mis-parametrization.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DhError {
    /// The public element derived from a caller-supplied secret is
    /// degenerate for the group (see [`crate::group::bad_public_key`]).
    #[error("derived public key is degenerate for this group")]
    InvalidPublicKey,

    /// `gen_group` was asked for a modulus shorter than 8 bits.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
