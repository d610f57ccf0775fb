//! Example showing how to use `ffdh` for a two-party key exchange.
use ffdh::{gen_key, registry, shared};
use rand::rngs::OsRng;

fn main() {
    // Pick a named group from the registry; any RFC-standard group works.
    let group = registry::ffdhe2048();

    let mut rng = OsRng;

    // Alice generates her key pair.
    let (secret_a, public_a) = gen_key(group, &mut rng, None);
    // Bob generates his.
    let (secret_b, public_b) = gen_key(group, &mut rng, None);

    // Each side sends its public element to the other over the wire...
    // and derives the shared secret from its own secret plus the peer's
    // public element.
    let shared_a = shared(group, &secret_a, &public_b).expect("bob's key should validate");
    let shared_b = shared(group, &secret_b, &public_a).expect("alice's key should validate");

    assert_eq!(shared_a, shared_b);
    println!("agreed on a {}-byte shared secret", shared_a.len());
}
