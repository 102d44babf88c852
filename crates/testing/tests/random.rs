use std::collections::HashSet;

use launcher_util::random::{random_alphanumeric, random_alphanumeric_with, ALPHABET};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn random_alphanumeric_length_and_alphabet() {
	for len in [0, 1, 8, 64] {
		let s = random_alphanumeric(len);
		assert_eq!(s.len(), len);
		assert!(s.chars().all(|c| ALPHABET.contains(c)), "{s}");
	}
}

#[test]
fn random_alphanumeric_covers_alphabet() {
	let mut rng = StdRng::seed_from_u64(42);
	let s = random_alphanumeric_with(&mut rng, 10_000);
	let seen: HashSet<char> = s.chars().collect();
	assert_eq!(seen, ALPHABET.chars().collect::<HashSet<_>>());
	assert_eq!(ALPHABET.len(), 62);
}

#[test]
fn random_alphanumeric_seeded_is_deterministic() {
	let a = random_alphanumeric_with(&mut StdRng::seed_from_u64(7), 32);
	let b = random_alphanumeric_with(&mut StdRng::seed_from_u64(7), 32);
	assert_eq!(a, b);
	assert_ne!(random_alphanumeric(32), random_alphanumeric(32));
}
