use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// The characters [`random_alphanumeric`] picks from.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Get a random string of `len` characters from [`ALPHABET`].
///
/// Used for unique temporary names. Uniqueness is only probabilistic.
pub fn random_alphanumeric(len: usize) -> String {
	random_alphanumeric_with(&mut thread_rng(), len)
}

/// Same as [`random_alphanumeric`] but with a caller supplied generator.
pub fn random_alphanumeric_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
	rng.sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}
