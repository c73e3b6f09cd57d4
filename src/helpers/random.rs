use rand::{
    Rng,
    distr::{Alphanumeric, Distribution},
};

/// Length used by callers that have no preference.
pub const DEFAULT_RANDOM_LENGTH: usize = 10;

/// Random string of exactly `len` characters drawn uniformly from
/// `[0-9a-zA-Z]`, using the thread-local generator.
pub fn random_string(len: usize) -> String {
    random_string_with(&mut rand::rng(), len)
}

/// Same as [`random_string`] with a caller-supplied generator.
pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(Alphanumeric.sample(rng))).collect()
}
