//! Password generator - uniform sampling from the working alphabet.

use rand::Rng;
use rand::rngs::{OsRng, ThreadRng};
use secrecy::{ExposeSecret, SecretString};

use crate::charset::CharacterSet;

/// Source of uniformly distributed indices.
pub trait IndexSource {
    /// Returns an index in `[0, bound)`. `bound` is always greater than zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Adapts any `rand::Rng` into an [`IndexSource`].
#[derive(Debug, Clone)]
pub struct RandomIndex<R>(R);

impl<R: Rng> RandomIndex<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl<R: Rng> IndexSource for RandomIndex<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Thread-local generator. No cryptographic guarantee is made for it.
pub type ThreadRandom = RandomIndex<ThreadRng>;

/// Operating system entropy, for callers that want a cryptographic source.
pub type OsRandom = RandomIndex<OsRng>;

impl Default for ThreadRandom {
    fn default() -> Self {
        Self(rand::thread_rng())
    }
}

impl Default for OsRandom {
    fn default() -> Self {
        Self(OsRng)
    }
}

/// An immutable generated password.
///
/// An empty password means no character class was selected. `Debug` output
/// never shows the contents.
#[derive(Debug)]
pub struct GeneratedPassword(SecretString);

impl GeneratedPassword {
    pub fn empty() -> Self {
        Self(SecretString::new(String::new().into()))
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.0.expose_secret().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl From<String> for GeneratedPassword {
    fn from(value: String) -> Self {
        Self(SecretString::new(value.into()))
    }
}

impl ExposeSecret<str> for GeneratedPassword {
    fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Generates a password with the thread-local generator.
///
/// # Arguments
/// * `classes` - Enabled character classes
/// * `length` - Number of characters to draw
///
/// # Returns
/// An empty password when `classes` is empty, otherwise exactly `length`
/// characters drawn from the working alphabet.
pub fn generate(classes: &CharacterSet, length: usize) -> GeneratedPassword {
    generate_with(&mut ThreadRandom::default(), classes, length)
}

/// Generates a password drawing indices from `source`.
pub fn generate_with<S: IndexSource + ?Sized>(
    source: &mut S,
    classes: &CharacterSet,
    length: usize,
) -> GeneratedPassword {
    let alphabet = classes.working_alphabet();
    if alphabet.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("No character class selected, returning empty password");
        return GeneratedPassword::empty();
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generating password: length {}, alphabet size {}",
        length,
        alphabet.len()
    );

    let password: String = (0..length)
        .map(|_| alphabet[source.next_index(alphabet.len())])
        .collect();

    GeneratedPassword::from(password)
}
