//! Utilities for generating passwords.

use log::trace;
use rand::Rng;

use crate::{GenerationError, GenerationErrorRepr, Secret};

/// A source of uniformly distributed indices.
///
/// Generation only ever asks for an index into the alphabet, so swapping the source (say, for
/// one backed by the operating system's CSPRNG) doesn't change the algorithm.
pub trait IndexSource {
    /// Return an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<S: IndexSource + ?Sized> IndexSource for &mut S {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// An [`IndexSource`] backed by a `rand` RNG.
///
/// Note that `rand`'s underlying uniform sampler does the right thing to prevent bias: if it
/// can't generate a value that is within the given range (or really, a multiple of the range),
/// it re-samples.
#[derive(Debug)]
pub struct RandomIndices<R>(R);

impl<R: Rng> RandomIndices<R> {
    pub fn new(rng: R) -> RandomIndices<R> {
        RandomIndices(rng)
    }
}

impl RandomIndices<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        RandomIndices(rand::thread_rng())
    }
}

impl RandomIndices<rand::rngs::OsRng> {
    pub fn os() -> Self {
        RandomIndices(rand::rngs::OsRng)
    }
}

impl<R: Rng> IndexSource for RandomIndices<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Generate a password of `len` characters by sampling `alphabet` uniformly, with replacement.
///
/// Fails if `alphabet` is empty and `len` is non-zero; there is nothing to sample from.
pub fn generate_random_password<S>(
    source: &mut S,
    alphabet: &str,
    len: usize,
) -> Result<Secret, GenerationError>
where
    S: IndexSource + ?Sized,
{
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    if alphabet.is_empty() && len > 0 {
        return Err(GenerationErrorRepr::EmptyAlphabet { len }.into());
    }
    trace!(
        "sampling {} characters from an alphabet of {}",
        len,
        alphabet.len()
    );

    let mut secret = String::with_capacity(len);
    for _ in 0..len {
        let idx = source.next_index(alphabet.len());
        let ch = alphabet
            .get(idx)
            .ok_or(GenerationErrorRepr::IndexOutOfRange {
                idx,
                bound: alphabet.len(),
            })?;
        secret.push(*ch);
    }
    Ok(Secret(secret))
}
