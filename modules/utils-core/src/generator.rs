//! Lazy, finite value generators.
//!
//! A [`Generator`] pairs a producer closure with a count. Nothing runs until the sequence is pulled:
//! each call to [`Generator::iter`] starts a fresh pass that invokes the producer on demand, at
//! most `size` times. Production and consumption happen on the caller's thread; std users who need
//! the producer to run ahead on its own task can reach for the background generator in
//! `kitbag-utils-std-rs`.

use core::iter::FusedIterator;


/// Finite, restartable sequence of values produced on demand.
#[derive(Clone)]
pub struct Generator<F> {
  size:     usize,
  producer: F,
}

impl<F> Generator<F> {
  /// Creates a generator that yields `size` values from `producer`.
  #[must_use]
  pub const fn new(size: usize, producer: F) -> Self {
    Self { size, producer }
  }

  /// Returns the number of values each pass yields.
  #[must_use]
  pub const fn size(&self) -> usize {
    self.size
  }

  /// Starts a new pass over the sequence.
  ///
  /// Passes are independent; every pass calls the producer afresh.
  pub fn iter<T>(&self) -> GeneratorIter<'_, F>
  where
    F: Fn() -> T, {
    GeneratorIter { producer: &self.producer, remaining: self.size }
  }
}

impl<F> core::fmt::Debug for Generator<F> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Generator").field("size", &self.size).finish_non_exhaustive()
  }
}

impl<'a, T, F> IntoIterator for &'a Generator<F>
where
  F: Fn() -> T,
{
  type IntoIter = GeneratorIter<'a, F>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl<T, F> IntoIterator for Generator<F>
where
  F: FnMut() -> T,
{
  type IntoIter = GeneratorIntoIter<F>;
  type Item = T;

  fn into_iter(self) -> Self::IntoIter {
    GeneratorIntoIter { producer: self.producer, remaining: self.size }
  }
}

/// Borrowing pass over a [`Generator`].
pub struct GeneratorIter<'a, F> {
  producer:  &'a F,
  remaining: usize,
}

impl<T, F> Iterator for GeneratorIter<'_, F>
where
  F: Fn() -> T,
{
  type Item = T;

  fn next(&mut self) -> Option<T> {
    if self.remaining == 0 {
      return None;
    }
    self.remaining -= 1;
    Some((self.producer)())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T, F> ExactSizeIterator for GeneratorIter<'_, F> where F: Fn() -> T {}

impl<T, F> FusedIterator for GeneratorIter<'_, F> where F: Fn() -> T {}

/// Owning, single pass over a [`Generator`]; accepts stateful (`FnMut`) producers.
pub struct GeneratorIntoIter<F> {
  producer:  F,
  remaining: usize,
}

impl<T, F> Iterator for GeneratorIntoIter<F>
where
  F: FnMut() -> T,
{
  type Item = T;

  fn next(&mut self) -> Option<T> {
    if self.remaining == 0 {
      return None;
    }
    self.remaining -= 1;
    Some((self.producer)())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<T, F> ExactSizeIterator for GeneratorIntoIter<F> where F: FnMut() -> T {}

impl<T, F> FusedIterator for GeneratorIntoIter<F> where F: FnMut() -> T {}
