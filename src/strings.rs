//! Basic string set used to deduplicate tag names

use std::collections::HashSet;

/// An unordered, deduplicated collection of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Set(HashSet<String>);

impl Set {
  /// Create an empty set
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a string to the set
  pub fn add(&mut self, value: impl Into<String>) {
    self.0.insert(value.into());
  }

  /// Check if an element exists within the set
  pub fn contains(&self, value: &str) -> bool {
    self.0.contains(value)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Materialize the set into a Vec. Iteration order is unspecified.
  pub fn into_vec(self) -> Vec<String> {
    self.0.into_iter().collect()
  }
}

impl<S: Into<String>> FromIterator<S> for Set {
  fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
    Self(iter.into_iter().map(Into::into).collect())
  }
}

impl<S: Into<String>> Extend<S> for Set {
  fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
    self.0.extend(iter.into_iter().map(Into::into));
  }
}
