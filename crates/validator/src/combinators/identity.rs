//! IDENTITY rule - the neutral element of rule composition

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Outcome, Rule};

/// Always succeeds with a clone of its input.
///
/// The seed of field projection chains:
/// `identity().map(extract).flat_map(check)`.
pub struct Identity<A> {
    _phantom: PhantomData<fn(&A) -> A>,
}

impl<A> Identity<A> {
    /// Creates the identity rule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<A> Default for Identity<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for Identity<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Identity<A> {}

impl<A> fmt::Debug for Identity<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<A: Clone> Rule for Identity<A> {
    type Input = A;
    type Output = A;

    fn apply(&self, input: &A) -> Outcome<A> {
        Outcome::success(input.clone())
    }
}

/// Creates the identity rule.
#[must_use]
pub fn identity<A: Clone>() -> Identity<A> {
    Identity::new()
}
