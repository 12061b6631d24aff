//! EACH combinator - applies a rule to every element of a slice

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Outcome, Rule};

// ============================================================================
// EACH COMBINATOR
// ============================================================================

/// Applies a rule to every element of a slice.
///
/// Elements are independent, so failures accumulate in element order
/// (parallel composition). Successes are collected into a `Vec`.
///
/// `T` is the element type; it only has to borrow as the rule's input, so
/// a `str` rule checks a slice of `String`s.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let numbers = each::<_, String>(parse_int());
/// let parsed = numbers.apply(&["1".to_string(), "x".to_string(), "y".to_string()]);
/// assert_eq!(parsed, Outcome::failures(["Not a number", "Not a number"]));
/// ```
pub struct Each<R, T> {
    inner: R,
    _phantom: PhantomData<fn(&T)>,
}

impl<R, T> Each<R, T> {
    /// Creates a new `Each` combinator.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            _phantom: PhantomData,
        }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Clone, T> Clone for Each<R, T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<R: fmt::Debug, T> fmt::Debug for Each<R, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Each").field("inner", &self.inner).finish()
    }
}

impl<R, T> Rule for Each<R, T>
where
    R: Rule,
    T: Borrow<R::Input>,
{
    type Input = [T];
    type Output = Vec<R::Output>;

    fn apply(&self, input: &[T]) -> Outcome<Self::Output> {
        input
            .iter()
            .map(|element| self.inner.apply(element.borrow()))
            .collect()
    }
}

/// Creates an `Each` combinator over elements of type `T`.
pub fn each<R, T>(rule: R) -> Each<R, T>
where
    R: Rule,
    T: Borrow<R::Input>,
{
    Each::new(rule)
}
