//! Closures as rules

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Outcome, Rule};

/// A rule backed by a closure `Fn(&I) -> Outcome<O>`.
///
/// Created with [`from_fn`].
pub struct FromFn<I: ?Sized, O, F> {
    f: F,
    _phantom: PhantomData<fn(&I) -> O>,
}

impl<I: ?Sized, O, F> FromFn<I, O, F> {
    /// Wraps a closure.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<I: ?Sized, O, F: Clone> Clone for FromFn<I, O, F> {
    fn clone(&self) -> Self {
        Self::new(self.f.clone())
    }
}

impl<I: ?Sized, O, F> fmt::Debug for FromFn<I, O, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").field("f", &"<function>").finish()
    }
}

impl<I, O, F> Rule for FromFn<I, O, F>
where
    I: ?Sized,
    F: Fn(&I) -> Outcome<O>,
{
    type Input = I;
    type Output = O;

    fn apply(&self, input: &I) -> Outcome<O> {
        (self.f)(input)
    }
}

/// Lifts a closure into a rule.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let even = from_fn(|n: &i64| {
///     if n % 2 == 0 { Outcome::success(*n) } else { Outcome::failure("Odd") }
/// });
/// ```
pub fn from_fn<I, O, F>(f: F) -> FromFn<I, O, F>
where
    I: ?Sized,
    F: Fn(&I) -> Outcome<O>,
{
    FromFn::new(f)
}
