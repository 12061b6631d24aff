//! Type-erased rules
//!
//! Deep combinator nesting produces long concrete types. [`BoxedRule`]
//! erases them behind an `Arc`, which makes a rule cheap to clone and safe
//! to share between threads.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{Outcome, Rule};

/// A shareable rule with its concrete type erased.
pub struct BoxedRule<I: ?Sized, O> {
    inner: Arc<dyn Rule<Input = I, Output = O> + Send + Sync>,
}

impl<I: ?Sized, O> BoxedRule<I, O> {
    /// Erases the type of `rule`.
    pub fn new<R>(rule: R) -> Self
    where
        R: Rule<Input = I, Output = O> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(rule),
        }
    }
}

impl<I: ?Sized, O> Clone for BoxedRule<I, O> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<I: ?Sized, O> fmt::Debug for BoxedRule<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedRule")
    }
}

impl<I: ?Sized, O> Rule for BoxedRule<I, O> {
    type Input = I;
    type Output = O;

    fn apply(&self, input: &I) -> Outcome<O> {
        self.inner.apply(input)
    }
}
