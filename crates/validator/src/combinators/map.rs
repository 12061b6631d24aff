//! MAP combinator - transforms the success value of a rule
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let length = not_empty().map(|s: String| s.len());
//! assert_eq!(length.apply("abc"), Outcome::success(3));
//! ```

use crate::foundation::{Outcome, Rule};

/// Runs the inner rule, then maps its success value.
///
/// Failures of the inner rule pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Map<R, F> {
    inner: R,
    f: F,
}

impl<R, F> Map<R, F> {
    /// Creates a new `Map` combinator.
    pub fn new(inner: R, f: F) -> Self {
        Self { inner, f }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Extracts the inner rule and the mapping function.
    pub fn into_parts(self) -> (R, F) {
        (self.inner, self.f)
    }
}

impl<R, F, B> Rule for Map<R, F>
where
    R: Rule,
    F: Fn(R::Output) -> B,
{
    type Input = R::Input;
    type Output = B;

    fn apply(&self, input: &Self::Input) -> Outcome<B> {
        self.inner.apply(input).map(&self.f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::from_fn;
    use crate::foundation::RuleExt;

    #[test]
    fn test_map_success() {
        let rule = from_fn(|n: &i32| Outcome::success(*n)).map(|n| n + 1);
        assert_eq!(rule.apply(&1), Outcome::success(2));
    }

    #[test]
    fn test_map_failure_unchanged() {
        let rule = from_fn(|_: &i32| Outcome::<i32>::failure("no")).map(|n| n + 1);
        assert_eq!(rule.apply(&1), Outcome::failure("no"));
    }

    #[test]
    fn test_map_matches_outcome_map() {
        let inner = from_fn(|n: &i32| {
            if *n > 0 {
                Outcome::success(*n)
            } else {
                Outcome::failure("neg")
            }
        });
        let f = |n: i32| n * 3;
        let rule = (&inner).map(f);
        for x in [-2, 0, 5] {
            assert_eq!(rule.apply(&x), inner.apply(&x).map(f));
        }
    }
}
