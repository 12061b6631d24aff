//! AND combinator - parallel composition of rules
//!
//! This module provides the [`And`] combinator which applies two rules to
//! the *same* input and combines their outcomes. Unlike [`FlatMap`], neither
//! side sees the other's output and both always run, so failures from both
//! are reported together.
//!
//! [`FlatMap`]: crate::combinators::FlatMap
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let number = field(|a: &Address| a.number).flat_map(min(1_i64));
//! let street = field(|a: &Address| a.street.clone()).flat_map(not_empty());
//! let address = number.and(street, Address::new);
//!
//! let result = address.apply(&Address::new(0, String::new()));
//! assert_eq!(result, Outcome::failures(["Too small", "Empty string"]));
//! ```

use crate::foundation::{Outcome, Rule};

/// Applies two rules to the same input and accumulates their failures.
///
/// # Type Parameters
///
/// * `L` - The left (first) rule type; its messages come first
/// * `R` - The right (second) rule type
/// * `F` - Combines both success values
#[derive(Debug, Clone, Copy)]
pub struct And<L, R, F> {
    /// The left (first) rule.
    pub(crate) left: L,
    /// The right (second) rule.
    pub(crate) right: R,
    combine: F,
}

/// [`And`] with the tuple constructor, as returned by `RuleExt::zip`.
pub type Zip<L, R> = And<
    L,
    R,
    fn(<L as Rule>::Output, <R as Rule>::Output) -> (<L as Rule>::Output, <R as Rule>::Output),
>;

impl<L, R, F> And<L, R, F> {
    /// Creates a new `And` combinator.
    ///
    /// # Arguments
    ///
    /// * `left` - The first rule to apply
    /// * `right` - The second rule to apply
    /// * `combine` - Builds the result from both success values
    pub fn new(left: L, right: R, combine: F) -> Self {
        Self {
            left,
            right,
            combine,
        }
    }

    /// Returns a reference to the left rule.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right rule.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right rules and the combining function.
    pub fn into_parts(self) -> (L, R, F) {
        (self.left, self.right, self.combine)
    }
}

impl<L, R, F, C> Rule for And<L, R, F>
where
    L: Rule,
    R: Rule<Input = L::Input>,
    F: Fn(L::Output, R::Output) -> C,
{
    type Input = L::Input;
    type Output = C;

    fn apply(&self, input: &Self::Input) -> Outcome<C> {
        let left = self.left.apply(input);
        let right = self.right.apply(input);
        left.and(right, &self.combine)
    }
}

/// Creates an `And` combinator from two rules.
pub fn and<L, R, F, C>(left: L, right: R, combine: F) -> And<L, R, F>
where
    L: Rule,
    R: Rule<Input = L::Input>,
    F: Fn(L::Output, R::Output) -> C,
{
    And::new(left, right, combine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::from_fn;
    use crate::foundation::RuleExt;
    use std::cell::Cell;

    fn at_least(min: usize, message: &'static str) -> impl Rule<Input = str, Output = usize> {
        from_fn(move |s: &str| {
            if s.len() >= min {
                Outcome::success(s.len())
            } else {
                Outcome::failure(message)
            }
        })
    }

    #[test]
    fn test_and_both_pass() {
        let rule = at_least(1, "a").and(at_least(2, "b"), |x, y| x + y);
        assert_eq!(rule.apply("hello"), Outcome::success(10));
    }

    #[test]
    fn test_and_accumulates_left_first() {
        let rule = at_least(5, "left").and(at_least(6, "right"), |x, y| x + y);
        assert_eq!(rule.apply("hi"), Outcome::failures(["left", "right"]));
    }

    #[test]
    fn test_and_single_side_failure() {
        let rule = at_least(1, "left").and(at_least(3, "right"), |x, y| x + y);
        assert_eq!(rule.apply("hi"), Outcome::failure("right"));
    }

    #[test]
    fn test_and_runs_both_sides_on_same_input() {
        let seen = Cell::new(0);
        let counting = from_fn(|s: &str| {
            seen.set(seen.get() + 1);
            Outcome::<usize>::failure(if s.is_empty() { "empty" } else { "set" })
        });
        let rule = (&counting).and(&counting, |a, b| a + b);
        assert_eq!(rule.apply(""), Outcome::failures(["empty", "empty"]));
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_zip_pairs_outputs() {
        let rule = at_least(1, "a").zip(at_least(1, "b"));
        assert_eq!(rule.apply("xyz"), Outcome::success((3, 3)));
    }

    #[test]
    fn test_and_free_function() {
        let rule = and(at_least(9, "a"), at_least(1, "b"), |x, _| x);
        assert_eq!(rule.apply("x"), Outcome::failure("a"));
    }
}
