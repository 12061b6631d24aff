//! Core traits for the rule system
//!
//! [`Rule`] is the single abstraction: a pure function from a borrowed input
//! to an [`Outcome`]. [`RuleExt`] lifts the outcome algebra to rules, so
//! composing two rules always yields another rule.

use std::borrow::Borrow;
use std::sync::Arc;

use crate::foundation::{Message, Outcome};

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A single validation or conversion step.
///
/// Rules hold no mutable state; applying one never panics and never
/// reports failure by any channel other than the returned [`Outcome`].
///
/// # Type Parameters
///
/// * `Input` - The type being checked (can be `?Sized`, e.g. `str`)
/// * `Output` - The value produced on success; may differ from the input
///   when the rule converts (e.g. `str` to `i64`)
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::foundation::{Outcome, Rule};
///
/// struct Positive;
///
/// impl Rule for Positive {
///     type Input = i64;
///     type Output = i64;
///
///     fn apply(&self, input: &i64) -> Outcome<i64> {
///         if *input > 0 {
///             Outcome::success(*input)
///         } else {
///             Outcome::failure("Not positive")
///         }
///     }
/// }
/// ```
pub trait Rule {
    /// The type of input being checked.
    type Input: ?Sized;

    /// The value produced on success.
    type Output;

    /// Applies the rule to one input.
    fn apply(&self, input: &Self::Input) -> Outcome<Self::Output>;
}

impl<R: Rule + ?Sized> Rule for &R {
    type Input = R::Input;
    type Output = R::Output;

    fn apply(&self, input: &Self::Input) -> Outcome<Self::Output> {
        (**self).apply(input)
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    type Input = R::Input;
    type Output = R::Output;

    fn apply(&self, input: &Self::Input) -> Outcome<Self::Output> {
        (**self).apply(input)
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    type Input = R::Input;
    type Output = R::Output;

    fn apply(&self, input: &Self::Input) -> Outcome<Self::Output> {
        (**self).apply(input)
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for rules.
///
/// Automatically implemented for every [`Rule`].
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let street = field(|a: &Address| a.street.clone()).flat_map(not_empty());
/// let number = field(|a: &Address| a.number).flat_map(min(1_i64));
/// let address = number.and(street, Address::new);
/// ```
pub trait RuleExt: Rule + Sized {
    /// Runs this rule, then transforms its success value.
    fn map<F, B>(self, f: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> B,
    {
        Map::new(self, f)
    }

    /// Runs this rule, then feeds its success value into `next`.
    ///
    /// `next` checks the *output* of this rule, so a chain may narrow or
    /// convert the type at every step. A failure short-circuits: `next` is
    /// never applied.
    fn flat_map<R>(self, next: R) -> FlatMap<Self, R>
    where
        R: Rule,
        Self::Output: Borrow<R::Input>,
    {
        FlatMap::new(self, next)
    }

    /// Runs this rule and `other` on the same input, accumulating failures
    /// from both and combining successes with `combine`.
    fn and<R, F, C>(self, other: R, combine: F) -> And<Self, R, F>
    where
        R: Rule<Input = Self::Input>,
        F: Fn(Self::Output, R::Output) -> C,
    {
        And::new(self, other, combine)
    }

    /// [`and`](Self::and) with the tuple constructor.
    fn zip<R>(self, other: R) -> Zip<Self, R>
    where
        R: Rule<Input = Self::Input>,
    {
        let pair: fn(Self::Output, R::Output) -> (Self::Output, R::Output) = |a, b| (a, b);
        And::new(self, other, pair)
    }

    /// Replaces any failure messages by a single message.
    fn with_message(self, message: impl Into<Message>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }

    /// Erases the concrete type so the rule can be stored or shared.
    fn boxed(self) -> BoxedRule<Self::Input, Self::Output>
    where
        Self: Send + Sync + 'static,
    {
        BoxedRule::new(self)
    }
}

// Automatically implement RuleExt for all Rule implementations
impl<T: Rule> RuleExt for T {}

// ============================================================================
// IMPORT COMBINATOR TYPES
// ============================================================================

pub use crate::combinators::and::{And, Zip};
pub use crate::combinators::boxed::BoxedRule;
pub use crate::combinators::flat_map::FlatMap;
pub use crate::combinators::map::Map;
pub use crate::combinators::message::WithMessage;

#[cfg(test)]
mod tests {
    use super::*;

    struct Double;

    impl Rule for Double {
        type Input = i32;
        type Output = i32;

        fn apply(&self, input: &i32) -> Outcome<i32> {
            Outcome::success(input * 2)
        }
    }

    #[test]
    fn rule_trait_applies() {
        assert_eq!(Double.apply(&4), Outcome::success(8));
    }

    #[test]
    fn references_and_pointers_are_rules() {
        let shared = Arc::new(Double);
        assert_eq!((&Double).apply(&1), Outcome::success(2));
        assert_eq!(shared.apply(&2), Outcome::success(4));
        assert_eq!(Box::new(Double).apply(&3), Outcome::success(6));
    }
}
