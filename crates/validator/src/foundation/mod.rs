//! Core types and traits
//!
//! This module contains the fundamental building blocks of the rule system:
//!
//! - **Outcome**: [`Outcome`], [`Messages`], [`Rejected`]
//! - **Traits**: [`Rule`], [`RuleExt`]
//!
//! # Architecture
//!
//! ## 1. Outcomes, not exceptions
//!
//! A rule never panics and never returns `Result`. Every check ends in an
//! [`Outcome`]: `Success(value)` or `Failure(messages)`. Parse errors and
//! missing keys are converted into failures at the rule that meets them.
//!
//! ## 2. Closed composition
//!
//! Combinators are plain structs that implement [`Rule`] again:
//!
//! ```rust,ignore
//! let number = lookup("number").flat_map(parse_int());   // sequential
//! let street = lookup("street");
//! let address = number.and(street, Address::new);         // parallel
//! ```
//!
//! ## 3. Accumulate in parallel, short-circuit in sequence
//!
//! `and`/`ap` concatenate failures from every branch, left first.
//! `flat_map` stops at the first failure.

pub mod error;
pub mod messages;
pub mod outcome;
pub mod traits;

pub use error::Rejected;
pub use messages::{Message, Messages};
pub use outcome::{Outcome, combine3, combine4, combine5, combine6};
pub use traits::{Rule, RuleExt};

// ============================================================================
// UTILITIES
// ============================================================================

/// Applies a rule and converts the outcome into a `Result`.
///
/// A convenience for the edge of a program, where failures leave the
/// outcome world as a [`Rejected`] error.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::foundation::check;
///
/// let number: i64 = check(&parse_int(), "29")?;
/// ```
pub fn check<R>(rule: &R, input: &R::Input) -> Result<R::Output, Rejected>
where
    R: Rule + ?Sized,
{
    rule.apply(input).into_result()
}

/// Applies every rule to the same input and accumulates their failures.
///
/// Successes are collected in rule order.
pub fn apply_all<R>(input: &R::Input, rules: &[&R]) -> Outcome<Vec<R::Output>>
where
    R: Rule + ?Sized,
{
    rules.iter().map(|rule| rule.apply(input)).collect()
}
