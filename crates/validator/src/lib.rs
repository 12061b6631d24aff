//! # verdict-validator
//!
//! A small composable validation engine: an [`Outcome`](foundation::Outcome)
//! algebra (success with a value, or failure with messages), a
//! [`Rule`](foundation::Rule) abstraction (input → outcome), and combinators
//! that build record validators out of primitive checks.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let number = field(|a: &Address| a.number).flat_map(min(1_i64));
//! let street = field(|a: &Address| a.street.clone()).flat_map(not_empty());
//! let address = number.and(street, Address::new);
//!
//! let outcome = address.apply(&Address::new(0, String::new()));
//! assert_eq!(outcome, Outcome::failures(["Too small", "Empty string"]));
//! ```
//!
//! ## Composition
//!
//! - **Sequential** via [`flat_map`](foundation::RuleExt::flat_map): the next
//!   rule checks the previous output; the first failure short-circuits.
//! - **Parallel** via [`and`](foundation::RuleExt::and),
//!   [`and3`](combinators::and3) ... [`and6`](combinators::and6): every rule
//!   sees the same input; failures accumulate left to right.
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for zero-boilerplate primitives,
//! [`from_fn`](combinators::from_fn) for one-off closures, or implement
//! [`Rule`](foundation::Rule) manually.
//!
//! ## Built-in Rules
//!
//! - **String**: [`NotEmpty`](rules::NotEmpty), [`InitialCap`](rules::InitialCap),
//!   [`Capitalize`](rules::Capitalize)
//! - **Numeric**: [`Min`](rules::Min)
//! - **Parsing**: [`ParseInt`](rules::ParseInt)
//! - **Maps**: [`Lookup`](rules::Lookup)

// Nested combinator types (And<FlatMap<Field<...>, ...>, ...>) trip this lint.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
