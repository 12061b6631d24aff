//! FLAT_MAP combinator - sequential composition of rules
//!
//! The second rule checks the *output* of the first, so a chain can convert
//! a value step by step (`String` → non-empty `String` → `i64`). The first
//! failure stops the chain.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let number = lookup("number").flat_map(parse_int()).flat_map(min(1_i64));
//! ```

use std::borrow::Borrow;

use crate::foundation::{Outcome, Rule};

/// Feeds the success value of `first` into `next`.
///
/// The intermediate value only needs to borrow as `next`'s input, so a rule
/// producing `String` can be followed by one that checks `str`.
#[derive(Debug, Clone, Copy)]
pub struct FlatMap<R1, R2> {
    first: R1,
    next: R2,
}

impl<R1, R2> FlatMap<R1, R2> {
    /// Creates a new `FlatMap` combinator.
    pub fn new(first: R1, next: R2) -> Self {
        Self { first, next }
    }

    /// Returns a reference to the first rule.
    pub fn first(&self) -> &R1 {
        &self.first
    }

    /// Returns a reference to the rule applied on success.
    pub fn next(&self) -> &R2 {
        &self.next
    }

    /// Extracts both rules.
    pub fn into_parts(self) -> (R1, R2) {
        (self.first, self.next)
    }
}

impl<R1, R2> Rule for FlatMap<R1, R2>
where
    R1: Rule,
    R2: Rule,
    R1::Output: Borrow<R2::Input>,
{
    type Input = R1::Input;
    type Output = R2::Output;

    fn apply(&self, input: &Self::Input) -> Outcome<Self::Output> {
        self.first
            .apply(input)
            .flat_map(|value| self.next.apply(value.borrow()))
    }
}
