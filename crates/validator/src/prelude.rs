//! Prelude module for convenient imports.
//!
//! Provides a single `use verdict_validator::prelude::*;` import that brings
//! in the outcome algebra, the rule traits, every combinator and every
//! built-in rule.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let number = lookup("number").flat_map(parse_int()).flat_map(min(1_i64));
//! ```

// ============================================================================
// FOUNDATION: Outcome algebra and core traits
// ============================================================================

pub use crate::foundation::{
    Message, Messages, Outcome, Rejected, Rule, RuleExt, apply_all, check, combine3, combine4,
    combine5, combine6,
};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

pub use crate::rules::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{
    And, And3, And4, And5, And6, BoxedRule, Each, Field, FlatMap, FromFn, Identity, Map,
    WithMessage, Zip, and, and3, and4, and5, and6, each, field, from_fn, identity, with_message,
};
