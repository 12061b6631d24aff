//! Combinators for composing rules
//!
//! Every combinator is a plain struct implementing [`Rule`] again, so
//! composition is closed and introduces no hidden state.
//!
//! | Combinator | Composition | Failures |
//! |---|---|---|
//! | [`Map`] | transform the success value | passed through |
//! | [`FlatMap`] | feed the output into the next rule | first one wins |
//! | [`And`], [`And3`] ... [`And6`] | same input, combine outputs | accumulated left to right |
//! | [`Each`] | every element of a slice | accumulated in element order |
//! | [`WithMessage`] | replace messages | one message |
//!
//! [`Identity`], [`Field`] and [`FromFn`] are the leaves chains start from;
//! [`BoxedRule`] erases a composed type.
//!
//! [`Rule`]: crate::foundation::Rule

pub mod and;
pub mod boxed;
pub mod each;
pub mod field;
pub mod flat_map;
pub mod func;
pub mod identity;
pub mod map;
pub mod message;
pub mod nary;

pub use and::{And, Zip, and};
pub use boxed::BoxedRule;
pub use each::{Each, each};
pub use field::{Field, field};
pub use flat_map::FlatMap;
pub use func::{FromFn, from_fn};
pub use identity::{Identity, identity};
pub use map::Map;
pub use message::{WithMessage, with_message};
pub use nary::{And3, And4, And5, And6, and3, and4, and5, and6};
