//! N-ARY AND combinators - parallel composition of three to six rules
//!
//! Record validators combine one rule per field and hand the field values to
//! the record's constructor. `and3` ... `and6` apply every rule to the same
//! input and combine the outcomes with
//! [`combine3`](crate::foundation::combine3) ... `combine6`, which nest
//! binary `ap`. Failures accumulate in argument order.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let postal = and3(
//!     lookup("number").flat_map(parse_int()),
//!     lookup("street").flat_map(not_empty()),
//!     lookup("zip"),
//!     PostalAddress::new,
//! );
//! ```

use crate::foundation::{Outcome, Rule, combine3, combine4, combine5, combine6};

macro_rules! and_n {
    (
        $(#[$meta:meta])*
        $name:ident, $factory:ident, $combine:ident;
        $first:ident: $First:ident $(, $rest:ident: $Rest:ident)+
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<$First, $($Rest,)+ F> {
            $first: $First,
            $($rest: $Rest,)+
            combine: F,
        }

        impl<$First, $($Rest,)+ F> $name<$First, $($Rest,)+ F> {
            /// Creates the combinator; `combine` receives the success values
            /// in rule order.
            pub fn new($first: $First, $($rest: $Rest,)+ combine: F) -> Self {
                Self { $first, $($rest,)+ combine }
            }
        }

        impl<I, $First, $($Rest,)+ F, Out> Rule for $name<$First, $($Rest,)+ F>
        where
            I: ?Sized,
            $First: Rule<Input = I>,
            $($Rest: Rule<Input = I>,)+
            F: Fn($First::Output, $($Rest::Output),+) -> Out,
        {
            type Input = I;
            type Output = Out;

            fn apply(&self, input: &I) -> Outcome<Out> {
                $combine(
                    self.$first.apply(input),
                    $(self.$rest.apply(input),)+
                    &self.combine,
                )
            }
        }

        $(#[$meta])*
        pub fn $factory<I, $First, $($Rest,)+ F, Out>(
            $first: $First,
            $($rest: $Rest,)+
            combine: F,
        ) -> $name<$First, $($Rest,)+ F>
        where
            I: ?Sized,
            $First: Rule<Input = I>,
            $($Rest: Rule<Input = I>,)+
            F: Fn($First::Output, $($Rest::Output),+) -> Out,
        {
            $name::new($first, $($rest,)+ combine)
        }
    };
}

and_n! {
    /// Applies three rules to the same input and accumulates their failures.
    And3, and3, combine3;
    a: A, b: B, c: C
}

and_n! {
    /// Applies four rules to the same input and accumulates their failures.
    And4, and4, combine4;
    a: A, b: B, c: C, d: D
}

and_n! {
    /// Applies five rules to the same input and accumulates their failures.
    And5, and5, combine5;
    a: A, b: B, c: C, d: D, e: E
}

and_n! {
    /// Applies six rules to the same input and accumulates their failures.
    And6, and6, combine6;
    a: A, b: B, c: C, d: D, e: E, g: G
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::from_fn;

    fn pass(value: u8) -> impl Rule<Input = str, Output = u8> {
        from_fn(move |_: &str| Outcome::success(value))
    }

    fn fail(message: &'static str) -> impl Rule<Input = str, Output = u8> {
        from_fn(move |_: &str| Outcome::failure(message))
    }

    #[test]
    fn test_and3_success() {
        let rule = and3(pass(1), pass(2), pass(3), |a, b, c| [a, b, c]);
        assert_eq!(rule.apply("x"), Outcome::success([1, 2, 3]));
    }

    #[test]
    fn test_and4_accumulates_in_order() {
        let rule = and4(fail("a"), pass(2), fail("c"), fail("d"), |a, b, c, d| {
            a + b + c + d
        });
        assert_eq!(rule.apply("x"), Outcome::failures(["a", "c", "d"]));
    }

    #[test]
    fn test_and5_single_failure() {
        let rule = and5(pass(1), pass(2), pass(3), pass(4), fail("e"), |a, b, c, d, e| {
            a + b + c + d + e
        });
        assert_eq!(rule.apply("x"), Outcome::failure("e"));
    }

    #[test]
    fn test_and6_all_fail() {
        let rule = and6(
            fail("1"),
            fail("2"),
            fail("3"),
            fail("4"),
            fail("5"),
            fail("6"),
            |a, b, c, d, e, g| a + b + c + d + e + g,
        );
        assert_eq!(
            rule.apply("x"),
            Outcome::failures(["1", "2", "3", "4", "5", "6"])
        );
    }
}
