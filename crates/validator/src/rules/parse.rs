//! Parsing rules
//!
//! `str::parse` reports failure through `Result`; these rules convert that
//! into a [`Failure`](crate::foundation::Outcome::Failure) at the boundary so
//! nothing escapes a rule invocation.

use crate::foundation::Outcome;

crate::rule! {
    /// Parses a decimal `i64`, failing with `"Not a number"`.
    ///
    /// The input is not trimmed; surrounding whitespace is not a number.
    pub ParseInt for str => i64;
    convert(input) {
        match input.parse::<i64>() {
            Ok(number) => Outcome::success(number),
            Err(error) => {
                tracing::trace!(input, %error, "integer parse failed");
                Outcome::failure("Not a number")
            }
        }
    }
    fn parse_int();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use rstest::rstest;

    #[rstest]
    #[case("29", 29)]
    #[case("-4", -4)]
    #[case("+7", 7)]
    #[case("0", 0)]
    #[case("9223372036854775807", i64::MAX)]
    fn test_parse_int_accepts(#[case] input: &str, #[case] expected: i64) {
        assert_eq!(parse_int().apply(input), Outcome::success(expected));
    }

    #[rstest]
    #[case("1a")]
    #[case("")]
    #[case(" 29")]
    #[case("2.5")]
    #[case("9223372036854775808")]
    fn test_parse_int_rejects(#[case] input: &str) {
        assert_eq!(parse_int().apply(input), Outcome::failure("Not a number"));
    }
}
