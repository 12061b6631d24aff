//! The outcome of a check
//!
//! [`Outcome`] is the value domain the whole crate is built over: every rule
//! produces one, every combinator consumes and produces them. It is a closed
//! two-variant enum and every operation matches both variants exhaustively.
//!
//! Two families of composition exist:
//!
//! - **Sequential** ([`Outcome::flat_map`]): the next step sees the previous
//!   value; the first failure wins and later steps never run.
//! - **Parallel** ([`Outcome::and`], [`Outcome::ap`], [`combine3`] ...
//!   [`combine6`]): both sides are already computed; failures from every side
//!   are concatenated left to right.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verdict_validator::foundation::Outcome;
//!
//! let number = Outcome::<i64>::failure("Too small");
//! let street = Outcome::<String>::failure("Empty string");
//!
//! let address = number.and(street, |n, s| (n, s));
//! assert_eq!(address, Outcome::failures(["Too small", "Empty string"]));
//! ```

use std::fmt;

use serde::Serialize;

use crate::foundation::error::Rejected;
use crate::foundation::messages::{Message, Messages};

// ============================================================================
// OUTCOME
// ============================================================================

/// Success with a value, or failure with ordered messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[must_use = "an outcome may be a failure that should be handled"]
pub enum Outcome<A> {
    /// The checked (and possibly converted) value.
    Success(A),
    /// One or more messages explaining why the check failed.
    Failure(Messages),
}

impl<A> Outcome<A> {
    // ------------------------------------------------------------------------
    // Constructors
    // ------------------------------------------------------------------------

    /// Wraps a value as a success.
    pub fn success(value: A) -> Self {
        Self::Success(value)
    }

    /// A failure with a single message.
    pub fn failure(message: impl Into<Message>) -> Self {
        Self::Failure(Messages::one(message))
    }

    /// A failure with several messages, kept in iteration order.
    pub fn failures<M, I>(messages: I) -> Self
    where
        M: Into<Message>,
        I: IntoIterator<Item = M>,
    {
        Self::Failure(messages.into_iter().collect())
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    /// Returns `true` for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the success value.
    pub fn success_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure messages.
    pub fn messages(&self) -> Option<&Messages> {
        match self {
            Self::Success(_) => None,
            Self::Failure(messages) => Some(messages),
        }
    }

    /// Converts `&Outcome<A>` into `Outcome<&A>`.
    pub fn as_ref(&self) -> Outcome<&A> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(messages) => Outcome::Failure(messages.clone()),
        }
    }

    // ------------------------------------------------------------------------
    // Sequential composition
    // ------------------------------------------------------------------------

    /// Transforms the success value; failures pass through unchanged.
    ///
    /// `f` is infallible. A conversion that can fail belongs in
    /// [`flat_map`](Self::flat_map).
    pub fn map<B, F>(self, f: F) -> Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(messages) => Outcome::Failure(messages),
        }
    }

    /// Feeds the success value into the next fallible step.
    ///
    /// On failure `f` is never called and the messages are returned as-is.
    pub fn flat_map<B, F>(self, f: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(messages) => Outcome::Failure(messages),
        }
    }

    /// Alias for [`flat_map`](Self::flat_map) in `Option`/`Result` vocabulary.
    pub fn and_then<B, F>(self, f: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B>,
    {
        self.flat_map(f)
    }

    /// Keeps the success only when `predicate` holds.
    pub fn ensure<P>(self, predicate: P, message: impl Into<Message>) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::failure(message)
                }
            }
            Self::Failure(messages) => Self::Failure(messages),
        }
    }

    // ------------------------------------------------------------------------
    // Parallel composition
    // ------------------------------------------------------------------------

    /// Applies a function carried by another outcome to this one's value.
    ///
    /// | `f`            | `self`         | result                    |
    /// |----------------|----------------|---------------------------|
    /// | `Success(g)`   | `Success(a)`   | `Success(g(a))`           |
    /// | `Failure(mf)`  | `Success(_)`   | `Failure(mf)`             |
    /// | `Success(_)`   | `Failure(ma)`  | `Failure(ma)`             |
    /// | `Failure(mf)`  | `Failure(ma)`  | `Failure(mf ++ ma)`       |
    ///
    /// Chaining `ap` left to right over N outcomes accumulates every
    /// failure in call order, which is what [`combine3`] and friends do.
    pub fn ap<B, F>(self, f: Outcome<F>) -> Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        match (f, self) {
            (Outcome::Success(g), Self::Success(value)) => Outcome::Success(g(value)),
            (Outcome::Failure(messages), Self::Success(_)) => Outcome::Failure(messages),
            (Outcome::Success(_), Self::Failure(messages)) => Outcome::Failure(messages),
            (Outcome::Failure(left), Self::Failure(right)) => Outcome::Failure(left.concat(right)),
        }
    }

    /// Combines two independent outcomes, accumulating failures from both.
    ///
    /// Derived from [`ap`](Self::ap): `a.and(b, f) == b.ap(a.map(curry(f)))`,
    /// so `self`'s messages always come before `other`'s.
    pub fn and<B, C, F>(self, other: Outcome<B>, combine: F) -> Outcome<C>
    where
        F: FnOnce(A, B) -> C,
    {
        other.ap(self.map(move |a| move |b| combine(a, b)))
    }

    /// Pairs two outcomes, accumulating failures from both.
    pub fn zip<B>(self, other: Outcome<B>) -> Outcome<(A, B)> {
        self.and(other, |a, b| (a, b))
    }

    // ------------------------------------------------------------------------
    // Failure handling
    // ------------------------------------------------------------------------

    /// Transforms the failure messages; successes pass through.
    pub fn map_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(Messages) -> Messages,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(messages) => Self::Failure(f(messages)),
        }
    }

    /// Replaces all failure messages by a single one.
    pub fn with_message(self, message: impl Into<Message>) -> Self {
        let message = message.into();
        self.map_failure(|_| Messages::one(message))
    }

    // ------------------------------------------------------------------------
    // Conversion
    // ------------------------------------------------------------------------

    /// Converts into a `Result`, turning messages into a [`Rejected`] error.
    pub fn into_result(self) -> Result<A, Rejected> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(messages) => Err(Rejected::new(messages)),
        }
    }

    /// Returns the success value, discarding messages.
    pub fn ok(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the success value or `default`.
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }
}

impl<A: fmt::Display> fmt::Display for Outcome<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(messages) => write!(f, "Failure({messages})"),
        }
    }
}

impl<A, E: fmt::Display> From<Result<A, E>> for Outcome<A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error.to_string()),
        }
    }
}

/// Collects outcomes into one, keeping every failure in element order.
///
/// Unlike collecting into `Result<Vec<_>, _>`, iteration does not stop at the
/// first failure.
impl<A> FromIterator<Outcome<A>> for Outcome<Vec<A>> {
    fn from_iter<I: IntoIterator<Item = Outcome<A>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut messages = Messages::new();
        let mut failed = false;

        for outcome in iter {
            match outcome {
                Outcome::Success(value) => values.push(value),
                Outcome::Failure(more) => {
                    failed = true;
                    messages.append(more);
                }
            }
        }

        if failed {
            Outcome::Failure(messages)
        } else {
            Outcome::Success(values)
        }
    }
}

// ============================================================================
// N-ARY COMBINATION
// ============================================================================
//
// Fixed family built by nesting `ap` against a curried combining function.
// Messages accumulate in argument order. Arity stops at six; wider records
// combine two groups with `zip`.

/// Combines three outcomes in parallel.
pub fn combine3<A, B, C, R, F>(a: Outcome<A>, b: Outcome<B>, c: Outcome<C>, f: F) -> Outcome<R>
where
    F: FnOnce(A, B, C) -> R,
{
    let curried = a.map(move |a| move |b| move |c| f(a, b, c));
    c.ap(b.ap(curried))
}

/// Combines four outcomes in parallel.
pub fn combine4<A, B, C, D, R, F>(
    a: Outcome<A>,
    b: Outcome<B>,
    c: Outcome<C>,
    d: Outcome<D>,
    f: F,
) -> Outcome<R>
where
    F: FnOnce(A, B, C, D) -> R,
{
    let curried = a.map(move |a| move |b| move |c| move |d| f(a, b, c, d));
    d.ap(c.ap(b.ap(curried)))
}

/// Combines five outcomes in parallel.
pub fn combine5<A, B, C, D, E, R, F>(
    a: Outcome<A>,
    b: Outcome<B>,
    c: Outcome<C>,
    d: Outcome<D>,
    e: Outcome<E>,
    f: F,
) -> Outcome<R>
where
    F: FnOnce(A, B, C, D, E) -> R,
{
    let curried = a.map(move |a| move |b| move |c| move |d| move |e| f(a, b, c, d, e));
    e.ap(d.ap(c.ap(b.ap(curried))))
}

/// Combines six outcomes in parallel.
#[allow(clippy::many_single_char_names)]
pub fn combine6<A, B, C, D, E, G, R, F>(
    a: Outcome<A>,
    b: Outcome<B>,
    c: Outcome<C>,
    d: Outcome<D>,
    e: Outcome<E>,
    g: Outcome<G>,
    f: F,
) -> Outcome<R>
where
    F: FnOnce(A, B, C, D, E, G) -> R,
{
    let curried =
        a.map(move |a| move |b| move |c| move |d| move |e| move |g| f(a, b, c, d, e, g));
    g.ap(e.ap(d.ap(c.ap(b.ap(curried)))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ok(n: i32) -> Outcome<i32> {
        Outcome::success(n)
    }

    fn bad(message: &'static str) -> Outcome<i32> {
        Outcome::failure(message)
    }

    #[test]
    fn map_leaves_failure_untouched() {
        assert_eq!(ok(2).map(|n| n * 10), ok(20));
        assert_eq!(bad("x").map(|n| n * 10), bad("x"));
    }

    #[test]
    fn flat_map_does_not_run_after_failure() {
        let result = bad("first").flat_map(|_| -> Outcome<i32> { panic!("must not run") });
        assert_eq!(result, bad("first"));
    }

    #[test]
    fn and_four_cases() {
        let add = |a: i32, b: i32| a + b;
        assert_eq!(ok(1).and(ok(2), add), ok(3));
        assert_eq!(bad("a").and(ok(2), add), bad("a"));
        assert_eq!(ok(1).and(bad("b"), add), bad("b"));
        assert_eq!(bad("a").and(bad("b"), add), Outcome::failures(["a", "b"]));
    }

    #[test]
    fn ap_puts_function_messages_first() {
        let f: Outcome<fn(i32) -> i32> = Outcome::failure("fn");
        assert_eq!(bad("value").ap(f), Outcome::failures(["fn", "value"]));
    }

    #[test]
    fn and_matches_its_ap_derivation() {
        let cases = [ok(1), bad("a")];
        for a in &cases {
            for b in &cases {
                let direct = a.clone().and(b.clone(), |x, y| x * 100 + y);
                let derived = b.clone().ap(a.clone().map(|x| move |y| x * 100 + y));
                assert_eq!(direct, derived);
            }
        }
    }

    #[test]
    fn combine_accumulates_all_in_argument_order() {
        let result = combine6(
            bad("1"),
            bad("2"),
            ok(3),
            bad("4"),
            bad("5"),
            bad("6"),
            |a, b, c, d, e, g| a + b + c + d + e + g,
        );
        assert_eq!(result, Outcome::failures(["1", "2", "4", "5", "6"]));
    }

    #[test]
    fn combine3_success_keeps_argument_positions() {
        let result = combine3(ok(1), ok(2), ok(3), |a, b, c| (a, b, c));
        assert_eq!(result, Outcome::success((1, 2, 3)));
    }

    #[test]
    fn ensure_turns_success_into_failure() {
        assert_eq!(ok(5).ensure(|n| *n > 3, "small"), ok(5));
        assert_eq!(ok(1).ensure(|n| *n > 3, "small"), bad("small"));
        assert_eq!(bad("earlier").ensure(|_| false, "small"), bad("earlier"));
    }

    #[test]
    fn collect_keeps_every_failure() {
        let collected: Outcome<Vec<i32>> =
            vec![ok(1), bad("a"), ok(2), bad("b")].into_iter().collect();
        assert_eq!(collected, Outcome::failures(["a", "b"]));

        let collected: Outcome<Vec<i32>> = vec![ok(1), ok(2)].into_iter().collect();
        assert_eq!(collected, Outcome::success(vec![1, 2]));
    }

    #[test]
    fn from_result_uses_error_display() {
        let parsed: Outcome<i32> = "12x".parse::<i32>().into();
        assert!(parsed.is_failure());
        let parsed: Outcome<i32> = "12".parse::<i32>().into();
        assert_eq!(parsed, ok(12));
    }

    #[test]
    fn serializes_externally_tagged() {
        let json = serde_json::to_string(&ok(29)).unwrap();
        assert_eq!(json, r#"{"success":29}"#);
        let failed = Outcome::<i32>::failures(["Too small", "Empty string"]);
        let json = serde_json::to_string(&failed).unwrap();
        assert_eq!(json, r#"{"failure":["Too small","Empty string"]}"#);
    }

    #[test]
    fn display_shows_variant_and_contents() {
        assert_eq!(ok(29).to_string(), "Success(29)");
        let failed = Outcome::<i32>::failures(["Too small", "Empty string"]);
        assert_eq!(failed.to_string(), "Failure(Too small; Empty string)");
    }

    #[test]
    fn success_ref_borrows_only_success() {
        assert_eq!(ok(3).success_ref(), Some(&3));
        assert_eq!(bad("x").success_ref(), None);
    }

    #[test]
    fn as_ref_keeps_messages() {
        let value = ok(3);
        assert_eq!(value.as_ref(), Outcome::success(&3));
        let failed = Outcome::<i32>::failures(["a", "b"]);
        assert_eq!(failed.as_ref(), Outcome::<&i32>::failures(["a", "b"]));
    }

    #[test]
    fn and_then_matches_flat_map() {
        let halve = |n: i32| if n % 2 == 0 { ok(n / 2) } else { bad("odd") };
        assert_eq!(ok(8).and_then(halve), ok(8).flat_map(halve));
        assert_eq!(ok(3).and_then(halve), bad("odd"));
        assert_eq!(bad("first").and_then(halve), bad("first"));
    }

    #[test]
    fn ok_and_unwrap_or_discard_messages() {
        assert_eq!(ok(5).ok(), Some(5));
        assert_eq!(bad("x").ok(), None);
        assert_eq!(ok(5).unwrap_or(0), 5);
        assert_eq!(bad("x").unwrap_or(0), 0);
    }

    #[test]
    fn into_result_reports_messages() {
        let error = Outcome::<i32>::failures(["a", "b"]).into_result().unwrap_err();
        assert_eq!(error.messages(), &Messages::from(["a", "b"]));
        assert_eq!(ok(1).into_result().unwrap(), 1);
    }
}
