//! MESSAGE combinator - custom failure messages

use crate::foundation::{Message, Outcome, Rule};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the failure messages of a rule with a single message.
///
/// Useful when a chain of primitive checks should surface as one
/// user-facing message.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::prelude::*;
///
/// let zip = parse_int().with_message("Invalid zip");
/// assert_eq!(zip.apply("12a45"), Outcome::failure("Invalid zip"));
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<R> {
    inner: R,
    message: Message,
}

impl<R> WithMessage<R> {
    /// Creates a new `WithMessage` combinator.
    pub fn new(inner: R, message: impl Into<Message>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the replacement message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Rule> Rule for WithMessage<R> {
    type Input = R::Input;
    type Output = R::Output;

    fn apply(&self, input: &Self::Input) -> Outcome<Self::Output> {
        self.inner.apply(input).with_message(self.message.clone())
    }
}

/// Creates a `WithMessage` combinator.
pub fn with_message<R: Rule>(rule: R, message: impl Into<Message>) -> WithMessage<R> {
    WithMessage::new(rule, message)
}
