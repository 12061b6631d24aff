//! Bridge from a failed [`Outcome`](crate::foundation::Outcome) to `std::error::Error`.

use crate::foundation::messages::Messages;

/// A failed outcome turned into an error value.
///
/// Lets callers leave the outcome world with `?` at the edge of the
/// program, e.g. into `anyhow::Result`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {messages}")]
pub struct Rejected {
    messages: Messages,
}

impl Rejected {
    /// Wraps failure messages.
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    /// The messages of the failed outcome, in order.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Consumes the error and returns its messages.
    pub fn into_messages(self) -> Messages {
        self.messages
    }
}

impl From<Rejected> for Messages {
    fn from(error: Rejected) -> Self {
        error.messages
    }
}
