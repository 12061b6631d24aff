//! Ordered failure messages
//!
//! A failed [`Outcome`](crate::foundation::Outcome) carries its messages in
//! the order they were produced. Combining two failures concatenates the
//! left sequence with the right one; nothing is deduplicated or reordered.
//!
//! Messages use `Cow<'static, str>` so the common case (a primitive rule
//! failing with a literal such as `"Too small"`) never allocates a string,
//! and a `SmallVec` so one or two messages never allocate a vector.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// A single human-readable failure message.
pub type Message = Cow<'static, str>;

/// Ordered sequence of failure messages.
///
/// # Examples
///
/// ```rust,ignore
/// use verdict_validator::foundation::Messages;
///
/// let mut messages = Messages::one("Too small");
/// messages.append(Messages::one("Empty string"));
/// assert_eq!(messages.to_string(), "Too small; Empty string");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Messages(SmallVec<[Message; 2]>);

impl Messages {
    /// Creates an empty message list.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Creates a list holding exactly one message.
    pub fn one(message: impl Into<Message>) -> Self {
        let mut inner = SmallVec::new();
        inner.push(message.into());
        Self(inner)
    }

    /// Appends a message at the end.
    pub fn push(&mut self, message: impl Into<Message>) {
        self.0.push(message.into());
    }

    /// Moves every message of `other` to the end of `self`, keeping order.
    pub fn append(&mut self, other: Messages) {
        self.0.extend(other.0);
    }

    /// Returns `self ++ other`.
    #[must_use = "concatenation returns a new list"]
    pub fn concat(mut self, other: Messages) -> Self {
        self.append(other);
        self
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when there are no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages as a slice, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Message] {
        &self.0
    }

    /// Iterates messages as `&str`.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(AsRef::as_ref)
    }

    /// Returns the first message, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(AsRef::as_ref)
    }

    /// Converts into owned strings.
    #[must_use]
    pub fn into_strings(self) -> Vec<String> {
        self.0.into_iter().map(Cow::into_owned).collect()
    }
}

impl fmt::Display for Messages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, message) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

impl<M: Into<Message>> FromIterator<M> for Messages {
    fn from_iter<I: IntoIterator<Item = M>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<M: Into<Message>> Extend<M> for Messages {
    fn extend<I: IntoIterator<Item = M>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Messages {
    type Item = Message;
    type IntoIter = smallvec::IntoIter<[Message; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Messages {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<&'static str> for Messages {
    fn from(message: &'static str) -> Self {
        Self::one(message)
    }
}

impl From<String> for Messages {
    fn from(message: String) -> Self {
        Self::one(message)
    }
}

impl<M: Into<Message>> From<Vec<M>> for Messages {
    fn from(messages: Vec<M>) -> Self {
        messages.into_iter().collect()
    }
}

impl<M: Into<Message>, const N: usize> From<[M; N]> for Messages {
    fn from(messages: [M; N]) -> Self {
        messages.into_iter().collect()
    }
}

impl PartialEq<[&str]> for Messages {
    fn eq(&self, other: &[&str]) -> bool {
        self.0.len() == other.len() && self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for Messages {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}
