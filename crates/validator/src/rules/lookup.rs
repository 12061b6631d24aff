//! Key lookup in string maps
//!
//! Form input arrives as a map of raw strings. [`lookup`] is the structural
//! first step of reading it: the key must be present, nothing more.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::foundation::Outcome;

/// Raw form input: field names mapped to unparsed values.
pub type FormData = BTreeMap<String, String>;

crate::rule! {
    /// Reads the value stored under `key`, failing with `"Field not found"`.
    ///
    /// Present but empty values succeed; emptiness is a semantic check left
    /// to later rules.
    pub Lookup { key: Cow<'static, str> } for FormData => String;
    convert(self, input) {
        match input.get(&*self.key) {
            Some(value) => Outcome::success(value.clone()),
            None => {
                tracing::trace!(key = %self.key, "field not found");
                Outcome::failure("Field not found")
            }
        }
    }
    new(key: impl Into<Cow<'static, str>>) { Self { key: key.into() } }
    fn lookup(key: impl Into<Cow<'static, str>>);
}
