//! String rules
//!
//! Two mutually exclusive policies exist for a value that should start with
//! a capital letter: [`initial_cap`] rejects it, [`capitalize`] repairs it.
//! A validator picks one of them; neither is applied implicitly.

use crate::foundation::Outcome;

// ============================================================================
// NOT EMPTY
// ============================================================================

crate::rule! {
    /// Passes non-empty strings through as owned `String`s.
    pub NotEmpty for str => String;
    check(input) { !input.is_empty() }
    output(input) { input.to_owned() }
    message { "Empty string" }
    fn not_empty();
}

// ============================================================================
// INITIAL CAPITAL
// ============================================================================

crate::rule! {
    /// Rejects strings whose first character is not uppercase.
    ///
    /// The empty string has no initial capital and fails too.
    pub InitialCap for str => String;
    check(input) { input.chars().next().is_some_and(char::is_uppercase) }
    output(input) { input.to_owned() }
    message { "No initial cap" }
    fn initial_cap();
}

// ============================================================================
// CAPITALIZE
// ============================================================================

crate::rule! {
    /// Uppercases the first character; never fails.
    ///
    /// Only the first character changes: `"acacia road"` becomes
    /// `"Acacia road"`. Characters whose uppercase form is longer than one
    /// char (e.g. `'ß'`) expand.
    pub Capitalize for str => String;
    convert(input) { Outcome::success(capitalize_first(input)) }
    fn capitalize();
}

fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
