//! Built-in primitive rules
//!
//! | Factory | Input → Output | Failure |
//! |---|---|---|
//! | [`not_empty`] | `str` → `String` | `"Empty string"` |
//! | [`initial_cap`] | `str` → `String` | `"No initial cap"` |
//! | [`capitalize`] | `str` → `String` | never fails |
//! | [`min`] | `T` → `T` | `"Too small"` |
//! | [`parse_int`] | `str` → `i64` | `"Not a number"` |
//! | [`lookup`] | [`FormData`] → `String` | `"Field not found"` |

pub mod lookup;
pub mod numeric;
pub mod parse;
pub mod string;

pub use lookup::{FormData, Lookup, lookup};
pub use numeric::{Min, min};
pub use parse::{ParseInt, parse_int};
pub use string::{Capitalize, InitialCap, NotEmpty, capitalize, initial_cap, not_empty};
