//! # verdict-cli
//!
//! Address and form validators assembled from `verdict-validator` rules,
//! plus the plumbing behind the `verdict` binary.
//!
//! - [`address`]: the `Address` / `PostalAddress` records and their rules
//! - [`form`]: `KEY=VALUE` parsing into [`FormData`](verdict_validator::rules::FormData)
//! - [`config`]: layered settings (defaults, TOML, `VERDICT_*` env, flags)
//! - [`logging`]: `tracing-subscriber` setup
//! - [`cli`]: argument definitions and command execution
//!
//! ```rust,ignore
//! use verdict_cli::address::{Address, StreetPolicy, address_rule};
//! use verdict_validator::prelude::*;
//!
//! let rule = address_rule(StreetPolicy::Capitalize);
//! let checked = rule.apply(&Address::new(29, "acacia road".into()));
//! assert_eq!(checked, Outcome::success(Address::new(29, "Acacia road".into())));
//! ```

pub mod address;
pub mod cli;
pub mod config;
pub mod form;
pub mod logging;
