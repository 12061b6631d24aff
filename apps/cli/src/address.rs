//! Address records and the rules that validate them.
//!
//! Every record is checked in two phases:
//!
//! | Phase      | Rule                                   | Input               |
//! |------------|----------------------------------------|---------------------|
//! | Structural | [`read_address`], [`read_postal_address`] | [`FormData`]     |
//! | Semantic   | [`address_rule`], [`postal_address_rule`] | the typed record |
//!
//! The structural phase only finds and parses fields; the semantic phase
//! runs every field check in parallel so all problems are reported together.

use std::fmt;

use serde::{Deserialize, Serialize};
use verdict_validator::prelude::*;

/// Form key of the house number.
pub const NUMBER: &str = "number";
/// Form key of the street name.
pub const STREET: &str = "street";
/// Form key of the postal code.
pub const ZIP: &str = "zip";

// ============================================================================
// RECORDS
// ============================================================================

/// A street address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    pub number: i64,
    pub street: String,
}

impl Address {
    #[must_use]
    pub const fn new(number: i64, street: String) -> Self {
        Self { number, street }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.street)
    }
}

/// A street address with a five-digit postal code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PostalAddress {
    pub number: i64,
    pub street: String,
    pub zip: String,
}

impl PostalAddress {
    #[must_use]
    pub const fn new(number: i64, street: String, zip: String) -> Self {
        Self {
            number,
            street,
            zip,
        }
    }
}

impl fmt::Display for PostalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.number, self.street, self.zip)
    }
}

// ============================================================================
// STREET POLICY
// ============================================================================

/// What to do with a street name that starts with a lowercase letter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StreetPolicy {
    /// Uppercase the first character.
    #[default]
    Capitalize,
    /// Fail with `"No initial cap"`.
    Reject,
}

impl StreetPolicy {
    /// The rule applied to a non-empty street name under this policy.
    #[must_use]
    pub fn rule(self) -> BoxedRule<str, String> {
        match self {
            Self::Capitalize => capitalize().boxed(),
            Self::Reject => initial_cap().boxed(),
        }
    }
}

impl fmt::Display for StreetPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Capitalize => "capitalize",
            Self::Reject => "reject",
        })
    }
}

// ============================================================================
// FIELD RULES
// ============================================================================

verdict_validator::rule! {
    pub ZipCode for str => String;
    check(input) { input.len() == 5 && input.bytes().all(|b| b.is_ascii_digit()) }
    output(input) { input.to_owned() }
    message { "Invalid zip" }
    fn zip_code();
}

/// House numbers start at one.
#[must_use]
pub fn house_number() -> Min<i64> {
    min(1)
}

/// A non-empty street name, then the policy's initial-capital handling.
pub fn street(policy: StreetPolicy) -> impl Rule<Input = str, Output = String> + Clone {
    not_empty().flat_map(policy.rule())
}

// ============================================================================
// RECORD RULES
// ============================================================================

/// Semantic check of an [`Address`]; number and street are checked in parallel.
pub fn address_rule(policy: StreetPolicy) -> impl Rule<Input = Address, Output = Address> + Clone {
    let number = field(|a: &Address| a.number).flat_map(house_number());
    let name = field(|a: &Address| a.street.clone()).flat_map(street(policy));
    number.and(name, Address::new)
}

/// Structural read of an [`Address`] from form fields.
pub fn read_address() -> impl Rule<Input = FormData, Output = Address> + Clone {
    and(
        lookup(NUMBER).flat_map(parse_int()),
        lookup(STREET),
        Address::new,
    )
}

/// Reads an [`Address`] from a form, then checks it.
///
/// Semantic checks only run once the form has been read successfully.
pub fn form_address_rule(
    policy: StreetPolicy,
) -> impl Rule<Input = FormData, Output = Address> + Clone {
    read_address().flat_map(address_rule(policy))
}

/// Semantic check of a [`PostalAddress`].
pub fn postal_address_rule(
    policy: StreetPolicy,
) -> impl Rule<Input = PostalAddress, Output = PostalAddress> + Clone {
    and3(
        field(|p: &PostalAddress| p.number).flat_map(house_number()),
        field(|p: &PostalAddress| p.street.clone()).flat_map(street(policy)),
        field(|p: &PostalAddress| p.zip.clone()).flat_map(zip_code()),
        PostalAddress::new,
    )
}

/// Structural read of a [`PostalAddress`] from form fields.
pub fn read_postal_address() -> impl Rule<Input = FormData, Output = PostalAddress> + Clone {
    and3(
        lookup(NUMBER).flat_map(parse_int()),
        lookup(STREET),
        lookup(ZIP),
        PostalAddress::new,
    )
}

/// Reads a [`PostalAddress`] from a form, then checks it.
pub fn form_postal_address_rule(
    policy: StreetPolicy,
) -> impl Rule<Input = FormData, Output = PostalAddress> + Clone {
    read_postal_address().flat_map(postal_address_rule(policy))
}
