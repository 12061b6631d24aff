//! Integration tests for the prelude module.
//!
//! Verifies that `use verdict_validator::prelude::*` brings in everything
//! needed to build record and form validators end to end.

use pretty_assertions::assert_eq;
use verdict_validator::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Address {
    number: i64,
    street: String,
}

impl Address {
    fn new(number: i64, street: String) -> Self {
        Self { number, street }
    }
}

fn form(pairs: &[(&str, &str)]) -> FormData {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn address_rule() -> impl Rule<Input = Address, Output = Address> {
    let number = identity::<Address>().map(|a| a.number).flat_map(min(1_i64));
    let street = field(|a: &Address| a.street.clone())
        .flat_map(not_empty())
        .flat_map(capitalize());
    number.and(street, Address::new)
}

fn read_address() -> impl Rule<Input = FormData, Output = Address> {
    lookup("number")
        .flat_map(parse_int())
        .and(lookup("street"), Address::new)
}

// ============================================================================
// RECORD VALIDATION
// ============================================================================

#[test]
fn valid_record_passes_unchanged() {
    let input = Address::new(29, "Acacia Road".into());
    assert_eq!(address_rule().apply(&input), Outcome::success(input.clone()));
}

#[test]
fn invalid_record_reports_every_field_in_order() {
    let input = Address::new(0, String::new());
    assert_eq!(
        address_rule().apply(&input),
        Outcome::failures(["Too small", "Empty string"])
    );
}

// ============================================================================
// FORM READING
// ============================================================================

#[test]
fn missing_key_is_field_not_found() {
    let outcome = read_address().apply(&form(&[("street", "acacia Road")]));
    assert_eq!(outcome, Outcome::failure("Field not found"));
}

#[test]
fn non_numeric_value_is_not_a_number() {
    let outcome = read_address().apply(&form(&[("number", "1a"), ("street", "acacia road")]));
    assert_eq!(outcome, Outcome::failure("Not a number"));
}

#[test]
fn read_then_validate_capitalizes() {
    let rule = read_address().flat_map(address_rule());
    let outcome = rule.apply(&form(&[("number", "29"), ("street", "acacia road")]));
    assert_eq!(outcome, Outcome::success(Address::new(29, "Acacia road".into())));
}

#[test]
fn structural_failure_skips_semantic_pass() {
    let rule = read_address().flat_map(address_rule());
    let outcome = rule.apply(&form(&[("number", "x")]));
    assert_eq!(outcome, Outcome::failures(["Not a number", "Field not found"]));
}

#[test]
fn semantic_failure_after_successful_read() {
    let rule = read_address().flat_map(address_rule());
    let outcome = rule.apply(&form(&[("number", "0"), ("street", "")]));
    assert_eq!(outcome, Outcome::failures(["Too small", "Empty string"]));
}

// ============================================================================
// BOXING AND N-ARY COMBINATION VIA PRELUDE
// ============================================================================

#[test]
fn boxed_rules_compose() {
    let number: BoxedRule<FormData, i64> = lookup("number").flat_map(parse_int()).boxed();
    let rule = and3(
        number.clone(),
        number.clone().map(|n| n * 2),
        lookup("street").flat_map(initial_cap()),
        |a, b, s| (a, b, s),
    );
    let outcome = rule.apply(&form(&[("number", "3"), ("street", "lower")]));
    assert_eq!(outcome, Outcome::failure("No initial cap"));

    let outcome = rule.apply(&form(&[("number", "3"), ("street", "Upper")]));
    assert_eq!(outcome, Outcome::success((3, 6, "Upper".to_string())));
}

#[test]
fn each_reads_a_list_of_numbers() {
    let inputs = vec!["1".to_string(), "x".to_string(), "3".to_string(), "y".to_string()];
    let outcome = each::<_, String>(parse_int()).apply(&inputs);
    assert_eq!(outcome, Outcome::failures(["Not a number", "Not a number"]));
}

#[test]
fn check_leaves_the_outcome_world() {
    let error = check(&parse_int(), "nope").unwrap_err();
    assert_eq!(error.to_string(), "validation failed: Not a number");
}
