//! Record validation across nested kinds.

use std::collections::HashMap;

use ensure::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Clone, Default)]
struct Address {
    street: String,
    zip: String,
}

#[derive(Debug, Clone, Default)]
struct Customer {
    name: String,
    email: Option<String>,
    age: u16,
    active: bool,
    addresses: Vec<Address>,
    scores: HashMap<String, f64>,
}

impl Customer {
    fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email.as_deref().unwrap_or("-"))
    }

    fn score_total(self) -> f64 {
        self.scores.values().sum()
    }
}

fn address() -> RecordValidator<Address> {
    record::<Address>()
        .field("street", |a| &a.street, string().is_not_empty())
        .field("zip", |a| &a.zip, string().has_length(5).matches(patterns::NUMBERS))
        .alias("zip", "ZIP code")
}

fn customer() -> RecordValidator<Customer> {
    record::<Customer>()
        .field("name", |c| &c.name, string().is_longer_than(1).matches(patterns::ALPHA))
        .field("email", |c| &c.email, optional(string().matches(patterns::EMAIL)))
        .field("age", |c| &c.age, number::<u16>().is_in_range(18, 150))
        .field("active", |c| &c.active, boolean().is_true())
        .field("addresses", |c| &c.addresses, array::<Address>().is_not_empty().each(address()))
        .field(
            "scores",
            |c| &c.scores,
            map::<String, f64>()
                .each_key(string().is_not_empty())
                .each_value(number::<f64>().is_greater_than_or_equal_to(0.0)),
        )
        .getter("display_name", Customer::display_name, string().is_shorter_than(64))
        .getter_by_value("score_total", Customer::score_total, number::<f64>().is_less_than(100.0))
}

fn valid_customer() -> Customer {
    Customer {
        name: "Ada".into(),
        email: Some("ada@example.com".into()),
        age: 36,
        active: true,
        addresses: vec![Address {
            street: "1 Main St".into(),
            zip: "12345".into(),
        }],
        scores: HashMap::from([("math".into(), 42.0)]),
    }
}

#[test]
fn valid_record_passes_in_both_modes() {
    let v = customer();
    let input = valid_customer();

    assert!(v.validate(&input).is_ok());
    assert!(v.validate_with(&input, &ValidationOptions::collect_all()).is_ok());
}

#[test]
fn each_failing_field_yields_one_error() {
    let input = Customer {
        name: "Ada".into(),
        email: None,
        age: 12,
        active: false,
        addresses: vec![],
        scores: HashMap::new(),
    };

    let err = customer()
        .validate_with(&input, &ValidationOptions::collect_all())
        .unwrap_err();
    let messages: Vec<String> = err
        .into_aggregate()
        .validation_errors()
        .iter()
        .map(|e| e.message().to_string())
        .collect();

    assert_eq!(
        messages,
        vec![
            "age: number must be in the range [18, 150); got 12",
            "active: expected true but got false",
            "addresses: must not be empty",
        ]
    );
}

#[test]
fn nested_errors_are_flattened_and_prefixed() {
    let mut input = valid_customer();
    input.addresses = vec![
        Address {
            street: String::new(),
            zip: "1234".into(),
        },
        Address {
            street: "2 Side St".into(),
            zip: "abcde".into(),
        },
    ];

    let err = customer()
        .validate_with(&input, &ValidationOptions::collect_all())
        .unwrap_err();
    let errors = err.as_aggregate().expect("collect mode aggregates");

    assert!(!errors.has_type_errors());
    assert_eq!(
        errors
            .validation_errors()
            .iter()
            .map(|e| e.message())
            .collect::<Vec<_>>(),
        vec![
            "addresses: street: must not be empty",
            "addresses: ZIP code: length must equal 5; got 4",
            "addresses: ZIP code: string does not match expected pattern",
        ]
    );
}

#[test]
fn fail_fast_stops_at_first_binding() {
    let mut input = valid_customer();
    input.name = "A".into();
    input.age = 2;

    let err = customer().validate(&input).unwrap_err();
    assert_eq!(err.to_string(), "name: must have a length greater than 1; got 1");
    assert!(err.as_aggregate().is_none());
}

#[rstest]
#[case::bad_email(|c: &mut Customer| c.email = Some("nope".into()), "email: string does not match expected pattern")]
#[case::negative_score(|c: &mut Customer| { c.scores.insert("x".into(), -1.0); }, "scores: number must be greater than or equal to 0; got -1")]
#[case::empty_score_key(|c: &mut Customer| { c.scores.insert(String::new(), 1.0); }, "scores: must not be empty")]
#[case::long_display(|c: &mut Customer| c.email = Some(format!("{}@example.com", "a".repeat(60))), "display_name: must have a length less than 64; got 78")]
#[case::score_total(|c: &mut Customer| { c.scores.insert("y".into(), 60.0); }, "score_total: number must be less than 100; got 102")]
fn single_violation_reports_binding(#[case] mutate: fn(&mut Customer), #[case] expected: &str) {
    let mut input = valid_customer();
    mutate(&mut input);

    assert_eq!(customer().validate(&input).unwrap_err().to_string(), expected);
}

#[test]
fn untyped_record_checks_type_first() {
    let v = customer();
    let opts = ValidationOptions::new();

    assert!(v.validate_untyped(&valid_customer(), &opts).is_ok());
    let err = v.validate_untyped(&Address::default(), &opts).unwrap_err();
    assert!(err.is_type_error());
}
