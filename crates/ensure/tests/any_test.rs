//! Alternative validation with pass-through error reporting.

use ensure::foundation::DEFAULT_ANY_ERROR;
use ensure::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, Default)]
struct Feature {
    enabled: bool,
    name: String,
}

fn disabled() -> RecordValidator<Feature> {
    record::<Feature>().field("enabled", |f| &f.enabled, boolean().is_false())
}

fn well_named() -> RecordValidator<Feature> {
    record::<Feature>().field(
        "name",
        |f| &f.name,
        string().is_not_empty().matches(patterns::ALPHA),
    )
}

fn feature() -> AnyOf<Feature> {
    any_of(disabled())
        .or(well_named())
        .pass_through_errors_from([1])
}

#[test]
fn disabled_record_skips_deep_checks() {
    let input = Feature {
        enabled: false,
        name: String::new(),
    };
    assert!(feature().validate(&input).is_ok());
}

#[test]
fn pass_through_member_explains_failure() {
    let input = Feature {
        enabled: true,
        name: "Bob 5".into(),
    };

    let err = feature().validate(&input).unwrap_err();
    assert_eq!(err.to_string(), "name: string does not match expected pattern");
}

#[test]
fn pass_through_in_collect_mode_skips_other_members() {
    let input = Feature {
        enabled: true,
        name: String::new(),
    };

    let err = feature()
        .validate_with(&input, &ValidationOptions::collect_all())
        .unwrap_err();
    let errors = err.into_aggregate();
    assert_eq!(
        errors
            .validation_errors()
            .iter()
            .map(|e| e.message())
            .collect::<Vec<_>>(),
        vec![
            "name: must not be empty",
            "name: string does not match expected pattern",
        ]
    );
}

#[test]
fn without_pass_through_the_default_message_is_used() {
    let input = Feature {
        enabled: true,
        name: "Bob 5".into(),
    };

    let v = any_of(disabled()).or(well_named());
    assert_eq!(v.validate(&input).unwrap_err().to_string(), DEFAULT_ANY_ERROR);

    let v = v.with_options(AnyOptions::new().with_default_error("feature is misconfigured"));
    assert_eq!(
        v.validate(&input).unwrap_err().to_string(),
        "feature is misconfigured"
    );
}

#[test]
fn type_tag_comes_from_first_member() {
    assert_eq!(feature().type_name(), disabled().type_name());
    assert_eq!(feature().len(), 2);
}

#[test]
#[should_panic(expected = "AnyOf member 1 validates")]
fn members_must_share_a_type_tag() {
    struct Renamed(StringValidator);

    impl Validate for Renamed {
        type Input = str;

        fn type_name(&self) -> &'static str {
            "renamed"
        }

        fn validate_with(&self, input: &str, options: &ValidationOptions) -> Result {
            self.0.validate_with(input, options)
        }

        fn validate_untyped(
            &self,
            value: &dyn std::any::Any,
            options: &ValidationOptions,
        ) -> Result {
            self.0.validate_untyped(value, options)
        }
    }

    let _ = any_of(string()).or(Renamed(string()));
}
