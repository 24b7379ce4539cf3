//! Validation operations over the static rule table.
//!
//! Failing a rule is not an error: it is a normal `ValidationResult` with
//! `valid == false`. Errors are reserved for callers breaking the contract.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use thiserror::Error;

use crate::models::{FieldInput, FieldKind, Placeholders, Report, ValidationResult};
use crate::rules::rule;
use crate::utils::messages::{
    EMPTY_FIELD_MESSAGE, PLACEHOLDER_MESSAGE, SURROUNDING_SPACE_MESSAGE,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Unknown field identifier: '{0}'")]
    UnknownField(String),

    #[error("No field was filled in")]
    NoFieldsProvided,
}

/// Validates a single raw value.
///
/// Checks run in order and the first failing one decides the result:
/// blank value, leading or trailing space, value equal to the field's
/// placeholder, and finally the field's own pattern.
pub fn validate_field(kind: FieldKind, raw: &str, placeholder: Option<&str>) -> ValidationResult {
    let result = check(kind, raw, placeholder);
    debug!("Validated {kind}: valid={}", result.valid);
    result
}

fn check(kind: FieldKind, raw: &str, placeholder: Option<&str>) -> ValidationResult {
    if raw.trim().is_empty() {
        return ValidationResult::invalid(EMPTY_FIELD_MESSAGE);
    }

    // Must look at the untrimmed value
    if raw.starts_with(' ') || raw.ends_with(' ') {
        return ValidationResult::invalid(SURROUNDING_SPACE_MESSAGE);
    }

    if placeholder.is_some_and(|placeholder| placeholder == raw) {
        return ValidationResult::invalid(PLACEHOLDER_MESSAGE);
    }

    let rule = rule(kind);
    if rule.matches(raw) {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(rule.error_message())
    }
}

/// Validates a value for a field known only by its external identifier
pub fn validate_identified(
    identifier: &str,
    raw: &str,
    placeholder: Option<&str>,
) -> Result<ValidationResult, ValidationError> {
    let kind: FieldKind = identifier.parse()?;
    Ok(validate_field(kind, raw, placeholder))
}

/// Validates every filled field of `inputs`.
///
/// Values arrive trimmed from `FieldInput`. Unfilled fields are left out of
/// the report entirely. An input with no
/// filled field at all is refused with `NoFieldsProvided`, so that callers
/// can tell "nothing to check" apart from a report.
pub fn validate_all(
    inputs: &FieldInput,
    placeholders: Option<&Placeholders>,
) -> Result<Report, ValidationError> {
    if inputs.is_empty() {
        warn!("Validation requested without any filled field");
        return Err(ValidationError::NoFieldsProvided);
    }

    let per_field: BTreeMap<FieldKind, ValidationResult> = inputs
        .iter()
        .map(|(kind, value)| {
            let placeholder = placeholders.and_then(|placeholders| placeholders.get(kind));
            (kind, validate_field(kind, value, placeholder))
        })
        .collect();

    let report = Report::new(per_field);
    info!(
        "Validated {} field(s): {} valid, {} invalid",
        report.total_count(),
        report.valid_count(),
        report.invalid_count()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    mod validate_field_tests {
        use super::*;

        #[test]
        fn test_blank_values_are_empty() {
            for kind in FieldKind::iter() {
                for value in ["", " ", "   ", "\t"] {
                    assert_eq!(
                        validate_field(kind, value, None),
                        ValidationResult::invalid(EMPTY_FIELD_MESSAGE),
                        "Blank {} '{}' did not report an empty field",
                        kind,
                        value
                    );
                }
            }
        }

        #[test]
        fn test_surrounding_space_wins_over_pattern() {
            for kind in FieldKind::iter() {
                let example = kind.examples()[0];
                let cases = vec![
                    format!(" {example}"),
                    format!("{example} "),
                    format!(" {example} "),
                ];

                for value in cases {
                    assert_eq!(
                        validate_field(kind, &value, None),
                        ValidationResult::invalid(SURROUNDING_SPACE_MESSAGE),
                        "{} '{}' was not rejected for its spaces",
                        kind,
                        value
                    );
                }
            }
        }

        #[test]
        fn test_placeholder_is_rejected() {
            let result = validate_field(FieldKind::Name, "Alan Turing", Some("Alan Turing"));
            assert_eq!(result, ValidationResult::invalid(PLACEHOLDER_MESSAGE));

            let result = validate_field(FieldKind::Name, "Ada Lovelace", Some("Alan Turing"));
            assert!(result.valid);
        }

        #[test]
        fn test_placeholder_check_runs_after_whitespace() {
            let result = validate_field(FieldKind::Name, " Alan Turing", Some(" Alan Turing"));
            assert_eq!(result, ValidationResult::invalid(SURROUNDING_SPACE_MESSAGE));
        }

        #[test]
        fn test_placeholder_equal_to_invalid_value() {
            // The placeholder check wins even when the pattern would also fail
            let result = validate_field(FieldKind::Email, "user@example.com", Some("user@example.com"));
            assert_eq!(result.message, PLACEHOLDER_MESSAGE);
        }

        #[test]
        fn test_pattern_results() {
            let cases = vec![
                (FieldKind::Name, "Maria Silva", true),
                (FieldKind::Name, "maria silva", false),
                (FieldKind::Name, "Maria", false),
                (FieldKind::Email, "joao@teste.br", true),
                (FieldKind::Email, "Joao@teste.br", false),
                (FieldKind::Email, "joao@teste.com", false),
                (FieldKind::Password, "Abcdefg1", true),
                (FieldKind::Password, "abcdefg1", false),
                (FieldKind::Password, "Abcdefgh", false),
                (FieldKind::Password, "Abcdef12", true),
                (FieldKind::NationalId, "123.456.789-09", true),
                (FieldKind::NationalId, "123456789-09", false),
            ];

            for (kind, value, expected) in cases {
                let result = validate_field(kind, value, None);
                assert_eq!(
                    result.valid, expected,
                    "{} '{}' validation result was unexpected",
                    kind, value
                );
                if expected {
                    assert_eq!(result, ValidationResult::valid());
                } else {
                    assert_eq!(result.message, kind.error_message());
                }
            }
        }

        #[test]
        fn test_idempotence() {
            for kind in FieldKind::iter() {
                for value in ["", " x", "Maria Silva", "123456-7", "bad"] {
                    assert_eq!(
                        validate_field(kind, value, None),
                        validate_field(kind, value, None)
                    );
                }
            }
        }

        #[test]
        fn test_validate_identified() {
            let result = validate_identified("cpf", "123.456.789-09", None).unwrap();
            assert!(result.valid);

            assert_eq!(
                validate_identified("ssn", "123-45-6789", None),
                Err(ValidationError::UnknownField("ssn".to_owned()))
            );
        }
    }

    mod validate_all_tests {
        use super::*;

        #[test]
        fn test_no_fields_provided() {
            assert_eq!(
                validate_all(&FieldInput::new(), None),
                Err(ValidationError::NoFieldsProvided)
            );

            // Only blank values means nothing was filled in
            let input: FieldInput = vec![(FieldKind::Name, "  "), (FieldKind::Email, "")]
                .into_iter()
                .collect();
            assert_eq!(
                validate_all(&input, None),
                Err(ValidationError::NoFieldsProvided)
            );
        }

        #[test]
        fn test_mixed_report() {
            let input: FieldInput = vec![(FieldKind::Name, "Maria Silva"), (FieldKind::Email, "bad")]
                .into_iter()
                .collect();

            let report = validate_all(&input, None).unwrap();
            assert_eq!(report.total_count(), 2);
            assert_eq!(report.valid_count(), 1);
            assert!(report.get(FieldKind::Name).unwrap().valid);
            assert!(!report.get(FieldKind::Email).unwrap().valid);
            assert_eq!(report.get(FieldKind::Phone), None);
        }

        #[test]
        fn test_all_valid_examples() {
            let input: FieldInput = FieldKind::iter()
                .map(|kind| (kind, kind.examples()[0]))
                .collect();

            let report = validate_all(&input, None).unwrap();
            assert_eq!(report.total_count(), FieldKind::iter().count());
            assert!(report.all_valid());
        }

        #[test]
        fn test_example_placeholders_reject_unchanged_examples() {
            let input: FieldInput = FieldKind::iter()
                .map(|kind| (kind, kind.examples()[0]))
                .collect();
            let placeholders = Placeholders::examples();

            let report = validate_all(&input, Some(&placeholders)).unwrap();
            assert_eq!(report.valid_count(), 0);
            for (_, result) in report.iter() {
                assert_eq!(result.message, PLACEHOLDER_MESSAGE);
            }
        }

        #[test]
        fn test_aggregate_trims_filled_values() {
            let input: FieldInput = vec![
                (FieldKind::Name, " Maria Silva "),
                (FieldKind::RgId, "875467-2 "),
            ]
            .into_iter()
            .collect();

            let report = validate_all(&input, None).unwrap();
            assert_eq!(report.get(FieldKind::Name), Some(&ValidationResult::valid()));
            assert_eq!(report.get(FieldKind::RgId), Some(&ValidationResult::valid()));

            // A single field still sees the raw value
            assert_eq!(
                validate_field(FieldKind::Name, " Maria Silva ", None),
                ValidationResult::invalid(SURROUNDING_SPACE_MESSAGE)
            );
        }

        #[test]
        fn test_deterministic() {
            let input: FieldInput = vec![
                (FieldKind::Phone, "(91) 99999-9999"),
                (FieldKind::Password, "abc"),
                (FieldKind::DateTime, "02/09/2025 23:59:59"),
            ]
            .into_iter()
            .collect();

            let first = validate_all(&input, None).unwrap();
            let second = validate_all(&input, None).unwrap();
            assert_eq!(first, second);
            assert!(first.valid_count() <= first.total_count());
        }
    }
}
