//! Declarative request validation.
//!
//! A rule set is an ordered slice of [`FieldConstraint`]s. [`evaluate`]
//! checks every constraint independently and collects every violation,
//! so a request with three bad fields reports three entries.

mod constraint;
pub mod rules;

pub use constraint::{Check, FieldConstraint, Location, Presence, RequestInput};
pub use sf_shared::validation::{FieldError, ValidationErrors};

use sf_shared::validation::validators::is_blank;

/// Evaluate each constraint of `rules` against `input`
pub fn evaluate(rules: &[FieldConstraint], input: &RequestInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for rule in rules {
        let value = input.lookup(rule.location, rule.field);

        if is_blank(value) {
            match rule.presence {
                Presence::Required(missing) => errors.add_error(rule.field, missing),
                Presence::NotBlank(missing) if value.is_some() => {
                    errors.add_error(rule.field, missing)
                }
                _ => {}
            }
            continue;
        }

        if let Some(value) = value {
            if !rule.check.passes(value, rule.location) {
                errors.add_error(rule.field, rule.message);
            }
        }
    }

    errors
}

/// Evaluate several rule sets against the same input, in order
pub fn evaluate_all(rule_sets: &[&[FieldConstraint]], input: &RequestInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for rules in rule_sets {
        errors.extend(evaluate(rules, input));
    }
    errors
}

#[cfg(test)]
mod tests;
