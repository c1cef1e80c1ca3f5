use std::cell::OnceCell;
use std::sync::Arc;
use thiserror::Error;

use crate::api::{ArgumentsSpec, OptionSpec};
use crate::matcher::ParsedArguments;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A problem found while validating the parsed arguments against the specification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required value for argument {0} not found.")]
    /// A required option was not given (with a value, when it expects one).
    RequiredValue(String),

    #[error("No value was specified for argument {0}.")]
    /// An option which expects a value was given without one.
    MissingValue(String),

    #[error("Unknown option {0}.")]
    /// The option is not part of the specification.
    UnknownOption(String),

    #[error("No value for <{0}> was provided.")]
    /// A required positional argument was not given.
    MissingArgument(String),

    #[error("Found {0} unexpected value{}.", plural(.0))]
    /// More positional values were given than declared.
    UnexpectedValues(usize),
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

/// Checks the [`ParsedArguments`] against the [`ArgumentsSpec`] it was parsed with.
///
/// Validation runs once, on first use, and reports every problem found (not just the first).
#[derive(Debug)]
pub struct ArgsValidator {
    spec: Arc<ArgumentsSpec>,
    parsed: Arc<ParsedArguments>,
    errors: OnceCell<Vec<ValidationError>>,
}

impl ArgsValidator {
    /// Create a validator; nothing is checked until first use.
    pub fn new(spec: Arc<ArgumentsSpec>, parsed: Arc<ParsedArguments>) -> Self {
        Self {
            spec,
            parsed,
            errors: OnceCell::new(),
        }
    }

    /// Whether no validation errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// The validation errors, in the order they were found.
    /// Empty when the arguments are valid.
    pub fn errors(&self) -> &[ValidationError] {
        self.errors.get_or_init(|| validate(&self.spec, &self.parsed))
    }
}

fn validate(spec: &ArgumentsSpec, parsed: &ParsedArguments) -> Vec<ValidationError> {
    let mut errors = Vec::default();

    // 1. Required options, and options missing their value.
    for option in spec {
        if option.required() {
            // A flag never carries a value, so its presence is what's required.
            let satisfied = match option.value_name() {
                Some(_) => value_specified(option, parsed),
                None => switch_specified(option, parsed),
            };

            if !satisfied {
                errors.push(ValidationError::RequiredValue(option.canonical_name()));
            }
        } else if option.value_name().is_some()
            && !value_specified(option, parsed)
            && switch_specified(option, parsed)
        {
            errors.push(ValidationError::MissingValue(option.canonical_name()));
        }
    }

    // 2. Options that aren't in the specification.
    for key in parsed.options().keys() {
        if spec.normalize(key).is_none() {
            errors.push(ValidationError::UnknownOption(key.clone()));
        }
    }

    // 3. Required positional arguments.
    let positionals = spec.usage().positionals();

    for positional in positionals {
        if positional.required() && !parsed.data().contains_key(positional.name()) {
            errors.push(ValidationError::MissingArgument(
                positional.name().to_string(),
            ));
        }
    }

    // 4. Positional values beyond the declared arguments.
    if parsed.numbered_data().len() > positionals.len() {
        errors.push(ValidationError::UnexpectedValues(
            parsed.numbered_data().len() - positionals.len(),
        ));
    }

    #[cfg(feature = "tracing_debug")]
    {
        for error in &errors {
            debug!("Validation error: {error}");
        }
    }

    errors
}

fn value_specified(option: &OptionSpec, parsed: &ParsedArguments) -> bool {
    option
        .keys()
        .filter_map(|key| parsed.options().get(&key))
        .any(|value| value.has_value())
}

fn switch_specified(option: &OptionSpec, parsed: &ParsedArguments) -> bool {
    option
        .keys()
        .any(|key| parsed.options().contains_key(&key))
}
