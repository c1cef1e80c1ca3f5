use indexmap::IndexMap;
use std::cell::OnceCell;
use std::sync::Arc;

use crate::api::ArgumentsSpec;
use crate::matcher::ParsedArguments;
use crate::model::{Lookup, OptionValue};
use crate::parser::{ArgsValidator, ValidationError};

/// The values of a parsed argument vector, addressed by name.
///
/// Options are addressed by either their short or long name, positional arguments by the name declared in the usage line.
/// Options which aren't part of the specification are left out (they are reported by [`ArgumentValues::validation_errors`]).
///
/// ### Example
/// ```
/// # use cliopts_core::*;
/// let values = get_opts(
///     "-i, --identifier <id> specify an id (required)\n-l, --list list mode",
///     &["program", "--identifier", "100", "-l"],
/// )
/// .unwrap();
///
/// assert_eq!(values.get("i"), Lookup::Value("100"));
/// assert_eq!(values.get("identifier"), Lookup::Value("100"));
/// assert_eq!(values.get("list"), Lookup::NoValue);
/// assert_eq!(values.get("other"), Lookup::Absent);
/// assert!(values.is_valid());
/// ```
#[derive(Debug)]
pub struct ArgumentValues {
    spec: Arc<ArgumentsSpec>,
    parsed: Arc<ParsedArguments>,
    values: IndexMap<String, OptionValue>,
    validator: OnceCell<ArgsValidator>,
}

impl ArgumentValues {
    /// Merge the named positional data and the (normalized) options of `parsed`.
    pub fn new(spec: Arc<ArgumentsSpec>, parsed: ParsedArguments) -> Self {
        let mut values: IndexMap<String, OptionValue> = parsed
            .data()
            .iter()
            .map(|(name, value)| (name.clone(), OptionValue::Value(value.clone())))
            .collect();

        for (key, value) in parsed.options() {
            if let Some(name) = spec.normalize(key) {
                values.insert(name.to_string(), value.clone());
            }
        }

        Self {
            spec,
            parsed: Arc::new(parsed),
            values,
            validator: OnceCell::new(),
        }
    }

    /// Look up an option (by short or long name) or a positional argument (by name).
    pub fn get(&self, key: &str) -> Lookup<'_> {
        let name = self.spec.normalize(key).unwrap_or(key);
        self.values.get(name).into()
    }

    /// Whether the option or positional argument was specified (with or without a value).
    pub fn exists(&self, key: &str) -> bool {
        self.get(key).is_present()
    }

    /// Iterate over the canonical names and their values.
    /// Named positional arguments come first, followed by options in the order they were specified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Lookup<'_>)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), Lookup::from(Some(value))))
    }

    /// The number of named values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no named values were specified.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the arguments pass validation.
    pub fn is_valid(&self) -> bool {
        self.validator().is_valid()
    }

    /// The validation errors, in the order found (empty when valid).
    pub fn validation_errors(&self) -> &[ValidationError] {
        self.validator().errors()
    }

    /// The validation errors as sentences, one per line.
    pub fn error_text(&self) -> String {
        self.validation_errors()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Every positional value, by offset.
    /// Includes the values beyond those named in the usage line.
    pub fn all_by_offset(&self) -> &[String] {
        self.parsed.numbered_data()
    }

    /// The program token (`argv[0]`).
    pub fn program(&self) -> &str {
        self.parsed.program()
    }

    /// The underlying parse of the argument vector.
    pub fn parsed(&self) -> &ParsedArguments {
        &self.parsed
    }

    /// The specification the arguments were parsed with.
    pub fn spec(&self) -> &ArgumentsSpec {
        &self.spec
    }

    fn validator(&self) -> &ArgsValidator {
        self.validator.get_or_init(|| {
            ArgsValidator::new(Arc::clone(&self.spec), Arc::clone(&self.parsed))
        })
    }
}

impl<'a> IntoIterator for &'a ArgumentValues {
    type Item = (&'a str, Lookup<'a>);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, Lookup<'a>)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
