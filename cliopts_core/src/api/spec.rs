use std::collections::HashMap;

use crate::parser::SpecError;

/// A single option (aka: switch) recognized by the Cli.
///
/// At least one of `short`/`long` is present.
/// An option without a `value_name` is a boolean flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    short: Option<char>,
    long: Option<String>,
    value_name: Option<String>,
    help: String,
    required: bool,
}

impl OptionSpec {
    /// Create an option specification.
    ///
    /// Fails when neither a `short` nor a `long` name is given.
    pub fn new(
        short: Option<char>,
        long: Option<String>,
        value_name: Option<String>,
        help: impl Into<String>,
        required: bool,
    ) -> Result<Self, SpecError> {
        let help = help.into();

        if short.is_none() && long.is_none() {
            return Err(SpecError::NamelessOption(help));
        }

        Ok(Self {
            short,
            long,
            value_name,
            help,
            required,
        })
    }

    /// The single character name (ex: `i` for `-i`).
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The long name (ex: `identifier` for `--identifier`).
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref()
    }

    /// The label of the expected value; `None` for a flag.
    pub fn value_name(&self) -> Option<&str> {
        self.value_name.as_deref()
    }

    /// The help text, possibly empty.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Whether the option must be specified.
    pub fn required(&self) -> bool {
        self.required
    }

    /// The long name if present, otherwise the short name.
    pub fn canonical_name(&self) -> String {
        match (&self.long, &self.short) {
            (Some(long), _) => long.clone(),
            (None, Some(short)) => short.to_string(),
            (None, None) => unreachable!("internal error - an option always has a name"),
        }
    }

    /// The keys this option is addressed by on the Cli (dashes removed).
    pub(crate) fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.short
            .map(|s| s.to_string())
            .into_iter()
            .chain(self.long.iter().cloned())
    }
}

/// A named positional argument slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalSpec {
    name: String,
    required: bool,
}

impl PositionalSpec {
    /// Create a positional argument specification.
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            required,
        }
    }

    /// The name, as declared between `<` and `>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the argument was declared `<name>` (required) rather than `[<name>]`.
    pub fn required(&self) -> bool {
        self.required
    }
}

/// How the program name is displayed in the help message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramName {
    /// Use the invocation name provided by the operating system.
    Dynamic,
    /// Use this literal name.
    Literal(String),
}

/// The usage line: the program name and the positional arguments, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageSpec {
    program: ProgramName,
    positionals: Vec<PositionalSpec>,
}

impl Default for UsageSpec {
    fn default() -> Self {
        Self::new(ProgramName::Dynamic, Vec::default())
    }
}

impl UsageSpec {
    /// Create a usage specification.
    pub fn new(program: ProgramName, positionals: Vec<PositionalSpec>) -> Self {
        Self {
            program,
            positionals,
        }
    }

    /// How the program is named.
    pub fn program(&self) -> &ProgramName {
        &self.program
    }

    /// The positional arguments, in declaration order.
    pub fn positionals(&self) -> &[PositionalSpec] {
        &self.positionals
    }
}

/// The specification of the Cli: usage line and options.
///
/// Immutable once constructed.
/// Iterating over an `ArgumentsSpec` yields its options in declaration order.
#[derive(Debug, Clone)]
pub struct ArgumentsSpec {
    usage: UsageSpec,
    options: Vec<OptionSpec>,
    // Both maps are keyed by the short and the long names.
    by_key: HashMap<String, usize>,
    normalized: HashMap<String, String>,
}

impl ArgumentsSpec {
    /// Create the specification.
    ///
    /// Fails when two options share a short or long name.
    pub fn new(usage: UsageSpec, options: Vec<OptionSpec>) -> Result<Self, SpecError> {
        let mut by_key = HashMap::default();
        let mut normalized = HashMap::default();

        for (index, option) in options.iter().enumerate() {
            let canonical = option.canonical_name();

            for key in option.keys() {
                if by_key.insert(key.clone(), index).is_some() {
                    return Err(SpecError::DuplicateOption(key));
                }

                normalized.insert(key, canonical.clone());
            }
        }

        Ok(Self {
            usage,
            options,
            by_key,
            normalized,
        })
    }

    /// The usage line.
    pub fn usage(&self) -> &UsageSpec {
        &self.usage
    }

    /// Find the option addressed by `key` (either its short or long name).
    pub fn option(&self, key: &str) -> Option<&OptionSpec> {
        self.by_key.get(key).map(|index| &self.options[*index])
    }

    /// Whether `key` names an option that declares a value.
    pub fn option_expects_value(&self, key: &str) -> bool {
        self.option(key)
            .map(|option| option.value_name().is_some())
            .unwrap_or(false)
    }

    /// Whether `key` names a required option.
    /// Unknown keys are never required.
    pub fn is_required(&self, key: &str) -> bool {
        self.option(key)
            .map(|option| option.required())
            .unwrap_or(false)
    }

    /// The canonical name (long, otherwise short) of the option addressed by `key`.
    /// Produces `None` when `key` doesn't name any option.
    pub fn normalize(&self, key: &str) -> Option<&str> {
        self.normalized.get(key).map(String::as_str)
    }

    /// Iterate over the options, in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
        self.options.iter()
    }

    /// Whether no options are declared.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// The number of declared options.
    pub fn len(&self) -> usize {
        self.options.len()
    }
}

impl<'a> IntoIterator for &'a ArgumentsSpec {
    type Item = &'a OptionSpec;
    type IntoIter = std::slice::Iter<'a, OptionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;

    pub(crate) fn option(
        short: Option<char>,
        long: Option<&str>,
        value_name: Option<&str>,
        required: bool,
    ) -> OptionSpec {
        OptionSpec::new(
            short,
            long.map(str::to_string),
            value_name.map(str::to_string),
            "",
            required,
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test::option;
    use super::*;
    use rstest::rstest;

    fn identifier_list() -> ArgumentsSpec {
        ArgumentsSpec::new(
            UsageSpec::default(),
            vec![
                option(Some('i'), Some("identifier"), Some("id"), true),
                option(Some('l'), None, None, false),
                option(None, Some("out"), Some("file"), false),
            ],
        )
        .unwrap()
    }

    #[test]
    fn option_nameless() {
        assert_eq!(
            OptionSpec::new(None, None, None, "help", false).unwrap_err(),
            SpecError::NamelessOption("help".to_string())
        );
    }

    #[rstest]
    #[case(Some('i'), Some("identifier"), "identifier")]
    #[case(Some('i'), None, "i")]
    #[case(None, Some("identifier"), "identifier")]
    fn option_canonical_name(
        #[case] short: Option<char>,
        #[case] long: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(option(short, long, None, false).canonical_name(), expected);
    }

    #[rstest]
    #[case("i", true)]
    #[case("identifier", true)]
    #[case("l", false)]
    #[case("out", true)]
    #[case("moot", false)]
    fn option_expects_value(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(identifier_list().option_expects_value(key), expected);
    }

    #[rstest]
    #[case("i", true)]
    #[case("identifier", true)]
    #[case("l", false)]
    #[case("out", false)]
    #[case("moot", false)]
    fn is_required(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(identifier_list().is_required(key), expected);
    }

    #[rstest]
    #[case("i", Some("identifier"))]
    #[case("identifier", Some("identifier"))]
    #[case("l", Some("l"))]
    #[case("out", Some("out"))]
    #[case("o", None)]
    #[case("moot", None)]
    fn normalize(#[case] key: &str, #[case] expected: Option<&str>) {
        assert_eq!(identifier_list().normalize(key), expected);
    }

    #[test]
    fn normalize_short_long_agree() {
        let spec = identifier_list();

        for option in &spec {
            if let (Some(short), Some(long)) = (option.short(), option.long()) {
                assert_eq!(spec.normalize(&short.to_string()), spec.normalize(long));
            }
        }
    }

    #[test]
    fn iterate_declaration_order() {
        let spec = identifier_list();
        let names: Vec<String> = spec.iter().map(OptionSpec::canonical_name).collect();
        assert_eq!(names, vec!["identifier", "l", "out"]);
        assert_eq!(spec.len(), 3);
        assert!(!spec.is_empty());
    }

    #[rstest]
    #[case(vec![option(Some('a'), None, None, false), option(Some('a'), Some("apple"), None, false)], "a")]
    #[case(vec![option(None, Some("apple"), None, false), option(Some('a'), Some("apple"), None, false)], "apple")]
    fn duplicate_option(#[case] options: Vec<OptionSpec>, #[case] expected: &str) {
        assert_eq!(
            ArgumentsSpec::new(UsageSpec::default(), options).unwrap_err(),
            SpecError::DuplicateOption(expected.to_string())
        );
    }
}
