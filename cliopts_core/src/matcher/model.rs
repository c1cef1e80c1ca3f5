use indexmap::IndexMap;

use crate::model::OptionValue;

/// The result of parsing a single argument vector against an [`ArgumentsSpec`](crate::ArgumentsSpec).
///
/// * `options`: option keys as typed (dashes removed), in order of first appearance.
/// * `data`: positional values, by the name declared in the usage line.
/// * `numbered_data`: every positional value, by position (whether or not a name was declared).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    program: String,
    options: IndexMap<String, OptionValue>,
    data: IndexMap<String, String>,
    numbered_data: Vec<String>,
}

impl ParsedArguments {
    pub(crate) fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`ParsedArguments`] directly, for use in testing.
    #[cfg(feature = "unit_test")]
    pub fn test_dummy(
        program: impl Into<String>,
        options: Vec<(&str, OptionValue)>,
        data: Vec<(&str, &str)>,
        numbered_data: Vec<&str>,
    ) -> Self {
        Self {
            program: program.into(),
            options: options
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
            data: data
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            numbered_data: numbered_data.into_iter().map(str::to_string).collect(),
        }
    }

    pub(crate) fn push_option(&mut self, key: impl Into<String>, value: OptionValue) {
        self.options.insert(key.into(), value);
    }

    pub(crate) fn push_data(&mut self, name: Option<&str>, value: impl Into<String>) {
        let value = value.into();

        if let Some(name) = name {
            self.data.insert(name.to_string(), value.clone());
        }

        self.numbered_data.push(value);
    }

    /// The program token (`argv[0]`).
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The options by key, as typed.
    pub fn options(&self) -> &IndexMap<String, OptionValue> {
        &self.options
    }

    /// The positional values which have a declared name.
    pub fn data(&self) -> &IndexMap<String, String> {
        &self.data
    }

    /// Every positional value, by offset.
    pub fn numbered_data(&self) -> &[String] {
        &self.numbered_data
    }
}
