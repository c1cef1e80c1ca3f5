/// The value recorded for an option key that appeared on the Cli.
///
/// A boolean flag (ex: `-v`), as well as a value option that wasn't followed by a value (ex: `--out` at the end of the tokens), records `NoValue`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    /// The option was present, but did not carry a value.
    NoValue,
    /// The option was present with this value (which may be the empty string, ex: `--out=`).
    Value(String),
}

impl OptionValue {
    /// The value as a `&str`, if one was specified.
    pub fn value(&self) -> Option<&str> {
        match self {
            OptionValue::NoValue => None,
            OptionValue::Value(value) => Some(value.as_str()),
        }
    }

    /// Whether a non-empty value was specified.
    pub fn has_value(&self) -> bool {
        matches!(self, OptionValue::Value(value) if !value.is_empty())
    }
}

/// The result of looking up an option or argument by name.
///
/// Distinguishes between "not specified" (`Absent`) and "specified without a value" (`NoValue`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// Nothing by this name was specified.
    Absent,
    /// The option was specified, but without a value (ex: a flag).
    NoValue,
    /// The option/argument was specified with this value.
    Value(&'a str),
}

impl<'a> Lookup<'a> {
    /// Whether the name was specified at all (with or without a value).
    pub fn is_present(&self) -> bool {
        !matches!(self, Lookup::Absent)
    }

    /// The value, if one was specified.
    /// Both `Absent` and `NoValue` produce `None`.
    pub fn value(&self) -> Option<&'a str> {
        match self {
            Lookup::Value(value) => Some(value),
            Lookup::Absent | Lookup::NoValue => None,
        }
    }
}

impl<'a> From<Option<&'a OptionValue>> for Lookup<'a> {
    fn from(value: Option<&'a OptionValue>) -> Self {
        match value {
            None => Lookup::Absent,
            Some(OptionValue::NoValue) => Lookup::NoValue,
            Some(OptionValue::Value(value)) => Lookup::Value(value.as_str()),
        }
    }
}
