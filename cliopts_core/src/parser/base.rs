use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::api::{ArgumentsSpec, OptionSpec, PositionalSpec, ProgramName, UsageSpec};
use crate::constant::*;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in the text specification itself.
///
/// These are programmer errors: the specification author must fix the text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("Malformed spec line: '{0}'.")]
    /// The line matches neither the usage nor the option grammar.
    MalformedSpecLine(String),

    #[error("Cannot duplicate the option '{0}'.")]
    /// The short or long name is declared more than once.
    DuplicateOption(String),

    #[error("Option must have a short or long name (help: '{0}').")]
    /// The option has neither a short nor a long name.
    NamelessOption(String),
}

static USAGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:Usage:)?(?: ?(\{?[a-z0-9_./][a-z0-9_./-]*\}?))?(?: ?\[options\]?)?((?: ?\[?<[^>]*>\]?)+)?$",
    )
    .expect("internal error - usage regex must compile")
});

static PLACEHOLDER_CHUNK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[?<[^>]*>\]?")
        .expect("internal error - placeholder chunk regex must compile")
});

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:\[<([^>]+)>\]|<([^>]+)>)$")
        .expect("internal error - placeholder regex must compile")
});

static OPTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:-([A-Za-z0-9]))?,? ?(?:--([A-Za-z0-9][A-Za-z0-9_-]+))?(?: <([^>]+)>)?(?: (.*?))??(?: (\(required\)))?$",
    )
    .expect("internal error - option regex must compile")
});

/// Parses the human readable text specification into an [`ArgumentsSpec`].
///
/// The first non-blank line may be a usage line, for example:
/// ```text
/// Usage: {self} [options] <source> [<destination>]
/// ```
/// Every other non-blank line is an option line, for example:
/// ```text
/// -i, --identifier <id> specify an id (required)
/// ```
pub struct TextSpecParser;

impl TextSpecParser {
    /// Parse the text, failing on the first malformed line.
    pub fn parse(text: &str) -> Result<ArgumentsSpec, SpecError> {
        let mut usage = None;
        let mut options = Vec::default();
        let mut first_line = true;

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if first_line {
                first_line = false;

                // Not a usage line?  Then it must be an option line.
                if let Some(usage_spec) = parse_usage_line(line)? {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Usage line: {usage_spec:?}.");
                    }

                    usage.replace(usage_spec);
                    continue;
                }
            }

            options.push(parse_option_line(line)?);
        }

        ArgumentsSpec::new(usage.unwrap_or_default(), options)
    }
}

fn parse_usage_line(line: &str) -> Result<Option<UsageSpec>, SpecError> {
    let captures = match USAGE_LINE.captures(line) {
        Some(captures) => captures,
        None => return Ok(None),
    };

    let program = match captures.get(1).map(|m| m.as_str()) {
        None | Some("") | Some(SELF_PLACEHOLDER) => ProgramName::Dynamic,
        Some(name) => ProgramName::Literal(name.to_string()),
    };

    let mut positionals = Vec::default();

    if let Some(values) = captures.get(2) {
        // Each chunk must be exactly `<name>` or `[<name>]`.
        for chunk in PLACEHOLDER_CHUNK.find_iter(values.as_str()) {
            let placeholder = match PLACEHOLDER.captures(chunk.as_str()) {
                Some(placeholder) => placeholder,
                None => return Err(SpecError::MalformedSpecLine(line.to_string())),
            };

            match (placeholder.get(1), placeholder.get(2)) {
                (Some(optional), _) => {
                    positionals.push(PositionalSpec::new(optional.as_str(), false));
                }
                (None, Some(required)) => {
                    positionals.push(PositionalSpec::new(required.as_str(), true));
                }
                (None, None) => return Err(SpecError::MalformedSpecLine(line.to_string())),
            }
        }
    }

    Ok(Some(UsageSpec::new(program, positionals)))
}

fn parse_option_line(line: &str) -> Result<OptionSpec, SpecError> {
    let captures = OPTION_LINE
        .captures(line)
        .ok_or_else(|| SpecError::MalformedSpecLine(line.to_string()))?;
    let short = captures.get(1).and_then(|m| m.as_str().chars().next());
    let long = captures.get(2).map(|m| m.as_str().to_string());

    if short.is_none() && long.is_none() {
        return Err(SpecError::MalformedSpecLine(line.to_string()));
    }

    let value_name = captures.get(3).map(|m| m.as_str().to_string());
    let help = captures.get(4).map(|m| m.as_str()).unwrap_or_default();
    let required = captures
        .get(5)
        .map(|m| m.as_str() == REQUIRED_MARKER)
        .unwrap_or(false);

    OptionSpec::new(short, long, value_name, help, required)
}
