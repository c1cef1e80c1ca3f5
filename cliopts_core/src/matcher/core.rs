use crate::api::ArgumentsSpec;
use crate::matcher::ParsedArguments;
use crate::model::OptionValue;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Aligns the argument vector to the options and positional arguments of an [`ArgumentsSpec`].
///
/// Parsing never fails.
/// Unrecognized or incomplete tokens are recorded as-is, and left for [`ArgsValidator`](crate::ArgsValidator) to judge.
pub struct ArgumentsParser<'a> {
    spec: &'a ArgumentsSpec,
}

impl<'a> ArgumentsParser<'a> {
    /// Create a parser for `spec`.
    pub fn new(spec: &'a ArgumentsSpec) -> Self {
        Self { spec }
    }

    /// Parse the argument vector, where `argv[0]` is the program token.
    ///
    /// Tokens are matched in a single left-to-right pass:
    /// * `--NAME`, `--NAME=VALUE`: a long option.
    /// * `-N`, `-N=VALUE`, `-NMO`, `-NMO=VALUE`: short option(s); all but the final option of a cluster are flags.
    /// * Anything else (including `-` and `--` by themselves): positional data.
    ///
    /// An option which expects a value takes the next token, unless that token begins with `-`.
    pub fn parse<S: AsRef<str>>(&self, argv: &[S]) -> ParsedArguments {
        let mut tokens = argv.iter().map(AsRef::as_ref);
        let mut parsed = ParsedArguments::new(tokens.next().unwrap_or_default());
        let tokens: Vec<&str> = tokens.collect();
        let positionals = self.spec.usage().positionals();
        let mut index = 0;

        while index < tokens.len() {
            let token = tokens[index];
            // A bare `-` or `--` is data, not an option.
            let switch = match token.strip_prefix("--") {
                Some(key) => Some((key, false)),
                None => token.strip_prefix('-').map(|key| (key, true)),
            }
            .filter(|(key, _)| !key.is_empty());

            match switch {
                Some((key, clustered)) => {
                    let key = if clustered {
                        expand_cluster(&mut parsed, key)
                    } else {
                        key
                    };
                    index += self.match_option(&mut parsed, key, tokens.get(index + 1));
                }
                None => {
                    let offset = parsed.numbered_data().len();
                    let name = positionals.get(offset).map(|p| p.name());
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Token '{token}' is positional data at offset {offset} (name: {name:?}).");
                    }
                    parsed.push_data(name, token);
                }
            }

            index += 1;
        }

        parsed
    }

    /// Record the option `key`, returning the number of extra tokens consumed.
    fn match_option(&self, parsed: &mut ParsedArguments, key: &str, next: Option<&&str>) -> usize {
        let (key, value, consumed) = match split_equals_delimiter(key) {
            (key, Some(value)) => (key, OptionValue::Value(value.to_string()), 0),
            (key, None) if self.spec.option_expects_value(key) => match next {
                Some(next) if !next.starts_with('-') => {
                    (key, OptionValue::Value(next.to_string()), 1)
                }
                _ => (key, OptionValue::NoValue, 0),
            },
            (key, None) => (key, OptionValue::NoValue, 0),
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Token '{key}' is an option with value {value:?}.");
        }

        parsed.push_option(key, value);
        consumed
    }
}

/// Record the leading flags of a short option cluster (ex: `-xyz`), producing the final key.
///
/// Expansion stops at the character before an `=`, so in `-xyz=1` the final key is `z=1`.
fn expand_cluster<'t>(parsed: &mut ParsedArguments, key: &'t str) -> &'t str {
    let characters: Vec<(usize, char)> = key.char_indices().collect();
    let mut index = 0;

    while index + 1 < characters.len() {
        if characters[index + 1].1 == '=' {
            break;
        }

        parsed.push_option(characters[index].1.to_string(), OptionValue::NoValue);
        index += 1;
    }

    &key[characters[index].0..]
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}
