use std::env;
use std::sync::Arc;

use crate::api::{ArgumentValues, ArgumentsSpec};
use crate::constant::*;
use crate::matcher::ArgumentsParser;
use crate::parser::{
    terminal_columns, ColorMode, ConsoleInterface, HelpGenerator, Painter, SpecError,
    TextSpecParser, UserInterface, ValidationError,
};

/// The command line options parser, configured from a text specification.
///
/// ### Example
/// ```
/// # use cliopts_core::*;
/// let opts = CliOpts::from_text_spec(
///     r#"Usage: {self} [options] <source>
///     -i, --identifier <id> specify an id (required)
///     -v, --verbose be verbose"#,
/// )
/// .unwrap();
///
/// let values = opts.values(&["program", "-v", "-i", "7", "file.txt"]);
/// assert_eq!(values.get("identifier"), Lookup::Value("7"));
/// assert_eq!(values.get("source"), Lookup::Value("file.txt"));
/// assert!(values.exists("verbose"));
/// ```
pub struct CliOpts {
    spec: Arc<ArgumentsSpec>,
    validation: bool,
    help_switch: bool,
    color: ColorMode,
    width: Option<usize>,
    user_interface: Box<dyn UserInterface>,
}

impl std::fmt::Debug for CliOpts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliOpts")
            .field("spec", &self.spec)
            .field("validation", &self.validation)
            .field("help_switch", &self.help_switch)
            .field("color", &self.color)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

/// What the program should do with a parsed argument vector.
#[derive(Debug)]
pub enum Outcome {
    /// Carry on with the values.
    Proceed(ArgumentValues),
    /// The help switch was specified; show the help message.
    Help(String),
    /// The arguments failed validation.
    Invalid {
        /// Every validation error, in the order found.
        errors: Vec<ValidationError>,
        /// The help message to show alongside the errors.
        help: String,
    },
}

impl Outcome {
    /// The process exit code for this outcome, or `None` when the program should proceed.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Outcome::Proceed(_) => None,
            Outcome::Help(_) => Some(0),
            Outcome::Invalid { .. } => Some(1),
        }
    }
}

impl CliOpts {
    /// Create the parser from an already constructed specification.
    pub fn new(spec: ArgumentsSpec) -> Self {
        Self {
            spec: Arc::new(spec),
            validation: true,
            help_switch: true,
            color: ColorMode::default(),
            width: None,
            user_interface: Box::new(ConsoleInterface::default()),
        }
    }

    /// Create the parser from a text specification:
    /// ```text
    /// Usage: {self} [options] <source> [<destination>]
    /// -i, --identifier <id> specify an id (required)
    /// -l, --list list mode
    /// ```
    ///
    /// Fails when a line is malformed, or when an option name is repeated.
    pub fn from_text_spec(text: &str) -> Result<Self, SpecError> {
        Ok(Self::new(TextSpecParser::parse(text)?))
    }

    /// Whether [`CliOpts::evaluate`] rejects invalid arguments (default: `true`).
    pub fn validation(mut self, enabled: bool) -> Self {
        self.validation = enabled;
        self
    }

    /// Whether [`CliOpts::evaluate`] responds to the `help` option (default: `true`).
    /// Only applies when the specification declares `--help`.
    pub fn help_switch(mut self, enabled: bool) -> Self {
        self.help_switch = enabled;
        self
    }

    /// When to decorate the help and error messages with ANSI styling (default: [`ColorMode::Auto`]).
    pub fn color(mut self, mode: ColorMode) -> Self {
        self.color = mode;
        self
    }

    /// Wrap the help message to `width` columns (default: no wrapping).
    pub fn width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    /// Wrap the help message to the width of the terminal, if there is one.
    pub fn terminal_width(self) -> Self {
        self.width(terminal_columns())
    }

    /// Send the help and error messages somewhere other than stdout/stderr.
    pub fn interface(mut self, user_interface: Box<dyn UserInterface>) -> Self {
        self.user_interface = user_interface;
        self
    }

    /// The specification this parser was configured with.
    pub fn spec(&self) -> &ArgumentsSpec {
        &self.spec
    }

    /// Parse the argument vector, where `argv[0]` is the program token.
    pub fn values<S: AsRef<str>>(&self, argv: &[S]) -> ArgumentValues {
        let parsed = ArgumentsParser::new(&self.spec).parse(argv);
        ArgumentValues::new(Arc::clone(&self.spec), parsed)
    }

    /// Parse the Cli [`env::args`].
    pub fn values_from_env(&self) -> ArgumentValues {
        let argv: Vec<String> = env::args().collect();
        self.values(&argv)
    }

    /// Render the help message.
    /// When the usage line doesn't name the program literally, `program` is used (defaulting to the invocation name).
    pub fn help_text(&self, program: Option<&str>) -> String {
        HelpGenerator::new(&self.spec)
            .painter(Painter::new(self.color))
            .width(self.width)
            .build(program)
    }

    /// Parse and judge the argument vector, without printing anything.
    pub fn evaluate<S: AsRef<str>>(&self, argv: &[S]) -> Outcome {
        let values = self.values(argv);
        let program = Some(values.program()).filter(|p| !p.is_empty());

        if self.help_switch && self.spec.option(HELP_NAME).is_some() && values.exists(HELP_NAME) {
            return Outcome::Help(self.help_text(program));
        }

        if self.validation && !values.is_valid() {
            return Outcome::Invalid {
                errors: values.validation_errors().to_vec(),
                help: self.help_text(program),
            };
        }

        Outcome::Proceed(values)
    }

    /// Run the parser against the argument vector, where `argv[0]` is the program token.
    ///
    /// If the help switch (`--help`) is specified, displays the help message and returns `Err(0)`.
    ///
    /// If the arguments are invalid, displays the errors followed by the help message and returns `Err(1)`.
    pub fn run_tokens<S: AsRef<str>>(&self, argv: &[S]) -> Result<ArgumentValues, i32> {
        match self.evaluate(argv) {
            Outcome::Proceed(values) => Ok(values),
            Outcome::Help(help) => {
                self.user_interface.print(help);
                Err(0)
            }
            Outcome::Invalid { errors, help } => {
                let painter = Painter::new(self.color);
                self.user_interface.print_error(painter.alert(ERRORS_HEADER));

                for error in errors {
                    self.user_interface.print_error(error.to_string());
                }

                self.user_interface.print(help);
                Err(1)
            }
        }
    }

    /// Run the parser against the Cli [`env::args`].
    ///
    /// If the help switch (`--help`) is specified, displays the help message and exits with code `0` (via [`std::process::exit`]).
    ///
    /// If the arguments are invalid, displays the errors followed by the help message and exits with code `1`.
    pub fn parse(self) -> ArgumentValues {
        let argv: Vec<String> = env::args().collect();

        match self.run_tokens(&argv) {
            Ok(values) => values,
            Err(exit_code) => std::process::exit(exit_code),
        }
    }
}

/// Parse the argument vector against a text specification, in one step.
///
/// ### Example
/// ```
/// # use cliopts_core::*;
/// let values = get_opts("Usage: {self} <url>", &["program", "https://example.com"]).unwrap();
/// assert_eq!(values.get("url").value(), Some("https://example.com"));
/// ```
pub fn get_opts<S: AsRef<str>>(text: &str, argv: &[S]) -> Result<ArgumentValues, SpecError> {
    Ok(CliOpts::from_text_spec(text)?.values(argv))
}
