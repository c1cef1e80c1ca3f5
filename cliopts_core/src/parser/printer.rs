use terminal_size::{terminal_size, Width};

use crate::api::{ArgumentsSpec, OptionSpec, ProgramName};
use crate::constant::*;
use crate::parser::interface::{chunk, Painter, MINIMUM_COLUMN_WIDTH};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const OPTION_INDENT: usize = 2;

/// Renders the help message for an [`ArgumentsSpec`]:
/// ```text
/// Usage: program [options] <source> [<destination>]
///
/// Options:
///   -i, --identifier <id> specify an id (required)
///   -l                    list mode
/// ```
pub struct HelpGenerator<'a> {
    spec: &'a ArgumentsSpec,
    painter: Painter,
    width: Option<usize>,
}

impl<'a> HelpGenerator<'a> {
    /// A generator without styling or line wrapping.
    pub fn new(spec: &'a ArgumentsSpec) -> Self {
        Self {
            spec,
            painter: Painter::plain(),
            width: None,
        }
    }

    /// Decorate the help message with `painter`.
    pub fn painter(mut self, painter: Painter) -> Self {
        self.painter = painter;
        self
    }

    /// Wrap the option help text to fit within `width` columns.
    pub fn width(mut self, width: Option<usize>) -> Self {
        self.width = width;
        self
    }

    /// Wrap the option help text to fit within the terminal, if there is one.
    pub fn terminal(self) -> Self {
        self.width(terminal_columns())
    }

    /// Build the help message.
    ///
    /// The program name comes from the usage line when it names one literally.
    /// Otherwise, `program` is used, falling back to the invocation name from the operating system.
    pub fn build(&self, program: Option<&str>) -> String {
        let mut lines = vec![self.usage_line(program)];

        if !self.spec.is_empty() {
            lines.push(String::default());
            lines.push(self.painter.header(OPTIONS_HEADER));

            let switches: Vec<String> = self.spec.iter().map(switch_text).collect();
            let padding = switches
                .iter()
                .map(|switch| switch.chars().count())
                .max()
                .unwrap_or_default();

            for (option, switch) in self.spec.iter().zip(switches.iter()) {
                lines.extend(self.option_lines(option, switch, padding));
            }
        }

        lines.join("\n")
    }

    fn usage_line(&self, program: Option<&str>) -> String {
        let usage = self.spec.usage();
        let program = match (usage.program(), program) {
            (ProgramName::Literal(name), _) => name.clone(),
            (ProgramName::Dynamic, Some(name)) => name.to_string(),
            (ProgramName::Dynamic, None) => std::env::args().next().unwrap_or_default(),
        };
        let mut parts = vec![self.painter.header(USAGE_HEADER), program];

        if !self.spec.is_empty() {
            parts.push(OPTIONS_MARKER.to_string());
        }

        for positional in usage.positionals() {
            if positional.required() {
                parts.push(self.painter.required(&format!("<{}>", positional.name())));
            } else {
                parts.push(format!("[<{}>]", positional.name()));
            }
        }

        parts.join(" ")
    }

    fn option_lines(&self, option: &OptionSpec, switch: &str, padding: usize) -> Vec<String> {
        let mut description = option.help().to_string();

        if option.required() {
            if !description.is_empty() {
                description.push(' ');
            }
            description.push_str(REQUIRED_MARKER);
        }

        let column = OPTION_INDENT + padding + 1;
        let parts = match self.width {
            Some(width) if column + description.chars().count() > width => {
                let middle = std::cmp::max(width.saturating_sub(column), MINIMUM_COLUMN_WIDTH);
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Option '{switch}' exceeds the width {width}.  Wrapping its help to: {middle}.");
                }
                chunk(&description, middle)
            }
            _ => vec![description],
        };

        let mut lines = Vec::default();

        for (i, part) in parts.iter().enumerate() {
            let left = if i == 0 { switch } else { "" };
            let line = format!("{:OPTION_INDENT$}{left:padding$} {part}", "");
            lines.push(line.trim_end().to_string());
        }

        if lines.is_empty() {
            lines.push(format!("{:OPTION_INDENT$}{switch}", ""));
        }

        if option.required() {
            lines
                .into_iter()
                .map(|line| self.painter.required(&line))
                .collect()
        } else {
            lines
        }
    }
}

/// The width of the terminal, if there is one.
pub(crate) fn terminal_columns() -> Option<usize> {
    if let Some((Width(terminal_width), _)) = terminal_size() {
        Some(terminal_width as usize)
    } else {
        None
    }
}

/// The switches of the option, as they appear in the help message (ex: `-i, --identifier <id>`).
fn switch_text(option: &OptionSpec) -> String {
    let mut text = String::default();

    if let Some(short) = option.short() {
        text.push('-');
        text.push(short);
    }

    if let Some(long) = option.long() {
        if !text.is_empty() {
            text.push_str(", ");
        }
        text.push_str("--");
        text.push_str(long);
    }

    if let Some(value_name) = option.value_name() {
        text.push_str(&format!(" <{value_name}>"));
    }

    text
}
