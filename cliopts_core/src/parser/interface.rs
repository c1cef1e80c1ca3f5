use std::io::IsTerminal;

const BOLD: &str = "1";
const WHITE: &str = "37";
const YELLOW: &str = "33";
const CYAN: &str = "36";
const RED_BG: &str = "41";

/// When to decorate the help/error output with ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Decorate only when stdout is a terminal.
    #[default]
    Auto,
    /// Always decorate.
    Always,
    /// Never decorate.
    Never,
}

impl ColorMode {
    fn enabled(&self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

/// Applies the ANSI styling for help and error messages.
/// When disabled, text passes through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// A painter enabled according to `mode`.
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: mode.enabled(),
        }
    }

    /// A painter which never decorates.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Section headers (ex: `Usage:`).
    pub fn header(&self, text: &str) -> String {
        self.wrap(text, &[BOLD, CYAN])
    }

    /// Required arguments and options.
    pub fn required(&self, text: &str) -> String {
        self.wrap(text, &[BOLD, YELLOW])
    }

    /// The banner preceding validation errors.
    pub fn alert(&self, text: &str) -> String {
        self.wrap(text, &[BOLD, WHITE, RED_BG])
    }

    fn wrap(&self, text: &str, codes: &[&str]) -> String {
        if self.enabled {
            format!("\x1b[0;{}m{text}\x1b[0m", codes.join(";"))
        } else {
            text.to_string()
        }
    }
}

/// Where help and error messages are written.
pub trait UserInterface {
    /// Display a message to the user (ex: stdout).
    fn print(&self, message: String);
    /// Display an error to the user (ex: stderr).
    fn print_error(&self, message: String);
}

/// Prints to stdout and stderr.
#[derive(Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }
}

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_COLUMN_WIDTH: usize = 17;

/// Break the paragraph into lines of at most `width` characters, hyphenating words which are too long for a single line.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while left + width < characters.len() {
        let mut line: String = characters[left..left + increment].iter().collect();
        line.push('-');
        lines.push(line);
        left += increment;
    }

    current.extend(&characters[left..]);
}
