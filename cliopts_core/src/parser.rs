mod base;
mod interface;
mod printer;
mod validator;

pub use base::*;
pub use interface::{ColorMode, ConsoleInterface, Painter, UserInterface};
pub use printer::HelpGenerator;
pub(crate) use printer::terminal_columns;
pub use validator::*;

#[cfg(test)]
pub(crate) use interface::util;
