//! Core module for `cliopts`.
//! See the documentation of the `cliopts` crate for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use matcher::{ArgumentsParser, ParsedArguments};
pub use model::*;
pub use parser::{
    ArgsValidator, ColorMode, ConsoleInterface, HelpGenerator, Painter, SpecError,
    TextSpecParser, UserInterface, ValidationError,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
