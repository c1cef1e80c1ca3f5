//! `cliopts` parses command line options from a human readable usage specification.
//!
//! Rather than configuring the parser through code, the program describes its Cli in the same text it would show in `--help`:
//! ```text
//! Usage: {self} [options] <source> [<destination>]
//! -i, --identifier <id> specify an id (required)
//! -l, --list list mode
//! -h, --help show this help
//! ```
//! * The (optional) first line is the usage line.
//! It names the program (`{self}`, or nothing, to use the invocation name) followed by the positional arguments: `<required>` or `[<optional>]`.
//! * Every other line is an option: a short `-x` and/or long `--name`, an optional `<value>`, the help text, and an optional `(required)` marker.
//! Options without a `<value>` are flags.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/example01.rs")]
//! ```
//!
//! ```console
//! $ example01 -v -i 7 in.txt
//! The values you supplied are:
//!   in_filename: in.txt
//!   v
//!   id: 7
//!
//! $ example01 --help
//! Usage: example01 [options] <in_filename>
//!
//! Options:
//!   -i, --id <id>            specify an id (required)
//!   -o, --out <out_filename> output filename
//!   -v                       be verbose
//!   -h, --help               show this help
//!
//! $ example01 -z
//! The following errors were found:
//! Required value for argument id not found.
//! Unknown option z.
//! No value for <in_filename> was provided.
//! Usage: example01 [options] <in_filename>
//! <truncated>
//! ```
//!
//! # Parsing
//! Tokens are matched in a single pass, left to right:
//! * `--name`, `--name=value`: long options.
//! * `-x`, `-x=value`: short options.
//! `-xyz` is shorthand for `-x -y -z`; only the final option of the group may take a value.
//! * An option declaring a `<value>` takes the next token as its value, unless that token begins with `-`.
//! * Everything else is a positional argument, named by its offset in the usage line.
//!
//! Parsing itself never fails.
//! Problems with the input (unknown options, missing values, missing or excess positional arguments) are reported by validation.
//! [`CliOpts::parse`] and [`CliOpts::run_tokens`] print these errors along with the help message, while [`CliOpts::evaluate`] leaves the decision to the program:
//! ```no_run
#![doc = include_str!("../demos/example02.rs")]
//! ```
//!
//! # Values
//! [`ArgumentValues`] addresses options by either their short or long name, and positional arguments by name.
//! Each lookup distinguishes between an absent option and a present flag:
//! ```
//! # use cliopts::*;
//! let values = get_opts("-l, --list list mode\n-o <file>", &["program", "--list"]).unwrap();
//! assert_eq!(values.get("l"), Lookup::NoValue);
//! assert_eq!(values.get("list"), Lookup::NoValue);
//! assert_eq!(values.get("o"), Lookup::Absent);
//! ```
//!
//! # Features
//! * `tracing_debug`: Emit debug logging for the token matching and help rendering (via [tracing](https://docs.rs/tracing/latest/tracing/)).
//! * `unit_test`: For features that help with unit testing.
pub use cliopts_core::*;
