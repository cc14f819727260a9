//! Declarative command-line argument parsing.
//!
//! Consumers describe a plain struct's fields with argument descriptors and
//! hand the raw argument vector to the engine, which fills the fields in
//! and reports anything wrong as plain messages:
//! - `Argument` builders declare names, implied positions, defaults,
//!   required flags and help text; `Binding` pairs each descriptor with a
//!   typed setter so fields are assigned directly, never through
//!   string-keyed lookup
//! - `ClassInfo` carries the target-wide attributes: help-screen text,
//!   recognized prefix characters, help triggers, unknown-argument policy
//! - `parse` tokenizes, resolves by name first and implied position second,
//!   applies defaults, and accumulates problems into a `ParseResult`
//!   instead of aborting mid-scan
//! - `help_info` renders a formatted help screen from the same metadata,
//!   word-wrapped to the screen width

pub mod argument;
pub mod class_info;
pub mod error;
pub mod help;
pub mod parser;
pub mod token;
pub mod wrap;

pub use argument::{ArgValue, Argument, Binding, IntoArgValue, Setter};
pub use class_info::{ClassInfo, DEFAULT_HELP_ARGUMENTS};
pub use error::{CliParseError, Result};
pub use help::{
    help_info, help_info_at_width, help_info_with_templates, syntax_info,
    DEFAULT_ARGUMENT_TEMPLATE, DEFAULT_TEMPLATE,
};
pub use parser::{parse, ParseResult};
pub use token::{split_command_line, tokenize, Token, TokenKind, DEFAULT_PREFIXES};
pub use wrap::{break_string_to_length, format_text_for_screen, DEFAULT_SCREEN_WIDTH};

/// A type whose fields can be populated from command-line arguments.
///
/// `bindings` returns the schema in declaration order; order matters, both
/// for token contention between descriptors and for help rendering.
/// `class_info` defaults to an untitled schema with the standard prefixes
/// and help triggers. The two hooks run around resolution: if `pre_parse`
/// fails the result or requests help, resolution is skipped entirely.
pub trait Parsable {
    fn class_info() -> ClassInfo {
        ClassInfo::default()
    }

    fn bindings() -> Vec<Binding<Self>>
    where
        Self: Sized;

    fn pre_parse(&mut self, _args: &[String], _result: &mut ParseResult) {}

    fn post_parse(&mut self, _args: &[String], _result: &mut ParseResult) {}
}

/// Method-call convenience over the free functions.
pub trait ParsableExt: Parsable + Sized {
    /// Parse `args` into `self`, assigning matched fields in place.
    fn cli_parse(&mut self, args: &[String]) -> Result<ParseResult> {
        parser::parse(self, args)
    }

    /// Render the help screen with the default templates.
    fn help_info(&self) -> Result<String> {
        help::help_info::<Self>()
    }

    /// Render the help screen with caller-supplied templates.
    fn help_info_with_templates(
        &self,
        template: &str,
        argument_template: &str,
    ) -> Result<String> {
        help::help_info_with_templates::<Self>(template, argument_template)
    }
}

impl<T: Parsable> ParsableExt for T {}
