//! Argument tokenization.
//!
//! Turns a pre-split argument vector into an ordered list of typed tokens.
//! Arguments introduced by a single prefix character are short-flag clusters
//! and expand into one Field token per character; a doubled (or longer)
//! prefix run introduces a single long-form Field token; everything else is
//! a Value token. Indices are 1-based and assigned per *output* token, so a
//! cluster like `-am` occupies two consecutive indices.

use log::trace;

use crate::error::{CliParseError, Result};

/// Prefix characters recognized when the schema does not override them.
pub const DEFAULT_PREFIXES: [char; 2] = ['-', '/'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A named flag or option key, stripped of its prefix run.
    Field,
    /// Positional or flag-following data, kept verbatim.
    Value,
}

#[derive(Debug, Clone)]
pub struct Token {
    /// 1-based position in the token sequence, stable for the whole parse.
    pub index: usize,
    pub kind: TokenKind,
    pub value: String,
    /// Set exactly once, when the token is bound to a descriptor.
    pub taken: bool,
}

impl Token {
    fn new(index: usize, kind: TokenKind, value: String) -> Self {
        Token {
            index,
            kind,
            value,
            taken: false,
        }
    }
}

/// Scan `args` left to right and produce the token sequence.
///
/// An argument made up entirely of prefix characters (`-`, `--`, `//`)
/// carries no identifying characters and is kept as a Value token.
pub fn tokenize(args: &[String], prefixes: &[char]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(args.len());
    let mut index = 0;

    for arg in args {
        let prefix_len = arg.chars().take_while(|c| prefixes.contains(c)).count();
        let char_len = arg.chars().count();

        if prefix_len == 0 || prefix_len == char_len {
            index += 1;
            tokens.push(Token::new(index, TokenKind::Value, arg.clone()));
        } else if prefix_len == 1 {
            // Short-flag cluster: one Field token per character.
            for c in arg.chars().skip(1) {
                index += 1;
                tokens.push(Token::new(index, TokenKind::Field, c.to_string()));
            }
        } else {
            index += 1;
            let name: String = arg.chars().skip(prefix_len).collect();
            tokens.push(Token::new(index, TokenKind::Field, name));
        }
    }

    trace!("tokenized {} arguments into {} tokens", args.len(), tokens.len());
    tokens
}

/// Split a raw command line into arguments.
///
/// Handles single and double quoting and backslash escaping. Quoted values
/// become single arguments regardless of embedded whitespace. Intended for
/// tests and embedders; the parsing engine itself takes a pre-split slice.
pub fn split_command_line(line: &str) -> Result<Vec<String>> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            if c == q {
                quote = None;
            } else if c == '\\' {
                match chars.next() {
                    None => return Err(CliParseError::UnbalancedQuote),
                    Some(next) => {
                        if next != q {
                            current.push('\\');
                        }
                        current.push(next);
                    }
                }
            } else {
                current.push(c);
            }
        } else if c.is_ascii_whitespace() {
            if !current.is_empty() {
                args.push(std::mem::take(&mut current));
            }
        } else {
            match c {
                '"' | '\'' => quote = Some(c),
                '\\' => match chars.next() {
                    None => return Err(CliParseError::UnbalancedQuote),
                    Some(next) => current.push(next),
                },
                _ => current.push(c),
            }
        }
    }

    if quote.is_some() {
        return Err(CliParseError::UnbalancedQuote);
    }
    if !current.is_empty() {
        args.push(current);
    }

    Ok(args)
}
