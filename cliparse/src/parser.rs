//! Argument resolution engine.
//!
//! Consumes the token list and the target's schema, assigns fields through
//! the typed setter table and accumulates everything the caller needs to
//! know into a `ParseResult`. Resolution runs in two global phases over the
//! descriptors in declaration order: a name phase, then a position phase
//! for the descriptors the name phase left unbound. The phase split matters
//! because a name-bound flag consumes its value token before any positional
//! descriptor gets a chance to claim it.
//!
//! Nothing aborts mid-scan. Missing values and unconvertible strings are
//! recorded as messages and parsing carries on; `Err` is reserved for
//! schema mistakes detected before the first token is looked at.

use log::debug;

use crate::argument::{parse_bool_literal, validate_bindings, Binding, Setter};
use crate::error::Result;
use crate::token::{tokenize, Token, TokenKind};
use crate::Parsable;

// ---------------------------------------------------------------------------
// ParseResult -- the caller-visible outcome
// ---------------------------------------------------------------------------

/// Accumulated outcome of one parse call.
///
/// `successful` starts true and turns false on the first error message.
/// `show_help` is advisory: when set, callers normally render help and
/// treat the run as non-erroring, but messages are still computed so
/// nothing is lost by inspecting them.
#[derive(Debug, Clone)]
pub struct ParseResult {
    successful: bool,
    show_help: bool,
    messages: Vec<String>,
}

impl ParseResult {
    pub fn new() -> Self {
        ParseResult {
            successful: true,
            show_help: false,
            messages: Vec::new(),
        }
    }

    pub fn successful(&self) -> bool {
        self.successful
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
    }

    /// Messages in the order they were recorded.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn add_error_message(&mut self, message: impl Into<String>) {
        self.successful = false;
        self.messages.push(message.into());
    }
}

impl Default for ParseResult {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindState {
    /// No token matched and no default applied.
    Unbound,
    /// Field assigned, from a token or a default.
    Bound,
    /// A token matched but its value was missing or unconvertible.
    /// The descriptor was supplied, so no "required" message is added.
    Failed,
}

/// Parse `args` against `target`'s schema, assigning matched fields in
/// place and returning the accumulated result.
pub fn parse<T: Parsable>(target: &mut T, args: &[String]) -> Result<ParseResult> {
    let info = T::class_info();
    let bindings = T::bindings();
    validate_bindings(&bindings)?;

    let mut result = ParseResult::new();
    target.pre_parse(args, &mut result);
    if !result.successful() || result.show_help() {
        return Ok(result);
    }

    let mut tokens = tokenize(args, &info.allowed_prefixes);
    debug!(
        "resolving {} descriptors against {} tokens",
        bindings.len(),
        tokens.len()
    );

    let help_requested = tokens
        .iter()
        .any(|t| t.kind == TokenKind::Field && info.help_arguments.iter().any(|h| *h == t.value));
    if help_requested || (tokens.is_empty() && info.show_help_when_empty) {
        result.set_show_help(true);
    }

    let total = tokens.len();
    let mut states = vec![BindState::Unbound; bindings.len()];

    // Name phase.
    for (i, binding) in bindings.iter().enumerate() {
        if let Some(idx) = find_by_name(&tokens, binding) {
            states[i] = bind_token(target, binding, idx, &mut tokens, &mut result);
        }
    }

    // Position phase, for descriptors still unbound.
    for (i, binding) in bindings.iter().enumerate() {
        if states[i] != BindState::Unbound {
            continue;
        }
        if let Some(idx) = find_by_position(&tokens, binding.argument.implied_position, total) {
            states[i] = bind_token(target, binding, idx, &mut tokens, &mut result);
        }
    }

    // Defaults for whatever is left. Applying a default marks nothing taken.
    for (i, binding) in bindings.iter().enumerate() {
        if states[i] != BindState::Unbound {
            continue;
        }
        if let Some(default) = &binding.argument.default_value {
            binding.setter.apply_default(target, default);
            states[i] = BindState::Bound;
        }
    }

    // Help triggers are recognized input, not unknown arguments.
    for token in tokens.iter_mut() {
        if !token.taken
            && token.kind == TokenKind::Field
            && info.help_arguments.iter().any(|h| *h == token.value)
        {
            token.taken = true;
        }
    }

    // Post-resolution checks. These run even when help was requested;
    // callers decide whether show_help suppresses message display.
    for (i, binding) in bindings.iter().enumerate() {
        if states[i] == BindState::Unbound && binding.argument.required {
            result.add_error_message(format!(
                "Required argument '{}' was not supplied.",
                binding.argument.display_name()
            ));
        }
    }
    if !info.ignore_unknowns {
        for token in &tokens {
            if !token.taken {
                result.add_error_message(format!(
                    "Unknown argument '{}' was supplied.",
                    token.value
                ));
            }
        }
    }

    target.post_parse(args, &mut result);
    Ok(result)
}

/// First untaken Field token matching the descriptor's short name
/// (case-sensitive) or long name (ASCII case-insensitive).
fn find_by_name<T>(tokens: &[Token], binding: &Binding<T>) -> Option<usize> {
    let argument = &binding.argument;
    let short = argument.short_name.map(|c| c.to_string());

    tokens.iter().position(|t| {
        if t.taken || t.kind != TokenKind::Field {
            return false;
        }
        if let Some(short) = &short {
            if t.value == *short {
                return true;
            }
        }
        if let Some(long) = &argument.long_name {
            if long.eq_ignore_ascii_case(&t.value) {
                return true;
            }
        }
        false
    })
}

/// Untaken Value token at the descriptor's implied position. Positive
/// positions count from the start; negative positions from the end, so -1
/// is the token with `index == total`, -2 the one before it.
fn find_by_position(tokens: &[Token], implied_position: i32, total: usize) -> Option<usize> {
    if implied_position == 0 {
        return None;
    }
    let wanted = if implied_position > 0 {
        implied_position as i64
    } else {
        total as i64 + 1 + implied_position as i64
    };
    if wanted < 1 {
        return None;
    }
    tokens
        .iter()
        .position(|t| !t.taken && t.kind == TokenKind::Value && t.index as i64 == wanted)
}

/// Bind the descriptor to the token at `idx`, assigning the target field.
fn bind_token<T>(
    target: &mut T,
    binding: &Binding<T>,
    idx: usize,
    tokens: &mut [Token],
    result: &mut ParseResult,
) -> BindState {
    let name = binding.argument.display_name();

    match tokens[idx].kind {
        TokenKind::Field => {
            let following = next_untaken_value(tokens, tokens[idx].index);

            if binding.setter.is_flag() {
                // A following boolean literal is an explicit value; anything
                // else stays unconsumed and the flag alone means true.
                let explicit =
                    following.filter(|&j| parse_bool_literal(&tokens[j].value).is_some());
                match explicit {
                    Some(j) => {
                        let raw = tokens[j].value.clone();
                        binding.setter.apply_str(target, &raw);
                        tokens[idx].taken = true;
                        tokens[j].taken = true;
                    }
                    None => {
                        if let Setter::Flag(set) = binding.setter {
                            set(target, true);
                        }
                        tokens[idx].taken = true;
                    }
                }
                BindState::Bound
            } else {
                match following {
                    None => {
                        tokens[idx].taken = true;
                        result.add_error_message(format!(
                            "Missing value for argument '{}'.",
                            name
                        ));
                        BindState::Failed
                    }
                    Some(j) => {
                        let raw = tokens[j].value.clone();
                        tokens[idx].taken = true;
                        tokens[j].taken = true;
                        if binding.setter.apply_str(target, &raw) {
                            BindState::Bound
                        } else {
                            result.add_error_message(format!(
                                "Invalid value '{}' supplied for argument '{}'.",
                                raw, name
                            ));
                            BindState::Failed
                        }
                    }
                }
            }
        }
        TokenKind::Value => {
            let raw = tokens[idx].value.clone();
            tokens[idx].taken = true;
            if binding.setter.apply_str(target, &raw) {
                BindState::Bound
            } else {
                result.add_error_message(format!(
                    "Invalid value '{}' supplied for argument '{}'.",
                    raw, name
                ));
                BindState::Failed
            }
        }
    }
}

/// Untaken Value token directly after `index`, if any.
fn next_untaken_value(tokens: &[Token], index: usize) -> Option<usize> {
    tokens
        .iter()
        .position(|t| !t.taken && t.kind == TokenKind::Value && t.index == index + 1)
}
