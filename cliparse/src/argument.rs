//! Argument descriptors and the typed setter table.
//!
//! A descriptor says how one field can be supplied (names, implied
//! position, default, required flag) plus its help text. A `Binding` pairs
//! a descriptor with a typed setter so the engine can assign the field
//! directly, without any string-keyed lookup on the target.

use std::fmt;

use crate::error::{CliParseError, Result};

// ---------------------------------------------------------------------------
// ArgValue -- typed default values
// ---------------------------------------------------------------------------

/// A typed value carried by a descriptor's default.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Bool(b) => write!(f, "{}", b),
            ArgValue::Int(n) => write!(f, "{}", n),
            ArgValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Conversion into `ArgValue` for the `default_val` builder method.
pub trait IntoArgValue {
    fn into_arg_value(self) -> ArgValue;
}

impl IntoArgValue for bool {
    fn into_arg_value(self) -> ArgValue {
        ArgValue::Bool(self)
    }
}

impl IntoArgValue for i64 {
    fn into_arg_value(self) -> ArgValue {
        ArgValue::Int(self)
    }
}

impl IntoArgValue for i32 {
    fn into_arg_value(self) -> ArgValue {
        ArgValue::Int(self as i64)
    }
}

impl IntoArgValue for &str {
    fn into_arg_value(self) -> ArgValue {
        ArgValue::Text(self.to_string())
    }
}

impl IntoArgValue for String {
    fn into_arg_value(self) -> ArgValue {
        ArgValue::Text(self)
    }
}

// ---------------------------------------------------------------------------
// Argument -- one descriptor
// ---------------------------------------------------------------------------

/// Immutable metadata describing one bindable field.
#[derive(Debug, Clone)]
pub struct Argument {
    pub(crate) long_name: Option<String>,
    pub(crate) short_name: Option<char>,
    /// 0 disables positional matching; positive counts from the start,
    /// negative from the end of the token sequence.
    pub(crate) implied_position: i32,
    pub(crate) default_value: Option<ArgValue>,
    pub(crate) required: bool,
    pub(crate) description: Option<String>,
    pub(crate) example: Option<String>,
}

impl Argument {
    /// Create a descriptor with a long name.
    pub fn new(long_name: &str) -> Self {
        Argument {
            long_name: Some(long_name.to_string()),
            short_name: None,
            implied_position: 0,
            default_value: None,
            required: false,
            description: None,
            example: None,
        }
    }

    /// Create a descriptor matched only by its short name.
    pub fn short_only(short_name: char) -> Self {
        Argument {
            long_name: None,
            short_name: Some(short_name),
            implied_position: 0,
            default_value: None,
            required: false,
            description: None,
            example: None,
        }
    }

    pub fn short(mut self, c: char) -> Self {
        self.short_name = Some(c);
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.implied_position = position;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_val<V: IntoArgValue>(mut self, value: V) -> Self {
        self.default_value = Some(value.into_arg_value());
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn example(mut self, text: &str) -> Self {
        self.example = Some(text.to_string());
        self
    }

    /// Name used in messages: the long name, falling back to the short one.
    pub fn display_name(&self) -> String {
        match (&self.long_name, self.short_name) {
            (Some(name), _) => name.clone(),
            (None, Some(c)) => c.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Render this descriptor's help block by substituting the
    /// `{name}`, `{shortname}`, `{description}`, `{required}`,
    /// `{defaultvalue}` and `{example}` placeholders.
    pub fn syntax(&self, template: &str, prefix: char) -> String {
        let long = match &self.long_name {
            Some(name) => format!("{}{}{}", prefix, prefix, name),
            None => String::new(),
        };
        let short = match self.short_name {
            Some(c) => format!("{}{}", prefix, c),
            None => String::new(),
        };
        let default = match &self.default_value {
            Some(v) => v.to_string(),
            None => String::new(),
        };

        template
            .replace("{name}", &long)
            .replace("{shortname}", &short)
            .replace("{description}", self.description.as_deref().unwrap_or(""))
            .replace("{required}", if self.required { "Required" } else { "[Optional]" })
            .replace("{defaultvalue}", &default)
            .replace("{example}", self.example.as_deref().unwrap_or(""))
    }
}

// ---------------------------------------------------------------------------
// Setter -- typed field assignment
// ---------------------------------------------------------------------------

/// Typed setter applied when a descriptor binds.
///
/// The variant fixes the field's type: `Flag` for booleans (presence alone
/// means true), `Int` for integers, `OptionalInt` for fields where absence
/// is a valid final state distinct from zero, `Text` for strings.
pub enum Setter<T> {
    Flag(fn(&mut T, bool)),
    Int(fn(&mut T, i64)),
    OptionalInt(fn(&mut T, Option<i64>)),
    Text(fn(&mut T, String)),
}

impl<T> Clone for Setter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Setter<T> {}

impl<T> Setter<T> {
    pub(crate) fn is_flag(&self) -> bool {
        matches!(self, Setter::Flag(_))
    }

    /// Convert `raw` to the field's type and assign it.
    /// Returns false when the string does not convert.
    pub(crate) fn apply_str(&self, target: &mut T, raw: &str) -> bool {
        match self {
            Setter::Flag(set) => match parse_bool_literal(raw) {
                Some(b) => {
                    set(target, b);
                    true
                }
                None => false,
            },
            Setter::Int(set) => match raw.trim().parse() {
                Ok(n) => {
                    set(target, n);
                    true
                }
                Err(_) => false,
            },
            Setter::OptionalInt(set) => match raw.trim().parse() {
                Ok(n) => {
                    set(target, Some(n));
                    true
                }
                Err(_) => false,
            },
            Setter::Text(set) => {
                set(target, raw.to_string());
                true
            }
        }
    }

    /// Assign a descriptor default. The value's shape was checked by
    /// `validate_bindings`, so a mismatch here cannot happen.
    pub(crate) fn apply_default(&self, target: &mut T, default: &ArgValue) {
        match (self, default) {
            (Setter::Flag(set), ArgValue::Bool(b)) => set(target, *b),
            (Setter::Int(set), ArgValue::Int(n)) => set(target, *n),
            (Setter::OptionalInt(set), ArgValue::Int(n)) => set(target, Some(*n)),
            (Setter::Text(set), ArgValue::Text(s)) => set(target, s.clone()),
            _ => debug_assert!(false, "default value shape checked at validation"),
        }
    }

    fn accepts_default(&self, default: &ArgValue) -> bool {
        matches!(
            (self, default),
            (Setter::Flag(_), ArgValue::Bool(_))
                | (Setter::Int(_), ArgValue::Int(_))
                | (Setter::OptionalInt(_), ArgValue::Int(_))
                | (Setter::Text(_), ArgValue::Text(_))
        )
    }
}

/// `true`/`false`, ASCII case-insensitive. Anything else is not a boolean
/// literal; a flag followed by such a token keeps its bare meaning.
pub(crate) fn parse_bool_literal(raw: &str) -> Option<bool> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Binding -- descriptor plus setter
// ---------------------------------------------------------------------------

/// One row of a target's schema: the descriptor and its setter.
pub struct Binding<T> {
    pub(crate) argument: Argument,
    pub(crate) setter: Setter<T>,
}

impl<T> Binding<T> {
    pub fn new(argument: Argument, setter: Setter<T>) -> Self {
        Binding { argument, setter }
    }

    pub fn argument(&self) -> &Argument {
        &self.argument
    }
}

/// Reject schemas the engine cannot honor, before any token is examined.
pub(crate) fn validate_bindings<T>(bindings: &[Binding<T>]) -> Result<()> {
    if bindings.is_empty() {
        return Err(CliParseError::EmptySchema);
    }
    for binding in bindings {
        let argument = &binding.argument;
        if let Some(default) = &argument.default_value {
            if argument.required {
                return Err(CliParseError::RequiredWithDefault(argument.display_name()));
            }
            if !binding.setter.accepts_default(default) {
                return Err(CliParseError::DefaultTypeMismatch(argument.display_name()));
            }
        }
    }
    Ok(())
}
