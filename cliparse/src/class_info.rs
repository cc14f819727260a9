//! Class-level schema attributes.
//!
//! Everything about a target type that is not tied to a single field:
//! help-screen text, the recognized prefix characters, the help-trigger
//! literals, and the unknown-argument and empty-invocation policies. All of
//! it is explicit state handed to the engine at call time; there are no
//! module-level defaults to override.

use crate::token::DEFAULT_PREFIXES;

/// Help-trigger literals recognized when the schema does not override them.
pub const DEFAULT_HELP_ARGUMENTS: [&str; 2] = ["help", "?"];

#[derive(Debug, Clone)]
pub struct ClassInfo {
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) version: String,
    pub(crate) copyright: String,
    pub(crate) example_text: String,
    pub(crate) footer_text: String,
    pub(crate) allowed_prefixes: Vec<char>,
    pub(crate) help_arguments: Vec<String>,
    pub(crate) ignore_unknowns: bool,
    pub(crate) show_help_when_empty: bool,
}

impl ClassInfo {
    pub fn new(title: &str) -> Self {
        ClassInfo {
            title: title.to_string(),
            description: String::new(),
            version: String::new(),
            copyright: String::new(),
            example_text: String::new(),
            footer_text: String::new(),
            allowed_prefixes: DEFAULT_PREFIXES.to_vec(),
            help_arguments: DEFAULT_HELP_ARGUMENTS.iter().map(|s| s.to_string()).collect(),
            ignore_unknowns: false,
            show_help_when_empty: true,
        }
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = text.to_string();
        self
    }

    pub fn version(mut self, text: &str) -> Self {
        self.version = text.to_string();
        self
    }

    pub fn copyright(mut self, text: &str) -> Self {
        self.copyright = text.to_string();
        self
    }

    pub fn example_text(mut self, text: &str) -> Self {
        self.example_text = text.to_string();
        self
    }

    pub fn footer_text(mut self, text: &str) -> Self {
        self.footer_text = text.to_string();
        self
    }

    pub fn allowed_prefixes(mut self, prefixes: &[char]) -> Self {
        self.allowed_prefixes = prefixes.to_vec();
        self
    }

    pub fn help_arguments(mut self, literals: &[&str]) -> Self {
        self.help_arguments = literals.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn ignore_unknowns(mut self) -> Self {
        self.ignore_unknowns = true;
        self
    }

    pub fn show_help_when_empty(mut self, show: bool) -> Self {
        self.show_help_when_empty = show;
        self
    }
}

impl Default for ClassInfo {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_both_prefixes_and_help_literals() {
        let info = ClassInfo::new("tool");
        assert_eq!(info.allowed_prefixes, vec!['-', '/']);
        assert_eq!(info.help_arguments, vec!["help", "?"]);
        assert!(info.show_help_when_empty);
        assert!(!info.ignore_unknowns);
    }

    #[test]
    fn builder_overrides_stick() {
        let info = ClassInfo::new("tool")
            .allowed_prefixes(&['-'])
            .help_arguments(&["assist"])
            .ignore_unknowns()
            .show_help_when_empty(false);
        assert_eq!(info.allowed_prefixes, vec!['-']);
        assert_eq!(info.help_arguments, vec!["assist"]);
        assert!(info.ignore_unknowns);
        assert!(!info.show_help_when_empty);
    }
}
