//! Help screen rendering.
//!
//! Builds the help text by placeholder substitution: a class template
//! carries `{title}`, `{version}`, `{copyright}`, `{description}`,
//! `{syntax}`, `{example}` and `{footer}`; each argument renders into the
//! `{syntax}` block through its own template. The assembled text is passed
//! through the wrapper at the default screen width.

use crate::argument::Binding;
use crate::error::Result;
use crate::wrap::{format_text_for_screen, DEFAULT_SCREEN_WIDTH};
use crate::Parsable;

/// Class-level template used when the caller does not provide one.
pub const DEFAULT_TEMPLATE: &str = "{title} {version}
{copyright}
Description:
    {description}
Syntax:
{syntax}
{example}
{footer}
";

/// Per-argument template used when the caller does not provide one.
pub const DEFAULT_ARGUMENT_TEMPLATE: &str = "    {name}, {shortname}
        {description}
        {required}, Default:'{defaultvalue}'
        {example}";

/// Render the help screen for `T` with the default templates.
pub fn help_info<T: Parsable>() -> Result<String> {
    help_info_with_templates::<T>(DEFAULT_TEMPLATE, DEFAULT_ARGUMENT_TEMPLATE)
}

/// Render the help screen for `T` wrapped at a caller-chosen line width.
pub fn help_info_at_width<T: Parsable>(max_line_length: usize) -> Result<String> {
    render::<T>(DEFAULT_TEMPLATE, DEFAULT_ARGUMENT_TEMPLATE, max_line_length)
}

/// Render the help screen for `T` with caller-supplied templates.
pub fn help_info_with_templates<T: Parsable>(
    template: &str,
    argument_template: &str,
) -> Result<String> {
    render::<T>(template, argument_template, DEFAULT_SCREEN_WIDTH)
}

fn render<T: Parsable>(
    template: &str,
    argument_template: &str,
    max_line_length: usize,
) -> Result<String> {
    let info = T::class_info();
    let bindings = T::bindings();
    let prefix = info.allowed_prefixes.first().copied().unwrap_or('-');

    let copyright = if info.copyright.is_empty() {
        String::new()
    } else {
        format!("Copyright (C) {}", info.copyright)
    };
    let syntax = render_syntax(&bindings, argument_template, prefix, &info.allowed_prefixes);

    let filled = template
        .replace("{title}", &info.title)
        .replace("{version}", &info.version)
        .replace("{copyright}", &copyright)
        .replace("{description}", &info.description)
        .replace("{syntax}", &syntax)
        .replace("{example}", &info.example_text)
        .replace("{footer}", &info.footer_text);

    format_text_for_screen(filled.trim(), max_line_length)
}

/// The `{syntax}` block on its own: the allowed-prefix line followed by one
/// rendered template per argument, in declaration order.
pub fn syntax_info<T: Parsable>(argument_template: &str) -> String {
    let info = T::class_info();
    let prefix = info.allowed_prefixes.first().copied().unwrap_or('-');
    render_syntax(
        &T::bindings(),
        argument_template,
        prefix,
        &info.allowed_prefixes,
    )
}

fn render_syntax<T>(
    bindings: &[Binding<T>],
    argument_template: &str,
    prefix: char,
    prefixes: &[char],
) -> String {
    let listed: Vec<String> = prefixes.iter().map(|c| format!("'{}'", c)).collect();
    let mut out = format!(
        "The following argument prefix characters can be used: {}\n",
        listed.join(",")
    );
    for binding in bindings {
        out.push_str(&binding.argument().syntax(argument_template, prefix));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::{Argument, Setter};
    use crate::class_info::ClassInfo;

    #[derive(Default)]
    #[allow(dead_code)]
    struct ExampleCli {
        string_argument: String,
        int_argument: i64,
    }

    impl Parsable for ExampleCli {
        fn class_info() -> ClassInfo {
            ClassInfo::new("Example CLI Parsable")
                .description("This is a description.")
                .version("1.0")
                .copyright("The Authors 2015")
                .footer_text("This is the footer text.")
        }

        fn bindings() -> Vec<Binding<Self>> {
            vec![
                Binding::new(
                    Argument::new("stringArgument").short('s').position(1).required(),
                    Setter::Text(|t: &mut ExampleCli, v| t.string_argument = v),
                ),
                Binding::new(
                    Argument::new("intArgument")
                        .short('i')
                        .default_val(43)
                        .description("Example description")
                        .example("use -i or --intArgument to supply values."),
                    Setter::Int(|t: &mut ExampleCli, v| t.int_argument = v),
                ),
            ]
        }
    }

    #[test]
    fn renders_class_metadata() {
        let text = help_info::<ExampleCli>().unwrap();
        assert!(text.contains("Example CLI Parsable 1.0"));
        assert!(text.contains("Copyright (C) The Authors 2015"));
        assert!(text.contains("This is a description."));
        assert!(text.contains("This is the footer text."));
    }

    #[test]
    fn renders_argument_lines() {
        let text = help_info::<ExampleCli>().unwrap();
        assert!(text.contains("--stringArgument, -s"));
        assert!(text.contains("Required"));
        assert!(text.contains("--intArgument, -i"));
        assert!(text.contains("[Optional], Default:'43'"));
        assert!(text.contains("Example description"));
    }

    #[test]
    fn syntax_block_names_the_prefix_characters() {
        let syntax = syntax_info::<ExampleCli>(DEFAULT_ARGUMENT_TEMPLATE);
        assert!(syntax
            .starts_with("The following argument prefix characters can be used: '-','/'"));
    }

    #[test]
    fn custom_templates_are_honored() {
        let text =
            help_info_with_templates::<ExampleCli>("usage: {title}\n{syntax}", "{name}").unwrap();
        assert!(text.starts_with("usage: Example CLI Parsable"));
        assert!(text.contains("--intArgument"));
        assert!(!text.contains("{name}"));
    }

    #[test]
    fn narrower_widths_are_honored() {
        let text = help_info_at_width::<ExampleCli>(40).unwrap();
        for line in text.split('\n') {
            assert!(line.chars().count() <= 40, "line too long: {:?}", line);
        }
    }

    #[test]
    fn output_is_wrapped_to_the_screen_width() {
        #[derive(Default)]
        #[allow(dead_code)]
        struct WordyCli {
            field: String,
        }
        impl Parsable for WordyCli {
            fn class_info() -> ClassInfo {
                ClassInfo::new("wordy").description(
                    "A deliberately wordy description that keeps going well past the \
                     eighty character screen width so that the renderer has to wrap it \
                     onto several lines before anyone can read it comfortably.",
                )
            }
            fn bindings() -> Vec<Binding<Self>> {
                vec![Binding::new(
                    Argument::new("field"),
                    Setter::Text(|t: &mut WordyCli, v| t.field = v),
                )]
            }
        }

        let text = help_info::<WordyCli>().unwrap();
        for line in text.split('\n') {
            assert!(line.chars().count() <= DEFAULT_SCREEN_WIDTH, "line too long: {:?}", line);
        }
    }
}
