//! Help-screen rendering against the fixture schemas.

use cliparse::{
    syntax_info, ParsableExt, DEFAULT_ARGUMENT_TEMPLATE, DEFAULT_SCREEN_WIDTH,
};
use test_driver::ExampleCli;

#[test]
fn help_screen_carries_class_metadata() {
    let cli = ExampleCli::default();
    let text = cli.help_info().unwrap();
    assert!(text.contains("Example CLI Parsable"));
    assert!(text.contains("This is a description."));
    assert!(text.contains("This is the footer text."));
}

#[test]
fn help_screen_lists_every_argument() {
    let cli = ExampleCli::default();
    let text = cli.help_info().unwrap();
    assert!(text.contains("--stringArgument, -s"));
    assert!(text.contains("--boolArgument, -b"));
    assert!(text.contains("--defaultedArgument, -d"));
    assert!(text.contains("--intArgument, -i"));
    assert!(text.contains("--seed, -x"));
}

#[test]
fn help_screen_shows_required_and_defaults() {
    let cli = ExampleCli::default();
    let text = cli.help_info().unwrap();
    assert!(text.contains("Required"));
    assert!(text.contains("Default:'defaultValue'"));
    assert!(text.contains("Default:'43'"));
    assert!(text.contains("use -i or --intArgument to supply values."));
}

#[test]
fn syntax_block_starts_with_the_prefix_line() {
    let syntax = syntax_info::<ExampleCli>(DEFAULT_ARGUMENT_TEMPLATE);
    assert!(syntax.starts_with("The following argument prefix characters can be used: '-','/'"));
}

#[test]
fn help_screen_respects_the_screen_width() {
    let cli = ExampleCli::default();
    let text = cli.help_info().unwrap();
    for line in text.split('\n') {
        assert!(
            line.chars().count() <= DEFAULT_SCREEN_WIDTH,
            "line too long: {:?}",
            line
        );
    }
}

#[test]
fn custom_templates_replace_the_defaults() {
    let cli = ExampleCli::default();
    let text = cli
        .help_info_with_templates("usage: {title}\n{syntax}", "{name} ({required})")
        .unwrap();
    assert!(text.starts_with("usage: Example CLI Parsable"));
    assert!(text.contains("--stringArgument (Required)"));
    assert!(text.contains("--seed ([Optional])"));
}
