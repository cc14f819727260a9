//! Example parsable targets for the cliparse integration tests.
//!
//! Each fixture models a consumer of the library: a plain struct plus a
//! `Parsable` implementation returning its descriptor table. The suites in
//! `tests/` drive them end to end through `split_command_line` and
//! `cli_parse`.

use cliparse::{Argument, Binding, ClassInfo, Parsable, Setter};

/// Small schema exercising the basic field shapes.
#[derive(Debug, Default)]
pub struct SimpleCli {
    pub field1: String,
    pub field2: String,
    pub defaulted_field: String,
    pub flag1: bool,
    pub field3: i64,
}

impl Parsable for SimpleCli {
    fn class_info() -> ClassInfo {
        ClassInfo::new("Simple CLI Test Class").description("This is a description.")
    }

    fn bindings() -> Vec<Binding<Self>> {
        vec![
            Binding::new(
                Argument::short_only('a'),
                Setter::Text(|t: &mut SimpleCli, v| t.field1 = v),
            ),
            Binding::new(
                Argument::new("Field2").short('b'),
                Setter::Text(|t: &mut SimpleCli, v| t.field2 = v),
            ),
            Binding::new(
                Argument::new("DefaultedField").short('c').default_val("defaultValue"),
                Setter::Text(|t: &mut SimpleCli, v| t.defaulted_field = v),
            ),
            Binding::new(
                Argument::new("Flag1").short('e'),
                Setter::Flag(|t: &mut SimpleCli, v| t.flag1 = v),
            ),
            Binding::new(
                Argument::new("Field3").short('f'),
                Setter::Int(|t: &mut SimpleCli, v| t.field3 = v),
            ),
        ]
    }
}

/// One required field, nothing else.
#[derive(Debug, Default)]
pub struct RequiredCli {
    pub required_field: String,
}

impl Parsable for RequiredCli {
    fn class_info() -> ClassInfo {
        ClassInfo::new("RequiredCli")
    }

    fn bindings() -> Vec<Binding<Self>> {
        vec![Binding::new(
            Argument::new("RequiredField").short('d').required(),
            Setter::Text(|t: &mut RequiredCli, v| t.required_field = v),
        )]
    }
}

/// Same schema as `RequiredCli` but with unknown arguments ignored.
#[derive(Debug, Default)]
pub struct IgnoreUnknownsCli {
    pub required_field: String,
}

impl Parsable for IgnoreUnknownsCli {
    fn class_info() -> ClassInfo {
        ClassInfo::new("IgnoreUnknowns").ignore_unknowns()
    }

    fn bindings() -> Vec<Binding<Self>> {
        vec![Binding::new(
            Argument::new("RequiredField").short('d').required(),
            Setter::Text(|t: &mut IgnoreUnknownsCli, v| t.required_field = v),
        )]
    }
}

/// The richer fixture used on help screens: positional, defaulted,
/// boolean, integer and nullable-integer arguments with descriptions.
#[derive(Debug, Default)]
pub struct ExampleCli {
    pub string_argument: String,
    pub bool_argument: bool,
    pub defaulted_argument: String,
    pub int_argument: i64,
    pub seed: Option<i64>,
}

impl Parsable for ExampleCli {
    fn class_info() -> ClassInfo {
        ClassInfo::new("Example CLI Parsable")
            .description("This is a description.")
            .footer_text("This is the footer text.")
    }

    fn bindings() -> Vec<Binding<Self>> {
        vec![
            Binding::new(
                Argument::new("stringArgument").short('s').position(1).required(),
                Setter::Text(|t: &mut ExampleCli, v| t.string_argument = v),
            ),
            Binding::new(
                Argument::new("boolArgument").short('b'),
                Setter::Flag(|t: &mut ExampleCli, v| t.bool_argument = v),
            ),
            Binding::new(
                Argument::new("defaultedArgument")
                    .short('d')
                    .default_val("defaultValue")
                    .example("'-d abc' sets the defaultedArgument field to 'abc'"),
                Setter::Text(|t: &mut ExampleCli, v| t.defaulted_argument = v),
            ),
            Binding::new(
                Argument::new("intArgument")
                    .short('i')
                    .default_val(43)
                    .description("Example description")
                    .example("use -i or --intArgument to supply values."),
                Setter::Int(|t: &mut ExampleCli, v| t.int_argument = v),
            ),
            Binding::new(
                Argument::new("seed")
                    .short('x')
                    .description("Seed for random generation. Absent means a random value."),
                Setter::OptionalInt(|t: &mut ExampleCli, v| t.seed = v),
            ),
        ]
    }
}

/// Git-flavored schema: one leading positional command, a handful of
/// flags, and three from-the-end positionals. Restricted to the `-`
/// prefix so paths like `/path/to/repository` stay positional.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GitCli {
    pub command: String,
    pub global_config_name: String,
    pub message: String,
    pub add_flag: bool,
    pub last_param: String,
    pub second_last_param: String,
    pub third_last_param: String,
    pub verbose: bool,
    pub create_branch: bool,
    pub delete_flag: bool,
    pub all_flag: bool,
    pub base_flag: bool,
    pub tags_flag: bool,
    pub hard_flag: bool,
}

impl Parsable for GitCli {
    fn class_info() -> ClassInfo {
        ClassInfo::new("git").allowed_prefixes(&['-'])
    }

    fn bindings() -> Vec<Binding<Self>> {
        vec![
            Binding::new(
                Argument::new("command").position(1).required(),
                Setter::Text(|t: &mut GitCli, v| t.command = v),
            ),
            Binding::new(
                Argument::new("global"),
                Setter::Text(|t: &mut GitCli, v| t.global_config_name = v),
            ),
            Binding::new(
                Argument::new("message").short('m'),
                Setter::Text(|t: &mut GitCli, v| t.message = v),
            ),
            Binding::new(
                Argument::new("add").short('a'),
                Setter::Flag(|t: &mut GitCli, v| t.add_flag = v),
            ),
            Binding::new(
                Argument::new("LastParam").position(-1),
                Setter::Text(|t: &mut GitCli, v| t.last_param = v),
            ),
            Binding::new(
                Argument::new("SecondLastParam").position(-2),
                Setter::Text(|t: &mut GitCli, v| t.second_last_param = v),
            ),
            Binding::new(
                Argument::new("ThirdLastParam").position(-3),
                Setter::Text(|t: &mut GitCli, v| t.third_last_param = v),
            ),
            Binding::new(
                Argument::new("verbose").short('v'),
                Setter::Flag(|t: &mut GitCli, v| t.verbose = v),
            ),
            Binding::new(
                Argument::new("createbranch").short('b'),
                Setter::Flag(|t: &mut GitCli, v| t.create_branch = v),
            ),
            Binding::new(
                Argument::new("delete").short('d'),
                Setter::Flag(|t: &mut GitCli, v| t.delete_flag = v),
            ),
            Binding::new(
                Argument::new("all").short('A'),
                Setter::Flag(|t: &mut GitCli, v| t.all_flag = v),
            ),
            Binding::new(
                Argument::new("base"),
                Setter::Flag(|t: &mut GitCli, v| t.base_flag = v),
            ),
            Binding::new(
                Argument::new("tags"),
                Setter::Flag(|t: &mut GitCli, v| t.tags_flag = v),
            ),
            Binding::new(
                Argument::new("hard"),
                Setter::Flag(|t: &mut GitCli, v| t.hard_flag = v),
            ),
        ]
    }
}
