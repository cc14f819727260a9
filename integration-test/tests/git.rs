//! Git-style command lines parsed end to end.
//!
//! Each case is a raw command line and the field values it should produce
//! on the `GitCli` fixture: leading positional command, boolean flags,
//! value-taking flags, and from-the-end positionals all mixed together.

use cliparse::{split_command_line, ParsableExt};
use test_driver::GitCli;

fn check(command_line: &str, expected: GitCli) {
    let args = split_command_line(command_line).unwrap();
    let mut actual = GitCli::default();
    let result = actual.cli_parse(&args).unwrap();

    assert!(
        result.successful(),
        "{}: {:?}",
        command_line,
        result.messages()
    );
    assert!(!result.show_help(), "{}", command_line);
    assert!(result.messages().is_empty(), "{}", command_line);
    assert_eq!(actual, expected, "{}", command_line);
}

fn git(command: &str) -> GitCli {
    GitCli {
        command: command.to_string(),
        ..GitCli::default()
    }
}

#[test]
fn bare_commands() {
    for name in ["add", "branch", "checkout", "clone", "commit", "init", "log", "pull", "push", "status", "tag"] {
        check(name, git(name));
    }
}

#[test]
fn add_takes_a_trailing_filename() {
    check(
        "add <filename>",
        GitCli {
            last_param: "<filename>".into(),
            ..git("add")
        },
    );
    check(
        "add *",
        GitCli {
            last_param: "*".into(),
            ..git("add")
        },
    );
}

#[test]
fn branch_delete_flag_with_name() {
    check(
        "branch -d <branchname>",
        GitCli {
            delete_flag: true,
            last_param: "<branchname>".into(),
            ..git("branch")
        },
    );
}

#[test]
fn checkout_variants() {
    check(
        "checkout -b <branchname>",
        GitCli {
            create_branch: true,
            last_param: "<branchname>".into(),
            ..git("checkout")
        },
    );
    check(
        "checkout branch",
        GitCli {
            last_param: "branch".into(),
            ..git("checkout")
        },
    );
    // "--" carries no name characters, so it stays a positional value.
    check(
        "checkout -- <filename>",
        GitCli {
            second_last_param: "--".into(),
            last_param: "<filename>".into(),
            ..git("checkout")
        },
    );
}

#[test]
fn clone_paths_stay_positional() {
    check(
        "clone /path/to/repository",
        GitCli {
            last_param: "/path/to/repository".into(),
            ..git("clone")
        },
    );
    check(
        "clone username@host:/path/to/repository",
        GitCli {
            last_param: "username@host:/path/to/repository".into(),
            ..git("clone")
        },
    );
}

#[test]
fn commit_message_and_bundled_flags() {
    check(
        "commit -m \"commit message\"",
        GitCli {
            message: "commit message".into(),
            ..git("commit")
        },
    );
    check(
        "commit -a",
        GitCli {
            add_flag: true,
            ..git("commit")
        },
    );
    // The bundled cluster expands to two flags; the quoted message binds
    // to the second one.
    check(
        "commit -am \"commit message\"",
        GitCli {
            add_flag: true,
            message: "commit message".into(),
            ..git("commit")
        },
    );
}

#[test]
fn config_global_keeps_value_and_tail() {
    check(
        "config --global user.name \"Sam Smith\"",
        GitCli {
            global_config_name: "user.name".into(),
            last_param: "Sam Smith".into(),
            ..git("config")
        },
    );
    check(
        "config --global user.email sam@example.com",
        GitCli {
            global_config_name: "user.email".into(),
            last_param: "sam@example.com".into(),
            ..git("config")
        },
    );
}

#[test]
fn diff_variants() {
    check(
        "diff --base <filename>",
        GitCli {
            base_flag: true,
            last_param: "<filename>".into(),
            ..git("diff")
        },
    );
    check(
        "diff <sourcebranch> <targetbranch>",
        GitCli {
            second_last_param: "<sourcebranch>".into(),
            last_param: "<targetbranch>".into(),
            ..git("diff")
        },
    );
}

#[test]
fn fetch_grep_merge_take_one_positional() {
    check(
        "fetch origin",
        GitCli {
            last_param: "origin".into(),
            ..git("fetch")
        },
    );
    check(
        "grep \"foo()\"",
        GitCli {
            last_param: "foo()".into(),
            ..git("grep")
        },
    );
    check(
        "merge <branchname>",
        GitCli {
            last_param: "<branchname>".into(),
            ..git("merge")
        },
    );
}

#[test]
fn push_variants() {
    check(
        "push origin master",
        GitCli {
            second_last_param: "origin".into(),
            last_param: "master".into(),
            ..git("push")
        },
    );
    check(
        "push --all origin",
        GitCli {
            all_flag: true,
            last_param: "origin".into(),
            ..git("push")
        },
    );
    check(
        "push origin :<branchname>",
        GitCli {
            second_last_param: "origin".into(),
            last_param: ":<branchname>".into(),
            ..git("push")
        },
    );
    check(
        "push --tags origin",
        GitCli {
            tags_flag: true,
            last_param: "origin".into(),
            ..git("push")
        },
    );
}

#[test]
fn remote_fills_three_trailing_positions() {
    check(
        "remote add origin <server>",
        GitCli {
            third_last_param: "add".into(),
            second_last_param: "origin".into(),
            last_param: "<server>".into(),
            ..git("remote")
        },
    );
    check(
        "remote -v",
        GitCli {
            verbose: true,
            ..git("remote")
        },
    );
}

#[test]
fn reset_hard_and_tag_pair() {
    check(
        "reset --hard origin/master",
        GitCli {
            hard_flag: true,
            last_param: "origin/master".into(),
            ..git("reset")
        },
    );
    check(
        "tag 1.0.0 <commitID>",
        GitCli {
            second_last_param: "1.0.0".into(),
            last_param: "<commitID>".into(),
            ..git("tag")
        },
    );
}
