//! Metadata extraction from clap command trees.

#![expect(clippy::expect_used, reason = "test panics are acceptable")]

use clap::{Arg, ArgAction, Command};
use rstest::{fixture, rstest};

use super::*;
use crate::generate_cli_docs;
use crate::test_support::doc_names;

#[fixture]
fn tree() -> Command {
    Command::new("linkerd")
        .about("linkerd manages the Linkerd service mesh")
        .subcommand_required(true)
        .arg(
            Arg::new("linkerd-namespace")
                .long("linkerd-namespace")
                .short('L')
                .global(true)
                .default_value("linkerd")
                .help("Namespace in which Linkerd is installed"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Turn on debug logging"),
        )
        .subcommand(Command::new("install").about("Output Kubernetes configs to install Linkerd"))
        .subcommand(
            Command::new("check")
                .about("Check the Linkerd installation for potential problems")
                .long_about("Check the Linkerd installation for potential problems.")
                .after_help("  linkerd check")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .default_value("table")
                        .help("Output format"),
                )
                .arg(Arg::new("pre").long("pre").action(ArgAction::SetTrue))
                .arg(Arg::new("debug-dump").long("debug-dump").hide(true))
                .arg(Arg::new("target").help("positional arguments are not flags"))
                .subcommand(Command::new("config").about("Check the Linkerd configuration")),
        )
        .subcommand(Command::new("doc").hide(true).about("Generate YAML documentation"))
}

fn find<'a>(nodes: &'a [ClapNode<'a>], name: &str) -> &'a ClapNode<'a> {
    nodes
        .iter()
        .find(|node| node.name() == name)
        .expect("child exists")
}

#[rstest]
fn documents_tree_alphabetically_children_first(tree: Command) {
    let docs = generate_cli_docs(&ClapNode::root(&tree)).expect("walk succeeds");

    assert_eq!(doc_names(&docs), ["check config", "check", "install"]);
}

#[rstest]
fn children_carry_full_command_paths(tree: Command) {
    let root = ClapNode::root(&tree);
    let children = root.children().expect("children");
    let check = find(&children, "check");
    let grandchildren = check.children().expect("grandchildren");

    assert_eq!(check.command_path(), "linkerd check");
    assert_eq!(find(&grandchildren, "config").command_path(), "linkerd check config");
}

#[rstest]
fn text_fields_map_to_about_long_about_and_after_help(tree: Command) {
    let root = ClapNode::root(&tree);
    let children = root.children().expect("children");
    let check = find(&children, "check");
    let install = find(&children, "install");

    assert_eq!(check.synopsis(), "Check the Linkerd installation for potential problems");
    assert_eq!(check.description(), "Check the Linkerd installation for potential problems.");
    assert_eq!(check.example(), "  linkerd check");
    assert_eq!(install.description(), "");
    assert_eq!(install.example(), "");
}

#[rstest]
fn local_options_are_sorted_and_include_help(tree: Command) {
    let root = ClapNode::root(&tree);
    let children = root.children().expect("children");
    let options = find(&children, "check").options().expect("options");

    let names: Vec<&str> = options.iter().map(|option| option.name.as_str()).collect();
    assert_eq!(names, ["help", "output", "pre"]);

    let output = options.iter().find(|option| option.name == "output").expect("output");
    assert_eq!(output.shorthand, "o");
    assert_eq!(output.default_value, "table");
    assert_eq!(output.usage, "Output format");

    let pre = options.iter().find(|option| option.name == "pre").expect("pre");
    assert_eq!(pre.default_value, "false");
    assert_eq!(pre.shorthand, "");
    assert_eq!(pre.usage, "");

    let help = options.iter().find(|option| option.name == "help").expect("help");
    assert_eq!(help.shorthand, "h");
    assert_eq!(help.usage, "help for check");
}

#[rstest]
fn global_arguments_are_inherited_by_every_descendant(tree: Command) {
    let root = ClapNode::root(&tree);
    let children = root.children().expect("children");
    let check = find(&children, "check");
    let grandchildren = check.children().expect("grandchildren");

    for node in [check, find(&grandchildren, "config")] {
        let inherited = node.inherited_options().expect("inherited");
        let names: Vec<&str> = inherited.iter().map(|option| option.name.as_str()).collect();
        assert_eq!(names, ["linkerd-namespace", "verbose"]);
    }

    let check_inherited = check.inherited_options().expect("inherited");
    let namespace = check_inherited.first().expect("namespace");
    assert_eq!(namespace.shorthand, "L");
    assert_eq!(namespace.default_value, "linkerd");
}

#[rstest]
fn local_flag_shadows_inherited_flag_of_same_name() {
    let tree = Command::new("linkerd")
        .arg(Arg::new("verbose").long("verbose").global(true).action(ArgAction::SetTrue))
        .subcommand(
            Command::new("install")
                .arg(Arg::new("install-verbose").long("verbose").action(ArgAction::SetTrue)),
        );
    let root = ClapNode::root(&tree);
    let children = root.children().expect("children");
    let install = find(&children, "install");

    assert!(install.inherited_options().expect("inherited").is_empty());
    assert!(
        install
            .options()
            .expect("options")
            .iter()
            .any(|option| option.name == "verbose")
    );
}

#[rstest]
fn global_redeclaration_is_a_local_option() {
    let tree = Command::new("linkerd")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("root help"),
        )
        .subcommand(
            Command::new("install")
                .arg(
                    Arg::new("verbose")
                        .long("verbose")
                        .global(true)
                        .default_value("x")
                        .help("install help"),
                )
                .subcommand(Command::new("config")),
        );
    let root = ClapNode::root(&tree);
    let children = root.children().expect("children");
    let install = find(&children, "install");

    let options = install.options().expect("options");
    let verbose = options
        .iter()
        .find(|option| option.name == "verbose")
        .expect("verbose documented locally");
    assert_eq!(verbose.default_value, "x");
    assert_eq!(verbose.usage, "install help");
    assert!(install.inherited_options().expect("inherited").is_empty());

    let grandchildren = install.children().expect("grandchildren");
    let config = find(&grandchildren, "config");
    let inherited = config.inherited_options().expect("inherited");
    assert_eq!(inherited.len(), 1);
    assert_eq!(inherited.first().map(|option| option.usage.as_str()), Some("install help"));
}

#[rstest]
fn generated_help_subcommand_is_not_documented() {
    let mut tree = Command::new("linkerd").subcommand(
        Command::new("install")
            .about("Output Kubernetes configs to install Linkerd")
            .subcommand(Command::new("config")),
    );
    tree.build();

    let docs = generate_cli_docs(&ClapNode::root(&tree)).expect("walk succeeds");

    assert_eq!(doc_names(&docs), ["install config", "install"]);
    let install = docs.iter().find(|doc| doc.name == "install").expect("install");
    assert_eq!(install.see_also, ["linkerd - ", "linkerd install config - "]);
}

#[rstest]
fn user_help_subcommand_is_kept_when_generation_is_disabled() {
    let tree = Command::new("linkerd")
        .disable_help_subcommand(true)
        .subcommand(Command::new("help").about("Help about any command"));

    let docs = generate_cli_docs(&ClapNode::root(&tree)).expect("walk succeeds");

    assert_eq!(doc_names(&docs), ["help"]);
}

#[rstest]
fn see_also_lists_parent_then_documented_children(tree: Command) {
    let root = ClapNode::root(&tree);
    let children = root.children().expect("children");

    assert_eq!(
        root.see_also(),
        [
            "linkerd check - Check the Linkerd installation for potential problems",
            "linkerd install - Output Kubernetes configs to install Linkerd",
        ]
    );
    assert_eq!(
        find(&children, "check").see_also(),
        [
            "linkerd - linkerd manages the Linkerd service mesh",
            "linkerd check config - Check the Linkerd configuration",
        ]
    );
}

#[rstest]
#[case::hidden(Command::new("doc").hide(true), false, false)]
#[case::runnable_leaf(Command::new("version"), true, false)]
#[case::empty_group(Command::new("topics").subcommand_required(true), false, true)]
#[case::group_with_children(
    Command::new("diagnostics").subcommand_required(true).subcommand(Command::new("endpoints")),
    true,
    false
)]
#[case::group_with_hidden_children(
    Command::new("legacy").subcommand_required(true).subcommand(Command::new("old").hide(true)),
    false,
    false
)]
fn availability_and_help_topics(
    #[case] command: Command,
    #[case] is_available: bool,
    #[case] is_help_topic: bool,
) {
    let node = ClapNode::root(&command);

    assert_eq!(node.is_available(), is_available);
    assert_eq!(node.is_help_topic(), is_help_topic);
}

#[rstest]
fn help_flag_is_omitted_when_disabled() {
    let command = Command::new("version").disable_help_flag(true);
    let options = ClapNode::root(&command).options().expect("options");
    assert!(options.is_empty());
}

#[rstest]
fn duplicate_long_names_are_rejected() {
    let tree = Command::new("linkerd").subcommand(
        Command::new("inject")
            .arg(Arg::new("first").long("manual"))
            .arg(Arg::new("second").long("manual")),
    );

    let err = generate_cli_docs(&ClapNode::root(&tree)).expect_err("walk fails");

    assert_eq!(
        err,
        ExtractionError::DuplicateOption {
            command: "linkerd inject".to_owned(),
            option: "manual".to_owned(),
        }
    );
}

#[rstest]
fn unnamed_subcommand_is_rejected() {
    let tree = Command::new("linkerd").subcommand(Command::new("check").subcommand(Command::new("")));

    let err = generate_cli_docs(&ClapNode::root(&tree)).expect_err("walk fails");

    assert_eq!(
        err,
        ExtractionError::EmptyName {
            parent: "linkerd check".to_owned(),
        }
    );
}
