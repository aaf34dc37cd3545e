//! The `linkerd` command hierarchy and its hidden `doc` subcommand.
//!
//! Only `doc` is handled by this binary; the remaining commands are declared
//! so that the reference document describes the full CLI surface.

use std::io::Write;

use clap::{Arg, ArgAction, Command};

use crate::clap_node::ClapNode;
use crate::error::DocError;
use crate::output::write_reference;
use crate::reference::generate_reference;

mod commands;

/// Name of the root program, stripped from every documented command name.
pub const ROOT_NAME: &str = "linkerd";

/// Name of the hidden documentation subcommand.
pub const DOC_COMMAND: &str = "doc";

/// Builds the complete `linkerd` command tree.
#[must_use]
pub fn root_command() -> Command {
    Command::new(ROOT_NAME)
        .about("linkerd manages the Linkerd service mesh")
        .subcommand_required(true)
        .args(global_args())
        .subcommands(commands::all())
        .subcommand(doc_command())
}

/// The hidden `doc` subcommand; it accepts no arguments.
#[must_use]
pub fn doc_command() -> Command {
    Command::new(DOC_COMMAND)
        .hide(true)
        .about("Generate YAML documentation for the Linkerd CLI & Proxy annotations")
}

/// Generates the reference document for `root` and writes it to `out`.
///
/// # Errors
///
/// Returns a [`DocError`] when extraction, encoding, or writing fails. No
/// output is written unless extraction and encoding both succeed.
pub fn run_doc<W: Write>(root: &Command, out: &mut W) -> Result<(), DocError> {
    let reference = generate_reference(&ClapNode::root(root))?;
    write_reference(out, &reference)
}

fn global_args() -> Vec<Arg> {
    vec![
        Arg::new("api-addr")
            .long("api-addr")
            .global(true)
            .value_name("ADDR")
            .help("Override kubeconfig and communicate directly with the control plane at host:port (mostly for testing)"),
        Arg::new("as")
            .long("as")
            .global(true)
            .value_name("USER")
            .help("Username to impersonate for Kubernetes operations"),
        Arg::new("as-group")
            .long("as-group")
            .global(true)
            .value_name("GROUP")
            .action(ArgAction::Append)
            .help("Group to impersonate for Kubernetes operations"),
        Arg::new("cni-namespace")
            .long("cni-namespace")
            .global(true)
            .default_value("linkerd-cni")
            .help("Namespace in which the Linkerd CNI plugin is installed"),
        Arg::new("context")
            .long("context")
            .global(true)
            .help("Name of the kubeconfig context to use"),
        Arg::new("kubeconfig")
            .long("kubeconfig")
            .global(true)
            .value_name("PATH")
            .help("Path to the kubeconfig file to use for CLI requests"),
        Arg::new("linkerd-namespace")
            .long("linkerd-namespace")
            .short('L')
            .global(true)
            .default_value("linkerd")
            .help("Namespace in which Linkerd is installed"),
        Arg::new("verbose")
            .long("verbose")
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Turn on debug logging"),
    ]
}
