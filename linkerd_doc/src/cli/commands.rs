//! Declarations of the documented `linkerd` subcommands.

use clap::{Arg, ArgAction, Command};

/// Every public subcommand, in registration order.
pub(super) fn all() -> Vec<Command> {
    vec![
        check(),
        completion(),
        diagnostics(),
        identity(),
        inject(),
        install(),
        install_cni(),
        profile(),
        prune(),
        uninject(),
        uninstall(),
        upgrade(),
        version(),
    ]
}

fn namespace_arg(help: &'static str) -> Arg {
    Arg::new("namespace")
        .long("namespace")
        .short('n')
        .help(help)
}

fn output_arg(default: &'static str, help: &'static str) -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .default_value(default)
        .help(help)
}

fn set_arg() -> Arg {
    Arg::new("set")
        .long("set")
        .action(ArgAction::Append)
        .value_name("KEY=VALUE")
        .help("set values on the command line (can specify multiple or separate values with commas: key1=val1,key2=val2)")
}

fn values_arg() -> Arg {
    Arg::new("values")
        .long("values")
        .short('f')
        .action(ArgAction::Append)
        .value_name("FILE")
        .help("specify values in a YAML file or a URL (can specify multiple)")
}

fn switch(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .action(ArgAction::SetTrue)
        .help(help)
}

fn check() -> Command {
    Command::new("check")
        .about("Check the Linkerd installation for potential problems")
        .long_about(
            "Check the Linkerd installation for potential problems.\n\n\
             The check command will perform a series of checks to validate that the linkerd \
             CLI and control plane are configured correctly. If the command encounters a \
             failure it will print additional information about the failure and exit with a \
             non-zero exit code.",
        )
        .after_help(
            "  # Check that the Linkerd control plane is up and running\n  \
             linkerd check\n\n  \
             # Check that the Linkerd control plane can be installed in the \"test\" namespace\n  \
             linkerd check --pre --linkerd-namespace test\n\n  \
             # Check that the Linkerd data plane proxies in the \"app\" namespace are up and running\n  \
             linkerd check --proxy --namespace app",
        )
        .arg(
            Arg::new("expected-version")
                .long("expected-version")
                .help("Overrides the version used when checking if Linkerd is running the latest version (mostly for testing)"),
        )
        .arg(switch(
            "linkerd-cni-enabled",
            "When running pre-installation checks (--pre), assume the linkerd-cni plugin is already installed, and a NET_ADMIN check is not needed",
        ))
        .arg(namespace_arg("Namespace to use for --proxy checks (default: all namespaces)"))
        .arg(output_arg("table", "Output format. One of: table, json, short"))
        .arg(switch("pre", "Only run pre-installation checks, to determine if the control plane can be installed"))
        .arg(switch("proxy", "Only run data-plane checks, to determine if the data plane is healthy"))
        .arg(
            Arg::new("wait")
                .long("wait")
                .default_value("5m0s")
                .help("Maximum allowed time for all tests to pass"),
        )
}

fn completion() -> Command {
    Command::new("completion")
        .about("Output shell completion code for the specified shell (bash, zsh or fish)")
        .long_about(
            "Output shell completion code for the specified shell (bash, zsh or fish).",
        )
        .after_help(
            "  # bash <= 3.2:\n  \
             # To load shell completion into your current shell session\n  \
             source /dev/stdin <<< \"$(linkerd completion bash)\"\n\n  \
             # zsh:\n  \
             # To load shell completion into your current shell session\n  \
             source <(linkerd completion zsh)\n\n  \
             # fish:\n  \
             # To load shell completion into your current shell session\n  \
             linkerd completion fish | source",
        )
        .arg(
            Arg::new("shell")
                .value_parser(["bash", "zsh", "fish"])
                .required(true)
                .help("Shell to generate completion code for"),
        )
}

fn diagnostics() -> Command {
    Command::new("diagnostics")
        .about("Commands used to diagnose Linkerd components")
        .long_about(
            "Commands used to diagnose Linkerd components.\n\n\
             This command provides subcommands to diagnose the functionality of Linkerd.",
        )
        .after_help(
            "  # Get control-plane component metrics\n  \
             linkerd diagnostics controller-metrics\n\n  \
             # Get metrics from the web deployment in the emojivoto namespace.\n  \
             linkerd diagnostics proxy-metrics -n emojivoto deploy/web\n\n  \
             # Get the endpoints for authorities in Linkerd's control-plane itself\n  \
             linkerd diagnostics endpoints web.linkerd-viz.svc.cluster.local:8084",
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("controller-metrics")
                .about("Fetch metrics directly from Linkerd control plane containers")
                .long_about(
                    "Fetch metrics directly from Linkerd control plane containers.\n\n\
                     This command initiates port-forward to each control plane process, and \
                     queries the /metrics endpoint on them.",
                )
                .arg(
                    Arg::new("wait")
                        .long("wait")
                        .short('w')
                        .default_value("30s")
                        .help("Time allowed to fetch diagnostics"),
                ),
        )
        .subcommand(
            Command::new("endpoints")
                .visible_alias("ep")
                .about("Introspect Linkerd's service discovery state")
                .long_about(
                    "Introspect Linkerd's service discovery state.\n\n\
                     This command provides debug information about the internal state of the \
                     control-plane's destination container. It queries the same Destination \
                     service endpoint as the linkerd-proxy's, and returns the addresses \
                     associated with that destination.",
                )
                .after_help(
                    "  # get all endpoints for the authorities emoji-svc.emojivoto.svc.cluster.local:8080 and web-svc.emojivoto.svc.cluster.local:80\n  \
                     linkerd diagnostics endpoints emoji-svc.emojivoto.svc.cluster.local:8080 web-svc.emojivoto.svc.cluster.local:80",
                )
                .arg(
                    Arg::new("destination-pod")
                        .long("destination-pod")
                        .help("Target a specific destination Pod when there are multiple running"),
                )
                .arg(output_arg("table", "Output format; one of: \"table\" or \"json\""))
                .arg(
                    Arg::new("token")
                        .long("token")
                        .help("Context token to use when querying the destination service"),
                )
                .arg(
                    Arg::new("authorities")
                        .num_args(1..)
                        .required(true)
                        .help("Authorities to resolve"),
                ),
        )
        .subcommand(
            Command::new("policy")
                .about("Introspect Linkerd's policy state")
                .long_about(
                    "Introspect Linkerd's policy state.\n\n\
                     This command provides debug information about the internal state of the \
                     control-plane's policy controller. It queries the same control-plane \
                     endpoint as the linkerd-proxy's, and returns the policies associated with \
                     the given resource.",
                )
                .after_help(
                    "  # get the inbound policy for pod emoji-6d66d87995-bvrnn on port 8080\n  \
                     linkerd diagnostics policy -n emojivoto po/emoji-6d66d87995-bvrnn 8080",
                )
                .arg(
                    Arg::new("destination-pod")
                        .long("destination-pod")
                        .help("Target a specific destination Pod when there are multiple running"),
                )
                .arg(namespace_arg("Namespace of resource").default_value("default"))
                .arg(output_arg("yaml", "Output format. One of: yaml, json"))
                .arg(
                    Arg::new("token")
                        .long("token")
                        .help("Token for the client"),
                )
                .arg(Arg::new("resource").required(true).help("Resource to inspect"))
                .arg(Arg::new("port").required(true).help("Port to inspect")),
        )
        .subcommand(
            Command::new("proxy-metrics")
                .about("Fetch metrics directly from Linkerd proxies")
                .long_about(
                    "Fetch metrics directly from Linkerd proxies.\n\n\
                     This command initiates a port-forward to a given pod or set of pods, and \
                     queries the /metrics endpoint on the Linkerd proxies.",
                )
                .after_help(
                    "  # Get metrics from pod-foo-bar in the default namespace.\n  \
                     linkerd diagnostics proxy-metrics po/pod-foo-bar\n\n  \
                     # Get metrics from the web deployment in the emojivoto namespace.\n  \
                     linkerd diagnostics proxy-metrics -n emojivoto deploy/web",
                )
                .arg(namespace_arg("Namespace of resource").default_value("default"))
                .arg(switch("obfuscate", "Obfuscate sensitive information"))
                .arg(
                    Arg::new("resource")
                        .num_args(1..)
                        .required(true)
                        .help("Resources to fetch metrics from"),
                ),
        )
}

fn identity() -> Command {
    Command::new("identity")
        .about("Display the certificate(s) of one or more selected pod(s)")
        .long_about(
            "Display the certificate(s) of one or more selected pod(s).\n\n\
             This command initiates a port-forward to a given pod or a set of pods and fetches \
             the TLS certificate.",
        )
        .after_help(
            "  # Get certificate from pod foo-bar in the default namespace.\n  \
             linkerd identity foo-bar\n\n  \
             # Get certificate from all pods with the label name=nginx\n  \
             linkerd identity -l name=nginx",
        )
        .arg(namespace_arg("Namespace of the pod").default_value("default"))
        .arg(
            Arg::new("selector")
                .long("selector")
                .short('l')
                .help("Selector (label query) to filter on, supports '=', '==', and '!='"),
        )
        .arg(Arg::new("pods").num_args(0..).help("Pods to inspect"))
}

fn inject() -> Command {
    Command::new("inject")
        .about("Add the Linkerd proxy to a Kubernetes config")
        .long_about(
            "Add the Linkerd proxy to a Kubernetes config.\n\n\
             You can inject resources contained in a single file, inside a folder and its \
             sub-folders, or coming from stdin.",
        )
        .after_help(
            "  # Inject all the deployments in the default namespace.\n  \
             kubectl get deploy -o yaml | linkerd inject - | kubectl apply -f -\n\n  \
             # Injecting a file from a remote URL\n  \
             linkerd inject https://url.to/yml | kubectl apply -f -\n\n  \
             # Inject all the resources inside a folder and its sub-folders.\n  \
             linkerd inject <folder> | kubectl apply -f -",
        )
        .arg(switch(
            "enable-debug-sidecar",
            "Inject a debug sidecar for data plane debugging",
        ))
        .arg(switch(
            "ingress",
            "Enable ingress mode in the linkerd proxy",
        ))
        .arg(switch(
            "manual",
            "Include the proxy sidecar container spec in the YAML output (the auto-injector won't pick it up, so config annotations aren't supported) (default false)",
        ))
        .arg(
            Arg::new("proxy-cpu-request")
                .long("proxy-cpu-request")
                .help("Amount of CPU units that the proxy sidecar requests"),
        )
        .arg(
            Arg::new("proxy-log-level")
                .long("proxy-log-level")
                .help("Log level for the proxy"),
        )
        .arg(
            Arg::new("proxy-version")
                .long("proxy-version")
                .short('v')
                .help("Tag to be used for the Linkerd proxy images"),
        )
        .arg(
            Arg::new("skip-inbound-ports")
                .long("skip-inbound-ports")
                .action(ArgAction::Append)
                .help("Ports and/or port ranges (inclusive) that should skip the proxy and send directly to the application"),
        )
        .arg(
            Arg::new("skip-outbound-ports")
                .long("skip-outbound-ports")
                .action(ArgAction::Append)
                .help("Outbound ports and/or port ranges (inclusive) that should skip the proxy"),
        )
        .arg(
            Arg::new("config-file")
                .required(true)
                .help("File, folder, URL or '-' for stdin"),
        )
}

fn install() -> Command {
    Command::new("install")
        .about("Output Kubernetes configs to install Linkerd")
        .long_about(
            "Output Kubernetes configs to install Linkerd.\n\n\
             This command provides all Kubernetes configs necessary to install the Linkerd \
             control plane.",
        )
        .after_help(
            "  # Install CRDs first.\n  \
             linkerd install --crds | kubectl apply -f -\n\n  \
             # Install the core control plane.\n  \
             linkerd install | kubectl apply -f -",
        )
        .arg(switch("crds", "Install Linkerd CRDs"))
        .arg(switch("ha", "Enable HA deployment config for the control plane (default false)"))
        .arg(
            Arg::new("identity-trust-anchors-file")
                .long("identity-trust-anchors-file")
                .value_name("FILE")
                .help("A path to a PEM-encoded file containing Linkerd Identity trust anchors (generated by default)"),
        )
        .arg(switch(
            "ignore-cluster",
            "Ignore the current Kubernetes cluster when checking for existing cluster configuration (default false)",
        ))
        .arg(output_arg("yaml", "Output format. One of: json|yaml"))
        .arg(set_arg())
        .arg(values_arg())
}

fn install_cni() -> Command {
    Command::new("install-cni")
        .about("Output Kubernetes configs to install Linkerd CNI")
        .long_about(
            "Output Kubernetes configs to install Linkerd CNI.\n\n\
             This command installs a DaemonSet into the Linkerd control plane. The DaemonSet \
             copies the necessary linkerd-cni plugin binaries and configs onto the host. It \
             assumes that the 'linkerd install' command will be executed with the \
             '--linkerd-cni-enabled' flag. This command needs to be executed before the \
             'linkerd install --linkerd-cni-enabled' command.",
        )
        .arg(
            Arg::new("cni-log-level")
                .long("cni-log-level")
                .default_value("info")
                .help("Log level for the CNI plugin"),
        )
        .arg(
            Arg::new("dest-cni-bin-dir")
                .long("dest-cni-bin-dir")
                .default_value("/opt/cni/bin")
                .help("Directory on the host where the CNI binary will be placed"),
        )
        .arg(
            Arg::new("dest-cni-net-dir")
                .long("dest-cni-net-dir")
                .default_value("/etc/cni/net.d")
                .help("Directory on the host where the CNI configuration will be placed"),
        )
        .arg(set_arg())
        .arg(values_arg())
}

fn profile() -> Command {
    Command::new("profile")
        .about("Output service profile config for Kubernetes")
        .long_about(
            "Output service profile config for Kubernetes.\n\n\
             This outputs a service profile for the given service.",
        )
        .after_help(
            "  # Output a basic template to apply after modification.\n  \
             linkerd profile -n emojivoto --template web-svc\n\n  \
             # Generate a profile from an OpenAPI specification.\n  \
             linkerd profile -n emojivoto --open-api web-svc.swagger web-svc",
        )
        .arg(namespace_arg("Namespace of the service").default_value("default"))
        .arg(
            Arg::new("open-api")
                .long("open-api")
                .value_name("FILE")
                .help("Output a service profile based on the given OpenAPI spec file"),
        )
        .arg(
            Arg::new("proto")
                .long("proto")
                .value_name("FILE")
                .help("Output a service profile based on the given Protobuf spec file"),
        )
        .arg(switch("template", "Output a service profile template"))
        .arg(Arg::new("service").required(true).help("Service to profile"))
}

fn prune() -> Command {
    Command::new("prune")
        .about("Output extraneous Kubernetes resources in the linkerd control plane")
        .after_help("  # Prune extraneous resources.\n  linkerd prune | kubectl delete -f -")
        .arg(set_arg())
        .arg(values_arg())
}

fn uninject() -> Command {
    Command::new("uninject")
        .about("Remove the Linkerd proxy from a Kubernetes config")
        .long_about(
            "Remove the Linkerd proxy from a Kubernetes config.\n\n\
             You can uninject resources contained in a single file, inside a folder and its \
             sub-folders, or coming from stdin.",
        )
        .after_help(
            "  # Uninject all the deployments in the default namespace.\n  \
             kubectl get deploy -o yaml | linkerd uninject - | kubectl apply -f -",
        )
        .arg(
            Arg::new("config-file")
                .required(true)
                .help("File, folder, URL or '-' for stdin"),
        )
}

fn uninstall() -> Command {
    Command::new("uninstall")
        .about("Output Kubernetes resources to uninstall Linkerd control plane")
        .long_about(
            "Output Kubernetes resources to uninstall Linkerd control plane.\n\n\
             This command provides all Kubernetes namespace-scoped and cluster-scoped resources \
             (e.g services, deployments, RBACs, etc.) necessary to uninstall Linkerd control \
             plane.",
        )
        .after_help("  linkerd uninstall | kubectl delete -f -")
        .arg(
            Arg::new("force")
                .long("force")
                .short('f')
                .action(ArgAction::SetTrue)
                .help("Force uninstall even if there exist non-control-plane injected pods"),
        )
}

fn upgrade() -> Command {
    Command::new("upgrade")
        .about("Output Kubernetes configs to upgrade an existing Linkerd control plane")
        .long_about(
            "Output Kubernetes configs to upgrade an existing Linkerd control plane.\n\n\
             Note that the default flag values for this command come from the Linkerd control \
             plane. The default values displayed in the Flags section below only apply to the \
             install command.",
        )
        .after_help(
            "  # Upgrade CRDs first\n  \
             linkerd upgrade --crds | kubectl apply -f -\n\n  \
             # Then upgrade the control plane\n  \
             linkerd upgrade | kubectl apply -f -\n\n  \
             # And lastly, remove linkerd resources that no longer exist in the current version\n  \
             linkerd prune | kubectl delete -f -",
        )
        .arg(switch("crds", "Upgrade Linkerd CRDs"))
        .arg(switch(
            "force",
            "Force upgrade operation even when issuer certificate does not work with the trust anchors of all proxies",
        ))
        .arg(output_arg("yaml", "Output format. One of: json|yaml"))
        .arg(set_arg())
        .arg(values_arg())
}

fn version() -> Command {
    Command::new("version")
        .about("Print the client and server version information")
        .arg(switch("client", "Print the client version only"))
        .arg(namespace_arg("Namespace to use for --proxy versions (default: all namespaces)"))
        .arg(switch("proxy", "Print data-plane versions"))
        .arg(switch("short", "Print the version number(s) only, with no additional output"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn command_names_are_unique() {
        let commands = all();
        for (index, command) in commands.iter().enumerate() {
            assert!(
                commands
                    .iter()
                    .skip(index + 1)
                    .all(|other| other.get_name() != command.get_name()),
                "{} registered twice",
                command.get_name()
            );
        }
    }

    #[rstest]
    fn every_command_has_a_synopsis() {
        for command in all() {
            assert!(command.get_about().is_some(), "{} lacks about", command.get_name());
        }
    }
}
