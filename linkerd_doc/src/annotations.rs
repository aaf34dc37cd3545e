//! Catalog of the proxy configuration annotations understood by Linkerd.
//!
//! The table order is part of the published reference; append new entries to
//! the group they belong to rather than sorting.

use crate::schema::AnnotationDoc;

/// Controls proxy injection for a workload or namespace.
pub const PROXY_INJECT_ANNOTATION: &str = "linkerd.io/inject";
/// Proxy container image name.
pub const PROXY_IMAGE_ANNOTATION: &str = "config.linkerd.io/proxy-image";
/// Image pull policy for the proxy image.
pub const PROXY_IMAGE_PULL_POLICY_ANNOTATION: &str = "config.linkerd.io/image-pull-policy";
/// Init container image name.
pub const PROXY_INIT_IMAGE_ANNOTATION: &str = "config.linkerd.io/init-image";
/// Init container image version.
pub const PROXY_INIT_IMAGE_VERSION_ANNOTATION: &str = "config.linkerd.io/init-image-version";
/// Debug container image name.
pub const DEBUG_IMAGE_ANNOTATION: &str = "config.linkerd.io/debug-image";
/// Debug container image version.
pub const DEBUG_IMAGE_VERSION_ANNOTATION: &str = "config.linkerd.io/debug-image-version";
/// Image pull policy for the debug image.
pub const DEBUG_IMAGE_PULL_POLICY_ANNOTATION: &str = "config.linkerd.io/debug-image-pull-policy";
/// Proxy control port.
pub const PROXY_CONTROL_PORT_ANNOTATION: &str = "config.linkerd.io/control-port";
/// Inbound ports that bypass the proxy.
pub const PROXY_IGNORE_INBOUND_PORTS_ANNOTATION: &str = "config.linkerd.io/skip-inbound-ports";
/// Ports proxied without protocol detection.
pub const PROXY_OPAQUE_PORTS_ANNOTATION: &str = "config.linkerd.io/opaque-ports";
/// Outbound ports that bypass the proxy.
pub const PROXY_IGNORE_OUTBOUND_PORTS_ANNOTATION: &str = "config.linkerd.io/skip-outbound-ports";
/// Proxy inbound port.
pub const PROXY_INBOUND_PORT_ANNOTATION: &str = "config.linkerd.io/inbound-port";
/// Proxy admin (metrics) port.
pub const PROXY_ADMIN_PORT_ANNOTATION: &str = "config.linkerd.io/admin-port";
/// Proxy outbound port.
pub const PROXY_OUTBOUND_PORT_ANNOTATION: &str = "config.linkerd.io/outbound-port";
/// CPU request for the proxy sidecar.
pub const PROXY_CPU_REQUEST_ANNOTATION: &str = "config.linkerd.io/proxy-cpu-request";
/// Memory request for the proxy sidecar.
pub const PROXY_MEMORY_REQUEST_ANNOTATION: &str = "config.linkerd.io/proxy-memory-request";
/// CPU limit for the proxy sidecar.
pub const PROXY_CPU_LIMIT_ANNOTATION: &str = "config.linkerd.io/proxy-cpu-limit";
/// Memory limit for the proxy sidecar.
pub const PROXY_MEMORY_LIMIT_ANNOTATION: &str = "config.linkerd.io/proxy-memory-limit";
/// User ID the proxy runs as.
pub const PROXY_UID_ANNOTATION: &str = "config.linkerd.io/proxy-uid";
/// Proxy log level.
pub const PROXY_LOG_LEVEL_ANNOTATION: &str = "config.linkerd.io/proxy-log-level";
/// Proxy log format.
pub const PROXY_LOG_FORMAT_ANNOTATION: &str = "config.linkerd.io/proxy-log-format";
/// Enables service profiles for non-Kubernetes services.
pub const PROXY_ENABLE_EXTERNAL_PROFILES_ANNOTATION: &str =
    "config.linkerd.io/enable-external-profiles";
/// Proxy image tag override.
pub const PROXY_VERSION_OVERRIDE_ANNOTATION: &str = "config.linkerd.io/proxy-version";
/// Opts a workload out of TLS identity.
pub const PROXY_DISABLE_IDENTITY_ANNOTATION: &str = "config.linkerd.io/disable-identity";
/// Injects the debug sidecar.
pub const PROXY_ENABLE_DEBUG_ANNOTATION: &str = "config.linkerd.io/enable-debug-sidecar";
/// Outbound TCP connect timeout.
pub const PROXY_OUTBOUND_CONNECT_TIMEOUT_ANNOTATION: &str =
    "config.linkerd.io/proxy-outbound-connect-timeout";
/// Delay before the proxy receives SIGTERM on shutdown.
pub const PROXY_WAIT_BEFORE_EXIT_SECONDS_ANNOTATION: &str =
    "config.alpha.linkerd.io/proxy-wait-before-exit-seconds";
/// Holds application startup until the proxy is ready.
pub const PROXY_AWAIT_ANNOTATION: &str = "config.linkerd.io/proxy-await";

/// Number of entries in the annotation catalog.
pub const ANNOTATION_COUNT: usize = 29;

const CATALOG: [(&str, &str); ANNOTATION_COUNT] = [
    (
        PROXY_INJECT_ANNOTATION,
        "Controls whether or not a pod should be injected; accepted values are `enabled`, `disabled` and `ingress`",
    ),
    (PROXY_IMAGE_ANNOTATION, "Linkerd proxy container image name"),
    (PROXY_IMAGE_PULL_POLICY_ANNOTATION, "Docker image pull policy"),
    (PROXY_INIT_IMAGE_ANNOTATION, "Linkerd init container image name"),
    (PROXY_INIT_IMAGE_VERSION_ANNOTATION, "Linkerd init container image version"),
    (DEBUG_IMAGE_ANNOTATION, "Linkerd debug container image name"),
    (DEBUG_IMAGE_VERSION_ANNOTATION, "Linkerd debug container image version"),
    (DEBUG_IMAGE_PULL_POLICY_ANNOTATION, "Docker image pull policy for debug image"),
    (PROXY_CONTROL_PORT_ANNOTATION, "Proxy port to use for control"),
    (
        PROXY_IGNORE_INBOUND_PORTS_ANNOTATION,
        "Ports that should skip the proxy and send directly to the application. Comma-separated list of values, where each value can be a port number or a range `a-b`.",
    ),
    (
        PROXY_OPAQUE_PORTS_ANNOTATION,
        "Ports that skip the proxy's protocol detection mechanism and are proxied opaquely. Comma-separated list of values, where each value can be a port number or a range `a-b`.",
    ),
    (
        PROXY_IGNORE_OUTBOUND_PORTS_ANNOTATION,
        "Outbound ports that should skip the proxy. Comma-separated list of values, where each value can be a port number or a range `a-b`.",
    ),
    (PROXY_INBOUND_PORT_ANNOTATION, "Proxy port to use for inbound traffic"),
    (PROXY_ADMIN_PORT_ANNOTATION, "Proxy port to serve metrics on"),
    (PROXY_OUTBOUND_PORT_ANNOTATION, "Proxy port to use for outbound traffic"),
    (
        PROXY_CPU_REQUEST_ANNOTATION,
        "Amount of CPU units that the proxy sidecar requests",
    ),
    (
        PROXY_MEMORY_REQUEST_ANNOTATION,
        "Amount of Memory that the proxy sidecar requests",
    ),
    (
        PROXY_CPU_LIMIT_ANNOTATION,
        "Maximum amount of CPU units that the proxy sidecar can use",
    ),
    (
        PROXY_MEMORY_LIMIT_ANNOTATION,
        "Maximum amount of Memory that the proxy sidecar can use",
    ),
    (PROXY_UID_ANNOTATION, "Run the proxy under this user ID"),
    (PROXY_LOG_LEVEL_ANNOTATION, "Log level for the proxy"),
    (PROXY_LOG_FORMAT_ANNOTATION, "Log format (plain or json) for the proxy"),
    (
        PROXY_ENABLE_EXTERNAL_PROFILES_ANNOTATION,
        "Enable service profiles for non-Kubernetes services",
    ),
    (
        PROXY_VERSION_OVERRIDE_ANNOTATION,
        "Tag to be used for the Linkerd proxy images",
    ),
    (
        PROXY_DISABLE_IDENTITY_ANNOTATION,
        "Disables resources from participating in TLS identity",
    ),
    (
        PROXY_ENABLE_DEBUG_ANNOTATION,
        "Inject a debug sidecar for data plane debugging",
    ),
    (
        PROXY_OUTBOUND_CONNECT_TIMEOUT_ANNOTATION,
        "Used to configure the outbound TCP connection timeout in the proxy",
    ),
    (
        PROXY_WAIT_BEFORE_EXIT_SECONDS_ANNOTATION,
        "The proxy sidecar will stay alive for at least the given period before receiving SIGTERM signal from Kubernetes but no longer than pod's `terminationGracePeriodSeconds`. If not provided, it will be defaulted to `0`",
    ),
    (
        PROXY_AWAIT_ANNOTATION,
        "The application container will not start until the proxy is ready",
    ),
];

/// Returns the annotation catalog in its published order.
#[must_use]
pub fn generate_annotations_docs() -> Vec<AnnotationDoc> {
    CATALOG
        .iter()
        .map(|&(name, description)| AnnotationDoc {
            name: name.to_owned(),
            description: description.to_owned(),
        })
        .collect()
}
