//! Reference document schema emitted by `linkerd doc`.
//!
//! Field names are serialized in the `PascalCase` form consumed by the
//! documentation site, so renaming a Rust field must not change its key.

use serde::{Deserialize, Serialize};

/// A single flag accepted by a command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CommandOption {
    /// Long flag name without the leading dashes.
    pub name: String,
    /// Single-character short flag, or empty when there is none.
    pub shorthand: String,
    /// Default value display string.
    pub default_value: String,
    /// Help text for the flag.
    pub usage: String,
}

/// Documentation record for one command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CommandDoc {
    /// Command path with the root program prefix removed, e.g. `check`.
    pub name: String,
    /// One-line summary.
    pub synopsis: String,
    /// Long-form description.
    pub description: String,
    /// Flags declared directly on the command.
    pub options: Vec<CommandOption>,
    /// Flags inherited from ancestor commands.
    pub inherited_options: Vec<CommandOption>,
    /// Usage examples.
    pub example: String,
    /// Related commands, rendered as `<path> - <synopsis>`.
    pub see_also: Vec<String>,
}

/// A documented proxy configuration annotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct AnnotationDoc {
    /// Annotation key, e.g. `linkerd.io/inject`.
    pub name: String,
    /// Human-readable description of the annotation.
    pub description: String,
}

/// The complete reference document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceDocument {
    /// Documented CLI commands, descendants before ancestors.
    #[serde(rename = "CLIReference")]
    pub cli_reference: Vec<CommandDoc>,
    /// Documented annotations in catalog order.
    #[serde(rename = "AnnotationsReference")]
    pub annotations_reference: Vec<AnnotationDoc>,
}
