//! Reference documentation generator for the Linkerd CLI.
//!
//! Walks the `linkerd` command hierarchy, collects one record per documented
//! subcommand, pairs the result with the catalog of proxy configuration
//! annotations, and renders the combination as YAML for the documentation
//! site.

pub mod annotations;
pub mod clap_node;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod node;
pub mod output;
pub mod reference;
pub mod schema;
pub mod walker;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{DocError, ExtractionError};
pub use node::CommandNode;
pub use reference::generate_reference;
pub use schema::{AnnotationDoc, CommandDoc, CommandOption, ReferenceDocument};
pub use walker::generate_cli_docs;
