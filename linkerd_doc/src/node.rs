//! Read-only view of a command hierarchy.
//!
//! The walker only needs the handful of per-command facts listed here, so any
//! CLI framework (or a synthetic tree in tests) can be documented by
//! implementing [`CommandNode`].

use crate::error::ExtractionError;
use crate::schema::CommandOption;

/// A command in a hierarchy owned by the hosting CLI framework.
pub trait CommandNode: Sized {
    /// The command's own name, e.g. `config`.
    fn name(&self) -> String;

    /// The full invocation path, e.g. `linkerd check config`.
    fn command_path(&self) -> String;

    /// Child commands in declaration order.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] when a child cannot be represented.
    fn children(&self) -> Result<Vec<Self>, ExtractionError>;

    /// Whether the command is user-facing (not hidden or otherwise withdrawn).
    fn is_available(&self) -> bool;

    /// Whether the command is a help-topic placeholder with no behaviour.
    fn is_help_topic(&self) -> bool;

    /// One-line summary.
    fn synopsis(&self) -> String;

    /// Long-form description, empty when none is declared.
    fn description(&self) -> String;

    /// Usage example text, empty when none is declared.
    fn example(&self) -> String;

    /// Flags declared on the command itself.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] when the flags are malformed.
    fn options(&self) -> Result<Vec<CommandOption>, ExtractionError>;

    /// Flags inherited from ancestors.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] when the flags are malformed.
    fn inherited_options(&self) -> Result<Vec<CommandOption>, ExtractionError>;

    /// Cross-references to the parent and documented children.
    fn see_also(&self) -> Vec<String>;
}
