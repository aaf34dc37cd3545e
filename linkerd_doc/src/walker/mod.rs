//! Flattens a command hierarchy into documentation records.

use crate::error::ExtractionError;
use crate::node::CommandNode;
use crate::schema::CommandDoc;

/// Walks the tree below `root` and returns one record per eligible command.
///
/// Children are documented before their parent and siblings keep their
/// declaration order. Commands that are unavailable or help topics produce no
/// record, but their descendants are still visited. The root itself never
/// appears in the result.
///
/// # Errors
///
/// Returns the first [`ExtractionError`] raised by any node; no partial list
/// is returned.
pub fn generate_cli_docs<N: CommandNode>(root: &N) -> Result<Vec<CommandDoc>, ExtractionError> {
    let root_name = root.command_path();
    let mut docs = Vec::new();
    collect(root, &root_name, &mut docs)?;
    Ok(docs)
}

fn collect<N: CommandNode>(
    node: &N,
    root_name: &str,
    docs: &mut Vec<CommandDoc>,
) -> Result<(), ExtractionError> {
    for child in node.children()? {
        collect(&child, root_name, docs)?;
    }

    if !is_eligible(node) {
        tracing::debug!(command = %node.command_path(), "skipping undocumented command");
        return Ok(());
    }

    let doc = describe(node, root_name)?;
    if doc.name == root_name {
        return Ok(());
    }
    tracing::trace!(command = %doc.name, "documented command");
    docs.push(doc);
    Ok(())
}

fn is_eligible<N: CommandNode>(node: &N) -> bool {
    node.is_available() && !node.is_help_topic()
}

fn describe<N: CommandNode>(node: &N, root_name: &str) -> Result<CommandDoc, ExtractionError> {
    Ok(CommandDoc {
        name: strip_root_prefix(&node.command_path(), root_name).to_owned(),
        synopsis: node.synopsis(),
        description: node.description(),
        options: node.options()?,
        inherited_options: node.inherited_options()?,
        example: node.example(),
        see_also: node.see_also(),
    })
}

/// Removes a leading `"<root_name> "` from `path`, if present.
///
/// ```
/// use linkerd_doc::walker::strip_root_prefix;
///
/// assert_eq!(strip_root_prefix("linkerd check config", "linkerd"), "check config");
/// assert_eq!(strip_root_prefix("linkerd", "linkerd"), "linkerd");
/// assert_eq!(strip_root_prefix("linkerdx check", "linkerd"), "linkerdx check");
/// ```
#[must_use]
pub fn strip_root_prefix<'a>(path: &'a str, root_name: &str) -> &'a str {
    path.strip_prefix(root_name)
        .and_then(|rest| rest.strip_prefix(' '))
        .unwrap_or(path)
}
