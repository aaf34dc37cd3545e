//! Assembles the complete reference document.

use crate::annotations::generate_annotations_docs;
use crate::error::ExtractionError;
use crate::node::CommandNode;
use crate::schema::ReferenceDocument;
use crate::walker::generate_cli_docs;

/// Documents the tree below `root` and pairs it with the annotation catalog.
///
/// # Errors
///
/// Returns an [`ExtractionError`] when any command's metadata cannot be
/// extracted.
pub fn generate_reference<N: CommandNode>(root: &N) -> Result<ReferenceDocument, ExtractionError> {
    let cli_reference = generate_cli_docs(root)?;
    let annotations_reference = generate_annotations_docs();
    tracing::debug!(
        commands = cli_reference.len(),
        annotations = annotations_reference.len(),
        "assembled reference document"
    );
    Ok(ReferenceDocument {
        cli_reference,
        annotations_reference,
    })
}
