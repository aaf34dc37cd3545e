//! YAML rendering for the reference document.

use std::io::Write;

use crate::error::DocError;
use crate::schema::ReferenceDocument;

/// First line of every generated document.
pub const GENERATED_HEADER: &str =
    "# Automatically generated by the linkerd doc command, do not manually edit";

/// Renders `reference` as YAML behind the generated-file header.
///
/// # Errors
///
/// Returns [`DocError::Serialization`] when the document cannot be encoded.
pub fn render_reference(reference: &ReferenceDocument) -> Result<String, DocError> {
    let yaml = serde_yaml::to_string(reference)?;
    Ok(format!("{GENERATED_HEADER}\n\n{yaml}\n"))
}

/// Writes the rendered document to `out`.
///
/// Nothing is written unless the whole document encodes successfully.
///
/// # Errors
///
/// Returns [`DocError::Serialization`] when encoding fails and
/// [`DocError::Io`] when writing fails.
pub fn write_reference<W: Write>(out: &mut W, reference: &ReferenceDocument) -> Result<(), DocError> {
    let rendered = render_reference(reference)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
