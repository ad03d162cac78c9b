//! Composite identifiers
//!
//! Child resources are keyed by their parents' IDs joined with `/`, e.g.
//! `{product_id}/{catalog_product_id}/{catalog_plan_id}/{catalog_deployment_id}`.

use thiserror::Error;

/// Separator used between composite ID parts
pub const ID_SEPARATOR: &str = "/";

/// Errors from splitting a composite ID
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error(
        "The given id {id} does not contain {separator} please check documentation on how to provide id during import command"
    )]
    MissingSeparator { id: String, separator: String },

    #[error("The given id {id} has {got} part(s), expected {expected}")]
    WrongPartCount {
        id: String,
        expected: usize,
        got: usize,
    },
}

/// Join ID parts with the separator
pub fn join_id_parts<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(ID_SEPARATOR)
}

/// Split an ID into its parts
pub fn sep_id_parts(id: &str, separator: &str) -> Result<Vec<String>, IdError> {
    if !id.contains(separator) {
        return Err(IdError::MissingSeparator {
            id: id.to_string(),
            separator: separator.to_string(),
        });
    }
    Ok(id.split(separator).map(str::to_string).collect())
}

/// Split an ID that must have exactly `expected` parts
pub fn sep_id_parts_exact(
    id: &str,
    separator: &str,
    expected: usize,
) -> Result<Vec<String>, IdError> {
    let parts = sep_id_parts(id, separator)?;
    if parts.len() != expected {
        return Err(IdError::WrongPartCount {
            id: id.to_string(),
            expected,
            got: parts.len(),
        });
    }
    Ok(parts)
}
