//! Store — loads the user document into an ordered, immutable `Vec<UserRecord>`.
//!
//! The loaded vector is the single source of truth; filters borrow from it
//! and never reorder or mutate it.

use crate::{error::DataError, UserRecord};
use serde_json::Value;
use std::path::Path;

/// Default document location, relative to the working directory.
pub const DEFAULT_USERS_PATH: &str = "users.json";

/// Read and parse the document at `path`.
pub fn load_users(path: impl AsRef<Path>) -> Result<Vec<UserRecord>, DataError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let users = parse_users(&text, path)?;
    tracing::debug!(path = %path.display(), count = users.len(), "store: users loaded");
    Ok(users)
}

/// Parse a document already in memory. `origin` is only used in error messages.
pub fn parse_users(json: &str, origin: &Path) -> Result<Vec<UserRecord>, DataError> {
    let value: Value = serde_json::from_str(json).map_err(|source| DataError::Json {
        path: origin.to_path_buf(),
        source,
    })?;

    let Value::Array(items) = value else {
        return Err(DataError::NotAnArray {
            path: origin.to_path_buf(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(UserRecord::from_object(map)),
            _ => Err(DataError::NotAnObject {
                path: origin.to_path_buf(),
                index,
            }),
        })
        .collect()
}
