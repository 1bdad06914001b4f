use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::QueryJsonError;

/// Load and parse a JSON file
///
/// The whole file is read into memory before decoding. The file handle is
/// dropped before the bytes are parsed.
pub fn load_json_file(path: &Path) -> Result<Value, QueryJsonError> {
    let bytes = read_file(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "loaded document");

    serde_json::from_slice(&bytes).map_err(|source| QueryJsonError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

fn read_file(path: &Path) -> Result<Vec<u8>, QueryJsonError> {
    let mut file = File::open(path).map_err(|source| QueryJsonError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| QueryJsonError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(bytes)
}
