//! # Barrel Dumps
//!
//! A dump is one or more barrel definitions laid end to end, as copied out
//! of the client's heap. Stored either raw or as hex text (what memory
//! viewers usually export).

use std::path::Path;

use arsenal_core::{decode, hex_bytes, BarrelDefinition, BarrelError, RECORD_SIZE};
use serde::{Deserialize, Serialize};

use crate::error::{InspectError, InspectResult};

/// How a dump file is encoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DumpFormat {
    /// Raw bytes.
    #[default]
    Binary,
    /// Hex digits; whitespace ignored.
    Hex,
}

/// Splits raw dump bytes into records.
///
/// # Errors
///
/// [`InspectError::TrailingBytes`] if the length is not a multiple of
/// [`RECORD_SIZE`].
pub fn split_records(bytes: &[u8]) -> InspectResult<Vec<BarrelDefinition>> {
    let chunks = bytes.chunks_exact(RECORD_SIZE);
    if !chunks.remainder().is_empty() {
        return Err(InspectError::TrailingBytes {
            len: bytes.len(),
            remainder: chunks.remainder().len(),
        });
    }
    chunks
        .map(|chunk| decode(chunk).map_err(InspectError::from))
        .collect()
}

/// Turns dump file contents into raw bytes.
///
/// Hex dumps follow [`hex_bytes`]: whitespace is ignored anywhere.
///
/// # Errors
///
/// [`BarrelError::Malformed`] (wrapped) if hex text is not UTF-8 or not
/// valid hex.
pub fn dump_bytes(contents: Vec<u8>, format: DumpFormat) -> InspectResult<Vec<u8>> {
    match format {
        DumpFormat::Binary => Ok(contents),
        DumpFormat::Hex => {
            let text = String::from_utf8(contents).map_err(|e| BarrelError::Malformed {
                reason: e.to_string(),
            })?;
            Ok(hex_bytes(&text)?)
        }
    }
}

/// Reads and decodes every record in a dump file.
///
/// # Errors
///
/// I/O failures, bad hex, trailing bytes, or an empty dump.
pub fn read_dump(path: &Path, format: DumpFormat) -> InspectResult<Vec<BarrelDefinition>> {
    let contents = std::fs::read(path).map_err(|source| InspectError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = dump_bytes(contents, format)?;
    let barrels = split_records(&bytes)?;
    if barrels.is_empty() {
        return Err(InspectError::EmptyDump {
            path: path.to_path_buf(),
        });
    }
    tracing::info!(
        "Read {} barrel(s) from {} ({:?})",
        barrels.len(),
        path.display(),
        format
    );
    Ok(barrels)
}
