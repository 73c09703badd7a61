use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chunk::ChunkOutput;

/// Failure category recorded when a failure carries no name.
///
/// Public contract: downstream consumers match on this exact string.
pub const UNKNOWN_ERROR: &str = "unknown-error";

/// Chunk name to ordered emitted outputs, in the bundler's native chunk
/// order. Replaced wholesale on every successful build, never deep-merged.
pub type ChunkMap = IndexMap<String, Vec<ChunkOutput>>;

/// Lifecycle phase of the observed build attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildStatus {
    Compiling,
    Error,
    Done,
}

/// The persisted status document.
///
/// Required fields:
/// - `status` (present in every persisted snapshot; unset only before the
///   first lifecycle event, and the document is never written before one)
///
/// Conditional fields:
/// - `error`: populated only while `status` is `error`
/// - `chunk`: populated only while `status` is `done`
/// - `publicPath`: attached whenever the bundler reports a public URL
///   root, independent of status
///
/// Seed fields carry the recorder's configuration verbatim and persist
/// across every write. Each write serializes the whole accumulated
/// document, so re-reading the file at any point yields a complete
/// snapshot of the latest known state.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BuildStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk: Option<ChunkMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
    #[serde(flatten)]
    pub seed: Map<String, Value>,
}

impl StatusDocument {
    /// A fresh document carrying only configuration fields.
    pub fn seeded(fields: Map<String, Value>) -> Self {
        Self {
            seed: fields,
            ..Self::default()
        }
    }
}
