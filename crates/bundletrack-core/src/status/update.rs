use super::schema::{BuildStatus, ChunkMap, StatusDocument, UNKNOWN_ERROR};

/// Explicit partial update produced by one lifecycle event.
///
/// Applying an update overwrites exactly the keys the event defines,
/// including clearing the fields its target state invalidates. Every
/// other key, seed fields included, is retained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusUpdate {
    /// A build attempt began.
    Compiling,
    /// A module or the whole build failed; carries the failure category
    /// name when one is available.
    Failed { error: Option<String> },
    /// The build concluded successfully with its derived chunk map.
    Finished { chunk: ChunkMap },
}

impl StatusUpdate {
    pub fn apply(self, document: &mut StatusDocument) {
        match self {
            StatusUpdate::Compiling => {
                document.status = Some(BuildStatus::Compiling);
                document.error = None;
                document.chunk = None;
            }
            StatusUpdate::Failed { error } => {
                document.status = Some(BuildStatus::Error);
                document.error = Some(error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()));
                document.chunk = None;
            }
            StatusUpdate::Finished { chunk } => {
                document.status = Some(BuildStatus::Done);
                document.error = None;
                document.chunk = Some(chunk);
            }
        }
    }
}
