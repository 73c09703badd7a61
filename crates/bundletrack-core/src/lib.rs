pub mod chunk;
pub mod options;
pub mod path;
pub mod status;

pub use chunk::{chunk_output, public_url, ChunkOutput};
pub use options::{Indent, RecorderOptions, DEFAULT_OUTPUT_FILENAME, DEFAULT_OUTPUT_PATH};
pub use path::lexical_join;
pub use status::{BuildStatus, ChunkMap, StatusDocument, StatusUpdate, UNKNOWN_ERROR};
