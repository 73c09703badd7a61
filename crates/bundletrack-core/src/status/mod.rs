pub mod schema;
pub mod serialize;
pub mod update;

pub use schema::{BuildStatus, ChunkMap, StatusDocument, UNKNOWN_ERROR};
pub use serialize::{to_json, to_json_indented};
pub use update::StatusUpdate;
