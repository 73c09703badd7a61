pub mod lifecycle;
pub mod recorder;
pub mod sink;

pub use lifecycle::{
    BuildError, BuildEvent, BuildSummary, ChunkGroup, ModuleFailure, OutputConfig,
};
pub use recorder::StatusRecorder;
pub use sink::{FileSink, RecordError};
