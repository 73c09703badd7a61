use bundletrack_core::status::{to_json, to_json_indented};
use bundletrack_core::{chunk_output, ChunkMap, RecorderOptions, StatusDocument, StatusUpdate};
use tracing::debug;

use crate::lifecycle::{BuildEvent, BuildSummary, ModuleFailure, OutputConfig};
use crate::sink::{FileSink, RecordError};

/// Accumulates build lifecycle events into a status document and
/// persists the merged document after every event.
///
/// Single-owner and synchronous: each call runs to completion, write
/// included, before returning to the host. The host's serialized event
/// delivery is the only concurrency discipline required.
pub struct StatusRecorder {
    options: RecorderOptions,
    document: StatusDocument,
    sink: FileSink,
}

impl StatusRecorder {
    /// Seed a recorder from its configuration. Nothing is validated and
    /// nothing is written until the first event arrives.
    pub fn new(options: RecorderOptions) -> Self {
        let sink = FileSink::new(&options.output_path, &options.output_filename);
        let document = StatusDocument::seeded(options.seed_fields());
        Self {
            options,
            document,
            sink,
        }
    }

    /// The document as it would be persisted by the next write.
    pub fn document(&self) -> &StatusDocument {
        &self.document
    }

    /// Handle one lifecycle event: update the document and persist it.
    ///
    /// I/O and serialization faults propagate untouched; the host is
    /// expected to treat them as fatal to the build process.
    pub fn observe(
        &mut self,
        output: &OutputConfig,
        event: &BuildEvent,
    ) -> Result<(), RecordError> {
        debug!(event = event.kind(), "recording lifecycle event");
        let update = match event {
            BuildEvent::CompileStarted => StatusUpdate::Compiling,
            BuildEvent::ModuleFailed(failure) => StatusUpdate::Failed {
                error: failure.error_name.clone(),
            },
            BuildEvent::Done(summary) => terminal_update(summary, output),
        };
        update.apply(&mut self.document);
        self.write(output)
    }

    pub fn compile_started(&mut self, output: &OutputConfig) -> Result<(), RecordError> {
        self.observe(output, &BuildEvent::CompileStarted)
    }

    pub fn module_failed(
        &mut self,
        output: &OutputConfig,
        failure: ModuleFailure,
    ) -> Result<(), RecordError> {
        self.observe(output, &BuildEvent::ModuleFailed(failure))
    }

    pub fn build_done(
        &mut self,
        output: &OutputConfig,
        summary: BuildSummary,
    ) -> Result<(), RecordError> {
        self.observe(output, &BuildEvent::Done(summary))
    }

    fn write(&mut self, output: &OutputConfig) -> Result<(), RecordError> {
        if let Some(root) = output.public_root() {
            self.document.public_path = Some(root.to_string());
        }

        let indent = self
            .options
            .indent
            .as_ref()
            .and_then(|indent| indent.as_indent_string());
        let contents = match indent {
            Some(indent) => to_json_indented(&self.document, &indent)?,
            None => to_json(&self.document)?,
        };
        debug!(
            path = %self.sink.target().display(),
            bytes = contents.len(),
            "writing status document"
        );
        self.sink.write(&contents)
    }
}

/// Build-done resolves to a failure record when the error list is
/// non-empty (first error wins), otherwise to the derived chunk map.
fn terminal_update(summary: &BuildSummary, output: &OutputConfig) -> StatusUpdate {
    if let Some(first) = summary.errors.first() {
        return StatusUpdate::Failed {
            error: first.name.clone(),
        };
    }
    StatusUpdate::Finished {
        chunk: chunk_map(summary, output),
    }
}

fn chunk_map(summary: &BuildSummary, output: &OutputConfig) -> ChunkMap {
    let mut chunks = ChunkMap::with_capacity(summary.chunks.len());
    for group in &summary.chunks {
        let files = group
            .files
            .iter()
            .map(|file| chunk_output(file, output.output_dir(), output.public_root()))
            .collect();
        chunks.insert(group.name.clone(), files);
    }
    chunks
}
