use serde::{Deserialize, Serialize};

use crate::path::lexical_join;

/// One emitted file belonging to a named chunk.
///
/// `path` is present only when the bundler has a configured output
/// directory; `publicPath` only when a public URL root is configured.
/// Absent fields are omitted from the serialized document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkOutput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

/// Derive the output record for one emitted file.
///
/// Empty strings count as unconfigured, same as `None`.
pub fn chunk_output(
    file: &str,
    output_dir: Option<&str>,
    public_root: Option<&str>,
) -> ChunkOutput {
    let path = output_dir
        .filter(|dir| !dir.is_empty())
        .map(|dir| lexical_join(dir, file).to_string_lossy().into_owned());
    let public_path = public_root
        .filter(|root| !root.is_empty())
        .map(|root| public_url(root, file));

    ChunkOutput {
        name: file.to_string(),
        path,
        public_path,
    }
}

/// Concatenate a public URL root and a file name with exactly one `/`
/// between them, whether or not the root already ends in one.
pub fn public_url(root: &str, file: &str) -> String {
    if root.ends_with('/') {
        format!("{}{}", root, file)
    } else {
        format!("{}/{}", root, file)
    }
}
