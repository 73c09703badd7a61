//! Lexical path joining for derived output paths.
//!
//! Derivation must not touch the filesystem, so normalization is purely
//! lexical: duplicate separators collapse, `.` segments are dropped, and
//! `..` segments resolve against the preceding component.

use std::path::{Component, Path, PathBuf};

/// Join `base` and `file` and normalize the result lexically.
///
/// `..` at an absolute root is dropped; leading `..` on a relative base is
/// preserved. A join that cancels out entirely yields `.`.
pub fn lexical_join(base: &str, file: &str) -> PathBuf {
    normalize(&Path::new(base).join(file))
}

fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    let mut normalized = PathBuf::new();
    for component in parts {
        normalized.push(component.as_os_str());
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_directory_and_file() {
        assert_eq!(lexical_join("/dist", "main.js"), PathBuf::from("/dist/main.js"));
    }

    #[test]
    fn trailing_separator_does_not_duplicate() {
        assert_eq!(lexical_join("/dist/", "main.js"), PathBuf::from("/dist/main.js"));
    }

    #[test]
    fn current_dir_segments_are_dropped() {
        assert_eq!(lexical_join("./dist/.", "main.js"), PathBuf::from("dist/main.js"));
    }

    #[test]
    fn parent_segments_resolve() {
        assert_eq!(
            lexical_join("/dist/js/../css", "app.css"),
            PathBuf::from("/dist/css/app.css")
        );
    }

    #[test]
    fn parent_at_root_is_dropped() {
        assert_eq!(lexical_join("/..", "main.js"), PathBuf::from("/main.js"));
    }

    #[test]
    fn leading_parent_on_relative_base_is_kept() {
        assert_eq!(lexical_join("../dist", "main.js"), PathBuf::from("../dist/main.js"));
    }

    #[test]
    fn fully_cancelled_join_yields_current_dir() {
        assert_eq!(lexical_join("dist", ".."), PathBuf::from("."));
        assert_eq!(lexical_join("dist", "../.."), PathBuf::from(".."));
    }
}
