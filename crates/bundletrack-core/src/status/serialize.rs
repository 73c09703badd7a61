use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::schema::StatusDocument;

/// Serialize the full document compactly.
pub fn to_json(document: &StatusDocument) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec(document)
}

/// Serialize the full document pretty-printed with the given indent
/// string on every nesting level.
pub fn to_json_indented(
    document: &StatusDocument,
    indent: &str,
) -> serde_json::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::schema::BuildStatus;

    fn sample_document() -> StatusDocument {
        let mut document = StatusDocument::default();
        document.status = Some(BuildStatus::Compiling);
        document.public_path = Some("/assets/".to_string());
        document
    }

    #[test]
    fn compact_output_has_no_newlines() {
        let bytes = to_json(&sample_document()).expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        assert!(!text.contains('\n'));
        assert_eq!(text, r#"{"status":"compiling","publicPath":"/assets/"}"#);
    }

    #[test]
    fn indented_output_uses_the_indent_string() {
        let bytes = to_json_indented(&sample_document(), "  ").expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        assert!(text.contains("\n  \"status\": \"compiling\""));
    }

    #[test]
    fn tab_indent_is_honored() {
        let bytes = to_json_indented(&sample_document(), "\t").expect("serialize");
        let text = String::from_utf8(bytes).expect("utf8");
        assert!(text.contains("\n\t\"status\""));
    }
}
