use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_OUTPUT_FILENAME: &str = "webpack-config.json";
pub const DEFAULT_OUTPUT_PATH: &str = ".";

/// Widest indent honored by the serializer; wider requests clamp down.
const MAX_INDENT_WIDTH: usize = 10;

/// Pretty-print indentation, passed through to the serializer.
///
/// Accepts either a column count or a literal indent string. A count of
/// zero or an empty string means compact output. Counts clamp to ten
/// columns and literal strings truncate to their first ten characters.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Indent {
    Columns(i64),
    Text(String),
}

impl Indent {
    /// The literal indent string to hand to the serializer, or `None`
    /// for compact output.
    pub fn as_indent_string(&self) -> Option<String> {
        match self {
            Indent::Columns(columns) if *columns <= 0 => None,
            Indent::Columns(columns) => {
                Some(" ".repeat((*columns as usize).min(MAX_INDENT_WIDTH)))
            }
            Indent::Text(text) if text.is_empty() => None,
            Indent::Text(text) => Some(text.chars().take(MAX_INDENT_WIDTH).collect()),
        }
    }
}

/// Construction-time configuration for a status recorder.
///
/// Recognized options default rather than validate; anything malformed
/// surfaces at the first write. Unrecognized keys are kept verbatim and
/// seeded into the status document.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecorderOptions {
    /// File name for the status document.
    #[serde(default = "default_output_filename")]
    pub output_filename: String,
    /// Directory the status document is written into.
    #[serde(default = "default_output_path")]
    pub output_path: String,
    /// Pretty-print indentation; absent means compact output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<Indent>,
    /// Caller-supplied passthrough fields, preserved across every write.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_output_filename() -> String {
    DEFAULT_OUTPUT_FILENAME.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

impl Default for RecorderOptions {
    fn default() -> Self {
        Self {
            output_filename: default_output_filename(),
            output_path: default_output_path(),
            indent: None,
            extra: Map::new(),
        }
    }
}

impl RecorderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The initial contents of the status document: the full
    /// configuration, recognized options included, as JSON fields.
    pub fn seed_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(
            "outputFilename".to_string(),
            Value::String(self.output_filename.clone()),
        );
        fields.insert(
            "outputPath".to_string(),
            Value::String(self.output_path.clone()),
        );
        if let Some(indent) = &self.indent {
            let value = match indent {
                Indent::Columns(columns) => Value::from(*columns),
                Indent::Text(text) => Value::String(text.clone()),
            };
            fields.insert("indent".to_string(), value);
        }
        for (key, value) in &self.extra {
            fields.insert(key.clone(), value.clone());
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let options = RecorderOptions::default();
        assert_eq!(options.output_filename, "webpack-config.json");
        assert_eq!(options.output_path, ".");
        assert_eq!(options.indent, None);
        assert!(options.extra.is_empty());
    }

    #[test]
    fn unrecognized_keys_land_in_extra() {
        let options: RecorderOptions = serde_json::from_str(
            r#"{"outputPath": "build", "project": "demo", "owner": {"team": "infra"}}"#,
        )
        .expect("options should parse");
        assert_eq!(options.output_path, "build");
        assert_eq!(options.output_filename, "webpack-config.json");
        assert_eq!(options.extra["project"], Value::String("demo".to_string()));
        assert_eq!(options.extra["owner"]["team"], "infra");
    }

    #[test]
    fn indent_accepts_number_or_string() {
        let numeric: RecorderOptions =
            serde_json::from_str(r#"{"indent": 2}"#).expect("numeric indent");
        assert_eq!(numeric.indent, Some(Indent::Columns(2)));

        let text: RecorderOptions =
            serde_json::from_str(r#"{"indent": "\t"}"#).expect("string indent");
        assert_eq!(text.indent, Some(Indent::Text("\t".to_string())));
    }

    #[test]
    fn zero_and_empty_indent_mean_compact() {
        assert_eq!(Indent::Columns(0).as_indent_string(), None);
        assert_eq!(Indent::Columns(-4).as_indent_string(), None);
        assert_eq!(Indent::Text(String::new()).as_indent_string(), None);
    }

    #[test]
    fn indent_width_clamps_to_ten() {
        assert_eq!(
            Indent::Columns(64).as_indent_string().as_deref(),
            Some("          ")
        );
        assert_eq!(
            Indent::Text("ababababababab".to_string())
                .as_indent_string()
                .as_deref(),
            Some("ababababab")
        );
    }

    #[test]
    fn seed_fields_carry_recognized_and_passthrough_keys() {
        let options: RecorderOptions = serde_json::from_str(
            r#"{"indent": 2, "project": "demo"}"#,
        )
        .expect("options should parse");
        let seed = options.seed_fields();
        assert_eq!(seed["outputFilename"], "webpack-config.json");
        assert_eq!(seed["outputPath"], ".");
        assert_eq!(seed["indent"], 2);
        assert_eq!(seed["project"], "demo");
    }

    #[test]
    fn unset_indent_is_not_seeded() {
        let seed = RecorderOptions::default().seed_fields();
        assert!(!seed.contains_key("indent"));
    }
}
