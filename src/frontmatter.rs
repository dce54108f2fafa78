use serde_yaml::Value;
use std::collections::{BTreeMap, HashMap};

const DELIMITER: &str = "---";

/// Key-value fields from a SKILL.md front-matter block.
///
/// Lookups of absent keys yield `""`, so callers never have to tell "missing"
/// apart from "empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    fields: BTreeMap<String, String>,
}

impl Header {
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn from_yaml(src: &str) -> Self {
        // `Mapping` rejects repeated keys; a plain map keeps the last value.
        // Unparsable or non-mapping blocks degrade to an empty header.
        let Ok(mapping) = serde_yaml::from_str::<HashMap<Value, Value>>(src) else {
            return Self::default();
        };
        let fields = mapping
            .iter()
            .map(|(key, value)| (scalar_text(key), scalar_text(value)))
            .collect();
        Self { fields }
    }
}

/// Split `text` into its front-matter header and the remaining body.
///
/// Returns `None` for the header when the text does not open with a `---` line
/// or the block is never closed; the body is then the whole text.
pub fn extract(text: &str) -> (Option<Header>, &str) {
    let Some(after_open) = text.strip_prefix(DELIMITER) else {
        return (None, text);
    };
    // Tolerate CRLF on Windows checkouts
    if !(after_open.starts_with('\n') || after_open.starts_with("\r\n")) {
        return (None, text);
    }
    let Some((block, body)) = after_open.split_once(DELIMITER) else {
        return (None, text);
    };
    (Some(Header::from_yaml(block)), body)
}

/// Render a YAML value the way the header is compared: falsy values (null,
/// `false`, zero, empty collections) are empty and `true` is `True`.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "True".to_string(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Sequence(seq) if seq.is_empty() => String::new(),
        Value::Mapping(map) if map.is_empty() => String::new(),
        Value::Sequence(_) | Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_yaml_frontmatter() {
        let text = "---\nname: demo\ndescription: something\ntype: workflow\n---\nbody";
        let (header, body) = extract(text);
        let header = header.unwrap();
        assert_eq!(header.get("name"), "demo");
        assert_eq!(header.get("description"), "something");
        assert_eq!(header.get("type"), "workflow");
        assert_eq!(body, "\nbody");
    }

    #[test]
    fn missing_opening_delimiter_returns_text_unchanged() {
        let text = "# Title\n---\nname: demo\n---\n";
        let (header, body) = extract(text);
        assert!(header.is_none());
        assert_eq!(body, text);
    }

    #[test]
    fn opening_delimiter_needs_line_break() {
        let (header, _) = extract("---name: demo\n---\n");
        assert!(header.is_none());
        let (header, _) = extract("----\nname: demo\n---\n");
        assert!(header.is_none());
    }

    #[test]
    fn unclosed_block_is_absent() {
        let text = "---\nname: demo\ndescription: no closing line\n";
        let (header, body) = extract(text);
        assert!(header.is_none());
        assert_eq!(body, text);
    }

    #[test]
    fn empty_block_is_present_but_empty() {
        let (header, body) = extract("---\n---\n## Purpose\n");
        let header = header.unwrap();
        assert!(header.is_empty());
        assert_eq!(header.get("name"), "");
        assert_eq!(body, "\n## Purpose\n");
    }

    #[test]
    fn malformed_yaml_is_present_but_empty() {
        let (header, _) = extract("---\nname: [unterminated\n---\nbody");
        assert!(header.unwrap().is_empty());
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let text = "---\nname: first\nname: demo\ndescription: d\ntype: workflow\n---\nbody";
        let header = extract(text).0.unwrap();
        assert_eq!(header.get("name"), "demo");
        assert_eq!(header.get("description"), "d");
        assert_eq!(header.get("type"), "workflow");
    }

    #[test]
    fn non_mapping_yaml_is_present_but_empty() {
        let (header, _) = extract("---\n- one\n- two\n---\nbody");
        assert!(header.unwrap().is_empty());
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let (header, body) = extract("---\r\nname: demo\r\n---\r\n## Purpose\r\n");
        assert_eq!(header.unwrap().get("name"), "demo");
        assert_eq!(body, "\r\n## Purpose\r\n");
    }

    #[test]
    fn renders_non_string_scalars_as_text() {
        let (header, _) = extract("---\nname: 123\ndescription: true\ntype: ~\n---\n");
        let header = header.unwrap();
        assert_eq!(header.get("name"), "123");
        assert_eq!(header.get("description"), "True");
        assert_eq!(header.get("type"), "");
    }

    #[test]
    fn falsy_scalars_are_empty() {
        let text = "---\nname: 0\ndescription: false\ntype: []\nextra: 0.0\n---\n";
        let header = extract(text).0.unwrap();
        assert_eq!(header.get("name"), "");
        assert_eq!(header.get("description"), "");
        assert_eq!(header.get("type"), "");
        assert_eq!(header.get("extra"), "");
        assert!(!header.is_empty());
    }

    #[test]
    fn keeps_colons_inside_quoted_values() {
        let text = "---\nname: starting-the-task\ndescription: \"A short checklist: plan, branch, test.\"\n---\nbody";
        let (header, _) = extract(text);
        assert_eq!(
            header.unwrap().get("description"),
            "A short checklist: plan, branch, test."
        );
    }
}
