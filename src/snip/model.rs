use serde::{Deserialize, Serialize};

/// A stored code snippet. `name` is unique within a collection; `language`
/// uses the empty string for "unset"; `tags` keep insertion order and may
/// contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub name: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub content: String,
}

impl Snippet {
    pub fn new(name: String, language: String, tags: Vec<String>, content: String) -> Self {
        Self {
            name,
            language,
            tags,
            content,
        }
    }

    /// Tags rendered as a single comma-joined string. This is the form the
    /// table backend stores and the form joined-text search runs against.
    pub fn tags_text(&self) -> String {
        self.tags.join(",")
    }
}

/// Splits a raw comma-separated tag list (a `--tags` value or a tag-service
/// reply) into discrete trimmed tags, dropping empty pieces.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tag_list_trims_and_drops_empty() {
        assert_eq!(
            parse_tag_list(" rust, cli ,,  parsing "),
            vec!["rust", "cli", "parsing"]
        );
    }

    #[test]
    fn parse_tag_list_empty_input() {
        assert!(parse_tag_list("").is_empty());
        assert!(parse_tag_list(" , ,").is_empty());
    }

    #[test]
    fn tags_text_joins_with_commas() {
        let snippet = Snippet::new(
            "hello".into(),
            "python".into(),
            vec!["demo".into(), "print".into()],
            "print('hi')".into(),
        );
        assert_eq!(snippet.tags_text(), "demo,print");
    }

    #[test]
    fn serde_roundtrip_preserves_fields() {
        let snippet = Snippet::new(
            "hello-world".into(),
            "python".into(),
            vec!["demo".into()],
            "print('hi')\n".into(),
        );
        let json = serde_json::to_string(&snippet).unwrap();
        let parsed: Snippet = serde_json::from_str(&json).unwrap();
        assert_eq!(snippet, parsed);
    }

    #[test]
    fn language_and_tags_default_when_missing() {
        let parsed: Snippet =
            serde_json::from_str(r#"{"name": "x", "content": "y"}"#).unwrap();
        assert_eq!(parsed.language, "");
        assert!(parsed.tags.is_empty());
    }
}
