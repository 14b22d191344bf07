use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipError};
use crate::model::Snippet;
use crate::store::SnippetStore;
use crate::tags::TagSuggester;
use log::{debug, warn};

/// Creates a snippet: validates inputs, runs best-effort tag augmentation,
/// and inserts. Tag-service failure never fails the insert; the snippet
/// falls back to the caller-supplied tags and the result carries a warning.
pub fn run<S: SnippetStore>(
    store: &mut S,
    suggester: Option<&dyn TagSuggester>,
    name: String,
    language: String,
    user_tags: Vec<String>,
    content: String,
) -> Result<CmdResult> {
    if name.trim().is_empty() {
        return Err(SnipError::Usage("Snippet name cannot be empty".into()));
    }
    if content.trim().is_empty() {
        return Err(SnipError::Usage("Snippet content cannot be empty".into()));
    }

    let mut result = CmdResult::default();

    // Suggested tags come first, then whatever the caller passed
    let mut tags = Vec::new();
    match suggester {
        Some(suggester) => match suggester.suggest_tags(&content) {
            Ok(suggested) => tags.extend(suggested),
            Err(e) => {
                warn!("tag suggestion failed: {}", e);
                result.add_message(CmdMessage::warning(format!(
                    "Could not generate tags, using user-provided tags ({})",
                    e
                )));
            }
        },
        None => debug!("no tag suggester configured, skipping augmentation"),
    }
    tags.extend(user_tags);

    let snippet = Snippet::new(name, language, tags, content);
    store.insert(snippet.clone())?;

    let tag_note = if snippet.tags.is_empty() {
        String::new()
    } else {
        format!(" with tags: {}", snippet.tags.join(", "))
    };
    result.add_message(CmdMessage::success(format!(
        "Snippet '{}' added{}",
        snippet.name, tag_note
    )));

    Ok(result.with_snippets(vec![snippet]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;

    struct FixedSuggester(Vec<String>);

    impl TagSuggester for FixedSuggester {
        fn suggest_tags(&self, _content: &str) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSuggester;

    impl TagSuggester for FailingSuggester {
        fn suggest_tags(&self, _content: &str) -> Result<Vec<String>> {
            Err(SnipError::TagService("connection refused".into()))
        }
    }

    fn add(
        store: &mut InMemoryStore,
        suggester: Option<&dyn TagSuggester>,
        name: &str,
        tags: &[&str],
    ) -> Result<CmdResult> {
        run(
            store,
            suggester,
            name.to_string(),
            "python".to_string(),
            tags.iter().map(|t| t.to_string()).collect(),
            "print('hi')".to_string(),
        )
    }

    #[test]
    fn inserts_with_user_tags_only() {
        let mut store = InMemoryStore::new();
        add(&mut store, None, "hello-world", &["demo"]).unwrap();

        let stored = store.load_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "hello-world");
        assert_eq!(stored[0].tags, vec!["demo"]);
    }

    #[test]
    fn suggested_tags_come_before_user_tags() {
        let mut store = InMemoryStore::new();
        let suggester = FixedSuggester(vec!["python".into(), "printing".into()]);
        add(&mut store, Some(&suggester), "hello-world", &["demo"]).unwrap();

        let stored = store.load_all().unwrap();
        assert_eq!(stored[0].tags, vec!["python", "printing", "demo"]);
    }

    #[test]
    fn suggester_failure_falls_back_to_user_tags() {
        let mut store = InMemoryStore::new();
        let result = add(&mut store, Some(&FailingSuggester), "hello-world", &["demo"]).unwrap();

        let stored = store.load_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].tags, vec!["demo"]);
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning)));
    }

    #[test]
    fn duplicate_name_is_rejected_and_store_unchanged() {
        let mut store = InMemoryStore::new();
        add(&mut store, None, "hello-world", &["demo"]).unwrap();

        let err = run(
            &mut store,
            None,
            "hello-world".to_string(),
            String::new(),
            Vec::new(),
            "different content".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, SnipError::DuplicateName(_)));

        let stored = store.load_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].content, "print('hi')");
    }

    #[test]
    fn empty_name_or_content_is_a_usage_error() {
        let mut store = InMemoryStore::new();
        let err = run(
            &mut store,
            None,
            "  ".to_string(),
            String::new(),
            Vec::new(),
            "body".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, SnipError::Usage(_)));

        let err = run(
            &mut store,
            None,
            "name".to_string(),
            String::new(),
            Vec::new(),
            "\n".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, SnipError::Usage(_)));
        assert!(store.load_all().unwrap().is_empty());
    }
}
