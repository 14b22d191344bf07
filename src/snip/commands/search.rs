use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Snippet;
use crate::store::SnippetStore;

/// Case-insensitive substring match against name, content, the comma-joined
/// tag text, or any individual tag. `needle` must already be lowercased.
pub fn snippet_matches(snippet: &Snippet, needle: &str) -> bool {
    snippet.name.to_lowercase().contains(needle)
        || snippet.content.to_lowercase().contains(needle)
        || snippet.tags_text().to_lowercase().contains(needle)
        || snippet
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}

/// Pure filter, no ranking: matches come back in store order. Rejecting an
/// empty query is the caller's job; an empty needle matches everything.
pub fn run<S: SnippetStore>(store: &S, query: &str) -> Result<CmdResult> {
    let needle = query.to_lowercase();
    let matches = store.query(&|s| snippet_matches(s, &needle))?;
    Ok(CmdResult::default().with_snippets(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn store_with(snippets: Vec<Snippet>) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for s in snippets {
            store.insert(s).unwrap();
        }
        store
    }

    fn snippet(name: &str, tags: &[&str], content: &str) -> Snippet {
        Snippet::new(
            name.to_string(),
            String::new(),
            tags.iter().map(|t| t.to_string()).collect(),
            content.to_string(),
        )
    }

    #[test]
    fn matches_name_content_or_tags() {
        let s = snippet("hello-world", &["demo", "printing"], "print('hi')");
        assert!(snippet_matches(&s, "hello"));
        assert!(snippet_matches(&s, "print('"));
        assert!(snippet_matches(&s, "demo"));
        assert!(!snippet_matches(&s, "golang"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let s = snippet("Hello-World", &["Demo"], "PRINT('HI')");
        assert!(snippet_matches(&s, "hello"));
        assert!(snippet_matches(&s, "demo"));
        assert!(snippet_matches(&s, "print"));
    }

    #[test]
    fn matches_across_the_joined_tag_text() {
        // "demo,print" contains "o,p" only in the joined rendering
        let s = snippet("x", &["demo", "print"], "body");
        assert!(snippet_matches(&s, "o,p"));
    }

    #[test]
    fn search_returns_only_matching_snippets_in_order() {
        let store = store_with(vec![
            snippet("foo", &[], "def foo(): pass"),
            snippet("bar", &[], "func bar() {}"),
        ]);

        let result = run(&store, "foo").unwrap();
        assert_eq!(result.snippets.len(), 1);
        assert_eq!(result.snippets[0].name, "foo");
    }

    #[test]
    fn search_preserves_store_order() {
        let store = store_with(vec![
            snippet("zeta", &["shared"], "a"),
            snippet("alpha", &["shared"], "b"),
            snippet("mid", &["other"], "c"),
        ]);

        let result = run(&store, "shared").unwrap();
        let names: Vec<&str> = result.snippets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn no_matches_yields_empty_result() {
        let store = store_with(vec![snippet("foo", &[], "body")]);
        let result = run(&store, "nothing-here").unwrap();
        assert!(result.snippets.is_empty());
    }
}
