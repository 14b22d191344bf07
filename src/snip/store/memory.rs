use super::SnippetStore;
use crate::error::{Result, SnipError};
use crate::model::Snippet;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snippets: Vec<Snippet>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnippetStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<Snippet>> {
        Ok(self.snippets.clone())
    }

    fn insert(&mut self, snippet: Snippet) -> Result<()> {
        if self.snippets.iter().any(|s| s.name == snippet.name) {
            return Err(SnipError::DuplicateName(snippet.name));
        }
        self.snippets.push(snippet);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_snippets(mut self, count: usize) -> Self {
            for i in 0..count {
                let snippet = Snippet::new(
                    format!("snippet-{}", i + 1),
                    "rust".to_string(),
                    vec![format!("tag-{}", i + 1)],
                    format!("// body {}", i + 1),
                );
                self.store.insert(snippet).unwrap();
            }
            self
        }

        pub fn with_snippet(mut self, name: &str, content: &str) -> Self {
            let snippet = Snippet::new(
                name.to_string(),
                String::new(),
                Vec::new(),
                content.to_string(),
            );
            self.store.insert(snippet).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_preserves_insertion_order() {
        let mut store = InMemoryStore::new();
        for name in ["z", "a", "m"] {
            store
                .insert(Snippet::new(
                    name.into(),
                    String::new(),
                    Vec::new(),
                    "body".into(),
                ))
                .unwrap();
        }

        let all = store.query(&|_| true).unwrap();
        let names: Vec<&str> = all.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn query_filters_with_predicate() {
        let fixture = fixtures::StoreFixture::new().with_snippets(3);
        let hits = fixture
            .store
            .query(&|s| s.name.ends_with('2'))
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "snippet-2");
    }
}
