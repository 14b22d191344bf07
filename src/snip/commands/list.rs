use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::SnippetStore;

pub fn run<S: SnippetStore>(store: &S) -> Result<CmdResult> {
    let snippets = store.load_all()?;
    Ok(CmdResult::default().with_snippets(snippets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_all_snippets_in_insertion_order() {
        let fixture = StoreFixture::new().with_snippets(3);
        let result = run(&fixture.store).unwrap();
        let names: Vec<&str> = result.snippets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["snippet-1", "snippet-2", "snippet-3"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let fixture = StoreFixture::new();
        let result = run(&fixture.store).unwrap();
        assert!(result.snippets.is_empty());
    }
}
