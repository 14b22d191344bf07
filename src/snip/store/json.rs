use super::SnippetStore;
use crate::error::{Result, SnipError};
use crate::model::Snippet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed store: the whole collection as one pretty-printed JSON array.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Snippet>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // A store that was never written to is an empty collection
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(SnipError::StoreUnavailable(format!(
                    "cannot open '{}': {}",
                    self.path.display(),
                    e
                )))
            }
        };
        serde_json::from_str(&raw).map_err(|e| {
            SnipError::CorruptData(format!("'{}': {}", self.path.display(), e))
        })
    }

    /// Rewrites the whole file. Serializes to a sibling temp file and
    /// renames it over the target so a crash mid-write leaves the previous
    /// contents intact.
    fn write_all(&self, snippets: &[Snippet]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let body = serde_json::to_string_pretty(snippets)
            .map_err(|e| SnipError::CorruptData(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SnippetStore for JsonStore {
    fn load_all(&self) -> Result<Vec<Snippet>> {
        self.load()
    }

    fn insert(&mut self, snippet: Snippet) -> Result<()> {
        let mut snippets = self.load()?;
        if snippets.iter().any(|s| s.name == snippet.name) {
            return Err(SnipError::DuplicateName(snippet.name));
        }
        snippets.push(snippet);
        self.write_all(&snippets)
    }
}
