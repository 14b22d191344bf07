use crate::error::{Result, SnipError};
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

const BACKEND_VAR: &str = "SNIP_BACKEND";
const STORE_VAR: &str = "SNIP_STORE";
const EDITOR_VAR: &str = "SNIP_EDITOR";
const API_KEY_VAR: &str = "OPENAI_API_KEY";
const API_URL_VAR: &str = "SNIP_TAG_API_URL";
const MODEL_VAR: &str = "SNIP_TAG_MODEL";

const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Json,
    Sqlite,
}

impl StoreBackend {
    fn parse(raw: &str) -> Result<Self> {
        match raw {
            "json" => Ok(Self::Json),
            "sqlite" => Ok(Self::Sqlite),
            other => Err(SnipError::Usage(format!(
                "unknown backend '{}' (expected 'json' or 'sqlite')",
                other
            ))),
        }
    }

    fn default_filename(self) -> &'static str {
        match self {
            Self::Json => "snippets.json",
            Self::Sqlite => "snippets.db",
        }
    }
}

/// Connection details for the tag-suggestion API.
#[derive(Debug, Clone)]
pub struct TagApiConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

/// All ambient state the program needs, resolved once at the CLI boundary
/// and passed into components explicitly.
#[derive(Debug, Clone)]
pub struct SnipConfig {
    pub backend: StoreBackend,
    pub store_path: PathBuf,
    pub tag_api: Option<TagApiConfig>,
    pub editor: Option<String>,
}

impl SnipConfig {
    /// Resolves configuration from CLI overrides and the environment.
    /// Precedence per value: CLI flag, then environment variable, then
    /// default (a per-user data directory for the store path).
    pub fn resolve(
        backend_flag: Option<StoreBackend>,
        store_flag: Option<PathBuf>,
    ) -> Result<Self> {
        let backend = match backend_flag {
            Some(b) => b,
            None => match env::var(BACKEND_VAR) {
                Ok(raw) => StoreBackend::parse(&raw)?,
                Err(_) => StoreBackend::Json,
            },
        };

        let store_path = store_flag
            .or_else(|| env::var(STORE_VAR).ok().map(PathBuf::from))
            .map(Ok)
            .unwrap_or_else(|| default_store_path(backend))?;

        let tag_api = env::var(API_KEY_VAR).ok().filter(|k| !k.is_empty()).map(
            |api_key| TagApiConfig {
                api_url: env::var(API_URL_VAR)
                    .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
                api_key,
                model: env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            },
        );

        let editor = env::var(EDITOR_VAR).ok().filter(|e| !e.is_empty());

        Ok(Self {
            backend,
            store_path,
            tag_api,
            editor,
        })
    }
}

fn default_store_path(backend: StoreBackend) -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "snip", "snip").ok_or_else(|| {
        SnipError::StoreUnavailable("could not determine a data directory".to_string())
    })?;
    Ok(dirs.data_dir().join(backend.default_filename()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parse_accepts_known_names() {
        assert_eq!(StoreBackend::parse("json").unwrap(), StoreBackend::Json);
        assert_eq!(StoreBackend::parse("sqlite").unwrap(), StoreBackend::Sqlite);
    }

    #[test]
    fn backend_parse_rejects_unknown_names() {
        let err = StoreBackend::parse("postgres").unwrap_err();
        assert!(matches!(err, SnipError::Usage(_)));
    }

    #[test]
    fn cli_flags_win_over_defaults() {
        let config = SnipConfig::resolve(
            Some(StoreBackend::Sqlite),
            Some(PathBuf::from("/tmp/x.db")),
        )
        .unwrap();
        assert_eq!(config.backend, StoreBackend::Sqlite);
        assert_eq!(config.store_path, PathBuf::from("/tmp/x.db"));
    }
}
