use super::SnippetStore;
use crate::error::{Result, SnipError};
use crate::model::{parse_tag_list, Snippet};
use rusqlite::{params, Connection, Error as SqliteError, ErrorCode};
use std::path::Path;

/// Table-backed store over a local SQLite database.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens (creating if absent) the database at `path` and ensures the
    /// `snippets` table exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let connection = Connection::open(path).map_err(|e| {
            SnipError::StoreUnavailable(format!("cannot open '{}': {}", path.display(), e))
        })?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self> {
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS snippets (
                    id       INTEGER PRIMARY KEY AUTOINCREMENT,
                    name     TEXT NOT NULL UNIQUE,
                    language TEXT,
                    tags     TEXT,
                    content  TEXT NOT NULL
                )",
                [],
            )
            .map_err(map_sqlite_error)?;
        Ok(Self { connection })
    }

    #[cfg(test)]
    fn open_in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory()
            .map_err(|e| SnipError::StoreUnavailable(e.to_string()))?;
        Self::with_connection(connection)
    }
}

fn map_sqlite_error(e: rusqlite::Error) -> SnipError {
    match e {
        SqliteError::SqliteFailure(code, msg) => match code.code {
            ErrorCode::CannotOpen
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::PermissionDenied => SnipError::StoreUnavailable(
                msg.unwrap_or_else(|| format!("sqlite failure ({:?})", code.code)),
            ),
            ErrorCode::NotADatabase => {
                SnipError::CorruptData("file is not a valid SQLite database".to_string())
            }
            _ => SnipError::StoreUnavailable(
                msg.unwrap_or_else(|| format!("sqlite error code {:?}", code.code)),
            ),
        },
        SqliteError::FromSqlConversionFailure(_, _, e) => SnipError::CorruptData(e.to_string()),
        other => SnipError::StoreUnavailable(other.to_string()),
    }
}

impl SnippetStore for SqliteStore {
    fn load_all(&self) -> Result<Vec<Snippet>> {
        let mut stmt = self
            .connection
            .prepare(
                "SELECT name, language, tags, content FROM snippets ORDER BY id ASC",
            )
            .map_err(map_sqlite_error)?;

        let rows = stmt
            .query_map([], |row| {
                let language: Option<String> = row.get(1)?;
                let tags: Option<String> = row.get(2)?;
                Ok(Snippet {
                    name: row.get(0)?,
                    language: language.unwrap_or_default(),
                    tags: parse_tag_list(&tags.unwrap_or_default()),
                    content: row.get(3)?,
                })
            })
            .map_err(map_sqlite_error)?;

        rows.collect::<std::result::Result<_, _>>()
            .map_err(map_sqlite_error)
    }

    fn insert(&mut self, snippet: Snippet) -> Result<()> {
        let taken: bool = self
            .connection
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM snippets WHERE name = ?1)",
                [&snippet.name],
                |row| row.get(0),
            )
            .map_err(map_sqlite_error)?;
        if taken {
            return Err(SnipError::DuplicateName(snippet.name));
        }

        self.connection
            .execute(
                "INSERT INTO snippets (name, language, tags, content) VALUES (?1, ?2, ?3, ?4)",
                params![
                    snippet.name,
                    snippet.language,
                    snippet.tags_text(),
                    snippet.content
                ],
            )
            .map_err(|e| match e {
                // The UNIQUE constraint backs up the check above
                SqliteError::SqliteFailure(code, _)
                    if code.code == ErrorCode::ConstraintViolation =>
                {
                    SnipError::DuplicateName(snippet.name.clone())
                }
                other => map_sqlite_error(other),
            })?;
        Ok(())
    }
}
