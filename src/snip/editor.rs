use crate::error::{Result, SnipError};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Resolves the editor command. An explicit override wins; then $EDITOR,
/// then $VISUAL, then common fallbacks found on PATH.
pub fn get_editor(explicit: Option<&str>) -> Result<String> {
    if let Some(editor) = explicit {
        if !editor.is_empty() {
            return Ok(editor.to_string());
        }
    }

    if let Ok(editor) = env::var("EDITOR") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    if let Ok(editor) = env::var("VISUAL") {
        if !editor.is_empty() {
            return Ok(editor);
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(SnipError::Usage(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the given editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, file_path: P) -> Result<String> {
    let path = file_path.as_ref();

    let status = Command::new(editor)
        .arg(path)
        .status()
        .map_err(|e| SnipError::Usage(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(SnipError::Usage(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    Ok(fs::read_to_string(path)?)
}

/// Captures snippet content interactively: opens the editor on an empty
/// temporary file, reads the buffer back when it closes, and removes the
/// temp file.
pub fn capture_content(editor_override: Option<&str>) -> Result<String> {
    let editor = get_editor(editor_override)?;

    let temp_file = env::temp_dir().join(format!("snip-{}.txt", std::process::id()));
    fs::write(&temp_file, "")?;

    let result = open_in_editor(&editor, &temp_file);

    let _ = fs::remove_file(&temp_file);

    result
}
