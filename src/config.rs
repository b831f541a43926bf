use std::path::{Path, PathBuf};

use crate::error::RemapError;
use crate::registry::AliasRegistry;

/// Declaration file name searched by the upward walk.
pub const CONFIG_FILE: &str = "remap.json";

/// Built-in alias table applied when no declaration file is found.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("@", "./src"),
    ("components", "./src/components"),
    ("assets", "./src/assets"),
    ("utils", "./src/utils"),
];

/// Build the registry for a project directory.
///
/// Walks up from `project_dir` looking for `remap.json`; falls back to the
/// built-in table with `project_dir` as base when none is found.
pub fn load(project_dir: &Path) -> Result<AliasRegistry, RemapError> {
    match find_config(project_dir) {
        Some(file) => load_file(&file),
        None => builtin(project_dir),
    }
}

/// Build the registry from an explicit declaration file.
///
/// The file's `aliases` replace the built-in table entirely; its directory
/// joined with the optional `root` field becomes the base directory.
pub fn load_file(file: &Path) -> Result<AliasRegistry, RemapError> {
    let content = std::fs::read_to_string(file).map_err(|e| RemapError::Io {
        path: file.display().to_string(),
        source: e,
    })?;
    let stripped = strip_jsonc_comments(&content);

    let val: serde_json::Value =
        serde_json::from_str(&stripped).map_err(|e| RemapError::Config {
            path: file.display().to_string(),
            message: e.to_string(),
        })?;

    let file_dir = file.parent().unwrap_or(Path::new("."));
    let root = val
        .get("root")
        .and_then(serde_json::Value::as_str)
        .unwrap_or(".");
    let base = absolute_base(&file_dir.join(root))?;

    let aliases = val
        .get("aliases")
        .and_then(serde_json::Value::as_object)
        .ok_or_else(|| RemapError::Config {
            path: file.display().to_string(),
            message: "missing \"aliases\" object".to_string(),
        })?;

    let mut registry = AliasRegistry::with_base(base);
    for (symbol, target) in aliases {
        let target = target.as_str().ok_or_else(|| RemapError::Config {
            path: file.display().to_string(),
            message: format!("alias '{symbol}': target must be a string"),
        })?;
        registry.register(symbol, target)?;
    }
    Ok(registry)
}

/// Build the registry from the built-in table.
fn builtin(project_dir: &Path) -> Result<AliasRegistry, RemapError> {
    let base = absolute_base(project_dir)?;
    let mut registry = AliasRegistry::with_base(base);
    for (symbol, target) in DEFAULT_ALIASES {
        registry.register(symbol, target)?;
    }
    Ok(registry)
}

/// Validate the base directory and make it absolute.
///
/// Registered targets need not exist (the bundler may create them), but a
/// missing base means the whole configuration points at the wrong project.
fn absolute_base(dir: &Path) -> Result<PathBuf, RemapError> {
    if !dir.is_dir() {
        return Err(RemapError::BadBaseDir(dir.display().to_string()));
    }
    std::fs::canonicalize(dir).map_err(|e| RemapError::Io {
        path: dir.display().to_string(),
        source: e,
    })
}

/// Walk up directories from `start` looking for the declaration file.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut dir = if start.is_dir() {
        start.to_path_buf()
    } else {
        start.parent()?.to_path_buf()
    };

    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Strip JSONC comments (`//` line and `/* */` block) while preserving
/// string contents.
fn strip_jsonc_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push('"');
                let mut escaped = false;
                for c in chars.by_ref() {
                    out.push(c);
                    if escaped {
                        escaped = false;
                    } else if c == '\\' {
                        escaped = true;
                    } else if c == '"' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                while chars.next_if(|&c| c != '\n').is_some() {}
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => out.push(ch),
        }
    }

    out
}
