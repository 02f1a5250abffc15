//! Lang schema derivation
//!
//! Builds `.lang.schema.json` from the template descriptor. Every scope becomes
//! an object property; every item becomes a string property and every subtype a
//! nested object, in template order.

use crate::config::templates::LANG_SCHEMA_FILE;
use crate::error::{SchemaError, SchemaResult};
use crate::generate::template::{load_template, ItemType, Template};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Lang file extensions that are checked before writing the schema
const LANG_FILE_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Derive the lang schema for `root` and write it to `.lang.schema.json`
///
/// Existing lang files are parsed first so that a broken lang file is reported
/// instead of silently ignored. Returns the path of the written schema.
pub fn write_lang_schema(root: &Path) -> SchemaResult<PathBuf> {
    let template = load_template(root)?;

    for lang_file in find_lang_files(root)? {
        check_lang_file(&lang_file)?;
    }

    let schema = build_lang_schema(&template);
    let path = root.join(LANG_SCHEMA_FILE);
    let mut text = serde_json::to_string_pretty(&schema)?;
    text.push('\n');
    fs::write(&path, text)?;

    Ok(path)
}

/// Build the lang schema document for a template
pub fn build_lang_schema(template: &Template) -> Value {
    let mut properties = Map::new();
    properties.insert(
        "$schema".to_string(),
        json!({
            "type": "string",
            "description": "Reference to the lang schema"
        }),
    );

    for scope in &template.scopes {
        properties.insert(
            scope.scope.clone(),
            json!({
                "title": scope.scope,
                "description": format!("Scope {}", scope.scope),
                "type": "object",
                "additionalProperties": false,
                "properties": type_properties(&scope.types),
            }),
        );
    }

    json!({
        "title": "Lang Schema",
        "description": "Schema for lang files",
        "type": "object",
        "additionalProperties": false,
        "properties": properties,
    })
}

fn type_properties(types: &[ItemType]) -> Map<String, Value> {
    let mut properties = Map::new();

    for item in types {
        let value = match item {
            ItemType::Item(name) => json!({
                "type": "string",
                "description": format!("Value of lang item {}", name),
            }),
            ItemType::Subtype(sub) => json!({
                "type": "object",
                "description": format!("Subtype {}", sub.subtype),
                "additionalProperties": false,
                "properties": type_properties(&sub.types),
            }),
        };
        properties.insert(item.name().to_string(), value);
    }

    properties
}

/// List lang files directly inside `root`, skipping hidden files
pub fn find_lang_files(root: &Path) -> SchemaResult<Vec<PathBuf>> {
    let base = glob::Pattern::escape(&root.to_string_lossy());
    let mut files = Vec::new();

    for ext in LANG_FILE_EXTENSIONS {
        let pattern = format!("{}/*.{}", base, ext);
        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| SchemaError::LangFile {
                path: e.path().to_path_buf(),
                error: e.error().to_string(),
            })?;
            let hidden = path
                .file_name()
                .map(|n| n.to_string_lossy().starts_with('.'))
                .unwrap_or(true);
            if !hidden && path.is_file() {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Check that a lang file parses into a mapping
fn check_lang_file(path: &Path) -> SchemaResult<()> {
    let contents = fs::read_to_string(path)?;
    let invalid = |error: String| SchemaError::LangFile {
        path: path.to_path_buf(),
        error,
    };

    let is_json = path.extension().map(|e| e == "json").unwrap_or(false);
    if is_json {
        let value: Value = serde_json::from_str(&contents).map_err(|e| invalid(e.to_string()))?;
        if !value.is_object() {
            return Err(invalid("expected a JSON object".to_string()));
        }
    } else {
        let value: serde_yaml::Value =
            serde_yaml::from_str(&contents).map_err(|e| invalid(e.to_string()))?;
        // A comment-only file deserializes to null
        if !(value.is_mapping() || value.is_null()) {
            return Err(invalid("expected a YAML mapping".to_string()));
        }
    }

    Ok(())
}
