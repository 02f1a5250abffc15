//! Template descriptor loading and validation
//!
//! The template descriptor (`.template.json`) declares the scopes and the
//! (possibly nested) lang item types that the lang schema and model are
//! derived from.

use crate::config::templates::TEMPLATE_FILE;
use crate::error::{TemplateError, TemplateResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parsed template descriptor
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Template {
    /// Reference to the template schema (editor hint only)
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Top-level scopes of lang items
    #[serde(default)]
    pub scopes: Vec<Scope>,
}

/// First level of lang items
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Scope {
    /// Scope name
    pub scope: String,

    /// Items and subtypes inside the scope
    #[serde(default)]
    pub types: Vec<ItemType>,
}

/// A lang item: either a plain value or a nested group
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ItemType {
    /// A single translatable value
    Item(String),

    /// A named group of further items
    Subtype(Subtype),
}

/// Nested group of lang items
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Subtype {
    /// Subtype name
    pub subtype: String,

    /// Items and subtypes inside this subtype
    #[serde(default)]
    pub types: Vec<ItemType>,
}

impl ItemType {
    /// Name of the item or subtype
    pub fn name(&self) -> &str {
        match self {
            ItemType::Item(name) => name,
            ItemType::Subtype(sub) => &sub.subtype,
        }
    }
}

/// Parse a template descriptor from a string without validating it
pub fn parse_template(json: &str, path: &Path) -> TemplateResult<Template> {
    serde_json::from_str(json).map_err(|e| TemplateError::Parse {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Load and validate the template descriptor from a working directory
pub fn load_template(root: &Path) -> TemplateResult<Template> {
    let path = root.join(TEMPLATE_FILE);
    if !path.is_file() {
        return Err(TemplateError::NotFound(path));
    }

    let contents = fs::read_to_string(&path)?;
    let template = parse_template(&contents, &path)?;
    validate_template(&template)?;

    Ok(template)
}

/// Validate scope and item names
pub fn validate_template(template: &Template) -> TemplateResult<()> {
    let mut seen = HashSet::new();

    for scope in &template.scopes {
        if scope.scope.trim().is_empty() {
            return Err(TemplateError::EmptyScope);
        }
        if !seen.insert(scope.scope.as_str()) {
            return Err(TemplateError::DuplicateScope(scope.scope.clone()));
        }
        validate_types(&scope.scope, &scope.types)?;
    }

    Ok(())
}

/// Recursively validate one level of item types
fn validate_types(parent: &str, types: &[ItemType]) -> TemplateResult<()> {
    let mut seen = HashSet::new();

    for item in types {
        let name = item.name();
        if name.trim().is_empty() {
            return Err(TemplateError::EmptyType(parent.to_string()));
        }
        if !seen.insert(name) {
            return Err(TemplateError::DuplicateType {
                parent: parent.to_string(),
                name: name.to_string(),
            });
        }
        if let ItemType::Subtype(sub) = item {
            validate_types(&format!("{}.{}", parent, sub.subtype), &sub.types)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::templates::TEMPLATE_TEMPLATE;
    use tempfile::TempDir;

    fn parse(json: &str) -> Template {
        parse_template(json, Path::new(TEMPLATE_FILE)).unwrap()
    }

    #[test]
    fn test_parse_initial_template() {
        let template = parse(TEMPLATE_TEMPLATE);
        assert_eq!(template.schema.as_deref(), Some(".template.schema.json"));
        assert!(template.scopes.is_empty());
    }

    #[test]
    fn test_parse_nested_types() {
        let template = parse(
            r#"{
  "scopes": [
    {"scope": "menu", "types": ["open", {"subtype": "file", "types": ["save", "close"]}]}
  ]
}"#,
        );

        let menu = &template.scopes[0];
        assert_eq!(menu.scope, "menu");
        assert!(matches!(&menu.types[0], ItemType::Item(name) if name == "open"));
        match &menu.types[1] {
            ItemType::Subtype(sub) => {
                assert_eq!(sub.subtype, "file");
                assert_eq!(sub.types.len(), 2);
            }
            other => panic!("expected subtype, got {:?}", other),
        }
        assert!(validate_template(&template).is_ok());
    }

    #[test]
    fn test_duplicate_scope() {
        let template = parse(r#"{"scopes": [{"scope": "a"}, {"scope": "a"}]}"#);
        assert!(matches!(
            validate_template(&template),
            Err(TemplateError::DuplicateScope(name)) if name == "a"
        ));
    }

    #[test]
    fn test_duplicate_nested_type() {
        let template = parse(
            r#"{"scopes": [{"scope": "a", "types": [{"subtype": "b", "types": ["x", "x"]}]}]}"#,
        );
        match validate_template(&template) {
            Err(TemplateError::DuplicateType { parent, name }) => {
                assert_eq!(parent, "a.b");
                assert_eq!(name, "x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_names() {
        let template = parse(r#"{"scopes": [{"scope": ""}]}"#);
        assert!(matches!(
            validate_template(&template),
            Err(TemplateError::EmptyScope)
        ));

        let template = parse(r#"{"scopes": [{"scope": "a", "types": [""]}]}"#);
        assert!(matches!(
            validate_template(&template),
            Err(TemplateError::EmptyType(_))
        ));
    }

    #[test]
    fn test_load_missing_template() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            load_template(temp_dir.path()),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_malformed_template() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(TEMPLATE_FILE), r#"{"scopes": [1]}"#).unwrap();
        assert!(matches!(
            load_template(temp_dir.path()),
            Err(TemplateError::Parse { .. })
        ));
    }
}
