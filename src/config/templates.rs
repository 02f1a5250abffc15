//! Fixed file contents written by the scaffolding commands

/// Project config file name
pub const CONFIG_FILE: &str = ".config.json";

/// Entrypoint stub file name
pub const ENTRYPOINT_FILE: &str = "__init__.py";

/// Template descriptor file name
pub const TEMPLATE_FILE: &str = ".template.json";

/// Template schema file name
pub const TEMPLATE_SCHEMA_FILE: &str = ".template.schema.json";

/// Derived lang schema file name
pub const LANG_SCHEMA_FILE: &str = ".lang.schema.json";

/// Derived lang model file name
pub const MODEL_FILE: &str = "model.py";

/// i18n root directory name
pub const I18N_DIR: &str = "i18n";

/// Line the entrypoint must end with once a model exists
pub const MODEL_IMPORT_LINE: &str = "from .model import Lang as Lang";

pub const CONFIG_TEMPLATE: &str = r#"{
  "default": "zh-CN",
  "frozen": [],
  "require": []
}
"#;

pub const ENTRYPOINT_TEMPLATE: &str = r#"# This file is @generated by tarina.lang CLI tool
# It is not intended for manual editing.

from pathlib import Path

from tarina.lang import lang


lang.load(Path(__file__).parent)
"#;

pub const TEMPLATE_TEMPLATE: &str = r#"{
  "$schema": ".template.schema.json",
  "scopes": []
}
"#;

pub const TEMPLATE_SCHEMA: &str = r##"{
  "title": "Template",
  "description": "Template for lang items to generate schema for lang files",
  "type": "object",
  "properties": {
    "scopes": {
      "title": "Scopes",
      "description": "All scopes of lang items",
      "type": "array",
      "uniqueItems": true,
      "items": {
        "title": "Scope",
        "description": "First level of all lang items",
        "type": "object",
        "properties": {
          "scope": {
            "type": "string",
            "description": "Scope name"
          },
          "types": {
            "type": "array",
            "description": "All types of lang items",
            "uniqueItems": true,
            "items": {
              "oneOf": [
                {
                  "type": "string",
                  "description": "Value of lang item"
                },
                {
                  "type": "object",
                  "properties": {
                    "subtype": {
                      "type": "string",
                      "description": "Subtype name of lang item"
                    },
                    "types": {
                      "type": "array",
                      "description": "All subtypes of lang items",
                      "uniqueItems": true,
                      "items": {
                        "$ref": "#/properties/scopes/items/properties/types/items"
                      }
                    }
                  }
                }
              ]
            }
          }
        }
      }
    }
  }
}
"##;

pub const LANG_TEMPLATE_JSON: &str = r#"{
  "$schema": ".lang.schema.json"
}
"#;

pub const LANG_TEMPLATE_YAML: &str = "# $schema: .lang.schema.json\n\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_templates_are_valid_json() {
        for text in [
            CONFIG_TEMPLATE,
            TEMPLATE_TEMPLATE,
            TEMPLATE_SCHEMA,
            LANG_TEMPLATE_JSON,
        ] {
            let parsed: serde_json::Result<serde_json::Value> = serde_json::from_str(text);
            assert!(parsed.is_ok(), "invalid JSON template: {}", text);
        }
    }

    #[test]
    fn test_config_template_parses_as_project_config() {
        let config: crate::config::ProjectConfig = serde_json::from_str(CONFIG_TEMPLATE).unwrap();
        assert_eq!(config.default, "zh-CN");
        assert!(config.frozen.is_empty());
        assert!(config.require.is_empty());
    }

    #[test]
    fn test_entrypoint_does_not_import_model() {
        assert!(!ENTRYPOINT_TEMPLATE.contains(MODEL_IMPORT_LINE));
        assert!(ENTRYPOINT_TEMPLATE.ends_with('\n'));
    }
}
