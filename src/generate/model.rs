//! Lang model derivation
//!
//! Renders `model.py`, a typed accessor module for the runtime library, from the
//! template descriptor, and keeps the project entrypoint importing it.

use crate::config::templates::{ENTRYPOINT_FILE, MODEL_FILE, MODEL_IMPORT_LINE};
use crate::error::{ModelError, ModelResult};
use crate::generate::template::{load_template, ItemType, Template};
use regex::Regex;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const MODEL_HEADER: &str = "# This file is @generated by tarina.lang CLI tool
# It is not intended for manual editing.

from tarina.lang.model import LangItem, LangModel
";

/// Names the generated module already binds
const RESERVED_CLASS_NAMES: &[&str] = &["Lang", "LangItem", "LangModel"];

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
    "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return",
    "try", "while", "with", "yield",
];

/// Derive the lang model for `root` and write it to `model.py`
///
/// Returns the path of the written model.
pub fn write_model(root: &Path) -> ModelResult<PathBuf> {
    let template = load_template(root)?;
    let path = root.join(MODEL_FILE);
    let source = render_model(&template)?;
    fs::write(&path, source)?;
    Ok(path)
}

/// Render the model module source for a template
///
/// Fails when two template names map to the same Python class name, or to the
/// same attribute name within one class.
pub fn render_model(template: &Template) -> ModelResult<String> {
    let mut renderer = Renderer::default();
    let mut root_attrs = Attributes::new("Lang");

    for scope in &template.scopes {
        let path = [scope.scope.as_str()];
        let class_name = renderer.claim_class(&path)?;
        renderer.render_class(&class_name, &scope.scope, &path, &scope.types)?;
        let attr = root_attrs.claim(&scope.scope)?;
        root_attrs.push(format!("    {} = {}", attr, class_name));
    }

    let mut out = String::from(MODEL_HEADER);
    for class in &renderer.classes {
        out.push_str("\n\n");
        out.push_str(class);
    }

    out.push_str("\n\nclass Lang(LangModel):\n");
    out.push_str(&root_attrs.into_body());

    Ok(out)
}

/// Rendered classes plus the template path that claimed each class name
#[derive(Default)]
struct Renderer {
    classes: Vec<String>,
    owners: HashMap<String, String>,
}

impl Renderer {
    /// Reserve the class name for a scope/subtype path
    fn claim_class(&mut self, path: &[&str]) -> ModelResult<String> {
        let name = class_name(path);
        let source = path.join(".");
        if let Some(first) = self.owners.get(&name) {
            return Err(ModelError::NameCollision {
                name,
                first: first.clone(),
                second: source,
            });
        }
        self.owners.insert(name.clone(), source);
        Ok(name)
    }

    /// Render one class; nested subtype classes are pushed before it
    fn render_class(
        &mut self,
        name: &str,
        scope: &str,
        path: &[&str],
        types: &[ItemType],
    ) -> ModelResult<()> {
        let mut attrs = Attributes::new(&path.join("."));

        for item in types {
            match item {
                ItemType::Item(item_name) => {
                    let attr = attrs.claim(item_name)?;
                    // Item keys are relative to the scope
                    let mut key: Vec<&str> = path[1..].to_vec();
                    key.push(item_name);
                    attrs.push(format!(
                        "    {}: LangItem = LangItem({:?}, {:?})",
                        attr,
                        scope,
                        key.join(".")
                    ));
                }
                ItemType::Subtype(sub) => {
                    let attr = attrs.claim(&sub.subtype)?;
                    let mut sub_path = path.to_vec();
                    sub_path.push(&sub.subtype);
                    let sub_class = self.claim_class(&sub_path)?;
                    self.render_class(&sub_class, scope, &sub_path, &sub.types)?;
                    attrs.push(format!("    {} = {}", attr, sub_class));
                }
            }
        }

        self.classes.push(format!("class {}:\n{}", name, attrs.into_body()));
        Ok(())
    }
}

/// Attribute lines of one class, keyed by sanitized name
struct Attributes {
    owner: String,
    names: HashMap<String, String>,
    lines: Vec<String>,
}

impl Attributes {
    fn new(owner: &str) -> Self {
        Attributes {
            owner: owner.to_string(),
            names: HashMap::new(),
            lines: Vec::new(),
        }
    }

    /// Sanitize a template name, failing if another name already maps to it
    fn claim(&mut self, name: &str) -> ModelResult<String> {
        let ident = identifier(name);
        if let Some(first) = self.names.get(&ident) {
            return Err(ModelError::NameCollision {
                name: format!("{}.{}", self.owner, ident),
                first: first.clone(),
                second: name.to_string(),
            });
        }
        self.names.insert(ident.clone(), name.to_string());
        Ok(ident)
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    fn into_body(self) -> String {
        if self.lines.is_empty() {
            return "    pass\n".to_string();
        }
        let mut body = String::new();
        for line in &self.lines {
            let _ = writeln!(body, "{}", line);
        }
        body
    }
}

fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\W").expect("valid identifier regex"))
}

fn word_split() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid word regex"))
}

/// Turn an item name into a valid attribute identifier
pub fn identifier(name: &str) -> String {
    let mut ident = non_word().replace_all(name, "_").into_owned();
    if ident.is_empty() || ident.starts_with(|c: char| c.is_numeric()) {
        ident.insert(0, '_');
    }
    if PYTHON_KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// PascalCase class name for a scope/subtype path
pub fn class_name(path: &[&str]) -> String {
    let mut name = String::new();
    for segment in path {
        for word in word_split().split(segment).filter(|w| !w.is_empty()) {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                name.extend(first.to_uppercase());
                name.push_str(chars.as_str());
            }
        }
    }

    if name.is_empty() || name.starts_with(|c: char| c.is_numeric()) {
        name.insert(0, '_');
    }
    if RESERVED_CLASS_NAMES.contains(&name.as_str()) {
        name.push('_');
    }
    name
}

/// Make the entrypoint end with the model import line
///
/// Returns `true` when the line was appended, `false` when it was already last.
pub fn patch_entrypoint(root: &Path) -> ModelResult<bool> {
    let path = root.join(ENTRYPOINT_FILE);
    if !path.is_file() {
        return Err(ModelError::EntrypointNotFound(path));
    }

    let contents = fs::read_to_string(&path)?;
    let last_line = match contents.split_inclusive('\n').last() {
        Some(line) => line,
        None => return Err(ModelError::EntrypointEmpty(path)),
    };

    let import_line = format!("{}\n", MODEL_IMPORT_LINE);
    if last_line == import_line {
        return Ok(false);
    }

    let mut file = OpenOptions::new().append(true).open(&path)?;
    write!(file, "\n{}", import_line)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::templates::{ENTRYPOINT_TEMPLATE, TEMPLATE_FILE};
    use crate::error::TemplateError;
    use tempfile::TempDir;

    fn template(json: &str) -> Template {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_render_empty_template() {
        let out = render_model(&Template::default()).unwrap();
        assert!(out.starts_with(MODEL_HEADER));
        assert!(out.ends_with("class Lang(LangModel):\n    pass\n"));
    }

    #[test]
    fn test_render_nested_model() {
        let out = render_model(&template(
            r#"{"scopes": [{"scope": "main-menu", "types": ["open", {"subtype": "file", "types": ["save"]}]}]}"#,
        ))
        .unwrap();

        let expected = "\n\nclass MainMenuFile:\n    save: LangItem = LangItem(\"main-menu\", \"file.save\")\n\
\n\nclass MainMenu:\n    open: LangItem = LangItem(\"main-menu\", \"open\")\n    file = MainMenuFile\n\
\n\nclass Lang(LangModel):\n    main_menu = MainMenu\n";
        assert_eq!(out, format!("{}{}", MODEL_HEADER, expected));
    }

    #[test]
    fn test_identifier_sanitizing() {
        assert_eq!(identifier("hello"), "hello");
        assert_eq!(identifier("hello-world"), "hello_world");
        assert_eq!(identifier("1st"), "_1st");
        assert_eq!(identifier("class"), "class_");
        assert_eq!(identifier(""), "_");
        assert_eq!(identifier("打开"), "打开");
        assert_eq!(identifier("打开 文件"), "打开_文件");
    }

    fn collision(json: &str) -> (String, String, String) {
        match render_model(&template(json)) {
            Err(ModelError::NameCollision {
                name,
                first,
                second,
            }) => (name, first, second),
            other => panic!("expected a name collision, got {:?}", other),
        }
    }

    #[test]
    fn test_render_cjk_names() {
        let out = render_model(&template(
            r#"{"scopes": [{"scope": "菜单", "types": ["打开"]}, {"scope": "设置", "types": ["关闭"]}]}"#,
        ))
        .unwrap();

        assert!(out.contains("class 菜单:\n    打开: LangItem = LangItem(\"菜单\", \"打开\")\n"));
        assert!(out.contains("class 设置:\n    关闭: LangItem = LangItem(\"设置\", \"关闭\")\n"));
        assert!(out.ends_with("class Lang(LangModel):\n    菜单 = 菜单\n    设置 = 设置\n"));
    }

    #[test]
    fn test_scopes_differing_in_case_collide() {
        let (name, first, second) =
            collision(r#"{"scopes": [{"scope": "menu"}, {"scope": "Menu"}]}"#);
        assert_eq!(name, "Menu");
        assert_eq!(first, "menu");
        assert_eq!(second, "Menu");
    }

    #[test]
    fn test_items_differing_in_punctuation_collide() {
        let (name, first, second) =
            collision(r#"{"scopes": [{"scope": "menu", "types": ["a-b", "a_b"]}]}"#);
        assert_eq!(name, "menu.a_b");
        assert_eq!(first, "a-b");
        assert_eq!(second, "a_b");
    }

    #[test]
    fn test_nested_class_collision() {
        let (name, _, _) = collision(
            r#"{"scopes": [
                {"scope": "a", "types": [{"subtype": "b_c", "types": []}]},
                {"scope": "a_b", "types": [{"subtype": "c", "types": []}]}
            ]}"#,
        );
        assert_eq!(name, "ABC");
    }

    #[test]
    fn test_write_model_refuses_collision() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(TEMPLATE_FILE),
            r#"{"scopes": [{"scope": "menu"}, {"scope": "Menu"}]}"#,
        )
        .unwrap();

        assert!(matches!(
            write_model(temp_dir.path()),
            Err(ModelError::NameCollision { .. })
        ));
        assert!(!temp_dir.path().join(MODEL_FILE).exists());
    }

    #[test]
    fn test_class_name() {
        assert_eq!(class_name(&["menu"]), "Menu");
        assert_eq!(class_name(&["main_menu", "file"]), "MainMenuFile");
        assert_eq!(class_name(&["lang"]), "Lang_");
        assert_eq!(class_name(&["2fa"]), "_2fa");
        assert_eq!(class_name(&["设置", "高级"]), "设置高级");
    }

    #[test]
    fn test_write_model_without_template() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            write_model(temp_dir.path()),
            Err(ModelError::Template(TemplateError::NotFound(_)))
        ));
        assert!(!temp_dir.path().join(MODEL_FILE).exists());
    }

    #[test]
    fn test_write_model() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(TEMPLATE_FILE),
            r#"{"scopes": [{"scope": "menu", "types": ["open"]}]}"#,
        )
        .unwrap();

        let path = write_model(temp_dir.path()).unwrap();
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("class Menu:\n"));
        assert!(contents.contains("    menu = Menu\n"));
    }

    #[test]
    fn test_patch_entrypoint_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(ENTRYPOINT_FILE);
        fs::write(&path, ENTRYPOINT_TEMPLATE).unwrap();

        assert!(patch_entrypoint(temp_dir.path()).unwrap());
        assert!(!patch_entrypoint(temp_dir.path()).unwrap());

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            format!("{}\n{}\n", ENTRYPOINT_TEMPLATE, MODEL_IMPORT_LINE)
        );
        assert_eq!(contents.matches(MODEL_IMPORT_LINE).count(), 1);
    }

    #[test]
    fn test_patch_missing_entrypoint() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            patch_entrypoint(temp_dir.path()),
            Err(ModelError::EntrypointNotFound(_))
        ));
    }

    #[test]
    fn test_patch_empty_entrypoint() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(ENTRYPOINT_FILE), "").unwrap();
        assert!(matches!(
            patch_entrypoint(temp_dir.path()),
            Err(ModelError::EntrypointEmpty(_))
        ));
    }
}
