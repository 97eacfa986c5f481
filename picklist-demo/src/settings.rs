//! Demo settings: the list's attributes, read from a JSON file.
//!
//! The file uses the list's own attribute names:
//!
//! ```json
//! {
//!   "choices": ["apples", "pears", {"label": "Figs", "sort": 3}],
//!   "model": ["pears"],
//!   "multi-select?": false,
//!   "required?": true,
//!   "width": 24
//! }
//! ```
//!
//! `on-change` is always supplied by the demo itself.

use std::fs;
use std::path::Path;

use picklist::validation::{self, validate_keys};
use picklist::{Choice, ListHost, choices};
use picklist_dom::Size;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::DemoError;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub model: Vec<Choice>,
    #[serde(rename = "multi-select?", default = "default_true")]
    pub multi_select: bool,
    #[serde(rename = "as-exclusions?", default)]
    pub as_exclusions: bool,
    #[serde(rename = "required?", default)]
    pub required: bool,
    #[serde(rename = "disabled?", default)]
    pub disabled: bool,
    #[serde(rename = "hide-border?", default)]
    pub hide_border: bool,
    /// Fixed width in columns.
    #[serde(default)]
    pub width: Option<u16>,
    /// Fixed height in rows, border included.
    #[serde(default)]
    pub height: Option<u16>,
    #[serde(rename = "max-height", default)]
    pub max_height: Option<u16>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            choices: choices(["apples", "pears", "plums", "figs", "quinces"]),
            model: choices(["pears"]),
            multi_select: true,
            as_exclusions: false,
            required: false,
            disabled: false,
            hide_border: false,
            width: None,
            height: None,
            max_height: None,
        }
    }
}

/// Keys the file may not set: the demo owns the callback and renders with
/// the default item rows and labels.
const RESERVED_KEYS: &[&str] = &[
    validation::ON_CHANGE,
    validation::ITEM_RENDERER,
    validation::LABEL_FN,
];

impl Settings {
    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let text = fs::read_to_string(path)?;
        let settings = Self::parse(&text)?;
        log::info!(
            "loaded {} choices from {}",
            settings.choices.len(),
            path.display()
        );
        Ok(settings)
    }

    /// Parse a settings document, checking its keys with the list's
    /// attribute validator first.
    pub fn parse(text: &str) -> Result<Self, DemoError> {
        let raw: Map<String, Value> = serde_json::from_str(text)?;

        let mut keys: Vec<&str> = raw
            .keys()
            .map(String::as_str)
            .filter(|key| !RESERVED_KEYS.contains(key))
            .collect();
        if let Some(reserved) = raw.keys().find(|key| RESERVED_KEYS.contains(&key.as_str())) {
            return Err(picklist::ConfigurationError::UnknownAttribute(reserved.clone()).into());
        }
        keys.push(validation::ON_CHANGE);
        validate_keys(&keys)?;

        Ok(serde_json::from_value(Value::Object(raw))?)
    }

    pub fn into_host(self) -> ListHost {
        let mut host = ListHost::new(self.choices, self.model.into_iter().collect())
            .multi_select(self.multi_select)
            .as_exclusions(self.as_exclusions)
            .required(self.required)
            .disabled(self.disabled)
            .hide_border(self.hide_border);
        if let Some(width) = self.width {
            host = host.width(Size::Fixed(width));
        }
        if let Some(height) = self.height {
            host = host.height(Size::Fixed(height));
        }
        if let Some(max_height) = self.max_height {
            host = host.max_height(max_height);
        }
        host
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use picklist::{ConfigurationError, selection};

    use super::*;

    #[test]
    fn test_parse_uses_defaults() {
        let settings = Settings::parse(r#"{"choices": ["a", "b"], "model": ["b"]}"#).unwrap();
        assert_eq!(settings.choices, choices(["a", "b"]));
        assert!(settings.multi_select);
        assert!(!settings.required);
        assert_eq!(settings.max_height, None);
    }

    #[test]
    fn test_parse_reads_flags_and_records() {
        let settings = Settings::parse(
            r#"{
                "choices": [{"label": "Low", "sort": 1}, "other"],
                "model": [],
                "multi-select?": false,
                "required?": true,
                "max-height": 4
            }"#,
        )
        .unwrap();
        assert!(!settings.multi_select);
        assert!(settings.required);
        assert_eq!(settings.max_height, Some(4));
        assert_eq!(settings.choices[0].field("sort"), Some(&Choice::from(1i64)));
    }

    #[test]
    fn test_size_keys_reach_the_list() {
        let settings = Settings::parse(
            r#"{"choices": ["a", "b", "c"], "model": [], "width": 12, "height": 3}"#,
        )
        .unwrap();
        assert_eq!(settings.width, Some(12));
        assert_eq!(settings.height, Some(3));

        let mut host = settings.into_host();
        let root = host.render().unwrap();
        assert_eq!(root.width, Size::Fixed(12));
        assert_eq!(root.height, Size::Fixed(3));
        assert_eq!(
            picklist_dom::render_lines(root, 20, 10),
            vec!["╭──────────╮", "│ [ ] a    │", "╰──────────╯"]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = Settings::parse(r#"{"choices": [], "model": [], "colour": "red"}"#).unwrap_err();
        assert!(matches!(
            err,
            DemoError::Configuration(ConfigurationError::UnknownAttribute(key)) if key == "colour"
        ));
    }

    #[test]
    fn test_parse_rejects_missing_model() {
        let err = Settings::parse(r#"{"choices": ["a"]}"#).unwrap_err();
        assert!(matches!(
            err,
            DemoError::Configuration(ConfigurationError::MissingAttribute("model"))
        ));
    }

    #[test]
    fn test_parse_rejects_callback_keys() {
        let err =
            Settings::parse(r#"{"choices": [], "model": [], "on-change": null}"#).unwrap_err();
        assert!(matches!(
            err,
            DemoError::Configuration(ConfigurationError::UnknownAttribute(_))
        ));
    }

    #[test]
    fn test_load_from_file_builds_host() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"choices": ["a", "b", "c"], "model": ["a", "c"], "multi-select?": false}}"#
        )
        .unwrap();

        let mut host = Settings::load(file.path()).unwrap().into_host();
        host.render().unwrap();
        assert_eq!(host.model(), selection(["a"]));
    }
}
