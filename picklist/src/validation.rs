//! Attribute key checks run before a list is built.

use crate::error::ConfigurationError;

pub const CHOICES: &str = "choices";
pub const MODEL: &str = "model";
pub const ON_CHANGE: &str = "on-change";
pub const MULTI_SELECT: &str = "multi-select?";
pub const AS_EXCLUSIONS: &str = "as-exclusions?";
pub const REQUIRED: &str = "required?";
pub const DISABLED: &str = "disabled?";
pub const HIDE_BORDER: &str = "hide-border?";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const MAX_HEIGHT: &str = "max-height";
pub const ITEM_RENDERER: &str = "item-renderer";
pub const LABEL_FN: &str = "label-fn";

/// Every attribute the selection list understands.
pub const ALLOWED_KEYS: &[&str] = &[
    CHOICES,
    MODEL,
    ON_CHANGE,
    MULTI_SELECT,
    AS_EXCLUSIONS,
    REQUIRED,
    DISABLED,
    HIDE_BORDER,
    WIDTH,
    HEIGHT,
    MAX_HEIGHT,
    ITEM_RENDERER,
    LABEL_FN,
];

/// Attributes without a default.
pub const REQUIRED_KEYS: &[&str] = &[CHOICES, MODEL, ON_CHANGE];

/// Check `supplied` keys against the `allowed` list and make sure every
/// required key is present.
///
/// Unknown keys are reported before missing ones.
pub fn validate(allowed: &[&str], supplied: &[&str]) -> Result<(), ConfigurationError> {
    if let Some(unknown) = supplied.iter().find(|key| !allowed.contains(*key)) {
        return Err(ConfigurationError::UnknownAttribute(unknown.to_string()));
    }

    if let Some(missing) = REQUIRED_KEYS.iter().find(|key| !supplied.contains(*key)) {
        return Err(ConfigurationError::MissingAttribute(*missing));
    }

    Ok(())
}

/// [`validate`] against [`ALLOWED_KEYS`].
pub fn validate_keys<S: AsRef<str>>(supplied: &[S]) -> Result<(), ConfigurationError> {
    let keys: Vec<&str> = supplied.iter().map(AsRef::as_ref).collect();
    validate(ALLOWED_KEYS, &keys)
}
