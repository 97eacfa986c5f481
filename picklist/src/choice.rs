//! Choices and selection sets.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// One selectable entry.
///
/// The list compares choices only by equality and shows them only through
/// the configured label function; it never looks inside a record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Text(String),
    Number(i64),
    Record(BTreeMap<String, Choice>),
}

/// The set of currently selected choices, owned by the host.
pub type SelectionSet = BTreeSet<Choice>;

impl Choice {
    /// Build a record choice from `(field, value)` pairs.
    pub fn record<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Choice>,
    {
        Choice::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Field of a record choice.
    pub fn field(&self, name: &str) -> Option<&Choice> {
        match self {
            Choice::Record(fields) => fields.get(name),
            _ => None,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::Text(s) => f.write_str(s),
            Choice::Number(n) => write!(f, "{n}"),
            Choice::Record(fields) => {
                f.write_str("{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key} {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for Choice {
    fn from(s: &str) -> Self {
        Choice::Text(s.to_string())
    }
}

impl From<String> for Choice {
    fn from(s: String) -> Self {
        Choice::Text(s)
    }
}

impl From<i64> for Choice {
    fn from(n: i64) -> Self {
        Choice::Number(n)
    }
}

/// Collect anything choice-like into a [`SelectionSet`].
pub fn selection<C: Into<Choice>>(items: impl IntoIterator<Item = C>) -> SelectionSet {
    items.into_iter().map(Into::into).collect()
}

/// Collect anything choice-like into an ordered list of choices.
pub fn choices<C: Into<Choice>>(items: impl IntoIterator<Item = C>) -> Vec<Choice> {
    items.into_iter().map(Into::into).collect()
}
