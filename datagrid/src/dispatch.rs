//! Shape-based dispatch of configured behaviors.
//!
//! A configured source, sorter, pager or cell renderer is one of three
//! shapes: a callable, the name of a registered plugin, or a composite object
//! whose keys name plugins and whose values are per-invocation options. The
//! same resolution applies to all four categories.

use std::str::FromStr;

use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::{Map, Value};

use crate::error::{DispatchError, RegistryError};

/// A class of pluggable behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Source,
    Sorter,
    Pager,
    Cell,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Source,
        Category::Sorter,
        Category::Pager,
        Category::Cell,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Sorter => "sorter",
            Self::Pager => "pager",
            Self::Cell => "cell",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(Self::Source),
            "sorter" | "sortable" => Ok(Self::Sorter),
            "pager" => Ok(Self::Pager),
            "cell" => Ok(Self::Cell),
            other => Err(RegistryError::InvalidCategory(other.to_string())),
        }
    }
}

/// A configured behavior of unknown shape.
#[derive(Clone)]
pub enum Behavior<F> {
    /// Invoked directly, without registry lookup.
    Callable(F),
    /// Name of a registered plugin.
    Named(String),
    /// Plugin name → options. The first key naming a registered plugin wins.
    Composite(Map<String, Value>),
}

impl<F> std::fmt::Debug for Behavior<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Callable(_) => write!(f, "Callable(..)"),
            Self::Named(name) => write!(f, "Named({name:?})"),
            Self::Composite(map) => write!(f, "Composite({})", Value::Object(map.clone())),
        }
    }
}

/// The plugin chosen by dispatch and the options to append to its arguments.
#[derive(Clone)]
pub struct Resolved<F> {
    pub plugin: F,
    /// Value of the matching composite key; `None` for callables and names.
    pub options: Option<Value>,
}

impl<F> Resolved<F> {
    /// Trailing arguments to pass to the plugin.
    pub fn args(&self) -> Vec<Value> {
        self.options.iter().cloned().collect()
    }
}

impl<F> Behavior<F> {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn callable(f: F) -> Self {
        Self::Callable(f)
    }

    /// Reads a declarative behavior: a string names a plugin, an object is a
    /// composite. Anything else (notably `false` and `null`) means "none".
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(Self::Named(name.clone())),
            Value::Object(map) => Some(Self::Composite(map.clone())),
            _ => None,
        }
    }

    /// Resolves the behavior against `lookup`, which maps a plugin name of
    /// `category` to a registered plugin.
    pub fn resolve(
        &self,
        category: Category,
        lookup: impl Fn(&str) -> Option<F>,
    ) -> Result<Resolved<F>, DispatchError>
    where
        F: Clone,
    {
        match self {
            Self::Callable(f) => Ok(Resolved {
                plugin: f.clone(),
                options: None,
            }),
            Self::Named(name) => lookup(name)
                .map(|plugin| Resolved {
                    plugin,
                    options: None,
                })
                .ok_or_else(|| DispatchError::unknown(category, name.clone())),
            Self::Composite(map) => map
                .iter()
                .find_map(|(name, options)| {
                    lookup(name).map(|plugin| Resolved {
                        plugin,
                        options: Some(options.clone()),
                    })
                })
                .ok_or_else(|| {
                    DispatchError::unknown(category, Value::Object(map.clone()).to_string())
                }),
        }
    }
}

impl<'de, F> Deserialize<'de> for Behavior<F> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value)
            .ok_or_else(|| D::Error::custom(format!("expected plugin name or object, got {value}")))
    }
}

/// Deserializes an optional behavior where `false` and `null` mean "none".
pub(crate) fn deserialize_optional<'de, D, F>(deserializer: D) -> Result<Option<Behavior<F>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match &value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::String(_) | Value::Object(_) => Ok(Behavior::from_value(&value)),
        other => Err(D::Error::custom(format!(
            "expected plugin name, object or false, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    type Plugin = &'static str;

    fn lookup(name: &str) -> Option<Plugin> {
        match name {
            "bootstrap" => Some("bootstrap"),
            "sliding" => Some("sliding"),
            _ => None,
        }
    }

    fn composite(value: Value) -> Behavior<Plugin> {
        Behavior::from_value(&value).unwrap()
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("sortable".parse::<Category>().unwrap(), Category::Sorter);
        assert_eq!("cell".parse::<Category>().unwrap(), Category::Cell);
        assert!(matches!(
            "widget".parse::<Category>(),
            Err(RegistryError::InvalidCategory(name)) if name == "widget"
        ));
    }

    #[test]
    fn test_callable_bypasses_lookup() {
        let resolved = Behavior::Callable("inline").resolve(Category::Cell, lookup).unwrap();
        assert_eq!(resolved.plugin, "inline");
        assert!(resolved.args().is_empty());
    }

    #[test]
    fn test_named() {
        let resolved = Behavior::named("bootstrap").resolve(Category::Sorter, lookup).unwrap();
        assert_eq!(resolved.plugin, "bootstrap");

        let err = Behavior::<Plugin>::named("material")
            .resolve(Category::Sorter, lookup)
            .err()
            .unwrap();
        assert_eq!(err, DispatchError::unknown(Category::Sorter, "material"));
        assert_eq!(err.to_string(), "Unknown sorter: material");
    }

    #[test]
    fn test_composite_first_registered_key_wins() {
        let behavior = composite(json!({
            "missing": {"a": 1},
            "sliding": {"pages": 2},
            "bootstrap": {"b": 2}
        }));
        let resolved = behavior.resolve(Category::Pager, lookup).unwrap();

        assert_eq!(resolved.plugin, "sliding");
        assert_eq!(resolved.args(), vec![json!({"pages": 2})]);
    }

    #[test]
    fn test_empty_composite_is_unknown() {
        let err = composite(json!({})).resolve(Category::Cell, lookup).err().unwrap();
        assert_eq!(err, DispatchError::unknown(Category::Cell, "{}"));
    }

    #[test]
    fn test_composite_without_match_reports_object() {
        let err = composite(json!({"nope": true}))
            .resolve(Category::Pager, lookup)
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "Unknown pager: {\"nope\":true}");
    }

    #[test]
    fn test_from_value_false_is_none() {
        assert!(Behavior::<Plugin>::from_value(&json!(false)).is_none());
        assert!(Behavior::<Plugin>::from_value(&Value::Null).is_none());
        assert!(Behavior::<Plugin>::from_value(&json!(3)).is_none());
    }
}
