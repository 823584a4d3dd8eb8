//! Query parameters and the logical role → parameter name mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ConfigError;

/// Logical parameter roles the engine reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Page,
    PageSize,
    OrderBy,
    Direction,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Page, Role::PageSize, Role::OrderBy, Role::Direction];

    /// Canonical key of the role in a mapping, also its default parameter name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::PageSize => "paging",
            Self::OrderBy => "orderby",
            Self::Direction => "direction",
        }
    }

    /// Parses a mapping key. Accepts the canonical key and the
    /// camel/snake case spellings.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "page" => Some(Self::Page),
            "paging" | "pageSize" | "page_size" => Some(Self::PageSize),
            "orderby" | "orderBy" | "order_by" => Some(Self::OrderBy),
            "direction" => Some(Self::Direction),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Actual parameter names for the four roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamMapping {
    pub page: String,
    pub page_size: String,
    pub order_by: String,
    pub direction: String,
}

impl Default for ParamMapping {
    fn default() -> Self {
        Self {
            page: Role::Page.key().to_string(),
            page_size: Role::PageSize.key().to_string(),
            order_by: Role::OrderBy.key().to_string(),
            direction: Role::Direction.key().to_string(),
        }
    }
}

impl ParamMapping {
    /// Returns the parameter name mapped to `role`.
    pub fn get(&self, role: Role) -> &str {
        match role {
            Role::Page => &self.page,
            Role::PageSize => &self.page_size,
            Role::OrderBy => &self.order_by,
            Role::Direction => &self.direction,
        }
    }

    /// Maps `role` to `name`.
    pub fn set(&mut self, role: Role, name: impl Into<String>) {
        let name = name.into();
        match role {
            Role::Page => self.page = name,
            Role::PageSize => self.page_size = name,
            Role::OrderBy => self.order_by = name,
            Role::Direction => self.direction = name,
        }
    }

    /// Applies overrides key by key; roles not mentioned keep their name.
    pub fn merge(&mut self, overrides: &BTreeMap<String, String>) -> Result<(), ConfigError> {
        for (key, name) in overrides {
            let role = Role::parse(key).ok_or_else(|| ConfigError::UnknownRole(key.clone()))?;
            self.set(role, name.clone());
        }
        Ok(())
    }

    /// Checks that every role is mapped and no two roles share a name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, role) in Role::ALL.iter().enumerate() {
            let name = self.get(*role);
            if name.trim().is_empty() {
                return Err(ConfigError::MissingRole(role.key().to_string()));
            }
            for other in &Role::ALL[i + 1..] {
                if self.get(*other) == name {
                    return Err(ConfigError::DuplicateParam {
                        name: name.to_string(),
                        first: role.key().to_string(),
                        second: other.key().to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Parameters sent with every fetch: the four mapped roles plus whatever
/// defaults and filters inject. Values are scalars or lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParameters(Map<String, Value>);

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Inserts or overwrites a parameter.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Overwrites parameters with every entry of `other`.
    pub fn merge(&mut self, other: QueryParameters) {
        for (name, value) in other.0 {
            self.0.insert(name, value);
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    /// Applies the edits that turned `before` into `after`: changed or new
    /// entries are written, entries missing from `after` are removed. Entries
    /// the edit did not touch keep their current value.
    pub fn apply_diff(&mut self, before: &QueryParameters, after: QueryParameters) {
        for name in before.0.keys().filter(|name| !after.contains(name)) {
            self.remove(name);
        }
        for (name, value) in after.0 {
            if before.get(&name) != Some(&value) {
                self.0.insert(name, value);
            }
        }
    }

    /// Reads a parameter as an unsigned integer. Numeric strings are accepted.
    pub fn get_u64(&self, name: &str) -> Option<u64> {
        match self.0.get(name)? {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Reads a parameter as a string slice (strings only).
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.0.get(name)?.as_str()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Flattens the parameters into form fields. Lists repeat their name
    /// (suffixed with `[]` if not already), objects are sent as JSON text.
    pub fn to_form_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (name, value) in &self.0 {
            match value {
                Value::Array(items) => {
                    let key = if name.ends_with("[]") {
                        name.clone()
                    } else {
                        format!("{name}[]")
                    };
                    for item in items {
                        pairs.push((key.clone(), scalar_to_string(item)));
                    }
                }
                other => pairs.push((name.clone(), scalar_to_string(other))),
            }
        }
        pairs
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<Map<String, Value>> for QueryParameters {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for QueryParameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
