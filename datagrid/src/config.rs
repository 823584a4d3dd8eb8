//! Grid configuration.
//!
//! [`GridOptions`] is the raw, partially specified configuration. It can be
//! deserialized from JSON (accepting the historical option names such as
//! `col`, `attr` or `sortableDefaultAsc`) and completed with callables through
//! builder methods. [`GridConfig::resolve`] merges it over the defaults.
//!
//! # Example
//!
//! ```
//! use datagrid::{ColumnOptions, GridOptions};
//!
//! let config = GridOptions::new()
//!     .url("https://example.com/users")
//!     .column(ColumnOptions::new("id").title("#"))
//!     .column(ColumnOptions::new("name").title("Name").sortable(true))
//!     .param_default("paging", 25)
//!     .resolve()
//!     .unwrap();
//!
//! assert_eq!(config.initial_params().get_u64("paging"), Some(25));
//! ```

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use datagrid_dom::Element;
use serde::Deserialize;
use serde_json::Value;

use crate::dispatch::{deserialize_optional, Behavior};
use crate::error::{ConfigError, ParseError, SourceError};
use crate::params::{ParamMapping, QueryParameters, Role};
use crate::registry::{
    CellContent, CellContext, CellFn, PagerContext, PagerFn, SorterContext, SorterFn,
};
use crate::result::{parse_default, ParseFn, Payload, ResultSet, Row};
use crate::source::{source_fn, SourceFn, SourceRequest};

/// Runs before parameters are merged at the start of every fetch.
///
/// Hooks are called with the grid unlocked; a hook may hold a
/// [`Datagrid`](crate::Datagrid) handle and call back into it. Edits made
/// through the `&mut` argument are applied on top of concurrent changes.
pub type BeforeHook = Arc<dyn Fn(&mut QueryParameters) + Send + Sync>;
/// May transform the parsed result set before it is rendered.
pub type DataHook = Arc<dyn Fn(ResultSet) -> ResultSet + Send + Sync>;
/// May transform each row; receives the row index and the row element.
pub type RowHook = Arc<dyn Fn(Row, usize, &mut Element) -> Row + Send + Sync>;
/// Runs after every render with the container, once it has been committed
/// to the grid.
pub type CompleteHook = Arc<dyn Fn(&Element) + Send + Sync>;

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 15;

/// What to show when a fetch returns no rows.
#[derive(Clone)]
pub enum NoData {
    /// Literal message.
    Message(String),
    /// Message produced on demand.
    Callback(Arc<dyn Fn() -> String + Send + Sync>),
}

impl NoData {
    pub fn message(&self) -> String {
        match self {
            Self::Message(message) => message.clone(),
            Self::Callback(f) => f(),
        }
    }
}

impl Default for NoData {
    fn default() -> Self {
        Self::Message("no data".to_string())
    }
}

impl std::fmt::Debug for NoData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => write!(f, "Message({message:?})"),
            Self::Callback(_) => write!(f, "Callback(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for NoData {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Message)
    }
}

/// Where pagers are rendered relative to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerPosition {
    Top,
    Bottom,
}

impl PagerPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl FromStr for PagerPosition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(ConfigError::InvalidPagerPosition(other.to_string())),
        }
    }
}

/// A single pager position or a list of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PagerPositions {
    One(String),
    Many(Vec<String>),
}

impl PagerPositions {
    fn resolve(&self) -> Result<Vec<PagerPosition>, ConfigError> {
        let names: &[String] = match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        };
        let mut positions = Vec::with_capacity(names.len());
        for name in names {
            let position = name.parse()?;
            if !positions.contains(&position) {
                positions.push(position);
            }
        }
        Ok(positions)
    }
}

// =============================================================================
// Columns
// =============================================================================

/// A resolved column definition.
#[derive(Debug, Clone)]
pub struct Column {
    /// Key into each row.
    pub field: String,
    pub title: String,
    /// Cell renderer. `None` renders the raw field value.
    pub render: Option<Behavior<CellFn>>,
    pub sortable: bool,
    /// Direction applied by the next header click; flipped on every sort.
    pub sort_ascending_default: bool,
    /// Attributes of every body cell.
    pub attributes: BTreeMap<String, String>,
    /// Attributes of the header cell.
    pub header_attributes: BTreeMap<String, String>,
}

impl Default for Column {
    fn default() -> Self {
        Self {
            field: String::new(),
            title: String::new(),
            render: None,
            sortable: false,
            sort_ascending_default: true,
            attributes: BTreeMap::new(),
            header_attributes: BTreeMap::new(),
        }
    }
}

impl Column {
    /// Shallow-merges `options` over the column defaults.
    pub fn resolve(options: ColumnOptions) -> Self {
        let defaults = Self::default();
        Self {
            field: options.field.unwrap_or(defaults.field),
            title: options.title.unwrap_or(defaults.title),
            render: options.render.or(defaults.render),
            sortable: options.sortable.unwrap_or(defaults.sortable),
            sort_ascending_default: options
                .sort_ascending_default
                .unwrap_or(defaults.sort_ascending_default),
            attributes: options.attributes.unwrap_or(defaults.attributes),
            header_attributes: options.header_attributes.unwrap_or(defaults.header_attributes),
        }
    }
}

/// Raw column options; unspecified fields inherit the column defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnOptions {
    pub field: Option<String>,
    pub title: Option<String>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub render: Option<Behavior<CellFn>>,
    pub sortable: Option<bool>,
    #[serde(alias = "sortableDefaultAsc")]
    pub sort_ascending_default: Option<bool>,
    #[serde(alias = "attr")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(alias = "attrHeader")]
    pub header_attributes: Option<BTreeMap<String, String>>,
}

impl ColumnOptions {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    pub fn sort_ascending_default(mut self, ascending: bool) -> Self {
        self.sort_ascending_default = Some(ascending);
        self
    }

    pub fn render(mut self, render: Behavior<CellFn>) -> Self {
        self.render = Some(render);
        self
    }

    /// Renders cells with a closure.
    pub fn render_fn<F>(self, f: F) -> Self
    where
        F: Fn(&mut CellContext<'_>, &[Value]) -> CellContent + Send + Sync + 'static,
    {
        let f: CellFn = Arc::new(f);
        self.render(Behavior::Callable(f))
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn header_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header_attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }
}

// =============================================================================
// Grid options
// =============================================================================

/// Raw grid options; every field is optional.
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridOptions {
    pub url: Option<String>,
    pub params_default: Option<QueryParameters>,
    /// Role key → parameter name. Merged key by key over the default mapping.
    pub params_mapping: Option<BTreeMap<String, String>>,
    #[serde(alias = "col")]
    pub columns: Option<Vec<ColumnOptions>>,
    pub autoload: Option<bool>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub source: Option<Behavior<SourceFn>>,
    #[serde(skip)]
    pub parse: Option<ParseFn>,
    #[serde(skip)]
    pub on_before: Option<BeforeHook>,
    #[serde(skip)]
    pub on_data: Option<DataHook>,
    #[serde(skip)]
    pub on_row_data: Option<RowHook>,
    #[serde(skip)]
    pub on_complete: Option<CompleteHook>,
    pub no_data: Option<NoData>,
    /// Table attributes. `false` in JSON means none.
    #[serde(alias = "attr", deserialize_with = "deserialize_attributes")]
    pub attributes: Option<BTreeMap<String, String>>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub sorter: Option<Behavior<SorterFn>>,
    #[serde(deserialize_with = "deserialize_optional")]
    pub pager: Option<Behavior<PagerFn>>,
    pub pager_position: Option<PagerPositions>,
    pub reset_container: Option<bool>,
    /// Drop completions of superseded fetches instead of rendering them.
    pub suppress_stale: Option<bool>,
}

fn deserialize_attributes<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error as _;

    match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Object(map) => Ok(Some(
            map.into_iter()
                .map(|(k, v)| {
                    let v = match v {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (k, v)
                })
                .collect(),
        )),
        other => Err(D::Error::custom(format!("expected attribute object, got {other}"))),
    }
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the declarative part of the options from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merges the options over the defaults. See [`GridConfig::resolve`].
    pub fn resolve(self) -> Result<GridConfig, ConfigError> {
        GridConfig::resolve(self)
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn param_default(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params_default
            .get_or_insert_with(QueryParameters::new)
            .set(name, value);
        self
    }

    /// Maps a role key (`page`, `paging`, `orderby`, `direction`) to a
    /// parameter name.
    pub fn map_param(mut self, role: impl Into<String>, name: impl Into<String>) -> Self {
        self.params_mapping
            .get_or_insert_with(BTreeMap::new)
            .insert(role.into(), name.into());
        self
    }

    pub fn column(mut self, column: ColumnOptions) -> Self {
        self.columns.get_or_insert_with(Vec::new).push(column);
        self
    }

    pub fn autoload(mut self, autoload: bool) -> Self {
        self.autoload = Some(autoload);
        self
    }

    pub fn source(mut self, source: Behavior<SourceFn>) -> Self {
        self.source = Some(source);
        self
    }

    /// Uses a closure as the data source.
    pub fn source_fn<F, Fut>(self, f: F) -> Self
    where
        F: Fn(SourceRequest, Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<Payload, SourceError>> + Send + 'static,
    {
        self.source(Behavior::Callable(source_fn(f)))
    }

    pub fn parse<F>(mut self, f: F) -> Self
    where
        F: Fn(Payload) -> Result<ResultSet, ParseError> + Send + Sync + 'static,
    {
        self.parse = Some(Arc::new(f));
        self
    }

    pub fn on_before<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut QueryParameters) + Send + Sync + 'static,
    {
        self.on_before = Some(Arc::new(f));
        self
    }

    pub fn on_data<F>(mut self, f: F) -> Self
    where
        F: Fn(ResultSet) -> ResultSet + Send + Sync + 'static,
    {
        self.on_data = Some(Arc::new(f));
        self
    }

    pub fn on_row_data<F>(mut self, f: F) -> Self
    where
        F: Fn(Row, usize, &mut Element) -> Row + Send + Sync + 'static,
    {
        self.on_row_data = Some(Arc::new(f));
        self
    }

    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: Fn(&Element) + Send + Sync + 'static,
    {
        self.on_complete = Some(Arc::new(f));
        self
    }

    pub fn no_data(mut self, no_data: NoData) -> Self {
        self.no_data = Some(no_data);
        self
    }

    pub fn no_data_message(self, message: impl Into<String>) -> Self {
        self.no_data(NoData::Message(message.into()))
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn sorter(mut self, sorter: Behavior<SorterFn>) -> Self {
        self.sorter = Some(sorter);
        self
    }

    /// Draws sort indicators with a closure.
    pub fn sorter_fn<F>(self, f: F) -> Self
    where
        F: Fn(&mut SorterContext<'_>, &[Value]) + Send + Sync + 'static,
    {
        let f: SorterFn = Arc::new(f);
        self.sorter(Behavior::Callable(f))
    }

    pub fn pager(mut self, pager: Behavior<PagerFn>) -> Self {
        self.pager = Some(pager);
        self
    }

    /// Renders pagers with a closure.
    pub fn pager_fn<F>(self, f: F) -> Self
    where
        F: Fn(&PagerContext<'_>, &[Value]) -> Option<Element> + Send + Sync + 'static,
    {
        let f: PagerFn = Arc::new(f);
        self.pager(Behavior::Callable(f))
    }

    pub fn pager_position(mut self, position: PagerPosition) -> Self {
        self.pager_position = Some(PagerPositions::One(position.as_str().to_string()));
        self
    }

    pub fn pager_positions(mut self, positions: impl IntoIterator<Item = PagerPosition>) -> Self {
        self.pager_position = Some(PagerPositions::Many(
            positions.into_iter().map(|p| p.as_str().to_string()).collect(),
        ));
        self
    }

    pub fn reset_container(mut self, reset: bool) -> Self {
        self.reset_container = Some(reset);
        self
    }

    pub fn suppress_stale(mut self, suppress: bool) -> Self {
        self.suppress_stale = Some(suppress);
        self
    }
}

// =============================================================================
// Resolved configuration
// =============================================================================

/// A resolved grid configuration.
#[derive(Clone)]
pub struct GridConfig {
    pub url: String,
    pub params_default: QueryParameters,
    pub params_mapping: ParamMapping,
    /// Header and cell order.
    pub columns: Vec<Column>,
    /// Fetch as soon as the grid is initialized.
    pub autoload: bool,
    pub source: Behavior<SourceFn>,
    pub parse: ParseFn,
    pub on_before: Option<BeforeHook>,
    pub on_data: Option<DataHook>,
    pub on_row_data: Option<RowHook>,
    pub on_complete: Option<CompleteHook>,
    pub no_data: NoData,
    pub attributes: Option<BTreeMap<String, String>>,
    /// Sort indicator. `None` draws nothing.
    pub sorter: Option<Behavior<SorterFn>>,
    pub pager: Behavior<PagerFn>,
    pub pager_position: Vec<PagerPosition>,
    /// Clear the container before each render.
    pub reset_container: bool,
    pub suppress_stale: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            params_default: QueryParameters::new(),
            params_mapping: ParamMapping::default(),
            columns: Vec::new(),
            autoload: true,
            source: Behavior::named("post"),
            parse: Arc::new(parse_default),
            on_before: None,
            on_data: None,
            on_row_data: None,
            on_complete: None,
            no_data: NoData::default(),
            attributes: None,
            sorter: None,
            pager: Behavior::named("default"),
            pager_position: vec![PagerPosition::Bottom],
            reset_container: true,
            suppress_stale: false,
        }
    }
}

impl std::fmt::Debug for GridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridConfig")
            .field("url", &self.url)
            .field("params_default", &self.params_default)
            .field("params_mapping", &self.params_mapping)
            .field("columns", &self.columns)
            .field("autoload", &self.autoload)
            .field("source", &self.source)
            .field("no_data", &self.no_data)
            .field("sorter", &self.sorter)
            .field("pager", &self.pager)
            .field("pager_position", &self.pager_position)
            .field("reset_container", &self.reset_container)
            .finish_non_exhaustive()
    }
}

impl GridConfig {
    /// Merges `options` over the defaults.
    ///
    /// Nested parameter mappings are merged key by key; columns are merged
    /// one by one over the column defaults, keeping their order. Mapping and
    /// pager position errors are reported here rather than at fetch time.
    pub fn resolve(options: GridOptions) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mut params_mapping = defaults.params_mapping;
        if let Some(overrides) = &options.params_mapping {
            params_mapping.merge(overrides)?;
        }
        params_mapping.validate()?;

        let pager_position = match &options.pager_position {
            Some(positions) => positions.resolve()?,
            None => defaults.pager_position,
        };

        let columns = options
            .columns
            .unwrap_or_default()
            .into_iter()
            .map(Column::resolve)
            .collect();

        Ok(Self {
            url: options.url.unwrap_or(defaults.url),
            params_default: options.params_default.unwrap_or(defaults.params_default),
            params_mapping,
            columns,
            autoload: options.autoload.unwrap_or(defaults.autoload),
            source: options.source.unwrap_or(defaults.source),
            parse: options.parse.unwrap_or(defaults.parse),
            on_before: options.on_before,
            on_data: options.on_data,
            on_row_data: options.on_row_data,
            on_complete: options.on_complete,
            no_data: options.no_data.unwrap_or(defaults.no_data),
            attributes: options.attributes.or(defaults.attributes),
            sorter: options.sorter.or(defaults.sorter),
            pager: options.pager.unwrap_or(defaults.pager),
            pager_position,
            reset_container: options.reset_container.unwrap_or(defaults.reset_container),
            suppress_stale: options.suppress_stale.unwrap_or(defaults.suppress_stale),
        })
    }

    /// Parameters a new grid starts with: the four roles at their defaults
    /// (page 1, page size 15, no ordering), overridden by `params_default`.
    pub fn initial_params(&self) -> QueryParameters {
        let mut params = QueryParameters::new();
        params.set(self.params_mapping.get(Role::Page), 1);
        params.set(self.params_mapping.get(Role::PageSize), DEFAULT_PAGE_SIZE);
        params.set(self.params_mapping.get(Role::OrderBy), "");
        params.set(self.params_mapping.get(Role::Direction), "");
        params.merge(self.params_default.clone());
        params
    }

    /// Parameter name mapped to `role`.
    pub fn param_name(&self, role: Role) -> &str {
        self.params_mapping.get(role)
    }

    pub fn has_pager_at(&self, position: PagerPosition) -> bool {
        self.pager_position.contains(&position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = GridOptions::new().resolve().unwrap();

        assert!(config.autoload);
        assert!(config.reset_container);
        assert!(config.sorter.is_none());
        assert!(matches!(config.source, Behavior::Named(ref n) if n == "post"));
        assert!(matches!(config.pager, Behavior::Named(ref n) if n == "default"));
        assert_eq!(config.pager_position, vec![PagerPosition::Bottom]);
        assert_eq!(config.no_data.message(), "no data");
    }

    #[test]
    fn test_initial_params() {
        let config = GridOptions::new().resolve().unwrap();
        let params = config.initial_params();

        assert_eq!(params.get("page"), Some(&json!(1)));
        assert_eq!(params.get("paging"), Some(&json!(15)));
        assert_eq!(params.get("orderby"), Some(&json!("")));
        assert_eq!(params.get("direction"), Some(&json!("")));
    }

    #[test]
    fn test_params_default_override_roles() {
        let config = GridOptions::new()
            .map_param("page", "p")
            .param_default("p", 4)
            .param_default("paging", 50)
            .param_default("status", "open")
            .resolve()
            .unwrap();
        let params = config.initial_params();

        assert_eq!(params.get_u64("p"), Some(4));
        assert_eq!(params.get_u64("paging"), Some(50));
        assert_eq!(params.get_str("status"), Some("open"));
        assert!(!params.contains("page"));
    }

    #[test]
    fn test_mapping_errors_at_construction() {
        let missing = GridOptions::new().map_param("direction", "").resolve();
        assert!(matches!(missing, Err(ConfigError::MissingRole(_))));

        let unknown = GridOptions::new().map_param("limit", "l").resolve();
        assert!(matches!(unknown, Err(ConfigError::UnknownRole(_))));

        let duplicate = GridOptions::new().map_param("orderby", "direction").resolve();
        assert!(matches!(duplicate, Err(ConfigError::DuplicateParam { .. })));
    }

    #[test]
    fn test_column_defaults_and_order() {
        let config = GridOptions::new()
            .column(ColumnOptions::new("id"))
            .column(ColumnOptions::new("name").sortable(true).sort_ascending_default(false))
            .resolve()
            .unwrap();

        let fields: Vec<_> = config.columns.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, vec!["id", "name"]);

        let id = &config.columns[0];
        assert!(!id.sortable);
        assert!(id.sort_ascending_default);
        assert!(id.render.is_none());
        assert_eq!(id.title, "");

        assert!(config.columns[1].sortable);
        assert!(!config.columns[1].sort_ascending_default);
    }

    #[test]
    fn test_from_json_historical_names() {
        let options = GridOptions::from_json(
            r##"{
                "url": "/users",
                "paramsDefault": {"paging": 2},
                "paramsMapping": {"orderby": "sort"},
                "col": [
                    {"field": "id", "title": "#", "render": false},
                    {"field": "name", "sortable": true, "sortableDefaultAsc": false,
                     "attr": {"class": "name"}, "attrHeader": {"width": "40%"},
                     "render": {"link": {"href": "/u/"}}}
                ],
                "pager": {"sliding": {"pages": 2}},
                "sorter": "bootstrap",
                "pagerPosition": "top",
                "noData": "empty",
                "attr": false,
                "resetContainer": false
            }"##,
        )
        .unwrap();
        let config = options.resolve().unwrap();

        assert_eq!(config.url, "/users");
        assert_eq!(config.param_name(Role::OrderBy), "sort");
        assert_eq!(config.initial_params().get_u64("paging"), Some(2));
        assert_eq!(config.columns.len(), 2);
        assert!(config.columns[0].render.is_none());
        assert!(matches!(config.columns[1].render, Some(Behavior::Composite(_))));
        assert!(!config.columns[1].sort_ascending_default);
        assert_eq!(config.columns[1].attributes.get("class").map(String::as_str), Some("name"));
        assert_eq!(
            config.columns[1].header_attributes.get("width").map(String::as_str),
            Some("40%")
        );
        assert!(matches!(config.pager, Behavior::Composite(_)));
        assert!(matches!(config.sorter, Some(Behavior::Named(ref n)) if n == "bootstrap"));
        assert_eq!(config.pager_position, vec![PagerPosition::Top]);
        assert_eq!(config.no_data.message(), "empty");
        assert!(config.attributes.is_none());
        assert!(!config.reset_container);
    }

    #[test]
    fn test_pager_positions() {
        let config = GridOptions::from_json(r#"{"pagerPosition": ["top", "bottom", "top"]}"#)
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(config.pager_position, vec![PagerPosition::Top, PagerPosition::Bottom]);

        let invalid = GridOptions::from_json(r#"{"pagerPosition": "left"}"#)
            .unwrap()
            .resolve();
        assert!(matches!(invalid, Err(ConfigError::InvalidPagerPosition(p)) if p == "left"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            GridOptions::from_json("{\"autoload\": 3}"),
            Err(ConfigError::Json(_))
        ));
    }
}
