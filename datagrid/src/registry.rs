//! Plugin registry.
//!
//! Four independent maps, one per [`Category`], from plugin name to
//! behavior. Entries are added or overwritten (last writer wins), never
//! removed. The registry is shared between grids through an `Arc`; grids only
//! read from it.
//!
//! # Example
//!
//! ```
//! use datagrid::registry::{CellContent, CellContext, Registry};
//! use serde_json::{json, Value};
//!
//! let registry = Registry::with_builtins();
//! registry.register_cell("upper", |ctx: &mut CellContext<'_>, _: &[Value]| {
//!     CellContent::Text(ctx.value.as_str().unwrap_or_default().to_uppercase())
//! });
//! registry
//!     .extend("cell", "upper-bold", "upper", vec![json!({"bold": true})])
//!     .unwrap();
//!
//! assert!(registry.cell("upper-bold").is_some());
//! ```

use std::sync::Arc;

use dashmap::DashMap;
use datagrid_dom::Element;
use serde_json::Value;

use crate::config::{Column, GridConfig};
use crate::dispatch::Category;
use crate::error::RegistryError;
use crate::pager::{default_pager, sliding_pager};
use crate::result::Row;
use crate::source::{DataSource, ExtendedSource, HttpSource, SourceFn};

/// Draws a sort indicator into a header cell.
pub type SorterFn = Arc<dyn Fn(&mut SorterContext<'_>, &[Value]) + Send + Sync>;
/// Builds a pager. `None` means nothing is rendered.
pub type PagerFn = Arc<dyn Fn(&PagerContext<'_>, &[Value]) -> Option<Element> + Send + Sync>;
/// Renders the content of a body cell.
pub type CellFn = Arc<dyn Fn(&mut CellContext<'_>, &[Value]) -> CellContent + Send + Sync>;

/// Header being decorated by a sorter.
pub struct SorterContext<'a> {
    /// The header cell; sorters add classes or children to it.
    pub header: &'a mut Element,
    pub column: &'a Column,
    /// Direction of the sort currently applied.
    pub ascending: bool,
    pub config: &'a GridConfig,
}

/// Pagination state handed to a pager.
pub struct PagerContext<'a> {
    pub page: u64,
    pub last_page: u64,
    pub page_size: u64,
    pub total: u64,
    pub config: &'a GridConfig,
}

/// Cell being rendered.
pub struct CellContext<'a> {
    /// The cell element; renderers may set attributes or classes on it.
    pub cell: &'a mut Element,
    /// Field value of the row (`null` when the row lacks the field).
    pub value: &'a Value,
    pub field: &'a str,
    pub row: &'a Row,
    pub column_index: usize,
    pub config: &'a GridConfig,
}

/// Content a cell renderer produces.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellContent {
    #[default]
    Empty,
    Text(String),
    Element(Element),
}

impl CellContent {
    /// Text of a raw JSON value: strings verbatim, `null` empty, anything
    /// else in JSON notation.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<String> for CellContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CellContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Element> for CellContent {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A registered behavior of any category.
#[derive(Clone)]
pub enum Plugin {
    Source(SourceFn),
    Sorter(SorterFn),
    Pager(PagerFn),
    Cell(CellFn),
}

impl Plugin {
    pub fn source(source: impl DataSource + 'static) -> Self {
        Self::Source(Arc::new(source))
    }

    pub fn sorter<F>(f: F) -> Self
    where
        F: Fn(&mut SorterContext<'_>, &[Value]) + Send + Sync + 'static,
    {
        Self::Sorter(Arc::new(f))
    }

    pub fn pager<F>(f: F) -> Self
    where
        F: Fn(&PagerContext<'_>, &[Value]) -> Option<Element> + Send + Sync + 'static,
    {
        Self::Pager(Arc::new(f))
    }

    pub fn cell<F>(f: F) -> Self
    where
        F: Fn(&mut CellContext<'_>, &[Value]) -> CellContent + Send + Sync + 'static,
    {
        Self::Cell(Arc::new(f))
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Source(_) => Category::Source,
            Self::Sorter(_) => Category::Sorter,
            Self::Pager(_) => Category::Pager,
            Self::Cell(_) => Category::Cell,
        }
    }

    /// A plugin that calls this one with `extra` appended to its arguments.
    ///
    /// The wrapper holds this plugin itself, not its name, so re-registering
    /// the base name later does not change the wrapper.
    fn bind(self, extra: Vec<Value>) -> Self {
        match self {
            Self::Source(base) => Self::Source(Arc::new(ExtendedSource { base, extra })),
            Self::Sorter(base) => {
                let f: SorterFn = Arc::new(move |ctx: &mut SorterContext<'_>, args: &[Value]| {
                    base(ctx, &append(args, &extra))
                });
                Self::Sorter(f)
            }
            Self::Pager(base) => {
                let f: PagerFn = Arc::new(move |ctx: &PagerContext<'_>, args: &[Value]| {
                    base(ctx, &append(args, &extra))
                });
                Self::Pager(f)
            }
            Self::Cell(base) => {
                let f: CellFn = Arc::new(move |ctx: &mut CellContext<'_>, args: &[Value]| {
                    base(ctx, &append(args, &extra))
                });
                Self::Cell(f)
            }
        }
    }
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Plugin({})", self.category())
    }
}

fn append(args: &[Value], extra: &[Value]) -> Vec<Value> {
    let mut all = Vec::with_capacity(args.len() + extra.len());
    all.extend_from_slice(args);
    all.extend_from_slice(extra);
    all
}

/// Named plugins, one map per category.
#[derive(Default)]
pub struct Registry {
    sources: DashMap<String, SourceFn>,
    sorters: DashMap<String, SorterFn>,
    pagers: DashMap<String, PagerFn>,
    cells: DashMap<String, CellFn>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in plugins: source `post` (HTTP
    /// form POST), pagers `default` (every page) and `sliding` (windowed).
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register_source("post", HttpSource::new());
        registry.register_pager("default", default_pager);
        registry.register_pager("sliding", sliding_pager);
        registry
    }

    /// Registers `plugin` under `(category, name)`, replacing any previous
    /// entry.
    pub fn register(
        &self,
        category: &str,
        name: impl Into<String>,
        plugin: Plugin,
    ) -> Result<(), RegistryError> {
        let category: Category = category.parse()?;
        if plugin.category() != category {
            return Err(RegistryError::CategoryMismatch {
                expected: category.to_string(),
                actual: plugin.category().to_string(),
            });
        }
        self.insert(name.into(), plugin);
        Ok(())
    }

    /// Registers under `name` a plugin forwarding to the current entry at
    /// `(category, base)` with `extra` appended to the call arguments.
    ///
    /// The base entry is captured now: overwriting `base` afterwards does not
    /// affect `name`.
    pub fn extend(
        &self,
        category: &str,
        name: impl Into<String>,
        base: &str,
        extra: Vec<Value>,
    ) -> Result<(), RegistryError> {
        let category: Category = category.parse()?;
        let base_plugin = self.lookup(category, base).ok_or_else(|| RegistryError::NotFound {
            category: category.to_string(),
            name: base.to_string(),
        })?;
        self.insert(name.into(), base_plugin.bind(extra));
        Ok(())
    }

    /// Looks up `(category, name)`.
    pub fn lookup(&self, category: Category, name: &str) -> Option<Plugin> {
        match category {
            Category::Source => self.source(name).map(Plugin::Source),
            Category::Sorter => self.sorter(name).map(Plugin::Sorter),
            Category::Pager => self.pager(name).map(Plugin::Pager),
            Category::Cell => self.cell(name).map(Plugin::Cell),
        }
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        match category {
            Category::Source => self.sources.contains_key(name),
            Category::Sorter => self.sorters.contains_key(name),
            Category::Pager => self.pagers.contains_key(name),
            Category::Cell => self.cells.contains_key(name),
        }
    }

    /// Registered names of `category`, sorted.
    pub fn names(&self, category: Category) -> Vec<String> {
        let mut names: Vec<String> = match category {
            Category::Source => self.sources.iter().map(|e| e.key().clone()).collect(),
            Category::Sorter => self.sorters.iter().map(|e| e.key().clone()).collect(),
            Category::Pager => self.pagers.iter().map(|e| e.key().clone()).collect(),
            Category::Cell => self.cells.iter().map(|e| e.key().clone()).collect(),
        };
        names.sort();
        names
    }

    pub fn source(&self, name: &str) -> Option<SourceFn> {
        self.sources.get(name).map(|e| e.value().clone())
    }

    pub fn sorter(&self, name: &str) -> Option<SorterFn> {
        self.sorters.get(name).map(|e| e.value().clone())
    }

    pub fn pager(&self, name: &str) -> Option<PagerFn> {
        self.pagers.get(name).map(|e| e.value().clone())
    }

    pub fn cell(&self, name: &str) -> Option<CellFn> {
        self.cells.get(name).map(|e| e.value().clone())
    }

    pub fn register_source(&self, name: impl Into<String>, source: impl DataSource + 'static) {
        self.insert(name.into(), Plugin::source(source));
    }

    pub fn register_sorter<F>(&self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut SorterContext<'_>, &[Value]) + Send + Sync + 'static,
    {
        self.insert(name.into(), Plugin::sorter(f));
    }

    pub fn register_pager<F>(&self, name: impl Into<String>, f: F)
    where
        F: Fn(&PagerContext<'_>, &[Value]) -> Option<Element> + Send + Sync + 'static,
    {
        self.insert(name.into(), Plugin::pager(f));
    }

    pub fn register_cell<F>(&self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut CellContext<'_>, &[Value]) -> CellContent + Send + Sync + 'static,
    {
        self.insert(name.into(), Plugin::cell(f));
    }

    fn insert(&self, name: String, plugin: Plugin) {
        log::debug!("[datagrid] Registering {} plugin '{name}'", plugin.category());
        match plugin {
            Plugin::Source(f) => {
                self.sources.insert(name, f);
            }
            Plugin::Sorter(f) => {
                self.sorters.insert(name, f);
            }
            Plugin::Pager(f) => {
                self.pagers.insert(name, f);
            }
            Plugin::Cell(f) => {
                self.cells.insert(name, f);
            }
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("source", &self.names(Category::Source))
            .field("sorter", &self.names(Category::Sorter))
            .field("pager", &self.names(Category::Pager))
            .field("cell", &self.names(Category::Cell))
            .finish()
    }
}
