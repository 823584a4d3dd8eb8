//! Extensible data grid engine
//!
//! Renders paginated, sortable, filterable tables into a [`datagrid_dom::Element`]
//! container from a declarative configuration. Data sources, sort indicators,
//! pagers and cell renderers are pluggable through a shared [`Registry`].

pub mod config;
pub mod dispatch;
pub mod error;
pub mod filter;
pub mod pager;
pub mod params;
pub mod registry;
pub mod result;
pub mod source;

mod grid;
mod render;
mod sort;

pub use config::{Column, ColumnOptions, GridConfig, GridOptions, NoData, PagerPosition};
pub use dispatch::{Behavior, Category};
pub use error::{ConfigError, DispatchError, GridError, ParseError, RegistryError, SourceError};
pub use filter::{ControlKind, FilterBinding};
pub use grid::{Datagrid, FetchOutcome, FetchState};
pub use pager::PagerLimits;
pub use params::{ParamMapping, QueryParameters, Role};
pub use registry::{Plugin, Registry};
pub use result::{Payload, ResultSet, Row};
pub use sort::SortDirection;
pub use source::{DataSource, HttpSource, SourceRequest};
