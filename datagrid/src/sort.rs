//! Sortable headers and the sort toggle.

use datagrid_dom::{Cursor, Element};

use crate::config::{Column, GridConfig};
use crate::dispatch::Category;
use crate::params::{QueryParameters, Role};
use crate::registry::{Registry, SorterContext};

/// Data key holding a header's field.
pub(crate) const FIELD_KEY: &str = "field";
/// Data key holding a sortable header's next direction.
pub(crate) const DIRECTION_KEY: &str = "direction";
/// Data key holding a sortable header's column index.
pub(crate) const COLUMN_KEY: &str = "col-index";

/// Sort direction as sent in the direction parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending { Self::Asc } else { Self::Desc }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Builds `thead > tr > th*`, one header per column.
///
/// The column currently ordered by gets the sorter indicator for the
/// direction just applied, which is the opposite of its next toggle.
pub(crate) fn build_header(config: &GridConfig, params: &QueryParameters, registry: &Registry) -> Element {
    let order_by = params.get_str(config.param_name(Role::OrderBy));
    let mut tr = Element::tr();

    for (index, column) in config.columns.iter().enumerate() {
        let mut th = Element::th()
            .attrs(column.header_attributes.clone())
            .data(FIELD_KEY, column.field.clone())
            .child(Element::text(column.title.clone()));

        if column.sortable {
            th = th
                .data(DIRECTION_KEY, column.sort_ascending_default.to_string())
                .data(COLUMN_KEY, index.to_string())
                .cursor(Cursor::Pointer)
                .class("text-info")
                .clickable(true);

            if order_by == Some(column.field.as_str()) {
                apply_sorter(config, registry, &mut th, column, !column.sort_ascending_default);
            }
        }

        tr.push(th);
    }

    Element::thead().child(tr)
}

fn apply_sorter(
    config: &GridConfig,
    registry: &Registry,
    header: &mut Element,
    column: &Column,
    ascending: bool,
) {
    let Some(sorter) = &config.sorter else {
        return;
    };

    match sorter.resolve(Category::Sorter, |name| registry.sorter(name)) {
        Ok(resolved) => {
            let mut ctx = SorterContext {
                header,
                column,
                ascending,
                config,
            };
            (resolved.plugin)(&mut ctx, &resolved.args());
        }
        Err(e) => log::error!("[datagrid] {e}"),
    }
}

/// Applies a header click on column `index`: back to page 1, order by the
/// column's field in its current direction, and flip the direction for the
/// next click. Returns `false` (and changes nothing) if the column is missing
/// or not sortable.
pub(crate) fn toggle(config: &mut GridConfig, params: &mut QueryParameters, index: usize) -> bool {
    let page = config.param_name(Role::Page).to_string();
    let order_by = config.param_name(Role::OrderBy).to_string();
    let direction = config.param_name(Role::Direction).to_string();

    let Some(column) = config.columns.get_mut(index).filter(|c| c.sortable) else {
        return false;
    };

    let applied = SortDirection::from_ascending(column.sort_ascending_default);
    column.sort_ascending_default = !column.sort_ascending_default;

    params.set(page, 1);
    params.set(order_by, column.field.clone());
    params.set(direction, applied.as_str());

    log::debug!(
        "[datagrid] Sorting by '{}' {}",
        column.field,
        applied.as_str()
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnOptions, GridOptions};
    use datagrid_dom::Tag;

    fn config() -> GridConfig {
        GridOptions::new()
            .column(ColumnOptions::new("id").title("#"))
            .column(ColumnOptions::new("name").title("Name").sortable(true))
            .resolve()
            .unwrap()
    }

    #[test]
    fn test_toggle_alternates_and_resets_page() {
        let mut config = config();
        let mut params = config.initial_params().with("page", 3);

        assert!(toggle(&mut config, &mut params, 1));
        assert_eq!(params.get_u64("page"), Some(1));
        assert_eq!(params.get_str("orderby"), Some("name"));
        assert_eq!(params.get_str("direction"), Some("asc"));

        params.set("page", 2);
        assert!(toggle(&mut config, &mut params, 1));
        assert_eq!(params.get_u64("page"), Some(1));
        assert_eq!(params.get_str("direction"), Some("desc"));
        assert!(config.columns[1].sort_ascending_default);
    }

    #[test]
    fn test_toggle_ignores_unsortable() {
        let mut config = config();
        let mut params = config.initial_params();

        assert!(!toggle(&mut config, &mut params, 0));
        assert!(!toggle(&mut config, &mut params, 7));
        assert_eq!(params, config.initial_params());
    }

    #[test]
    fn test_header_marks_sortable_columns() {
        let config = config();
        let thead = build_header(&config, &config.initial_params(), &Registry::new());
        let tr = thead.first_child_by_tag(&Tag::Tr).unwrap();
        let headers = tr.child_elements();

        assert_eq!(headers.len(), 2);
        assert!(!headers[0].clickable);
        assert_eq!(headers[0].text_content(), "#");
        assert!(headers[1].clickable);
        assert!(headers[1].has_class("text-info"));
        assert_eq!(headers[1].get_data(COLUMN_KEY).map(String::as_str), Some("1"));
        assert_eq!(headers[1].get_data(DIRECTION_KEY).map(String::as_str), Some("true"));
    }

    #[test]
    fn test_sorter_receives_applied_direction() {
        let mut config = config();
        config.sorter = Some(crate::dispatch::Behavior::named("arrow"));
        let registry = Registry::new();
        registry.register_sorter("arrow", |ctx: &mut SorterContext<'_>, _: &[serde_json::Value]| {
            ctx.header.add_class(if ctx.ascending { "asc" } else { "desc" });
        });

        let mut params = config.initial_params();
        toggle(&mut config, &mut params, 1);

        let thead = build_header(&config, &params, &registry);
        let th = &thead.child_elements()[0].child_elements()[1];
        assert!(th.has_class("asc"));
    }

    #[test]
    fn test_unknown_sorter_leaves_header_plain() {
        let mut config = config();
        config.sorter = Some(crate::dispatch::Behavior::named("missing"));
        let mut params = config.initial_params();
        toggle(&mut config, &mut params, 1);

        let thead = build_header(&config, &params, &Registry::new());
        let th = &thead.child_elements()[0].child_elements()[1];
        assert_eq!(th.classes, vec!["text-info"]);
    }
}
