//! The render step: table, cells, pagers and the no-data message.

use datagrid_dom::{Element, Tag};
use serde_json::Value;

use crate::config::{Column, GridConfig, PagerPosition, DEFAULT_PAGE_SIZE};
use crate::dispatch::Category;
use crate::pager::last_page;
use crate::params::{QueryParameters, Role};
use crate::registry::{CellContent, CellContext, PagerContext, Registry};
use crate::result::{ResultSet, Row};
use crate::sort::build_header;

/// Opacity of the table while a fetch is in flight.
pub(crate) const BUSY_OPACITY: f32 = 0.5;

static NULL: Value = Value::Null;

/// What a render produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rendered {
    Table { rows: usize, last_page: u64 },
    NoData,
}

/// Dims the table of a previous render while data is loading.
pub(crate) fn mark_busy(container: &mut Element) {
    if let Some(table) = container.first_child_by_tag_mut(&Tag::Table) {
        table.style.opacity = Some(BUSY_OPACITY);
    }
}

/// Renders `result` into `container`.
pub(crate) fn render_into(
    container: &mut Element,
    config: &GridConfig,
    params: &QueryParameters,
    registry: &Registry,
    result: ResultSet,
) -> Rendered {
    let total = result.total();
    let result = match &config.on_data {
        Some(on_data) => on_data(result),
        None => result,
    };

    if config.reset_container {
        container.clear();
    }

    if result.is_empty() {
        container.set_text(config.no_data.message());
        return Rendered::NoData;
    }

    let rows = result.len();
    let mut table = Element::table();
    if let Some(attributes) = &config.attributes {
        table.set_attrs(attributes.clone());
    }
    table.push(build_header(config, params, registry));
    table.push(build_body(config, registry, result.data));

    let page = params.get_u64(config.param_name(Role::Page)).unwrap_or(1);
    let page_size = params
        .get_u64(config.param_name(Role::PageSize))
        .unwrap_or(DEFAULT_PAGE_SIZE);
    let ctx = PagerContext {
        page,
        last_page: last_page(total, page_size),
        page_size,
        total,
        config,
    };

    if config.has_pager_at(PagerPosition::Top) {
        if let Some(pager) = build_pager(config, registry, &ctx) {
            container.push(pager);
        }
    }
    container.push(table);
    if config.has_pager_at(PagerPosition::Bottom) {
        if let Some(pager) = build_pager(config, registry, &ctx) {
            container.push(pager);
        }
    }

    Rendered::Table {
        rows,
        last_page: ctx.last_page,
    }
}

fn build_body(config: &GridConfig, registry: &Registry, rows: Vec<Row>) -> Element {
    let mut tbody = Element::tbody();

    for (index, row) in rows.into_iter().enumerate() {
        let mut tr = Element::tr();
        let row = match &config.on_row_data {
            Some(on_row_data) => on_row_data(row, index, &mut tr),
            None => row,
        };

        for (column_index, column) in config.columns.iter().enumerate() {
            let mut td = Element::td().attrs(column.attributes.clone());
            match render_cell(config, registry, column, column_index, &row, &mut td) {
                CellContent::Empty => {}
                CellContent::Text(text) => td.push(Element::text(text)),
                CellContent::Element(element) => td.push(element),
            }
            tr.push(td);
        }

        tbody.push(tr);
    }

    tbody
}

fn render_cell(
    config: &GridConfig,
    registry: &Registry,
    column: &Column,
    column_index: usize,
    row: &Row,
    td: &mut Element,
) -> CellContent {
    let value = row.get(&column.field).unwrap_or(&NULL);

    let Some(render) = &column.render else {
        return CellContent::from_value(value);
    };

    match render.resolve(Category::Cell, |name| registry.cell(name)) {
        Ok(resolved) => {
            log::trace!("[datagrid] Rendering cell '{}'", column.field);
            let mut ctx = CellContext {
                cell: td,
                value,
                field: &column.field,
                row,
                column_index,
                config,
            };
            (resolved.plugin)(&mut ctx, &resolved.args())
        }
        Err(e) => {
            log::error!("[datagrid] {e}");
            CellContent::Empty
        }
    }
}

fn build_pager(config: &GridConfig, registry: &Registry, ctx: &PagerContext<'_>) -> Option<Element> {
    match config.pager.resolve(Category::Pager, |name| registry.pager(name)) {
        Ok(resolved) => (resolved.plugin)(ctx, &resolved.args()),
        Err(e) => {
            log::error!("[datagrid] {e}");
            None
        }
    }
}
