use std::fs::File;
use std::sync::Arc;

use datagrid::registry::{CellContent, CellContext, SorterContext};
use datagrid::{
    ColumnOptions, Datagrid, GridOptions, Payload, Registry, ResultSet, SourceError, SourceRequest,
};
use datagrid_dom::{find_element_mut, Element, Event, InputType};
use serde_json::{json, Value};
use simplelog::{Config, LevelFilter, WriteLogger};

const PLANETS: &str = r#"[
    {"id": 1, "name": "Mercury", "moons": 0},
    {"id": 2, "name": "Venus", "moons": 0},
    {"id": 3, "name": "Earth", "moons": 1},
    {"id": 4, "name": "Mars", "moons": 2},
    {"id": 5, "name": "Jupiter", "moons": 95},
    {"id": 6, "name": "Saturn", "moons": 146},
    {"id": 7, "name": "Uranus", "moons": 28},
    {"id": 8, "name": "Neptune", "moons": 16}
]"#;

/// In-memory source: filters by name, sorts, then slices the requested page.
async fn planets(request: SourceRequest, _args: Vec<Value>) -> Result<Payload, SourceError> {
    let mut rows: Vec<datagrid::Row> =
        serde_json::from_str(PLANETS).map_err(|e| SourceError::custom(e.to_string()))?;

    let params = &request.params;
    if let Some(q) = params.get_str("q").filter(|q| !q.is_empty()) {
        let q = q.to_lowercase();
        rows.retain(|row| {
            row["name"]
                .as_str()
                .is_some_and(|name| name.to_lowercase().contains(&q))
        });
    }

    if let Some(field) = params.get_str("orderby").filter(|f| !f.is_empty()) {
        rows.sort_by(|a, b| {
            let (a, b) = (&a[field], &b[field]);
            match (a.as_i64(), b.as_i64()) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => a.to_string().cmp(&b.to_string()),
            }
        });
        if params.get_str("direction") == Some("desc") {
            rows.reverse();
        }
    }

    let total = rows.len() as u64;
    let page = params.get_u64("page").unwrap_or(1).max(1);
    let size = params.get_u64("paging").unwrap_or(15);
    let data = rows
        .into_iter()
        .skip(((page - 1) * size) as usize)
        .take(size as usize)
        .collect();

    Ok(ResultSet::new(data).with_total(total).into())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("static_grid.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let registry = Registry::with_builtins();
    registry.register_source("planets", planets);
    registry.register_sorter("arrow", |ctx: &mut SorterContext<'_>, _: &[Value]| {
        ctx.header
            .push(Element::text(if ctx.ascending { " ▲" } else { " ▼" }));
    });
    registry.register_cell("count", |ctx: &mut CellContext<'_>, args: &[Value]| {
        let unit = args
            .last()
            .and_then(|o| o.get("unit"))
            .and_then(Value::as_str)
            .unwrap_or("");
        match ctx.value.as_u64() {
            Some(0) => CellContent::from("none"),
            Some(n) => CellContent::Text(format!("{n} {unit}")),
            None => CellContent::Empty,
        }
    });

    let options = GridOptions::from_json(
        r##"{
            "source": "planets",
            "sorter": "arrow",
            "pager": {"sliding": {"pages": 1}},
            "paramsDefault": {"paging": 3},
            "col": [
                {"field": "id", "title": "#"},
                {"field": "name", "title": "Planet", "sortable": true},
                {"field": "moons", "title": "Moons", "sortable": true,
                 "sortableDefaultAsc": false, "render": {"count": {"unit": "moons"}}}
            ],
            "attr": {"class": "table"}
        }"##,
    )?
    .column(
        ColumnOptions::new("name")
            .title("Initial")
            .render_fn(|ctx: &mut CellContext<'_>, _: &[Value]| {
                CellContent::Text(ctx.value.as_str().unwrap_or_default().chars().take(1).collect())
            }),
    )
    .on_complete(|container| log::info!("[static_grid] Rendered into '{}'", container.id));

    let grid = Datagrid::new(Element::div().id("planets"), options, Arc::new(registry))?;
    grid.init().await?;
    println!("{}\n", grid.markup());

    // Most moons first.
    grid.sort_by(2).await?;
    println!("{}\n", grid.markup());

    let mut form = Element::form()
        .id("filters")
        .child(Element::input(InputType::Text, "q").id("q"));
    grid.bind_filters(&form);
    if let Some(q) = find_element_mut(&mut form, "q") {
        q.value = "ur".to_string();
    }
    grid.handle_event(&Event::change("q"), &form).await?;
    println!("{}\n", grid.markup());

    grid.set_param("q", json!(""));
    grid.get_data(None).await?;
    println!("{}", grid.markup());
    Ok(())
}
