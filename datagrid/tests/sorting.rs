mod common;

use std::sync::Arc;

use common::{body_rows, find_by_data, last_request, paged_source, people, Requests};
use datagrid::{Behavior, ColumnOptions, Datagrid, FetchOutcome, GridOptions, Registry};
use datagrid::registry::SorterContext;
use datagrid_dom::{descendants, Element, Event};
use serde_json::Value;

fn grid(requests: &Requests, registry: Registry) -> Datagrid {
    let options = GridOptions::new()
        .column(ColumnOptions::new("id").title("#"))
        .column(ColumnOptions::new("name").title("Name").sortable(true))
        .column(
            ColumnOptions::new("rank")
                .title("Rank")
                .sortable(true)
                .sort_ascending_default(false),
        )
        .param_default("paging", 2)
        .sorter(Behavior::named("arrow"))
        .source_fn(paged_source(people(), requests.clone()));
    Datagrid::new(Element::div(), options, Arc::new(registry)).unwrap()
}

fn arrow_registry() -> Registry {
    let registry = Registry::with_builtins();
    registry.register_sorter("arrow", |ctx: &mut SorterContext<'_>, _: &[Value]| {
        let arrow = if ctx.ascending { "▲" } else { "▼" };
        ctx.header.push(Element::span().class("arrow").child(Element::text(arrow)));
    });
    registry
}

fn arrows(container: &Element) -> Vec<String> {
    descendants(container)
        .into_iter()
        .filter(|e| e.has_class("arrow"))
        .map(Element::text_content)
        .collect()
}

#[tokio::test]
async fn test_header_click_toggles_direction() {
    let requests = Requests::default();
    let grid = grid(&requests, arrow_registry());
    grid.init().await.unwrap();
    grid.set_page(2);

    let header = find_by_data(&grid.container(), "field", "name");
    grid.click(&header).await.unwrap();

    let params = last_request(&requests);
    assert_eq!(params.get_str("orderby"), Some("name"));
    assert_eq!(params.get_str("direction"), Some("asc"));
    assert_eq!(params.get_u64("page"), Some(1));
    assert_eq!(arrows(&grid.container()), vec!["▲"]);

    let header = find_by_data(&grid.container(), "field", "name");
    grid.click(&header).await.unwrap();

    assert_eq!(last_request(&requests).get_str("direction"), Some("desc"));
    assert_eq!(arrows(&grid.container()), vec!["▼"]);
    assert_eq!(requests.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_descending_default() {
    let requests = Requests::default();
    let grid = grid(&requests, arrow_registry());
    grid.init().await.unwrap();

    grid.sort_by(2).await.unwrap();

    assert_eq!(last_request(&requests).get_str("direction"), Some("desc"));
    assert_eq!(arrows(&grid.container()), vec!["▼"]);
    assert!(grid.config().columns[2].sort_ascending_default);
}

#[tokio::test]
async fn test_switching_columns_moves_indicator() {
    let requests = Requests::default();
    let grid = grid(&requests, arrow_registry());
    grid.init().await.unwrap();

    grid.sort_by(1).await.unwrap();
    grid.sort_by(2).await.unwrap();

    let container = grid.container();
    let rank = find_by_data(&container, "field", "rank");
    let rank = datagrid_dom::find_element(&container, &rank).unwrap();
    assert_eq!(arrows(rank), vec!["▼"]);
    assert_eq!(arrows(&container).len(), 1);
}

#[tokio::test]
async fn test_unsortable_header_does_nothing() {
    let requests = Requests::default();
    let grid = grid(&requests, arrow_registry());
    grid.init().await.unwrap();

    let header = find_by_data(&grid.container(), "field", "id");
    let outcome = grid.handle_event(&Event::click(header), &Element::form()).await.unwrap();

    assert_eq!(outcome, FetchOutcome::Skipped);
    assert_eq!(grid.sort_by(0).await.unwrap(), FetchOutcome::Skipped);
    assert_eq!(requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_sorter_still_sorts() {
    let requests = Requests::default();
    let grid = grid(&requests, Registry::with_builtins());
    grid.init().await.unwrap();

    let outcome = grid.sort_by(1).await.unwrap();

    assert!(matches!(outcome, FetchOutcome::Rendered { .. }));
    assert_eq!(last_request(&requests).get_str("orderby"), Some("name"));
    assert!(arrows(&grid.container()).is_empty());
    assert_eq!(body_rows(&grid.container()).len(), 2);
}

#[tokio::test]
async fn test_custom_mapping() {
    let requests = Requests::default();
    let options = GridOptions::new()
        .column(ColumnOptions::new("name").sortable(true))
        .map_param("orderby", "sort")
        .map_param("direction", "dir")
        .source_fn(paged_source(people(), requests.clone()));
    let grid = Datagrid::new(Element::div(), options, Arc::new(Registry::with_builtins())).unwrap();

    grid.sort_by(0).await.unwrap();

    let params = last_request(&requests);
    assert_eq!(params.get_str("sort"), Some("name"));
    assert_eq!(params.get_str("dir"), Some("asc"));
    assert!(!params.contains("orderby"));
}
