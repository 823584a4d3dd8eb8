mod common;

use std::sync::Arc;

use common::{last_request, paged_source, people, Requests};
use datagrid::filter::FILTER_KEY;
use datagrid::{ColumnOptions, Datagrid, FetchOutcome, GridOptions, Registry};
use datagrid_dom::{find_element_mut, Element, Event, InputType};
use serde_json::json;

fn grid(requests: &Requests) -> Datagrid {
    let options = GridOptions::new()
        .column(ColumnOptions::new("name"))
        .param_default("paging", 2)
        .source_fn(paged_source(people(), requests.clone()));
    Datagrid::new(Element::div(), options, Arc::new(Registry::with_builtins())).unwrap()
}

fn form() -> Element {
    Element::form()
        .id("filters")
        .child(Element::input(InputType::Text, "q").id("q"))
        .child(
            Element::select("status")
                .id("status")
                .value("open"),
        )
        .child(Element::checkbox("mine", "yes").id("mine"))
        .child(Element::checkbox("tags[]", "rust").id("tag-rust"))
        .child(Element::checkbox("tags[]", "go").id("tag-go"))
        .child(
            Element::input(InputType::Hidden, "csrf")
                .id("csrf")
                .value("secret")
                .data(FILTER_KEY, "disable"),
        )
}

fn set_value(form: &mut Element, id: &str, value: &str) {
    find_element_mut(form, id).unwrap().value = value.to_string();
}

fn set_checked(form: &mut Element, id: &str, checked: bool) {
    find_element_mut(form, id).unwrap().checked = checked;
}

#[tokio::test]
async fn test_text_change_resets_page() {
    let requests = Requests::default();
    let grid = grid(&requests);
    let mut form = form();
    assert_eq!(grid.bind_filters(&form), 5);

    grid.set_page(2);
    set_value(&mut form, "q", "ada");
    grid.control_changed(&form, "q").await.unwrap();

    let params = last_request(&requests);
    assert_eq!(params.get_str("q"), Some("ada"));
    assert_eq!(params.get_u64("page"), Some(1));
    assert_eq!(grid.page(), 1);
}

#[tokio::test]
async fn test_select_and_checkbox() {
    let requests = Requests::default();
    let grid = grid(&requests);
    let mut form = form();
    grid.bind_filters(&form);

    grid.control_changed(&form, "status").await.unwrap();
    assert_eq!(last_request(&requests).get_str("status"), Some("open"));

    grid.control_changed(&form, "mine").await.unwrap();
    assert_eq!(last_request(&requests).get_str("mine"), Some(""));

    set_checked(&mut form, "mine", true);
    grid.control_changed(&form, "mine").await.unwrap();
    assert_eq!(last_request(&requests).get_str("mine"), Some("yes"));
}

#[tokio::test]
async fn test_checkbox_list() {
    let requests = Requests::default();
    let grid = grid(&requests);
    let mut form = form();
    grid.bind_filters(&form);

    set_checked(&mut form, "tag-rust", true);
    set_checked(&mut form, "tag-go", true);
    grid.control_changed(&form, "tag-go").await.unwrap();
    assert_eq!(last_request(&requests).get("tags[]"), Some(&json!(["rust", "go"])));

    set_checked(&mut form, "tag-rust", false);
    grid.control_changed(&form, "tag-rust").await.unwrap();
    assert_eq!(last_request(&requests).get("tags[]"), Some(&json!(["go"])));

    set_checked(&mut form, "tag-go", false);
    grid.control_changed(&form, "tag-go").await.unwrap();
    assert_eq!(last_request(&requests).get("tags[]"), Some(&json!([])));
}

#[tokio::test]
async fn test_disabled_and_unbound_controls() {
    let requests = Requests::default();
    let grid = grid(&requests);
    let form = form();
    grid.bind_filters(&form);

    assert_eq!(grid.control_changed(&form, "csrf").await.unwrap(), FetchOutcome::Skipped);
    assert_eq!(grid.control_changed(&form, "nope").await.unwrap(), FetchOutcome::Skipped);
    assert!(requests.lock().unwrap().is_empty());
    assert!(!grid.params().contains("csrf"));
}

#[tokio::test]
async fn test_bind_single_control_and_rebind() {
    let requests = Requests::default();
    let grid = grid(&requests);
    let mut search = Element::input(InputType::Text, "q").id("search").value("x");

    assert_eq!(grid.bind_filters(&search), 1);
    assert_eq!(grid.bind_filters(&search), 1);

    search.value = "grace".to_string();
    let outcome = grid.handle_event(&Event::change("search"), &search).await.unwrap();

    assert_eq!(outcome, FetchOutcome::Rendered { rows: 2, last_page: 2 });
    assert_eq!(requests.lock().unwrap().len(), 1);
    assert_eq!(last_request(&requests).get_str("q"), Some("grace"));
}
