#![allow(dead_code)]

use std::future::{ready, Ready};
use std::sync::{Arc, Mutex};

use datagrid::{Payload, QueryParameters, ResultSet, Row, SourceError, SourceRequest};
use datagrid_dom::{descendants, Element};
use serde_json::{json, Value};

/// Parameters of every request a stub source received, in order.
pub type Requests = Arc<Mutex<Vec<QueryParameters>>>;

pub fn rows(value: Value) -> Vec<Row> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_object().cloned().unwrap())
        .collect()
}

pub fn people() -> Vec<Row> {
    rows(json!([
        {"id": 1, "name": "Ada"},
        {"id": 2, "name": "Grace"},
        {"id": 3, "name": "Linus"},
    ]))
}

/// Source serving `rows` one page at a time according to the `page` and
/// `paging` parameters, recording each request into `requests`.
pub fn paged_source(
    rows: Vec<Row>,
    requests: Requests,
) -> impl Fn(SourceRequest, Vec<Value>) -> Ready<Result<Payload, SourceError>> + Send + Sync + 'static {
    move |request: SourceRequest, _args: Vec<Value>| {
        requests.lock().unwrap().push(request.params.clone());

        let page = request.params.get_u64("page").unwrap_or(1).max(1);
        let size = request.params.get_u64("paging").unwrap_or(15);
        let data = rows
            .iter()
            .skip(((page - 1) * size) as usize)
            .take(size as usize)
            .cloned()
            .collect();

        ready(Ok(Payload::from(
            ResultSet::new(data).with_total(rows.len() as u64),
        )))
    }
}

pub fn last_request(requests: &Requests) -> QueryParameters {
    requests.lock().unwrap().last().cloned().unwrap()
}

/// ID of the first element under `root` whose data `key` equals `value`.
pub fn find_by_data(root: &Element, key: &str, value: &str) -> String {
    descendants(root)
        .into_iter()
        .find(|e| e.get_data(key).map(String::as_str) == Some(value))
        .map(|e| e.id.clone())
        .unwrap_or_else(|| panic!("no element with data {key}={value}"))
}

/// Text of every body row, cells joined with `|`.
pub fn body_rows(container: &Element) -> Vec<String> {
    descendants(container)
        .into_iter()
        .filter(|e| e.tag == datagrid_dom::Tag::Tr)
        .filter(|tr| tr.child_elements().iter().all(|c| c.tag == datagrid_dom::Tag::Td))
        .map(|tr| {
            tr.child_elements()
                .iter()
                .map(Element::text_content)
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect()
}
