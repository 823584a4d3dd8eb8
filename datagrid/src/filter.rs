//! Filter binding.
//!
//! Form controls feed extra query parameters into a grid. A control named
//! `status` contributes `status = <value>`; checkboxes contribute their value
//! when checked and `""` otherwise; checkboxes whose name ends in `[]`
//! contribute the list of values of every checked checkbox with that name in
//! the same bound form. Controls carrying the data entry
//! `datagrid-filter = "disable"` are skipped.

use datagrid_dom::{descendants, find_element, Element};
use serde_json::Value;

/// Data key that opts a control out of filter binding.
pub const FILTER_KEY: &str = "datagrid-filter";

/// How a bound control is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Text input, select, textarea: the current value.
    Value,
    /// Single checkbox: its value when checked, `""` otherwise.
    Checkbox,
    /// `name[]` checkbox: values of all checked peers in scope.
    CheckboxList,
}

/// A control whose changes update the grid parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBinding {
    pub control_id: String,
    /// Parameter the control writes (its name).
    pub name: String,
    /// Element searched for `name[]` peers; `None` means the whole form.
    pub scope_id: Option<String>,
    pub kind: ControlKind,
}

impl FilterBinding {
    /// Reads the parameter value of the bound control from `form`.
    /// Returns `None` if the control is no longer in the tree.
    pub fn read(&self, form: &Element) -> Option<Value> {
        let control = find_element(form, &self.control_id)?;

        let value = match self.kind {
            ControlKind::Value => Value::String(control.value.clone()),
            ControlKind::Checkbox if control.checked => Value::String(control.value.clone()),
            ControlKind::Checkbox => Value::String(String::new()),
            ControlKind::CheckboxList => {
                let scope = self
                    .scope_id
                    .as_deref()
                    .and_then(|id| find_element(form, id))
                    .unwrap_or(form);
                let values = std::iter::once(scope)
                    .chain(descendants(scope))
                    .filter(|e| e.is_checkbox() && e.checked)
                    .filter(|e| e.name.as_deref() == Some(self.name.as_str()))
                    .map(|e| Value::String(e.value.clone()))
                    .collect();
                Value::Array(values)
            }
        };

        Some(value)
    }
}

/// Collects bindings for `root`: the element itself when it is a control,
/// otherwise every named control beneath it.
pub fn collect_bindings(root: &Element) -> Vec<FilterBinding> {
    if root.is_control() {
        return bind(root, None).into_iter().collect();
    }

    descendants(root)
        .into_iter()
        .filter(|e| e.is_control())
        .filter_map(|e| bind(e, Some(root.id.clone())))
        .collect()
}

fn bind(control: &Element, scope_id: Option<String>) -> Option<FilterBinding> {
    if control.get_data(FILTER_KEY).map(String::as_str) == Some("disable") {
        log::debug!("[datagrid] Filter binding disabled on '{}'", control.id);
        return None;
    }
    let name = control.name.clone().filter(|n| !n.is_empty())?;

    let kind = match (control.is_checkbox(), name.ends_with("[]")) {
        (true, true) => ControlKind::CheckboxList,
        (true, false) => ControlKind::Checkbox,
        (false, _) => ControlKind::Value,
    };

    Some(FilterBinding {
        control_id: control.id.clone(),
        name,
        scope_id,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use datagrid_dom::InputType;
    use serde_json::json;

    fn form() -> Element {
        Element::form()
            .id("filters")
            .child(Element::input(InputType::Text, "q").id("q").value("ada"))
            .child(Element::checkbox("active", "1").id("active"))
            .child(Element::checkbox("tags[]", "a").id("tag-a").checked(true))
            .child(Element::checkbox("tags[]", "b").id("tag-b"))
            .child(Element::checkbox("tags[]", "c").id("tag-c").checked(true))
            .child(
                Element::input(InputType::Text, "ignored")
                    .id("ignored")
                    .data(FILTER_KEY, "disable"),
            )
    }

    #[test]
    fn test_collect_skips_disabled() {
        let bindings = collect_bindings(&form());
        let ids: Vec<_> = bindings.iter().map(|b| b.control_id.as_str()).collect();

        assert_eq!(ids, vec!["q", "active", "tag-a", "tag-b", "tag-c"]);
        assert!(bindings.iter().all(|b| b.scope_id.as_deref() == Some("filters")));
    }

    #[test]
    fn test_bind_single_control() {
        let control = Element::select("status").id("status");
        let bindings = collect_bindings(&control);

        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].kind, ControlKind::Value);
        assert_eq!(bindings[0].scope_id, None);
    }

    #[test]
    fn test_read_values() {
        let form = form();
        let bindings = collect_bindings(&form);
        let read = |id: &str| {
            bindings
                .iter()
                .find(|b| b.control_id == id)
                .and_then(|b| b.read(&form))
        };

        assert_eq!(read("q"), Some(json!("ada")));
        assert_eq!(read("active"), Some(json!("")));
        assert_eq!(read("tag-b"), Some(json!(["a", "c"])));
    }

    #[test]
    fn test_read_checked_checkbox() {
        let form = Element::form().child(Element::checkbox("active", "1").id("active").checked(true));
        let binding = &collect_bindings(&form)[0];

        assert_eq!(binding.kind, ControlKind::Checkbox);
        assert_eq!(binding.read(&form), Some(json!("1")));
    }

    #[test]
    fn test_read_removed_control() {
        let binding = collect_bindings(&form()).remove(0);
        assert_eq!(binding.read(&Element::form()), None);
    }
}
