//! Markup output for an element tree.
//!
//! Generated element IDs are omitted; attributes, classes, inline style and
//! `data-*` entries are emitted in a stable order so the output can be
//! compared in tests.

use std::fmt::Write;

use crate::element::{Content, Element};
use crate::types::Tag;

/// Render `root` and its descendants as HTML-like markup.
pub fn to_markup(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    if element.tag == Tag::Text {
        write_content(&element.content, out);
        return;
    }

    let tag = element.tag.as_str();
    out.push('<');
    out.push_str(tag);

    if let Tag::Input(kind) = &element.tag {
        write_attr(out, "type", kind.as_str());
    }
    if let Some(name) = &element.name {
        write_attr(out, "name", name);
    }
    if matches!(element.tag, Tag::Input(_)) && !element.value.is_empty() {
        write_attr(out, "value", &element.value);
    }
    if element.checked {
        out.push_str(" checked");
    }
    for (name, value) in &element.attributes {
        write_attr(out, name, value);
    }
    if !element.classes.is_empty() {
        write_attr(out, "class", &element.classes.join(" "));
    }
    if !element.style.is_empty() {
        write_attr(out, "style", &element.style.to_css());
    }

    let mut data: Vec<_> = element.data.iter().collect();
    data.sort();
    for (key, value) in data {
        write_attr(out, &format!("data-{key}"), value);
    }
    out.push('>');

    if element.tag.is_void() {
        return;
    }
    if matches!(element.tag, Tag::Select | Tag::TextArea) && element.content.is_empty() {
        out.push_str(&escape(&element.value));
    } else {
        write_content(&element.content, out);
    }

    let _ = write!(out, "</{tag}>");
}

fn write_content(content: &Content, out: &mut String) {
    match content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"{}\"", escape(value));
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
