use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Cursor, InputType, Style, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Markup attributes (rendered verbatim, sorted by name)
    pub attributes: BTreeMap<String, String>,
    pub classes: Vec<String>,

    // Visual
    pub style: Style,

    // Interaction
    pub clickable: bool,
    pub disabled: bool,

    // Control state (input, select, textarea)
    pub name: Option<String>,
    pub value: String,
    pub checked: bool,

    // Custom data storage (handler payloads such as page numbers or column indices)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            content: Content::None,
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            style: Style::default(),
            clickable: false,
            disabled: false,
            name: None,
            value: String::new(),
            checked: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        let prefix = match &tag {
            Tag::Text => "text",
            other => other.as_str(),
        };
        Self {
            id: generate_id(prefix),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span() -> Self {
        Self::new(Tag::Span)
    }

    /// A bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(Tag::Text)
        }
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::THead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::TBody)
    }

    pub fn tr() -> Self {
        Self::new(Tag::Tr)
    }

    pub fn th() -> Self {
        Self::new(Tag::Th)
    }

    pub fn td() -> Self {
        Self::new(Tag::Td)
    }

    pub fn form() -> Self {
        Self::new(Tag::Form)
    }

    /// Create an `input` control of the given type.
    pub fn input(kind: InputType, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(Tag::Input(kind))
        }
    }

    /// Create a checkbox carrying `value` when checked.
    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::input(InputType::Checkbox, name)
        }
    }

    pub fn select(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(Tag::Select)
        }
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new(Tag::TextArea)
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_attrs(attrs);
        self
    }

    pub fn set_attrs<K, V>(&mut self, attrs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attrs {
            self.attributes.insert(name.into(), value.into());
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&String> {
        self.attributes.get(name)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.style.cursor = Some(cursor);
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Control state
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn is_control(&self) -> bool {
        self.tag.is_control()
    }

    pub fn is_checkbox(&self) -> bool {
        self.tag == Tag::Input(InputType::Checkbox)
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Append a child, replacing any text content.
    pub fn push(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::Text(text) => {
                log::trace!("[dom] Text {text:?} of '{}' replaced by children", self.id);
                self.content = Content::Children(vec![child]);
            }
            Content::None => self.content = Content::Children(vec![child]),
        }
    }

    /// Replace the content with text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    pub fn clear(&mut self) {
        self.content = Content::None;
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// First direct child with the given tag.
    pub fn first_child_by_tag(&self, tag: &Tag) -> Option<&Element> {
        self.child_elements().iter().find(|c| &c.tag == tag)
    }

    pub fn first_child_by_tag_mut(&mut self, tag: &Tag) -> Option<&mut Element> {
        self.child_elements_mut().iter_mut().find(|c| &c.tag == tag)
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }
}
