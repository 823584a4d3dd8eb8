/// Element kind. Determines the markup tag and whether the element is an
/// input-capable control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Tag {
    #[default]
    Div,
    Span,
    /// Bare text node, rendered without a surrounding tag.
    Text,
    Table,
    THead,
    TBody,
    Tr,
    Th,
    Td,
    Form,
    Label,
    Input(InputType),
    Select,
    TextArea,
    Custom(String),
}

impl Tag {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Text => "",
            Self::Table => "table",
            Self::THead => "thead",
            Self::TBody => "tbody",
            Self::Tr => "tr",
            Self::Th => "th",
            Self::Td => "td",
            Self::Form => "form",
            Self::Label => "label",
            Self::Input(_) => "input",
            Self::Select => "select",
            Self::TextArea => "textarea",
            Self::Custom(name) => name,
        }
    }

    /// `input`, `select` and `textarea` accept user input.
    pub fn is_control(&self) -> bool {
        matches!(self, Self::Input(_) | Self::Select | Self::TextArea)
    }

    /// Void elements have no closing tag in markup.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Input(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Checkbox,
    Radio,
    Number,
    Hidden,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Number => "number",
            Self::Hidden => "hidden",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Auto,
    Pointer,
    Wait,
}

impl Cursor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Pointer => "pointer",
            Self::Wait => "wait",
        }
    }
}
