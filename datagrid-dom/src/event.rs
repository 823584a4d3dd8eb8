/// Interaction events targeted at an element ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Element was clicked.
    Click { target: String },
    /// A control's value or checked state changed.
    Change { target: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn change(target: impl Into<String>) -> Self {
        Self::Change {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Click { target } | Self::Change { target } => target,
        }
    }
}
