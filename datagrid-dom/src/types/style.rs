use super::Cursor;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// 0.0 (transparent) to 1.0 (opaque). `None` inherits.
    pub opacity: Option<f32>,
    pub cursor: Option<Cursor>,
    pub bold: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.opacity.is_none() && self.cursor.is_none() && !self.bold
    }

    /// Inline `style` attribute value, properties in a fixed order.
    pub fn to_css(&self) -> String {
        let mut parts = Vec::new();
        if let Some(cursor) = self.cursor {
            parts.push(format!("cursor: {}", cursor.as_str()));
        }
        if self.bold {
            parts.push("font-weight: bold".to_string());
        }
        if let Some(opacity) = self.opacity {
            parts.push(format!("opacity: {opacity}"));
        }
        parts.join("; ")
    }
}
