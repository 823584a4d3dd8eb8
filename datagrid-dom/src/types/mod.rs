mod enums;
mod style;

pub use enums::{Cursor, InputType, Tag};
pub use style::Style;
