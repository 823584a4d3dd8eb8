pub mod element;
pub mod event;
pub mod render;
pub mod types;

pub use element::{descendants, find_element, find_element_mut, Content, Element};
pub use event::Event;
pub use render::to_markup;
pub use types::*;
