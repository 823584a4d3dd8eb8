//! Error types

mod config;
mod dispatch;
mod grid;
mod registry;
mod source;

pub use config::*;
pub use dispatch::*;
pub use grid::*;
pub use registry::*;
pub use source::*;
