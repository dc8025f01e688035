pub mod error;
pub mod generate;
pub mod io;
pub mod model;
pub mod reconcile;
pub mod render;
pub mod report;

pub use error::{Result, ToolError};
