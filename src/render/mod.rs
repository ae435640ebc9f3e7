//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod lua;

use crate::error::{Error, Result};
use crate::model::FunctionRecord;

/// Trait for rendering one category of function records into an output format.
pub trait Renderer {
    fn render(&self, category: &str, records: &[FunctionRecord]) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "lua" => Ok(Box::new(lua::LuaRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}
