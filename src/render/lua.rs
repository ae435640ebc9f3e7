//! Lua language-server annotation renderer.
//!
//! Produces `---@meta` definition files:
//!
//! ```lua
//! ---
//! ---This function draws a filled circle...
//! ---@param x number # the `coordinates` of the circle's center
//! ---@param color? number # the `index` of the color (default: 0)
//! function circ(x, color) end
//! ```

use crate::error::Result;
use crate::model::{FunctionRecord, VarType};
use crate::render::Renderer;
use unicode_general_category::{get_general_category, GeneralCategory};

pub struct LuaRenderer;

impl Renderer for LuaRenderer {
    fn render(&self, _category: &str, records: &[FunctionRecord]) -> Result<String> {
        let mut out = String::from("---@meta\n\n");
        for record in records {
            out.push_str(&render_function(record));
            out.push_str("\n\n");
        }
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "lua"
    }
}

/// Render the doc comment and stub definition of one function.
pub fn render_function(record: &FunctionRecord) -> String {
    let mut out = String::from("---\n");
    out.push_str(&prefix_lines(&remove_non_printable(&record.description), "---"));
    out.push_str("\n---");

    for param in &record.signature.params {
        let (ty, description) = variable(record, &param.name);
        let optional = if param.is_optional() { "?" } else { "" };
        out.push_str(&format!(
            "\n---@param {}{} {} # {}",
            param.name, optional, ty, description
        ));
        if let Some(default) = param.default.as_deref() {
            if default != "nil" && !description.contains("default") {
                out.push_str(&format!(" (default: {})", default));
            }
        }
    }

    for ret in &record.signature.returns {
        let (ty, description) = variable(record, ret);
        out.push_str(&format!("\n---@return {} {} # {}", ty, ret, description));
    }

    let params: Vec<&str> = record
        .signature
        .params
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    out.push_str(&format!("\nfunction {}({}) end", record.name, params.join(", ")));
    out
}

/// Type and description of a variable; assembled records describe every one.
fn variable<'a>(record: &'a FunctionRecord, name: &str) -> (VarType, &'a str) {
    (
        record.types.get(name).copied().unwrap_or(VarType::Missing),
        record.descriptions.get(name).map_or("", String::as_str),
    )
}

fn prefix_lines(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn remove_non_printable(text: &str) -> String {
    text.chars().filter(|&c| c == '\n' || is_printable(c)).collect()
}

// Other, separator and unassigned categories print nothing, except the space.
fn is_printable(c: char) -> bool {
    match get_general_category(c) {
        GeneralCategory::Control
        | GeneralCategory::Format
        | GeneralCategory::Surrogate
        | GeneralCategory::PrivateUse
        | GeneralCategory::Unassigned
        | GeneralCategory::LineSeparator
        | GeneralCategory::ParagraphSeparator => false,
        GeneralCategory::SpaceSeparator => c == ' ',
        _ => true,
    }
}
