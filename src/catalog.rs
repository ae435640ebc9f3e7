//! Function inventory read from the wiki's `API` page.
//!
//! The page's top section has a "Functions" subsection whose own subsections
//! are categories, each listing one linked function name per line:
//!
//! ```text
//! ## Functions
//! ### Drawing
//! * [circ](circ) - draw a filled circle
//! * [cls](cls) - clear the screen
//! ```

use crate::error::{Error, Result};
use crate::fetch::Fetch;
use crate::model::Category;
use crate::section::group_by_sections;
use regex::Regex;
use std::sync::LazyLock;

pub const API_PAGE: &str = "API";

static RE_BRACKETED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// Fetch the `API` page and list its function categories.
pub fn list_function_names(fetcher: &dyn Fetch) -> Result<Vec<Category>> {
    let contents = fetcher.fetch(API_PAGE)?;
    parse_catalog(&contents)
}

/// Categories in page order, names lower-cased, functions in listing order.
pub fn parse_catalog(contents: &str) -> Result<Vec<Category>> {
    let top = group_by_sections(contents, 1)
        .into_iter()
        .next()
        .ok_or_else(|| Error::structure("function catalog", "no top-level section"))?;
    let functions = top.subsection("Functions").ok_or_else(|| {
        Error::structure(
            "function catalog",
            format!("section '{}' has no Functions subsection", top.name),
        )
    })?;

    functions
        .subsections
        .iter()
        .map(|category| -> Result<Category> {
            let functions = category
                .text()
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| {
                    RE_BRACKETED
                        .captures(line)
                        .map(|caps| caps[1].to_string())
                        .ok_or_else(|| Error::structure("function catalog", line))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Category {
                name: category.name.to_lowercase(),
                functions,
            })
        })
        .collect()
}
