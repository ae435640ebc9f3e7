//! Function record assembly: page resolution plus the extraction pipeline.

use crate::error::{Error, Result};
use crate::extract::{description, signature, types};
use crate::fetch::Fetch;
use crate::model::{FunctionRecord, Section};
use crate::overrides;
use crate::section::group_by_sections;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Stub pages forward to another page: "Please see: [btn](btn)"
static RE_REDIRECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Please see: \[.+\]\((.+)\)").unwrap());

/// Fetch the page for `function` and return its top-level section.
///
/// Follows one "Please see" redirect when the page has no headings. When the
/// page yields several top-level sections, its top heading is one level too
/// deep (as on `rectb`), so the tree is rebuilt once without the first
/// character.
pub fn resolve_section(fetcher: &dyn Fetch, function: &str) -> Result<Section> {
    let mut contents = fetcher.fetch(function)?;
    let mut top = group_by_sections(&contents, 1);

    if top.is_empty() {
        let target = RE_REDIRECT
            .captures(&contents)
            .map(|caps| caps[1].trim().to_string())
            .ok_or_else(|| Error::Resolution(function.to_string()))?;
        debug!(function, %target, "following redirect");
        contents = fetcher.fetch(&target)?;
        top = group_by_sections(&contents, 1);
    }

    if top.len() > 1 {
        debug!(function, sections = top.len(), "rebuilding without leading character");
        let mut chars = contents.chars();
        chars.next();
        top = group_by_sections(chars.as_str(), 1);
    }

    top.into_iter()
        .next()
        .ok_or_else(|| Error::Resolution(function.to_string()))
}

/// Resolve and assemble the record for `function`.
pub fn assemble(fetcher: &dyn Fetch, function: &str) -> Result<FunctionRecord> {
    let root = resolve_section(fetcher, function)?;
    assemble_section(function, &root)
}

/// Run the extraction pipeline over an already resolved section.
pub fn assemble_section(function: &str, root: &Section) -> Result<FunctionRecord> {
    let signature = match overrides::signature_for(function) {
        Some(sig) => {
            debug!(function, "using signature override");
            sig
        }
        None => signature::extract(function, &root.body)?,
    };

    let mut descriptions = description::extract(root)?;
    for (name, text) in overrides::extra_descriptions_for(&root.name) {
        descriptions.insert(name.to_string(), text.to_string());
    }

    let undocumented = signature
        .params
        .iter()
        .map(|p| p.name.as_str())
        .chain(signature.returns.iter().map(String::as_str))
        .find(|name| !descriptions.contains_key(*name));
    if let Some(name) = undocumented {
        return Err(Error::structure(
            "variable descriptions",
            format!("section '{}' does not describe '{}'", root.name, name),
        ));
    }

    let types = types::infer(&descriptions, &signature.params);
    let description = function_description(root)?;

    Ok(FunctionRecord {
        name: function.to_string(),
        signature,
        descriptions,
        types,
        description,
    })
}

/// Free-text description from the "Description" subsection or an override.
fn function_description(root: &Section) -> Result<String> {
    if let Some(text) = overrides::description_for(&root.name) {
        debug!(section = %root.name, "using description override");
        return Ok(text.to_string());
    }
    let section = root.subsection("Description").ok_or_else(|| {
        Error::structure(
            "function description",
            format!("section '{}' has no Description subsection", root.name),
        )
    })?;
    Ok(description::replace_relative_links(section.text()))
}
