//! Variable description extraction from "Parameters" / "Returns" bullets.
//!
//! Accepted line shapes:
//!
//! ```text
//! * **text** : any string to be printed to the screen
//! * **x, y** : the [coordinates](coordinate) of the circle's center
//! * **x**, **y** : [coordinates](coordinate) of the top left of the clipping region
//! ```

use crate::error::{Error, Result};
use crate::model::{Section, VariableDescriptions};
use crate::overrides;
use regex::Regex;
use std::sync::LazyLock;

static RE_DESCRIPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\*-] \*\*(.+)\*\*\s*:\s*(.+)").unwrap());

static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());

const PARAMETERS_MARKER: &str = "**Parameters**";

/// Collect the descriptions of all parameters and return values of `section`.
///
/// Fails on any bullet line that does not follow the `**name** : text` shape.
pub fn extract(section: &Section) -> Result<VariableDescriptions> {
    let mut lines: Vec<&str> = Vec::new();

    if let Some(params) = section.subsection("Parameters") {
        lines.extend(params.body.lines());
    } else if let Some(pos) = section.body.find(PARAMETERS_MARKER) {
        lines.extend(section.body[pos + PARAMETERS_MARKER.len()..].trim().lines());
    }
    if let Some(returns) = section.subsection("Returns") {
        lines.extend(returns.body.lines());
    }

    let mut descriptions = VariableDescriptions::new();
    for line in lines.into_iter().filter(|l| is_bullet(l)) {
        let (names, description) = parse_line(line)?;
        for name in names {
            descriptions.insert(name, description.clone());
        }
    }
    Ok(descriptions)
}

fn is_bullet(line: &str) -> bool {
    line.starts_with("* ") || line.starts_with("- ")
}

/// Parse one description bullet into its variable names and shared text.
pub fn parse_line(line: &str) -> Result<(Vec<String>, String)> {
    let caps = RE_DESCRIPTION_LINE
        .captures(line)
        .ok_or_else(|| Error::structure("parameter description", line))?;

    let description = replace_relative_links(caps[2].trim_end());

    let mut names: Vec<String> = Vec::new();
    for raw in caps[1].split(',') {
        let name = raw
            .trim_matches(|c: char| c == ' ' || c == '*')
            .replace(' ', "_");
        match overrides::split_name(&name) {
            Some(parts) => names.extend(parts.iter().map(|p| p.to_string())),
            None => names.push(name),
        }
    }
    Ok((names, description))
}

/// Rewrite wiki-internal links to inline code, keeping external links.
///
/// `[coordinates](coordinate)` → `` `coordinates` ``
pub fn replace_relative_links(text: &str) -> String {
    RE_LINK
        .replace_all(text, |caps: &regex::Captures| {
            if caps[2].starts_with("http") {
                caps[0].to_string()
            } else {
                format!("`{}`", &caps[1])
            }
        })
        .into_owned()
}
